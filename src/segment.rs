//! Fenced code block segmentation.
//!
//! Splits a raw message into alternating text and code segments on
//! triple-backtick fences, and derives a [`CodeBlock`] (optional language
//! label plus display code) from each code segment.
//!
//! Segmentation is lossless: code segments keep the raw text between the
//! fences untouched, so [`reconstruct`] can reproduce the original message
//! byte-for-byte.

use crate::node::CodeBlock;

/// The fence marker delimiting code blocks.
pub const FENCE: &str = "```";

/// Languages recognized as code block labels. A first line matching one of
/// these (trimmed, lowercased) is shown as a label instead of code.
///
/// This is a fixed closed set matched literally; there is no content-based
/// language detection.
pub const KNOWN_LANGUAGES: [&str; 15] = [
    "java",
    "javascript",
    "python",
    "cpp",
    "c",
    "html",
    "css",
    "sql",
    "ruby",
    "go",
    "rust",
    "php",
    "typescript",
    "jsx",
    "tsx",
];

/// A maximal span of the input, either plain text or the inside of a fence
/// pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text outside any fence pair, kept verbatim.
    Text(String),
    /// Raw content between an opening and closing fence, untrimmed.
    Code(String),
}

/// Split a message on fence pairs.
///
/// Only complete pairs with non-empty content are recognized; a trailing
/// unmatched opening fence (or a pair with nothing between the markers)
/// remains literal text. Empty input yields no segments. Non-empty input
/// yields an odd-length list alternating `Text`/`Code`/…/`Text`, where the
/// boundary text segments may be empty.
///
/// # Example
///
/// ```
/// use finmsg::segment::{split_segments, Segment};
///
/// let segments = split_segments("see ```python\nprint(1)\n``` above");
/// assert_eq!(segments.len(), 3);
/// assert!(matches!(&segments[1], Segment::Code(c) if c.contains("print")));
/// ```
pub fn split_segments(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut rest = 0;
    let mut search = 0;

    while let Some(rel) = text[search..].find(FENCE) {
        let open = search + rel;
        let inner = open + FENCE.len();
        let Some(close_rel) = text[inner..].find(FENCE) else {
            // Unterminated fence: everything from `rest` stays literal text.
            break;
        };
        if close_rel == 0 {
            // Nothing between the markers; the opening fence is literal.
            // The adjacent fence may still open a later block.
            search = inner;
            continue;
        }
        let close = inner + close_rel;
        segments.push(Segment::Text(text[rest..open].to_string()));
        segments.push(Segment::Code(text[inner..close].to_string()));
        rest = close + FENCE.len();
        search = rest;
    }

    segments.push(Segment::Text(text[rest..].to_string()));
    segments
}

/// Rebuild the original message from its segments, re-inserting fence
/// markers around code segments. Inverse of [`split_segments`].
pub fn reconstruct(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text(t) => out.push_str(t),
            Segment::Code(c) => {
                out.push_str(FENCE);
                out.push_str(c);
                out.push_str(FENCE);
            }
        }
    }
    out
}

impl CodeBlock {
    /// Derive a code block from the raw text between a fence pair.
    ///
    /// The content is trimmed; if its first line (trimmed, lowercased)
    /// exactly matches one of [`KNOWN_LANGUAGES`] and the block has at least
    /// two lines, that line becomes the label and the remaining lines become
    /// the display code.
    pub fn from_raw(raw: &str) -> Self {
        let content = raw.trim();
        let lines: Vec<&str> = content.split('\n').collect();
        let first = lines[0].trim().to_lowercase();

        if lines.len() > 1 && KNOWN_LANGUAGES.contains(&first.as_str()) {
            CodeBlock {
                language: Some(first),
                code: lines[1..].join("\n"),
            }
        } else {
            CodeBlock {
                language: None,
                code: content.to_string(),
            }
        }
    }
}
