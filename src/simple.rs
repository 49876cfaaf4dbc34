//! Plain ("simple") rendering: flat display lines with markup stripped.
//!
//! Used by the ordinary message view, which shows assistant text as plain
//! rows without structured headings or lists. Emoji and markdown punctuation
//! are removed in a fixed sequence of whole-text passes, then the result is
//! split into rows. Blank lines become [`Node::Spacer`] rows so the vertical
//! rhythm of the original message survives the stripping.

use std::sync::LazyLock;

use regex::Regex;

use crate::node::{CodeBlock, Node};
use crate::segment::{Segment, split_segments};

// Pictographic/symbol blocks commonly produced by assistant responses.
// Best-effort coverage, not an exhaustive emoji table.
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{1F300}-\x{1F9FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}]")
        .expect("emoji pattern is valid")
});

static HEADING_MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+").expect("heading pattern is valid"));

static QUOTE_MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^>\s*").expect("quote pattern is valid"));

static BULLET_MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[•\-*]\s+").expect("bullet pattern is valid"));

static RULE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[-*]{3,}$").expect("rule pattern is valid"));

static BOLD_WRAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern is valid"));

static CODE_WRAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("inline code pattern is valid"));

/// Strip emoji and markdown punctuation from a text segment.
///
/// Passes run in a fixed order over the whole segment: emoji, heading
/// markers, quote markers, bullet markers, rule lines, bold unwrap, inline
/// code unwrap. The output contains no markers a second pass would touch.
pub(crate) fn strip_markup(text: &str) -> String {
    let text = EMOJI.replace_all(text, "");
    let text = HEADING_MARK.replace_all(&text, "");
    let text = QUOTE_MARK.replace_all(&text, "");
    let text = BULLET_MARK.replace_all(&text, "");
    let text = RULE_LINE.replace_all(&text, "");
    let text = BOLD_WRAP.replace_all(&text, "${1}");
    let text = CODE_WRAP.replace_all(&text, "${1}");
    text.into_owned()
}

/// Format a whole message in simple mode.
///
/// Text segments become [`Node::Line`] rows (blank lines become
/// [`Node::Spacer`]); code segments become [`Node::Code`] blocks exactly as
/// in rich mode.
pub fn format_simple(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();

    for segment in split_segments(text) {
        match segment {
            Segment::Code(raw) => nodes.push(Node::Code(CodeBlock::from_raw(&raw))),
            Segment::Text(content) => {
                if content.is_empty() {
                    continue;
                }
                for line in strip_markup(&content).split('\n') {
                    if line.trim().is_empty() {
                        nodes.push(Node::Spacer);
                    } else {
                        nodes.push(Node::Line {
                            text: line.to_string(),
                        });
                    }
                }
            }
        }
    }

    nodes
}
