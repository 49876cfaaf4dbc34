//! Display node types produced by the formatter.
//!
//! A formatted message is an ordered `Vec<Node>`. Rich mode emits the
//! structured variants (headings, lists, blockquotes, paragraphs, rules);
//! simple mode emits flat [`Node::Line`] / [`Node::Spacer`] rows. Code blocks
//! appear in both modes as [`Node::Code`].
//!
//! All types are plain owned values and serialize with an internal `type` tag
//! so a web view can consume the node tree as JSON.

use serde::Serialize;

/// Rendering mode selected by the message view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Flat display lines with markdown punctuation stripped.
    Simple,
    /// Structured nodes for the runbook/structured view.
    Rich,
}

/// An inline piece of a single line: plain text, a bold span, or a code span.
///
/// Pieces concatenate in original order with no text loss; the `**` and
/// backtick markers themselves are consumed during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Plain(String),
    Bold(String),
    Code(String),
}

impl Inline {
    /// The text carried by this piece, without markers.
    pub fn text(&self) -> &str {
        match self {
            Inline::Plain(s) | Inline::Bold(s) | Inline::Code(s) => s,
        }
    }
}

/// A fenced code block with an optional language label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    /// Language label, present only when the first line of the block matched
    /// the known-language set. Already stripped from `code`.
    pub language: Option<String>,
    /// The display code, trimmed of surrounding whitespace.
    pub code: String,
}

/// One renderable unit of a formatted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Section heading. Rich mode produces levels 2 and 3 only.
    Heading { level: u8, spans: Vec<Inline> },
    /// Ordinary paragraph line.
    Paragraph { spans: Vec<Inline> },
    /// Quoted line (`> ...`).
    Blockquote { spans: Vec<Inline> },
    /// Unordered list; one entry per bullet line.
    List { items: Vec<Vec<Inline>> },
    /// Horizontal rule (`---` or `***` on its own line).
    Rule,
    /// Fenced code block.
    Code(CodeBlock),
    /// Simple-mode display row, markers already stripped.
    Line { text: String },
    /// Simple-mode half-height gap standing in for a blank line.
    Spacer,
}

impl Node {
    /// Convenience constructor for a paragraph from inline pieces.
    pub fn paragraph(spans: Vec<Inline>) -> Self {
        Node::Paragraph { spans }
    }
}
