//! Structured ("rich") rendering: typed nodes for the runbook view.
//!
//! A single forward scan classifies each line of a text segment as a
//! heading, rule, blockquote, list item or paragraph. The only place the
//! scan re-examines a line is when a non-bullet line ends a list: that line
//! is left for the outer loop to classify.

use crate::inline::parse_inline;
use crate::node::{CodeBlock, Node};
use crate::segment::{Segment, split_segments};

/// Characters that open a list item line.
const BULLETS: [char; 3] = ['•', '-', '*'];

/// Format a whole message in rich mode.
///
/// Text segments become structured nodes; code segments become
/// [`Node::Code`] blocks.
pub fn format_rich(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();

    for segment in split_segments(text) {
        match segment {
            Segment::Code(raw) => nodes.push(Node::Code(CodeBlock::from_raw(&raw))),
            Segment::Text(content) => scan_text(&content, &mut nodes),
        }
    }

    nodes
}

/// Classify the lines of one text segment, appending nodes in line order.
fn scan_text(content: &str, nodes: &mut Vec<Node>) {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        if trimmed.is_empty() {
            i += 1;
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("###") {
            nodes.push(Node::Heading {
                level: 3,
                spans: parse_inline(rest.trim()),
            });
            i += 1;
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("##") {
            nodes.push(Node::Heading {
                level: 2,
                spans: parse_inline(rest.trim()),
            });
            i += 1;
            continue;
        }

        if trimmed == "---" || trimmed == "***" {
            nodes.push(Node::Rule);
            i += 1;
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('>') {
            nodes.push(Node::Blockquote {
                spans: parse_inline(rest.trim()),
            });
            i += 1;
            continue;
        }

        if trimmed.starts_with(BULLETS) {
            let mut items = Vec::new();
            while i < lines.len() {
                let item_line = lines[i].trim();
                if let Some(rest) = item_line.strip_prefix(BULLETS) {
                    items.push(parse_inline(rest.trim()));
                    i += 1;
                } else if item_line.is_empty() {
                    // A single blank line closes the current list.
                    i += 1;
                    break;
                } else {
                    // Leave the line for the outer scan.
                    break;
                }
            }
            nodes.push(Node::List { items });
            continue;
        }

        // Paragraphs keep the untrimmed line.
        nodes.push(Node::Paragraph {
            spans: parse_inline(line),
        });
        i += 1;
    }
}
