//! Terminal rendering of display nodes.
//!
//! All colored/styled output goes through the helpers here, keeping ANSI
//! concerns testable and out of the parsing modules. Rendering is a pure
//! function of the node sequence and a column width.

use colored::Colorize;

use crate::node::{CodeBlock, Inline, Mode, Node};

/// Default width when terminal size cannot be detected (e.g., piped output).
const DEFAULT_WIDTH: usize = 120;

/// Longest rule drawn regardless of terminal width.
const MAX_RULE_WIDTH: usize = 60;

/// Detect the current terminal width, falling back to [`DEFAULT_WIDTH`].
pub fn detect_terminal_width() -> usize {
    let (width, _) = termimad::terminal_size();
    let width = width as usize;
    if width == 0 { DEFAULT_WIDTH } else { width }
}

/// Render inline pieces to a styled string.
fn render_spans(spans: &[Inline]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Inline::Plain(s) => out.push_str(s),
            Inline::Bold(s) => out.push_str(&s.bold().to_string()),
            Inline::Code(s) => out.push_str(&s.cyan().to_string()),
        }
    }
    out
}

/// Render a code block with its optional language label.
fn render_code_block(block: &CodeBlock) -> String {
    let mut out = String::new();
    if let Some(language) = &block.language {
        out.push_str(&format!("{}\n", language.dimmed()));
    }
    for line in block.code.split('\n') {
        out.push_str(&format!("  {}\n", line.cyan()));
    }
    out
}

/// Render one node to its terminal form, including the trailing newline.
pub fn render_node(node: &Node, width: usize) -> String {
    match node {
        Node::Heading { level, spans } => {
            let text = render_spans(spans);
            if *level == 2 {
                format!("{}\n", text.bold().underline())
            } else {
                format!("{}\n", text.bold())
            }
        }
        Node::Paragraph { spans } => format!("{}\n", render_spans(spans)),
        Node::Blockquote { spans } => {
            format!("{} {}\n", "│".dimmed(), render_spans(spans).dimmed())
        }
        Node::List { items } => {
            let mut out = String::new();
            for item in items {
                out.push_str(&format!("• {}\n", render_spans(item)));
            }
            out
        }
        Node::Rule => {
            let len = width.min(MAX_RULE_WIDTH).max(1);
            format!("{}\n", "─".repeat(len).dimmed())
        }
        Node::Code(block) => render_code_block(block),
        Node::Line { text } => format!("{text}\n"),
        Node::Spacer => "\n".to_string(),
    }
}

/// Render a node sequence to a terminal string.
pub fn render_nodes(nodes: &[Node], width: usize) -> String {
    nodes.iter().map(|n| render_node(n, width)).collect()
}

/// Format and render a message in one step, using the detected terminal
/// width. Empty input renders to an empty string.
pub fn render_message(text: &str, mode: Mode) -> String {
    let nodes = crate::format_message(text, mode);
    render_nodes(&nodes, detect_terminal_width())
}
