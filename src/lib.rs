//! Message formatting for a financial-assistant chat client.
//!
//! finmsg turns a raw chat message (a markdown subset: fenced code blocks,
//! `##`/`###` headings, blockquotes, bullet lists, rules, bold and inline
//! code spans) into an ordered sequence of typed display nodes, in one of
//! two modes:
//!
//! - [`Mode::Rich`] - structured nodes for the runbook/structured view
//! - [`Mode::Simple`] - flat display lines with markup and emoji stripped
//!
//! Formatting is a pure, total transform: any string in, nodes out, no
//! failure modes. Messages arrive whole (never streamed), so every call
//! recomputes from scratch.
//!
//! # Modules
//!
//! - [`segment`] - fenced code block splitting and label extraction
//! - [`inline`] - bold/inline-code span parsing within a line
//! - [`rich`] / [`simple`] - the two rendering modes
//! - [`node`] - display node types (serializable for web-view consumers)
//! - [`render`] - ANSI terminal rendering of node sequences
//! - [`runbook`] - runbook card presentational variant
//! - [`transcript`] - sink trait and global routing for rendered output
//!
//! # Example
//!
//! ```
//! use finmsg::{format_message, Mode, Node};
//!
//! let nodes = format_message("## Summary\n- cash: **1.2M**", Mode::Rich);
//! assert!(matches!(nodes[0], Node::Heading { level: 2, .. }));
//! assert!(matches!(nodes[1], Node::List { .. }));
//! ```

pub mod inline;
pub mod node;
pub mod render;
pub mod rich;
pub mod runbook;
pub mod segment;
pub mod simple;
pub mod transcript;

pub use inline::parse_inline;
pub use node::{CodeBlock, Inline, Mode, Node};
pub use render::{detect_terminal_width, render_message, render_node, render_nodes};
pub use rich::format_rich;
pub use runbook::{RunbookKind, render_runbook};
pub use segment::{KNOWN_LANGUAGES, Segment, reconstruct, split_segments};
pub use simple::format_simple;
pub use transcript::{
    TranscriptSink, current_transcript_sink, is_transcript_muted, mute_transcript,
    reset_transcript_sink, set_transcript_sink, transcript_block, transcript_line,
    unmute_transcript,
};

/// Format a message into display nodes.
///
/// Empty input (the boundary mapping for an absent message) yields an empty
/// node sequence in both modes.
pub fn format_message(text: &str, mode: Mode) -> Vec<Node> {
    match mode {
        Mode::Simple => simple::format_simple(text),
        Mode::Rich => rich::format_rich(text),
    }
}

/// Serialize a node sequence for a web-view consumer.
pub fn nodes_to_json(nodes: &[Node]) -> serde_json::Value {
    serde_json::to_value(nodes).unwrap_or(serde_json::Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_dispatches_modes() {
        let text = "# Hi\n**bold**";
        assert_eq!(
            format_message(text, Mode::Simple),
            vec![
                Node::Line { text: "Hi".into() },
                Node::Line { text: "bold".into() },
            ]
        );
        // Rich mode has no level-1 headings; `# Hi` is a paragraph line.
        assert!(matches!(
            format_message(text, Mode::Rich)[0],
            Node::Paragraph { .. }
        ));
    }

    #[test]
    fn test_empty_input_both_modes() {
        assert!(format_message("", Mode::Simple).is_empty());
        assert!(format_message("", Mode::Rich).is_empty());
    }

    #[test]
    fn test_nodes_to_json_array() {
        let nodes = format_message("hello", Mode::Rich);
        let json = nodes_to_json(&nodes);
        assert!(json.is_array());
        assert_eq!(json[0]["type"], "paragraph");
    }
}
