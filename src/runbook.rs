//! Runbook card rendering.
//!
//! Runbook answers arrive tagged with a category; the card wraps the
//! rich-rendered body in a bordered header ("Procedure Guide" plus a
//! category badge) and, when retrieval sources are attached, a footer
//! naming the first source document.

use colored::Colorize;

use crate::node::Mode;
use crate::render::render_message;

/// Runbook category carried alongside the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunbookKind {
    Operational,
    Incident,
    SystemAdmin,
    /// Anything the server sends that is not a known category.
    Other,
}

impl RunbookKind {
    /// Parse the wire value sent by the answer endpoint.
    pub fn parse(value: &str) -> Self {
        match value {
            "operational" => RunbookKind::Operational,
            "incident" => RunbookKind::Incident,
            "system_admin" => RunbookKind::SystemAdmin,
            _ => RunbookKind::Other,
        }
    }

    /// Badge text shown in the card header.
    pub fn title(self) -> &'static str {
        match self {
            RunbookKind::Operational => "Operational Procedures",
            RunbookKind::Incident => "Incident Response",
            RunbookKind::SystemAdmin => "System Administration",
            RunbookKind::Other => "TRM Resource",
        }
    }
}

/// Render a runbook card: header, rich-rendered body, optional source
/// footer. Only the first source is shown, underscores replaced with
/// spaces.
pub fn render_runbook(content: &str, kind: RunbookKind, sources: &[String]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "┌─ {} [{}]\n",
        "Procedure Guide".bold(),
        kind.title().cyan()
    ));

    for line in render_message(content, Mode::Rich).lines() {
        out.push_str(&format!("│ {line}\n"));
    }

    match sources.first() {
        Some(source) => {
            let name = source.replace('_', " ");
            out.push_str(&format!("└─ Source: {}\n", name.dimmed()));
        }
        None => out.push_str("└─\n"),
    }

    out
}
