//! Shared test helpers for finmsg tests.
//!
//! This module provides common utilities used across test files to reduce
//! duplication and ensure consistent test behavior.

// Allow dead code since not all test files use all helpers
#![allow(dead_code)]

use finmsg::{Inline, Node, TranscriptSink};
use std::sync::{Arc, Mutex};

// =============================================================================
// ANSI Stripping
// =============================================================================

/// Strip ANSI escape codes for content verification in tests.
///
/// This allows tests to verify text content without being affected by
/// color codes or other terminal formatting.
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip the escape sequence
            if chars.peek() == Some(&'[') {
                chars.next(); // consume '['
                // Skip until we hit a letter (the terminator)
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

// =============================================================================
// RAII Guards
// =============================================================================

/// RAII guard that disables colored output for tests.
///
/// Colors are disabled during the test and automatically restored when the
/// guard is dropped, even if the test panics.
pub struct DisableColors;

impl DisableColors {
    pub fn new() -> Self {
        colored::control::set_override(false);
        Self
    }
}

impl Default for DisableColors {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DisableColors {
    fn drop(&mut self) {
        colored::control::unset_override();
    }
}

/// RAII guard for transcript state cleanup.
///
/// Mutes the transcript when dropped, preventing test pollution even if a
/// test panics.
pub struct TranscriptGuard;

impl Drop for TranscriptGuard {
    fn drop(&mut self) {
        finmsg::mute_transcript();
    }
}

// =============================================================================
// Node Construction Helpers
// =============================================================================

pub fn plain(s: &str) -> Inline {
    Inline::Plain(s.into())
}

pub fn bold(s: &str) -> Inline {
    Inline::Bold(s.into())
}

pub fn code(s: &str) -> Inline {
    Inline::Code(s.into())
}

pub fn line(s: &str) -> Node {
    Node::Line { text: s.into() }
}

// =============================================================================
// Test Capture Sink
// =============================================================================

/// A test sink that captures all transcript output for verification.
///
/// Implements `TranscriptSink` and stores every write in a thread-safe
/// vector that can be inspected after the test.
pub struct CaptureSink {
    pub captured: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    /// Create a new capture sink and return both the sink and a handle to
    /// the captured writes.
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Self {
            captured: captured.clone(),
        };
        (sink, captured)
    }
}

impl Default for CaptureSink {
    fn default() -> Self {
        Self::new().0
    }
}

impl TranscriptSink for CaptureSink {
    fn write_block(&self, rendered: &str) {
        self.captured.lock().unwrap().push(rendered.to_string());
    }

    fn write_line(&self, rendered: &str) {
        self.captured.lock().unwrap().push(rendered.to_string());
    }
}
