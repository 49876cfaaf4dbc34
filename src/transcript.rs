//! Transcript output routing.
//!
//! The formatter itself is pure; where the rendered message ends up
//! (stdout, a session log file, a capture buffer in tests) is decided by
//! the embedding client through a [`TranscriptSink`]. The sink is a
//! process-global slot set once at startup.
//!
//! # Usage
//!
//! ```no_run
//! use finmsg::{TranscriptSink, set_transcript_sink, transcript_block};
//! use std::sync::Arc;
//!
//! struct StdoutSink;
//!
//! impl TranscriptSink for StdoutSink {
//!     fn write_block(&self, rendered: &str) {
//!         println!("{}\n", rendered);
//!     }
//!     fn write_line(&self, rendered: &str) {
//!         println!("{}", rendered);
//!     }
//! }
//!
//! set_transcript_sink(Arc::new(StdoutSink));
//! transcript_block("assistant: rendered answer goes here");
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Mute flag for tests that must not touch shared transcript files.
/// Defaults to false (transcript writes enabled).
static TRANSCRIPT_MUTED: AtomicBool = AtomicBool::new(false);

/// Suppress transcript writes. Call in tests to keep session logs clean.
pub fn mute_transcript() {
    TRANSCRIPT_MUTED.store(true, Ordering::SeqCst);
}

/// Re-enable transcript writes after [`mute_transcript`].
pub fn unmute_transcript() {
    TRANSCRIPT_MUTED.store(false, Ordering::SeqCst);
}

/// Whether transcript writes are currently suppressed.
pub fn is_transcript_muted() -> bool {
    TRANSCRIPT_MUTED.load(Ordering::SeqCst)
}

/// Destination for rendered message output.
///
/// * `write_block` - a complete rendered message, visually separated
/// * `write_line` - one row of continuous output (no extra separation)
pub trait TranscriptSink: Send + Sync {
    /// Write a complete rendered message block.
    fn write_block(&self, rendered: &str);
    /// Write a single rendered row.
    fn write_line(&self, rendered: &str);
}

static SINK: RwLock<Option<Arc<dyn TranscriptSink>>> = RwLock::new(None);

/// Install the global transcript sink. Replaces any previous sink.
pub fn set_transcript_sink(sink: Arc<dyn TranscriptSink>) {
    if let Ok(mut guard) = SINK.write() {
        *guard = Some(sink);
    }
}

/// The currently installed sink, if any.
pub fn current_transcript_sink() -> Option<Arc<dyn TranscriptSink>> {
    SINK.read().ok().and_then(|guard| guard.clone())
}

/// Remove the installed sink (test cleanup).
pub fn reset_transcript_sink() {
    if let Ok(mut guard) = SINK.write() {
        *guard = None;
    }
}

/// Route a rendered message block to the sink. No sink installed or muted
/// transcript means the call is a no-op; rendering never fails because
/// output has nowhere to go.
pub fn transcript_block(rendered: &str) {
    if is_transcript_muted() {
        return;
    }
    if let Some(sink) = current_transcript_sink() {
        sink.write_block(rendered);
    }
}

/// Route a single rendered row to the sink.
pub fn transcript_line(rendered: &str) {
    if is_transcript_muted() {
        return;
    }
    if let Some(sink) = current_transcript_sink() {
        sink.write_line(rendered);
    }
}
