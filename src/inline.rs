//! Inline markdown span parsing for a single line.
//!
//! Code spans are split out first, then bold spans inside the remaining
//! plain pieces. Spans are matched left to right, non-overlapping and
//! non-greedy; every input character lands in exactly one output piece.

use std::sync::LazyLock;

use regex::Regex;

use crate::node::Inline;

static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code span pattern is valid"));

static BOLD_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold span pattern is valid"));

/// Parse one line into ordered [`Inline`] pieces.
///
/// An empty line yields no pieces; a line without markers yields a single
/// `Plain` piece equal to the input.
///
/// # Example
///
/// ```
/// use finmsg::inline::parse_inline;
/// use finmsg::node::Inline;
///
/// let pieces = parse_inline("run `ls` **now**");
/// assert_eq!(
///     pieces,
///     vec![
///         Inline::Plain("run ".into()),
///         Inline::Code("ls".into()),
///         Inline::Plain(" ".into()),
///         Inline::Bold("now".into()),
///     ]
/// );
/// ```
pub fn parse_inline(line: &str) -> Vec<Inline> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for caps in CODE_SPAN.captures_iter(line) {
        let whole = caps.get(0).expect("capture group 0 always present");
        if whole.start() > last {
            push_bold_split(&line[last..whole.start()], &mut pieces);
        }
        pieces.push(Inline::Code(caps[1].to_string()));
        last = whole.end();
    }

    if last < line.len() {
        push_bold_split(&line[last..], &mut pieces);
    }

    pieces
}

/// Split a plain piece on bold spans, appending to `pieces`.
fn push_bold_split(text: &str, pieces: &mut Vec<Inline>) {
    let mut last = 0;

    for caps in BOLD_SPAN.captures_iter(text) {
        let whole = caps.get(0).expect("capture group 0 always present");
        if whole.start() > last {
            pieces.push(Inline::Plain(text[last..whole.start()].to_string()));
        }
        pieces.push(Inline::Bold(caps[1].to_string()));
        last = whole.end();
    }

    if last < text.len() {
        pieces.push(Inline::Plain(text[last..].to_string()));
    }
}
