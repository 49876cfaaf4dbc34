//! Demo binary for finmsg E2E testing.
//!
//! This binary exercises finmsg's public API for PTY-based integration
//! tests. Each subcommand demonstrates a specific feature.

use finmsg::{
    Mode, RunbookKind, TranscriptSink, format_message, nodes_to_json, render_message,
    render_runbook, set_transcript_sink, split_segments, transcript_block, transcript_line,
};
use std::env;
use std::sync::Arc;

/// Simple stdout sink for demo purposes.
struct StdoutSink;

impl TranscriptSink for StdoutSink {
    fn write_block(&self, rendered: &str) {
        println!("{}\n", rendered);
    }

    fn write_line(&self, rendered: &str) {
        println!("{}", rendered);
    }
}

/// A message exercising every construct the formatter understands.
const SAMPLE_MESSAGE: &str = r#"## Portfolio Summary

Your cash balance is **$1.2M** as of close.

### Open Positions
- AAPL: 500 shares
- MSFT: 300 shares

> Margin usage is within policy limits.

---

Run `report --daily` for the full breakdown, or use:

```python
total = sum(p.value for p in positions)
print(total)
```"#;

fn parse_mode(value: &str) -> Mode {
    if value == "simple" {
        Mode::Simple
    } else {
        Mode::Rich
    }
}

fn main() {
    // Force color output even in non-TTY (for test capture)
    colored::control::set_override(true);

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: finmsg-demo <command> [args...]");
        eprintln!("Commands:");
        eprintln!("  simple <text>");
        eprintln!("  rich <text>");
        eprintln!("  json <simple|rich> <text>");
        eprintln!("  segments <text>");
        eprintln!("  runbook <type> [text] [source]");
        eprintln!("  transcript");
        eprintln!("  sample <simple|rich>");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "simple" => {
            let text = args.get(2).map(|s| s.as_str()).unwrap_or("");
            print!("{}", render_message(text, Mode::Simple));
        }

        "rich" => {
            let text = args.get(2).map(|s| s.as_str()).unwrap_or("");
            print!("{}", render_message(text, Mode::Rich));
        }

        "json" => {
            let mode = parse_mode(args.get(2).map(|s| s.as_str()).unwrap_or("rich"));
            let text = args.get(3).map(|s| s.as_str()).unwrap_or("");
            let nodes = format_message(text, mode);
            println!("{}", nodes_to_json(&nodes));
        }

        "segments" => {
            let text = args.get(2).map(|s| s.as_str()).unwrap_or("");
            for segment in split_segments(text) {
                match segment {
                    finmsg::Segment::Text(t) => println!("text: {:?}", t),
                    finmsg::Segment::Code(c) => println!("code: {:?}", c),
                }
            }
        }

        "runbook" => {
            let kind = RunbookKind::parse(args.get(2).map(|s| s.as_str()).unwrap_or(""));
            let text = args
                .get(3)
                .map(|s| s.as_str())
                .unwrap_or("## Steps\n- check status\n- restart service");
            let sources: Vec<String> = args.get(4).map(|s| s.to_string()).into_iter().collect();
            print!("{}", render_runbook(text, kind, &sources));
        }

        "transcript" => {
            set_transcript_sink(Arc::new(StdoutSink));
            transcript_block(&render_message("**first** message", Mode::Simple));
            transcript_line("separator row");
            transcript_block(&render_message("second message", Mode::Simple));
        }

        "sample" => {
            let mode = parse_mode(args.get(2).map(|s| s.as_str()).unwrap_or("rich"));
            print!("{}", render_message(SAMPLE_MESSAGE, mode));
        }

        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}
