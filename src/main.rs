//! Binary entrypoint: read one match record JSON object from stdin, write
//! one MatchReport JSON object to stdout.
//!
//! Validation and parse failures produce a structured ErrorOutput object on
//! stdout; read failures exit non-zero with a message on stderr.

use scorecard_engine::types::ErrorOutput;
use scorecard_engine::{Engine, EngineError};
use std::io::{self, Read, Write};

fn main() {
  let mut raw = String::new();
  if let Err(e) = io::stdin().lock().read_to_string(&mut raw) {
    let _ = writeln!(io::stderr(), "scorecard-engine: read error: {}", e);
    std::process::exit(1);
  }

  let engine = Engine::with_defaults();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  match engine.process_json(&raw) {
    Ok(report) => {
      let _ = serde_json::to_writer(&mut out, &report);
      let _ = writeln!(out);
    }
    Err(e) => {
      let err = match &e {
        EngineError::Validation { field, reason } => {
          ErrorOutput::new(reason.clone()).with_field(field.clone())
        }
        _ => ErrorOutput::new(e.to_string()),
      };
      let _ = serde_json::to_writer(&mut out, &err);
      let _ = writeln!(out);
    }
  }

  let _ = out.flush();
}
