//! The stdio frame loop: one JSON request line in, one decision line out.
//!
//! The loop never dies on bad input. A line that fails to decode gets the
//! canonical no-op reply and a warning on the log, and the match goes on;
//! only transport failures (a broken pipe, a poisoned stream) end the run.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use brawl_core::policy::DecisionEngine;
use brawl_core::protocol::{decode_request, encode_response, no_op_line};

/// Answer request lines from `input` until it runs dry. Returns the number
/// of reply lines written.
pub fn run_protocol_loop<R: BufRead, W: Write>(
    engine: &DecisionEngine,
    input: R,
    mut output: W,
) -> Result<u64> {
    let mut replies = 0u64;
    for line in input.lines() {
        let line = line.context("failed reading request line")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let reply = match decode_request(trimmed) {
            Ok(request) => {
                let (action, counter) =
                    engine.decide(&request.fighter, &request.opponent, request.counter);
                encode_response(action, counter).context("failed encoding response")?
            }
            Err(err) => {
                tracing::warn!("unreadable request line: {err}");
                no_op_line().to_string()
            }
        };

        writeln!(output, "{reply}").context("failed writing response line")?;
        output.flush().context("failed flushing response stream")?;
        replies += 1;
    }
    Ok(replies)
}

/// Serve the protocol on this process's stdin/stdout. Logging goes to
/// stderr; stdout carries nothing but reply lines.
pub fn serve_stdio(engine: &DecisionEngine) -> Result<u64> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_protocol_loop(engine, stdin.lock(), stdout.lock())
}
