//! Command-line harness: reads the command stream from stdin, applies each
//! line to an [`Engine`], and writes the rendered output line to stdout.
//!
//! Everything interesting happens in the library; this binary is the thin
//! stdin/stdout/process-exit boundary the specification treats as an
//! external collaborator.

use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use highway_stations::command;
use highway_stations::engine::Engine;

/// The one recoverable failure mode at the process boundary: the input or
/// output stream itself misbehaves. Anything below this (malformed
/// commands) is handled inside the library, per `DESIGN.md`'s Open
/// Question 3.
#[derive(Debug, Error)]
enum HarnessError {
    #[error("failed to read from stdin: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write to stdout: {0}")]
    Write(#[source] io::Error),
}

fn run() -> Result<(), HarnessError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = line.map_err(HarnessError::Read)?;
        if let Some(output) = command::run_line(&mut engine, &line) {
            writeln!(out, "{output}").map_err(HarnessError::Write)?;
        }
    }

    out.flush().map_err(HarnessError::Write)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "fatal I/O error");
            ExitCode::FAILURE
        }
    }
}
