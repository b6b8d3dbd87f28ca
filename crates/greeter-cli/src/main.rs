//! # hello
//!
//! Prints its own invocation as a JSON record:
//!
//! ```text
//! $ hello foo bar
//! {"Hello":"World","args":["hello","foo","bar"]}
//! ```
//!
//! No argument is interpreted; `--help` is echoed like any other word.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` and configuration (file + env + defaults).
//! 2. Initialise the tracing subscriber (logging, stderr or file).
//! 3. Capture the argument vector.
//! 4. Greet, render, and write the record through the adapters.
//! 5. Report any [`CliError`] on stderr.
//!
//! ## Exit status
//!
//! Always 0. Failures are reported on stderr and never change the status.
//! A closed stdout pipe is not reported at all.

use std::process::ExitCode;

use tracing::{debug, info, instrument};

use greeter_adapters::{JsonRenderer, StdoutWriter};
use greeter_core::{application::GreetService, domain::ArgumentList};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
};

mod config;
mod error;
mod logging;

fn main() -> ExitCode {
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Load configuration ─────────────────────────────────────────────
    // A broken config must not stop the greeting; fall back to defaults and
    // report once logging is up.
    let (config, config_error) = match AppConfig::load() {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    let (_log_guard, verbose) = match init_logging(&config.logging) {
        Ok(guard) => (guard, logging::debug_enabled()),
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            (None, config.logging.is_verbose())
        }
    };

    if let Some(err) = config_error {
        err.log();
    }

    // ── 3. Capture arguments ──────────────────────────────────────────────
    let args = ArgumentList::from_os_args(std::env::args_os());
    debug!(count = args.len(), "arguments captured");

    // ── 4. Run + 5. Error handling ────────────────────────────────────────
    match run(args) {
        Ok(()) => info!("greeting complete"),
        Err(e) => handle_error(e, verbose),
    }

    ExitCode::SUCCESS
}

/// Wire the production adapters and greet.
#[instrument(skip_all)]
fn run(args: ArgumentList) -> CliResult<()> {
    let service = GreetService::new(Box::new(JsonRenderer::new()), Box::new(StdoutWriter::new()));
    service.run(args)?;
    Ok(())
}

/// Report a `CliError` on stderr. The exit status stays 0.
fn handle_error(err: CliError, verbose: bool) {
    // `hello | head -c0` is not a failure.
    if err.is_broken_pipe() {
        debug!("stdout closed before the record was written");
        return;
    }

    err.log();

    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");
}
