// ffcheck-cli/src/main.rs
//
// Entry point for the `ffcheck` binary.
//
// Responsibilities:
// - Parsing command-line arguments (output controls only).
// - Configuring the env_logger backend with a message-only format so the
//   core library's narration reads as plain console output.
// - Installing a Ctrl-C handler that maps user cancellation to a clean
//   exit with status 1.
// - Running the validation flow inside a top-level catch-all so no fault
//   escapes without a final error message and exit status 1.
// - Mapping the overall verdict to the process exit code (0 pass, 1 fail).

use clap::Parser;
use ffcheck_core::{run_validation, terminal, CoreError, CoreResult, SystemCommandRunner};
use log::LevelFilter;
use std::io::Write;
use std::path::Path;
use std::process;

mod cli;
use cli::Cli;

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Message-only format: the core terminal module supplies glyphs and
    // severity itself. RUST_LOG still overrides the default filter.
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(env_logger::Target::Stdout)
        .init();
}

/// Resolves the inputs the orchestrator needs and runs the validation flow.
fn run() -> CoreResult<bool> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        CoreError::OperationFailed("could not determine the home directory".to_string())
    })?;

    let summary = run_validation(&SystemCommandRunner, &home_dir, Path::new("."))?;
    Ok(summary.passed)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        terminal::set_color(false);
    }

    if let Err(e) = ctrlc::set_handler(|| {
        // The handler runs on its own thread; print directly rather than
        // through the logger and exit with the failure status.
        println!();
        println!("Validation cancelled");
        process::exit(1);
    }) {
        log::warn!("Could not install Ctrl-C handler: {}", e);
    }

    // Top-level catch-all: every fault ends in a final error line and exit
    // status 1, never an unhandled crash.
    let exit_code = match std::panic::catch_unwind(run) {
        Ok(Ok(true)) => 0,
        Ok(Ok(false)) => 1,
        Ok(Err(e)) => {
            terminal::print_error(&format!("Unexpected error: {}", e));
            1
        }
        Err(_) => {
            terminal::print_error("Unexpected internal error");
            1
        }
    };

    process::exit(exit_code);
}
