//! `otolith` binary entry point.
//!
//! # Responsibility
//! - Parse configuration, start logging, and wire the repository into the shell.
//! - Keep all record semantics inside `otolith_core`.

mod config;
mod shell;

use clap::Parser;
use config::{absolute_dir, Cli};
use log::error;
use otolith_core::{default_log_level, init_logging, RecordRepository, TextBarChartRenderer};
use shell::Shell;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let started = absolute_dir(log_dir)
            .map_err(|err| err.to_string())
            .and_then(|dir| init_logging(level, dir));
        if let Err(err) = started {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let repo = RecordRepository::new(cli.format.build());
    let stdin = io::stdin();
    let mut shell = Shell::new(
        stdin.lock(),
        io::stdout(),
        repo,
        TextBarChartRenderer::new(io::stdout()),
        cli.data,
    )
    .save_on_exit(cli.output);

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=shell_exit module=cli status=error error={err}");
            eprintln!("terminal error: {err}");
            ExitCode::FAILURE
        }
    }
}
