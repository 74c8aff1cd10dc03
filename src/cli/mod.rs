//! Command-line layer: argument parsing, command dispatch and reporting.

use std::process::ExitCode;

use anyhow::Result;

mod args;
pub mod commands;
mod exit_status;
mod logging;
pub mod report;

pub use args::{Arguments, Command, CommonArgs, ExportArgs, GenerateArgs, MigrateArgs};
pub use exit_status::ExitStatus;
pub use logging::init_logging;

use commands::{
    CommandResult, export::export, generate::generate, init::init, migrate::migrate,
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(args)) => generate(args),
        Some(Command::Migrate(args)) => migrate(args),
        Some(Command::Export(args)) => export(args),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    init_logging(args.verbose());

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run(args)?;
    report::print(&result);

    Ok(result.status.into())
}
