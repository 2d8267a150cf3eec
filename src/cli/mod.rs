//! Command-line interface layer.

mod args;
mod exit_status;
mod run;

pub use args::{Arguments, Command, ScanArgs, ScanCommand};
pub use exit_status::ExitStatus;

use anyhow::Result;

pub fn run_cli(args: Arguments) -> Result<()> {
    // with_command_or_help only returns arguments that carry a command
    let Some(Arguments {
        command: Some(command),
    }) = args.with_command_or_help()
    else {
        return Ok(());
    };

    run::run(command)
}
