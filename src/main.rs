use std::process::ExitCode;

use clap::Parser;
use locpull::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let Some(args) = Arguments::parse().with_command_or_help() else {
        return ExitStatus::Success.into();
    };

    match locpull::cli::run(args) {
        Ok(()) => ExitStatus::Success.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
