//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `pull`: Export translations and write them over the configured files
//! - `init`: Initialize the locpull configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Path to the configuration file (default: discover .locpullrc.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API token (overrides the configuration file)
    #[arg(long, env = "LOCPULL_API_TOKEN")]
    pub api_token: Option<String>,
}

#[derive(Debug, Args)]
pub struct PullCommand {
    #[command(flatten)]
    pub args: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export translations and overwrite the configured resource files
    Pull(PullCommand),
    /// Initialize a new .locpullrc.json configuration file
    Init,
}
