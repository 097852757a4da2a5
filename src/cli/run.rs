use std::{env, fs, path::Path};

use anyhow::Result;

use super::args::{Arguments, Command, PullCommand};
use crate::config::{CONFIG_FILE_NAME, default_config_json, load_config};
use crate::pipeline::ExportPipeline;
use crate::remote::RemoteClient;
use crate::reporter::ConsoleReporter;
use crate::sink::DiskSink;

/// Dispatch to the appropriate command handler.
pub fn run(Arguments { command }: Arguments) -> Result<()> {
    match command {
        Some(Command::Pull(cmd)) => pull(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn pull(cmd: PullCommand) -> Result<()> {
    let current_dir = env::current_dir()?;
    let mut config = load_config(cmd.args.config.as_deref(), &current_dir)?;
    if let Some(api_token) = cmd.args.api_token {
        config.api_token = api_token;
    }

    let client = RemoteClient::new(&config.api_token, &config.project_id);
    let mut sink = DiskSink;
    let mut reporter = ConsoleReporter;
    ExportPipeline::new(&config, &client, &mut sink, &mut reporter).pull()?;
    Ok(())
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    println!("Created {}", CONFIG_FILE_NAME);
    Ok(())
}
