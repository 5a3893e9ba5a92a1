mod cli;
mod clock;
mod cmd;
mod config;
mod error;
mod geo;
mod init;
mod logging;
mod model;
mod output;
mod period;
mod progress;
mod schedule;
#[cfg(test)]
mod test_helpers;
mod vigil;
mod watch;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Command};
use cmd::{
    cmd_completions, cmd_nearest, cmd_schema, cmd_status, cmd_times, cmd_vigil, NearestOptions,
};
use config::Config;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        process::exit(2);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = match cli.root {
        Some(ref p) => p.clone(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let config = match cli.config {
        Some(ref config_path) => Config::from_file(config_path)?,
        None => Config::load(&root)?,
    };

    match cli.command {
        Command::Status { ref args } => cmd_status(&config, &cli.format, args),
        Command::Times { ref args } => cmd_times(&config, &cli.format, args),
        Command::Vigil { ref args } => cmd_vigil(&config, &cli.format, args),
        Command::Nearest { lat, lon, save } => {
            let opts = NearestOptions {
                root: &root,
                config_path: cli.config.as_deref(),
                latitude: lat,
                longitude: lon,
                save,
            };
            cmd_nearest(&config, &cli.format, opts)
        }
        Command::Watch { ref args, count } => watch::cmd_watch(&config, &cli.format, args, count),
        Command::Init { yes } => init::cmd_init(&root, yes),
        Command::Schema => cmd_schema(),
        Command::Completions { shell } => cmd_completions(shell),
    }
}
