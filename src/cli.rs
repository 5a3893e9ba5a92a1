use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "salat",
    version,
    about = "Show the active prayer period, its countdown, and progress"
)]
pub struct Cli {
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: Format,

    /// Directory to start searching for .salat.toml (default: current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Schedule and clock inputs shared by every time-based command.
#[derive(clap::Args, Clone)]
pub struct ScheduleArgs {
    /// Schedule file (JSON or .toml); `-` reads JSON from stdin
    #[arg(long, short = 's')]
    pub schedule: Option<PathBuf>,

    /// Evaluate at this local time instead of now: "YYYY-MM-DD HH:MM[:SS]"
    #[arg(long)]
    pub at: Option<String>,

    /// Show times on a 12-hour clock
    #[arg(long)]
    pub twelve_hour: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the active period with its countdown and progress
    #[command(alias = "now")]
    Status {
        #[command(flatten)]
        args: ScheduleArgs,
    },

    /// List the day's periods with start and end times
    #[command(alias = "ls")]
    Times {
        #[command(flatten)]
        args: ScheduleArgs,
    },

    /// Show the night vigil (Tahajjud) window
    Vigil {
        #[command(flatten)]
        args: ScheduleArgs,
    },

    /// Find the reference location nearest to a coordinate
    Nearest {
        /// Latitude in degrees, -90 to 90
        #[arg(long, allow_hyphen_values = true, value_parser = parse_latitude)]
        lat: f64,

        /// Longitude in degrees, -180 to 180
        #[arg(long, allow_hyphen_values = true, value_parser = parse_longitude)]
        lon: f64,

        /// Store the result as the selected location in the config file
        #[arg(long)]
        save: bool,
    },

    /// Refresh the status once per second
    #[command(alias = "w")]
    Watch {
        #[command(flatten)]
        args: ScheduleArgs,

        /// Stop after this many refreshes
        #[arg(long)]
        count: Option<u64>,
    },

    /// Generate a .salat.toml configuration file
    Init {
        /// Accept defaults without interactive prompts
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Print the JSON schema of the configuration file
    Schema,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_degrees(s: &str, limit: f64) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if !value.is_finite() || value.abs() > limit {
        return Err(format!("'{s}' must be between -{limit} and {limit}"));
    }
    Ok(value)
}

fn parse_latitude(s: &str) -> Result<f64, String> {
    parse_degrees(s, 90.0)
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    parse_degrees(s, 180.0)
}
