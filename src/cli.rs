//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose) are inherited by all subcommands.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use mm_cli::engine::args::parse_timeout;
use mm_cli::engine::ArgConfig;
use mm_cli::versions::{parse_version, Version};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// MechMania CLI - build, test and submit tournament bots
#[derive(Parser, Debug)]
#[command(name = "mm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session token in the project root
    Login,

    /// Package the strategy and submit it for compilation
    Submit {
        /// Return after upload instead of waiting for the build
        #[arg(long)]
        no_wait: bool,
    },

    /// List submitted bot versions
    #[command(alias = "list")]
    Versions,

    /// Change the active bot version
    Switch {
        /// Version number or 'latest' (prompted when omitted)
        #[arg(value_parser = parse_version)]
        version: Option<Version>,
    },

    /// Build the bot and play it against itself locally
    Run(RunArgs),

    /// Run the match engine directly
    Engine(ArgConfig),

    /// Update the CLI and merge starterpack changes
    Update {
        /// Only report whether updates are available
        #[arg(long)]
        check: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Do not echo bot output to the terminal
    #[arg(short, long)]
    pub quiet: bool,

    /// Stop the match after this many seconds
    #[arg(long, value_parser = parse_timeout)]
    pub timeout: Option<Duration>,
}
