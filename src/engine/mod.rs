//! Local match engine
//!
//! Runs two bot executables side by side, routes each one's output to the
//! terminal or to files, and writes an NDJSON gamelog of the match.
//!
//! ## Structure
//!
//! - `args` - `ArgConfig` and output routing, shared with the `engine` subcommand
//! - `gamelog` - record types written to the `gamelog` source
//! - `runner` - process supervision

pub mod args;
pub mod gamelog;
mod runner;

pub use args::{ArgConfig, OutputMapping, OutputSource};
pub use gamelog::{BotExit, MatchResult};
pub use runner::{run, MatchOutcome};
