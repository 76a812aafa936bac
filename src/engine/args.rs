//! Engine invocation arguments

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

/// A stream the engine can route: either bot's output, or the engine's own record.
#[derive(ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum OutputSource {
    BotA,
    BotB,
    Gamelog,
}

impl OutputSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputSource::BotA => "bot-a",
            OutputSource::BotB => "bot-b",
            OutputSource::Gamelog => "gamelog",
        }
    }
}

impl fmt::Display for OutputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Route a set of sources into one file.
///
/// Written on the command line as `SRC[,SRC...]=PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputMapping {
    pub sources: Vec<OutputSource>,
    pub path: PathBuf,
}

impl FromStr for OutputMapping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sources, path) = s
            .split_once('=')
            .ok_or_else(|| format!("expected SRC[,SRC...]=PATH, got '{}'", s))?;

        let path = path.trim();
        if path.is_empty() {
            return Err(format!("missing output path in '{}'", s));
        }

        let sources = sources
            .split(',')
            .map(str::trim)
            .filter(|src| !src.is_empty())
            .map(|src| OutputSource::from_str(src, true))
            .collect::<Result<Vec<_>, _>>()?;
        if sources.is_empty() {
            return Err(format!("no output sources in '{}'", s));
        }

        Ok(Self {
            sources,
            path: PathBuf::from(path),
        })
    }
}

pub fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("invalid timeout '{}': expected seconds", s))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("timeout must be positive, got '{}'", s));
    }
    Ok(Duration::from_secs_f64(secs))
}

/// Full engine configuration; also the flag surface of `mm engine`.
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct ArgConfig {
    /// Executable for the first bot
    #[arg(long = "bot-a", value_name = "PATH")]
    pub bot_a: PathBuf,

    /// Executable for the second bot
    #[arg(long = "bot-b", value_name = "PATH")]
    pub bot_b: PathBuf,

    /// Sources echoed to the terminal (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',', value_name = "SRC")]
    pub print: Option<Vec<OutputSource>>,

    /// Write sources to a file: SRC[,SRC...]=PATH (repeatable)
    #[arg(long, value_name = "SRC,..=PATH")]
    pub output: Option<Vec<OutputMapping>>,

    /// Stop the match after this many seconds
    #[arg(long, value_name = "SECS", value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// Working directory for both bots (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Echo printed sources on stderr so stdout stays machine-readable.
    #[arg(skip)]
    pub echo_to_stderr: bool,
}
