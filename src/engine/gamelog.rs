//! Gamelog records: one JSON object per line

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::args::OutputSource;

/// Which pipe a bot line came from.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    Stdout,
    Stderr,
}

/// How a bot process ended.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotExit {
    /// `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub success: bool,
}

impl From<std::process::ExitStatus> for BotExit {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
            success: status.success(),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    /// Both bots exited cleanly
    Completed,
    /// At least one bot exited with a failure status
    BotError,
    Timeout,
}

impl MatchResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchResult::Completed => "completed",
            MatchResult::BotError => "bot_error",
            MatchResult::Timeout => "timeout",
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    MatchStart {
        bot_a: String,
        bot_b: String,
    },
    BotOutput {
        source: OutputSource,
        stream: Stream,
        line: String,
    },
    BotExit {
        source: OutputSource,
        #[serde(flatten)]
        exit: BotExit,
    },
    MatchEnd {
        result: MatchResult,
        bot_a: BotExit,
        bot_b: BotExit,
    },
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub ts: String,
    #[serde(flatten)]
    pub event: GameEvent,
}

impl GameRecord {
    pub fn now(event: GameEvent) -> Self {
        Self {
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            event,
        }
    }

    pub fn to_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
