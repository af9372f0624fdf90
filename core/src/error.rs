use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading analysis inputs.
///
/// Analysis itself never fails: missing data is skipped, not reported.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed event on line {line}: {source}")]
    MalformedEvent {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("event on line {line} at {timestamp}ms is earlier than the previous event at {previous}ms")]
    UnorderedEvents {
        line: usize,
        timestamp: i64,
        previous: i64,
    },

    #[error("event on line {line} has negative {field} ({value})")]
    NegativeAmount {
        line: usize,
        field: &'static str,
        value: i64,
    },

    #[error("malformed combatant snapshot: {0}")]
    MalformedCombatant(#[source] serde_json::Error),

    #[error("malformed analyzer config: {0}")]
    MalformedConfig(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
