//! JSON-lines event log loading.
//!
//! One event per line. Blank lines and lines starting with `#` are skipped.
//! Timestamps must be non-decreasing; dispatch relies on it. Damage and heal
//! magnitudes must not be negative.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::CombatEvent;

pub fn read_event_log<P: AsRef<Path>>(path: P) -> Result<Vec<CombatEvent>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let events = parse_event_log(&content)?;
    tracing::debug!(path = %path.display(), count = events.len(), "Loaded event log");
    Ok(events)
}

pub fn parse_event_log(content: &str) -> Result<Vec<CombatEvent>> {
    let mut events = Vec::new();
    let mut previous: Option<i64> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_number = idx + 1;
        let event: CombatEvent = serde_json::from_str(line).map_err(|source| {
            Error::MalformedEvent {
                line: line_number,
                source,
            }
        })?;

        if let Some((field, value)) = event.negative_magnitude() {
            return Err(Error::NegativeAmount {
                line: line_number,
                field,
                value,
            });
        }

        if let Some(prev) = previous
            && event.timestamp < prev
        {
            return Err(Error::UnorderedEvents {
                line: line_number,
                timestamp: event.timestamp,
                previous: prev,
            });
        }
        previous = Some(event.timestamp);
        events.push(event);
    }

    Ok(events)
}
