//! Loading [`AnalyzerConfig`] from TOML.

use std::fs;
use std::path::Path;

use tally_types::AnalyzerConfig;

use crate::error::{Error, Result};

pub fn parse_config(content: &str) -> Result<AnalyzerConfig> {
    Ok(toml::from_str(content)?)
}

/// Load a config file, or the defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<AnalyzerConfig> {
    let Some(path) = path else {
        return Ok(AnalyzerConfig::default());
    };
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), ?config, "Loaded analyzer config");
    Ok(config)
}
