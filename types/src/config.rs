//! Analyzer configuration, loaded from TOML.
//!
//! Every field has a default so an empty file (or no file) is valid.

use serde::{Deserialize, Serialize};

/// Default window for linking an Atonement heal to the damage that caused it
pub const DEFAULT_ATONEMENT_LINK_WINDOW_MS: i64 = 150;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Swap `.` and `,` when formatting numbers
    pub european_number_format: bool,

    /// Maximum gap between a damage event and the Atonement heal it triggers
    pub atonement_link_window_ms: i64,

    /// Analyzer names to leave out even when the combatant qualifies
    pub disabled: Vec<String>,

    /// Overrides for game constants that change between patches
    pub overrides: ConstantOverrides,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            european_number_format: false,
            atonement_link_window_ms: DEFAULT_ATONEMENT_LINK_WINDOW_MS,
            disabled: Vec::new(),
            overrides: ConstantOverrides::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn is_disabled(&self, analyzer: &str) -> bool {
        self.disabled.iter().any(|name| name.eq_ignore_ascii_case(analyzer))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantOverrides {
    pub penance_mana_cost: Option<i64>,
    pub thread_of_fate_base_duration_secs: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: AnalyzerConfig = toml::from_str("").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
        assert_eq!(config.atonement_link_window_ms, 150);
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let config: AnalyzerConfig = toml::from_str(
            r#"
            european_number_format = true
            disabled = ["master_of_destiny"]

            [overrides]
            penance_mana_cost = 800
            "#,
        )
        .unwrap();
        assert!(config.european_number_format);
        assert_eq!(config.atonement_link_window_ms, 150);
        assert_eq!(config.overrides.penance_mana_cost, Some(800));
        assert_eq!(config.overrides.thread_of_fate_base_duration_secs, None);
        assert!(config.is_disabled("Master_Of_Destiny"));
        assert!(!config.is_disabled("the_penitent_one"));
    }
}
