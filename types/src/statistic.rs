//! Presentational summary produced by an analyzer.
//!
//! A `Statistic` carries only values and placement hints. Rendering is left
//! to whoever consumes it (the CLI text renderer, JSON output, a UI).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::formatting::{format_compact, format_decimal, format_per_second, format_thousands};

/// Panel a statistic is grouped under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticCategory {
    General,
    Items,
    Talents,
    HeroTalents,
}

impl StatisticCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Items => "Items",
            Self::Talents => "Talents",
            Self::HeroTalents => "Hero Talents",
        }
    }
}

/// Ordering hint within a panel. Core statistics sort before optional ones,
/// then by their index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tier", content = "index", rename_all = "snake_case")]
pub enum StatisticOrder {
    Core(u32),
    Optional(u32),
}

impl StatisticOrder {
    fn rank(&self) -> (u8, u32) {
        match *self {
            Self::Core(n) => (0, n),
            Self::Optional(n) => (1, n),
        }
    }
}

impl Ord for StatisticOrder {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for StatisticOrder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One line of the statistic body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatValue {
    HealingDone { amount: i64 },
    DamageDone { amount: i64 },
    ManaGained { amount: i64 },
    /// A duration in seconds with a short caption ("extra duration granted")
    Seconds { amount: f64, caption: String },
}

/// Labelled tooltip entry, e.g. `Direct Healing: 12,345`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipLine {
    pub label: String,
    pub value: String,
}

impl TooltipLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    /// Spell or talent the tile is titled with
    pub spell_id: i64,
    pub label: String,
    pub category: StatisticCategory,
    pub position: StatisticOrder,
    pub values: Vec<StatValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tooltip: Vec<TooltipLine>,
}

/// Knobs for the plain text renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub european: bool,
    /// Fight length used for per-second rates; rates are omitted when zero
    pub fight_ms: i64,
}

impl StatValue {
    pub fn render(&self, opts: RenderOptions) -> String {
        let eu = opts.european;
        let with_rate = |amount: i64, noun: &str, rate: &str| {
            if opts.fight_ms > 0 {
                format!(
                    "{} {} ({} {})",
                    format_compact(amount, eu),
                    noun,
                    format_per_second(amount, opts.fight_ms, eu),
                    rate
                )
            } else {
                format!("{} {}", format_compact(amount, eu), noun)
            }
        };
        match self {
            Self::HealingDone { amount } => with_rate(*amount, "healing", "HPS"),
            Self::DamageDone { amount } => with_rate(*amount, "damage", "DPS"),
            Self::ManaGained { amount } => format!("{} mana", format_thousands(*amount, eu)),
            Self::Seconds { amount, caption } => {
                format!("{} sec {}", format_decimal(*amount, 1, eu), caption)
            }
        }
    }
}

impl Statistic {
    /// Multi-line text block: header, one line per value, then tooltip.
    pub fn render_text(&self, opts: RenderOptions) -> String {
        let mut out = format!("[{}] {}\n", self.category.label(), self.label);
        for value in &self.values {
            out.push_str("  ");
            out.push_str(&value.render(opts));
            out.push('\n');
        }
        for line in &self.tooltip {
            out.push_str(&format!("    {}: {}\n", line.label, line.value));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Statistic {
        Statistic {
            spell_id: 1,
            label: "Sample".to_string(),
            category: StatisticCategory::Items,
            position: StatisticOrder::Optional(13),
            values: vec![
                StatValue::HealingDone { amount: 12_340 },
                StatValue::ManaGained { amount: 2_000 },
            ],
            tooltip: vec![TooltipLine::new("Direct Healing", "12,340")],
        }
    }

    #[test]
    fn core_sorts_before_optional() {
        let mut orders = vec![
            StatisticOrder::Optional(1),
            StatisticOrder::Core(9),
            StatisticOrder::Core(5),
        ];
        orders.sort();
        assert_eq!(
            orders,
            vec![
                StatisticOrder::Core(5),
                StatisticOrder::Core(9),
                StatisticOrder::Optional(1)
            ]
        );
    }

    #[test]
    fn render_text_includes_tooltip() {
        let text = sample().render_text(RenderOptions::default());
        assert!(text.starts_with("[Items] Sample\n"));
        assert!(text.contains("12.34K healing\n"));
        assert!(text.contains("2,000 mana"));
        assert!(text.contains("    Direct Healing: 12,340"));
    }

    #[test]
    fn render_rate_when_fight_length_known() {
        let opts = RenderOptions {
            european: false,
            fight_ms: 10_000,
        };
        let line = StatValue::DamageDone { amount: 50_000 }.render(opts);
        assert_eq!(line, "50.00K damage (5,000 DPS)");
    }

    #[test]
    fn seconds_render_one_decimal() {
        let value = StatValue::Seconds {
            amount: 17.5,
            caption: "average buff duration".to_string(),
        };
        assert_eq!(
            value.render(RenderOptions::default()),
            "17.5 sec average buff duration"
        );
    }

    #[test]
    fn serializes_with_tagged_values() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains(r#""kind":"healing_done""#));
        assert!(json.contains(r#""tier":"optional""#));
    }
}
