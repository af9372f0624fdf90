pub mod config;
pub mod formatting;
pub mod statistic;

pub use config::{AnalyzerConfig, ConstantOverrides, DEFAULT_ATONEMENT_LINK_WINDOW_MS};
pub use statistic::{
    RenderOptions, StatValue, Statistic, StatisticCategory, StatisticOrder, TooltipLine,
};
