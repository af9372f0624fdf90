pub mod analyzers;
pub mod combat_log;
pub mod combatant;
pub mod config;
pub mod correlation;
pub mod error;
pub mod filter;
pub mod game_data;
pub mod host;
pub mod intervals;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use analyzers::{MasterOfDestiny, ThePenitentOne, build_host, default_analyzers};
pub use combat_log::{CombatEvent, EventId, EventKind, EventType, read_event_log};
pub use combatant::{Combatant, load_combatant};
pub use config::load_config;
pub use error::{Error, Result};
pub use host::{Analyzer, AnalyzerHost, EventContext, Listener, Module, RunStats, replay};
pub use intervals::BuffIntervalTracker;
