//! Analyzer host: registration, correlation and dispatch.
//!
//! ```text
//!   events ──► Correlations::build ──► for each event, in order
//!                                        └─► each active module
//!                                              └─► each matching listener
//! ```
//!
//! Dispatch is single-threaded and synchronous. A handler runs to
//! completion before the next listener or event is considered.

mod analyzer;

#[cfg(test)]
mod host_tests;

use std::borrow::Cow;

use tally_types::{AnalyzerConfig, DEFAULT_ATONEMENT_LINK_WINDOW_MS, Statistic};

use crate::combat_log::{CombatEvent, EventId};
use crate::correlation::Correlations;

pub use analyzer::{
    Analyzer, EventContext, Handler, Listener, Module, Registered, into_module,
};

/// Summary of one dispatch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub events: usize,
    pub handler_calls: usize,
    /// True when the sequence had no fight end and one was appended
    pub synthetic_fight_end: bool,
    /// Encounter length from first to last event
    pub duration_ms: i64,
}

pub struct AnalyzerHost {
    selected_player: i64,
    atonement_window_ms: i64,
    modules: Vec<Box<dyn Module>>,
}

impl AnalyzerHost {
    pub fn new(selected_player: i64) -> Self {
        Self {
            selected_player,
            atonement_window_ms: DEFAULT_ATONEMENT_LINK_WINDOW_MS,
            modules: Vec::new(),
        }
    }

    pub fn with_config(selected_player: i64, config: &AnalyzerConfig) -> Self {
        Self {
            atonement_window_ms: config.atonement_link_window_ms,
            ..Self::new(selected_player)
        }
    }

    /// Register an analyzer. Inactive analyzers are dropped; returns whether
    /// it was kept.
    pub fn register<A: Analyzer>(&mut self, analyzer: A) -> bool {
        self.register_module(into_module(analyzer))
    }

    pub fn register_module(&mut self, module: Box<dyn Module>) -> bool {
        if !module.is_active() {
            tracing::debug!(analyzer = module.name(), "Analyzer inactive, skipping");
            return false;
        }
        tracing::debug!(
            analyzer = module.name(),
            listeners = module.listener_count(),
            "Registered analyzer"
        );
        self.modules.push(module);
        true
    }

    pub fn module_names(&self) -> Vec<&'static str> {
        self.modules.iter().map(|m| m.name()).collect()
    }

    pub fn run(&mut self, events: &[CombatEvent]) -> RunStats {
        let mut modules: Vec<&mut dyn Module> =
            self.modules.iter_mut().map(|m| m.as_mut() as &mut dyn Module).collect();
        let stats = drive(
            &mut modules,
            events,
            self.selected_player,
            self.atonement_window_ms,
        );
        tracing::info!(
            events = stats.events,
            handler_calls = stats.handler_calls,
            analyzers = self.modules.len(),
            "Encounter analyzed"
        );
        stats
    }

    /// Statistics of every registered analyzer, in display order
    pub fn statistics(&self) -> Vec<Statistic> {
        let mut stats: Vec<Statistic> =
            self.modules.iter().filter_map(|m| m.statistic()).collect();
        stats.sort_by_key(|s| s.position);
        stats
    }
}

/// Run a single analyzer over an encounter and hand it back.
pub fn replay<A: Analyzer>(
    analyzer: A,
    events: &[CombatEvent],
    selected_player: i64,
    atonement_window_ms: i64,
) -> A {
    let mut registered = Registered::new(analyzer);
    {
        let mut modules: [&mut dyn Module; 1] = [&mut registered];
        drive(&mut modules, events, selected_player, atonement_window_ms);
    }
    registered.into_inner()
}

/// Append a fight end at the last timestamp when the log lacks one, so open
/// buff intervals are always closed.
fn ensure_fight_end(events: &[CombatEvent]) -> Cow<'_, [CombatEvent]> {
    match events.last() {
        Some(last) if !events.iter().any(CombatEvent::is_fight_end) => {
            let mut owned = events.to_vec();
            owned.push(CombatEvent::fight_end(last.timestamp));
            Cow::Owned(owned)
        }
        _ => Cow::Borrowed(events),
    }
}

fn drive(
    modules: &mut [&mut dyn Module],
    events: &[CombatEvent],
    selected_player: i64,
    atonement_window_ms: i64,
) -> RunStats {
    let events = ensure_fight_end(events);
    let synthetic_fight_end = matches!(events, Cow::Owned(_));
    if synthetic_fight_end {
        tracing::warn!("Event log has no fight end, appending one at the last timestamp");
    }

    let correlations = Correlations::build(&events, selected_player, atonement_window_ms);

    let mut handler_calls = 0;
    for (idx, event) in events.iter().enumerate() {
        let ctx = EventContext {
            id: EventId(idx),
            event,
            correlations: &correlations,
            selected_player,
        };
        for module in modules.iter_mut() {
            handler_calls += module.dispatch(&ctx);
        }
    }

    let duration_ms = match (events.first(), events.last()) {
        (Some(first), Some(last)) => last.timestamp - first.timestamp,
        _ => 0,
    };

    RunStats {
        events: events.len(),
        handler_calls,
        synthetic_fight_end,
        duration_ms,
    }
}
