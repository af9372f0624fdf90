//! Upstream correlation pass.
//!
//! Runs once over the full event sequence before dispatch and records
//! derived attributes in side-channel maps keyed by [`EventId`]. Analyzers
//! read these maps; nobody writes to events.

mod atonement;
mod penance;

use hashbrown::HashMap;

use crate::combat_log::{CombatEvent, EventId};

pub use atonement::link_atonement_heals;
pub use penance::number_penance_bolts;

#[derive(Debug, Clone, Default)]
pub struct Correlations {
    /// Zero-based index of a Penance bolt within its cast
    bolt_numbers: HashMap<EventId, u32>,
    /// Atonement heal -> damage event that triggered it
    atonement_sources: HashMap<EventId, EventId>,
}

impl Correlations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every correlation pass over `events`.
    pub fn build(events: &[CombatEvent], selected_player: i64, atonement_window_ms: i64) -> Self {
        let mut correlations = Self::new();
        number_penance_bolts(events, selected_player, &mut correlations);
        link_atonement_heals(events, selected_player, atonement_window_ms, &mut correlations);
        tracing::debug!(
            bolts = correlations.bolt_numbers.len(),
            atonement_links = correlations.atonement_sources.len(),
            "Correlation pass complete"
        );
        correlations
    }

    pub fn bolt_number(&self, id: EventId) -> Option<u32> {
        self.bolt_numbers.get(&id).copied()
    }

    pub fn atonement_source(&self, heal: EventId) -> Option<EventId> {
        self.atonement_sources.get(&heal).copied()
    }

    pub fn set_bolt_number(&mut self, id: EventId, bolt: u32) {
        self.bolt_numbers.insert(id, bolt);
    }

    pub fn link_atonement(&mut self, heal: EventId, damage: EventId) {
        self.atonement_sources.insert(heal, damage);
    }
}
