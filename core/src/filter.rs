//! Event filters for analyzer listeners.
//!
//! A filter selects one event type and optionally narrows by source,
//! target and ability:
//!
//! ```
//! use tally_core::filter::{ActorFilter, EventFilter};
//! use tally_core::combat_log::EventType;
//!
//! let filter = EventFilter::new(EventType::Heal)
//!     .by(ActorFilter::SelectedPlayer)
//!     .spell(47750);
//! assert_eq!(filter.event_type(), EventType::Heal);
//! ```

use crate::combat_log::{CombatEvent, EventType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorFilter {
    #[default]
    Any,
    /// The combatant the analysis is run for
    SelectedPlayer,
    Id(i64),
}

impl ActorFilter {
    fn matches(&self, actor: Option<i64>, selected_player: i64) -> bool {
        match *self {
            Self::Any => true,
            Self::SelectedPlayer => actor == Some(selected_player),
            Self::Id(id) => actor == Some(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventFilter {
    event_type: EventType,
    source: ActorFilter,
    target: ActorFilter,
    ability: Option<i64>,
}

impl EventFilter {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            source: ActorFilter::Any,
            target: ActorFilter::Any,
            ability: None,
        }
    }

    pub fn by(mut self, source: ActorFilter) -> Self {
        self.source = source;
        self
    }

    pub fn to(mut self, target: ActorFilter) -> Self {
        self.target = target;
        self
    }

    pub fn spell(mut self, ability_id: i64) -> Self {
        self.ability = Some(ability_id);
        self
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn matches(&self, event: &CombatEvent, selected_player: i64) -> bool {
        if event.event_type() != self.event_type {
            return false;
        }
        if let Some(ability) = self.ability
            && event.ability_id() != Some(ability)
        {
            return false;
        }
        self.source.matches(event.source_id, selected_player)
            && self.target.matches(event.target_id, selected_player)
    }
}
