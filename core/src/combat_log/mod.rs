//! Combat event model.
//!
//! Events are read once and never mutated. Anything derived from them
//! (bolt ordinals, Atonement links) lives in [`crate::correlation`], keyed
//! by [`EventId`].

mod reader;

pub use reader::{parse_event_log, read_event_log};

use serde::{Deserialize, Serialize};

/// Position of an event in the replayed sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub guid: i64,
    #[serde(default)]
    pub name: String,
}

/// Event payload, tagged by the `type` field on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EventKind {
    Cast,
    Damage {
        amount: i64,
        #[serde(default)]
        absorbed: i64,
    },
    Heal {
        amount: i64,
        #[serde(default)]
        overheal: i64,
    },
    ApplyBuff,
    RefreshBuff,
    RemoveBuff,
    RemoveBuffStack {
        #[serde(default)]
        stacks: u32,
    },
    FightEnd,
}

/// Payload-free discriminant of [`EventKind`], used by filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Cast,
    Damage,
    Heal,
    ApplyBuff,
    RefreshBuff,
    RemoveBuff,
    RemoveBuffStack,
    FightEnd,
}

impl EventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Cast => EventType::Cast,
            Self::Damage { .. } => EventType::Damage,
            Self::Heal { .. } => EventType::Heal,
            Self::ApplyBuff => EventType::ApplyBuff,
            Self::RefreshBuff => EventType::RefreshBuff,
            Self::RemoveBuff => EventType::RemoveBuff,
            Self::RemoveBuffStack { .. } => EventType::RemoveBuffStack,
            Self::FightEnd => EventType::FightEnd,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatEvent {
    /// Milliseconds since the start of the encounter
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<Ability>,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl CombatEvent {
    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    pub fn ability_id(&self) -> Option<i64> {
        self.ability.as_ref().map(|a| a.guid)
    }

    /// Damage or heal magnitude; zero for every other kind
    pub fn amount(&self) -> i64 {
        match self.kind {
            EventKind::Damage { amount, .. } | EventKind::Heal { amount, .. } => amount,
            _ => 0,
        }
    }

    /// First magnitude field holding a negative value, with that value
    pub fn negative_magnitude(&self) -> Option<(&'static str, i64)> {
        let fields = match self.kind {
            EventKind::Damage { amount, absorbed } => [("amount", amount), ("absorbed", absorbed)],
            EventKind::Heal { amount, overheal } => [("amount", amount), ("overheal", overheal)],
            _ => return None,
        };
        fields.into_iter().find(|&(_, value)| value < 0)
    }

    pub fn is_fight_end(&self) -> bool {
        matches!(self.kind, EventKind::FightEnd)
    }

    pub fn fight_end(timestamp: i64) -> Self {
        Self {
            timestamp,
            source_id: None,
            target_id: None,
            ability: None,
            kind: EventKind::FightEnd,
        }
    }
}
