//! Event builders shared by unit tests.

use crate::combat_log::{Ability, CombatEvent, EventKind};

fn event(
    timestamp: i64,
    source_id: Option<i64>,
    target_id: Option<i64>,
    ability: i64,
    kind: EventKind,
) -> CombatEvent {
    CombatEvent {
        timestamp,
        source_id,
        target_id,
        ability: Some(Ability {
            guid: ability,
            name: String::new(),
        }),
        kind,
    }
}

pub fn cast(timestamp: i64, source: i64, ability: i64) -> CombatEvent {
    event(timestamp, Some(source), None, ability, EventKind::Cast)
}

pub fn damage(
    timestamp: i64,
    source: Option<i64>,
    target: Option<i64>,
    ability: i64,
    amount: i64,
) -> CombatEvent {
    event(timestamp, source, target, ability, EventKind::Damage { amount, absorbed: 0 })
}

pub fn heal(
    timestamp: i64,
    source: Option<i64>,
    target: Option<i64>,
    ability: i64,
    amount: i64,
) -> CombatEvent {
    event(timestamp, source, target, ability, EventKind::Heal { amount, overheal: 0 })
}

pub fn apply_buff(timestamp: i64, source: i64, target: i64, ability: i64) -> CombatEvent {
    event(timestamp, Some(source), Some(target), ability, EventKind::ApplyBuff)
}

pub fn refresh_buff(timestamp: i64, source: i64, target: i64, ability: i64) -> CombatEvent {
    event(timestamp, Some(source), Some(target), ability, EventKind::RefreshBuff)
}

pub fn remove_buff(timestamp: i64, source: i64, target: i64, ability: i64) -> CombatEvent {
    event(timestamp, Some(source), Some(target), ability, EventKind::RemoveBuff)
}

pub fn remove_buff_stack(timestamp: i64, source: i64, target: i64, ability: i64) -> CombatEvent {
    event(
        timestamp,
        Some(source),
        Some(target),
        ability,
        EventKind::RemoveBuffStack { stacks: 1 },
    )
}

pub fn fight_end(timestamp: i64) -> CombatEvent {
    CombatEvent::fight_end(timestamp)
}
