use crate::combat_log::{CombatEvent, EventId, EventKind};
use crate::game_data::ATONEMENT_HEAL;

use super::Correlations;

/// Link each Atonement heal to the damage event that caused it.
///
/// The source is the most recent damage event by the selected player at
/// most `window_ms` before the heal. One damage event heals every
/// Atonement target, so several heals may share a source.
pub fn link_atonement_heals(
    events: &[CombatEvent],
    selected_player: i64,
    window_ms: i64,
    correlations: &mut Correlations,
) {
    let mut last_damage: Option<(EventId, i64)> = None;

    for (idx, event) in events.iter().enumerate() {
        if event.source_id != Some(selected_player) {
            continue;
        }
        match event.kind {
            EventKind::Damage { .. } => last_damage = Some((EventId(idx), event.timestamp)),
            EventKind::Heal { .. } if event.ability_id() == Some(ATONEMENT_HEAL) => {
                match last_damage {
                    Some((damage, at)) if event.timestamp - at <= window_ms => {
                        correlations.link_atonement(EventId(idx), damage);
                    }
                    _ => {
                        tracing::debug!(event = idx, "Atonement heal without a recent damage source")
                    }
                }
            }
            _ => {}
        }
    }
}
