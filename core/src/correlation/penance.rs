use crate::combat_log::{CombatEvent, EventId, EventKind};
use crate::game_data::{PENANCE, PENANCE_DAMAGE, PENANCE_HEAL};

use super::Correlations;

/// Number each Penance bolt after the cast that fired it.
///
/// A Penance cast by the selected player resets the counter; every Penance
/// bolt (damage or heal) by the selected player that follows gets the next
/// ordinal. Bolts seen before any cast are left unnumbered.
pub fn number_penance_bolts(
    events: &[CombatEvent],
    selected_player: i64,
    correlations: &mut Correlations,
) {
    let mut next_bolt: Option<u32> = None;

    for (idx, event) in events.iter().enumerate() {
        if event.source_id != Some(selected_player) {
            continue;
        }
        let ability = event.ability_id();
        match event.kind {
            EventKind::Cast if ability == Some(PENANCE) => next_bolt = Some(0),
            EventKind::Damage { .. } if ability == Some(PENANCE_DAMAGE) => {
                assign(&mut next_bolt, EventId(idx), correlations);
            }
            EventKind::Heal { .. } if ability == Some(PENANCE_HEAL) => {
                assign(&mut next_bolt, EventId(idx), correlations);
            }
            _ => {}
        }
    }
}

fn assign(next_bolt: &mut Option<u32>, id: EventId, correlations: &mut Correlations) {
    let Some(bolt) = next_bolt else {
        tracing::debug!(event = id.0, "Penance bolt without a preceding cast");
        return;
    };
    correlations.set_bolt_number(id, *bolt);
    *bolt += 1;
}
