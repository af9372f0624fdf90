//! Spell ids and constants used by the shipped analyzers.
//!
//! This is not a spell database: only the handful of ids the analyzers
//! filter on, plus the names used when labelling statistics.

// ─── Discipline Priest ───────────────────────────────────────────────────────
pub const PENANCE: i64 = 47540;
pub const PENANCE_DAMAGE: i64 = 47666;
pub const PENANCE_HEAL: i64 = 47750;
pub const ATONEMENT_HEAL: i64 = 81751;
pub const CASTIGATION_TALENT: i64 = 193134;
pub const THE_PENITENT_ONE: i64 = 336011;
pub const THE_PENITENT_ONE_BUFF: i64 = 336009;

/// Mana cost of a hard-cast Penance
pub const PENANCE_MANA_COST: i64 = 800;

// ─── Evoker (Chronowarden) ───────────────────────────────────────────────────
pub const MASTER_OF_DESTINY_TALENT: i64 = 431840;
pub const THREAD_OF_FATE_BUFF: i64 = 431716;
pub const THREAD_OF_FATE_DAMAGE: i64 = 432895;
pub const THREAD_OF_FATE_HEALING: i64 = 432896;

/// Seconds a Thread of Fate lasts before any extension
pub const THREAD_OF_FATE_BASE_DURATION: f64 = 15.0;

#[derive(Debug, Clone, Copy)]
pub struct SpellInfo {
    pub name: &'static str,
    pub mana_cost: Option<i64>,
}

static SPELLS: phf::Map<i64, SpellInfo> = phf::phf_map! {
    47540i64 => SpellInfo { name: "Penance", mana_cost: Some(PENANCE_MANA_COST) },
    47666i64 => SpellInfo { name: "Penance", mana_cost: None },
    47750i64 => SpellInfo { name: "Penance", mana_cost: None },
    81751i64 => SpellInfo { name: "Atonement", mana_cost: None },
    193134i64 => SpellInfo { name: "Castigation", mana_cost: None },
    336011i64 => SpellInfo { name: "The Penitent One", mana_cost: None },
    336009i64 => SpellInfo { name: "The Penitent One", mana_cost: None },
    431840i64 => SpellInfo { name: "Master of Destiny", mana_cost: None },
    431716i64 => SpellInfo { name: "Thread of Fate", mana_cost: None },
    432895i64 => SpellInfo { name: "Thread of Fate", mana_cost: None },
    432896i64 => SpellInfo { name: "Thread of Fate", mana_cost: None },
};

pub fn spell(id: i64) -> Option<&'static SpellInfo> {
    SPELLS.get(&id)
}

/// Display name for a spell id, falling back to the raw id
pub fn spell_name(id: i64) -> String {
    spell(id)
        .map(|info| info.name.to_string())
        .unwrap_or_else(|| format!("Spell {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_spells_resolve() {
        assert_eq!(spell_name(THE_PENITENT_ONE), "The Penitent One");
        assert_eq!(spell(PENANCE).and_then(|s| s.mana_cost), Some(PENANCE_MANA_COST));
        assert_eq!(spell_name(1), "Spell 1");
    }
}
