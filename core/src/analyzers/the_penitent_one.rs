//! The Penitent One (legendary).
//!
//! Penance fires extra bolts and sometimes costs no mana. Healing is only
//! credited to the legendary for bolts beyond the number a normal Penance
//! fires, whether the bolt healed directly or through Atonement. Each
//! consumed buff (or buff stack) is a free Penance.

use tally_types::formatting::format_thousands;
use tally_types::{
    AnalyzerConfig, StatValue, Statistic, StatisticCategory, StatisticOrder, TooltipLine,
};

use crate::combat_log::EventType;
use crate::combatant::Combatant;
use crate::filter::{ActorFilter, EventFilter};
use crate::game_data::{
    ATONEMENT_HEAL, CASTIGATION_TALENT, PENANCE, PENANCE_HEAL, PENANCE_MANA_COST,
    THE_PENITENT_ONE, THE_PENITENT_ONE_BUFF, spell, spell_name,
};
use crate::host::{Analyzer, EventContext, Listener};

const BASE_BOLTS: u32 = 3;
const CASTIGATION_BOLTS: u32 = 4;

#[derive(Debug, Clone)]
pub struct ThePenitentOne {
    active: bool,
    expected_bolts: u32,
    mana_cost: i64,
    european: bool,

    atonement_healing: i64,
    direct_healing: i64,
    free_penances: u32,
}

impl ThePenitentOne {
    pub const NAME: &'static str = "the_penitent_one";

    pub fn new(combatant: &Combatant, config: &AnalyzerConfig) -> Self {
        let active = combatant.has_legendary(THE_PENITENT_ONE) && !config.is_disabled(Self::NAME);
        let expected_bolts = if combatant.has_talent(CASTIGATION_TALENT) {
            CASTIGATION_BOLTS
        } else {
            BASE_BOLTS
        };
        Self {
            active,
            expected_bolts,
            mana_cost: config
                .overrides
                .penance_mana_cost
                .or_else(|| spell(PENANCE).and_then(|info| info.mana_cost))
                .unwrap_or(PENANCE_MANA_COST),
            european: config.european_number_format,
            atonement_healing: 0,
            direct_healing: 0,
            free_penances: 0,
        }
    }

    /// Only bolts past the expected count come from the legendary
    fn is_bonus_bolt(&self, bolt: Option<u32>) -> bool {
        bolt.is_some_and(|n| n + 1 > self.expected_bolts)
    }

    fn on_atonement(&mut self, ctx: &EventContext<'_>) {
        if !self.is_bonus_bolt(ctx.atonement_bolt_number()) {
            return;
        }
        self.atonement_healing += ctx.event.amount();
    }

    fn on_penance_heal(&mut self, ctx: &EventContext<'_>) {
        if !self.is_bonus_bolt(ctx.bolt_number()) {
            return;
        }
        self.direct_healing += ctx.event.amount();
    }

    fn on_buff_consumed(&mut self, _ctx: &EventContext<'_>) {
        self.free_penances += 1;
    }

    pub fn expected_bolts(&self) -> u32 {
        self.expected_bolts
    }

    pub fn atonement_healing(&self) -> i64 {
        self.atonement_healing
    }

    pub fn direct_healing(&self) -> i64 {
        self.direct_healing
    }

    pub fn free_penances(&self) -> u32 {
        self.free_penances
    }

    pub fn mana_saved(&self) -> i64 {
        i64::from(self.free_penances) * self.mana_cost
    }
}

impl Analyzer for ThePenitentOne {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn listeners(&self) -> Vec<Listener<Self>> {
        if !self.active {
            return Vec::new();
        }
        let buff_removed = |event_type| {
            EventFilter::new(event_type)
                .to(ActorFilter::SelectedPlayer)
                .spell(THE_PENITENT_ONE_BUFF)
        };
        vec![
            Listener::new(
                EventFilter::new(EventType::Heal)
                    .by(ActorFilter::SelectedPlayer)
                    .spell(ATONEMENT_HEAL),
                Self::on_atonement,
            ),
            Listener::new(
                EventFilter::new(EventType::Heal)
                    .by(ActorFilter::SelectedPlayer)
                    .spell(PENANCE_HEAL),
                Self::on_penance_heal,
            ),
            Listener::new(buff_removed(EventType::RemoveBuff), Self::on_buff_consumed),
            // the buff can stack to two
            Listener::new(buff_removed(EventType::RemoveBuffStack), Self::on_buff_consumed),
        ]
    }

    fn statistic(&self) -> Option<Statistic> {
        let mana_saved = self.mana_saved();
        Some(Statistic {
            spell_id: THE_PENITENT_ONE,
            label: spell_name(THE_PENITENT_ONE),
            category: StatisticCategory::Items,
            position: StatisticOrder::Optional(13),
            values: vec![
                StatValue::HealingDone {
                    amount: self.atonement_healing + self.direct_healing,
                },
                StatValue::ManaGained { amount: mana_saved },
            ],
            tooltip: vec![
                TooltipLine::new(
                    "Atonement Healing",
                    format_thousands(self.atonement_healing, self.european),
                ),
                TooltipLine::new(
                    "Direct Healing",
                    format_thousands(self.direct_healing, self.european),
                ),
                TooltipLine::new("Mana saved", format_thousands(mana_saved, self.european)),
            ],
        })
    }
}
