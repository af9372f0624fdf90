//! Master of Destiny (Chronowarden hero talent).
//!
//! Thread of Fate is applied to allies for a base duration and extended by
//! Essence abilities. Tracks each thread from apply to remove per target,
//! how much extra duration was granted, and the damage and healing threads
//! did once they had outlived their base duration.

use tally_types::formatting::{format_decimal, format_thousands};
use tally_types::{
    AnalyzerConfig, StatValue, Statistic, StatisticCategory, StatisticOrder, TooltipLine,
};

use crate::combat_log::EventType;
use crate::combatant::Combatant;
use crate::filter::{ActorFilter, EventFilter};
use crate::game_data::{
    MASTER_OF_DESTINY_TALENT, THREAD_OF_FATE_BASE_DURATION, THREAD_OF_FATE_BUFF,
    THREAD_OF_FATE_DAMAGE, THREAD_OF_FATE_HEALING, spell_name,
};
use crate::host::{Analyzer, EventContext, Listener};
use crate::intervals::BuffIntervalTracker;

#[derive(Debug, Clone)]
pub struct MasterOfDestiny {
    active: bool,
    european: bool,
    threads: BuffIntervalTracker,
    damage_gained: i64,
    healing_gained: i64,
}

impl MasterOfDestiny {
    pub const NAME: &'static str = "master_of_destiny";

    pub fn new(combatant: &Combatant, config: &AnalyzerConfig) -> Self {
        let active = combatant.has_talent(MASTER_OF_DESTINY_TALENT)
            && !config.is_disabled(Self::NAME);
        let base_secs = config
            .overrides
            .thread_of_fate_base_duration_secs
            .unwrap_or(THREAD_OF_FATE_BASE_DURATION);
        Self {
            active,
            european: config.european_number_format,
            threads: BuffIntervalTracker::new((base_secs * 1000.0).round() as i64),
            damage_gained: 0,
            healing_gained: 0,
        }
    }

    fn on_apply(&mut self, ctx: &EventContext<'_>) {
        if let Some(target) = ctx.event.target_id {
            self.threads.apply(target, ctx.event.timestamp);
        }
    }

    // If every eligible ally already holds a thread and another player
    // reapplies one, this still treats it as close-then-reopen on the target.
    fn on_refresh(&mut self, ctx: &EventContext<'_>) {
        if let Some(target) = ctx.event.target_id {
            self.threads.refresh(target, ctx.event.timestamp);
        }
    }

    fn on_remove(&mut self, ctx: &EventContext<'_>) {
        if let Some(target) = ctx.event.target_id {
            self.threads.remove(target, ctx.event.timestamp);
        }
    }

    fn on_fight_end(&mut self, ctx: &EventContext<'_>) {
        self.threads.close_all(ctx.event.timestamp);
    }

    /// Amount of a thread effect, if its holder's thread has run long enough
    fn gained(&self, ctx: &EventContext<'_>) -> Option<i64> {
        let source = ctx.event.source_id?;
        self.threads
            .has_qualified(source, ctx.event.timestamp)
            .then(|| ctx.event.amount())
    }

    fn on_damage(&mut self, ctx: &EventContext<'_>) {
        if let Some(amount) = self.gained(ctx) {
            self.damage_gained += amount;
        }
    }

    fn on_heal(&mut self, ctx: &EventContext<'_>) {
        if let Some(amount) = self.gained(ctx) {
            self.healing_gained += amount;
        }
    }

    pub fn threads(&self) -> &BuffIntervalTracker {
        &self.threads
    }

    pub fn damage_gained(&self) -> i64 {
        self.damage_gained
    }

    pub fn healing_gained(&self) -> i64 {
        self.healing_gained
    }

    pub fn total_extension_secs(&self) -> f64 {
        self.threads.total_extension_ms() as f64 / 1000.0
    }

    /// `None` until a thread has been closed
    pub fn average_duration_secs(&self) -> Option<f64> {
        self.threads.average_duration_ms().map(|ms| ms / 1000.0)
    }
}

impl Analyzer for MasterOfDestiny {
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
        let thread = |event_type| {
            EventFilter::new(event_type)
                .by(ActorFilter::SelectedPlayer)
                .spell(THREAD_OF_FATE_BUFF)
        };
        vec![
            Listener::new(thread(EventType::ApplyBuff), Self::on_apply),
            Listener::new(thread(EventType::RefreshBuff), Self::on_refresh),
            Listener::new(thread(EventType::RemoveBuff), Self::on_remove),
            Listener::new(EventFilter::new(EventType::FightEnd), Self::on_fight_end),
            Listener::new(
                EventFilter::new(EventType::Damage).spell(THREAD_OF_FATE_DAMAGE),
                Self::on_damage,
            ),
            Listener::new(
                EventFilter::new(EventType::Heal).spell(THREAD_OF_FATE_HEALING),
                Self::on_heal,
            ),
        ]
    }

    fn statistic(&self) -> Option<Statistic> {
        Some(Statistic {
            spell_id: MASTER_OF_DESTINY_TALENT,
            label: spell_name(MASTER_OF_DESTINY_TALENT),
            category: StatisticCategory::HeroTalents,
            position: StatisticOrder::Core(5),
            values: vec![
                StatValue::Seconds {
                    amount: self.total_extension_secs(),
                    caption: "extra duration granted".to_string(),
                },
                StatValue::Seconds {
                    amount: self.average_duration_secs().unwrap_or(0.0),
                    caption: "average buff duration".to_string(),
                },
                StatValue::DamageDone {
                    amount: self.damage_gained,
                },
                StatValue::HealingDone {
                    amount: self.healing_gained,
                },
            ],
            tooltip: vec![
                TooltipLine::new(
                    "Threads applied",
                    format_thousands(i64::from(self.threads.closed_count()), self.european),
                ),
                TooltipLine::new(
                    "Total thread uptime",
                    format!(
                        "{} sec",
                        format_decimal(
                            self.threads.total_duration_ms() as f64 / 1000.0,
                            1,
                            self.european
                        )
                    ),
                ),
            ],
        })
    }
}
