//! Tests for registration and dispatch order.

use std::cell::RefCell;
use std::rc::Rc;

use tally_types::{AnalyzerConfig, StatValue, Statistic, StatisticCategory, StatisticOrder};

use super::{Analyzer, AnalyzerHost, EventContext, Listener};
use crate::analyzers::{MasterOfDestiny, ThePenitentOne, build_host};
use crate::combat_log::{CombatEvent, EventType};
use crate::combatant::Combatant;
use crate::filter::{ActorFilter, EventFilter};
use crate::game_data::{
    MASTER_OF_DESTINY_TALENT, THE_PENITENT_ONE, THE_PENITENT_ONE_BUFF, THREAD_OF_FATE_BUFF,
};
use crate::test_support::{apply_buff, cast, damage, fight_end, heal, remove_buff};

const PLAYER: i64 = 1;

type Log = Rc<RefCell<Vec<(&'static str, usize, i64)>>>;

/// Records every event it is handed, for checking dispatch order
struct Recorder {
    name: &'static str,
    active: bool,
    filter: EventFilter,
    log: Log,
    seen: i64,
}

impl Recorder {
    fn new(name: &'static str, filter: EventFilter, log: &Log) -> Self {
        Self {
            name,
            active: true,
            filter,
            log: Rc::clone(log),
            seen: 0,
        }
    }

    fn on_event(&mut self, ctx: &EventContext<'_>) {
        self.seen += 1;
        self.log
            .borrow_mut()
            .push((self.name, ctx.id.0, ctx.event.timestamp));
    }
}

impl Analyzer for Recorder {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn listeners(&self) -> Vec<Listener<Self>> {
        vec![Listener::new(self.filter, Self::on_event)]
    }

    fn statistic(&self) -> Option<Statistic> {
        Some(Statistic {
            spell_id: 0,
            label: self.name.to_string(),
            category: StatisticCategory::General,
            position: StatisticOrder::Optional(self.seen as u32),
            values: vec![StatValue::DamageDone { amount: self.seen }],
            tooltip: Vec::new(),
        })
    }
}

fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

#[test]
fn dispatches_in_sequence_order_to_each_module() {
    let log = log();
    let mut host = AnalyzerHost::new(PLAYER);
    host.register(Recorder::new("heals", EventFilter::new(EventType::Heal), &log));
    host.register(Recorder::new(
        "all_heals_by_me",
        EventFilter::new(EventType::Heal).by(ActorFilter::SelectedPlayer),
        &log,
    ));

    let events = vec![
        heal(0, Some(PLAYER), Some(2), 10, 5),
        damage(10, Some(PLAYER), Some(9), 11, 5),
        heal(20, Some(3), Some(2), 10, 5),
        fight_end(30),
    ];
    let stats = host.run(&events);

    assert_eq!(
        *log.borrow(),
        vec![
            ("heals", 0, 0),
            ("all_heals_by_me", 0, 0),
            ("heals", 2, 20),
        ]
    );
    assert_eq!(stats.handler_calls, 3);
    assert_eq!(stats.events, 4);
    assert!(!stats.synthetic_fight_end);
    assert_eq!(stats.duration_ms, 30);
}

#[test]
fn inactive_modules_are_not_registered() {
    let log = log();
    let mut recorder = Recorder::new("off", EventFilter::new(EventType::Heal), &log);
    recorder.active = false;

    let mut host = AnalyzerHost::new(PLAYER);
    assert!(!host.register(recorder));
    assert!(host.module_names().is_empty());

    host.run(&[heal(0, Some(PLAYER), Some(2), 10, 5)]);
    assert!(log.borrow().is_empty());
    assert!(host.statistics().is_empty());
}

#[test]
fn fight_end_is_appended_only_when_missing() {
    let log = log();
    let mut host = AnalyzerHost::new(PLAYER);
    host.register(Recorder::new("ends", EventFilter::new(EventType::FightEnd), &log));

    let stats = host.run(&[cast(0, PLAYER, 1), cast(700, PLAYER, 1)]);
    assert!(stats.synthetic_fight_end);
    assert_eq!(stats.events, 3);
    assert_eq!(*log.borrow(), vec![("ends", 2, 700)]);

    log.borrow_mut().clear();
    let stats = host.run(&[cast(0, PLAYER, 1), fight_end(900)]);
    assert!(!stats.synthetic_fight_end);
    assert_eq!(*log.borrow(), vec![("ends", 1, 900)]);
}

#[test]
fn empty_sequence_dispatches_nothing() {
    let log = log();
    let mut host = AnalyzerHost::new(PLAYER);
    host.register(Recorder::new("ends", EventFilter::new(EventType::FightEnd), &log));
    let stats = host.run(&[]);
    assert_eq!(stats.events, 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn statistics_sorted_by_position() {
    let log = log();
    let mut host = AnalyzerHost::new(PLAYER);
    host.register(Recorder::new("many", EventFilter::new(EventType::Cast), &log));
    host.register(Recorder::new("few", EventFilter::new(EventType::FightEnd), &log));
    host.run(&[cast(0, PLAYER, 1), cast(1, PLAYER, 1), fight_end(2)]);

    let labels: Vec<String> = host.statistics().into_iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!["few".to_string(), "many".to_string()]);
}

#[test]
fn build_host_registers_only_matching_analyzers() {
    let config = AnalyzerConfig::default();

    let priest = Combatant::new(PLAYER, "Priest").with_legendary(THE_PENITENT_ONE);
    assert_eq!(build_host(&priest, &config).module_names(), vec![ThePenitentOne::NAME]);

    let evoker = Combatant::new(PLAYER, "Evoker").with_talent(MASTER_OF_DESTINY_TALENT);
    assert_eq!(build_host(&evoker, &config).module_names(), vec![MasterOfDestiny::NAME]);

    assert!(build_host(&Combatant::new(PLAYER, ""), &config).module_names().is_empty());
}

#[test]
fn modules_do_not_share_state() {
    let both = Combatant::new(PLAYER, "Both")
        .with_legendary(THE_PENITENT_ONE)
        .with_talent(MASTER_OF_DESTINY_TALENT);
    let mut host = build_host(&both, &AnalyzerConfig::default());

    let events: Vec<CombatEvent> = vec![
        apply_buff(0, PLAYER, 2, THREAD_OF_FATE_BUFF),
        remove_buff(1_000, PLAYER, PLAYER, THE_PENITENT_ONE_BUFF),
        remove_buff(20_000, PLAYER, 2, THREAD_OF_FATE_BUFF),
        fight_end(30_000),
    ];
    host.run(&events);

    let stats = host.statistics();
    assert_eq!(stats.len(), 2);
    // Core before optional
    assert_eq!(stats[0].spell_id, MASTER_OF_DESTINY_TALENT);
    assert_eq!(stats[1].spell_id, THE_PENITENT_ONE);
    assert_eq!(
        stats[0].values[1],
        StatValue::Seconds {
            amount: 20.0,
            caption: "average buff duration".to_string()
        }
    );
    assert_eq!(stats[1].values[0], StatValue::HealingDone { amount: 0 });
}
