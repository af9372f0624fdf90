use tally_types::Statistic;

use crate::combat_log::{CombatEvent, EventId};
use crate::correlation::Correlations;
use crate::filter::EventFilter;

/// Everything a listener gets to see for one event
#[derive(Debug, Clone, Copy)]
pub struct EventContext<'a> {
    pub id: EventId,
    pub event: &'a CombatEvent,
    pub correlations: &'a Correlations,
    pub selected_player: i64,
}

impl EventContext<'_> {
    pub fn bolt_number(&self) -> Option<u32> {
        self.correlations.bolt_number(self.id)
    }

    /// Bolt number of the damage event an Atonement heal came from
    pub fn atonement_bolt_number(&self) -> Option<u32> {
        self.correlations
            .atonement_source(self.id)
            .and_then(|source| self.correlations.bolt_number(source))
    }
}

pub type Handler<A> = fn(&mut A, &EventContext<'_>);

/// A filter paired with the handler it triggers
pub struct Listener<A> {
    pub filter: EventFilter,
    pub handler: Handler<A>,
}

impl<A> Listener<A> {
    pub fn new(filter: EventFilter, handler: Handler<A>) -> Self {
        Self { filter, handler }
    }
}

/// A module tracking one game mechanic over one encounter.
///
/// Activation is decided at construction. An inactive analyzer returns no
/// listeners and no statistic.
pub trait Analyzer: 'static {
    fn name(&self) -> &'static str;

    fn is_active(&self) -> bool;

    fn listeners(&self) -> Vec<Listener<Self>>
    where
        Self: Sized;

    fn statistic(&self) -> Option<Statistic>;
}

/// Object-safe face of an analyzer, as held by the host
pub trait Module {
    fn name(&self) -> &'static str;

    fn is_active(&self) -> bool;

    fn listener_count(&self) -> usize;

    /// Run every matching listener for this event; returns how many ran.
    fn dispatch(&mut self, ctx: &EventContext<'_>) -> usize;

    fn statistic(&self) -> Option<Statistic>;
}

/// An analyzer with its listeners captured once at registration
pub struct Registered<A: Analyzer> {
    analyzer: A,
    listeners: Vec<Listener<A>>,
}

impl<A: Analyzer> Registered<A> {
    pub fn new(analyzer: A) -> Self {
        let listeners = if analyzer.is_active() {
            analyzer.listeners()
        } else {
            Vec::new()
        };
        Self {
            analyzer,
            listeners,
        }
    }

    pub fn into_inner(self) -> A {
        self.analyzer
    }
}

impl<A: Analyzer> Module for Registered<A> {
    fn name(&self) -> &'static str {
        self.analyzer.name()
    }

    fn is_active(&self) -> bool {
        self.analyzer.is_active()
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn dispatch(&mut self, ctx: &EventContext<'_>) -> usize {
        let mut invoked = 0;
        for listener in &self.listeners {
            if listener.filter.matches(ctx.event, ctx.selected_player) {
                (listener.handler)(&mut self.analyzer, ctx);
                invoked += 1;
            }
        }
        invoked
    }

    fn statistic(&self) -> Option<Statistic> {
        if !self.analyzer.is_active() {
            return None;
        }
        self.analyzer.statistic()
    }
}

/// Box an analyzer for the host
pub fn into_module<A: Analyzer>(analyzer: A) -> Box<dyn Module> {
    Box::new(Registered::new(analyzer))
}
