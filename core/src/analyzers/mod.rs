//! Shipped analyzers.

mod master_of_destiny;
mod the_penitent_one;


use tally_types::AnalyzerConfig;

use crate::combatant::Combatant;
use crate::host::{AnalyzerHost, Module, into_module};

pub use master_of_destiny::MasterOfDestiny;
pub use the_penitent_one::ThePenitentOne;

/// Every shipped analyzer, built for this combatant. Inactive ones are
/// included; the host drops them at registration.
pub fn default_analyzers(combatant: &Combatant, config: &AnalyzerConfig) -> Vec<Box<dyn Module>> {
    vec![
        into_module(ThePenitentOne::new(combatant, config)),
        into_module(MasterOfDestiny::new(combatant, config)),
    ]
}

/// Build a host with every analyzer that applies to `combatant`.
pub fn build_host(combatant: &Combatant, config: &AnalyzerConfig) -> AnalyzerHost {
    let mut host = AnalyzerHost::with_config(combatant.id, config);
    for module in default_analyzers(combatant, config) {
        host.register_module(module);
    }
    host
}
