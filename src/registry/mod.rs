//! Registro de cenários de teste.
//!
//! Cada cenário é um nome e um conjunto imutável de passos. Duplicatas
//! são detectadas por igualdade de conjuntos, não apenas por nome:
//!
//! - nome repetido é sempre recusado;
//! - mesmo conjunto de passos sob outro nome é reportado (ou recusado,
//!   conforme a [`EquivalencePolicy`](crate::types::config::EquivalencePolicy)).

mod definitions;
mod export;
mod scenario;
mod shared;
mod store;

pub use definitions::{ScenarioDefinition, ScenarioFile};
pub use export::{ImportResult, RegistrySnapshot, SnapshotEntry, SNAPSHOT_VERSION};
pub use scenario::{Scenario, StepSet};
pub use shared::SharedRegistry;
pub use store::{RegisterOutcome, RegistrationReport, ScenarioRegistry};
