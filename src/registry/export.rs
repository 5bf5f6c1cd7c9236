//! Export/Import do registro em JSON.
//!
//! Permite guardar um retrato do registro e reconstruí-lo depois.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::config::EquivalencePolicy;
use crate::types::errors::{RegistryError, ScenaristError};
use crate::ScenaristResult;

use super::scenario::StepSet;
use super::store::{RegisterOutcome, ScenarioRegistry};

/// Versão atual do formato de snapshot.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// Retrato serializável do registro.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Versão do formato de exportação.
    pub version: String,
    /// Data/hora da exportação.
    pub exported_at: DateTime<Utc>,
    /// Política do registro exportado.
    pub policy: EquivalencePolicy,
    /// Cenários em ordem de inserção.
    pub scenarios: Vec<SnapshotEntry>,
}

/// Um cenário no snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub name: String,
    /// Passos em ordem lexicográfica.
    pub steps: StepSet,
    pub fingerprint: String,
    pub registered_at: DateTime<Utc>,
}

/// Resultado de uma importação.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportResult {
    /// Cenários armazenados.
    pub imported: usize,
    /// Cenários ignorados por nome já existente.
    pub skipped_duplicate_names: usize,
    /// Cenários armazenados que tinham equivalentes (contados também em `imported`).
    pub equivalent: usize,
    /// Cenários recusados pela política `Reject`.
    pub rejected: usize,
}

impl ScenarioRegistry {
    /// Cria um snapshot do estado atual.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            version: SNAPSHOT_VERSION.to_string(),
            exported_at: Utc::now(),
            policy: self.policy(),
            scenarios: self
                .iter()
                .map(|scenario| SnapshotEntry {
                    name: scenario.name().to_string(),
                    steps: scenario.steps().clone(),
                    fingerprint: scenario.fingerprint().to_string(),
                    registered_at: scenario.registered_at(),
                })
                .collect(),
        }
    }

    /// Exporta o registro para arquivo JSON.
    pub fn export(&self, path: &Path) -> ScenaristResult<()> {
        let snapshot = self.snapshot();
        let json = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(path, json)?;

        tracing::debug!(
            path = %path.display(),
            scenarios = snapshot.scenarios.len(),
            "Registry exported"
        );

        Ok(())
    }

    /// Importa cenários de arquivo JSON.
    ///
    /// Cada cenário passa por [`register_set`](Self::register_set), com a
    /// política deste registro.
    pub fn import(&mut self, path: &Path) -> ScenaristResult<ImportResult> {
        let json = std::fs::read_to_string(path)?;
        let snapshot: RegistrySnapshot = serde_json::from_str(&json)?;

        let result = self.import_snapshot(snapshot)?;

        tracing::debug!(
            path = %path.display(),
            imported = result.imported,
            skipped = result.skipped_duplicate_names,
            rejected = result.rejected,
            "Registry imported"
        );

        Ok(result)
    }

    /// Importa um snapshot já carregado.
    pub fn import_snapshot(
        &mut self,
        snapshot: RegistrySnapshot,
    ) -> ScenaristResult<ImportResult> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(ScenaristError::UnsupportedSnapshot(snapshot.version));
        }

        let mut result = ImportResult::default();

        for entry in snapshot.scenarios {
            if entry.steps.fingerprint() != entry.fingerprint {
                tracing::debug!(
                    name = %entry.name,
                    "Snapshot fingerprint does not match steps; recomputing"
                );
            }

            match self.register_set(entry.name, entry.steps) {
                Ok(RegisterOutcome::Registered) => result.imported += 1,
                Ok(RegisterOutcome::EquivalentTo(_)) => {
                    result.imported += 1;
                    result.equivalent += 1;
                }
                Err(RegistryError::DuplicateName(_)) => result.skipped_duplicate_names += 1,
                Err(RegistryError::EquivalentScenario { .. }) => result.rejected += 1,
            }
        }

        Ok(result)
    }
}
