//! Registro de cenários com deduplicação por igualdade de conjuntos.

use std::collections::HashMap;
use std::sync::Arc;

use crate::types::config::{EquivalencePolicy, RegistryConfig};
use crate::types::errors::RegistryError;

use super::definitions::ScenarioDefinition;
use super::scenario::{Scenario, StepSet};

/// Resultado de um registro aceito.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Cenário novo, sem equivalentes.
    Registered,

    /// Cenário armazenado, mas com os mesmos passos de cenários já
    /// existentes (em ordem de inserção).
    EquivalentTo(Vec<String>),
}

impl RegisterOutcome {
    /// Nomes equivalentes reportados (vazio para `Registered`).
    pub fn equivalents(&self) -> &[String] {
        match self {
            RegisterOutcome::Registered => &[],
            RegisterOutcome::EquivalentTo(names) => names,
        }
    }
}

/// Resultado do registro de uma definição em lote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReport {
    pub name: String,
    pub result: Result<RegisterOutcome, RegistryError>,
}

impl RegistrationReport {
    /// Verifica se o cenário foi recusado (nome duplicado ou equivalente
    /// rejeitado).
    pub fn is_conflict(&self) -> bool {
        self.result.is_err()
    }
}

/// Registro de cenários de teste.
///
/// Mantém no máximo uma entrada por nome. Cenários com nomes diferentes
/// e o mesmo conjunto de passos são tratados conforme a
/// [`EquivalencePolicy`]: nunca em silêncio.
#[derive(Debug, Default)]
pub struct ScenarioRegistry {
    policy: EquivalencePolicy,
    scenarios: Vec<Arc<Scenario>>,
    by_name: HashMap<String, usize>,
    by_fingerprint: HashMap<String, Vec<usize>>,
}

impl ScenarioRegistry {
    /// Cria um registro vazio com a política padrão (`Allow`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria um registro vazio com a política dada.
    pub fn with_policy(policy: EquivalencePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Cria um registro a partir da configuração.
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::with_policy(config.equivalence_policy)
    }

    pub fn policy(&self) -> EquivalencePolicy {
        self.policy
    }

    /// Registra um cenário.
    ///
    /// - Nome já existente: `Err(DuplicateName)`, a entrada existente
    ///   não é alterada.
    /// - Mesmos passos de outro cenário: com `Allow` o cenário é
    ///   armazenado e o resultado é `EquivalentTo`; com `Reject` nada é
    ///   armazenado e o resultado é `Err(EquivalentScenario)`.
    /// - Caso contrário: `Registered`.
    pub fn register<N, I, S>(
        &mut self,
        name: N,
        steps: I,
    ) -> Result<RegisterOutcome, RegistryError>
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register_set(name.into(), StepSet::from_steps(steps))
    }

    /// Registra um cenário com passos já normalizados.
    pub fn register_set(
        &mut self,
        name: String,
        steps: StepSet,
    ) -> Result<RegisterOutcome, RegistryError> {
        if self.by_name.contains_key(&name) {
            tracing::debug!(name = %name, "Scenario name already registered");
            return Err(RegistryError::DuplicateName(name));
        }

        let fingerprint = steps.fingerprint();
        let existing = self.equivalent_names(&fingerprint, &steps);

        if !existing.is_empty() && self.policy == EquivalencePolicy::Reject {
            tracing::debug!(
                name = %name,
                existing = ?existing,
                "Equivalent scenario rejected"
            );
            return Err(RegistryError::EquivalentScenario { name, existing });
        }

        let position = self.scenarios.len();
        self.by_name.insert(name.clone(), position);
        self.by_fingerprint
            .entry(fingerprint.clone())
            .or_default()
            .push(position);

        tracing::debug!(
            name = %name,
            steps = steps.len(),
            equivalents = existing.len(),
            "Scenario registered"
        );

        self.scenarios
            .push(Arc::new(Scenario::new(name, steps, fingerprint, position)));

        if existing.is_empty() {
            Ok(RegisterOutcome::Registered)
        } else {
            Ok(RegisterOutcome::EquivalentTo(existing))
        }
    }

    /// Registra várias definições em ordem, continuando após erros.
    pub fn register_all<I>(&mut self, definitions: I) -> Vec<RegistrationReport>
    where
        I: IntoIterator<Item = ScenarioDefinition>,
    {
        definitions
            .into_iter()
            .map(|def| {
                let result = self.register(def.name.clone(), def.steps);
                RegistrationReport {
                    name: def.name,
                    result,
                }
            })
            .collect()
    }

    /// Retorna todos os nomes cujo conjunto de passos é igual ao dado,
    /// em ordem de inserção. Não altera o registro.
    pub fn find_equivalent<I, S>(&self, steps: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps = StepSet::from_steps(steps);
        self.equivalent_names(&steps.fingerprint(), &steps)
    }

    fn equivalent_names(&self, fingerprint: &str, steps: &StepSet) -> Vec<String> {
        // Os índices de cada assinatura são crescentes, então a ordem de
        // inserção é preservada.
        self.by_fingerprint
            .get(fingerprint)
            .into_iter()
            .flatten()
            .map(|&idx| &self.scenarios[idx])
            .filter(|scenario| scenario.is_equivalent_to(steps))
            .map(|scenario| scenario.name().to_string())
            .collect()
    }

    /// Verifica se existe um cenário com esse nome.
    pub fn exists(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Busca um cenário pelo nome.
    pub fn get(&self, name: &str) -> Option<Arc<Scenario>> {
        self.by_name
            .get(name)
            .map(|&idx| Arc::clone(&self.scenarios[idx]))
    }

    /// Itera sobre os cenários em ordem de inserção.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Scenario>> {
        self.scenarios.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
