//! Cenários e conjuntos normalizados de passos.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Conjunto de passos sem duplicatas e sem ordem.
///
/// Dois `StepSet` são iguais quando contêm os mesmos rótulos, não
/// importando a ordem ou as repetições da lista de entrada. Os rótulos
/// são comparados exatamente (maiúsculas e espaços contam).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepSet(BTreeSet<String>);

impl StepSet {
    /// Normaliza uma lista de passos.
    pub fn from_steps<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(steps.into_iter().map(Into::into).collect())
    }

    /// Número de passos distintos.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, step: &str) -> bool {
        self.0.contains(step)
    }

    /// Itera sobre os passos em ordem lexicográfica.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Assinatura canônica do conjunto.
    ///
    /// Hash SHA256 dos rótulos ordenados, cada um prefixado pelo seu
    /// tamanho para que a fronteira entre rótulos não seja ambígua.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for step in &self.0 {
            hasher.update((step.len() as u64).to_le_bytes());
            hasher.update(step.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

impl<S: Into<String>> FromIterator<S> for StepSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_steps(iter)
    }
}

/// Cenário registrado. Imutável depois de criado.
#[derive(Debug, Clone)]
pub struct Scenario {
    name: String,
    steps: StepSet,
    fingerprint: String,
    position: usize,
    registered_at: DateTime<Utc>,
}

impl Scenario {
    pub(crate) fn new(name: String, steps: StepSet, fingerprint: String, position: usize) -> Self {
        Self {
            name,
            steps,
            fingerprint,
            position,
            registered_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &StepSet {
        &self.steps
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Posição na ordem de inserção do registro.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Verifica se o cenário tem exatamente o conjunto de passos dado.
    pub fn is_equivalent_to(&self, steps: &StepSet) -> bool {
        &self.steps == steps
    }
}
