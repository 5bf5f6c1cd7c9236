//! Registro compartilhável entre threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::types::errors::RegistryError;

use super::export::RegistrySnapshot;
use super::scenario::Scenario;
use super::store::{RegisterOutcome, ScenarioRegistry};

/// Handle clonável para um [`ScenarioRegistry`] protegido por mutex.
///
/// `register` verifica o nome, procura equivalentes e insere sob uma
/// única aquisição do lock: dois chamadores nunca registram o mesmo nome
/// nem, com a política `Reject`, o mesmo conjunto de passos.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<ScenarioRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: ScenarioRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ScenarioRegistry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn register<N, I, S>(&self, name: N, steps: I) -> Result<RegisterOutcome, RegistryError>
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock().register(name, steps)
    }

    pub fn find_equivalent<I, S>(&self, steps: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock().find_equivalent(steps)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.lock().exists(name)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Scenario>> {
        self.lock().get(name)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        self.lock().snapshot()
    }
}
