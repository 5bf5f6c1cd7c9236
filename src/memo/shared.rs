//! Avaliador memoizado compartilhável entre threads.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::evaluator::{Evaluation, MemoStats};

/// Slot de uma chave. O lock do slot serializa o cálculo daquela chave.
type Slot<V> = Arc<Mutex<Option<V>>>;

struct Inner<K, V, F> {
    func: F,
    slots: Mutex<HashMap<K, Slot<V>>>,
    size: AtomicUsize,
    hits: AtomicU64,
    misses: AtomicU64,
    failures: AtomicU64,
}

/// Handle clonável para um avaliador memoizado usado por várias threads.
///
/// Garante no máximo um cálculo bem-sucedido por chave: chamadas
/// concorrentes para a mesma chave esperam no slot da chave, chamadas
/// para outras chaves seguem em paralelo. Uma falha deixa o slot vazio
/// e a próxima chamada tenta de novo.
pub struct SharedEvaluator<K, V, F> {
    inner: Arc<Inner<K, V, F>>,
}

impl<K, V, F> Clone for SharedEvaluator<K, V, F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V, F> SharedEvaluator<K, V, F>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Cria um novo avaliador compartilhado.
    pub fn new(func: F) -> Self {
        Self {
            inner: Arc::new(Inner {
                func,
                slots: Mutex::new(HashMap::new()),
                size: AtomicUsize::new(0),
                hits: AtomicU64::new(0),
                misses: AtomicU64::new(0),
                failures: AtomicU64::new(0),
            }),
        }
    }

    fn slot(&self, key: &K) -> Slot<V> {
        let mut slots = self
            .inner
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match slots.get(key) {
            Some(slot) => Arc::clone(slot),
            None => {
                let slot: Slot<V> = Arc::default();
                slots.insert(key.clone(), Arc::clone(&slot));
                slot
            }
        }
    }

    /// Avalia uma função infalível.
    pub fn evaluate(&self, key: &K) -> Evaluation<V>
    where
        F: Fn(&K) -> V,
    {
        let slot = self.slot(key);
        let mut cached = slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(value) = cached.as_ref() {
            self.inner.hits.fetch_add(1, Ordering::Relaxed);
            return Evaluation::hit(value.clone());
        }

        self.inner.misses.fetch_add(1, Ordering::Relaxed);
        let value = (self.inner.func)(key);
        *cached = Some(value.clone());
        self.inner.size.fetch_add(1, Ordering::Relaxed);
        Evaluation::miss(value)
    }

    /// Avalia uma função falível. Falhas não são cacheadas.
    pub fn try_evaluate<E>(&self, key: &K) -> Result<Evaluation<V>, E>
    where
        F: Fn(&K) -> Result<V, E>,
    {
        let slot = self.slot(key);
        let mut cached = slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(value) = cached.as_ref() {
            self.inner.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Evaluation::hit(value.clone()));
        }

        self.inner.misses.fetch_add(1, Ordering::Relaxed);
        match (self.inner.func)(key) {
            Ok(value) => {
                *cached = Some(value.clone());
                self.inner.size.fetch_add(1, Ordering::Relaxed);
                Ok(Evaluation::miss(value))
            }
            Err(err) => {
                self.inner.failures.fetch_add(1, Ordering::Relaxed);
                Err(err)
            }
        }
    }

    /// Retorna estatísticas do avaliador.
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            size: self.inner.size.load(Ordering::Relaxed),
            capacity: 0,
            hits: self.inner.hits.load(Ordering::Relaxed),
            misses: self.inner.misses.load(Ordering::Relaxed),
            failures: self.inner.failures.load(Ordering::Relaxed),
        }
    }
}
