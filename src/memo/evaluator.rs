//! Avaliador memoizado de thread única.

use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;

use lru::LruCache;

use crate::types::config::MemoConfig;

/// Origem de um valor retornado pelo avaliador.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Valor encontrado no cache.
    Hit,
    /// Valor calculado nesta chamada.
    Miss,
}

impl Lookup {
    /// Indica se o valor veio do cache.
    pub fn is_hit(self) -> bool {
        matches!(self, Lookup::Hit)
    }
}

impl std::fmt::Display for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lookup::Hit => write!(f, "cached"),
            Lookup::Miss => write!(f, "computed"),
        }
    }
}

/// Resultado de uma avaliação.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation<V> {
    /// Valor de `f(key)`.
    pub value: V,

    /// Se o valor veio do cache ou foi calculado.
    pub lookup: Lookup,
}

impl<V> Evaluation<V> {
    pub(crate) fn hit(value: V) -> Self {
        Self {
            value,
            lookup: Lookup::Hit,
        }
    }

    pub(crate) fn miss(value: V) -> Self {
        Self {
            value,
            lookup: Lookup::Miss,
        }
    }
}

/// Estatísticas do avaliador.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoStats {
    /// Número atual de entradas.
    pub size: usize,

    /// Capacidade máxima (0 = ilimitado).
    pub capacity: usize,

    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de erros (cache misses).
    pub misses: u64,

    /// Número de chamadas em que a função falhou.
    pub failures: u64,
}

impl MemoStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Armazenamento das entradas: ilimitado ou LRU.
enum Store<K: Hash + Eq, V> {
    Unbounded(HashMap<K, V>),
    Bounded(LruCache<K, V>),
}

impl<K: Hash + Eq, V> Store<K, V> {
    fn new(capacity: usize) -> Self {
        match NonZeroUsize::new(capacity) {
            Some(cap) => Store::Bounded(LruCache::new(cap)),
            None => Store::Unbounded(HashMap::new()),
        }
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        match self {
            Store::Unbounded(map) => map.get(key),
            Store::Bounded(cache) => cache.get(key),
        }
    }

    fn peek(&self, key: &K) -> Option<&V> {
        match self {
            Store::Unbounded(map) => map.get(key),
            Store::Bounded(cache) => cache.peek(key),
        }
    }

    fn insert(&mut self, key: K, value: V) {
        match self {
            Store::Unbounded(map) => {
                map.insert(key, value);
            }
            Store::Bounded(cache) => {
                cache.put(key, value);
            }
        }
    }

    fn len(&self) -> usize {
        match self {
            Store::Unbounded(map) => map.len(),
            Store::Bounded(cache) => cache.len(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            Store::Unbounded(_) => 0,
            Store::Bounded(cache) => cache.cap().get(),
        }
    }

    fn clear(&mut self) {
        match self {
            Store::Unbounded(map) => map.clear(),
            Store::Bounded(cache) => cache.clear(),
        }
    }
}

/// Envolve uma função pura com um cache consultado antes do cálculo.
///
/// Para toda chave presente no cache, o valor armazenado é igual a
/// `f(key)`. Use [`evaluate`](Self::evaluate) para funções infalíveis e
/// [`try_evaluate`](Self::try_evaluate) para funções que retornam
/// `Result`; um `Err` é propagado sem ser cacheado.
pub struct MemoEvaluator<K: Hash + Eq, V, F> {
    func: F,
    store: Store<K, V>,
    hits: u64,
    misses: u64,
    failures: u64,
}

impl<K, V, F> MemoEvaluator<K, V, F>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Cria um avaliador com cache ilimitado.
    pub fn new(func: F) -> Self {
        Self::with_capacity(func, 0)
    }

    /// Cria um avaliador com no máximo `capacity` entradas (LRU).
    ///
    /// `capacity == 0` significa cache ilimitado.
    pub fn with_capacity(func: F, capacity: usize) -> Self {
        Self {
            func,
            store: Store::new(capacity),
            hits: 0,
            misses: 0,
            failures: 0,
        }
    }

    /// Cria um avaliador a partir da configuração.
    pub fn from_config(func: F, config: &MemoConfig) -> Self {
        Self::with_capacity(func, config.capacity)
    }

    /// Avalia uma função infalível.
    pub fn evaluate(&mut self, key: &K) -> Evaluation<V>
    where
        F: FnMut(&K) -> V,
    {
        if let Some(value) = self.store.get(key) {
            self.hits += 1;
            return Evaluation::hit(value.clone());
        }

        self.misses += 1;
        let value = (self.func)(key);
        self.store.insert(key.clone(), value.clone());
        Evaluation::miss(value)
    }

    /// Avalia uma função falível.
    ///
    /// Um `Err` não é armazenado: a próxima chamada com a mesma chave
    /// chama a função novamente.
    pub fn try_evaluate<E>(&mut self, key: &K) -> Result<Evaluation<V>, E>
    where
        F: FnMut(&K) -> Result<V, E>,
    {
        if let Some(value) = self.store.get(key) {
            self.hits += 1;
            return Ok(Evaluation::hit(value.clone()));
        }

        self.misses += 1;
        match (self.func)(key) {
            Ok(value) => {
                self.store.insert(key.clone(), value.clone());
                Ok(Evaluation::miss(value))
            }
            Err(err) => {
                self.failures += 1;
                Err(err)
            }
        }
    }

    /// Consulta o cache sem calcular e sem alterar a ordem LRU.
    pub fn cached(&self, key: &K) -> Option<&V> {
        self.store.peek(key)
    }

    /// Número de entradas no cache.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Verifica se o cache está vazio.
    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    /// Limpa todo o cache. Os contadores são preservados.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Retorna estatísticas do avaliador.
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            size: self.store.len(),
            capacity: self.store.capacity(),
            hits: self.hits,
            misses: self.misses,
            failures: self.failures,
        }
    }
}
