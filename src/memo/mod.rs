//! Avaliador com memoização para funções puras.
//!
//! Este módulo implementa um cache "lookup-before-compute" para uma
//! função determinística de um argumento. Resultados de sucesso são
//! armazenados; falhas da função nunca são cacheadas.

mod evaluator;
mod shared;
mod square;

pub use evaluator::{Evaluation, Lookup, MemoEvaluator, MemoStats};
pub use shared::SharedEvaluator;
pub use square::square;
