//! # Scenarist
//!
//! Registro de cenários de teste com deduplicação por conjunto de passos
//! e um avaliador memoizado para funções puras.
//!
//! Os dois componentes são independentes e podem ser usados sozinhos.
//!
//! ## Módulos
//!
//! - [`registry`] - Registro de cenários e detecção de equivalentes
//! - [`memo`] - Avaliador com cache "lookup-before-compute"
//! - [`cli`] - Interface de linha de comando
//! - [`types`] - Tipos compartilhados

#[cfg(feature = "cli")]
pub mod cli;
pub mod memo;
pub mod registry;
pub mod types;

pub use types::config::Config;
pub use types::errors::{RegistryError, ScenaristError, ScenaristResult, SquareError};
