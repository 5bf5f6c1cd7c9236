//! Tipos compartilhados do Scenarist.

pub mod config;
pub mod errors;
