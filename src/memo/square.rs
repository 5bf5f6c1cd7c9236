//! Função de demonstração usada pela CLI.

use crate::types::errors::SquareError;

/// Calcula o quadrado de um inteiro informado como texto.
///
/// Espaços nas bordas são ignorados. Entrada inválida ou overflow
/// retornam erro.
pub fn square(input: &str) -> Result<i64, SquareError> {
    let trimmed = input.trim();
    let n: i64 = trimmed
        .parse()
        .map_err(|_| SquareError::NotAnInteger(trimmed.to_string()))?;

    n.checked_mul(n).ok_or(SquareError::Overflow(n))
}
