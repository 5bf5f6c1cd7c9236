//! Tipos de erro do Scenarist.

use thiserror::Error;

/// Tipo de resultado padrão do Scenarist.
pub type ScenaristResult<T> = Result<T, ScenaristError>;

/// Erros do registro de cenários.
///
/// Separado de [`ScenaristError`] para que quem usa apenas a biblioteca
/// possa casar diretamente com as variantes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Cenário '{0}' já está registrado")]
    DuplicateName(String),

    #[error("Cenário '{name}' tem os mesmos passos que: {}", .existing.join(", "))]
    EquivalentScenario {
        /// Nome recusado.
        name: String,
        /// Cenários já registrados com o mesmo conjunto de passos.
        existing: Vec<String>,
    },
}

/// Erros da função de demonstração [`square`](crate::memo::square).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("'{0}' não é um número inteiro")]
    NotAnInteger(String),

    #[error("O quadrado de {0} excede o limite de i64")]
    Overflow(i64),
}

/// Erros possíveis no Scenarist.
#[derive(Error, Debug)]
pub enum ScenaristError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Versão de snapshot não suportada: {0}")]
    UnsupportedSnapshot(String),

    #[error("{0}")]
    Other(String),
}

impl ScenaristError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(feature = "cli")]
impl From<dialoguer::Error> for ScenaristError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(err) => Self::Io(err),
        }
    }
}
