//! Arquivo de definição de cenários (TOML).
//!
//! ```toml
//! [[scenario]]
//! name = "Login Test"
//! steps = ["open browser", "navigate to page", "click login"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ScenaristResult;

/// Definição de um cenário, antes da normalização.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioDefinition {
    /// Nome do cenário.
    pub name: String,

    /// Passos na ordem em que foram escritos.
    #[serde(default)]
    pub steps: Vec<String>,
}

impl ScenarioDefinition {
    /// Cria uma nova definição.
    pub fn new<I, S>(name: impl Into<String>, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }
}

/// Conteúdo de um arquivo de cenários.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioFile {
    /// Cenários na ordem do arquivo.
    #[serde(default, rename = "scenario")]
    pub scenarios: Vec<ScenarioDefinition>,
}

impl ScenarioFile {
    /// Carrega definições de um arquivo TOML.
    pub fn load<P: AsRef<Path>>(path: P) -> ScenaristResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let file = Self::parse(&content)?;

        tracing::debug!(
            path = %path.as_ref().display(),
            scenarios = file.scenarios.len(),
            "Scenario file loaded"
        );

        Ok(file)
    }

    /// Interpreta o conteúdo TOML.
    pub fn parse(content: &str) -> ScenaristResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Salva as definições em TOML.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ScenaristResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
