//! Interface de linha de comando do Scenarist.

pub mod commands;
pub mod interactive;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::config::EquivalencePolicy;

/// Scenarist - registro de cenários de teste e avaliador memoizado.
#[derive(Parser, Debug)]
#[command(name = "scenarist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "scenarist.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Registra os cenários de um arquivo e reporta duplicatas.
    Check {
        /// Arquivo TOML com os cenários.
        file: PathBuf,

        /// Política para cenários equivalentes (allow, reject).
        #[arg(short, long)]
        policy: Option<EquivalencePolicy>,
    },

    /// Procura cenários com os mesmos passos.
    Find {
        /// Arquivo TOML com os cenários.
        file: PathBuf,

        /// Passo a procurar (repita para vários).
        #[arg(short, long = "step")]
        steps: Vec<String>,
    },

    /// Exporta o registro para JSON.
    Export {
        /// Arquivo TOML com os cenários.
        file: PathBuf,

        /// Arquivo JSON de saída.
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Calcula quadrados usando o cache.
    Square {
        /// Números a elevar ao quadrado.
        #[arg(required = true, allow_hyphen_values = true)]
        numbers: Vec<String>,
    },

    /// Sessão interativa.
    Interactive,

    /// Mostra versão.
    Version,
}
