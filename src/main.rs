use clap::Parser;
use scenarist::cli::{Cli, Commands};
use scenarist::types::config::Config;
use scenarist::ScenaristResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ScenaristResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let (config, load_error) = match Config::load_or_default(&cli.config) {
        Ok(config) => (config, None),
        Err(err) => (Config::default_config(), Some(err)),
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("scenarist={}", log_level)
            .parse()
            .unwrap_or_else(|_| {
                "scenarist=info"
                    .parse()
                    .expect("fallback directive is valid")
            }),
    );

    let (text_layer, json_layer) = if config.general.log_format == "json" {
        (None, Some(fmt::layer().json().with_writer(std::io::stderr)))
    } else {
        (Some(fmt::layer().with_writer(std::io::stderr)), None)
    };

    tracing_subscriber::registry()
        .with(text_layer)
        .with(json_layer)
        .with(filter)
        .init();

    match load_error {
        Some(err) => tracing::warn!(
            path = %cli.config.display(),
            error = %err,
            "Invalid configuration, using defaults"
        ),
        None => tracing::debug!("Configuration loaded from: {}", cli.config.display()),
    }

    match cli.command {
        Commands::Init { path } => {
            scenarist::cli::commands::init(path)?;
        }
        Commands::Check { file, policy } => {
            scenarist::cli::commands::check(&file, policy, &config)?;
        }
        Commands::Find { file, steps } => {
            scenarist::cli::commands::find(&file, &steps, &config)?;
        }
        Commands::Export { file, output } => {
            scenarist::cli::commands::export(&file, &output, &config)?;
        }
        Commands::Square { numbers } => {
            scenarist::cli::commands::square_numbers(&numbers, &config)?;
        }
        Commands::Interactive => {
            scenarist::cli::interactive::run_interactive(&config)?;
        }
        Commands::Version => {
            scenarist::cli::commands::version();
        }
    }

    Ok(())
}
