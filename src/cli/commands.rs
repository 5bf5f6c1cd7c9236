//! Implementação dos comandos CLI do Scenarist.

use std::path::{Path, PathBuf};

use crate::memo::{square, MemoEvaluator};
use crate::registry::{RegisterOutcome, RegistrationReport, ScenarioFile, ScenarioRegistry};
use crate::types::config::{Config, EquivalencePolicy};
use crate::types::errors::RegistryError;
use crate::{ScenaristError, ScenaristResult};

/// Initializes configuration in the specified directory.
pub fn init(path: Option<PathBuf>) -> ScenaristResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    // Create directory if it doesn't exist
    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("scenarist.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    let config = Config::default_config();
    config.save(&config_path)?;

    println!("Scenarist initialized successfully!");
    println!("Configuration created at: {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Describe scenarios in a TOML file ([[scenario]] name/steps)");
    println!("  2. Check them for duplicates: scenarist check scenarios.toml");

    Ok(())
}

/// Loads a scenario file into a fresh registry.
fn load_registry(
    file: &Path,
    policy: EquivalencePolicy,
) -> ScenaristResult<(ScenarioRegistry, Vec<RegistrationReport>)> {
    let definitions = ScenarioFile::load(file)?;
    let mut registry = ScenarioRegistry::with_policy(policy);
    let reports = registry.register_all(definitions.scenarios);
    Ok((registry, reports))
}

/// Formata uma linha de relatório para um cenário.
pub fn describe_report(report: &RegistrationReport) -> String {
    match &report.result {
        Ok(RegisterOutcome::Registered) => format!("  ✓ {} - registered", report.name),
        Ok(RegisterOutcome::EquivalentTo(names)) => format!(
            "  ! {} - registered, same steps as: {}",
            report.name,
            names.join(", ")
        ),
        Err(RegistryError::DuplicateName(_)) => {
            format!("  ✗ {} - duplicate name, not registered", report.name)
        }
        Err(RegistryError::EquivalentScenario { existing, .. }) => format!(
            "  ✗ {} - rejected, same steps as: {}",
            report.name,
            existing.join(", ")
        ),
    }
}

/// Registers every scenario from a file and reports duplicates.
pub fn check(
    file: &Path,
    policy: Option<EquivalencePolicy>,
    config: &Config,
) -> ScenaristResult<()> {
    let policy = policy.unwrap_or(config.registry.equivalence_policy);
    tracing::debug!(file = %file.display(), policy = %policy, "Checking scenarios");

    let (registry, reports) = load_registry(file, policy)?;

    println!(
        "Checking scenarios in {} (policy: {})\n",
        file.display(),
        policy
    );
    for report in &reports {
        println!("{}", describe_report(report));
    }

    let conflicts = reports.iter().filter(|r| r.is_conflict()).count();
    let equivalents = reports
        .iter()
        .filter(|r| matches!(r.result, Ok(RegisterOutcome::EquivalentTo(_))))
        .count();

    println!();
    println!(
        "Summary: {} registered, {} with equivalents, {} conflicts",
        registry.len(),
        equivalents,
        conflicts
    );

    if conflicts > 0 {
        return Err(ScenaristError::other(format!(
            "{} scenario(s) were not registered",
            conflicts
        )));
    }

    Ok(())
}

/// Prints every scenario in a file with the given steps.
pub fn find(file: &Path, steps: &[String], config: &Config) -> ScenaristResult<()> {
    let (registry, _) = load_registry(file, config.registry.equivalence_policy)?;

    let names = registry.find_equivalent(steps.iter().cloned());
    if names.is_empty() {
        println!("No equivalent scenario found.");
    } else {
        println!("Equivalent scenarios:");
        for name in names {
            println!("  - {}", name);
        }
    }

    Ok(())
}

/// Registers the scenarios in a file and writes a JSON snapshot.
pub fn export(file: &Path, output: &Path, config: &Config) -> ScenaristResult<()> {
    let (registry, reports) = load_registry(file, config.registry.equivalence_policy)?;

    for report in reports.iter().filter(|r| r.is_conflict()) {
        tracing::warn!(name = %report.name, "Scenario skipped during export");
    }

    registry.export(output)?;
    println!(
        "{} scenario(s) exported to {}",
        registry.len(),
        output.display()
    );

    Ok(())
}

/// Calcula quadrados com memoização, reportando cache hits.
pub fn square_numbers(numbers: &[String], config: &Config) -> ScenaristResult<()> {
    let mut memo = MemoEvaluator::from_config(|input: &String| square(input), &config.memo);
    let mut failed = 0;

    for number in numbers {
        match memo.try_evaluate(number) {
            Ok(eval) => println!("{} -> {} ({})", number, eval.value, eval.lookup),
            Err(err) => {
                failed += 1;
                println!("{} -> error: {}", number, err);
            }
        }
    }

    let stats = memo.stats();
    tracing::debug!(
        hits = stats.hits,
        misses = stats.misses,
        failures = stats.failures,
        "Square evaluation finished"
    );
    println!(
        "\nCache: {} entries, {} hits, {} misses ({:.0}% hit rate)",
        stats.size,
        stats.hits,
        stats.misses,
        stats.hit_rate() * 100.0
    );

    if failed > 0 {
        return Err(ScenaristError::other(format!(
            "{} input(s) could not be squared",
            failed
        )));
    }

    Ok(())
}

/// Mostra versão.
pub fn version() {
    println!("scenarist {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_report() {
        let registered = RegistrationReport {
            name: "A".to_string(),
            result: Ok(RegisterOutcome::Registered),
        };
        let equivalent = RegistrationReport {
            name: "B".to_string(),
            result: Ok(RegisterOutcome::EquivalentTo(vec!["A".to_string()])),
        };
        let duplicate = RegistrationReport {
            name: "A".to_string(),
            result: Err(RegistryError::DuplicateName("A".to_string())),
        };

        assert!(describe_report(&registered).contains("registered"));
        assert!(describe_report(&equivalent).contains("same steps as: A"));
        assert!(describe_report(&duplicate).contains("duplicate name"));
    }
}
