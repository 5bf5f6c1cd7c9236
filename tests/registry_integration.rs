//! Testes de integração para o registro de cenários.

use std::path::PathBuf;
use tempfile::TempDir;

use scenarist::registry::{RegisterOutcome, ScenarioFile, ScenarioRegistry, SharedRegistry};
use scenarist::types::config::{EquivalencePolicy, RegistryConfig};
use scenarist::RegistryError;

const STEPS_1: [&str; 3] = ["open browser", "navigate to page", "click login"];
const STEPS_2: [&str; 3] = ["open browser", "navigate to page", "fill form"];
const STEPS_3: [&str; 3] = ["open browser", "navigate to page", "click login"];

fn write_scenarios(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("scenarios.toml");
    std::fs::write(&path, content).expect("Failed to write scenarios");
    (temp_dir, path)
}

// Cenários das tarefas originais
mod homework_tests {
    use super::*;

    #[test]
    fn test_duplicate_of_first_found_in_insertion_order() {
        let mut registry = ScenarioRegistry::new();

        assert_eq!(
            registry.register("Test Case 1", STEPS_1),
            Ok(RegisterOutcome::Registered)
        );
        assert_eq!(
            registry.register("Test Case 2", STEPS_2),
            Ok(RegisterOutcome::Registered)
        );
        assert_eq!(
            registry.register("Test Case 3", STEPS_3),
            Ok(RegisterOutcome::EquivalentTo(vec!["Test Case 1".into()]))
        );

        assert_eq!(
            registry.find_equivalent(STEPS_1),
            vec!["Test Case 1", "Test Case 3"]
        );
        assert_eq!(registry.find_equivalent(STEPS_2), vec!["Test Case 2"]);
    }

    #[test]
    fn test_new_name_with_existing_steps() {
        let mut registry = ScenarioRegistry::with_policy(EquivalencePolicy::Reject);
        registry.register("Test Case 1", STEPS_1).unwrap();
        registry.register("Test Case 2", STEPS_2).unwrap();

        assert_eq!(
            registry.register("Test Case 4", STEPS_1),
            Err(RegistryError::EquivalentScenario {
                name: "Test Case 4".to_string(),
                existing: vec!["Test Case 1".to_string()],
            })
        );

        let unique = ["open browser", "navigate to page", "close pop-up", "check header"];
        assert_eq!(
            registry.register("Test Case 5", unique),
            Ok(RegisterOutcome::Registered)
        );
    }

    #[test]
    fn test_check_by_name() {
        let mut registry = ScenarioRegistry::new();
        registry.register("Login Test", STEPS_1).unwrap();
        registry.register("Fill Form Test", STEPS_2).unwrap();

        assert!(registry.exists("Login Test"));
        assert!(registry.exists("Fill Form Test"));
        assert!(!registry.exists("Logout Test"));
        assert_eq!(
            registry.register("Login Test", STEPS_2),
            Err(RegistryError::DuplicateName("Login Test".to_string()))
        );
    }
}

// Testes de arquivo de definição
mod file_tests {
    use super::*;

    #[test]
    fn test_register_from_file() {
        let (_temp_dir, path) = write_scenarios(
            r#"
            [[scenario]]
            name = "Test Case 1"
            steps = ["open browser", "navigate to page", "click login"]

            [[scenario]]
            name = "Test Case 2"
            steps = ["open browser", "navigate to page", "fill form"]

            [[scenario]]
            name = "Test Case 3"
            steps = ["click login", "open browser", "navigate to page", "click login"]

            [[scenario]]
            name = "Test Case 1"
            steps = []
            "#,
        );

        let file = ScenarioFile::load(&path).expect("Failed to load scenarios");
        let mut registry = ScenarioRegistry::from_config(&RegistryConfig::default());
        let reports = registry.register_all(file.scenarios);

        assert_eq!(reports.len(), 4);
        assert_eq!(
            reports[2].result.as_ref().unwrap().equivalents(),
            ["Test Case 1".to_string()]
        );
        assert_eq!(
            reports[3].result,
            Err(RegistryError::DuplicateName("Test Case 1".to_string()))
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = ScenarioFile::load(temp_dir.path().join("missing.toml"));
        assert!(result.is_err());
    }
}

// Testes do registro compartilhado
mod shared_tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_parallel_runners_share_registry() {
        let registry = SharedRegistry::new(ScenarioRegistry::new());

        thread::scope(|s| {
            for _ in 0..4 {
                let registry = registry.clone();
                s.spawn(move || {
                    for case in 0..10 {
                        let _ = registry.register(
                            format!("Case {}", case),
                            [format!("step {}", case % 5)],
                        );
                    }
                });
            }
        });

        // Cada nome é registrado uma única vez
        assert_eq!(registry.len(), 10);
        assert_eq!(
            registry.find_equivalent(["step 0"]),
            vec!["Case 0", "Case 5"]
        );
        assert!(registry.exists("Case 9"));
        assert_eq!(registry.snapshot().scenarios.len(), 10);
    }
}
