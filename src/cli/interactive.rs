//! Sessão interativa do Scenarist.
//!
//! Este módulo implementa um menu usando dialoguer para registrar e
//! consultar cenários e calcular quadrados com o cache.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::memo::{square, MemoEvaluator};
use crate::registry::{RegistrationReport, ScenarioRegistry};
use crate::types::config::Config;
use crate::types::errors::SquareError;
use crate::ScenaristResult;

use super::commands::describe_report;

/// Separa uma lista de passos digitada como "a,b,c".
///
/// O texto entre vírgulas é mantido exatamente como digitado, com espaços
/// nas pontas; só segmentos vazios são descartados.
pub fn parse_steps(line: &str) -> Vec<String> {
    line.split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Executa a sessão interativa.
pub fn run_interactive(config: &Config) -> ScenaristResult<()> {
    let theme = ColorfulTheme::default();
    let mut registry = ScenarioRegistry::from_config(&config.registry);
    let mut memo = MemoEvaluator::from_config(|input: &String| square(input), &config.memo);

    println!("\nScenarist interativo (política: {})\n", registry.policy());

    loop {
        let options = vec![
            "Registrar cenário",
            "Verificar nome",
            "Procurar equivalentes",
            "Calcular quadrado",
            "Listar cenários",
            "Sair",
        ];

        let selection = Select::with_theme(&theme)
            .with_prompt("O que deseja fazer?")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => add_scenario(&theme, &mut registry)?,
            1 => check_name(&theme, &registry)?,
            2 => find_equivalents(&theme, &registry)?,
            3 => square_number(&theme, &mut memo)?,
            4 => list_scenarios(&registry),
            5 => {
                if Confirm::with_theme(&theme)
                    .with_prompt("Deseja realmente sair?")
                    .default(true)
                    .interact()?
                {
                    break;
                }
            }
            _ => {}
        }
    }

    let stats = memo.stats();
    println!(
        "\n{} cenário(s) registrados, {} quadrado(s) em cache.\n",
        registry.len(),
        stats.size
    );

    Ok(())
}

fn add_scenario(theme: &ColorfulTheme, registry: &mut ScenarioRegistry) -> ScenaristResult<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Nome do cenário")
        .interact_text()?;

    let steps: String = Input::with_theme(theme)
        .with_prompt("Passos (separados por vírgula, espaços contam)")
        .allow_empty(true)
        .interact_text()?;

    let report = RegistrationReport {
        result: registry.register(name.clone(), parse_steps(&steps)),
        name,
    };
    println!("{}\n", describe_report(&report));
    Ok(())
}

fn check_name(theme: &ColorfulTheme, registry: &ScenarioRegistry) -> ScenaristResult<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Nome do cenário")
        .interact_text()?;

    if registry.exists(&name) {
        println!("  ✓ Cenário '{}' existe.\n", name);
    } else {
        println!("  ✗ Cenário '{}' não existe.\n", name);
    }
    Ok(())
}

fn find_equivalents(theme: &ColorfulTheme, registry: &ScenarioRegistry) -> ScenaristResult<()> {
    let steps: String = Input::with_theme(theme)
        .with_prompt("Passos (separados por vírgula, espaços contam)")
        .allow_empty(true)
        .interact_text()?;

    let names = registry.find_equivalent(parse_steps(&steps));
    if names.is_empty() {
        println!("  Nenhum cenário com esses passos.\n");
    } else {
        println!("  Mesmos passos que: {}\n", names.join(", "));
    }
    Ok(())
}

fn square_number<F>(
    theme: &ColorfulTheme,
    memo: &mut MemoEvaluator<String, i64, F>,
) -> ScenaristResult<()>
where
    F: FnMut(&String) -> Result<i64, SquareError>,
{
    let input: String = Input::with_theme(theme)
        .with_prompt("Número")
        .interact_text()?;

    match memo.try_evaluate(&input) {
        Ok(eval) => println!("  {} -> {} ({})\n", input, eval.value, eval.lookup),
        Err(err) => println!("  ✗ {}\n", err),
    }
    Ok(())
}

fn list_scenarios(registry: &ScenarioRegistry) {
    if registry.is_empty() {
        println!("  Nenhum cenário registrado.\n");
        return;
    }

    for scenario in registry.iter() {
        let steps: Vec<&str> = scenario.steps().iter().collect();
        println!("  {} - [{}]", scenario.name(), steps.join(", "));
    }
    println!();
}
