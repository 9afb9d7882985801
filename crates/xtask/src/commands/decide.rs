//! Run one AI decision cycle on a battle scenario.
//!
//! Every AI-controlled unit (or the one given with `--unit`) decides against
//! the same starting board; decisions are not applied.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use console::style;

use game_core::{Pathfinder, PcgRng, Unit};
use tactical_ai::{AiDecision, Strategy, TacticalAiController};

use crate::utils::{self, BattleArgs};

/// Run one decision cycle for the AI units of a battle
#[derive(Parser)]
pub struct Decide {
    #[command(flatten)]
    battle: BattleArgs,

    /// Only decide for this unit
    #[arg(short, long, value_name = "ID")]
    unit: Option<u32>,

    /// Battle seed (defaults to the scenario's seed)
    #[arg(short, long, value_name = "SEED")]
    seed: Option<u64>,

    /// Turn number mixed into the roll seed
    #[arg(short, long, value_name = "TURN", default_value_t = 0)]
    turn: u64,

    /// Use this behaviour profile for every deciding unit
    #[arg(long, value_name = "PROFILE")]
    behavior: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One line per decision
    Summary,
    /// Full JSON output
    Json,
}

impl Decide {
    pub fn execute(self) -> Result<()> {
        let battle = self.battle.load()?;
        let factory = self.battle.factory();
        let config = factory.load_config().context("Failed to load engine config")?;
        let factions = factory.load_factions().context("Failed to load factions")?;
        let behaviors = factory.load_behaviors().context("Failed to load behaviours")?;

        let deciding: Vec<&Unit> = match self.unit {
            Some(id) => vec![utils::find_unit(&battle, id)?],
            None => battle.ai_units().collect(),
        };
        if deciding.is_empty() {
            anyhow::bail!("Battle '{}' has no AI-controlled units", battle.name);
        }

        let seed = self.seed.unwrap_or(battle.seed);
        let pathfinder = Pathfinder::new(&battle.grid, &factions).with_config(&config);
        let controller = TacticalAiController::new(&battle.grid, &factions, &pathfinder, &PcgRng)
            .with_seed(seed)
            .with_turn(self.turn);

        let mut decisions = Vec::with_capacity(deciding.len());
        for unit in deciding {
            let name = self
                .behavior
                .as_deref()
                .or_else(|| battle.behavior_of(unit.id))
                .ok_or_else(|| {
                    anyhow!("Unit {} has no behaviour profile; pass --behavior", unit.id)
                })?;
            let profile = behaviors.resolve(name).map_err(anyhow::Error::msg)?;
            let strategy = Strategy::from(&profile);

            let skills = battle.skills_of(unit.id);
            let decision = controller.decide(unit, &strategy, &battle.units, skills);
            decisions.push((unit, name, decision));
        }

        match self.format {
            OutputFormat::Summary => {
                println!(
                    "{} '{}' (seed {}, turn {})",
                    style("Decisions for").bold().cyan(),
                    battle.name,
                    seed,
                    self.turn
                );
                println!();
                for (unit, name, decision) in &decisions {
                    print_summary(unit, name, decision);
                }
            }
            OutputFormat::Json => {
                let decisions: Vec<&AiDecision> = decisions.iter().map(|(_, _, d)| d).collect();
                let json = serde_json::to_string_pretty(&decisions)
                    .context("Failed to serialize decisions")?;
                println!("{json}");
            }
        }

        Ok(())
    }
}

fn print_summary(unit: &Unit, behavior: &str, decision: &AiDecision) {
    let header = format!("{unit} [{behavior}]");
    let verdict = if decision.is_wait() {
        style(decision.to_string()).dim()
    } else {
        style(decision.to_string()).green()
    };
    println!("{} {}", style(header).bold(), verdict);

    if let Some(path) = &decision.path {
        let steps: Vec<String> = path.iter().map(|step| step.to_string()).collect();
        println!("    path: {}", steps.join(" -> "));
    }
    if !decision.affected.is_empty() {
        let cells: Vec<String> = decision.affected.iter().map(|c| c.to_string()).collect();
        println!("    affects: {}", cells.join(" "));
    }
}
