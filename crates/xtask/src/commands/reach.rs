//! Show the movement range of one unit on a battle map.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use game_core::Pathfinder;

use crate::utils::{self, BattleArgs};

/// Show the cells a unit can reach this turn
#[derive(Parser)]
pub struct Reach {
    #[command(flatten)]
    battle: BattleArgs,

    /// Unit whose movement is shown
    #[arg(short, long, value_name = "ID")]
    unit: u32,

    /// Override the unit's movement range
    #[arg(short, long, value_name = "STEPS")]
    range: Option<u32>,
}

impl Reach {
    pub fn execute(self) -> Result<()> {
        let battle = self.battle.load()?;
        let factory = self.battle.factory();
        let config = factory.load_config().context("Failed to load engine config")?;
        let factions = factory.load_factions().context("Failed to load factions")?;
        let unit = utils::find_unit(&battle, self.unit)?;

        let range = self.range.unwrap_or(unit.movement_range);
        let pathfinder = Pathfinder::new(&battle.grid, &factions).with_config(&config);
        let reach = pathfinder.reachable_cells(unit, range);

        println!(
            "{} {} in '{}' (range {})",
            style("Reach of").bold().cyan(),
            unit,
            battle.name,
            range
        );
        println!();
        print!(
            "{}",
            utils::render_map(&battle.grid, &battle.units, Some(unit.position), |cell| {
                reach.contains(cell)
            })
        );
        println!();

        let mut standable = 0;
        for (cell, cost) in reach.iter() {
            if battle.grid.occupant_at(cell).is_none() {
                standable += 1;
            }
            tracing::debug!(%cell, cost, "reachable");
        }
        println!(
            "{} reachable, {} free to stand on",
            style(reach.len()).bold(),
            style(standable).bold()
        );

        Ok(())
    }
}
