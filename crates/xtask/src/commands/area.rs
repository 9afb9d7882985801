//! Preview the footprint of a skill on a battle map.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use console::style;

use game_core::{AreaEffectGeometry, AreaOrigin, AreaPattern, AreaSpec, Position, SkillId};

use crate::utils::{self, BattleArgs};

/// Show the cells a skill would affect
#[derive(Parser)]
pub struct Area {
    #[command(flatten)]
    battle: BattleArgs,

    /// Skill from the catalog whose area is previewed
    #[arg(short, long, value_name = "ID", required_unless_present = "pattern")]
    skill: Option<u16>,

    /// Ad-hoc pattern instead of a catalog skill (line_passthrough, line_limited, cloud, fan)
    #[arg(
        long,
        value_name = "PATTERN",
        conflicts_with = "skill",
        value_parser = utils::parse_named::<AreaPattern>
    )]
    pattern: Option<AreaPattern>,

    /// Anchor for an ad-hoc pattern (from_caster, at_target)
    #[arg(
        long,
        value_name = "ORIGIN",
        default_value = "from_caster",
        requires = "pattern",
        value_parser = utils::parse_named::<AreaOrigin>
    )]
    origin: AreaOrigin,

    /// Size for an ad-hoc pattern
    #[arg(long, value_name = "N", default_value_t = 1, requires = "pattern")]
    size: u32,

    /// Caster cell as `x,y`
    #[arg(long, value_name = "X,Y", value_parser = utils::parse_position)]
    from: Position,

    /// Target cell as `x,y`
    #[arg(long, value_name = "X,Y", value_parser = utils::parse_position)]
    to: Position,
}

impl Area {
    pub fn execute(self) -> Result<()> {
        let battle = self.battle.load()?;
        let geometry = AreaEffectGeometry::new(&battle.grid);

        let (label, spec) = match self.pattern {
            Some(pattern) => (
                format!("{pattern} pattern"),
                AreaSpec {
                    pattern,
                    origin: self.origin,
                    size: self.size,
                },
            ),
            None => {
                let id = SkillId(self.skill.unwrap_or_default());
                let catalog = self
                    .battle
                    .factory()
                    .load_skills()
                    .context("Failed to load skill catalog")?;
                let skill = catalog
                    .get(id)
                    .ok_or_else(|| anyhow!("Skill {id} is not in the catalog"))?;
                (format!("{} ({id})", skill.name), skill.area)
            }
        };

        let area =
            geometry.affected_cells(spec.pattern, spec.origin, self.from, self.to, spec.size);

        println!(
            "{} {} from {} to {}: {} {}, size {}",
            style("Area of").bold().cyan(),
            label,
            self.from,
            self.to,
            spec.pattern,
            spec.origin,
            spec.size
        );
        println!();
        print!(
            "{}",
            utils::render_map(&battle.grid, &battle.units, Some(self.from), |cell| {
                area.contains(cell)
            })
        );
        println!();

        if area.is_empty() {
            println!("{}", style("No cells affected").yellow());
        } else {
            let cells: Vec<String> = area.iter().map(|cell| cell.to_string()).collect();
            println!("{} cells: {}", style(area.len()).bold(), cells.join(" "));
        }

        Ok(())
    }
}
