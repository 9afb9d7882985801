//! Utility functions for xtask commands

use anyhow::{Context, Result, anyhow, bail};
use clap::Args;
use console::style;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use game_content::{Battle, ContentFactory};
use game_core::{FactionId, Grid, Position, Unit, UnitId};

/// Arguments shared by every command that works on a battle scenario.
#[derive(Args)]
pub struct BattleArgs {
    /// Battle scenario to load (file stem under `<data>/battles`)
    #[arg(short, long, value_name = "NAME", default_value = "skirmish")]
    pub battle: String,

    /// Content directory (defaults to the bundled data)
    #[arg(short, long, value_name = "DIR")]
    pub data: Option<PathBuf>,
}

impl BattleArgs {
    pub fn factory(&self) -> ContentFactory {
        match &self.data {
            Some(dir) => ContentFactory::new(dir.clone()),
            None => ContentFactory::bundled(),
        }
    }

    pub fn load(&self) -> Result<Battle> {
        let factory = self.factory();
        factory.load_battle(&self.battle).with_context(|| {
            format!(
                "Failed to load battle '{}' from {}",
                self.battle,
                factory.data_dir().display()
            )
        })
    }
}

/// Look up a unit or explain which ids the battle has.
pub fn find_unit(battle: &Battle, id: u32) -> Result<&Unit> {
    battle.unit(UnitId(id)).ok_or_else(|| {
        let known: Vec<String> = battle.units.iter().map(|u| u.id.0.to_string()).collect();
        anyhow!(
            "Unit #{id} is not part of battle '{}'\n\nHint: known units are {}",
            battle.name,
            known.join(", ")
        )
    })
}

/// Parse `x,y` into a [`Position`].
pub fn parse_position(value: &str) -> Result<Position> {
    let Some((x, y)) = value.split_once(',') else {
        bail!("expected `x,y`, got '{value}'");
    };
    let x = x.trim().parse().with_context(|| format!("bad x in '{value}'"))?;
    let y = y.trim().parse().with_context(|| format!("bad y in '{value}'"))?;
    Ok(Position::new(x, y))
}

/// Parse a snake_case enum name (area patterns, origins).
pub fn parse_named<T>(value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse().map_err(|err| anyhow!("'{value}': {err}"))
}

/// Render the battlefield as ASCII, top row first.
///
/// `#` wall, `*` highlighted, `~` hazard, `.` floor. Units print as their
/// faction number; `subject` prints as `@`.
pub fn render_map(
    grid: &Grid,
    units: &[Unit],
    subject: Option<Position>,
    highlighted: impl Fn(Position) -> bool,
) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let position = Position::new(x, y);
            let glyph = if Some(position) == subject {
                style("@").bold().yellow().to_string()
            } else if let Some(occupant) = grid.occupant_at(position) {
                faction_glyph(occupant.faction, units, occupant.unit)
            } else if !grid.is_walkable(position) {
                style("#").dim().to_string()
            } else if highlighted(position) {
                style("*").green().to_string()
            } else if grid.hazard_at(position).is_some() {
                style("~").red().to_string()
            } else {
                ".".to_string()
            };
            out.push_str(&glyph);
        }
        out.push('\n');
    }
    out
}

fn faction_glyph(faction: FactionId, units: &[Unit], id: UnitId) -> String {
    let digit = char::from_digit(u32::from(faction.0 % 10), 10).unwrap_or('?');
    let alive = units.iter().any(|u| u.id == id && u.alive);
    if alive {
        style(digit).cyan().to_string()
    } else {
        style(digit).dim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{AreaOrigin, AreaPattern};

    #[test]
    fn positions_parse_with_spaces() {
        assert_eq!(parse_position("3, 4").unwrap(), Position::new(3, 4));
        assert_eq!(parse_position("-1,0").unwrap(), Position::new(-1, 0));
        assert!(parse_position("3").is_err());
        assert!(parse_position("a,1").is_err());
    }

    #[test]
    fn pattern_names_parse() {
        assert_eq!(
            parse_named::<AreaPattern>("line_limited").unwrap(),
            AreaPattern::LineLimited
        );
        assert!(parse_named::<AreaOrigin>("sideways").is_err());
    }

    #[test]
    fn map_marks_walls_and_highlights() {
        console::set_colors_enabled(false);
        let grid = Grid::from_rows(&["..", ".#"]).unwrap();
        let map = render_map(&grid, &[], Some(Position::new(0, 0)), |p| p.x == 1);
        assert_eq!(map, "@*\n.#\n");
    }
}
