//! Breadth-first movement search over cardinal neighbours.

use std::collections::{BTreeMap, HashMap, VecDeque};

use tracing::{trace, warn};

use crate::config::GameConfig;
use crate::env::FactionTable;
use crate::state::{Grid, Position, Unit};

use super::{BlockingRule, SideBlocking};

/// Result of a reachability search: every reachable cell with its step cost.
///
/// Iteration follows ascending [`Position`] order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reachability {
    costs: BTreeMap<Position, u32>,
}

impl Reachability {
    pub fn contains(&self, position: Position) -> bool {
        self.costs.contains_key(&position)
    }

    /// Number of steps needed to reach `position`, if reachable.
    pub fn cost_to(&self, position: Position) -> Option<u32> {
        self.costs.get(&position).copied()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.costs.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.costs.iter().map(|(&position, &cost)| (position, cost))
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

/// Movement queries over a borrowed grid.
///
/// Movement is 4-directional with uniform step cost, so a plain BFS yields
/// shortest paths. Passability is delegated to a [`BlockingRule`].
pub struct Pathfinder<'a, R = SideBlocking> {
    grid: &'a Grid,
    factions: &'a FactionTable,
    rule: R,
    budget: usize,
}

impl<'a> Pathfinder<'a, SideBlocking> {
    pub fn new(grid: &'a Grid, factions: &'a FactionTable) -> Self {
        Self::with_rule(grid, factions, SideBlocking)
    }
}

impl<'a, R: BlockingRule> Pathfinder<'a, R> {
    pub fn with_rule(grid: &'a Grid, factions: &'a FactionTable, rule: R) -> Self {
        Self {
            grid,
            factions,
            rule,
            budget: GameConfig::default().search_limit(),
        }
    }

    /// Applies the node budget from `config`.
    #[must_use]
    pub fn with_config(mut self, config: &GameConfig) -> Self {
        self.budget = config.search_limit();
        self
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn factions(&self) -> &'a FactionTable {
        self.factions
    }

    /// True when `unit` may enter `position` under the active rule.
    pub fn is_passable(&self, unit: &Unit, position: Position) -> bool {
        self.rule
            .is_passable(self.grid, self.factions, unit, position)
    }

    fn can_start(&self, unit: &Unit) -> bool {
        self.grid.is_walkable(unit.position)
    }

    /// All cells `unit` can reach within `max_range` steps, start included.
    ///
    /// Returns an empty result when the unit does not stand on a walkable
    /// in-bounds cell.
    pub fn reachable_cells(&self, unit: &Unit, max_range: u32) -> Reachability {
        let mut costs = BTreeMap::new();
        if !self.can_start(unit) {
            return Reachability { costs };
        }

        let start = unit.position;
        costs.insert(start, 0);
        let mut frontier = VecDeque::from([start]);
        let mut expanded = 0usize;

        while let Some(current) = frontier.pop_front() {
            if expanded >= self.budget {
                warn!(
                    target: "nav",
                    unit = %unit.id,
                    budget = self.budget,
                    "reachability search budget exhausted"
                );
                break;
            }
            expanded += 1;

            let cost = costs.get(&current).copied().unwrap_or_default();
            let next_cost = cost + 1;
            if next_cost > max_range {
                continue;
            }

            for neighbor in self.grid.cardinal_neighbors(current) {
                if !self.is_passable(unit, neighbor) {
                    continue;
                }
                let improves = costs
                    .get(&neighbor)
                    .is_none_or(|&recorded| next_cost < recorded);
                if improves {
                    costs.insert(neighbor, next_cost);
                    frontier.push_back(neighbor);
                }
            }
        }

        trace!(
            target: "nav",
            unit = %unit.id,
            max_range,
            reachable = costs.len(),
            "reachable cells computed"
        );
        Reachability { costs }
    }

    /// Shortest path from the unit to `(x, y)`.
    ///
    /// The path excludes the start and ends at the destination. Returns
    /// `Some(vec![])` when the unit already stands there and `None` when the
    /// destination is off-grid, impassable or unreachable.
    pub fn path(&self, unit: &Unit, x: i32, y: i32) -> Option<Vec<Position>> {
        self.path_to(unit, Position::new(x, y))
    }

    /// [`Self::path`] taking a [`Position`].
    pub fn path_to(&self, unit: &Unit, destination: Position) -> Option<Vec<Position>> {
        if !self.can_start(unit) {
            return None;
        }
        let start = unit.position;
        if destination == start {
            return Some(Vec::new());
        }
        if !self.is_passable(unit, destination) {
            return None;
        }

        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut costs: HashMap<Position, u32> = HashMap::from([(start, 0)]);
        let mut frontier = VecDeque::from([start]);
        let mut expanded = 0usize;
        let mut found = false;

        while let Some(current) = frontier.pop_front() {
            if current == destination {
                found = true;
                break;
            }
            if expanded >= self.budget {
                warn!(
                    target: "nav",
                    unit = %unit.id,
                    budget = self.budget,
                    "path search budget exhausted"
                );
                break;
            }
            expanded += 1;

            let next_cost = costs.get(&current).copied().unwrap_or_default() + 1;
            for neighbor in self.grid.cardinal_neighbors(current) {
                if !self.is_passable(unit, neighbor) {
                    continue;
                }
                let improves = costs
                    .get(&neighbor)
                    .is_none_or(|&recorded| next_cost < recorded);
                if improves {
                    costs.insert(neighbor, next_cost);
                    came_from.insert(neighbor, current);
                    frontier.push_back(neighbor);
                }
            }
        }

        if !found {
            return None;
        }

        let mut path = vec![destination];
        let mut current = destination;
        while let Some(&previous) = came_from.get(&current) {
            if previous == start {
                break;
            }
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}
