use std::fmt;

/// Unique identifier for a unit taking part in a battle.
///
/// The derived ordering is the documented tie-break order: whenever two
/// candidates score the same, the one with the lower id wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in cell coordinates.
///
/// Ordered by `x`, then `y`. Every set or map keyed by position iterates in
/// this order, which makes "first seen" tie-breaks reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Sum of absolute coordinate differences. Movement cost and skill range.
    pub fn manhattan(self, other: Position) -> u32 {
        manhattan(self, other)
    }

    /// Largest absolute coordinate difference. Melee adjacency and attack range.
    pub fn chebyshev(self, other: Position) -> u32 {
        chebyshev(self, other)
    }

    /// True when `other` is one of the eight surrounding cells.
    pub fn is_adjacent(self, other: Position) -> bool {
        chebyshev(self, other) == 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Manhattan distance, `|dx| + |dy|`.
pub fn manhattan(a: Position, b: Position) -> u32 {
    (a.x - b.x).unsigned_abs() + (a.y - b.y).unsigned_abs()
}

/// Chebyshev distance, `max(|dx|, |dy|)`.
pub fn chebyshev(a: Position, b: Position) -> u32 {
    let dx = (a.x - b.x).unsigned_abs();
    let dy = (a.y - b.y).unsigned_abs();
    dx.max(dy)
}

/// One of the four grid axes a cardinal pattern may follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    North,
    East,
    South,
    West,
}

impl CardinalDirection {
    /// Neighbour expansion order used by every search in the crate.
    pub const ALL: [CardinalDirection; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Unit step for this direction. North is `-y`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Returns the direction from `from` toward `to` when both lie on the
    /// same row or column. Diagonal or identical positions yield `None`.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        match (dx.signum(), dy.signum()) {
            (0, -1) => Some(Self::North),
            (1, 0) => Some(Self::East),
            (0, 1) => Some(Self::South),
            (-1, 0) => Some(Self::West),
            _ => None,
        }
    }
}

/// Integer resource meter (health) tracked per unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    /// Current value as a percentage of the maximum, clamped to `0..=100`.
    ///
    /// A meter without a maximum counts as full.
    pub fn percent(&self) -> u32 {
        if self.maximum == 0 {
            return 100;
        }
        ((self.current.min(self.maximum) as u64 * 100) / self.maximum as u64) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_use_their_own_metric() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);

        let c = Position::new(-2, -2);
        let d = Position::new(2, 2);
        assert_eq!(c.manhattan(d), 8);
        assert_eq!(c.chebyshev(d), 4);
    }

    #[test]
    fn diagonal_neighbour_is_adjacent() {
        let origin = Position::new(5, 5);
        assert!(origin.is_adjacent(Position::new(6, 6)));
        assert!(origin.is_adjacent(Position::new(5, 4)));
        assert!(!origin.is_adjacent(origin));
        assert!(!origin.is_adjacent(Position::new(7, 5)));
    }

    #[test]
    fn cardinal_direction_between_positions() {
        let origin = Position::new(2, 2);
        assert_eq!(
            CardinalDirection::between(origin, Position::new(2, 0)),
            Some(CardinalDirection::North)
        );
        assert_eq!(
            CardinalDirection::between(origin, Position::new(9, 2)),
            Some(CardinalDirection::East)
        );
        assert_eq!(CardinalDirection::between(origin, Position::new(3, 3)), None);
        assert_eq!(CardinalDirection::between(origin, origin), None);
    }

    #[test]
    fn meter_percent() {
        assert_eq!(ResourceMeter::new(50, 100).percent(), 50);
        assert_eq!(ResourceMeter::new(0, 100).percent(), 0);
        assert_eq!(ResourceMeter::new(7, 10).percent(), 70);
        assert_eq!(ResourceMeter::new(120, 100).percent(), 100);
        assert_eq!(ResourceMeter::new(0, 0).percent(), 100);
    }
}
