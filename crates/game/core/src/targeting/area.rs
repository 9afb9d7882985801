use crate::state::{CardinalDirection, Grid, Position, Skill, manhattan};

use super::{AreaOrigin, AreaPattern, rasterize_line, rescale_toward};

/// Ordered set of cells hit by an area effect.
///
/// Keeps generation order (line cells run outward from the anchor) and never
/// holds duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AffectedArea {
    cells: Vec<Position>,
}

impl AffectedArea {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, position: Position) {
        if !self.cells.contains(&position) {
            self.cells.push(position);
        }
    }

    /// Appends without the duplicate scan; for shapes that visit each cell once.
    fn push_distinct(&mut self, position: Position) {
        self.cells.push(position);
    }

    fn single(position: Position) -> Self {
        Self {
            cells: vec![position],
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.cells
    }

    pub fn into_vec(self) -> Vec<Position> {
        self.cells
    }
}

impl<'a> IntoIterator for &'a AffectedArea {
    type Item = &'a Position;
    type IntoIter = core::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Computes area-of-effect footprints on a borrowed grid.
///
/// Pure: the same grid and arguments always give the same cells. Degenerate
/// requests (no pattern, zero size, a line or fan with source equal to
/// target, diagonal fan) give an empty area rather than an error. A cloud
/// cast on the caster's own cell still covers the ring around it.
#[derive(Clone, Copy, Debug)]
pub struct AreaEffectGeometry<'a> {
    grid: &'a Grid,
}

impl<'a> AreaEffectGeometry<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Footprint of `skill` cast from `source` at `target`.
    pub fn for_skill(&self, skill: &Skill, source: Position, target: Position) -> AffectedArea {
        let spec = skill.area;
        self.affected_cells(spec.pattern, spec.origin, source, target, spec.size)
    }

    /// Cells hit by `pattern` anchored per `origin`.
    ///
    /// The anchor is `source` for [`AreaOrigin::FromCaster`] and `target` for
    /// [`AreaOrigin::AtTarget`]; the direction is always source to target.
    pub fn affected_cells(
        &self,
        pattern: AreaPattern,
        origin: AreaOrigin,
        source: Position,
        target: Position,
        size: u32,
    ) -> AffectedArea {
        let anchor = match origin {
            AreaOrigin::FromCaster => source,
            AreaOrigin::AtTarget => target,
        };

        match pattern {
            AreaPattern::None => AffectedArea::new(),
            AreaPattern::LinePassthrough => self.line(origin, anchor, source, target, size),
            AreaPattern::LineLimited => self.limited_line(origin, anchor, source, target, size),
            AreaPattern::Cloud => self.cloud(anchor, size),
            AreaPattern::Fan => self.fan(anchor, source, target, size),
        }
    }

    /// Line end point before truncation: the anchor displaced by the
    /// source-to-target vector.
    fn line_end(anchor: Position, source: Position, target: Position) -> Position {
        anchor.offset(target.x - source.x, target.y - source.y)
    }

    fn line(
        &self,
        origin: AreaOrigin,
        anchor: Position,
        source: Position,
        target: Position,
        size: u32,
    ) -> AffectedArea {
        let mut area = AffectedArea::new();
        if size == 0 || source == target {
            return area;
        }

        let end = rescale_toward(anchor, Self::line_end(anchor, source, target), size);
        let skip = match origin {
            AreaOrigin::FromCaster => 1,
            AreaOrigin::AtTarget => 0,
        };
        for cell in rasterize_line(anchor, end).into_iter().skip(skip) {
            if self.grid.contains(cell) {
                area.push(cell);
            }
        }
        area
    }

    fn limited_line(
        &self,
        origin: AreaOrigin,
        anchor: Position,
        source: Position,
        target: Position,
        size: u32,
    ) -> AffectedArea {
        let line = self.line(origin, anchor, source, target, size);

        if let Some(hit) = line.iter().find(|&cell| self.grid.is_occupied(cell)) {
            return AffectedArea::single(hit);
        }

        let aimed = Self::line_end(anchor, source, target);
        let mut best: Option<(Position, u32)> = None;
        for cell in line.iter() {
            let distance = manhattan(cell, aimed);
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((cell, distance));
            }
        }
        best.map(|(cell, _)| AffectedArea::single(cell))
            .unwrap_or_default()
    }

    fn cloud(&self, anchor: Position, size: u32) -> AffectedArea {
        let mut area = AffectedArea::new();
        let radius = i64::from(size);
        let (Some(xs), Some(ys)) = (
            in_grid_span(anchor.x, 1, self.grid.width(), radius),
            in_grid_span(anchor.y, 1, self.grid.height(), radius),
        ) else {
            return area;
        };

        for dy in ys.0..=ys.1 {
            for dx in xs.0..=xs.1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                area.push_distinct(shifted(anchor, dx, dy));
            }
        }
        area
    }

    fn fan(&self, anchor: Position, source: Position, target: Position, size: u32) -> AffectedArea {
        let mut area = AffectedArea::new();
        let Some(direction) = CardinalDirection::between(source, target) else {
            return area;
        };
        let (fx, fy) = direction.delta();
        // Perpendicular axis.
        let (px, py) = (-fy, fx);

        let forward = if fx != 0 {
            in_grid_span(anchor.x, fx, self.grid.width(), i64::from(size))
        } else {
            in_grid_span(anchor.y, fy, self.grid.height(), i64::from(size))
        };
        let Some((first, last)) = forward else {
            return area;
        };

        for depth in first.max(1)..=last {
            let spread = if px != 0 {
                in_grid_span(anchor.x, px, self.grid.width(), depth)
            } else {
                in_grid_span(anchor.y, py, self.grid.height(), depth)
            };
            let Some((low, high)) = spread else {
                continue;
            };
            for side in low..=high {
                let dx = i64::from(fx) * depth + i64::from(px) * side;
                let dy = i64::from(fy) * depth + i64::from(py) * side;
                area.push_distinct(shifted(anchor, dx, dy));
            }
        }
        area
    }
}

/// Offsets `k` in `-reach..=reach` for which `origin + step * k` lies in
/// `0..extent`. `step` is `1` or `-1`.
fn in_grid_span(origin: i32, step: i32, extent: i32, reach: i64) -> Option<(i64, i64)> {
    let (origin, last) = (i64::from(origin), i64::from(extent) - 1);
    let (low, high) = if step >= 0 {
        (-origin, last - origin)
    } else {
        (origin - last, origin)
    };
    let (low, high) = (low.max(-reach), high.min(reach));
    (low <= high).then_some((low, high))
}

/// `anchor` moved by an offset known to land inside the grid.
fn shifted(anchor: Position, dx: i64, dy: i64) -> Position {
    Position::new(
        (i64::from(anchor.x) + dx) as i32,
        (i64::from(anchor.y) + dy) as i32,
    )
}
