//! Integer line rasterization.

use crate::config::GameConfig;
use crate::state::{Position, chebyshev};

/// Cells of the 8-connected Bresenham line from `from` to `to`, both
/// included.
///
/// Consecutive cells are always Chebyshev-adjacent. The stepper is capped at
/// the line's Chebyshev length plus [`GameConfig::LINE_STEP_MARGIN`], so it
/// terminates even if the error term misbehaves.
pub fn rasterize_line(from: Position, to: Position) -> Vec<Position> {
    let length = chebyshev(from, to);
    let max_steps = length + GameConfig::LINE_STEP_MARGIN;

    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut cells = Vec::with_capacity(length as usize + 1);
    let mut current = from;
    for _ in 0..=max_steps {
        cells.push(current);
        if current == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            current.x += sx;
        }
        if e2 <= dx {
            err += dx;
            current.y += sy;
        }
    }
    cells
}

/// Pulls `end` toward `anchor` so that the Chebyshev length of
/// `anchor -> end` is at most `max_length`.
///
/// Both components are scaled by the same factor and rounded half away from
/// zero, which keeps the direction and makes the dominant axis land exactly
/// on `max_length`.
pub fn rescale_toward(anchor: Position, end: Position, max_length: u32) -> Position {
    let length = chebyshev(anchor, end);
    if length <= max_length {
        return end;
    }
    let scale = |delta: i32| -> i32 {
        let numerator = i64::from(delta) * i64::from(max_length);
        let denominator = i64::from(length);
        let magnitude = (numerator.abs() * 2 + denominator) / (denominator * 2);
        (magnitude * numerator.signum()) as i32
    };
    anchor.offset(scale(end.x - anchor.x), scale(end.y - anchor.y))
}
