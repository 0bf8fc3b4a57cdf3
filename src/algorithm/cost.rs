//! Integer movement costs and the octile distance heuristic
//!
//! Costs are scaled by 10 so diagonal moves (about `10 * sqrt(2)`) stay in
//! integer arithmetic.

use crate::spatial::cell::Coord;

/// Cost of a horizontal or vertical move
pub const ORTHOGONAL_COST: u32 = 10;
/// Cost of a diagonal move
pub const DIAGONAL_COST: u32 = 14;

/// Cost of moving between two adjacent cells
///
/// Non-adjacent input is a caller error; it is only checked in debug builds.
pub fn step_cost(from: Coord, to: Coord) -> u32 {
    debug_assert!(
        from.is_adjacent_to(to),
        "step_cost called with non-adjacent cells {from} and {to}"
    );
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

/// Octile distance estimate from `from` to `target`
///
/// Takes as many diagonal steps as the shorter axis allows, then straight
/// steps for the remainder. Never overestimates 8-directional movement cost.
pub const fn heuristic(from: Coord, target: Coord) -> u32 {
    let dx = from.col.abs_diff(target.col) as u32;
    let dy = from.row.abs_diff(target.row) as u32;
    let (min_d, max_d) = if dx < dy { (dx, dy) } else { (dy, dx) };
    min_d * DIAGONAL_COST + (max_d - min_d) * ORTHOGONAL_COST
}

/// Total step cost along consecutive cells of a path
///
/// Empty and single-cell paths cost nothing.
pub fn path_cost(path: &[Coord]) -> u32 {
    path.windows(2)
        .map(|pair| match pair {
            [from, to] => step_cost(*from, *to),
            _ => 0,
        })
        .sum()
}
