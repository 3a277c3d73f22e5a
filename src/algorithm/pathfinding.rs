//! Exhaustive simple-path search inside a small square region
//!
//! The search is a depth-first enumeration and is exponential in the region's area,
//! which is acceptable for the patch sizes the generator uses (up to 4x4).

use crate::spatial::{Direction, Point};

/// One cell of a path and the side through which the path entered it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathStep {
    /// Cell visited by the path
    pub point: Point,
    /// Side facing the previous cell; `Unset` on the first step
    pub entry: Direction,
}

/// Ordered cells from entry to goal, never repeating a point
pub type Path = Vec<PathStep>;

/// Enumerate every simple path from `entry` to `goal` within `[0, bounds)` squared
///
/// Directions are tried in [`Direction::CARDINALS`] order, so results are
/// deterministic. Returns no paths when either endpoint is out of bounds; a single
/// one-step path when they coincide.
pub fn find_paths(entry: Point, goal: Point, bounds: usize) -> Vec<Path> {
    let size = bounds as i32;
    let mut results = Vec::new();

    if !entry.within_square(size) || !goal.within_square(size) {
        return results;
    }

    let root = vec![PathStep {
        point: entry,
        entry: Direction::Unset,
    }];
    extend_paths(&root, goal, size, &mut results);
    results
}

fn extend_paths(path: &[PathStep], goal: Point, size: i32, results: &mut Vec<Path>) {
    let Some(current) = path.last() else {
        return;
    };

    if current.point == goal {
        results.push(path.to_vec());
        return;
    }

    for direction in Direction::CARDINALS {
        let next = current.point.step(direction);

        if !next.within_square(size) || path.iter().any(|step| step.point == next) {
            continue;
        }

        // Each branch extends its own copy; siblings never see it
        let mut branch = path.to_vec();
        branch.push(PathStep {
            point: next,
            entry: direction.mirror(),
        });
        extend_paths(&branch, goal, size, results);
    }
}

/// Whether a path visits no point twice and moves one cell at a time
pub fn is_simple_path(path: &[PathStep]) -> bool {
    let unique = path
        .iter()
        .enumerate()
        .all(|(i, step)| path.iter().skip(i + 1).all(|later| later.point != step.point));

    let contiguous = path
        .windows(2)
        .all(|pair| match pair {
            [previous, next] => next.point.step(next.entry) == previous.point,
            _ => true,
        });

    unique && contiguous
}
