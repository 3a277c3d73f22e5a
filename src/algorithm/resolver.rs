//! Direction pair to tile lookup

use crate::io::error::{Result, TrackError};
use crate::spatial::{Direction, Point, TileType};

/// Tile connecting each pair of sides, indexed by [`Direction::cardinal_index`]
const JUNCTIONS: [[TileType; 4]; 4] = [
    // North
    [
        TileType::None,
        TileType::CornerNE,
        TileType::StraightNS,
        TileType::CornerNW,
    ],
    // East
    [
        TileType::CornerNE,
        TileType::None,
        TileType::CornerSE,
        TileType::StraightWE,
    ],
    // South
    [
        TileType::StraightNS,
        TileType::CornerSE,
        TileType::None,
        TileType::CornerSW,
    ],
    // West
    [
        TileType::CornerNW,
        TileType::StraightWE,
        TileType::CornerSW,
        TileType::None,
    ],
];

/// The tile whose open sides are exactly `{entry, exit}`
///
/// Returns `TileType::None` for identical sides or when either side is `Unset`.
pub fn resolve_tile(entry: Direction, exit: Direction) -> TileType {
    match (entry.cardinal_index(), exit.cardinal_index()) {
        (Some(from), Some(to)) => JUNCTIONS
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or_default(),
        _ => TileType::None,
    }
}

/// Resolve the tile for a cell, treating an unresolvable pair as an error
///
/// # Errors
///
/// Returns an error if no road tile connects `entry` and `exit`
pub fn resolve_junction(position: Point, entry: Direction, exit: Direction) -> Result<TileType> {
    match resolve_tile(entry, exit) {
        TileType::None => Err(TrackError::UnresolvableJunction {
            position,
            entry,
            exit,
        }),
        tile => Ok(tile),
    }
}
