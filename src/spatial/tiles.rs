//! Road tile types and their open sides

use crate::spatial::direction::{Axis, Direction};
use std::fmt;

/// Shape of a single grid cell
///
/// Straight tiles connect two opposite sides, corners two perpendicular sides.
/// Corner names list their open sides, so `CornerSE` opens South and East.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileType {
    /// Empty cell
    #[default]
    None,
    /// Straight road between North and South
    StraightNS,
    /// Straight road between West and East
    StraightWE,
    /// Corner between North and East
    CornerNE,
    /// Corner between North and West
    CornerNW,
    /// Corner between South and East
    CornerSE,
    /// Corner between South and West
    CornerSW,
}

impl TileType {
    /// Every road tile type, excluding `None`
    pub const ROADS: [Self; 6] = [
        Self::StraightNS,
        Self::StraightWE,
        Self::CornerNE,
        Self::CornerNW,
        Self::CornerSE,
        Self::CornerSW,
    ];

    /// The two open sides of a road tile
    pub const fn openings(self) -> Option<[Direction; 2]> {
        match self {
            Self::None => None,
            Self::StraightNS => Some([Direction::North, Direction::South]),
            Self::StraightWE => Some([Direction::West, Direction::East]),
            Self::CornerNE => Some([Direction::North, Direction::East]),
            Self::CornerNW => Some([Direction::North, Direction::West]),
            Self::CornerSE => Some([Direction::South, Direction::East]),
            Self::CornerSW => Some([Direction::South, Direction::West]),
        }
    }

    /// Whether track continuity crosses this tile's `side`
    pub fn opens(self, side: Direction) -> bool {
        self.openings().is_some_and(|sides| sides.contains(&side))
    }

    /// Side the track leaves through when it enters through `entry`
    pub fn exit(self, entry: Direction) -> Option<Direction> {
        let [first, second] = self.openings()?;
        if entry == first {
            Some(second)
        } else if entry == second {
            Some(first)
        } else {
            None
        }
    }

    /// Whether the cell holds any road
    pub const fn is_road(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether the tile connects two opposite sides
    pub const fn is_straight(self) -> bool {
        matches!(self, Self::StraightNS | Self::StraightWE)
    }

    /// Whether the tile connects two perpendicular sides
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::CornerNE | Self::CornerNW | Self::CornerSE | Self::CornerSW
        )
    }

    /// The through-tile that may be duplicated along `axis`
    ///
    /// Duplicating a row stretches vertical roads, so only `StraightNS` survives it;
    /// columns likewise only tolerate `StraightWE`.
    pub const fn through(axis: Axis) -> Self {
        match axis {
            Axis::Row => Self::StraightNS,
            Axis::Column => Self::StraightWE,
        }
    }

    /// Rotation about +Y, in degrees, of the shared road asset drawing this tile
    ///
    /// Positive angles turn North towards East. The straight asset is modelled
    /// North-South and the corner asset South-East.
    pub const fn yaw_degrees(self) -> f32 {
        match self {
            Self::None | Self::StraightNS | Self::CornerSE => 0.0,
            Self::StraightWE | Self::CornerSW => 90.0,
            Self::CornerNE => -90.0,
            Self::CornerNW => 180.0,
        }
    }

    /// Box-drawing glyph for text previews
    pub const fn symbol(self) -> char {
        match self {
            Self::None => '·',
            Self::StraightNS => '│',
            Self::StraightWE => '─',
            Self::CornerNE => '└',
            Self::CornerNW => '┘',
            Self::CornerSE => '┌',
            Self::CornerSW => '┐',
        }
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
