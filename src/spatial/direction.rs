//! Cardinal directions, grid axes and integer grid coordinates
//!
//! Grid rows grow southwards: moving North decrements `z`. World space keeps +Y up
//! and maps grid North onto world +Z, so a cell at row `z` sits at world `-z * spacing`.

use glam::Vec3;
use std::fmt;

/// One of the four cardinal directions, or `Unset` before a path has an entry side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// No direction recorded yet (first step of a path)
    #[default]
    Unset,
    /// Towards row `z - 1`
    North,
    /// Towards column `x + 1`
    East,
    /// Towards row `z + 1`
    South,
    /// Towards column `x - 1`
    West,
}

impl Direction {
    /// The four cardinal directions in search order
    pub const CARDINALS: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Opposite direction; `Unset` stays `Unset`
    pub const fn mirror(self) -> Self {
        match self {
            Self::Unset => Self::Unset,
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Whether this is one of the four cardinal directions
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Position in [`Direction::CARDINALS`]
    pub const fn cardinal_index(self) -> Option<usize> {
        match self {
            Self::Unset => None,
            Self::North => Some(0),
            Self::East => Some(1),
            Self::South => Some(2),
            Self::West => Some(3),
        }
    }

    /// Grid offset `(dx, dz)` of one step in this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Unset => (0, 0),
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Unit vector of this direction in world space
    pub const fn world_vector(self) -> Vec3 {
        match self {
            Self::Unset => Vec3::ZERO,
            Self::North => Vec3::Z,
            Self::East => Vec3::X,
            Self::South => Vec3::NEG_Z,
            Self::West => Vec3::NEG_X,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unset => "unset",
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// Grid line orientation used by row and column insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// A horizontal line of cells sharing one `z`
    Row,
    /// A vertical line of cells sharing one `x`
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

/// Integer grid address: `x` is the column, `z` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column index
    pub x: i32,
    /// Row index
    pub z: i32,
}

impl Point {
    /// Create a point from column and row
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Neighbouring point one step in `direction`
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dz) = direction.offset();
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    /// Translate a region-local point into the coordinates of `origin`'s space
    pub const fn translate(self, origin: Self) -> Self {
        Self {
            x: self.x + origin.x,
            z: self.z + origin.z,
        }
    }

    /// Express this point relative to `origin`
    pub const fn relative_to(self, origin: Self) -> Self {
        Self {
            x: self.x - origin.x,
            z: self.z - origin.z,
        }
    }

    /// Whether the point lies inside a `size` x `size` square anchored at the origin
    pub const fn within_square(self, size: i32) -> bool {
        self.x >= 0 && self.z >= 0 && self.x < size && self.z < size
    }

    /// `[row, column]` array index, if both coordinates are non-negative
    pub const fn index(self) -> Option<[usize; 2]> {
        if self.x < 0 || self.z < 0 {
            None
        } else {
            Some([self.z as usize, self.x as usize])
        }
    }

    /// World-space centre of this cell for a given cell spacing
    pub fn world_position(self, spacing: f32) -> Vec3 {
        Vec3::new(self.x as f32 * spacing, 0.0, -(self.z as f32) * spacing)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
