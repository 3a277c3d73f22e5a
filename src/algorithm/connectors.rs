//! Boundary connector detection for square sub-regions of the grid

use crate::io::error::{Result, TrackError, invalid_parameter};
use crate::spatial::{Direction, Point, TrackGrid};

/// A boundary cell of a region and the side through which the track leaves it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connector {
    /// Boundary cell
    pub point: Point,
    /// Outward side crossed by the track
    pub direction: Direction,
}

impl Connector {
    /// Create a connector
    pub const fn new(point: Point, direction: Direction) -> Self {
        Self { point, direction }
    }

    /// The same connector expressed relative to `origin`
    pub const fn to_local(self, origin: Point) -> Self {
        Self {
            point: self.point.relative_to(origin),
            direction: self.direction,
        }
    }
}

/// Find every place where the track crosses the edge of a `size` x `size` region
///
/// Edges are inspected north, south, east, then west. A corner cell may appear on
/// two edges. Connectors are returned in grid coordinates.
///
/// # Errors
///
/// Returns an error if `size` is zero or the region does not fit inside the grid
pub fn scan_connectors(grid: &TrackGrid, origin: Point, size: usize) -> Result<Vec<Connector>> {
    if size == 0 {
        return Err(invalid_parameter(
            "size",
            &size,
            &"scan region must be at least one cell",
        ));
    }

    let (rows, cols) = grid.dimensions();
    let fits = origin.x >= 0
        && origin.z >= 0
        && origin.x as usize + size <= cols
        && origin.z as usize + size <= rows;
    if !fits {
        return Err(TrackError::RegionOutOfBounds {
            origin,
            size,
            grid_dimensions: (rows, cols),
        });
    }

    let last = size as i32 - 1;
    let edges = [
        (Direction::North, Point::new(0, 0), Direction::East),
        (Direction::South, Point::new(0, last), Direction::East),
        (Direction::East, Point::new(last, 0), Direction::South),
        (Direction::West, Point::new(0, 0), Direction::South),
    ];

    let mut connectors = Vec::new();
    for (side, start, along) in edges {
        let mut local = start;
        for _ in 0..size {
            let point = local.translate(origin);
            if grid.get(point).is_some_and(|tile| tile.opens(side)) {
                connectors.push(Connector::new(point, side));
            }
            local = local.step(along);
        }
    }

    Ok(connectors)
}
