//! Single-pass traversal of a closed loop into placement commands
//!
//! The walker follows the track from its first road cell, chaining each tile's exit
//! into the next tile's entry. A straight tile followed by a corner and another
//! straight along the direction of travel is emitted as one medium corner that
//! covers all three cells.

use glam::{Quat, Vec3};
use log::error;
use std::fmt;

use crate::io::configuration::MERGE_LOOKAHEAD;
use crate::spatial::{Direction, Point, TileType, TrackGrid};

/// Visual asset a placement command asks the host to instantiate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// One straight cell, modelled North-South
    Straight,
    /// One corner cell, modelled South-East
    SmallCorner,
    /// Three-cell bend replacing straight, corner, straight
    MediumCorner,
}

impl AssetKind {
    /// Every asset kind
    pub const ALL: [Self; 3] = [Self::Straight, Self::SmallCorner, Self::MediumCorner];

    /// Single-cell asset drawing `tile`
    pub const fn for_tile(tile: TileType) -> Option<Self> {
        if tile.is_straight() {
            Some(Self::Straight)
        } else if tile.is_corner() {
            Some(Self::SmallCorner)
        } else {
            None
        }
    }

    /// Number of grid cells the asset covers
    pub const fn cell_count(self) -> usize {
        match self {
            Self::Straight | Self::SmallCorner => 1,
            Self::MediumCorner => 3,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Straight => f.write_str("straight"),
            Self::SmallCorner => f.write_str("small corner"),
            Self::MediumCorner => f.write_str("medium corner"),
        }
    }
}

/// One asset placement in world space
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementCommand {
    /// Asset to instantiate
    pub asset: AssetKind,
    /// Tile that decides the orientation (the middle corner for merged runs)
    pub tile: TileType,
    /// Grid cells covered, in travel order
    pub cells: Vec<Point>,
    /// World-space anchor of the asset
    pub position: Vec3,
    /// Rotation about +Y in degrees
    pub yaw_degrees: f32,
}

impl PlacementCommand {
    /// Rotation of the asset as a quaternion
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw_degrees.to_radians())
    }
}

struct MergedRun {
    bend: Point,
    bend_tile: TileType,
    bend_entry: Direction,
    bend_exit: Direction,
    after: Point,
    after_exit: Direction,
}

/// Lazy iterator over the placement commands of one grid snapshot
pub struct TrackWalker<'g> {
    grid: &'g TrackGrid,
    spacing: f32,
    start: Point,
    cursor: Point,
    entry: Direction,
    remaining: usize,
    finished: bool,
}

impl<'g> TrackWalker<'g> {
    /// Start walking at the first road cell in row-major order
    ///
    /// The walk enters the start cell through its first opening. A grid without
    /// road yields no commands.
    pub fn new(grid: &'g TrackGrid, spacing: f32) -> Self {
        let start = grid.first_road();
        let entry = start
            .and_then(|point| grid.get(point))
            .and_then(TileType::openings)
            .map_or(Direction::Unset, |[first, _]| first);

        Self {
            grid,
            spacing,
            start: start.unwrap_or_default(),
            cursor: start.unwrap_or_default(),
            entry,
            remaining: grid.road_count(),
            finished: start.is_none(),
        }
    }

    /// Cell the walk started from
    pub const fn start(&self) -> Point {
        self.start
    }

    /// Road cells not yet covered by an emitted command
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    fn tile_at(&self, point: Point) -> TileType {
        self.grid.get(point).unwrap_or_default()
    }

    // Straight at cursor, then corner, then straight, none of the later two the start cell
    fn try_merge(&self, exit: Direction) -> Option<MergedRun> {
        if self.remaining < MERGE_LOOKAHEAD || !self.tile_at(self.cursor).is_straight() {
            return None;
        }

        let bend = self.cursor.step(exit);
        let bend_entry = exit.mirror();
        let bend_tile = self.tile_at(bend);
        if bend == self.start || !bend_tile.is_corner() {
            return None;
        }
        let bend_exit = bend_tile.exit(bend_entry)?;

        let after = bend.step(bend_exit);
        let after_tile = self.tile_at(after);
        if after == self.start || !after_tile.is_straight() {
            return None;
        }
        let after_exit = after_tile.exit(bend_exit.mirror())?;

        Some(MergedRun {
            bend,
            bend_tile,
            bend_entry,
            bend_exit,
            after,
            after_exit,
        })
    }

    fn advance(&mut self, last: Point, exit: Direction, covered: usize) {
        self.cursor = last.step(exit);
        self.entry = exit.mirror();
        self.remaining = self.remaining.saturating_sub(covered);
        if self.cursor == self.start {
            self.finished = true;
        }
    }
}

impl Iterator for TrackWalker<'_> {
    type Item = PlacementCommand;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.remaining == 0 {
            return None;
        }

        let tile = self.tile_at(self.cursor);
        let Some(exit) = tile.exit(self.entry) else {
            error!(
                "Track is broken at {}: {tile} does not open to the {}",
                self.cursor, self.entry
            );
            self.finished = true;
            return None;
        };

        if let Some(run) = self.try_merge(exit) {
            let offset = run.bend_entry.world_vector() + run.bend_exit.world_vector();
            let command = PlacementCommand {
                asset: AssetKind::MediumCorner,
                tile: run.bend_tile,
                cells: vec![self.cursor, run.bend, run.after],
                position: run.bend.world_position(self.spacing) + offset * (0.5 * self.spacing),
                yaw_degrees: run.bend_tile.yaw_degrees(),
            };
            self.advance(run.after, run.after_exit, AssetKind::MediumCorner.cell_count());
            return Some(command);
        }

        let command = PlacementCommand {
            asset: AssetKind::for_tile(tile)?,
            tile,
            cells: vec![self.cursor],
            position: self.cursor.world_position(self.spacing),
            yaw_degrees: tile.yaw_degrees(),
        };
        self.advance(self.cursor, exit, 1);
        Some(command)
    }
}
