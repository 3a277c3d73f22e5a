//! Track grid storage, seed template and row/column growth
//!
//! The grid is a row-major `Array2<TileType>` indexed `[row, column]`. Growth
//! duplicates a whole row or column by rebuilding the backing array, which keeps
//! every existing connection intact as long as the duplicated line only holds
//! empty cells and through-tiles of the matching axis.

use bitvec::prelude::{BitVec, bitvec};
use log::{debug, warn};
use ndarray::{Array2, Axis as ArrayAxis, arr2};
use std::fmt;

use crate::io::configuration::SEED_TEMPLATE_SIZE;
use crate::io::error::{Result, TrackError};
use crate::spatial::direction::{Axis, Direction, Point};
use crate::spatial::tiles::TileType;

/// Outcome of a growth pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowthReport {
    /// Rows successfully duplicated
    pub rows_inserted: usize,
    /// Columns successfully duplicated
    pub columns_inserted: usize,
    /// Insertions refused because the line held a blocking tile
    pub rejected: usize,
}

/// Rectangular grid of road tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackGrid {
    tiles: Array2<TileType>,
}

impl Default for TrackGrid {
    fn default() -> Self {
        Self::seed()
    }
}

impl TrackGrid {
    /// The minimal closed loop: a ring of eight road tiles around one empty cell
    pub fn seed() -> Self {
        use TileType::{CornerNE, CornerNW, CornerSE, CornerSW, None, StraightNS, StraightWE};

        Self {
            tiles: arr2(&[
                [CornerSE, StraightWE, CornerSW],
                [StraightNS, None, StraightNS],
                [CornerNE, StraightWE, CornerNW],
            ]),
        }
    }

    /// An empty grid of the given size
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            tiles: Array2::from_elem((rows, cols), TileType::None),
        }
    }

    /// Build a grid from explicit rows
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are empty or of unequal length
    pub fn from_rows(rows: &[Vec<TileType>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return Err(crate::io::error::invalid_parameter(
                "rows",
                &rows.len(),
                &"rows must be non-empty and of equal length",
            ));
        }

        let tiles = Array2::from_shape_fn((rows.len(), cols), |(r, c)| {
            rows.get(r)
                .and_then(|row| row.get(c))
                .copied()
                .unwrap_or_default()
        });
        Ok(Self { tiles })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.tiles.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.tiles.ncols()
    }

    /// Grid dimensions as `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.tiles.dim()
    }

    /// Read-only access to the backing array
    pub const fn tiles(&self) -> &Array2<TileType> {
        &self.tiles
    }

    /// Tile at `point`, or `None` when out of bounds
    pub fn get(&self, point: Point) -> Option<TileType> {
        point.index().and_then(|index| self.tiles.get(index).copied())
    }

    /// Overwrite the tile at `point`; returns `false` when out of bounds
    pub fn set(&mut self, point: Point, tile: TileType) -> bool {
        match point.index().and_then(|index| self.tiles.get_mut(index)) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Point, TileType)> + '_ {
        self.tiles
            .indexed_iter()
            .map(|((row, col), &tile)| (Point::new(col as i32, row as i32), tile))
    }

    /// Number of non-empty cells
    pub fn road_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_road()).count()
    }

    /// First non-empty cell in row-major order
    pub fn first_road(&self) -> Option<Point> {
        self.cells()
            .find(|(_, tile)| tile.is_road())
            .map(|(point, _)| point)
    }

    /// First cell of the given type in row-major order
    pub fn first_of(&self, wanted: TileType) -> Option<Point> {
        self.cells()
            .find(|&(_, tile)| tile == wanted)
            .map(|(point, _)| point)
    }

    /// Copy of a square region in row-major order
    pub fn region(&self, origin: Point, size: usize) -> Vec<TileType> {
        square(origin, size)
            .map(|point| self.get(point).unwrap_or_default())
            .collect()
    }

    /// Write a region previously captured with [`TrackGrid::region`]
    pub fn restore_region(&mut self, origin: Point, size: usize, tiles: &[TileType]) {
        for (point, &tile) in square(origin, size).zip(tiles) {
            self.set(point, tile);
        }
    }

    /// Reset every cell of a square region to `None`
    pub fn clear_region(&mut self, origin: Point, size: usize) {
        for point in square(origin, size) {
            self.set(point, TileType::None);
        }
    }

    /// Duplicate row `index`, shifting every later row down by one
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the grid unchanged, if the row is out of range or
    /// holds anything other than `None` and `StraightNS`
    pub fn insert_row(&mut self, index: usize) -> Result<()> {
        self.validate_line(Axis::Row, index)?;

        let (rows, cols) = self.dimensions();
        let source = &self.tiles;
        self.tiles = Array2::from_shape_fn((rows + 1, cols), |(row, col)| {
            let from = if row > index { row - 1 } else { row };
            source.get([from, col]).copied().unwrap_or_default()
        });
        Ok(())
    }

    /// Duplicate column `index`, shifting every later column right by one
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the grid unchanged, if the column is out of range or
    /// holds anything other than `None` and `StraightWE`
    pub fn insert_column(&mut self, index: usize) -> Result<()> {
        self.validate_line(Axis::Column, index)?;

        let (rows, cols) = self.dimensions();
        let source = &self.tiles;
        self.tiles = Array2::from_shape_fn((rows, cols + 1), |(row, col)| {
            let from = if col > index { col - 1 } else { col };
            source.get([row, from]).copied().unwrap_or_default()
        });
        Ok(())
    }

    fn validate_line(&self, axis: Axis, index: usize) -> Result<()> {
        let (len, array_axis) = match axis {
            Axis::Row => (self.rows(), ArrayAxis(0)),
            Axis::Column => (self.cols(), ArrayAxis(1)),
        };
        if index >= len {
            return Err(TrackError::LineOutOfRange { axis, index, len });
        }

        let through = TileType::through(axis);
        match self
            .tiles
            .index_axis(array_axis, index)
            .iter()
            .find(|&&tile| tile != TileType::None && tile != through)
        {
            Some(&blocking) => Err(TrackError::InsertionBlocked {
                axis,
                index,
                blocking,
            }),
            None => Ok(()),
        }
    }

    /// Grow towards `target_rows` x `target_cols` by repeated insertion at `index`
    ///
    /// Refused insertions are logged and skipped; growth never fails.
    pub fn grow(&mut self, target_rows: usize, target_cols: usize, index: usize) -> GrowthReport {
        let mut report = GrowthReport::default();

        for _ in 0..target_rows.saturating_sub(SEED_TEMPLATE_SIZE) {
            match self.insert_row(index) {
                Ok(()) => report.rows_inserted += 1,
                Err(error) => {
                    warn!("Skipping row insertion: {error}");
                    report.rejected += 1;
                }
            }
        }

        for _ in 0..target_cols.saturating_sub(SEED_TEMPLATE_SIZE) {
            match self.insert_column(index) {
                Ok(()) => report.columns_inserted += 1,
                Err(error) => {
                    warn!("Skipping column insertion: {error}");
                    report.rejected += 1;
                }
            }
        }

        debug!(
            "Grew grid to {}x{} ({} rows, {} columns inserted)",
            self.rows(),
            self.cols(),
            report.rows_inserted,
            report.columns_inserted
        );
        report
    }

    /// Follow the track from the first road cell until it returns there
    ///
    /// Returns the visited cells in travel order.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has no road, the track dangles into a cell that
    /// does not accept it, or the walk revisits a cell before closing
    pub fn trace_loop(&self) -> Result<Vec<Point>> {
        let start = self.first_road().ok_or(TrackError::EmptyTrack)?;
        let mut entry = self
            .get(start)
            .and_then(TileType::openings)
            .map_or(Direction::Unset, |[first, _]| first);

        let mut visited: BitVec = bitvec![0; self.rows() * self.cols()];
        let mut order = Vec::new();
        let mut cursor = start;

        loop {
            let tile = self.get(cursor).unwrap_or_default();
            let exit = tile.exit(entry).ok_or(TrackError::BrokenLoop {
                position: cursor,
                entry,
            })?;

            let flat = self.flat_index(cursor);
            if flat.is_some_and(|i| visited.get(i).is_some_and(|bit| *bit)) {
                return Err(TrackError::BrokenLoop {
                    position: cursor,
                    entry,
                });
            }
            if let Some(i) = flat {
                visited.set(i, true);
            }
            order.push(cursor);

            cursor = cursor.step(exit);
            entry = exit.mirror();
            if cursor == start {
                return Ok(order);
            }
        }
    }

    /// Whether the road cells form exactly one closed loop covering all of them
    pub fn is_single_loop(&self) -> bool {
        self.trace_loop()
            .is_ok_and(|order| order.len() == self.road_count())
    }

    fn flat_index(&self, point: Point) -> Option<usize> {
        let [row, col] = point.index()?;
        (row < self.rows() && col < self.cols()).then(|| row * self.cols() + col)
    }
}

impl fmt::Display for TrackGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.rows() {
            let line: String = row.iter().map(|tile| tile.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Points of a `size` x `size` square at `origin`, row-major
fn square(origin: Point, size: usize) -> impl Iterator<Item = Point> {
    let side = size as i32;
    (0..side).flat_map(move |z| (0..side).map(move |x| Point::new(x, z).translate(origin)))
}
