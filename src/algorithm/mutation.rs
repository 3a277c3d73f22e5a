//! Patch rewriting: replace the track inside each patch with a random simple path
//!
//! Each `patch_size` x `patch_size` patch is visited in row-major order. A patch the
//! track crosses exactly twice is cleared and repainted along one path between its
//! two connectors, chosen uniformly from every simple path the region admits.

use log::{debug, warn};

use crate::algorithm::connectors::{Connector, scan_connectors};
use crate::algorithm::pathfinding::{PathStep, find_paths};
use crate::algorithm::resolver::resolve_junction;
use crate::algorithm::selection::RandomSource;
use crate::io::configuration::MAX_PATCH_SIZE;
use crate::io::error::{Result, TrackError, invalid_parameter};
use crate::spatial::{Point, TrackGrid};

/// What happened to a single patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Repainted along a path of the given length
    Rewritten {
        /// Number of cells on the chosen path
        length: usize,
        /// Number of candidate paths the choice was made from
        candidates: usize,
    },
    /// The track does not cross the patch
    Disconnected,
    /// The track crosses the patch a number of times other than two; left as is
    Irregular {
        /// Connectors found on the patch boundary
        connectors: usize,
    },
    /// No path joins the two connectors; previous contents restored
    Unsatisfied,
}

/// Tally of patch outcomes for one rewrite pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationReport {
    /// Patches repainted with a new path
    pub rewritten: usize,
    /// Patches without connectors
    pub disconnected: usize,
    /// Patches skipped for an unexpected connector count
    pub irregular: usize,
    /// Patches restored because no path existed
    pub unsatisfied: usize,
}

impl MutationReport {
    fn record(&mut self, outcome: PatchOutcome) {
        match outcome {
            PatchOutcome::Rewritten { .. } => self.rewritten += 1,
            PatchOutcome::Disconnected => self.disconnected += 1,
            PatchOutcome::Irregular { .. } => self.irregular += 1,
            PatchOutcome::Unsatisfied => self.unsatisfied += 1,
        }
    }

    /// Total number of patches visited
    pub const fn patches(&self) -> usize {
        self.rewritten + self.disconnected + self.irregular + self.unsatisfied
    }
}

/// Rewrites the patches of a grid using a pluggable random source
pub struct PatchMutator<'r, R: RandomSource> {
    patch_size: usize,
    random: &'r mut R,
}

impl<'r, R: RandomSource> PatchMutator<'r, R> {
    /// Create a mutator for patches of side `patch_size`
    pub const fn new(patch_size: usize, random: &'r mut R) -> Self {
        Self { patch_size, random }
    }

    /// Rewrite every patch of the grid in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The patch size is zero or larger than `MAX_PATCH_SIZE`
    /// - The patch size does not divide both grid dimensions (checked before any
    ///   patch is modified)
    /// - A path resolves to a junction no tile can represent
    pub fn rewrite_all(&mut self, grid: &mut TrackGrid) -> Result<MutationReport> {
        let size = self.patch_size;
        if size == 0 || size > MAX_PATCH_SIZE {
            return Err(invalid_parameter(
                "patch_size",
                &size,
                &format!("must be between 1 and {MAX_PATCH_SIZE}"),
            ));
        }

        let (rows, cols) = grid.dimensions();
        if rows % size != 0 || cols % size != 0 {
            return Err(TrackError::PatchMisaligned {
                patch_size: size,
                grid_dimensions: (rows, cols),
            });
        }

        let mut report = MutationReport::default();
        for z in (0..rows).step_by(size) {
            for x in (0..cols).step_by(size) {
                let outcome = self.rewrite_patch(grid, Point::new(x as i32, z as i32))?;
                report.record(outcome);
            }
        }

        debug!(
            "Rewrote {} of {} patches ({} irregular, {} unsatisfied)",
            report.rewritten,
            report.patches(),
            report.irregular,
            report.unsatisfied
        );
        Ok(report)
    }

    /// Rewrite the single patch whose minimum corner is `origin`
    ///
    /// # Errors
    ///
    /// Returns an error if the patch lies outside the grid or the chosen path
    /// cannot be resolved into tiles; the patch is left as it was
    pub fn rewrite_patch(&mut self, grid: &mut TrackGrid, origin: Point) -> Result<PatchOutcome> {
        let size = self.patch_size;
        let connectors: Vec<Connector> = scan_connectors(grid, origin, size)?
            .into_iter()
            .map(|connector| connector.to_local(origin))
            .collect();

        let (first, second) = match connectors.as_slice() {
            [] => return Ok(PatchOutcome::Disconnected),
            &[first, second] => (first, second),
            other => {
                warn!(
                    "Skipping patch at {origin}: expected 2 connectors, found {}",
                    other.len()
                );
                return Ok(PatchOutcome::Irregular {
                    connectors: other.len(),
                });
            }
        };

        let previous = grid.region(origin, size);
        grid.clear_region(origin, size);

        let paths = find_paths(first.point, second.point, size);
        let Some(path) = self.random.choose(&paths) else {
            warn!(
                "No path joins {} and {} in patch at {origin}; restoring it",
                first.point, second.point
            );
            grid.restore_region(origin, size, &previous);
            return Ok(PatchOutcome::Unsatisfied);
        };

        if let Err(error) = write_path(grid, origin, path, first, second) {
            grid.restore_region(origin, size, &previous);
            return Err(error);
        }

        Ok(PatchOutcome::Rewritten {
            length: path.len(),
            candidates: paths.len(),
        })
    }
}

/// Paint a patch-local path into the grid as road tiles
///
/// Each cell joins the side facing its predecessor to the side facing its
/// successor. The first cell's predecessor side is `first.direction` and the last
/// cell's successor side is `second.direction`.
///
/// # Errors
///
/// Returns an error if any cell would need a tile joining a side to itself or to
/// an unset side
pub fn write_path(
    grid: &mut TrackGrid,
    origin: Point,
    path: &[PathStep],
    first: Connector,
    second: Connector,
) -> Result<()> {
    let mut last = first.direction;

    for (i, step) in path.iter().enumerate() {
        let next = path
            .get(i + 1)
            .map_or(second.direction, |following| following.entry.mirror());
        let position = step.point.translate(origin);

        let tile = resolve_junction(position, last, next)?;
        grid.set(position, tile);

        last = next.mirror();
    }

    Ok(())
}
