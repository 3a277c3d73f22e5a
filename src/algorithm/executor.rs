use log::{debug, info, warn};

use crate::algorithm::mutation::{MutationReport, PatchMutator};
use crate::algorithm::selection::{RandomSelector, RandomSource};
use crate::io::configuration::{
    DEFAULT_COLUMNS, DEFAULT_PATCH_SIZE, DEFAULT_ROWS, GROWTH_INDEX, MAX_GRID_DIMENSION,
    MAX_RANDOM_INSERTIONS, SEED_TEMPLATE_SIZE,
};
use crate::io::error::Result;
use crate::spatial::{GrowthReport, TrackGrid};

/// Requested grid shape and patch size for one generation cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Target number of rows (at least the seed size)
    pub rows: usize,
    /// Target number of columns (at least the seed size)
    pub columns: usize,
    /// Side length of rewritten patches
    pub patch_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            patch_size: DEFAULT_PATCH_SIZE,
        }
    }
}

impl GeneratorConfig {
    /// Set the row count from text input; malformed input is ignored
    pub fn set_rows_text(&mut self, text: &str) -> bool {
        apply_text(&mut self.rows, "rows", text)
    }

    /// Set the column count from text input; malformed input is ignored
    pub fn set_columns_text(&mut self, text: &str) -> bool {
        apply_text(&mut self.columns, "columns", text)
    }

    /// Set the patch size from text input; malformed input is ignored
    pub fn set_patch_size_text(&mut self, text: &str) -> bool {
        apply_text(&mut self.patch_size, "patch_size", text)
    }
}

fn apply_text(target: &mut usize, name: &str, text: &str) -> bool {
    match text.trim().parse::<usize>() {
        Ok(value) => {
            *target = value;
            true
        }
        Err(error) => {
            debug!("Ignoring {name} input '{text}': {error}");
            false
        }
    }
}

/// Result of one generation cycle
#[derive(Debug)]
pub struct Generation {
    /// The finished grid snapshot
    pub grid: TrackGrid,
    /// Row and column insertions performed
    pub growth: GrowthReport,
    /// Patch rewrite tally, or the error that aborted the pass
    pub mutation: Result<MutationReport>,
}

impl Generation {
    /// Whether the patch pass completed without error
    pub const fn is_complete(&self) -> bool {
        self.mutation.is_ok()
    }
}

/// Builds track grids: seed, grow, then rewrite every patch
pub struct TrackGenerator<R: RandomSource = RandomSelector> {
    /// Shape of the next generated grid
    pub config: GeneratorConfig,
    random: R,
}

impl TrackGenerator<RandomSelector> {
    /// Create a generator with a seeded random selector
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Self {
        Self::new(config, RandomSelector::new(seed))
    }
}

impl<R: RandomSource> TrackGenerator<R> {
    /// Create a generator drawing its choices from `random`
    pub const fn new(config: GeneratorConfig, random: R) -> Self {
        Self { config, random }
    }

    /// Access the random source
    pub const fn random_mut(&mut self) -> &mut R {
        &mut self.random
    }

    /// Pick target dimensions by adding 0 to `MAX_RANDOM_INSERTIONS` rows and columns to the seed
    pub fn randomize_dimensions(&mut self) -> GeneratorConfig {
        let extra_rows = self.random.range(0..MAX_RANDOM_INSERTIONS + 1);
        let extra_columns = self.random.range(0..MAX_RANDOM_INSERTIONS + 1);
        self.config.rows = SEED_TEMPLATE_SIZE + extra_rows;
        self.config.columns = SEED_TEMPLATE_SIZE + extra_columns;
        self.config
    }

    /// Run one full generation cycle on a fresh seed grid
    ///
    /// Growth and patch rewriting run synchronously. Any failure during the patch
    /// pass is logged and the grid is returned in whatever state the pass left it,
    /// which is always a closed loop since failed patches are restored.
    pub fn generate(&mut self) -> Generation {
        let rows = clamp_dimension("rows", self.config.rows);
        let columns = clamp_dimension("columns", self.config.columns);

        let mut grid = TrackGrid::seed();
        let growth = grid.grow(rows, columns, GROWTH_INDEX);

        let mutation =
            PatchMutator::new(self.config.patch_size, &mut self.random).rewrite_all(&mut grid);

        match &mutation {
            Ok(report) => info!(
                "Generated {}x{} track with {} road tiles ({} patches rewritten)",
                grid.rows(),
                grid.cols(),
                grid.road_count(),
                report.rewritten
            ),
            Err(error) => warn!(
                "Patch rewrite aborted, keeping {}x{} grid as is: {error}",
                grid.rows(),
                grid.cols()
            ),
        }

        Generation {
            grid,
            growth,
            mutation,
        }
    }
}

fn clamp_dimension(name: &str, requested: usize) -> usize {
    if requested > MAX_GRID_DIMENSION {
        warn!("Clamping {name} from {requested} to {MAX_GRID_DIMENSION}");
        MAX_GRID_DIMENSION
    } else {
        requested
    }
}
