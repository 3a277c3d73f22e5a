//! Command-line interface for generating a track and exporting previews

use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use crate::algorithm::executor::{GeneratorConfig, TrackGenerator};
use crate::io::configuration::{
    DEFAULT_COLUMNS, DEFAULT_PATCH_SIZE, DEFAULT_ROWS, DEFAULT_SEED, GRID_SPACING,
    PREVIEW_CELL_PIXELS, ROLLOUT_FRAME_DELAY_MS,
};
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::io::progress::RolloutProgress;
use crate::io::visualization::RolloutCapture;
use crate::mesh::WeldReport;
use crate::scene::MemoryScene;
use crate::track::{PlacementStream, TrackSession};

#[derive(Parser, Debug)]
#[command(name = "looptrack")]
#[command(
    author,
    version,
    about = "Generate a closed-loop race track on a tile grid"
)]
/// Command-line arguments for the track generator
pub struct Cli {
    /// Target number of grid rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Target number of grid columns
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Side length of the patches rewritten with random paths
    #[arg(short, long, default_value_t = DEFAULT_PATCH_SIZE)]
    pub patch_size: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Add a random number of rows and columns instead of using --rows/--columns
    #[arg(long)]
    pub random_growth: bool,

    /// Write a PNG preview of the finished grid
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Write an animated GIF of the placement rollout
    #[arg(short = 'g', long, value_name = "GIF")]
    pub rollout: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Generator configuration requested on the command line
    pub const fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            rows: self.rows,
            columns: self.columns,
            patch_size: self.patch_size,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Summary of one command-line run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Final grid dimensions (rows, columns)
    pub dimensions: (usize, usize),
    /// Road tiles on the grid
    pub road_tiles: usize,
    /// Placement commands realized
    pub placements: usize,
    /// Collider weld statistics, if anything was placed
    pub collider: Option<WeldReport>,
    /// Grid rendered with box-drawing characters
    pub preview: String,
}

/// Runs one generation against an in-memory scene and writes the requested previews
pub struct TrackRunner {
    cli: Cli,
}

impl TrackRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Arguments this runner was created with
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Generate, print the grid and collider summary, then export previews
    ///
    /// # Errors
    ///
    /// Returns an error if a requested preview cannot be written
    // Printing the finished grid is the tool's primary output
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let summary = self.execute()?;
        print!("{}", summary.preview);
        println!(
            "{}x{} grid, {} road tiles, {} placements",
            summary.dimensions.0, summary.dimensions.1, summary.road_tiles, summary.placements
        );
        if let Some(report) = summary.collider {
            println!(
                "collider: {} -> {} vertices, {} triangles",
                report.input_vertices, report.output_vertices, report.triangles
            );
        }
        Ok(())
    }

    /// Generate and export without printing
    ///
    /// # Errors
    ///
    /// Returns an error if a requested preview cannot be written
    pub fn execute(&self) -> Result<RunSummary> {
        let mut generator = TrackGenerator::seeded(self.cli.config(), self.cli.seed);
        if self.cli.random_growth {
            let config = generator.randomize_dimensions();
            info!(
                "Random growth picked {}x{} target",
                config.rows, config.columns
            );
        }

        let mut session = TrackSession::new(MemoryScene::new(GRID_SPACING), generator);
        let generation = session.generate();
        if let Err(error) = &generation.mutation {
            warn!("Placing partially rewritten track: {error}");
        }
        let total = session.stream().map_or(0, PlacementStream::remaining);

        let progress = if self.cli.should_show_progress() {
            RolloutProgress::new(total)
        } else {
            RolloutProgress::hidden(total)
        };
        let mut capture = self
            .cli
            .rollout
            .is_some()
            .then(|| RolloutCapture::new(PREVIEW_CELL_PIXELS));

        let mut placements = 0;
        while let Some((command, _)) = session.step() {
            progress.advance(&command);
            if let (Some(capture), Some(grid)) = (capture.as_mut(), session.grid()) {
                capture.record(grid, &command);
            }
            placements += 1;
        }
        progress.finish("done");

        let collider = session.finish();

        let Some(grid) = session.grid() else {
            return Ok(RunSummary {
                dimensions: (0, 0),
                road_tiles: 0,
                placements,
                collider,
                preview: String::new(),
            });
        };

        if let Some(path) = &self.cli.output {
            export_grid_as_png(grid, PREVIEW_CELL_PIXELS, path)?;
            info!("Wrote preview to {}", path.display());
        }
        if let (Some(path), Some(capture)) = (&self.cli.rollout, capture.as_ref()) {
            capture.export_gif(path, ROLLOUT_FRAME_DELAY_MS)?;
            info!("Wrote rollout to {}", path.display());
        }

        Ok(RunSummary {
            dimensions: grid.dimensions(),
            road_tiles: grid.road_count(),
            placements,
            collider,
            preview: grid.to_string(),
        })
    }
}
