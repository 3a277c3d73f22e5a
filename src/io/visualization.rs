//! Frame capture and GIF generation for the placement rollout

use image::{Delay, Frame, RgbaImage};
use std::path::Path;

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{Result, TrackError};
use crate::io::image::{EMPTY_COLOR, calculate_bounding_box, create_parent_dir, paint_tile};
use crate::spatial::{Point, TileType, TrackGrid};
use crate::track::PlacementCommand;

/// Cells revealed by one realized placement command
#[derive(Debug, Clone)]
pub struct RolloutStep {
    /// Covered cells and the tiles they hold
    pub cells: Vec<(Point, TileType)>,
}

/// Records placement commands as they are realized so the rollout can be replayed
pub struct RolloutCapture {
    steps: Vec<RolloutStep>,
    cell_pixels: u32,
}

impl RolloutCapture {
    /// Empty capture rendering each cell as a `cell_pixels` square
    pub const fn new(cell_pixels: u32) -> Self {
        Self {
            steps: Vec::new(),
            cell_pixels,
        }
    }

    /// Record the cells of `command` as they appear in `grid`
    pub fn record(&mut self, grid: &TrackGrid, command: &PlacementCommand) {
        let cells = command
            .cells
            .iter()
            .map(|&point| (point, grid.get(point).unwrap_or_default()))
            .collect();
        self.steps.push(RolloutStep { cells });
    }

    /// Recorded steps in placement order
    pub fn steps(&self) -> &[RolloutStep] {
        &self.steps
    }

    /// Number of recorded steps
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Export the captured rollout as a GIF with automatic frame skipping
    ///
    /// Delays shorter than viewers reliably support are raised to that minimum, and
    /// every n-th step is kept so the animation keeps its apparent speed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No placements were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        let all_cells = self.steps.iter().flat_map(|step| step.cells.iter().copied());
        let bbox = calculate_bounding_box(all_cells).ok_or(TrackError::EmptyTrack)?;

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let width = bbox.cols() as u32 * self.cell_pixels;
        let height = bbox.rows() as u32 * self.cell_pixels;
        let mut canvas = RgbaImage::from_pixel(width, height, EMPTY_COLOR);
        let mut frames = vec![frame(canvas.clone(), effective_delay_ms)];

        for (index, step) in self.steps.iter().enumerate() {
            for &(point, tile) in &step.cells {
                let Some([row, col]) = point.index() else {
                    continue;
                };
                if row < bbox.min_row || col < bbox.min_col {
                    continue;
                }
                let left = (col - bbox.min_col) as u32 * self.cell_pixels;
                let top = (row - bbox.min_row) as u32 * self.cell_pixels;
                paint_tile(&mut canvas, tile, left, top, self.cell_pixels);
            }

            if (index + 1) % skip_factor == 0 {
                frames.push(frame(canvas.clone(), effective_delay_ms));
            }
        }

        if self.steps.len() % skip_factor != 0 {
            frames.push(frame(canvas.clone(), effective_delay_ms));
        }

        // Hold the finished track
        frames.push(frame(canvas, effective_delay_ms * 25));

        create_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path).map_err(|source| TrackError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|source| TrackError::ImageExport {
                path: output_path.to_path_buf(),
                source,
            })
    }
}

fn frame(img: RgbaImage, delay_ms: u32) -> Frame {
    Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
}
