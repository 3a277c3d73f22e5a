//! PNG preview export with cropping to the road and transparent background

use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::io::error::{Result, TrackError};
use crate::spatial::{Direction, Point, TileType, TrackGrid};

/// Road colour in previews
pub const ROAD_COLOR: Rgba<u8> = Rgba([64, 64, 72, 255]);
/// Colour of empty cells inside the preview
pub const EMPTY_COLOR: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BoundingBox {
    pub(crate) min_row: usize,
    pub(crate) max_row: usize,
    pub(crate) min_col: usize,
    pub(crate) max_col: usize,
}

impl BoundingBox {
    pub(crate) const fn rows(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    pub(crate) const fn cols(&self) -> usize {
        self.max_col - self.min_col + 1
    }
}

// Minimal rectangle containing all road cells
pub(crate) fn calculate_bounding_box(
    cells: impl IntoIterator<Item = (Point, TileType)>,
) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;

    for (point, tile) in cells {
        if !tile.is_road() {
            continue;
        }
        let Some([row, col]) = point.index() else {
            continue;
        };
        let current = bbox.get_or_insert(BoundingBox {
            min_row: row,
            max_row: row,
            min_col: col,
            max_col: col,
        });
        current.min_row = current.min_row.min(row);
        current.max_row = current.max_row.max(row);
        current.min_col = current.min_col.min(col);
        current.max_col = current.max_col.max(col);
    }

    bbox
}

/// Whether local pixel `(px, py)` of a `cell_pixels` square lies on the road of `tile`
///
/// The road is a band half a cell wide running from the centre of the cell out
/// through each open side.
pub fn tile_mask(tile: TileType, px: u32, py: u32, cell_pixels: u32) -> bool {
    let low = cell_pixels / 4;
    let high = cell_pixels - low;
    let band_x = (low..high).contains(&px);
    let band_y = (low..high).contains(&py);

    (band_x && band_y)
        || (band_x && py < low && tile.opens(Direction::North))
        || (band_x && py >= high && tile.opens(Direction::South))
        || (band_y && px < low && tile.opens(Direction::West))
        || (band_y && px >= high && tile.opens(Direction::East))
}

/// Paint one tile into `img` with its top-left cell corner at pixel `(left, top)`
pub fn paint_tile(img: &mut RgbaImage, tile: TileType, left: u32, top: u32, cell_pixels: u32) {
    if !tile.is_road() {
        return;
    }
    for py in 0..cell_pixels {
        for px in 0..cell_pixels {
            if !tile_mask(tile, px, py, cell_pixels) {
                continue;
            }
            if let Some(pixel) = img.get_pixel_mut_checked(left + px, top + py) {
                *pixel = ROAD_COLOR;
            }
        }
    }
}

/// Render the road cells of `grid`, cropped to the smallest rectangle containing them
///
/// # Errors
///
/// Returns an error if the grid contains no road tiles
pub fn render_grid(grid: &TrackGrid, cell_pixels: u32) -> Result<RgbaImage> {
    let bbox = calculate_bounding_box(grid.cells()).ok_or(TrackError::EmptyTrack)?;

    let width = bbox.cols() as u32 * cell_pixels;
    let height = bbox.rows() as u32 * cell_pixels;
    let mut img = RgbaImage::from_pixel(width, height, EMPTY_COLOR);

    for (point, tile) in grid.cells() {
        let Some([row, col]) = point.index() else {
            continue;
        };
        if row < bbox.min_row || col < bbox.min_col {
            continue;
        }
        let left = (col - bbox.min_col) as u32 * cell_pixels;
        let top = (row - bbox.min_row) as u32 * cell_pixels;
        paint_tile(&mut img, tile, left, top, cell_pixels);
    }

    Ok(img)
}

/// Export the grid as a PNG image with transparent background
///
/// # Errors
///
/// Returns an error if:
/// - The grid contains no road tiles
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &TrackGrid, cell_pixels: u32, output_path: &Path) -> Result<()> {
    let img = render_grid(grid, cell_pixels)?;

    create_parent_dir(output_path)?;

    img.save(output_path)
        .map_err(|source| TrackError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}

pub(crate) fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| TrackError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })
        }
        _ => Ok(()),
    }
}
