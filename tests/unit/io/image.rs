//! Tests for PNG preview rendering and export

#[cfg(test)]
mod tests {
    use looptrack::TrackError;
    use looptrack::io::image::{EMPTY_COLOR, ROAD_COLOR, export_grid_as_png, render_grid, tile_mask};
    use looptrack::spatial::{Point, TileType, TrackGrid};
    use tempfile::TempDir;

    // Tests the seed renders one square per cell
    // Verified by sizing the image from the full grid plus a margin
    #[test]
    fn test_render_seed_dimensions() {
        let img = render_grid(&TrackGrid::seed(), 16).unwrap();
        assert_eq!(img.dimensions(), (48, 48));
    }

    // Tests road pixels follow the open sides of each tile
    // Verified by drawing every arm regardless of openings
    #[test]
    fn test_render_seed_pixels() {
        let img = render_grid(&TrackGrid::seed(), 16).unwrap();

        assert_eq!(img.get_pixel(8, 8), &ROAD_COLOR);
        assert_eq!(img.get_pixel(14, 8), &ROAD_COLOR);
        assert_eq!(img.get_pixel(8, 14), &ROAD_COLOR);
        assert_eq!(img.get_pixel(1, 8), &EMPTY_COLOR);
        assert_eq!(img.get_pixel(1, 1), &EMPTY_COLOR);
        assert_eq!(img.get_pixel(24, 24), &EMPTY_COLOR);
    }

    // Tests the preview is cropped to the cells holding road
    // Verified by rendering the whole grid
    #[test]
    fn test_render_crops_to_road() {
        let mut grid = TrackGrid::empty(4, 4);
        assert!(grid.set(Point::new(2, 1), TileType::StraightNS));
        assert!(grid.set(Point::new(2, 2), TileType::StraightNS));

        let img = render_grid(&grid, 8).unwrap();
        assert_eq!(img.dimensions(), (8, 16));
    }

    // Tests the tile mask for straights and corners
    // Verified by swapping the north and south arms
    #[test]
    fn test_tile_mask() {
        assert!(tile_mask(TileType::StraightNS, 8, 0, 16));
        assert!(tile_mask(TileType::StraightNS, 8, 15, 16));
        assert!(!tile_mask(TileType::StraightNS, 0, 8, 16));
        assert!(tile_mask(TileType::CornerNW, 0, 8, 16));
        assert!(tile_mask(TileType::CornerNW, 8, 0, 16));
        assert!(!tile_mask(TileType::CornerNW, 15, 8, 16));
        assert!(!tile_mask(TileType::None, 8, 8, 16));
    }

    // Tests PNG export writes a file, creating missing directories
    // Verified by skipping directory creation
    #[test]
    fn test_export_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("nested").join("seed.png");

        assert!(export_grid_as_png(&TrackGrid::seed(), 16, &output).is_ok());
        assert!(output.exists());

        let reloaded = image::open(&output).unwrap();
        assert_eq!(reloaded.width(), 48);
    }

    // Tests an empty grid cannot be exported
    // Verified by exporting a zero-sized image
    #[test]
    fn test_export_empty_grid() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("empty.png");

        let result = export_grid_as_png(&TrackGrid::empty(3, 3), 16, &output);
        assert!(matches!(result, Err(TrackError::EmptyTrack)));
        assert!(!output.exists());
    }
}
