//! Tests for rollout capture and GIF export

#[cfg(test)]
mod tests {
    use looptrack::TrackError;
    use looptrack::io::configuration::GRID_SPACING;
    use looptrack::io::visualization::RolloutCapture;
    use looptrack::spatial::{Point, TileType, TrackGrid};
    use looptrack::track::TrackWalker;
    use tempfile::TempDir;

    fn seed_capture() -> RolloutCapture {
        let grid = TrackGrid::seed();
        let mut capture = RolloutCapture::new(8);
        for command in TrackWalker::new(&grid, GRID_SPACING) {
            capture.record(&grid, &command);
        }
        capture
    }

    // Tests each recorded command keeps its cells and tiles
    // Verified by recording only the first cell of merged runs
    #[test]
    fn test_record_steps() {
        let capture = seed_capture();
        assert_eq!(capture.step_count(), 4);

        let cells: usize = capture.steps().iter().map(|step| step.cells.len()).sum();
        assert_eq!(cells, 8);
        assert_eq!(
            capture.steps().first().map(|step| step.cells.clone()),
            Some(vec![(Point::new(0, 0), TileType::CornerSE)])
        );
    }

    // Tests an empty capture cannot be exported
    // Verified by exporting a single blank frame
    #[test]
    fn test_export_empty_capture() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("empty.gif");

        let capture = RolloutCapture::new(8);
        assert_eq!(capture.step_count(), 0);
        assert!(matches!(
            capture.export_gif(&output, 80),
            Err(TrackError::EmptyTrack)
        ));
    }

    // Tests GIF export writes an animation for normal and very short delays
    // Verified by dividing by the requested delay without a lower bound
    #[test]
    fn test_export_gif() {
        let temp_dir = TempDir::new().unwrap();
        let capture = seed_capture();

        for delay in [80, 10, 0] {
            let output = temp_dir.path().join(format!("rollout_{delay}.gif"));
            assert!(capture.export_gif(&output, delay).is_ok());
            assert!(output.exists());
        }
    }

    // Tests export reports file system failures
    // Verified by ignoring file creation errors
    #[test]
    fn test_export_gif_bad_path() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let result = seed_capture().export_gif(&blocker.join("rollout.gif"), 80);
        assert!(matches!(result, Err(TrackError::FileSystem { .. })));
    }
}
