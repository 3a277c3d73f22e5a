//! Tests for generation constants and their relationships

#[cfg(test)]
mod tests {
    use looptrack::io::configuration::{
        DEFAULT_COLUMNS, DEFAULT_PATCH_SIZE, DEFAULT_ROWS, DEFAULT_SEED, GRID_SPACING,
        GROWTH_INDEX, MAX_GRID_DIMENSION, MAX_PATCH_SIZE, MERGE_LOOKAHEAD, ROLLOUT_FRAME_DELAY_MS,
        SEED_TEMPLATE_SIZE, VIEWER_MIN_FRAME_DELAY_MS, WELD_ANGLE_DEGREES, WELD_DISTANCE_SQUARED,
    };

    // Tests the default grid is the bare seed
    // Verified by changing the default dimensions
    #[test]
    fn test_defaults_match_seed() {
        assert_eq!(DEFAULT_ROWS, SEED_TEMPLATE_SIZE);
        assert_eq!(DEFAULT_COLUMNS, SEED_TEMPLATE_SIZE);
        assert_eq!(DEFAULT_PATCH_SIZE, 2);
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests growth duplicates the middle line of the seed
    // Verified by growing through the first row
    #[test]
    fn test_growth_index_inside_seed() {
        assert_eq!(GROWTH_INDEX, 1);
        assert_eq!(SEED_TEMPLATE_SIZE, 3);
    }

    // Tests the search and grid limits
    // Verified by raising the patch size limit
    #[test]
    fn test_limits() {
        assert_eq!(MAX_PATCH_SIZE, 4);
        assert_eq!(DEFAULT_PATCH_SIZE.min(MAX_PATCH_SIZE), DEFAULT_PATCH_SIZE);
        assert_eq!(MAX_GRID_DIMENSION, 256);
        assert_eq!(MERGE_LOOKAHEAD, 3);
    }

    // Tests placement and weld tolerances
    // Verified by using the plain distance as the squared threshold
    #[test]
    fn test_placement_constants() {
        assert_eq!(GRID_SPACING.to_bits(), 10f32.to_bits());
        assert_eq!(WELD_DISTANCE_SQUARED.to_bits(), 0.001f32.to_bits());
        assert_eq!(WELD_ANGLE_DEGREES.to_bits(), 0.1f32.to_bits());
    }

    // Tests the rollout delay is one viewers can display
    // Verified by lowering the rollout delay below the viewer minimum
    #[test]
    fn test_frame_delays() {
        assert_eq!(
            ROLLOUT_FRAME_DELAY_MS.max(VIEWER_MIN_FRAME_DELAY_MS),
            ROLLOUT_FRAME_DELAY_MS
        );
    }
}
