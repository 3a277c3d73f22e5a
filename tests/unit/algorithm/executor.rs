//! Tests for the seed, grow and rewrite pipeline

#[cfg(test)]
mod tests {
    use looptrack::TrackError;
    use looptrack::algorithm::executor::{GeneratorConfig, TrackGenerator};
    use looptrack::algorithm::selection::RandomSource;
    use looptrack::io::configuration::{
        DEFAULT_COLUMNS, DEFAULT_PATCH_SIZE, DEFAULT_ROWS, MAX_GRID_DIMENSION,
        MAX_RANDOM_INSERTIONS, SEED_TEMPLATE_SIZE,
    };
    use looptrack::spatial::TrackGrid;
    use std::ops::Range;

    struct LastChoice;

    impl RandomSource for LastChoice {
        fn range(&mut self, range: Range<usize>) -> usize {
            range.end.saturating_sub(1).max(range.start)
        }
    }

    const fn config(rows: usize, columns: usize, patch_size: usize) -> GeneratorConfig {
        GeneratorConfig {
            rows,
            columns,
            patch_size,
        }
    }

    // Tests configuration defaults
    // Verified by swapping default rows and patch size
    #[test]
    fn test_config_default() {
        let config = GeneratorConfig::default();
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.columns, DEFAULT_COLUMNS);
        assert_eq!(config.patch_size, DEFAULT_PATCH_SIZE);
    }

    // Tests text setters apply trimmed integers and ignore anything else
    // Verified by resetting the value to zero on parse failure
    #[test]
    fn test_text_setters() {
        let mut config = GeneratorConfig::default();

        assert!(config.set_rows_text(" 6 "));
        assert!(config.set_columns_text("4"));
        assert!(config.set_patch_size_text("3\n"));
        assert_eq!(config, self::config(6, 4, 3));

        assert!(!config.set_rows_text("six"));
        assert!(!config.set_columns_text("-2"));
        assert!(!config.set_patch_size_text(""));
        assert_eq!(config, self::config(6, 4, 3));
    }

    // Tests the default 3x3 grid keeps the seed ring and reports the misaligned pass
    // Verified by rewriting partial patches at the grid edge
    #[test]
    fn test_generate_default_keeps_seed() {
        let mut generator = TrackGenerator::seeded(GeneratorConfig::default(), 42);
        let generation = generator.generate();

        assert_eq!(generation.grid, TrackGrid::seed());
        assert_eq!(generation.growth.rows_inserted, 0);
        assert!(matches!(
            generation.mutation,
            Err(TrackError::PatchMisaligned { .. })
        ));
        assert!(!generation.is_complete());
    }

    // Tests aligned grids are fully rewritten into one loop
    // Verified by skipping the patch pass
    #[test]
    fn test_generate_aligned_grid() {
        for (rows, columns, patch_size) in [(4, 4, 2), (6, 6, 3), (6, 4, 2), (4, 4, 4)] {
            for seed in 0..5 {
                let mut generator = TrackGenerator::seeded(config(rows, columns, patch_size), seed);
                let generation = generator.generate();

                assert_eq!(generation.grid.dimensions(), (rows, columns));
                assert!(generation.is_complete(), "{rows}x{columns}/{patch_size}");
                assert!(
                    generation.grid.is_single_loop(),
                    "{rows}x{columns}/{patch_size} seed {seed}:\n{}",
                    generation.grid
                );
            }
        }
    }

    // Tests oversize requests are clamped
    // Verified by removing the clamp
    #[test]
    fn test_generate_clamps_dimensions() {
        let mut generator = TrackGenerator::seeded(config(MAX_GRID_DIMENSION + 10, 4, 2), 0);
        let generation = generator.generate();
        assert_eq!(generation.grid.rows(), MAX_GRID_DIMENSION);
        assert!(generation.grid.is_single_loop());
    }

    // Tests random growth draws up to the maximum number of insertions
    // Verified by using an exclusive upper bound on the insertion count
    #[test]
    fn test_randomize_dimensions() {
        let mut scripted = TrackGenerator::new(GeneratorConfig::default(), LastChoice);
        let config = scripted.randomize_dimensions();
        assert_eq!(config.rows, SEED_TEMPLATE_SIZE + MAX_RANDOM_INSERTIONS);
        assert_eq!(config.columns, SEED_TEMPLATE_SIZE + MAX_RANDOM_INSERTIONS);
        assert_eq!(scripted.config, config);

        let mut seeded = TrackGenerator::seeded(GeneratorConfig::default(), 9);
        for _ in 0..50 {
            let config = seeded.randomize_dimensions();
            assert!((SEED_TEMPLATE_SIZE..=SEED_TEMPLATE_SIZE + MAX_RANDOM_INSERTIONS).contains(&config.rows));
            assert!((SEED_TEMPLATE_SIZE..=SEED_TEMPLATE_SIZE + MAX_RANDOM_INSERTIONS).contains(&config.columns));
        }
    }

    // Tests each cycle starts from a fresh seed
    // Verified by growing the previous grid again
    #[test]
    fn test_generate_is_fresh_each_cycle() {
        let mut generator = TrackGenerator::seeded(config(4, 4, 2), 5);
        let first = generator.generate();
        let second = generator.generate();
        assert_eq!(first.grid.dimensions(), second.grid.dimensions());
        assert_eq!(second.growth.rows_inserted, 1);
    }
}
