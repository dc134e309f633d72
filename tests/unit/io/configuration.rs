//! Tests for grid and search configuration constants

#[cfg(test)]
mod tests {
    use probenav::io::configuration::{
        DEFAULT_INPUT_PATH, DEFAULT_MAX_STEPS, DEFAULT_SEED, DEFAULT_TRIALS, GRID_EXTENT,
        HAZARD_SENTINEL_COST, HAZARD_TAGS,
    };
    use probenav::spatial::coordinate::CELL_COUNT;

    // Tests the grid covers one million cells
    #[test]
    fn test_grid_extent() {
        assert_eq!(GRID_EXTENT, 100);
        assert_eq!(CELL_COUNT, 1_000_000);
    }

    #[test]
    fn test_random_walk_budget() {
        assert_eq!(DEFAULT_TRIALS, 100);
        assert_eq!(DEFAULT_MAX_STEPS, 50_000);
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests the sentinel outweighs any real path through the grid
    #[test]
    fn test_sentinel_exceeds_longest_path() {
        let longest = 3.0 * f64::from(GRID_EXTENT) * 2.0;
        assert!(HAZARD_SENTINEL_COST > longest);
    }

    // Tests bomb markers are not accepted as input
    #[test]
    fn test_input_tags() {
        assert_eq!(HAZARD_TAGS, ["B", "K", "P"]);
        assert!(!HAZARD_TAGS.contains(&"M"));
        assert_eq!(DEFAULT_INPUT_PATH, "input.txt");
    }
}
