//! Tests for A* goal selection, hazard clearing and path cost

#[cfg(test)]
mod tests {
    use crate::at;
    use probenav::NavigationError;
    use probenav::agent::Probe;
    use probenav::search::astar::{heuristic, select_goal};
    use probenav::search::{AStarSearch, SearchOutcome, SearchStrategy, Trace, TraceStep};
    use probenav::spatial::{BuildMode, Coordinate, HazardGrid, HazardRecord, TileKind};

    fn plain(records: &[HazardRecord]) -> HazardGrid {
        HazardGrid::build(records, BuildMode::Plain)
    }

    fn found(outcome: SearchOutcome) -> Trace {
        match outcome {
            SearchOutcome::Found(trace) => trace,
            SearchOutcome::NoPathFound => unreachable!("expected a path"),
        }
    }

    #[test]
    fn test_bomb_clears_creature_on_straight_line() {
        let mut grid = plain(&[
            HazardRecord::new(TileKind::Creature, at(1, 0, 0)),
            HazardRecord::new(TileKind::Planet, at(5, 0, 0)),
        ]);
        let mut search = AStarSearch::new();

        let trace = found(search.run(&mut grid));

        assert_eq!(trace.len(), 6);
        assert_eq!(
            trace.positions().collect::<Vec<_>>(),
            (0..=5).map(|x| at(x, 0, 0)).collect::<Vec<_>>()
        );
        assert_eq!(search.detonation(), Some(at(1, 0, 0)));
        assert_eq!(trace.detonation(), Some(at(1, 0, 0)));
        assert_eq!(trace.steps().get(1), Some(&TraceStep::Bomb(at(1, 0, 0))));
        assert!(grid.lookup(at(1, 0, 0)).is_none());
        assert!(!search.probe().has_bomb());
    }

    #[test]
    fn test_bomb_spent_off_path_is_not_in_trace() {
        let mut grid = plain(&[
            HazardRecord::new(TileKind::Creature, at(0, 1, 0)),
            HazardRecord::new(TileKind::Planet, at(2, 0, 0)),
        ]);
        let mut search = AStarSearch::new();

        let trace = found(search.run(&mut grid));

        assert_eq!(search.detonation(), Some(at(0, 1, 0)));
        assert_eq!(trace.detonation(), None);
        assert_eq!(
            trace.positions().collect::<Vec<_>>(),
            vec![at(0, 0, 0), at(1, 0, 0), at(2, 0, 0)]
        );
    }

    #[test]
    fn test_without_bomb_hazards_are_avoided() {
        let mut grid = plain(&[
            HazardRecord::new(TileKind::BlackHole, at(1, 0, 0)),
            HazardRecord::new(TileKind::Planet, at(2, 0, 0)),
        ]);
        let mut disarmed = Probe::new();
        disarmed.spend_bomb();
        let mut search = AStarSearch::with_probe(disarmed);

        let trace = found(search.run(&mut grid));

        assert!(!trace.positions().any(|cell| cell == at(1, 0, 0)));
        assert_eq!(trace.len(), 5);
        assert_eq!(search.detonation(), None);
        assert_eq!(grid.occupant(at(1, 0, 0)), Some(TileKind::BlackHole));
    }

    // With the bomb gone and every exit blocked, the fixed hazard score is
    // still finite, so the search walks through exactly one hazard
    #[test]
    fn test_enclosed_origin_without_bomb_crosses_one_hazard() {
        let walls = [at(1, 0, 0), at(0, 1, 0), at(0, 0, 1)];
        let mut records: Vec<HazardRecord> = walls
            .iter()
            .map(|&cell| HazardRecord::new(TileKind::BlackHole, cell))
            .collect();
        records.push(HazardRecord::new(TileKind::Planet, at(3, 0, 0)));
        let mut grid = plain(&records);

        let mut disarmed = Probe::new();
        disarmed.spend_bomb();
        let mut search = AStarSearch::with_probe(disarmed);

        let trace = found(search.run(&mut grid));

        let crossed: Vec<Coordinate> = trace
            .positions()
            .filter(|cell| walls.contains(cell))
            .collect();
        assert_eq!(crossed.len(), 1);
        assert_eq!(trace.len(), 6);
        assert_eq!(trace.destination(), Some(at(3, 0, 0)));
        assert_eq!(trace.detonation(), None);
        for wall in walls {
            assert_eq!(grid.occupant(wall), Some(TileKind::BlackHole));
        }
    }

    #[test]
    fn test_path_cost_is_length_minus_one() {
        let goal = at(3, 4, 5);
        let mut grid = plain(&[HazardRecord::new(TileKind::Planet, goal)]);
        let mut search = AStarSearch::new();

        let trace = found(search.run(&mut grid));

        assert_eq!(trace.len(), 13);
        assert_eq!(search.cost_to(goal), Some(12));
        assert_eq!(search.goal(), Some(goal));
        assert!(search.expanded() >= 12);

        let path: Vec<Coordinate> = trace.positions().collect();
        for pair in path.windows(2) {
            if let [from, to] = pair {
                assert_eq!(from.manhattan_distance(*to), 1);
            }
        }
    }

    #[test]
    fn test_goal_selection_prefers_smallest_sum_then_coordinate() {
        let grid = plain(&[
            HazardRecord::new(TileKind::Planet, at(3, 3, 3)),
            HazardRecord::new(TileKind::Planet, at(2, 0, 0)),
            HazardRecord::new(TileKind::Planet, at(0, 2, 0)),
        ]);
        assert_eq!(select_goal(&grid), Some(at(0, 2, 0)));
        assert_eq!(select_goal(&plain(&[])), None);
    }

    #[test]
    fn test_empty_grid_reports_no_path() {
        let mut grid = plain(&[]);
        let mut search = AStarSearch::default();

        assert_eq!(search.run(&mut grid), SearchOutcome::NoPathFound);
        assert_eq!(search.goal(), None);
        assert_eq!(search.expanded(), 0);
    }

    #[test]
    fn test_planet_at_origin_is_reached_immediately() {
        let mut grid = plain(&[HazardRecord::new(TileKind::Planet, Coordinate::ORIGIN)]);
        let trace = found(AStarSearch::new().run(&mut grid));
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn test_runs_are_deterministic() {
        let records = [
            HazardRecord::new(TileKind::Creature, at(1, 1, 0)),
            HazardRecord::new(TileKind::BlackHole, at(2, 1, 1)),
            HazardRecord::new(TileKind::Planet, at(3, 2, 1)),
        ];
        let first = AStarSearch::new().run(&mut plain(&records));
        let second = AStarSearch::new().run(&mut plain(&records));
        assert_eq!(first, second);
    }

    #[test]
    fn test_heuristic_is_admissible() {
        let goal = at(10, 20, 30);
        for cell in [Coordinate::ORIGIN, at(10, 20, 29), at(99, 99, 99), at(10, 0, 30)] {
            assert!(heuristic(cell, goal) <= f64::from(cell.manhattan_distance(goal)));
        }
        assert!(heuristic(goal, goal).abs() < f64::EPSILON);
    }

    #[test]
    fn test_strategy_uses_plain_grid() {
        let mut search = AStarSearch::new();
        assert_eq!(search.grid_mode(), BuildMode::Plain);
        assert_eq!(search.name(), "A-star search");

        let mut grid = plain(&[HazardRecord::new(TileKind::Planet, at(0, 0, 3))]);
        assert!(matches!(search.search(&mut grid), Ok(SearchOutcome::Found(_))));
        assert_eq!(search.no_path_message(), "No paths were found.");
    }

    #[test]
    fn test_augmented_grid_is_rejected() {
        let mut search = AStarSearch::new();
        let mut grid = HazardGrid::build(
            &[HazardRecord::new(TileKind::Planet, at(0, 0, 3))],
            BuildMode::Augmented,
        );

        assert!(matches!(
            search.search(&mut grid),
            Err(NavigationError::InvalidParameter {
                parameter: "grid mode",
                ..
            })
        ));
        assert_eq!(search.goal(), None);
    }
}
