use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sonar::{sample_occupancy, Board, CellStatus, Dimensions, Mode, Overrides, SonarError, Strategy};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let rows = rng.random_range(3..=6);
    let cols = rng.random_range(3..=6);
    let mut board = Board::build(rows, cols, &[2, 3]).unwrap();

    let shots = rng.random_range(0..=(rows * cols / 2));
    for _ in 0..shots {
        let r = rng.random_range(0..rows);
        let c = rng.random_range(0..cols);
        let outcome = if rng.random_bool(0.4) {
            board.record_hit(r, c)
        } else {
            board.record_miss(r, c)
        };
        // Repeats are rejected; confirm about half the candidates we see.
        if let Ok(outcome) = outcome {
            if let Some(candidate) = outcome.sink_candidate {
                if rng.random_bool(0.5) {
                    let _ = board.confirm_sink(candidate);
                }
            }
        }
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn rule_based_entries_stay_in_range(seed in any::<u64>()) {
        let board = random_board(seed);
        match board.current_heatmap(Strategy::RuleBased) {
            Ok(matrix) => {
                prop_assert_eq!(matrix.dims(), board.dims());
                for (_, &v) in matrix.iter() {
                    prop_assert!((0.0..=1.0).contains(&v), "out of range: {}", v);
                }
            }
            // a hit run walled in on both sides has nowhere to anchor
            Err(err) => prop_assert_eq!(err, SonarError::NoValidPlacement),
        }
    }

    #[test]
    fn rule_based_never_scores_revealed_cells(seed in any::<u64>()) {
        let board = random_board(seed);
        if let Ok(matrix) = board.current_heatmap(Strategy::RuleBased) {
            for ((r, c), &v) in matrix.iter() {
                if board.status()[(r, c)] != CellStatus::Unknown {
                    prop_assert_eq!(v, 0.0);
                }
            }
        }
    }

    /// Heatmap queries never mutate the board and always agree with themselves.
    #[test]
    fn heatmap_queries_are_pure(seed in any::<u64>()) {
        let board = random_board(seed);
        let before = board.clone();
        prop_assert_eq!(
            board.current_heatmap(Strategy::RuleBased),
            board.current_heatmap(Strategy::RuleBased)
        );
        prop_assert_eq!(
            board.current_heatmap(Strategy::MonteCarlo),
            board.current_heatmap(Strategy::MonteCarlo)
        );
        prop_assert_eq!(board, before);
    }

    #[test]
    fn monte_carlo_entries_stay_in_range(seed in any::<u64>()) {
        let board = random_board(seed);
        let matrix = board.current_heatmap(Strategy::MonteCarlo).unwrap();
        prop_assert_eq!(matrix.dims(), board.dims());
        for (_, &v) in matrix.iter() {
            prop_assert!((0.0..=1.0).contains(&v), "out of range: {}", v);
        }
    }

    /// Excluded cells carry only the smoothing floor, so they can never rank
    /// above an open cell.
    #[test]
    fn excluded_cells_never_beat_open_cells(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let rows = rng.random_range(2..=4);
        let cols = rng.random_range(2..=4);
        let dims = Dimensions::new(rows, cols);
        let mut overrides = Overrides::default();
        for r in 0..rows {
            for c in 0..cols {
                if rng.random_bool(0.2) {
                    overrides.excluded.push((r, c));
                }
            }
        }
        let matrix = sample_occupancy(dims, &[2], &overrides);
        for &(r, c) in &overrides.excluded {
            for (_, &other) in matrix.iter() {
                prop_assert!(matrix[(r, c)] <= other);
            }
        }
    }

    /// Target and hunt modes exist only downstream of a recorded hit.
    #[test]
    fn anchored_modes_always_have_an_anchor(seed in any::<u64>()) {
        let board = random_board(seed);
        if board.mode() != Mode::Search {
            prop_assert!(board.last_hit().is_some());
        }
    }
}
