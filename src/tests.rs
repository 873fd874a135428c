#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::builder::{BuilderInvalidReason, SquareBoardBuilder};
    use crate::location::Location;
    use crate::region::RegionId;
    use crate::solver::{SolveFailure, SolveOptions};
    use crate::Board;

    fn snapshot(board: &Board) -> (Vec<usize>, Vec<Option<RegionId>>, usize, usize) {
        (
            board.cells.iter().map(|cell| cell.value()).collect_vec(),
            board.cells.iter().map(|cell| cell.region()).collect_vec(),
            board.filled,
            board.regions.len(),
        )
    }

    #[test]
    fn solve_1x1_single_one() {
        let mut board = SquareBoardBuilder::with_dims((1, 1))
            .add_clue(Location(0, 0), 1)
            .build()
            .unwrap();

        // the lone clue was resolved to a singleton region at build time
        assert_eq!(board.filled, 1);
        assert!(board.region_id_at(Location(0, 0)).is_some());

        board.solve().unwrap();
        assert_eq!(board.value_at(Location(0, 0)), 1);
        assert_eq!(format!("{}", board), "1\n");
        assert_eq!(board.check_solution(), Some(vec![Location(0, 0)]));
    }

    #[test]
    fn adjacent_one_clues_unsolvable() {
        let mut board = SquareBoardBuilder::with_dims((2, 2))
            .add_clue(Location(0, 0), 1)
            .add_clue(Location(1, 0), 1)
            .add_clue(Location(0, 1), 1)
            .add_clue(Location(1, 1), 1)
            .build()
            .unwrap();

        let before = snapshot(&board);
        assert_eq!(board.solve(), Err(SolveFailure::Unsolvable));
        assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn solve_3x3_single_nine() {
        let mut board = SquareBoardBuilder::with_dims((3, 3))
            .add_clue(Location(0, 0), 9)
            .build()
            .unwrap();

        board.solve().unwrap();
        assert_eq!(format!("{}", board), "9 9 9\n9 9 9\n9 9 9\n");

        // one region owning the whole grid
        assert_eq!(board.regions.len(), 1);
        assert_eq!(board.regions[0].len(), 9);
        assert!(board.check_solution().is_some());
    }

    #[test]
    fn touching_twos_unsolvable_and_restored() {
        // 2 . 2 . on one row; the two size-2 regions necessarily share a border
        let mut board = SquareBoardBuilder::with_dims((4, 1))
            .add_clue(Location(0, 0), 2)
            .add_clue(Location(2, 0), 2)
            .build()
            .unwrap();

        let before = snapshot(&board);
        assert_eq!(board.solve(), Err(SolveFailure::Unsolvable));
        assert_eq!(snapshot(&board), before);
        assert_eq!(format!("{}", board), "2 . 2 .\n");
    }

    #[test]
    fn free_fill_claims_whole_component_once() {
        // no clues at all: one component covering the board
        let mut board = SquareBoardBuilder::with_dims((2, 3)).build().unwrap();

        board.solve().unwrap();
        assert_eq!(format!("{}", board), "6 6\n6 6\n6 6\n");
        assert_eq!(board.regions.len(), 1);

        let members = board.regions[0].members();
        assert_eq!(members.len(), 6);
        assert_eq!(members.iter().unique().count(), 6);
        assert!(board.check_solution().is_some());
    }

    #[test]
    fn free_fill_failure_backtracks_into_clue_growth() {
        // growing the clue region left first leaves a two-cell remainder
        // valued 2 beside it, which free-fill rejects; the search recovers
        // by growing right instead
        let mut board = SquareBoardBuilder::with_dims((4, 1))
            .add_clue(Location(1, 0), 2)
            .build()
            .unwrap();

        board.solve().unwrap();
        assert_eq!(format!("{}", board), "1 2 2 1\n");
        assert_eq!(board.values_present(), vec![1, 2]);
        assert!(board.check_solution().is_some());
    }

    #[test]
    fn solve_4x4_mixed_clues() {
        let mut board = SquareBoardBuilder::with_dims((4, 4))
            .add_clue(Location(0, 0), 2)
            .add_clue(Location(3, 0), 3)
            .add_clue(Location(0, 1), 1)
            .add_clue(Location(2, 2), 5)
            .add_clue(Location(1, 3), 4)
            .add_clue(Location(3, 3), 1)
            .build()
            .unwrap();

        board.solve().unwrap();

        // clues retain their original values
        assert_eq!(board.value_at(Location(0, 0)), 2);
        assert_eq!(board.value_at(Location(3, 0)), 3);
        assert_eq!(board.value_at(Location(0, 1)), 1);
        assert_eq!(board.value_at(Location(2, 2)), 5);
        assert_eq!(board.value_at(Location(1, 3)), 4);
        assert_eq!(board.value_at(Location(3, 3)), 1);
        assert!(board.is_fixed_at(Location(2, 2)));

        // a solved board always passes the independent validator
        assert!(board.check_solution().is_some());
        assert_eq!(board.fill_order().len(), 16);
    }

    #[test]
    fn solve_plus_shaped_region_branches_from_earlier_cells() {
        let mut board = SquareBoardBuilder::with_dims((3, 3))
            .add_clue(Location(0, 0), 1)
            .add_clue(Location(2, 0), 1)
            .add_clue(Location(1, 1), 5)
            .add_clue(Location(0, 2), 1)
            .add_clue(Location(2, 2), 1)
            .build()
            .unwrap();

        board.solve().unwrap();

        // the 5-region cannot be a path, so growth has to resume from cells
        // claimed before the most recent one
        assert_eq!(format!("{}", board), "1 5 1\n5 5 5\n1 5 1\n");
        assert!(board.check_solution().is_some());
    }

    #[test]
    fn budget_exhaustion_restores_board() {
        let mut board = SquareBoardBuilder::with_dims((4, 1))
            .add_clue(Location(1, 0), 2)
            .build()
            .unwrap();

        let before = snapshot(&board);
        let failure = board.solve_with(SolveOptions {
            node_budget: Some(0),
            ..Default::default()
        });

        assert_eq!(failure, Err(SolveFailure::BudgetExhausted));
        assert_eq!(snapshot(&board), before);

        // and an unbudgeted retry still succeeds
        board.solve().unwrap();
        assert_eq!(format!("{}", board), "1 2 2 1\n");
    }

    #[test]
    fn observer_sees_in_progress_boards() {
        let mut board = SquareBoardBuilder::with_dims((4, 1))
            .add_clue(Location(1, 0), 2)
            .build()
            .unwrap();

        let mut calls = 0;
        let mut observer = |snapshot: &Board| {
            calls += 1;
            assert_eq!(snapshot.dims(), (4, 1));
        };

        board
            .solve_with(SolveOptions {
                observe_every: 1,
                observer: Some(&mut observer),
                ..Default::default()
            })
            .unwrap();

        assert!(calls > 0);
    }

    #[test]
    fn builder_invalid_reasons() {
        let zero_dim = SquareBoardBuilder::with_dims((0, 5));
        assert_eq!(
            zero_dim.build().unwrap_err(),
            &vec![BuilderInvalidReason::ZeroDimension]
        );

        let mut out_of_bounds = SquareBoardBuilder::with_dims((3, 3));
        out_of_bounds.add_clue(Location(3, 0), 2);
        assert_eq!(
            out_of_bounds.build().unwrap_err(),
            &vec![BuilderInvalidReason::ClueOutOfBounds]
        );

        let mut zero_value = SquareBoardBuilder::with_dims((3, 3));
        zero_value.add_clue(Location(0, 0), 0);
        assert_eq!(
            zero_value.build().unwrap_err(),
            &vec![BuilderInvalidReason::ClueValueZero]
        );

        assert!(SquareBoardBuilder::with_dims((3, 3)).is_valid().is_none());
    }

    #[test]
    fn pop_clue_removes_most_recent() {
        let board = SquareBoardBuilder::with_dims((2, 2))
            .add_clue(Location(0, 0), 2)
            .add_clue(Location(1, 1), 2)
            .pop_clue()
            .build()
            .unwrap();

        assert!(board.is_fixed_at(Location(0, 0)));
        assert!(!board.is_fixed_at(Location(1, 1)));
    }

    #[test]
    fn clue_values_are_immutable() {
        let mut board = SquareBoardBuilder::with_dims((2, 2))
            .add_clue(Location(0, 0), 2)
            .build()
            .unwrap();

        board.set_value(Location(0, 0), 5);
        assert_eq!(board.value_at(Location(0, 0)), 2);
    }

    #[test]
    fn validator_accepts_hand_solution() {
        // 4 4 2
        // 4 4 2
        let mut board = SquareBoardBuilder::with_dims((3, 2))
            .add_clue(Location(0, 0), 4)
            .build()
            .unwrap();

        for location in [Location(1, 0), Location(0, 1), Location(1, 1)] {
            board.set_value(location, 4);
        }
        for location in [Location(2, 0), Location(2, 1)] {
            board.set_value(location, 2);
        }

        let order = board.check_solution().unwrap();
        assert_eq!(order.len(), 6);

        // validation never touches the caller's board
        assert!(board.region_id_at(Location(0, 0)).is_none());
        assert_eq!(board.filled, 0);
    }

    #[test]
    fn validator_rejects_wrong_component_size() {
        let mut board = SquareBoardBuilder::with_dims((2, 2)).build().unwrap();
        for y in 0..2 {
            for x in 0..2 {
                board.set_value(Location(x, y), 3);
            }
        }

        assert_eq!(board.check_solution(), None);
    }

    #[test]
    fn validator_rejects_adjacent_ones() {
        let mut board = SquareBoardBuilder::with_dims((4, 1)).build().unwrap();
        for (x, value) in [1, 1, 2, 2].into_iter().enumerate() {
            board.set_value(Location(x, 0), value);
        }

        assert_eq!(board.check_solution(), None);
    }

    #[test]
    fn validator_rejects_incomplete_board() {
        let mut board = SquareBoardBuilder::with_dims((2, 1)).build().unwrap();
        board.set_value(Location(0, 0), 2);

        assert_eq!(board.check_solution(), None);
    }
}
