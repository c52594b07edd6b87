#[cfg(test)]
mod tests {
    use ndarray::array;
    use proptest::prelude::*;
    use strum::VariantArray;

    use crate::builder::{BuilderInvalidReason, ClueBuilder};
    use crate::hit::{hit_side, locate, unit_size};
    use crate::notation::{detect, parse_clues, Format};
    use crate::save::{deserialize, serialize};
    use crate::{Action, Board, Clue, Config, Dims, Error, Game, Location, LoopGraph, Mark, MoveOutcome, Point, Side, Step};

    fn game(text: &str) -> Game {
        let mut game = Game::default();
        game.load_numbers(text).unwrap();
        game
    }

    fn outer_square() -> Vec<(Location, Side)> {
        vec![
            (Location(0, 0), Side::Top),
            (Location(1, 0), Side::Top),
            (Location(1, 0), Side::Right),
            (Location(1, 1), Side::Right),
            (Location(1, 1), Side::Bottom),
            (Location(0, 1), Side::Bottom),
            (Location(0, 1), Side::Left),
            (Location(0, 0), Side::Left),
        ]
    }

    fn draw(board: &mut Board, location: Location, sides: &[Side]) {
        for side in sides {
            board.set_edge(location, *side, true).unwrap();
        }
    }

    #[test]
    fn dims_bounds() {
        assert_eq!(Dims::new(0, 5), Err(Error::InvalidBoardSize { columns: 0, rows: 5 }));
        assert_eq!(Dims::new(51, 1), Err(Error::InvalidBoardSize { columns: 51, rows: 1 }));
        let dims = Dims::new(50, 50).unwrap();
        assert_eq!(dims.area(), 2500);
        assert_eq!(Dims::new(3, 2).unwrap().locations().last(), Some(Location(2, 1)));
    }

    #[test]
    fn side_steps() {
        assert_eq!(Side::Top.attempt_from(Location(0, 0)), None);
        assert_eq!(Side::Left.attempt_from(Location(0, 3)), None);
        assert_eq!(Side::Right.attempt_from(Location(1, 1)), Some(Location(2, 1)));
        for side in Side::VARIANTS {
            assert_eq!(side.invert().invert(), *side);
            assert_ne!(side.invert(), *side);
        }
        assert_eq!("Bottom".parse::<Side>(), Ok(Side::Bottom));
        assert!("diagonal".parse::<Side>().is_err());
    }

    #[test]
    fn boundaries_are_shared_by_neighbors() {
        let board = Board::empty(Dims::new(3, 2).unwrap());
        for location in board.dims().locations() {
            for side in Side::VARIANTS {
                if let Some(neighbor) = side.attempt_from(location).filter(|n| n.0 < 3 && n.1 < 2) {
                    assert_eq!(board.boundary(location, *side), board.boundary(neighbor, side.invert()));
                }
            }
        }

        let total = (2 + 1) * 3 + 2 * (3 + 1);
        assert_eq!(board.boundaries().count(), total);
        let distinct = board.dims().locations()
            .flat_map(|l| Side::VARIANTS.iter().map(move |s| (l, *s)))
            .map(|(l, s)| board.boundary(l, s).unwrap())
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(distinct.len(), total);
    }

    #[test]
    fn set_edge_mirrors_neighbor() {
        let mut board = Board::empty(Dims::new(2, 2).unwrap());
        board.set_edge(Location(0, 0), Side::Right, true).unwrap();
        assert_eq!(board.mark(Location(1, 0), Side::Left), Ok(Mark::Line));
        board.set_cross(Location(1, 1), Side::Top, true).unwrap();
        assert_eq!(board.mark(Location(1, 0), Side::Bottom), Ok(Mark::Cross));

        // clearing a line does not touch a cross
        board.set_edge(Location(1, 0), Side::Bottom, false).unwrap();
        assert_eq!(board.mark(Location(1, 1), Side::Top), Ok(Mark::Cross));

        board.set_edge(Location(1, 0), Side::Left, false).unwrap();
        assert_eq!(board.mark(Location(0, 0), Side::Right), Ok(Mark::Empty));

        assert_eq!(board.set_edge(Location(2, 0), Side::Left, true), Err(Error::OutOfBounds(Location(2, 0))));
    }

    #[test]
    fn endpoints_of_boundaries() {
        let board = Board::empty(Dims::new(2, 2).unwrap());
        let right = board.boundary(Location(0, 0), Side::Right).unwrap();
        let endpoints = board.endpoints(right);
        assert_eq!(endpoints, unordered_pair::UnorderedPair(Point(1, 0), Point(1, 1)));

        let (a, b) = Side::Bottom.endpoints(Location(1, 1));
        assert_eq!(board.endpoints(board.boundary(Location(1, 1), Side::Bottom).unwrap()), unordered_pair::UnorderedPair(a, b));
    }

    #[test]
    fn cell_view() {
        let mut board = Board::empty(Dims::new(2, 1).unwrap());
        draw(&mut board, Location(0, 0), &[Side::Top, Side::Right]);
        board.set_cross(Location(1, 0), Side::Bottom, true).unwrap();

        let cell = board.cell(Location(1, 0)).unwrap();
        assert_eq!(cell.lines.iter().collect::<Vec<_>>(), vec![Side::Left]);
        assert_eq!(cell.crosses.iter().collect::<Vec<_>>(), vec![Side::Bottom]);
        assert_eq!(board.cell(Location(0, 0)).unwrap().lines.len(), 2);
        assert_eq!(cell.clue_char(), '.');
    }

    #[test]
    fn render_board() {
        let mut board = parse_clues("2").unwrap();
        board.set_edge(Location(0, 0), Side::Top, true).unwrap();
        board.set_cross(Location(0, 0), Side::Left, true).unwrap();
        assert_eq!(board.render(), "+-+\nx2 \n+ +\n");
    }

    mod steps {
        use super::*;

        #[test]
        fn transitions() {
            let mut game = game("..,..");
            let at = Location(0, 0);

            assert!(matches!(game.try_add_edge(at, Side::Right), MoveOutcome::Applied(Step { is_addition: true, is_line: true, .. })));
            assert_eq!(game.board().mark(at, Side::Right), Ok(Mark::Line));

            // a cross click on a line removes the line and nothing else
            assert!(matches!(game.try_add_cross(at, Side::Right), MoveOutcome::Applied(Step { is_addition: false, is_line: true, .. })));
            assert_eq!(game.board().mark(at, Side::Right), Ok(Mark::Empty));

            game.try_add_cross(Location(1, 0), Side::Left);
            assert_eq!(game.board().mark(at, Side::Right), Ok(Mark::Cross));

            // a line click on a cross only clears the cross
            assert!(matches!(game.try_add_edge(at, Side::Right), MoveOutcome::Applied(Step { is_addition: false, is_line: false, .. })));
            assert_eq!(game.board().mark(at, Side::Right), Ok(Mark::Empty));

            game.try_add_cross(at, Side::Right);
            game.try_add_cross(at, Side::Right);
            assert_eq!(game.board().mark(at, Side::Right), Ok(Mark::Empty));

            assert_eq!(game.history().past().len(), 6);
        }

        #[test]
        fn plan_and_inverse() {
            let board = parse_clues("..").unwrap();
            let step = Step::plan(&board, Location(1, 0), Side::Top, Action::Cross).unwrap();
            assert_eq!(step, Step { location: Location(1, 0), side: Side::Top, is_addition: true, is_line: false });
            assert_eq!(step.inverse().inverse(), step);
            assert!(Step::plan(&board, Location(2, 0), Side::Top, Action::Line).is_err());
        }

        #[test]
        fn out_of_bounds_is_ignored() {
            let mut game = game("..,..");
            let before = game.board().clone();
            assert_eq!(game.try_add_edge(Location(2, 0), Side::Left), MoveOutcome::Ignored);
            assert_eq!(game.try_add_cross(Location(0, 7), Side::Top), MoveOutcome::Ignored);
            assert_eq!(game.board(), &before);
            assert!(!game.history().can_undo());
        }

        #[test]
        fn undo_redo() {
            let mut game = game("3.,..");
            game.try_add_edge(Location(0, 0), Side::Top);
            let after_first = game.board().clone();
            game.try_add_cross(Location(0, 0), Side::Right);
            let after_second = game.board().clone();

            assert!(matches!(game.undo(), MoveOutcome::Applied(_)));
            assert_eq!(game.board(), &after_first);
            assert!(game.history().can_redo());

            assert!(matches!(game.redo(), MoveOutcome::Applied(_)));
            assert_eq!(game.board(), &after_second);
            assert_eq!(game.redo(), MoveOutcome::Ignored);

            game.undo();
            game.undo();
            assert_eq!(game.board().lines().count(), 0);
            assert_eq!(game.undo(), MoveOutcome::Ignored);
            assert_eq!(game.history().future().len(), 2);
        }

        #[test]
        fn new_move_drops_redo() {
            let mut game = game("..,..");
            game.try_add_edge(Location(0, 0), Side::Top);
            game.try_add_edge(Location(0, 0), Side::Left);
            game.undo();
            assert!(game.history().can_redo());

            game.try_add_cross(Location(1, 1), Side::Bottom);
            assert!(game.history().future().is_empty());
            assert_eq!(game.redo(), MoveOutcome::Ignored);
        }

        #[test]
        fn reload_drops_recorded_steps() {
            let mut game = game("...,...,...");
            game.try_add_edge(Location(2, 2), Side::Right);
            game.try_add_cross(Location(1, 1), Side::Top);
            game.undo();

            game.load_numbers("1.").unwrap();
            assert_eq!(game.undo(), MoveOutcome::Ignored);
            assert_eq!(game.redo(), MoveOutcome::Ignored);
            assert_eq!(game.board().lines().count(), 0);
            assert_eq!(game.board_string(), "1.\n");
        }

        #[test]
        fn history_as_json() {
            let mut game = game("..");
            game.try_add_edge(Location(1, 0), Side::Bottom);
            game.try_add_cross(Location(0, 0), Side::Left);
            game.undo();

            let json = serde_json::to_value(game.history()).unwrap();
            assert_eq!(json, serde_json::json!({
                "past": [{ "location": [1, 0], "side": "Bottom", "is_addition": true, "is_line": true }],
                "future": [{ "location": [0, 0], "side": "Left", "is_addition": true, "is_line": false }],
            }));
        }

        #[test]
        fn undo_restores_removed_mark() {
            let mut game = game("..");
            game.try_add_cross(Location(0, 0), Side::Bottom);
            game.try_add_edge(Location(0, 0), Side::Bottom);
            assert_eq!(game.board().mark(Location(0, 0), Side::Bottom), Ok(Mark::Empty));

            game.undo();
            assert_eq!(game.board().mark(Location(0, 0), Side::Bottom), Ok(Mark::Cross));
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn three_crossed_three_is_infeasible() {
            let mut board = parse_clues("3").unwrap();
            for side in [Side::Top, Side::Left, Side::Right] {
                board.set_cross(Location(0, 0), side, true).unwrap();
            }

            let cell = board.cell(Location(0, 0)).unwrap();
            assert!(cell.is_infeasible());
            assert!(!cell.is_satisfied());
            assert_eq!(board.infeasible_cells(), vec![Location(0, 0)]);
        }

        #[test]
        fn feasibility_bounds() {
            let mut board = parse_clues("2.1").unwrap();
            board.set_cross(Location(0, 0), Side::Top, true).unwrap();
            board.set_cross(Location(0, 0), Side::Left, true).unwrap();
            // two crosses leave exactly two sides for a 2
            assert!(!board.cell(Location(0, 0)).unwrap().is_infeasible());

            draw(&mut board, Location(2, 0), &[Side::Top, Side::Bottom]);
            assert!(board.cell(Location(2, 0)).unwrap().is_infeasible());

            // no clue, no constraint
            draw(&mut board, Location(1, 0), &[Side::Top, Side::Bottom]);
            let free = board.cell(Location(1, 0)).unwrap();
            assert!(free.is_satisfied() && !free.is_infeasible());
        }

        #[test]
        fn zero_clue() {
            let mut board = parse_clues("0").unwrap();
            assert!(board.cell(Location(0, 0)).unwrap().is_satisfied());
            board.set_edge(Location(0, 0), Side::Left, true).unwrap();
            assert!(board.cell(Location(0, 0)).unwrap().is_infeasible());
        }

        #[test]
        fn branches_reported() {
            let mut board = Board::empty(Dims::new(2, 2).unwrap());
            for (location, side) in outer_square() {
                board.set_edge(location, side, true).unwrap();
            }
            assert!(board.conflicts().is_empty());

            board.set_edge(Location(0, 0), Side::Right, true).unwrap();
            let conflicts = board.conflicts();
            assert!(conflicts.cells.is_empty());
            assert_eq!(conflicts.branches.len(), 3);
            assert!(conflicts.branches.contains(&board.boundary(Location(1, 0), Side::Left).unwrap()));
        }
    }

    mod loops {
        use super::*;

        #[test]
        fn outer_square_finishes() {
            let mut game = game("22,22");
            let square = outer_square();
            for (location, side) in &square[..7] {
                assert!(matches!(game.try_add_edge(*location, *side), MoveOutcome::Applied(_)));
            }
            assert!(!game.is_finished());
            assert!(!LoopGraph::from(game.board()).is_single_loop());

            let (location, side) = square[7];
            assert!(matches!(game.try_add_edge(location, side), MoveOutcome::Finished(_)));
            assert!(game.is_finished());
            assert!(game.board().is_solved());

            // reported once
            game.try_add_edge(location, side);
            assert!(matches!(game.try_add_edge(location, side), MoveOutcome::Applied(_)));
            assert!(game.is_finished());
        }

        #[test]
        fn finishing_by_removing_extra_line() {
            let mut game = game("22,22");
            for (location, side) in outer_square() {
                if (location, side) == (Location(0, 0), Side::Left) {
                    game.try_add_edge(Location(0, 0), Side::Right);
                }
                game.try_add_edge(location, side);
            }
            assert!(!game.is_finished());
            assert_eq!(game.conflicts().cells, vec![Location(0, 0), Location(1, 0)]);

            assert!(matches!(game.try_add_edge(Location(1, 0), Side::Left), MoveOutcome::Finished(_)));
        }

        #[test]
        fn crosses_do_not_count() {
            let mut board = parse_clues("..,..").unwrap();
            for (location, side) in outer_square() {
                board.set_cross(location, side, true).unwrap();
            }
            assert_eq!(LoopGraph::from(&board).segment_count(), 0);
            assert!(!board.is_solved());
        }

        #[test]
        fn two_loops_are_not_one() {
            let mut board = Board::empty(Dims::new(3, 1).unwrap());
            draw(&mut board, Location(0, 0), Side::VARIANTS);
            draw(&mut board, Location(2, 0), Side::VARIANTS);

            let graph = LoopGraph::from(&board);
            assert_eq!(graph.segment_count(), 8);
            assert!(graph.branching_segments().is_empty());
            assert!(!graph.is_single_loop());
            // no clues, so only the loop check can fail
            assert!(board.all_satisfied());
            assert!(!board.is_solved());
        }

        #[test]
        fn touching_squares_branch() {
            let mut board = Board::empty(Dims::new(2, 1).unwrap());
            draw(&mut board, Location(0, 0), Side::VARIANTS);
            draw(&mut board, Location(1, 0), Side::VARIANTS);

            let graph = LoopGraph::from(&board);
            assert_eq!(graph.branching_segments().len(), 5);
            assert!(!graph.is_single_loop());
        }

        #[test]
        fn corner_touching_squares() {
            let mut board = Board::empty(Dims::new(2, 2).unwrap());
            draw(&mut board, Location(0, 0), Side::VARIANTS);
            draw(&mut board, Location(1, 1), Side::VARIANTS);
            assert!(!LoopGraph::from(&board).is_single_loop());
        }

        #[test]
        fn open_paths() {
            let mut board = Board::empty(Dims::new(3, 3).unwrap());
            assert!(!LoopGraph::from(&board).is_single_loop());

            board.set_edge(Location(1, 1), Side::Top, true).unwrap();
            assert!(!LoopGraph::from(&board).is_single_loop());

            draw(&mut board, Location(1, 1), &[Side::Right, Side::Bottom]);
            assert!(!LoopGraph::from(&board).is_single_loop());

            board.set_edge(Location(1, 1), Side::Left, true).unwrap();
            assert!(LoopGraph::from(&board).is_single_loop());
        }

        #[test]
        fn larger_ring() {
            // a loop around the border of a 3x3 board, skipping the middle
            let mut game = game("2.2,...,2.2");
            for i in 0..3 {
                game.try_add_edge(Location(i, 0), Side::Top);
                game.try_add_edge(Location(i, 2), Side::Bottom);
                game.try_add_edge(Location(0, i), Side::Left);
            }
            for i in 0..2 {
                game.try_add_edge(Location(2, i), Side::Right);
            }
            assert!(!game.is_finished());
            assert!(matches!(game.try_add_edge(Location(2, 2), Side::Right), MoveOutcome::Finished(_)));
        }
    }

    mod pointer {
        use super::*;

        const REGION: f64 = 0.4;

        #[test]
        fn bands() {
            assert_eq!(hit_side(0.125, 0.5, REGION), Some(Side::Left));
            assert_eq!(hit_side(0.875, 0.5, REGION), Some(Side::Right));
            assert_eq!(hit_side(0.5, 0.125, REGION), Some(Side::Top));
            assert_eq!(hit_side(0.5, 0.875, REGION), Some(Side::Bottom));
            assert_eq!(hit_side(0.5, 0.5, REGION), None);
            assert_eq!(hit_side(0.125, 0.5, 0.0), None);
        }

        #[test]
        fn corners_split_by_diagonals() {
            assert_eq!(hit_side(0.25, 0.125, REGION), Some(Side::Top));
            assert_eq!(hit_side(0.25, 0.875, REGION), Some(Side::Bottom));
            assert_eq!(hit_side(0.75, 0.125, REGION), Some(Side::Top));
            assert_eq!(hit_side(0.75, 0.875, REGION), Some(Side::Bottom));
            assert_eq!(hit_side(0.125, 0.25, REGION), Some(Side::Left));
            assert_eq!(hit_side(0.875, 0.75, REGION), Some(Side::Right));
        }

        #[test]
        fn diagonal_ties() {
            assert_eq!(hit_side(0.1, 0.1, REGION), Some(Side::Left));
            assert_eq!(hit_side(0.25, 0.25, REGION), Some(Side::Left));
            assert_eq!(hit_side(0.25, 0.75, REGION), Some(Side::Left));
            assert_eq!(hit_side(0.75, 0.25, REGION), Some(Side::Right));
            assert_eq!(hit_side(0.75, 0.75, REGION), Some(Side::Right));
            assert_eq!(hit_side(0.5, 0.375, REGION), Some(Side::Top));
            // bands are strict
            assert_eq!(hit_side(0.375, 0.5, 0.375), None);
        }

        #[test]
        fn region_is_clamped() {
            assert_eq!(Config::default().click_region_percent(), 0.4);
            assert_eq!(Config::default().with_click_region_percent(0.9).click_region_percent(), 0.5);
            assert_eq!(Config::default().with_click_region_percent(-1.0).click_region_percent(), 0.0);
            assert_eq!(Config::default().with_click_region_percent(f64::NAN).click_region_percent(), 0.0);
        }

        #[test]
        fn narrower_region_after_config_change() {
            let mut game = game("..,..");
            // 10 of 40 pixels from the left edge
            assert!(matches!(game.click(10.0, 20.0, 40.0, Action::Line), MoveOutcome::Applied(_)));

            game.set_config(Config::default().with_click_region_percent(0.2));
            assert_eq!(game.config().click_region_percent(), 0.2);
            assert_eq!(game.click(10.0, 20.0, 40.0, Action::Line), MoveOutcome::Ignored);
            assert!(matches!(game.click(4.0, 20.0, 40.0, Action::Line), MoveOutcome::Applied(_)));
            assert_eq!(game.board().mark(Location(0, 0), Side::Left), Ok(Mark::Empty));
            assert_eq!(game.history().past().len(), 2);
        }

        #[test]
        fn canvas_positions() {
            let hit = locate(45.0, 10.0, 40.0).unwrap();
            assert_eq!(hit.location, Location(1, 0));
            assert_eq!((hit.fx, hit.fy), (0.125, 0.25));
            assert!(locate(-1.0, 10.0, 40.0).is_none());
            assert!(locate(1.0, 10.0, 0.0).is_none());
            assert_eq!(unit_size(400.0, 300.0, 10, 5), 40.0);
        }

        #[test]
        fn click_pipeline() {
            let mut game = game("..,..");
            assert!(matches!(game.click(5.0, 20.0, 40.0, Action::Line), MoveOutcome::Applied(_)));
            assert_eq!(game.board().mark(Location(0, 0), Side::Left), Ok(Mark::Line));

            assert!(matches!(game.click(60.0, 75.0, 40.0, Action::Cross), MoveOutcome::Applied(_)));
            assert_eq!(game.board().mark(Location(1, 1), Side::Bottom), Ok(Mark::Cross));

            assert_eq!(game.click(20.0, 20.0, 40.0, Action::Line), MoveOutcome::Ignored);
            // right of the board
            assert_eq!(game.click(85.0, 20.0, 40.0, Action::Line), MoveOutcome::Ignored);
            assert_eq!(game.history().past().len(), 2);
        }
    }

    mod text {
        use super::*;

        #[test]
        fn plain_grid() {
            let board = parse_clues("3.2\r\n..0\n").unwrap();
            assert_eq!((board.dims().columns(), board.dims().rows()), (3, 2));
            assert_eq!(board.clue(Location(0, 0)), Clue::new(3));
            assert_eq!(board.clue(Location(1, 0)), None);
            assert_eq!(board.clue(Location(2, 1)), Clue::new(0));
            assert_eq!(board.to_string(), "3.2\n..0\n");

            assert_eq!(parse_clues("3 2,x-0").unwrap().to_string(), "3.2\n..0\n");
        }

        #[test]
        fn compact() {
            assert_eq!(detect("3x2t0:3a2b0"), Format::Compact);
            assert_eq!(detect("3.2,..0"), Format::Plain);
            let board = parse_clues("3x2t0:3a2b0").unwrap();
            assert_eq!(board.to_string(), "3.2\n..0\n");

            let board = parse_clues("5x5t0:e1a2a1e0a3a0e\n").unwrap();
            assert_eq!(board.to_string(), ".....\n1.2.1\n.....\n0.3.0\n.....\n");
        }

        #[test]
        fn malformed() {
            assert!(matches!(parse_clues(""), Err(Error::MalformedClueText(_))));
            assert!(matches!(parse_clues("  \n"), Err(Error::MalformedClueText(_))));
            assert!(matches!(parse_clues(",,"), Err(Error::MalformedClueText(_))));
            assert!(matches!(parse_clues("12,3"), Err(Error::MalformedClueText(_))));
            assert!(matches!(parse_clues("4.."), Err(Error::MalformedClueText(_))));
            assert!(matches!(parse_clues("2x2t0:1"), Err(Error::MalformedClueText(_))));
            assert!(matches!(parse_clues("2x2t0:1111a"), Err(Error::MalformedClueText(_))));
            assert!(matches!(parse_clues("2x2t0:11-1"), Err(Error::MalformedClueText(_))));
            assert_eq!(parse_clues("0x3t0:").unwrap_err(), Error::InvalidBoardSize { columns: 0, rows: 3 });
            assert_eq!(parse_clues(&".".repeat(60)).unwrap_err(), Error::InvalidBoardSize { columns: 60, rows: 1 });
        }

        #[test]
        fn failed_load_keeps_board() {
            let mut game = game("1.,.2");
            game.try_add_edge(Location(0, 0), Side::Top);
            assert!(game.load_numbers("12,3").is_err());
            assert!(game.set_board_size(51, 3).is_err());
            assert_eq!(game.board_string(), "1.\n.2\n");
            assert!(game.history().can_undo());
        }

        #[test]
        fn board_string_round_trip() {
            let mut game = game("4x3t0:a3b01c2b");
            game.try_add_edge(Location(1, 0), Side::Left);
            let text = game.board_string();
            assert_eq!(text, ".3..\n01..\n.2..\n");

            let mut reloaded = Game::default();
            reloaded.load_numbers(&text).unwrap();
            assert_eq!(reloaded.board_string(), text);
            assert_eq!(reloaded.board().lines().count(), 0);
            assert!(!reloaded.history().can_undo());
        }

        #[test]
        fn clue_array() {
            let mut game = Game::default();
            game.load_clues(&array![[Clue::new(1), None], [None, Clue::new(3)], [Clue::new(0), None]]).unwrap();
            assert_eq!(game.board_string(), "1.\n.3\n0.\n");
        }

        #[test]
        fn board_size() {
            let mut game = game("11,11");
            game.try_add_edge(Location(0, 0), Side::Top);
            game.set_square_board_size(4).unwrap();
            assert_eq!(game.board_string(), "....\n....\n....\n....\n");
            assert!(!game.history().can_undo());
            assert_eq!(game.set_board_size(0, 4), Err(Error::InvalidBoardSize { columns: 0, rows: 4 }));
        }
    }

    mod builder {
        use super::*;

        #[test]
        fn out_of_bounds_clue() {
            let mut builder = ClueBuilder::with_dims(Dims::new(2, 2).unwrap());
            builder.set_clue(Location(1, 1), Clue::new(2));
            assert!(builder.is_valid().is_none());

            builder.set_clue(Location(2, 0), Clue::new(1));
            assert_eq!(builder.build().unwrap_err(), &vec![BuilderInvalidReason::ClueOutOfBounds]);
        }

        #[test]
        fn sequential() {
            let mut builder = ClueBuilder::with_dims(Dims::new(2, 1).unwrap());
            builder.push(Clue::new(0)).skip(1);
            assert_eq!(builder.pushed(), 2);
            assert_eq!(builder.build().unwrap().to_string(), "0.\n");

            builder.push(None);
            assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::TooManyClues]));
        }
    }

    mod saves {
        use super::*;

        #[test]
        fn round_trip() {
            let mut board = parse_clues("3.1,.2.,0..").unwrap();
            draw(&mut board, Location(0, 0), &[Side::Top, Side::Left, Side::Right]);
            board.set_cross(Location(2, 2), Side::Bottom, true).unwrap();
            board.set_cross(Location(1, 1), Side::Left, true).unwrap();

            let bytes = serialize(&board);
            assert_eq!(&bytes[..6], b"SLK\x01\x03\x03");
            assert_eq!(deserialize(&bytes), Ok(board));
        }

        #[test]
        fn corrupt() {
            let board = parse_clues("1.,..").unwrap();
            let bytes = serialize(&board);

            assert!(matches!(deserialize(&bytes[..bytes.len() - 1]), Err(Error::CorruptSave(_))));
            assert!(matches!(deserialize(b"XYZ\x01\x01\x01"), Err(Error::CorruptSave(_))));

            let mut bad_clue = bytes.clone();
            bad_clue[6] = 7;
            assert!(matches!(deserialize(&bad_clue), Err(Error::CorruptSave(_))));

            let mut bad_mark = bytes.clone();
            *bad_mark.last_mut().unwrap() = 3;
            assert!(matches!(deserialize(&bad_mark), Err(Error::CorruptSave(_))));

            let mut bad_size = bytes;
            bad_size[4] = 0;
            assert!(matches!(deserialize(&bad_size), Err(Error::CorruptSave(_))));
        }

        #[test]
        fn game_save() {
            let mut game = game("22,22");
            for (location, side) in outer_square() {
                game.try_add_edge(location, side);
            }
            let bytes = game.save();

            let mut restored = Game::default();
            restored.load_save(&bytes).unwrap();
            assert_eq!(restored.board(), game.board());
            assert!(restored.is_finished());
            assert!(!restored.history().can_undo());

            assert!(restored.load_save(&[]).is_err());
            assert_eq!(restored.board(), game.board());
        }
    }

    fn op() -> impl Strategy<Value = (usize, usize, usize, bool)> {
        // coordinates reach one past the 3x3 board
        (0..4usize, 0..4usize, 0..4usize, any::<bool>())
    }

    fn mirrored(board: &Board) -> bool {
        board.dims().locations().all(|location| {
            let cell = board.cell(location).unwrap();
            Side::VARIANTS.iter().all(|side| {
                if cell.lines.contains(*side) && cell.crosses.contains(*side) {
                    return false;
                }

                let Some(neighbor) = side.attempt_from(location).and_then(|n| board.cell(n).ok()) else {
                    return true;
                };
                neighbor.lines.contains(side.invert()) == cell.lines.contains(*side)
                    && neighbor.crosses.contains(side.invert()) == cell.crosses.contains(*side)
            })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

        #[test]
        fn undo_and_redo_are_inverses(ops in prop::collection::vec(op(), 1..40)) {
            let mut game = game("3.1,.2.,0..");
            for (x, y, side, line) in ops {
                let side = Side::VARIANTS[side];
                let action = if line { Action::Line } else { Action::Cross };
                let before = game.board().clone();
                let past = game.history().past().to_vec();

                if game.try_mark(Location(x, y), side, action) == MoveOutcome::Ignored {
                    prop_assert_eq!(game.board(), &before);
                    continue;
                }
                prop_assert!(game.history().future().is_empty());
                prop_assert!(mirrored(game.board()));
                let after = game.board().clone();
                let history = game.history().clone();

                game.undo();
                prop_assert_eq!(game.board(), &before);
                prop_assert_eq!(game.history().past(), past.as_slice());

                game.redo();
                prop_assert_eq!(game.board(), &after);
                prop_assert_eq!(game.history(), &history);
            }
        }

        #[test]
        fn unwinding_everything_clears_board(ops in prop::collection::vec(op(), 0..40)) {
            let mut game = game("3.1,.2.,0..");
            for (x, y, side, line) in &ops {
                let action = if *line { Action::Line } else { Action::Cross };
                game.try_mark(Location(*x, *y), Side::VARIANTS[*side], action);
            }
            let end = game.board().clone();

            while game.history().can_undo() {
                game.undo();
                prop_assert!(mirrored(game.board()));
            }
            prop_assert!(game.board().boundaries().all(|(_, mark)| mark == Mark::Empty));

            while game.history().can_redo() {
                game.redo();
            }
            prop_assert_eq!(game.board(), &end);
        }
    }
}
