mod common;

use common::{format_board, parse_mini_sudoku, placements_still_consistent};
use grid_puzzles::{
    queens::{Queen, RegionQueens},
    sudoku::MiniSudoku,
    tango::{Symbol, Tango},
    zip::Zip,
};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

// The 6x6 waypoint-path board committed with the original puzzle set: four
// waypoints and eight walls forming two combs.
fn zip_fixture() -> Zip {
    let mut labels = [0u32; 36];
    labels[7] = 1;
    labels[28] = 2;
    labels[22] = 3;
    labels[13] = 4;

    let walls = [
        (6, 7),
        (12, 13),
        (18, 19),
        (24, 25),
        (10, 11),
        (16, 17),
        (22, 23),
        (28, 29),
    ];

    Zip::new(&labels, &walls).unwrap()
}

// The 6x6 binary-coloring board committed with the original puzzle set.
fn tango_fixture() -> Tango {
    #[rustfmt::skip]
    let givens: Vec<Option<Symbol>> = [
        0, 0, 0, 0, 0, 0,
        2, 0, 0, 0, 0, 0,
        1, 0, 0, 2, 0, 0,
        0, 0, 2, 0, 0, 0,
        0, 0, 0, 0, 0, 2,
        0, 0, 0, 0, 0, 0,
    ]
    .iter()
    .map(|&cell| match cell {
        0 => None,
        1 => Some(Symbol::Sun),
        _ => Some(Symbol::Moon),
    })
    .collect();

    let same = [(7, 8), (22, 23), (27, 28)];
    let different = [(12, 13)];

    Tango::new(givens, &same, &different).unwrap()
}

fn queens_fixture() -> RegionQueens {
    #[rustfmt::skip]
    let regions = vec![
        0, 0, 1, 0,
        1, 1, 1, 1,
        2, 2, 2, 2,
        3, 3, 3, 3,
    ];

    RegionQueens::new(regions).unwrap()
}

#[test]
fn zip_fixture_solves_and_honors_waypoints() {
    let puzzle = zip_fixture();

    let path = puzzle.solve().unwrap();
    assert!(puzzle.verify(&path));

    // The path starts at waypoint 1 and reaches the waypoints in label
    // order.
    assert_eq!(path[7], 1);
    assert!(path[7] < path[28]);
    assert!(path[28] < path[22]);
    assert!(path[22] < path[13]);

    // Walls are never crossed by consecutive visits.
    for &(a, b) in &[(6, 7), (12, 13), (18, 19), (24, 25)] {
        assert_ne!(path[a].abs_diff(path[b]), 1);
    }

    assert_eq!(puzzle.solve().unwrap(), path, "solver must be deterministic");
}

#[test]
fn tango_fixture_solves_and_honors_pairs() {
    let puzzle = tango_fixture();

    let board = puzzle.solve().unwrap();
    assert!(puzzle.verify(&board));

    assert_eq!(board[6], Symbol::Moon);
    assert_eq!(board[12], Symbol::Sun);
    assert_eq!(board[7], board[8]);
    assert_eq!(board[22], board[23]);
    assert_eq!(board[27], board[28]);
    assert_ne!(board[12], board[13]);

    assert_eq!(puzzle.solve().unwrap(), board, "solver must be deterministic");
}

#[test]
fn mini_sudoku_string_round_trip() {
    env_logger::init();

    let input = "123456456123231564564231312645000000";
    let expected = "123456456123231564564231312645645312";

    let puzzle = parse_mini_sudoku(input);
    let solution = puzzle.solve().unwrap();

    assert_eq!(format_board(&solution), expected);
}

#[test]
fn consistency_is_idempotent_on_solutions() {
    let queens = queens_fixture();
    let placed = queens.solve().unwrap();
    let cells: Vec<Option<Queen>> = placed
        .iter()
        .map(|&has_queen| has_queen.then_some(Queen))
        .collect();
    assert!(placements_still_consistent(&queens, &cells));

    let zip = zip_fixture();
    let path: Vec<Option<u32>> = zip.solve().unwrap().into_iter().map(Some).collect();
    assert!(placements_still_consistent(&zip, &path));

    let tango = tango_fixture();
    let board: Vec<Option<Symbol>> = tango.solve().unwrap().into_iter().map(Some).collect();
    assert!(placements_still_consistent(&tango, &board));

    let sudoku = MiniSudoku::new(&[0; 36]).unwrap();
    let board: Vec<Option<u8>> = sudoku.solve().unwrap().into_iter().map(Some).collect();
    assert!(placements_still_consistent(&sudoku, &board));
}

#[test]
fn concurrent_searches_agree_with_sequential() {
    let sequential_path = zip_fixture().solve().unwrap();
    let sequential_board = MiniSudoku::new(&[0; 36]).unwrap().solve().unwrap();

    let results: Vec<_> = (0..16)
        .into_par_iter()
        .map(|_| {
            let path = zip_fixture().solve().unwrap();
            let board = MiniSudoku::new(&[0; 36]).unwrap().solve().unwrap();
            (path, board)
        })
        .collect();

    for (path, board) in results {
        assert_eq!(path, sequential_path);
        assert_eq!(board, sequential_board);
    }
}
