use grid_puzzles::{sudoku::MiniSudoku, Assignment, Model, Placement};

/// Generate a 6×6 mini sudoku puzzle from an input string.
///
/// # Expected Format
///  - 0 denotes an empty cell
///  - The digits are presented in row-major order, so the first six
///    characters are the first row, the next six the second row, etc.
///
/// # Panics
///  - If the string is not exactly 36 characters
///  - If any character in the string is not [0-6]
#[allow(dead_code)]
pub fn parse_mini_sudoku(input: &str) -> MiniSudoku {
    log::debug!("Parsing mini sudoku puzzle input [{}].", input);

    let cells: Vec<u8> = input
        .chars()
        .map(|c| {
            u8::try_from(c.to_digit(10).expect("input must be numeric")).unwrap()
        })
        .collect();

    MiniSudoku::new(&cells).expect("input must describe a well-formed 6x6 board")
}

/// Format a solved board back into the string format accepted by
/// `parse_mini_sudoku`.
#[allow(dead_code)]
pub fn format_board(board: &[u8]) -> String {
    board.iter().map(|digit| char::from(b'0' + digit)).collect()
}

/// Re-run a model's local-consistency predicate over every assigned cell of
/// a completed solution: each placement must still be accepted when checked
/// against the rest of the board.
#[allow(dead_code)]
pub fn placements_still_consistent<M: Model>(model: &M, cells: &[Option<M::Value>]) -> bool {
    let mut assignment = Assignment::new(model.cell_count());
    for (cell, &value) in cells.iter().enumerate() {
        if let Some(value) = value {
            assignment.assign(cell, value);
        }
    }

    for cell in 0..cells.len() {
        let value = match cells[cell] {
            Some(value) => value,
            None => continue,
        };

        assignment.clear(cell);
        let consistent = model.is_consistent(&assignment, &Placement { cell, value });
        assignment.assign(cell, value);

        if !consistent {
            return false;
        }
    }

    true
}
