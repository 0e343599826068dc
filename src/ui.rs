//! Terminal rendering of heatmaps and the status grid.

use crate::common::CellStatus;
use crate::grid::{Grid, ProbabilityMatrix};

/// Print a probability matrix with lettered columns and 1-based rows.
pub fn print_probability_board(matrix: &ProbabilityMatrix) {
    let dims = matrix.dims();
    println!("\nProbability distribution:");
    print!("   ");
    for c in 0..dims.cols {
        print!(" {:>4}", column_letter(c));
    }
    println!();
    for r in 0..dims.rows {
        print!("{:2} ", r + 1);
        for c in 0..dims.cols {
            print!(" {:4.2}", matrix[(r, c)]);
        }
        println!();
    }
}

/// Print the status grid: `.` unknown, `o` miss, `X` hit.
pub fn print_status_board(status: &Grid<CellStatus>) {
    let dims = status.dims();
    print!("   ");
    for c in 0..dims.cols {
        print!(" {}", column_letter(c));
    }
    println!();
    for r in 0..dims.rows {
        print!("{:2} ", r + 1);
        for c in 0..dims.cols {
            let ch = match status[(r, c)] {
                CellStatus::Unknown => '.',
                CellStatus::Miss => 'o',
                CellStatus::Hit => 'X',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// Column label; callers clamp boards to 26 columns.
pub fn column_letter(col: usize) -> char {
    (b'A' + col as u8) as char
}

/// Format a cell like `B4` (letter column, 1-based row).
pub fn coord_to_string(row: usize, col: usize) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

/// Parse a cell like `B4` into zero-based `(row, col)`.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}
