//! Ship placement geometry: orientations, candidate enumeration, neighborhoods
//! and contiguous hit runs.

use crate::common::CellStatus;
use crate::grid::{Dimensions, Grid};

/// Axis a ship lies along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One hypothetical occupation of `length` consecutive cells from an origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub length: usize,
    pub orientation: Orientation,
}

impl Placement {
    /// Covered cells in scan order from the origin.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let p = *self;
        (0..p.length).map(move |k| match p.orientation {
            Orientation::Horizontal => (p.row, p.col + k),
            Orientation::Vertical => (p.row + k, p.col),
        })
    }
}

/// Every placement of `length` at `orientation` whose covered cells are all
/// unblocked. Horizontal candidates scan row by row, vertical ones column by
/// column; downstream consumers depend on this emission order.
pub fn enumerate_placements<F>(
    dims: Dimensions,
    length: usize,
    orientation: Orientation,
    blocked: F,
) -> Vec<Placement>
where
    F: Fn(usize, usize) -> bool,
{
    let mut out = Vec::new();
    if length == 0 {
        return out;
    }
    match orientation {
        Orientation::Horizontal => {
            if length > dims.cols {
                return out;
            }
            for row in 0..dims.rows {
                for col in 0..=dims.cols - length {
                    let p = Placement { row, col, length, orientation };
                    if p.cells().all(|(r, c)| !blocked(r, c)) {
                        out.push(p);
                    }
                }
            }
        }
        Orientation::Vertical => {
            if length > dims.rows {
                return out;
            }
            for col in 0..dims.cols {
                for row in 0..=dims.rows - length {
                    let p = Placement { row, col, length, orientation };
                    if p.cells().all(|(r, c)| !blocked(r, c)) {
                        out.push(p);
                    }
                }
            }
        }
    }
    out
}

/// In-bounds cells of the 8-neighborhood of `(row, col)`.
pub fn neighbors(
    dims: Dimensions,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> {
    const OFFSETS: [(isize, isize); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];
    OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        if dims.contains(r, c) {
            Some((r, c))
        } else {
            None
        }
    })
}

/// Whether `p` avoids every occupied cell and their 8-neighborhoods (the
/// no-touch rule: ships never adjacent, not even diagonally).
pub fn placement_fits(occupied: &Grid<bool>, p: &Placement) -> bool {
    let dims = occupied.dims();
    p.cells().all(|(r, c)| {
        !occupied[(r, c)] && neighbors(dims, r, c).all(|(nr, nc)| !occupied[(nr, nc)])
    })
}

/// Cardinal step directions, in hunt-mode priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// One step from `cell`, or `None` when it would leave the grid.
    pub fn step(&self, dims: Dimensions, cell: (usize, usize)) -> Option<(usize, usize)> {
        let (row, col) = cell;
        let next = match self {
            Direction::Up => (row.checked_sub(1)?, col),
            Direction::Down => (row + 1, col),
            Direction::Left => (row, col.checked_sub(1)?),
            Direction::Right => (row, col + 1),
        };
        if dims.contains(next.0, next.1) {
            Some(next)
        } else {
            None
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Cells of the contiguous `Hit` run through `cell` along `orientation`, in
/// ascending order. `cell` itself is included whatever its status.
pub fn hit_run(
    status: &Grid<CellStatus>,
    cell: (usize, usize),
    orientation: Orientation,
) -> Vec<(usize, usize)> {
    let (back, forward) = match orientation {
        Orientation::Horizontal => (Direction::Left, Direction::Right),
        Orientation::Vertical => (Direction::Up, Direction::Down),
    };
    let dims = status.dims();
    let mut start = cell;
    while let Some(prev) = back.step(dims, start) {
        if status[prev] != CellStatus::Hit {
            break;
        }
        start = prev;
    }
    let mut cells = vec![start];
    let mut cur = start;
    while let Some(next) = forward.step(dims, cur) {
        if next != cell && status[next] != CellStatus::Hit {
            break;
        }
        cells.push(next);
        cur = next;
    }
    cells
}
