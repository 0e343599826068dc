//! Dense row-major grid storage and the probability matrix type.

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::common::CellStatus;

/// Board dimensions, fixed once a board is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Dimensions { rows, cols }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether `(row, col)` is a valid cell index.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

/// A rows x cols grid stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    dims: Dimensions,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(dims: Dimensions, fill: T) -> Self {
        Grid {
            dims,
            cells: vec![fill; dims.cell_count()],
        }
    }
}

impl<T> Grid<T> {
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Checked cell access; `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if self.dims.contains(row, col) {
            self.cells.get(row * self.dims.cols + col)
        } else {
            None
        }
    }

    /// Iterate cells in row-major order together with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let cols = self.dims.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i / cols, i % cols), v))
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[row * self.dims.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.cells[row * self.dims.cols + col]
    }
}

/// Per-cell occupancy likelihoods in `[0, 1]`.
pub type ProbabilityMatrix = Grid<f64>;

impl Grid<f64> {
    /// Coordinates of the highest-valued cell; first match in row-major order
    /// on ties. `None` only for an empty grid.
    pub fn peak(&self) -> Option<(usize, usize)> {
        self.peak_where(|_, _| true)
    }

    /// Highest-valued cell among those for which `keep` returns true.
    pub fn peak_where<F>(&self, keep: F) -> Option<(usize, usize)>
    where
        F: Fn(usize, usize) -> bool,
    {
        let mut best: Option<((usize, usize), f64)> = None;
        for ((r, c), &v) in self.iter() {
            if !keep(r, c) {
                continue;
            }
            match best {
                Some((_, bv)) if bv >= v => {}
                _ => best = Some(((r, c), v)),
            }
        }
        best.map(|(cell, _)| cell)
    }
}

impl fmt::Display for Grid<CellStatus> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.dims.rows {
            for c in 0..self.dims.cols {
                let ch = match self[(r, c)] {
                    CellStatus::Unknown => '.',
                    CellStatus::Miss => 'o',
                    CellStatus::Hit => 'X',
                };
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
