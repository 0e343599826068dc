//! Rule-based heuristic estimator with search, target and hunt modes.

use crate::common::{CellStatus, Mode, SonarError};
use crate::config::SCORER_ALPHA;
use crate::geometry::Direction;
use crate::grid::{Dimensions, Grid, ProbabilityMatrix};
use crate::normalize::normalize;

/// Score every cell for the given targeting mode. `(row, col)` is the anchor
/// and only meaningful in `Target`/`Hunt`.
///
/// Coordinates are validated against the dimension values themselves, not the
/// last index: a coordinate equal to the dimension is accepted and simply
/// anchors nothing.
pub fn score(
    dims: Dimensions,
    lengths: &[usize],
    status: &Grid<CellStatus>,
    mode: Mode,
    row: usize,
    col: usize,
) -> Result<ProbabilityMatrix, SonarError> {
    if row > dims.rows || col > dims.cols {
        return Err(SonarError::OutOfRange);
    }
    let mut counts = Grid::new(dims, 0u64);
    match mode {
        Mode::Search => search_pass(dims, lengths, status, &mut counts),
        Mode::Target => anchor_pass(dims, lengths, status, (row, col), &mut counts),
        Mode::Hunt => {
            let anchor = hunt_anchor(dims, status, (row, col))?;
            anchor_pass(dims, lengths, status, anchor, &mut counts);
        }
    }
    // Resolved cells never need further targeting.
    for ((r, c), &s) in status.iter() {
        if s == CellStatus::Hit {
            counts[(r, c)] = 0;
        }
    }
    Ok(normalize(&counts, SCORER_ALPHA))
}

/// Count every miss-free placement of every ship length, then discount one
/// parity class of the checkerboard after each length. The discount floors
/// (`* 4 / 5`) and compounds across lengths in fleet order.
fn search_pass(
    dims: Dimensions,
    lengths: &[usize],
    status: &Grid<CellStatus>,
    counts: &mut Grid<u64>,
) {
    for &len in lengths {
        if len > 0 && len <= dims.cols {
            for r in 0..dims.rows {
                for c in 0..=dims.cols - len {
                    if (c..c + len).all(|cc| status[(r, cc)] != CellStatus::Miss) {
                        for cc in c..c + len {
                            counts[(r, cc)] += 1;
                        }
                    }
                }
            }
        }
        if len > 0 && len <= dims.rows {
            for r in 0..=dims.rows - len {
                for c in 0..dims.cols {
                    if (r..r + len).all(|rr| status[(rr, c)] != CellStatus::Miss) {
                        for rr in r..r + len {
                            counts[(rr, c)] += 1;
                        }
                    }
                }
            }
        }
        for r in 0..dims.rows {
            let mut parity = r;
            for c in 0..dims.cols {
                if parity % 2 == 0 {
                    counts[(r, c)] = counts[(r, c)] * 4 / 5;
                }
                parity += 1;
            }
        }
    }
}

/// Weight every miss-free placement that covers the anchor. The weight starts
/// at 1 and doubles per already-hit cell in the placement, so extending a
/// confirmed chain dominates.
fn anchor_pass(
    dims: Dimensions,
    lengths: &[usize],
    status: &Grid<CellStatus>,
    anchor: (usize, usize),
    counts: &mut Grid<u64>,
) {
    for &len in lengths {
        if len > 0 && len <= dims.cols {
            for r in 0..dims.rows {
                for c in 0..=dims.cols - len {
                    score_span(status, anchor, counts, (c..c + len).map(|cc| (r, cc)));
                }
            }
        }
        if len > 0 && len <= dims.rows {
            for r in 0..=dims.rows - len {
                for c in 0..dims.cols {
                    score_span(status, anchor, counts, (r..r + len).map(|rr| (rr, c)));
                }
            }
        }
    }
}

fn score_span<I>(
    status: &Grid<CellStatus>,
    anchor: (usize, usize),
    counts: &mut Grid<u64>,
    span: I,
) where
    I: Iterator<Item = (usize, usize)> + Clone,
{
    let mut covers_anchor = false;
    let mut weight: u64 = 1;
    for cell in span.clone() {
        match status[cell] {
            CellStatus::Miss => return,
            CellStatus::Hit => weight += weight,
            CellStatus::Unknown => {}
        }
        if cell == anchor {
            covers_anchor = true;
        }
    }
    if !covers_anchor {
        return;
    }
    for cell in span {
        counts[cell] += weight;
    }
}

/// Resolve the effective hunt anchor. When the query anchor is itself a hit,
/// walk the contiguous hit run toward the first adjacent hit (priority up,
/// down, left, right) and land one past its far end; a miss there redirects
/// one past the opposite end of the run, and if both ends are missed the
/// primary landing stands.
fn hunt_anchor(
    dims: Dimensions,
    status: &Grid<CellStatus>,
    anchor: (usize, usize),
) -> Result<(usize, usize), SonarError> {
    if status.get(anchor.0, anchor.1) != Some(&CellStatus::Hit) {
        return Ok(anchor);
    }
    let mut run_dir = None;
    for dir in Direction::ALL {
        if let Some(next) = dir.step(dims, anchor) {
            if status[next] == CellStatus::Hit {
                run_dir = Some(dir);
                break;
            }
        }
    }
    let run_dir = match run_dir {
        Some(d) => d,
        None => return Ok(anchor),
    };
    let primary = match step_past_run(dims, status, anchor, run_dir) {
        Some(cell) => cell,
        None => return Err(SonarError::NoValidPlacement),
    };
    if status[primary] != CellStatus::Miss {
        return Ok(primary);
    }
    if let Some(reverse) = step_past_run(dims, status, anchor, run_dir.opposite()) {
        if status[reverse] != CellStatus::Miss {
            return Ok(reverse);
        }
    }
    Ok(primary)
}

/// First cell past the contiguous hit run extending from `from` toward `dir`;
/// `None` when the run reaches the edge of the grid.
fn step_past_run(
    dims: Dimensions,
    status: &Grid<CellStatus>,
    from: (usize, usize),
    dir: Direction,
) -> Option<(usize, usize)> {
    let mut cur = from;
    while let Some(next) = dir.step(dims, cur) {
        if status[next] != CellStatus::Hit {
            return Some(next);
        }
        cur = next;
    }
    None
}
