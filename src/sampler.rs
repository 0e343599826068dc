//! Monte-Carlo style occupancy estimator: a capped depth-first search over
//! whole-fleet arrangements.
//!
//! The search is deterministic. Candidates are tried in enumeration order
//! (reordered toward recorded hits when there are any), ships most
//! constrained first, and the per-query budget keeps whatever that order
//! reaches before the cap. The result is deliberately biased toward the
//! early candidate space, not a uniform sample.

use crate::common::CellStatus;
use crate::config::{
    BASE_SAMPLE_BUDGET, MAX_SAMPLED_CONFIGS, SAMPLER_ALPHA, SAMPLE_BUDGET_PER_CELL,
};
use crate::geometry::{enumerate_placements, placement_fits, Orientation, Placement};
use crate::grid::{Dimensions, Grid, ProbabilityMatrix};
use crate::normalize::normalize;

/// Sparse evidence the sampler honors: cells no arrangement may cover and
/// cells every accepted arrangement must cover.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub excluded: Vec<(usize, usize)>,
    pub must_include: Vec<(usize, usize)>,
}

impl Overrides {
    /// Derive the override sets from a status grid: misses are excluded,
    /// hits are mandatory.
    pub fn from_status(status: &Grid<CellStatus>) -> Overrides {
        let mut overrides = Overrides::default();
        for ((r, c), &s) in status.iter() {
            match s {
                CellStatus::Miss => overrides.excluded.push((r, c)),
                CellStatus::Hit => overrides.must_include.push((r, c)),
                CellStatus::Unknown => {}
            }
        }
        overrides
    }
}

/// Accepted-configuration budget for a grid of the given size.
pub fn sample_cap(dims: Dimensions) -> usize {
    MAX_SAMPLED_CONFIGS.min(BASE_SAMPLE_BUDGET + dims.cell_count() * SAMPLE_BUDGET_PER_CELL)
}

/// Estimate per-cell ship occupancy by enumerating fleet arrangements under
/// the no-touch rule (ships never adjacent, not even diagonally) and the
/// given overrides, then normalizing accepted-arrangement counts.
///
/// Degenerate inputs (empty fleet, unsatisfiable overrides) accept zero or
/// one arrangement and normalize to the uniform matrix.
pub fn sample_occupancy(
    dims: Dimensions,
    lengths: &[usize],
    overrides: &Overrides,
) -> ProbabilityMatrix {
    let mut excluded = Grid::new(dims, false);
    for &(r, c) in &overrides.excluded {
        if dims.contains(r, c) {
            excluded[(r, c)] = true;
        }
    }

    let mut candidates: Vec<Vec<Placement>> = lengths
        .iter()
        .map(|&len| {
            let mut list =
                enumerate_placements(dims, len, Orientation::Horizontal, |r, c| excluded[(r, c)]);
            list.extend(enumerate_placements(dims, len, Orientation::Vertical, |r, c| {
                excluded[(r, c)]
            }));
            list
        })
        .collect();

    // Most-constrained ship first; stable, so equal counts keep fleet order.
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by_key(|&i| candidates[i].len());

    // With hits on record, steer the budget toward arrangements near them.
    if !overrides.must_include.is_empty() {
        for list in candidates.iter_mut() {
            list.sort_by_key(|p| distance_to_evidence(p, &overrides.must_include));
        }
    }

    let mut search = Search {
        occupied: Grid::new(dims, false),
        counts: Grid::new(dims, 0u64),
        accepted: 0,
        cap: sample_cap(dims),
    };
    search.place(&candidates, &order, 0, &overrides.must_include);
    log::debug!(
        "sampler accepted {} arrangements (cap {})",
        search.accepted,
        search.cap
    );
    normalize(&search.counts, SAMPLER_ALPHA)
}

/// Smallest Manhattan distance from any covered cell to any evidence cell.
fn distance_to_evidence(p: &Placement, evidence: &[(usize, usize)]) -> usize {
    p.cells()
        .flat_map(|(r, c)| {
            evidence
                .iter()
                .map(move |&(er, ec)| r.abs_diff(er) + c.abs_diff(ec))
        })
        .min()
        .unwrap_or(usize::MAX)
}

struct Search {
    occupied: Grid<bool>,
    counts: Grid<u64>,
    accepted: usize,
    cap: usize,
}

impl Search {
    fn place(
        &mut self,
        candidates: &[Vec<Placement>],
        order: &[usize],
        depth: usize,
        must_include: &[(usize, usize)],
    ) {
        if self.accepted >= self.cap {
            return;
        }
        if depth == order.len() {
            let covered = must_include
                .iter()
                .all(|&(r, c)| self.occupied.get(r, c).copied().unwrap_or(false));
            if covered {
                for ((r, c), &occ) in self.occupied.iter() {
                    if occ {
                        self.counts[(r, c)] += 1;
                    }
                }
                self.accepted += 1;
            }
            return;
        }
        for p in &candidates[order[depth]] {
            if !placement_fits(&self.occupied, p) {
                continue;
            }
            for cell in p.cells() {
                self.occupied[cell] = true;
            }
            self.place(candidates, order, depth + 1, must_include);
            for cell in p.cells() {
                self.occupied[cell] = false;
            }
            if self.accepted >= self.cap {
                break;
            }
        }
    }
}
