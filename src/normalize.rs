//! Count-to-probability conversion shared by both estimators.

use crate::grid::{Grid, ProbabilityMatrix};

/// Scale a count matrix into `[0, 1]` against its maximum entry.
///
/// `alpha` is added to every count and to the divisor. When every count is
/// zero the divisor clamps to 1, so a positive alpha maps the empty matrix to
/// uniform 1.0 while alpha 0 keeps it all zero.
pub fn normalize(counts: &Grid<u64>, alpha: u64) -> ProbabilityMatrix {
    let max = counts.iter().map(|(_, &v)| v).max().unwrap_or(0);
    let denom = if max > 0 { (max + alpha) as f64 } else { 1.0 };
    let mut probs = Grid::new(counts.dims(), 0.0);
    for ((r, c), &v) in counts.iter() {
        probs[(r, c)] = (v + alpha) as f64 / denom;
    }
    probs
}
