//! Hidden-fleet simulation used by autoplay and end-to-end tests.

use rand::Rng;

use crate::geometry::{enumerate_placements, placement_fits, Orientation, Placement};
use crate::grid::{Dimensions, Grid};

const PLACEMENT_ATTEMPTS: usize = 1000;

/// A concrete secret arrangement of a fleet, for playing the engine against
/// a known ground truth.
#[derive(Debug, Clone)]
pub struct HiddenFleet {
    ships: Vec<Vec<(usize, usize)>>,
}

impl HiddenFleet {
    /// Place every ship at random under the no-touch rule. Ships are placed
    /// longest first; a dead end restarts the whole arrangement. Returns
    /// `None` when the fleet cannot be arranged within the attempt budget.
    pub fn place_random<R: Rng + ?Sized>(
        dims: Dimensions,
        lengths: &[usize],
        rng: &mut R,
    ) -> Option<HiddenFleet> {
        let mut sorted: Vec<usize> = lengths.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        'attempt: for _ in 0..PLACEMENT_ATTEMPTS {
            let mut occupied = Grid::new(dims, false);
            let mut ships = Vec::with_capacity(sorted.len());
            for &len in &sorted {
                let mut candidates =
                    enumerate_placements(dims, len, Orientation::Horizontal, |_, _| false);
                candidates.extend(enumerate_placements(
                    dims,
                    len,
                    Orientation::Vertical,
                    |_, _| false,
                ));
                candidates.retain(|p| placement_fits(&occupied, p));
                if candidates.is_empty() {
                    continue 'attempt;
                }
                let p: Placement = candidates[rng.random_range(0..candidates.len())];
                for cell in p.cells() {
                    occupied[cell] = true;
                }
                ships.push(p.cells().collect());
            }
            return Some(HiddenFleet { ships });
        }
        None
    }

    /// Cell lists of the placed ships, longest first.
    pub fn ships(&self) -> &[Vec<(usize, usize)>] {
        &self.ships
    }

    /// The cells of the ship covering `(row, col)`, if any.
    pub fn ship_cells_at(&self, row: usize, col: usize) -> Option<&[(usize, usize)]> {
        self.ships
            .iter()
            .find(|cells| cells.contains(&(row, col)))
            .map(|cells| cells.as_slice())
    }

    pub fn is_ship_at(&self, row: usize, col: usize) -> bool {
        self.ship_cells_at(row, col).is_some()
    }

    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(|cells| cells.len()).sum()
    }
}
