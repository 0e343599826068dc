//! Board state: the canonical status grid, fleet bookkeeping and the
//! shot-result state machine.

use crate::common::{CellStatus, Mode, SonarError, Strategy};
use crate::fleet::Fleet;
use crate::geometry::{hit_run, neighbors, Orientation};
use crate::grid::{Dimensions, Grid, ProbabilityMatrix};
use crate::sampler::{sample_occupancy, Overrides};
use crate::scorer::score;

/// Outcome of recording a shot result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotOutcome {
    /// Targeting mode after the update.
    pub mode: Mode,
    /// A completed-looking hit run awaiting caller confirmation, if any.
    pub sink_candidate: Option<SinkCandidate>,
}

/// A hit run whose length matches an unsunk ship. Confirm with
/// [`Board::confirm_sink`] or ignore it to decline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkCandidate {
    length: usize,
    cell: (usize, usize),
}

impl SinkCandidate {
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A confirmed sunk ship with its resolved cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunkShip {
    pub length: usize,
    pub cells: Vec<(usize, usize)>,
}

/// The single canonical game model: dimensions, fleet, per-cell status and
/// the current targeting phase. All mutation goes through the shot-recording
/// operations; heatmap queries are pure.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    dims: Dimensions,
    fleet: Fleet,
    status: Grid<CellStatus>,
    mode: Mode,
    last_hit: Option<(usize, usize)>,
}

impl Board {
    /// Build a board. Fails when a dimension is zero or a ship would not fit
    /// along the shorter side.
    pub fn build(rows: usize, cols: usize, lengths: &[usize]) -> Result<Board, SonarError> {
        if rows == 0 || cols == 0 {
            return Err(SonarError::InvalidDimensions);
        }
        let limit = rows.min(cols);
        if lengths.iter().any(|&len| len == 0 || len > limit) {
            return Err(SonarError::InvalidDimensions);
        }
        let dims = Dimensions::new(rows, cols);
        Ok(Board {
            dims,
            fleet: Fleet::new(lengths),
            status: Grid::new(dims, CellStatus::Unknown),
            mode: Mode::Search,
            last_hit: None,
        })
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn status(&self) -> &Grid<CellStatus> {
        &self.status
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn last_hit(&self) -> Option<(usize, usize)> {
        self.last_hit
    }

    /// Add a ship to the fleet, validated like [`Board::build`].
    pub fn add_ship(&mut self, length: usize) -> Result<(), SonarError> {
        if length == 0 || length > self.dims.rows.min(self.dims.cols) {
            return Err(SonarError::InvalidDimensions);
        }
        self.fleet.add(length);
        Ok(())
    }

    /// Remove a ship by fleet index. Already-recorded cell statuses stand;
    /// the next heatmap query simply sees the smaller fleet.
    pub fn remove_ship(&mut self, index: usize) -> Result<(), SonarError> {
        self.fleet.remove(index)?;
        Ok(())
    }

    /// Record a miss. Outside of search mode this switches to hunt, anchored
    /// at the last hit, not at `(row, col)`.
    pub fn record_miss(&mut self, row: usize, col: usize) -> Result<ShotOutcome, SonarError> {
        self.check_unrevealed(row, col)?;
        self.status[(row, col)] = CellStatus::Miss;
        if self.mode != Mode::Search {
            self.mode = Mode::Hunt;
        }
        Ok(ShotOutcome {
            mode: self.mode,
            sink_candidate: None,
        })
    }

    /// Record a hit and switch to target mode. When the contiguous hit run
    /// through the cell matches an unsunk ship length, the outcome carries a
    /// sink candidate for the caller to confirm or decline.
    pub fn record_hit(&mut self, row: usize, col: usize) -> Result<ShotOutcome, SonarError> {
        self.check_unrevealed(row, col)?;
        self.status[(row, col)] = CellStatus::Hit;
        self.last_hit = Some((row, col));
        self.mode = Mode::Target;

        let horizontal = hit_run(&self.status, (row, col), Orientation::Horizontal).len();
        let vertical = hit_run(&self.status, (row, col), Orientation::Vertical).len();
        let run = horizontal.max(vertical);
        let sink_candidate = self
            .fleet
            .first_unsunk_of_length(run)
            .map(|_| SinkCandidate {
                length: run,
                cell: (row, col),
            });
        Ok(ShotOutcome {
            mode: self.mode,
            sink_candidate,
        })
    }

    /// Confirm a sink candidate: resolve the ship's cells, mark the ship
    /// sunk, return to search mode and mark the ship's whole perimeter as
    /// misses (ships never touch).
    ///
    /// Resolution tries the vertical run through the candidate cell first and
    /// falls back to horizontal. A candidate whose runs no longer match its
    /// length (or whose ship is gone from the fleet) is an internal
    /// inconsistency; the board is left untouched in that case.
    pub fn confirm_sink(&mut self, candidate: SinkCandidate) -> Result<SunkShip, SonarError> {
        let index = self
            .fleet
            .first_unsunk_of_length(candidate.length)
            .ok_or(SonarError::InternalInconsistency)?;
        let mut cells = hit_run(&self.status, candidate.cell, Orientation::Vertical);
        if cells.len() != candidate.length {
            cells = hit_run(&self.status, candidate.cell, Orientation::Horizontal);
        }
        if cells.len() != candidate.length {
            return Err(SonarError::InternalInconsistency);
        }

        self.fleet.mark_sunk(index)?;
        self.mode = Mode::Search;
        for &(r, c) in &cells {
            for cell in neighbors(self.dims, r, c) {
                if self.status[cell] == CellStatus::Unknown {
                    self.status[cell] = CellStatus::Miss;
                }
            }
        }
        log::debug!(
            "sunk ship of length {} at {:?}; grid now:\n{}",
            candidate.length,
            cells,
            self.status
        );
        Ok(SunkShip {
            length: candidate.length,
            cells,
        })
    }

    /// Probability heatmap for an explicit mode and anchor.
    ///
    /// The rule-based path can fail per its contract; the Monte-Carlo path
    /// ignores mode and anchor entirely and derives its evidence from the
    /// status grid.
    pub fn heatmap(
        &self,
        strategy: Strategy,
        mode: Mode,
        row: usize,
        col: usize,
    ) -> Result<ProbabilityMatrix, SonarError> {
        let lengths = self.fleet.unsunk_lengths();
        match strategy {
            Strategy::RuleBased => score(self.dims, &lengths, &self.status, mode, row, col),
            Strategy::MonteCarlo => {
                let overrides = Overrides::from_status(&self.status);
                Ok(sample_occupancy(self.dims, &lengths, &overrides))
            }
        }
    }

    /// Heatmap for the board's own mode, anchored at the last hit.
    pub fn current_heatmap(&self, strategy: Strategy) -> Result<ProbabilityMatrix, SonarError> {
        let (row, col) = self.last_hit.unwrap_or((0, 0));
        self.heatmap(strategy, self.mode, row, col)
    }

    fn check_unrevealed(&self, row: usize, col: usize) -> Result<(), SonarError> {
        if !self.dims.contains(row, col) {
            return Err(SonarError::OutOfRange);
        }
        if self.status[(row, col)] != CellStatus::Unknown {
            return Err(SonarError::AlreadyRevealed);
        }
        Ok(())
    }
}
