//! Common types for the sonar engine: cell state, targeting modes and errors.

/// Revealed state of a single grid cell. Once a cell leaves `Unknown` it
/// never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    /// No shot result recorded yet.
    Unknown,
    /// A recorded miss.
    Miss,
    /// A recorded hit.
    Hit,
}

/// Targeting phase of the caller's current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No open hit to pursue; sweep the whole grid.
    Search,
    /// A fresh hit is being extended.
    Target,
    /// A miss interrupted a hit chain; probe around the last hit.
    Hunt,
}

/// Which estimator backs a heatmap query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Mode-aware counting heuristic.
    RuleBased,
    /// Capped arrangement enumeration.
    MonteCarlo,
}

/// Errors returned by engine operations.
#[derive(Debug, PartialEq, Eq)]
pub enum SonarError {
    /// Board built with a zero dimension or a ship longer than the short side.
    InvalidDimensions,
    /// Query coordinates fall outside the declared dimensions.
    OutOfRange,
    /// Hunt-mode direction following walked off the grid.
    NoValidPlacement,
    /// A shot result was already recorded for this cell.
    AlreadyRevealed,
    /// Fleet index is out of range.
    InvalidIndex,
    /// Sunk-ship resolution found no contiguous run matching the ship length.
    InternalInconsistency,
}

impl core::fmt::Display for SonarError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SonarError::InvalidDimensions => {
                write!(f, "Invalid dimensions or ship length for this board")
            }
            SonarError::OutOfRange => write!(f, "Coordinates are out of range"),
            SonarError::NoValidPlacement => write!(f, "No valid placement found"),
            SonarError::AlreadyRevealed => {
                write!(f, "A result was already recorded for this cell")
            }
            SonarError::InvalidIndex => write!(f, "Fleet index is out of range"),
            SonarError::InternalInconsistency => {
                write!(f, "Internal error: hit count does not match boat length")
            }
        }
    }
}
