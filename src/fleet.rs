//! Fleet bookkeeping: ship lengths, sunk flags and edit operations.

use crate::common::SonarError;

/// One ship in the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipInstance {
    length: usize,
    sunk: bool,
}

impl ShipInstance {
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }
}

/// The fleet under search, kept in ascending length order. The order matters:
/// the rule-based scorer's per-length discount compounds in fleet order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fleet {
    ships: Vec<ShipInstance>,
}

impl Fleet {
    pub fn new(lengths: &[usize]) -> Fleet {
        let mut fleet = Fleet { ships: Vec::new() };
        for &length in lengths {
            fleet.add(length);
        }
        fleet
    }

    pub fn ships(&self) -> &[ShipInstance] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Insert a ship at its ascending-order position.
    pub fn add(&mut self, length: usize) {
        let at = self
            .ships
            .iter()
            .position(|s| s.length > length)
            .unwrap_or(self.ships.len());
        self.ships.insert(at, ShipInstance { length, sunk: false });
    }

    pub fn remove(&mut self, index: usize) -> Result<ShipInstance, SonarError> {
        if index >= self.ships.len() {
            return Err(SonarError::InvalidIndex);
        }
        Ok(self.ships.remove(index))
    }

    /// Lengths of ships not yet sunk, in fleet order.
    pub fn unsunk_lengths(&self) -> Vec<usize> {
        self.ships
            .iter()
            .filter(|s| !s.sunk)
            .map(|s| s.length)
            .collect()
    }

    /// Index of the first unsunk ship of exactly `length`.
    pub fn first_unsunk_of_length(&self, length: usize) -> Option<usize> {
        self.ships
            .iter()
            .position(|s| !s.sunk && s.length == length)
    }

    pub fn mark_sunk(&mut self, index: usize) -> Result<(), SonarError> {
        match self.ships.get_mut(index) {
            Some(ship) => {
                ship.sunk = true;
                Ok(())
            }
            None => Err(SonarError::InvalidIndex),
        }
    }

    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.sunk)
    }
}
