//! One side's grid: fleet placement, occupancy bookkeeping, and shot
//! resolution.

use rand::Rng;

use crate::common::{GameError, ShotResult};
use crate::config::{FLEET, GRID_SIZE, NUM_SHIPS};
use crate::mask::GridMask;
use crate::ship::{Orientation, Ship};

/// Mask type sized for the game grid.
pub type Mask = GridMask<u64, GRID_SIZE>;

/// Random placement gives up after this many draws per ship. With a 7×7
/// grid and an 11-cell fleet the bound is effectively never reached.
const PLACEMENT_DRAWS: usize = 300;

/// Per-ship snapshot for fleet displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipStatus {
    pub name: &'static str,
    pub icon: &'static str,
    pub length: usize,
    pub hits: usize,
    pub sunk: bool,
}

/// Board state: placed ships plus occupancy, hit, and miss masks.
#[derive(Debug, Clone)]
pub struct Board {
    ships: [Option<Ship<u64, GRID_SIZE>>; NUM_SHIPS],
    ship_map: Mask,
    hits: Mask,
    misses: Mask,
}

impl Board {
    /// An empty board, no ships placed.
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: Mask::new(),
            hits: Mask::new(),
            misses: Mask::new(),
        }
    }

    /// Occupancy mask of all placed ships.
    pub fn ship_map(&self) -> Mask {
        self.ship_map
    }

    /// Cells that have been fired at and struck a ship.
    pub fn hits(&self) -> Mask {
        self.hits
    }

    /// Cells that have been fired at and found open water.
    pub fn misses(&self) -> Mask {
        self.misses
    }

    /// True once every fleet member is on the board.
    pub fn fleet_placed(&self) -> bool {
        self.ships.iter().all(|slot| slot.is_some())
    }

    /// True iff all `length` cells starting at (`row`, `col`) in the given
    /// orientation lie on the grid and are currently empty.
    pub fn can_place(&self, row: usize, col: usize, length: usize, orientation: Orientation) -> bool {
        for i in 0..length {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            };
            if r >= GRID_SIZE || c >= GRID_SIZE {
                return false;
            }
            if self.ship_map.get(r, c).unwrap_or(false) {
                return false;
            }
        }
        true
    }

    /// Place the fleet ship at `ship_index` at (`row`, `col`). Rejected
    /// placements leave the board untouched.
    pub fn place(
        &mut self,
        ship_index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if ship_index >= NUM_SHIPS {
            return Err(GameError::InvalidIndex);
        }
        if self.ships[ship_index].is_some() {
            return Err(GameError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(FLEET[ship_index], orientation, row, col)?;
        if !(self.ship_map & ship.footprint()).is_empty() {
            return Err(GameError::ShipOverlaps);
        }
        self.ship_map |= ship.footprint();
        self.ships[ship_index] = Some(ship);
        Ok(())
    }

    /// Draw a random non-overlapping (row, col, orientation) for the ship
    /// at `ship_index`, bounded at `PLACEMENT_DRAWS` attempts.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<(usize, usize, Orientation), GameError> {
        if ship_index >= NUM_SHIPS {
            return Err(GameError::InvalidIndex);
        }
        let len = FLEET[ship_index].length();
        for _ in 0..PLACEMENT_DRAWS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal => (GRID_SIZE - 1, GRID_SIZE - len),
                Orientation::Vertical => (GRID_SIZE - len, GRID_SIZE - 1),
            };
            let row = rng.random_range(0..=max_row);
            let col = rng.random_range(0..=max_col);
            if self.can_place(row, col, len, orientation) {
                return Ok((row, col, orientation));
            }
        }
        Err(GameError::UnableToPlaceShip)
    }

    /// Randomly place every ship not yet on the board, in fleet order.
    pub fn place_fleet_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for i in 0..NUM_SHIPS {
            if self.ships[i].is_some() {
                continue;
            }
            let (row, col, orientation) = self.random_placement(rng, i)?;
            self.place(i, row, col, orientation)?;
        }
        Ok(())
    }

    /// Whether (`row`, `col`) has already been fired at.
    pub fn already_fired(&self, row: usize, col: usize) -> bool {
        (self.hits | self.misses).get(row, col).unwrap_or(false)
    }

    /// Resolve a shot at (`row`, `col`): mark the cell, and on a hit find
    /// the owning un-sunk ship and update its hit count.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotResult, GameError> {
        if self.hits.get(row, col)? || self.misses.get(row, col)? {
            return Err(GameError::AlreadyFired);
        }
        if self.ship_map.get(row, col)? {
            self.hits.set(row, col)?;
            // placements never overlap, so the first un-sunk owner is the
            // only owner
            for slot in self.ships.iter_mut() {
                if let Some(ship) = slot {
                    if ship.is_sunk() || !ship.register_hit(row, col) {
                        continue;
                    }
                    let name = ship.spec().name();
                    return Ok(if ship.is_sunk() {
                        ShotResult::Sunk(name)
                    } else {
                        ShotResult::Hit(name)
                    });
                }
            }
            Err(GameError::UnknownShipHit)
        } else {
            self.misses.set(row, col)?;
            Ok(ShotResult::Miss)
        }
    }

    /// True when no ship cell remains un-hit.
    pub fn all_sunk(&self) -> bool {
        (self.ship_map & !self.hits).is_empty()
    }

    /// Ship cells not yet hit.
    pub fn cells_afloat(&self) -> usize {
        (self.ship_map & !self.hits).count_ones()
    }

    /// Fleet snapshot in placement order; `None` for ships not yet placed.
    pub fn ship_statuses(&self) -> [Option<ShipStatus>; NUM_SHIPS] {
        self.ships.map(|slot| {
            slot.map(|ship| ShipStatus {
                name: ship.spec().name(),
                icon: ship.spec().icon(),
                length: ship.spec().length(),
                hits: ship.hits_taken(),
                sunk: ship.is_sunk(),
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
