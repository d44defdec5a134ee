//! Ship identity and placement geometry.

use core::fmt;
use num_traits::{PrimInt, Unsigned};

use crate::common::GameError;
use crate::mask::GridMask;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Compile-time identity of a fleet member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    name: &'static str,
    length: usize,
    icon: &'static str,
}

impl ShipSpec {
    pub const fn new(name: &'static str, length: usize, icon: &'static str) -> Self {
        Self { name, length, icon }
    }

    /// Display name, also carried in shot results.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells the ship occupies.
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Glyph shown in fleet panels.
    pub const fn icon(&self) -> &'static str {
        self.icon
    }
}

/// A ship placed on an N×N grid, with per-cell hit tracking.
///
/// The occupied coordinates run from the origin along the orientation;
/// `sunk` is derived from the hit count reaching the ship's length.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    spec: ShipSpec,
    orientation: Orientation,
    row: usize,
    col: usize,
    footprint: GridMask<T, N>,
    hits: GridMask<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned,
{
    /// Place a ship at (`row`, `col`) with `orientation`, rejecting
    /// placements that run off the grid.
    pub fn new(
        spec: ShipSpec,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, GameError> {
        let len = spec.length();
        match orientation {
            Orientation::Horizontal if col + len > N => return Err(GameError::ShipOutOfBounds),
            Orientation::Vertical if row + len > N => return Err(GameError::ShipOutOfBounds),
            _ => {}
        }

        let mut footprint = GridMask::new();
        for i in 0..len {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            };
            footprint.set(r, c)?;
        }

        Ok(Ship {
            spec,
            orientation,
            row,
            col,
            footprint,
            hits: GridMask::new(),
        })
    }

    /// Occupied coordinates in order from the origin.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.spec.length()).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Whether the ship occupies (`row`, `col`).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.footprint.get(row, col).unwrap_or(false)
    }

    /// Record a hit at (`row`, `col`); returns whether the cell belongs to
    /// this ship. Re-hitting a cell does not double-count.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        if self.contains(row, col) {
            let _ = self.hits.set(row, col);
            true
        } else {
            false
        }
    }

    /// Hits taken so far, never more than the ship's length.
    pub fn hits_taken(&self) -> usize {
        self.hits.count_ones()
    }

    /// All cells hit.
    pub fn is_sunk(&self) -> bool {
        self.hits_taken() == self.spec.length()
    }

    pub fn spec(&self) -> ShipSpec {
        self.spec
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn footprint(&self) -> GridMask<T, N> {
        self.footprint
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.spec.name(),
            self.row,
            self.col,
            self.orientation,
            self.hits_taken(),
            self.spec.length(),
        )
    }
}
