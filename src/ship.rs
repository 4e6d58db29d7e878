//! Ship classes, identities and per-ship state.

use alloc::vec::Vec;
use core::fmt;

use crate::board::Coord;
use crate::common::Side;
use crate::config::FLEET;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along increasing columns.
    Horizontal,
    /// Extends along increasing rows.
    Vertical,
}

impl Orientation {
    /// Raw `(row, col)` pairs covered by a ship of `len` cells starting at
    /// `origin`. Pairs are not bounds-checked.
    pub fn span(self, origin: Coord, len: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..len).map(move |i| match self {
            Orientation::Horizontal => (origin.row, origin.col + i),
            Orientation::Vertical => (origin.row + i, origin.col),
        })
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    size: usize,
}

impl ShipClass {
    /// Create a new ship class.
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    /// Class name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells a ship of this class covers.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Identity of a ship, unique within its owner's fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct ShipId(pub usize);

impl ShipId {
    /// Position of the ship in its fleet.
    pub fn index(self) -> usize {
        self.0
    }

    /// Label carrying the owner, e.g. `P-0` or `AI-3`.
    pub fn label(self, owner: Side) -> ShipLabel {
        ShipLabel { owner, id: self }
    }
}

/// Display adapter returned by [`ShipId::label`].
#[derive(Debug, Clone, Copy)]
pub struct ShipLabel {
    owner: Side,
    id: ShipId,
}

impl fmt::Display for ShipLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.owner.prefix(), self.id.0)
    }
}

/// A ship of the fleet. Coordinates stay empty until the ship is placed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    id: ShipId,
    size: usize,
    coords: Vec<Coord>,
    sunk: bool,
}

impl Ship {
    /// An unplaced, afloat ship.
    pub fn new(id: ShipId, size: usize) -> Self {
        Self {
            id,
            size,
            coords: Vec::new(),
            sunk: false,
        }
    }

    /// The standard fleet, in [`FLEET`] order.
    pub fn standard_fleet() -> Vec<Ship> {
        FLEET
            .iter()
            .enumerate()
            .map(|(i, class)| Ship::new(ShipId(i), class.size()))
            .collect()
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Class name from the standard fleet, or `"Ship"` for ids outside it.
    pub fn name(&self) -> &'static str {
        FLEET
            .get(self.id.index())
            .map(|class| class.name())
            .unwrap_or("Ship")
    }

    /// Occupied cells in placement order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn is_placed(&self) -> bool {
        !self.coords.is_empty()
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub(crate) fn set_coords(&mut self, coords: Vec<Coord>) {
        self.coords = coords;
    }

    /// Flip to sunk. Returns `false` if the ship was already sunk.
    pub(crate) fn mark_sunk(&mut self) -> bool {
        if self.sunk {
            return false;
        }
        self.sunk = true;
        true
    }
}
