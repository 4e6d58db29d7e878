//! Per-side state: board, fleet and counters.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::board::{Board, Coord};
use crate::common::GameError;
use crate::placement;
use crate::ship::{Orientation, Ship, ShipId};

/// Cumulative counters for one side. `hits` and `misses` count shots this
/// side fired; `ships_sunk` counts this side's own ships that went down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    pub hits: u32,
    pub misses: u32,
    pub ships_sunk: u32,
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits: {}, misses: {}, ships lost: {}",
            self.hits, self.misses, self.ships_sunk
        )
    }
}

/// Everything one side owns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub(crate) board: Board,
    pub(crate) fleet: Vec<Ship>,
    pub(crate) tally: Tally,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    /// Empty board, standard fleet unplaced, counters at zero.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            fleet: Ship::standard_fleet(),
            tally: Tally::default(),
        }
    }

    /// Empty board with a custom fleet of unplaced, afloat ships.
    ///
    /// Ships are addressed by position, so each id must equal its index in
    /// `fleet`; a mismatch is reported as [`GameError::UnknownShip`].
    pub fn with_fleet(fleet: Vec<Ship>) -> Result<Self, GameError> {
        if let Some((_, ship)) = fleet
            .iter()
            .enumerate()
            .find(|(i, ship)| ship.id().index() != *i || ship.is_placed() || ship.is_sunk())
        {
            return Err(GameError::UnknownShip(ship.id()));
        }
        Ok(Self {
            board: Board::new(),
            fleet,
            tally: Tally::default(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.fleet.get(id.index())
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Every ship has a position.
    pub fn is_ready(&self) -> bool {
        placement::is_fleet_ready(&self.fleet)
    }

    /// Every ship is sunk.
    pub fn is_defeated(&self) -> bool {
        self.tally.ships_sunk as usize == self.fleet.len()
    }

    /// Place ship `id` of this fleet. See [`placement::place_ship`].
    pub fn place_ship(
        &mut self,
        id: ShipId,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let ship = self
            .fleet
            .get_mut(id.index())
            .ok_or(GameError::UnknownShip(id))?;
        placement::place_ship(&mut self.board, ship, origin, orientation)
    }

    /// Place all unplaced ships at random. See [`placement::auto_place_fleet`].
    pub fn auto_place<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        placement::auto_place_fleet(rng, &mut self.board, &mut self.fleet)
    }
}
