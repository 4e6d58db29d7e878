//! Fleet placement: validation, committing positions, random layouts.
//!
//! Ships may touch each other; only bounds and overlap are checked.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::{in_bounds, Board, Coord};
use crate::common::GameError;
use crate::config::{BOARD_SIZE, PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

fn check_placement(
    board: &Board,
    size: usize,
    origin: Coord,
    orientation: Orientation,
) -> Result<Vec<Coord>, GameError> {
    let mut coords = Vec::with_capacity(size);
    for (row, col) in orientation.span(origin, size) {
        if !in_bounds(row, col) {
            return Err(GameError::ShipOutOfBounds { origin });
        }
        let at = Coord::new(row, col);
        if board.occupant(at).is_some() {
            return Err(GameError::ShipOverlaps { at });
        }
        coords.push(at);
    }
    Ok(coords)
}

/// `true` if a ship of `size` cells fits at `origin` without leaving the
/// board or covering another ship.
pub fn can_place(board: &Board, size: usize, origin: Coord, orientation: Orientation) -> bool {
    check_placement(board, size, origin, orientation).is_ok()
}

/// Commit `ship` at `origin`. All-or-nothing: on error neither the board nor
/// the ship is touched.
pub fn place_ship(
    board: &mut Board,
    ship: &mut Ship,
    origin: Coord,
    orientation: Orientation,
) -> Result<(), GameError> {
    if ship.is_placed() {
        return Err(GameError::ShipAlreadyPlaced(ship.id()));
    }
    let coords = check_placement(board, ship.size(), origin, orientation)?;
    for &at in &coords {
        if let Some(cell) = board.cell_mut(at) {
            cell.occupant = Some(ship.id());
        }
    }
    log::debug!(
        "placed ship #{} at {} {:?}",
        ship.id().index(),
        origin,
        orientation
    );
    ship.set_coords(coords);
    Ok(())
}

/// Place every unplaced ship of `fleet` at random, in order. Each ship gets
/// [`PLACEMENT_ATTEMPTS`] draws of orientation and origin.
///
/// Ships that found no spot are reported in
/// [`GameError::PlacementExhausted`]; the others stay placed.
pub fn auto_place_fleet<R: Rng>(
    rng: &mut R,
    board: &mut Board,
    fleet: &mut [Ship],
) -> Result<(), GameError> {
    let mut unplaced = Vec::new();
    for ship in fleet.iter_mut().filter(|s| !s.is_placed()) {
        let mut placed = false;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let origin = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if can_place(board, ship.size(), origin, orientation) {
                place_ship(board, ship, origin, orientation)?;
                placed = true;
                break;
            }
        }
        if !placed {
            log::warn!("failed to place ship #{}", ship.id().index());
            unplaced.push(ship.id());
        }
    }
    if unplaced.is_empty() {
        Ok(())
    } else {
        Err(GameError::PlacementExhausted { unplaced })
    }
}

/// A fleet is ready once every ship has coordinates.
pub fn is_fleet_ready(fleet: &[Ship]) -> bool {
    fleet.iter().all(Ship::is_placed)
}
