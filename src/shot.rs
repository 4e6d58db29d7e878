//! Shot resolution against one side's board and fleet.

use crate::board::Coord;
use crate::common::{GameError, ShotResult};
use crate::player::{PlayerState, Tally};

/// Fire at `(row, col)` on `target`, crediting the hit or miss to `shooter`.
///
/// Cells already shot at and off-board targets are rejected without touching
/// any state. A hit that completes a ship marks it sunk and bumps the
/// target's `ships_sunk`.
pub fn fire(
    target: &mut PlayerState,
    shooter: &mut Tally,
    row: usize,
    col: usize,
) -> Result<ShotResult, GameError> {
    let at = Coord::new(row, col);
    let cell = *target
        .board
        .cell(at)
        .ok_or(GameError::ShotOutOfBounds(at))?;
    if cell.is_shot() {
        return Err(GameError::AlreadyShot(at));
    }

    let Some(id) = cell.occupant else {
        if let Some(cell) = target.board.cell_mut(at) {
            cell.missed = true;
        }
        shooter.misses += 1;
        return Ok(ShotResult::MISS);
    };
    if target.fleet.get(id.index()).is_none() {
        return Err(GameError::UnknownShip(id));
    }
    if let Some(cell) = target.board.cell_mut(at) {
        cell.hit = true;
    }
    shooter.hits += 1;

    let board = &target.board;
    let ship = &mut target.fleet[id.index()];
    let all_hit = ship
        .coords()
        .iter()
        .all(|&c| board.cell(c).is_some_and(|cell| cell.hit));
    if all_hit && ship.mark_sunk() {
        target.tally.ships_sunk += 1;
        log::debug!("{} sank {}", at, ship.name());
        return Ok(ShotResult::hit(Some(id)));
    }
    Ok(ShotResult::hit(None))
}
