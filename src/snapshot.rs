//! Versioned, validated persistence format for a [`Session`].
//!
//! The snapshot holds both sides (board, fleet, counters), the turn and the
//! phase. The hunt queue is not persisted; a restored computer starts with an
//! empty one.

#![cfg(feature = "std")]

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::Coord;
use crate::common::{GameError, Phase, Side};
use crate::config::{FLEET, SNAPSHOT_VERSION};
use crate::game::Session;
use crate::player::PlayerState;

/// Serializable copy of a session's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub human: PlayerState,
    pub computer: PlayerState,
    pub turn: Side,
    pub phase: Phase,
}

fn malformed(reason: impl Into<String>) -> GameError {
    GameError::MalformedState(reason.into())
}

impl Snapshot {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string(self).map_err(|e| malformed(e.to_string()))
    }

    /// Decode and validate JSON.
    pub fn from_json(input: &str) -> Result<Self, GameError> {
        let snapshot: Snapshot =
            serde_json::from_str(input).map_err(|e| malformed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        bincode::serialize(self).map_err(|e| malformed(e.to_string()))
    }

    /// Decode and validate bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        let snapshot: Snapshot =
            bincode::deserialize(bytes).map_err(|e| malformed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check that the snapshot describes a state the engine could have
    /// reached.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(malformed(format!(
                "unsupported version {} (expected {})",
                self.version, SNAPSHOT_VERSION
            )));
        }
        validate_side(&self.human, "human")?;
        validate_side(&self.computer, "computer")?;

        // Each side's shot counters must match the marks on the other board.
        for (shooter, target, name) in [
            (&self.human, &self.computer, "human"),
            (&self.computer, &self.human, "computer"),
        ] {
            let tally = shooter.tally();
            if tally.hits as usize != target.board().hit_count()
                || tally.misses as usize != target.board().miss_count()
            {
                return Err(malformed(format!("{name} shot counters disagree with board")));
            }
        }

        let human_lost = self.human.is_defeated();
        let computer_lost = self.computer.is_defeated();
        match self.phase {
            Phase::Placing => {
                let shots = |p: &PlayerState| p.tally().hits + p.tally().misses;
                if self.turn != Side::Human || shots(&self.human) + shots(&self.computer) > 0 {
                    return Err(malformed("shots recorded during placement"));
                }
                if self.human.is_ready() {
                    return Err(malformed("placing with the human fleet already complete"));
                }
                if !self.computer.is_ready() {
                    return Err(malformed("placing without a computer fleet"));
                }
            }
            Phase::Fighting => {
                if !self.human.is_ready() || !self.computer.is_ready() {
                    return Err(malformed("fighting with an incomplete fleet"));
                }
                if human_lost || computer_lost {
                    return Err(malformed("fighting after a fleet was destroyed"));
                }
            }
            Phase::Ended => {
                if human_lost == computer_lost {
                    return Err(malformed("ended without exactly one destroyed fleet"));
                }
            }
        }
        Ok(())
    }
}

fn validate_side(state: &PlayerState, name: &str) -> Result<(), GameError> {
    let fleet = state.fleet();
    if fleet.len() != FLEET.len() {
        return Err(malformed(format!("{name} fleet has {} ships", fleet.len())));
    }
    let board = state.board();
    let mut occupied = 0usize;
    let mut sunk = 0u32;
    for (i, (ship, class)) in fleet.iter().zip(FLEET.iter()).enumerate() {
        if ship.id().index() != i || ship.size() != class.size() {
            return Err(malformed(format!("{name} ship #{i} does not match the fleet")));
        }
        if ship.is_placed() {
            let coords = ship.coords();
            if coords.len() != ship.size() {
                return Err(malformed(format!("{name} ship #{i} has wrong length")));
            }
            if !is_straight_line(coords) {
                return Err(malformed(format!("{name} ship #{i} is not a straight line")));
            }
            for &at in coords {
                if board.occupant(at) != Some(ship.id()) {
                    return Err(malformed(format!("{name} ship #{i} not on board at {at}")));
                }
            }
            occupied += coords.len();
        }
        let all_hit = ship.is_placed()
            && ship
                .coords()
                .iter()
                .all(|&c| board.cell(c).is_some_and(|cell| cell.hit));
        if ship.is_sunk() != all_hit {
            return Err(malformed(format!("{name} ship #{i} has inconsistent sunk flag")));
        }
        if ship.is_sunk() {
            sunk += 1;
        }
    }
    if sunk != state.tally().ships_sunk {
        return Err(malformed(format!("{name} sunk counter disagrees with fleet")));
    }
    for (at, cell) in board.iter() {
        if cell.hit && cell.missed {
            return Err(malformed(format!("{name} cell {at} both hit and missed")));
        }
        if cell.hit && cell.occupant.is_none() {
            return Err(malformed(format!("{name} cell {at} hit without a ship")));
        }
        if cell.missed && cell.occupant.is_some() {
            return Err(malformed(format!("{name} cell {at} missed on a ship")));
        }
    }
    let on_board = board.iter().filter(|(_, c)| c.occupant.is_some()).count();
    if on_board != occupied {
        return Err(malformed(format!("{name} board has stray ship cells")));
    }
    Ok(())
}

fn is_straight_line(coords: &[Coord]) -> bool {
    coords.windows(2).all(|w| {
        let (a, b) = (w[0], w[1]);
        (a.row == b.row && b.col == a.col + 1) || (a.col == b.col && b.row == a.row + 1)
    }) && (coords.iter().all(|c| c.row == coords[0].row)
        || coords.iter().all(|c| c.col == coords[0].col))
}

impl Session {
    /// Read-only copy of the state for rendering and saving.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            human: self.human.clone(),
            computer: self.computer.clone(),
            turn: self.turn,
            phase: self.phase,
        }
    }

    /// Rebuild a session from a snapshot, verbatim. The snapshot is validated
    /// first.
    pub fn restore(snapshot: Snapshot) -> Result<Self, GameError> {
        snapshot.validate()?;
        Ok(Session::from_parts(
            snapshot.human,
            snapshot.computer,
            snapshot.turn,
            snapshot.phase,
        ))
    }

    /// Resume from saved JSON, or start a new game when there is nothing
    /// usable to resume.
    pub fn load_or_new<R: Rng>(saved: Option<&str>, rng: &mut R) -> Result<Self, GameError> {
        if let Some(json) = saved {
            match Snapshot::from_json(json).and_then(Session::restore) {
                Ok(session) => {
                    log::info!("resumed saved game in phase {:?}", session.phase());
                    return Ok(session);
                }
                Err(e) => log::warn!("discarding saved game: {}", e),
            }
        }
        Session::new_game(rng)
    }
}
