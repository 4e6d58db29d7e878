//! Common types: sides, phases, shot results and errors.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::board::Coord;
use crate::ship::ShipId;

/// One of the two combatants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    /// Short prefix used in ship labels.
    pub fn prefix(self) -> &'static str {
        match self {
            Side::Human => "P",
            Side::Computer => "AI",
        }
    }
}

/// Session-wide stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placing,
    Fighting,
    Ended,
}

/// Whether a shot struck a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    Hit,
    Miss,
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotResult {
    pub outcome: ShotOutcome,
    /// Set when this shot sank a ship.
    pub sunk: Option<ShipId>,
}

impl ShotResult {
    pub const MISS: ShotResult = ShotResult {
        outcome: ShotOutcome::Miss,
        sunk: None,
    };

    pub fn hit(sunk: Option<ShipId>) -> Self {
        Self {
            outcome: ShotOutcome::Hit,
            sunk,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.outcome == ShotOutcome::Hit
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Ship would extend past the board edge.
    ShipOutOfBounds { origin: Coord },
    /// Ship would cover a cell already taken by another ship.
    ShipOverlaps { at: Coord },
    /// Ship already has a position.
    ShipAlreadyPlaced(ShipId),
    /// No ship with this id in the fleet.
    UnknownShip(ShipId),
    /// Automatic placement ran out of attempts; listed ships stay unplaced.
    PlacementExhausted { unplaced: Vec<ShipId> },
    /// Target cell was already shot at.
    AlreadyShot(Coord),
    /// Target cell is off the board.
    ShotOutOfBounds(Coord),
    /// Action not allowed in the current phase.
    WrongPhase { expected: Phase, actual: Phase },
    /// Action attempted by the side not holding the turn.
    OutOfTurn { turn: Side },
    /// Persisted state could not be parsed or failed validation.
    MalformedState(String),
}

impl GameError {
    /// Placement rejected before any mutation.
    pub fn is_invalid_placement(&self) -> bool {
        matches!(
            self,
            GameError::ShipOutOfBounds { .. }
                | GameError::ShipOverlaps { .. }
                | GameError::ShipAlreadyPlaced(_)
                | GameError::UnknownShip(_)
        )
    }

    /// Shot rejected as a no-op.
    pub fn is_illegal_shot(&self) -> bool {
        matches!(
            self,
            GameError::AlreadyShot(_)
                | GameError::ShotOutOfBounds(_)
                | GameError::WrongPhase { .. }
                | GameError::OutOfTurn { .. }
        )
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ShipOutOfBounds { origin } => {
                write!(f, "Ship placed at {} does not fit on the board", origin)
            }
            GameError::ShipOverlaps { at } => {
                write!(f, "Ship placement overlaps another ship at {}", at)
            }
            GameError::ShipAlreadyPlaced(id) => write!(f, "Ship #{} is already placed", id.0),
            GameError::UnknownShip(id) => write!(f, "No ship #{} in the fleet", id.0),
            GameError::PlacementExhausted { unplaced } => {
                write!(f, "Unable to place {} ship(s)", unplaced.len())
            }
            GameError::AlreadyShot(at) => write!(f, "{} was already targeted", at),
            GameError::ShotOutOfBounds(at) => {
                write!(f, "Row {}, column {} is off the board", at.row, at.col)
            }
            GameError::WrongPhase { expected, actual } => {
                write!(f, "Expected phase {:?}, game is in {:?}", expected, actual)
            }
            GameError::OutOfTurn { turn } => write!(f, "It is {:?}'s turn", turn),
            GameError::MalformedState(reason) => write!(f, "Malformed saved state: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
