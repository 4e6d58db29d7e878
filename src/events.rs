//! Events emitted by a [`Session`](crate::Session) for presentation layers.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::board::Coord;
use crate::common::{ShotResult, Side};
use crate::player::Tally;

/// Something that happened during play.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// A shot was resolved.
    ShotResolved {
        shooter: Side,
        at: Coord,
        result: ShotResult,
    },
    /// The game ended. Emitted exactly once per game.
    GameOver(GameOver),
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOver {
    pub winner: Side,
    pub human: Tally,
    pub computer: Tally,
}

impl GameOver {
    /// Headline for the end-of-game dialog.
    pub fn title(&self) -> &'static str {
        match self.winner {
            Side::Human => "You win!",
            Side::Computer => "AI wins!",
        }
    }

    /// Human-readable counters of both sides.
    pub fn summary(&self) -> String {
        format!(
            "Your hits: {}, misses: {}, ships lost: {}. AI hits: {}, misses: {}, ships lost: {}.",
            self.human.hits,
            self.human.misses,
            self.human.ships_sunk,
            self.computer.hits,
            self.computer.misses,
            self.computer.ships_sunk,
        )
    }
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title(), self.summary())
    }
}
