//! Hunt-and-target shot selection for the computer side.
//!
//! Greedy: follows up on hits by probing orthogonal neighbours, otherwise
//! fires at random unshot cells. No memory of ship size or orientation.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::{Board, Coord};
use crate::common::ShotResult;
use crate::config::BOARD_SIZE;

/// Hunt heuristic state: a LIFO of cells queued for investigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuntTargeting {
    pending: Vec<Coord>,
}

impl HuntTargeting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queued candidates, oldest first. The last entry is fired at next.
    pub fn pending(&self) -> &[Coord] {
        &self.pending
    }

    /// Forget all queued candidates.
    pub fn reset(&mut self) {
        self.pending.clear();
    }

    /// Pick the next cell to fire at on `board` (the opponent's board).
    ///
    /// Queued candidates that were shot in the meantime are dropped. With an
    /// empty queue a random unshot cell is drawn by rejection sampling.
    /// Returns `None` only when every cell has been shot.
    pub fn select_target<R: Rng>(&mut self, rng: &mut R, board: &Board) -> Option<Coord> {
        while let Some(candidate) = self.pending.pop() {
            if !board.is_shot(candidate) {
                return Some(candidate);
            }
            log::trace!("skipping stale candidate {}", candidate);
        }
        board.unshot().next()?;
        loop {
            let candidate = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if !board.is_shot(candidate) {
                return Some(candidate);
            }
        }
    }

    /// Update the queue after firing at `at` on `board`.
    pub fn record(&mut self, at: Coord, result: &ShotResult, board: &Board) {
        if !result.is_hit() {
            return;
        }
        if result.sunk.is_some() {
            self.pending.clear();
            return;
        }
        self.pending
            .extend(at.neighbours().filter(|&n| !board.is_shot(n)));
    }
}
