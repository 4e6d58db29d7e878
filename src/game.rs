//! Game session: lifecycle plus the phase/turn state machine.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Coord;
use crate::common::{GameError, Phase, ShotResult, Side};
use crate::config::FLEET_RETRIES;
use crate::events::{GameEvent, GameOver};
use crate::player::{PlayerState, Tally};
use crate::ship::{Orientation, ShipId};
use crate::shot;
use crate::targeting::HuntTargeting;

/// What the caller should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    /// Fleet placement is still open.
    PlaceShips,
    /// Wait for the human to fire.
    HumanTurn,
    /// Schedule [`Session::computer_turn`], after a presentation delay.
    ComputerTurn,
    /// Nothing more to do.
    GameOver,
}

/// Outcome of one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: Side,
    pub at: Coord,
    pub result: ShotResult,
    pub next: NextAction,
}

/// A full game between the human and the computer.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) human: PlayerState,
    pub(crate) computer: PlayerState,
    pub(crate) turn: Side,
    pub(crate) phase: Phase,
    pub(crate) targeting: HuntTargeting,
    pub(crate) outcome: Option<GameOver>,
    pub(crate) events: Vec<GameEvent>,
}

impl Session {
    /// Fresh game: empty human side, computer fleet placed at random,
    /// placing phase, human to move.
    pub fn new_game<R: Rng>(rng: &mut R) -> Result<Self, GameError> {
        let mut computer = PlayerState::new();
        place_fleet_with_retries(&mut computer, rng)?;
        log::info!("new game started");
        Ok(Self::from_parts(
            PlayerState::new(),
            computer,
            Side::Human,
            Phase::Placing,
        ))
    }

    pub(crate) fn from_parts(
        human: PlayerState,
        computer: PlayerState,
        turn: Side,
        phase: Phase,
    ) -> Self {
        let outcome = (phase == Phase::Ended).then(|| {
            let winner = if computer.is_defeated() {
                Side::Human
            } else {
                Side::Computer
            };
            GameOver {
                winner,
                human: human.tally,
                computer: computer.tally,
            }
        });
        Self {
            human,
            computer,
            turn,
            phase,
            targeting: HuntTargeting::new(),
            outcome,
            events: Vec::new(),
        }
    }

    pub fn human(&self) -> &PlayerState {
        &self.human
    }

    pub fn computer(&self) -> &PlayerState {
        &self.computer
    }

    pub fn player(&self, side: Side) -> &PlayerState {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Computer's hunt state.
    pub fn targeting(&self) -> &HuntTargeting {
        &self.targeting
    }

    /// Final result once the game has ended.
    pub fn outcome(&self) -> Option<&GameOver> {
        self.outcome.as_ref()
    }

    /// Take all events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }

    /// Whose move comes next, from the caller's point of view.
    pub fn next_action(&self) -> NextAction {
        match (self.phase, self.turn) {
            (Phase::Placing, _) => NextAction::PlaceShips,
            (Phase::Ended, _) => NextAction::GameOver,
            (Phase::Fighting, Side::Human) => NextAction::HumanTurn,
            (Phase::Fighting, Side::Computer) => NextAction::ComputerTurn,
        }
    }

    /// Place one of the human's ships by hand. Completing the fleet starts
    /// the fight with the human to move.
    pub fn place_human_ship(
        &mut self,
        id: ShipId,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.expect_phase(Phase::Placing)?;
        self.human.place_ship(id, origin, orientation)?;
        if self.human.is_ready() {
            self.start_fight();
        }
        Ok(())
    }

    /// Throw away any manual placement and lay out the human fleet at random,
    /// starting over on a fresh board up to [`FLEET_RETRIES`] times.
    ///
    /// On exhaustion the fleet stays partially placed and the session keeps
    /// placing; calling again starts over from an empty board.
    pub fn auto_place_human<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.expect_phase(Phase::Placing)?;
        place_fleet_with_retries(&mut self.human, rng)?;
        self.start_fight();
        Ok(())
    }

    /// Human fires at `at` on the computer's board.
    pub fn human_fire(&mut self, at: Coord) -> Result<ShotReport, GameError> {
        self.fire(Side::Human, at)
    }

    /// Let the computer pick a target with the hunt heuristic and fire.
    pub fn computer_turn<R: Rng>(&mut self, rng: &mut R) -> Result<ShotReport, GameError> {
        self.check_shot_allowed(Side::Computer)?;
        let at = self
            .targeting
            .select_target(rng, &self.human.board)
            .ok_or(GameError::WrongPhase {
                expected: Phase::Fighting,
                actual: Phase::Ended,
            })?;
        let report = self.fire(Side::Computer, at)?;
        self.targeting
            .record(at, &report.result, &self.human.board);
        Ok(report)
    }

    /// Fire a shot for `shooter`. Legal only while fighting and only for the
    /// side holding the turn; a rejected shot changes nothing.
    ///
    /// A hit keeps the turn, a miss passes it. Sinking the last ship of the
    /// opponent ends the game with `shooter` as winner.
    pub fn fire(&mut self, shooter: Side, at: Coord) -> Result<ShotReport, GameError> {
        self.check_shot_allowed(shooter)?;
        let (tally, target) = self.sides_mut(shooter);
        let result = shot::fire(target, tally, at.row, at.col)?;
        let defeated = target.is_defeated();
        log::debug!("{:?} fired at {}: {:?}", shooter, at, result);
        self.events.push(GameEvent::ShotResolved {
            shooter,
            at,
            result,
        });

        if result.is_hit() {
            if defeated {
                self.end_game(shooter);
            }
        } else {
            self.turn = shooter.opponent();
        }
        Ok(ShotReport {
            shooter,
            at,
            result,
            next: self.next_action(),
        })
    }

    fn sides_mut(&mut self, shooter: Side) -> (&mut Tally, &mut PlayerState) {
        match shooter {
            Side::Human => (&mut self.human.tally, &mut self.computer),
            Side::Computer => (&mut self.computer.tally, &mut self.human),
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase != expected {
            return Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn check_shot_allowed(&self, shooter: Side) -> Result<(), GameError> {
        self.expect_phase(Phase::Fighting)?;
        if self.turn != shooter {
            return Err(GameError::OutOfTurn { turn: self.turn });
        }
        Ok(())
    }

    fn start_fight(&mut self) {
        self.phase = Phase::Fighting;
        self.turn = Side::Human;
        self.targeting.reset();
        log::info!("fleets ready, human fires first");
    }

    fn end_game(&mut self, winner: Side) {
        let over = GameOver {
            winner,
            human: self.human.tally,
            computer: self.computer.tally,
        };
        self.phase = Phase::Ended;
        self.outcome = Some(over);
        log::info!("{}", over);
        self.events.push(GameEvent::GameOver(over));
    }
}

/// Reset `state` and place its whole fleet at random, trying up to
/// [`FLEET_RETRIES`] fresh boards. The last partial layout is kept on failure.
fn place_fleet_with_retries<R: Rng>(
    state: &mut PlayerState,
    rng: &mut R,
) -> Result<(), GameError> {
    let mut tries = 0;
    loop {
        tries += 1;
        *state = PlayerState::new();
        match state.auto_place(rng) {
            Ok(()) => return Ok(()),
            Err(GameError::PlacementExhausted { .. }) if tries < FLEET_RETRIES => {
                log::warn!("fleet placement try {} of {} failed", tries, FLEET_RETRIES);
            }
            Err(e) => return Err(e),
        }
    }
}
