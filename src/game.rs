//! Turn sequencing: placement, alternating shots, end detection.

use rand::Rng;

use crate::ai::AiGunner;
use crate::board::Board;
use crate::common::{GameError, ShotResult};
use crate::config::{FLEET, NUM_SHIPS};
use crate::ship::{Orientation, ShipSpec};

/// Whose move the game is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The player is still placing ships.
    Placement,
    PlayerTurn,
    EnemyTurn,
    /// Terminal; a fresh [`Game`] is the only way forward.
    Over(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWon,
    PlayerLost,
}

/// A resolved shot: where it landed and what it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub row: usize,
    pub col: usize,
    pub result: ShotResult,
}

/// One game instance: both grids, the opponent gunner, and the phase
/// machine. Everything lives in this value; dropping it is the reset.
#[derive(Debug, Clone)]
pub struct Game {
    player_board: Board,
    enemy_board: Board,
    gunner: AiGunner,
    phase: Phase,
    placing: usize,
}

impl Game {
    /// Start a new game. The enemy fleet is placed immediately; the
    /// player's placement phase follows.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let mut enemy_board = Board::new();
        enemy_board.place_fleet_random(rng)?;
        Ok(Game {
            player_board: Board::new(),
            enemy_board,
            gunner: AiGunner::new(),
            phase: Phase::Placement,
            placing: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The terminal outcome, once reached.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Over(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn enemy_board(&self) -> &Board {
        &self.enemy_board
    }

    pub fn gunner(&self) -> &AiGunner {
        &self.gunner
    }

    /// Next fleet member awaiting placement, while placing.
    pub fn next_ship_to_place(&self) -> Option<ShipSpec> {
        if self.phase == Phase::Placement {
            Some(FLEET[self.placing])
        } else {
            None
        }
    }

    /// Place the next ship of the player's fleet. A rejected placement
    /// leaves the game untouched so the caller can re-prompt.
    pub fn place_player_ship(
        &mut self,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::WrongPhase);
        }
        self.player_board.place(self.placing, row, col, orientation)?;
        self.placing += 1;
        if self.placing == NUM_SHIPS {
            self.phase = Phase::PlayerTurn;
        }
        Ok(())
    }

    /// Randomly place just the next ship; returns which one was placed.
    pub fn auto_place_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ShipSpec, GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::WrongPhase);
        }
        let spec = FLEET[self.placing];
        let (row, col, orientation) = self.player_board.random_placement(rng, self.placing)?;
        self.place_player_ship(row, col, orientation)?;
        Ok(spec)
    }

    /// Randomly place all of the player's remaining ships.
    pub fn auto_place_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        while self.phase == Phase::Placement {
            self.auto_place_next(rng)?;
        }
        Ok(())
    }

    /// Resolve the player's shot at the enemy grid.
    ///
    /// A square already fired at is ignored: `Ok(None)`, no state change,
    /// and it stays the player's turn. Otherwise the shot resolves, and
    /// the turn passes to the enemy unless the enemy fleet is finished.
    pub fn player_fire(&mut self, row: usize, col: usize) -> Result<Option<ShotReport>, GameError> {
        if self.phase != Phase::PlayerTurn {
            return Err(GameError::WrongPhase);
        }
        if self.enemy_board.already_fired(row, col) {
            return Ok(None);
        }
        let result = self.enemy_board.fire(row, col)?;
        self.phase = if self.enemy_board.all_sunk() {
            Phase::Over(Outcome::PlayerWon)
        } else {
            Phase::EnemyTurn
        };
        Ok(Some(ShotReport { row, col, result }))
    }

    /// Let the gunner take its one answering shot at the player's grid.
    pub fn enemy_fire<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ShotReport, GameError> {
        if self.phase != Phase::EnemyTurn {
            return Err(GameError::WrongPhase);
        }
        let (row, col) = self.gunner.pick_shot(rng);
        // the exhausted-hunt fallback may repeat a square; that burns the
        // turn without touching the board
        let result = if self.player_board.already_fired(row, col) {
            ShotResult::Miss
        } else {
            self.player_board.fire(row, col)?
        };
        self.gunner.record_result(row, col, result);
        self.phase = if self.player_board.all_sunk() {
            Phase::Over(Outcome::PlayerLost)
        } else {
            Phase::PlayerTurn
        };
        Ok(ShotReport { row, col, result })
    }
}
