//! Phase-specific typestate structs for Gess.
//!
//! Each phase is its own distinct type. A `GameFinished` ALWAYS has a
//! decided outcome, and only a `GameInProgress` has a `make_move`.

use super::action::{Move, MoveError, TurnResult, TurnState};
use super::engine::GameEngine;
use super::phases::GameOutcome;
use super::rules::SuicidePolicy;
use super::{Grid, Player};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
#[derive(Debug, Clone)]
pub struct GameSetup {
    grid: Grid,
    policy: SuicidePolicy,
}

impl GameSetup {
    /// Creates a setup with the standard starting layout.
    #[instrument]
    pub fn new() -> Self {
        Self::from_grid(Grid::standard())
    }

    /// Creates a setup from an arbitrary position.
    #[instrument(skip(grid))]
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            policy: SuicidePolicy::default(),
        }
    }

    /// Selects the suicide policy.
    pub fn with_policy(mut self, policy: SuicidePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Starts the game with Black to move (consumes setup, returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        GameInProgress {
            engine: GameEngine::from_grid(self.grid, self.policy),
            to_move: Player::Black,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    engine: GameEngine,
    to_move: Player,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to next state.
    ///
    /// Returns either a new InProgress or a Finished state.
    #[instrument(skip(self))]
    pub fn make_move(mut self, action: Move) -> Result<GameResult, MoveError> {
        let turn = self.engine.submit(action)?;
        Ok(self.transition(turn))
    }

    /// Concedes for `player`, consuming the game.
    #[instrument(skip(self))]
    pub fn resign(mut self, player: Player) -> GameFinished {
        let resigned = self.engine.resign(player);
        debug_assert!(resigned.is_ok(), "running game refused resignation: {resigned:?}");
        GameFinished {
            engine: self.engine,
            last_turn: None,
        }
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        debug_assert_eq!(self.engine.to_move(), Some(self.to_move));
        self.to_move
    }

    /// Returns the board.
    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        self.engine.history()
    }

    /// Returns every legal move for the player on turn.
    pub fn valid_moves(&self) -> Vec<Move> {
        self.engine.legal_moves()
    }

    /// Unwraps the underlying engine.
    pub fn into_engine(self) -> GameEngine {
        self.engine
    }

    /// Replays moves from the standard starting position.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new().start();

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }

    fn transition(mut self, turn: TurnResult) -> GameResult {
        match *turn.next() {
            TurnState::Next(player) => {
                self.to_move = player;
                GameResult::InProgress(self)
            }
            TurnState::Finished(_) => GameResult::Finished(GameFinished {
                engine: self.engine,
                last_turn: Some(turn),
            }),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    engine: GameEngine,
    last_turn: Option<TurnResult>,
}

impl GameFinished {
    /// Returns the outcome, never `Ongoing`.
    pub fn outcome(&self) -> GameOutcome {
        self.engine.outcome()
    }

    /// Returns the winner.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().winner()
    }

    /// The move that ended the game, if it did not end by resignation.
    pub fn last_turn(&self) -> Option<&TurnResult> {
        self.last_turn.as_ref()
    }

    /// Returns the board.
    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        self.engine.history()
    }

    /// Restarts the game (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new().with_policy(self.engine.policy())
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
