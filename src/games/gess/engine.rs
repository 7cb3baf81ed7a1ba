//! The Gess game engine.
//!
//! One [`GameEngine`] owns exactly one game: its grid, whose turn it is and
//! how the game ended. Moves are validated in full before the grid is
//! touched, so every error leaves the engine exactly as it was.

use super::action::{Move, MoveError, TurnResult, TurnState};
use super::contracts::{Contract, MoveContract};
use super::coord::{Coord, Direction};
use super::phases::{EngineState, GameOutcome};
use super::rules::{self, SuicidePolicy};
use super::{Grid, Player};
use tracing::{debug, info, instrument, warn};

/// Turn-by-turn state machine for a single game of Gess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    grid: Grid,
    state: EngineState,
    history: Vec<Move>,
    policy: SuicidePolicy,
}

impl GameEngine {
    /// Starts a game from the standard layout with Black to move.
    #[instrument]
    pub fn new_game() -> Self {
        Self::with_policy(SuicidePolicy::default())
    }

    /// Starts a standard game under the given suicide policy.
    #[instrument]
    pub fn with_policy(policy: SuicidePolicy) -> Self {
        Self::from_grid(Grid::standard(), policy)
    }

    /// Starts a game from an arbitrary position with Black to move.
    #[instrument(skip(grid))]
    pub fn from_grid(grid: Grid, policy: SuicidePolicy) -> Self {
        info!(?policy, "New game");
        Self {
            grid,
            state: EngineState::AwaitingMove(Player::Black),
            history: Vec::new(),
            policy,
        }
    }

    /// Submits a move for the player on turn.
    ///
    /// # Errors
    ///
    /// See [`GameEngine::submit`].
    #[instrument(skip(self))]
    pub fn submit_move(
        &mut self,
        center: Coord,
        direction: Direction,
        distance: i32,
    ) -> Result<TurnResult, MoveError> {
        let player = self.to_move().ok_or(MoveError::GameAlreadyOver)?;
        self.submit(Move::new(player, center, direction, distance))
    }

    /// Submits a move from `origin` to `destination` for the player on turn.
    ///
    /// # Errors
    ///
    /// [`MoveError::NotStraightLine`] for displacements that are neither
    /// orthogonal nor diagonal, otherwise as [`GameEngine::submit`].
    #[instrument(skip(self))]
    pub fn submit_move_to(
        &mut self,
        origin: Coord,
        destination: Coord,
    ) -> Result<TurnResult, MoveError> {
        let player = self.to_move().ok_or(MoveError::GameAlreadyOver)?;
        self.submit(Move::between(player, origin, destination)?)
    }

    /// Validates and applies `action`.
    ///
    /// On success the grid is updated, both players' rings are checked and
    /// the turn passes on or the game ends.
    ///
    /// # Errors
    ///
    /// Any [`MoveError`]; the engine is unchanged when one is returned.
    #[instrument(skip(self), fields(player = ?action.player, center = %action.center))]
    pub fn submit(&mut self, action: Move) -> Result<TurnResult, MoveError> {
        MoveContract::pre(self, &action).inspect_err(|e| warn!(error = %e, "Move refused"))?;
        let validated = rules::validate_with_policy(&self.grid, action, self.policy)
            .inspect_err(|e| warn!(error = %e, "Illegal move"))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let report = rules::apply(&mut self.grid, &validated);
        self.history.push(action);

        let mover = action.player;
        let opponent = mover.opponent();
        let next = if !rules::has_intact_ring(&self.grid, opponent) {
            TurnState::Finished(GameOutcome::won_by(mover))
        } else if !rules::has_intact_ring(&self.grid, mover) {
            TurnState::Finished(GameOutcome::won_by(opponent))
        } else {
            TurnState::Next(opponent)
        };
        self.state = match next {
            TurnState::Next(player) => EngineState::AwaitingMove(player),
            TurnState::Finished(outcome) => {
                info!(%outcome, moves = self.history.len(), "Game over");
                EngineState::GameOver(outcome)
            }
        };

        #[cfg(debug_assertions)]
        super::contracts::assert_invariants(&before, self);

        info!(%action, captured = report.captured.len(), "Move applied");
        Ok(TurnResult::new(report.captured, next))
    }

    /// Concedes the game for `player`; the opponent wins.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameAlreadyOver`] if the game has already been decided.
    #[instrument(skip(self))]
    pub fn resign(&mut self, player: Player) -> Result<GameOutcome, MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        let outcome = GameOutcome::won_by(player.opponent());
        info!(%player, %outcome, "Resigned");
        self.state = EngineState::GameOver(outcome);
        Ok(outcome)
    }

    /// Every legal move for the player on turn; empty once the game is over.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.to_move() {
            Some(player) => rules::legal_moves(&self.grid, player, self.policy),
            None => {
                debug!("No legal moves in a finished game");
                Vec::new()
            }
        }
    }

    /// An owned copy of the board for rendering.
    pub fn board_snapshot(&self) -> Grid {
        self.grid.snapshot()
    }

    /// Borrows the board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.state.outcome()
    }

    /// The current state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The player to move, if the game is running.
    pub fn to_move(&self) -> Option<Player> {
        self.state.to_move()
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The suicide policy in force.
    pub fn policy(&self) -> SuicidePolicy {
        self.policy
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new_game()
    }
}
