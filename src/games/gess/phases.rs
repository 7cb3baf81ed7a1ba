//! Game phases and outcomes.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a game, recomputed after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Both players still own a ring.
    #[default]
    Ongoing,
    /// White lost its last ring (or resigned).
    BlackWins,
    /// Black lost its last ring (or resigned).
    WhiteWins,
}

impl GameOutcome {
    /// Outcome in which `player` wins.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Black => GameOutcome::BlackWins,
            Player::White => GameOutcome::WhiteWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Ongoing => None,
            GameOutcome::BlackWins => Some(Player::Black),
            GameOutcome::WhiteWins => Some(Player::White),
        }
    }

    /// Returns true once the game has been decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            Some(player) => write!(f, "{} wins", player),
            None => write!(f, "Ongoing"),
        }
    }
}

/// Where the engine stands between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineState {
    /// Waiting for the given player to move.
    AwaitingMove(Player),
    /// The game is decided; no further moves are accepted.
    GameOver(GameOutcome),
}

impl EngineState {
    /// The player to move, if the game is still running.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            EngineState::AwaitingMove(player) => Some(*player),
            EngineState::GameOver(_) => None,
        }
    }

    /// The outcome as seen from this state.
    pub fn outcome(&self) -> GameOutcome {
        match self {
            EngineState::AwaitingMove(_) => GameOutcome::Ongoing,
            EngineState::GameOver(outcome) => *outcome,
        }
    }
}
