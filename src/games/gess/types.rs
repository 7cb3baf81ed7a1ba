//! Core domain types for Gess.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Player {
    /// Black (moves first, home edge at row 1).
    Black,
    /// White (moves second, home edge at row 20).
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Single-character symbol used by board rendering.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
        }
    }
}

/// A cell on the Gess grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No stone.
    #[default]
    Empty,
    /// Cell holds a stone of the given player.
    Stone(Player),
}

impl Cell {
    /// Returns the owner of the stone, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Stone(player) => Some(player),
        }
    }

    /// Checks if the cell holds a stone of either color.
    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Stone(_))
    }

    /// Checks if the cell holds a stone of `player`.
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Stone(player)
    }

    /// Single-character symbol used by board rendering.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Stone(player) => player.symbol(),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Stone(player)
    }
}
