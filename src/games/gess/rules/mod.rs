//! Game rules for Gess.
//!
//! This module contains pure functions over a [`Grid`](super::Grid):
//! move validation, capture resolution and ring detection. Rules are
//! separated from board storage so the engine can compose them.

pub mod capture;
pub mod ring;
pub mod validator;

pub use capture::apply;
pub use ring::{has_intact_ring, rings};
pub use validator::{MAX_UNCENTERED_DISTANCE, legal_moves, validate, validate_with_policy};

use serde::{Deserialize, Serialize};

/// Whether a player may make a move that destroys their own last ring.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SuicidePolicy {
    /// The move is legal and loses the game immediately.
    #[default]
    Permitted,
    /// The move is rejected with `WouldBreakLastRing`.
    Forbidden,
}
