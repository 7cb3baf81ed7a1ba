//! Outcome invariant: a running game has a ring on both sides.

use super::super::rules::has_intact_ring;
use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: while the game is ongoing, both players own an intact ring.
///
/// A finished game may have any board (resignation ends a game with rings
/// still standing), so only running games are constrained.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameEngine> for OutcomeConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        if engine.outcome().is_over() {
            return true;
        }
        has_intact_ring(engine.grid(), Player::Black) && has_intact_ring(engine.grid(), Player::White)
    }

    fn description() -> &'static str {
        "Both players own a ring while the game is ongoing"
    }
}
