//! Alternating turn invariant: Black, White, Black, White, ...

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: players alternate turns, Black first.
///
/// Move history must show Black, White, Black, ... and, while the game
/// runs, the player to move must follow the last entry.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        let alternates = history.iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 {
                Player::Black
            } else {
                Player::White
            };
            mov.player == expected
        });
        if !alternates {
            return false;
        }

        match engine.to_move() {
            Some(player) => {
                let expected = if history.len() % 2 == 0 {
                    Player::Black
                } else {
                    Player::White
                };
                player == expected
            }
            None => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (Black, White, Black, ...)"
    }
}
