//! Contract-based validation for Gess.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{GessInvariants, InvariantSet, InvariantViolation};
use super::{GameEngine, Player};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must still be running.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameAlreadyOver`] on a finished game.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), MoveError> {
        if engine.outcome().is_over() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::NotYourTurn`] when `mov.player` is not on turn.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        if engine.to_move() != Some(mov.player) {
            Err(MoveError::NotYourTurn(mov.player))
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions (board rules are checked separately by the validator):
/// - Game must not be over
/// - Must be player's turn
///
/// Postconditions:
/// - Border stays clear, turns alternate, running games have rings
/// - No stone was created
/// - History grew by exactly one move
pub struct MoveContract;

impl Contract<GameEngine, Move> for MoveContract {
    fn pre(engine: &GameEngine, action: &Move) -> Result<(), MoveError> {
        GameNotOver::check(engine)?;
        PlayersTurn::check(action, engine)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = GessInvariants::check_all(after).err().unwrap_or_default();

        for player in [Player::Black, Player::White] {
            if after.grid().stone_count(player) > before.grid().stone_count(player) {
                violations.push(InvariantViolation::new(format!(
                    "{} gained stones",
                    player
                )));
            }
        }

        if after.history().len() != before.history().len() + 1 {
            violations.push(InvariantViolation::new("History must grow by one move"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Asserts the move postconditions (panics on violation in debug builds).
#[instrument(skip(before, after))]
pub fn assert_invariants(before: &GameEngine, after: &GameEngine) {
    if let Err(violations) = MoveContract::post(before, after) {
        for violation in &violations {
            warn!(%violation, "Postcondition violated");
        }
        debug_assert!(violations.is_empty(), "Postconditions violated: {violations:?}");
    }
}
