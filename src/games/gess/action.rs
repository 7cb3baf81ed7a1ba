//! First-class action types for Gess.
//!
//! Moves are domain events, not side effects. A [`Move`] is the player's
//! intent; a [`ValidatedMove`] is a move the rules accepted, carrying
//! everything needed to apply it without re-deriving anything.

use super::coord::{Coord, Direction};
use super::phases::GameOutcome;
use super::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// A move: slide the piece centered at `center` by `distance` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Center of the 3×3 piece being moved.
    pub center: Coord,
    /// Direction of travel.
    pub direction: Direction,
    /// Number of cells travelled.
    pub distance: i32,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, center: Coord, direction: Direction, distance: i32) -> Self {
        Self {
            player,
            center,
            direction,
            distance,
        }
    }

    /// Builds a move from an origin and a destination center.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotStraightLine`] unless the displacement is
    /// orthogonal or an exact diagonal, and [`MoveError::ZeroDistance`] if
    /// origin and destination coincide. Coordinates off the 20×20 array
    /// give [`MoveError::OutOfBounds`].
    #[instrument]
    pub fn between(player: Player, origin: Coord, destination: Coord) -> Result<Self, MoveError> {
        if let Some(off) = [origin, destination].into_iter().find(|c| !c.in_bounds()) {
            return Err(MoveError::OutOfBounds(off));
        }
        let dr = destination.row - origin.row;
        let dc = destination.col - origin.col;
        if dr == 0 && dc == 0 {
            return Err(MoveError::ZeroDistance);
        }
        if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
            return Err(MoveError::NotStraightLine {
                from: origin,
                to: destination,
            });
        }
        let direction = Direction::from_offset(dr.signum(), dc.signum()).ok_or(
            MoveError::NotStraightLine {
                from: origin,
                to: destination,
            },
        )?;
        Ok(Self::new(player, origin, direction, dr.abs().max(dc.abs())))
    }

    /// Center of the piece after the move.
    pub fn destination(&self) -> Coord {
        self.center.step(self.direction, self.distance)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} -> {} ({} x{})",
            self.player,
            self.center,
            self.destination(),
            self.direction,
            self.distance
        )
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable: a rejected move never touches the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move was submitted by the player who is not on turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The footprint has no stone of the mover in its ring.
    #[display("No movable piece centered at {}", _0)]
    NoPieceAtCenter(Coord),

    /// The footprint contains an opponent stone.
    #[display("Piece contains an opponent stone at {}", _0)]
    NotOwnedByPlayer(Coord),

    /// The piece's shape has no stone pointing this way.
    #[display("Piece shape cannot move {}", _0)]
    IllegalDirectionForShape(Direction),

    /// A piece with an empty center moved too far.
    #[display("Distance {} exceeds the limit of {} for this piece", requested, limit)]
    DistanceExceedsShapeLimit {
        /// Distance asked for.
        requested: i32,
        /// Maximum the shape allows.
        limit: i32,
    },

    /// A move must travel at least one cell.
    #[display("Move must travel at least one cell")]
    ZeroDistance,

    /// Origin and destination are not on a line or diagonal.
    #[display("{} -> {} is not a straight or diagonal line", from, to)]
    NotStraightLine {
        /// Origin center.
        from: Coord,
        /// Destination center.
        to: Coord,
    },

    /// A stone outside the moving piece sits on the swept path.
    #[display("Path blocked by stone at {}", _0)]
    PathBlocked(Coord),

    /// The start, landing center or a landing stone leaves the playable interior.
    #[display("{} is outside the playable area", _0)]
    OutOfBounds(Coord),

    /// The move would leave the mover without a ring under the forbidding policy.
    #[display("Move would break {}'s last ring", _0)]
    WouldBreakLastRing(Player),
}

impl std::error::Error for MoveError {}

/// A stone removed by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Capture {
    /// Where the stone stood.
    pub coord: Coord,
    /// Who owned it.
    pub player: Player,
}

/// A move the rules accepted, ready to apply.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ValidatedMove {
    /// The move as submitted.
    action: Move,
    /// The nine cells of the start window.
    start: BTreeSet<Coord>,
    /// The nine cells of the landing window.
    landing: BTreeSet<Coord>,
    /// Moving stones as (from, to, owner).
    pattern: Vec<(Coord, Coord, Player)>,
    /// Stones the landing will remove.
    captures: Vec<Capture>,
}

impl ValidatedMove {
    pub(super) fn new(
        action: Move,
        start: BTreeSet<Coord>,
        landing: BTreeSet<Coord>,
        pattern: Vec<(Coord, Coord, Player)>,
        captures: Vec<Capture>,
    ) -> Self {
        Self {
            action,
            start,
            landing,
            pattern,
            captures,
        }
    }

    /// Center of the landing window.
    pub fn landing_center(&self) -> Coord {
        self.action.destination()
    }
}

/// Stones removed by an applied move, in row-major order.
///
/// Informational only: the rules never consult it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureReport {
    /// Removed stones.
    pub captured: Vec<Capture>,
}

impl CaptureReport {
    /// Number of stones of `player` removed.
    pub fn count(&self, player: Player) -> usize {
        self.captured.iter().filter(|c| c.player == player).count()
    }

    /// Checks if nothing was removed.
    pub fn is_empty(&self) -> bool {
        self.captured.is_empty()
    }
}

/// What happens next after a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// The game continues with this player.
    Next(Player),
    /// The game ended.
    Finished(GameOutcome),
}

/// Result of a successful move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TurnResult {
    /// Stones removed by the move.
    captures: Vec<Capture>,
    /// Next player, or the final outcome.
    next: TurnState,
}

impl TurnResult {
    pub(super) fn new(captures: Vec<Capture>, next: TurnState) -> Self {
        Self { captures, next }
    }

    /// The final outcome, if this move ended the game.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.next {
            TurnState::Finished(outcome) => Some(outcome),
            TurnState::Next(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_derives_direction_and_distance() {
        let mv = Move::between(Player::Black, Coord::new(3, 3), Coord::new(6, 6)).unwrap();
        assert_eq!(mv.direction, Direction::NE);
        assert_eq!(mv.distance, 3);
        assert_eq!(mv.destination(), Coord::new(6, 6));

        let mv = Move::between(Player::White, Coord::new(10, 4), Coord::new(10, 1)).unwrap();
        assert_eq!(mv.direction, Direction::W);
        assert_eq!(mv.distance, 3);
    }

    #[test]
    fn test_between_rejects_knight_jump() {
        assert!(matches!(
            Move::between(Player::Black, Coord::new(3, 3), Coord::new(5, 4)),
            Err(MoveError::NotStraightLine { .. })
        ));
        assert_eq!(
            Move::between(Player::Black, Coord::new(3, 3), Coord::new(3, 3)),
            Err(MoveError::ZeroDistance)
        );
    }

    #[test]
    fn test_between_rejects_far_off_coordinates() {
        let far = Coord::new(i32::MIN, 3);
        assert_eq!(
            Move::between(Player::Black, Coord::new(3, 3), far),
            Err(MoveError::OutOfBounds(far))
        );
    }

    #[test]
    fn test_error_messages_name_the_cell() {
        let err = MoveError::PathBlocked(Coord::new(4, 2));
        assert_eq!(err.to_string(), "Path blocked by stone at c5");
    }
}
