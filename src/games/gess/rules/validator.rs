//! Move validation.
//!
//! Validation is a pure function of the grid: it reads the footprint fresh
//! on every call and never mutates anything, so a rejected move cannot
//! leave a trace on the board.

use super::super::action::{Capture, Move, MoveError, ValidatedMove};
use super::super::coord::{BOARD_SIZE, Coord, Direction, INTERIOR_MAX, INTERIOR_MIN};
use super::super::footprint::Footprint;
use super::super::{Grid, Player};
use super::SuicidePolicy;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// How far a piece with an empty center may travel.
pub const MAX_UNCENTERED_DISTANCE: i32 = 3;

/// Validates a move under the default rules (suicide permitted).
///
/// # Errors
///
/// Returns the first rule the move breaks, checked in this order:
/// ownership, direction, distance, path clearance, landing bounds.
/// The landing window must lie wholly inside the playable interior.
#[instrument(skip(grid))]
pub fn validate(
    grid: &Grid,
    player: Player,
    center: Coord,
    direction: Direction,
    distance: i32,
) -> Result<ValidatedMove, MoveError> {
    validate_with_policy(
        grid,
        Move::new(player, center, direction, distance),
        SuicidePolicy::Permitted,
    )
}

/// Validates a move, rejecting ring suicide when `policy` forbids it.
///
/// # Errors
///
/// As [`validate`], plus [`MoveError::WouldBreakLastRing`] under
/// [`SuicidePolicy::Forbidden`].
#[instrument(skip(grid), fields(player = ?action.player, center = %action.center))]
pub fn validate_with_policy(
    grid: &Grid,
    action: Move,
    policy: SuicidePolicy,
) -> Result<ValidatedMove, MoveError> {
    let validated = check_move(grid, action)?;

    if policy == SuicidePolicy::Forbidden {
        let mut scratch = grid.snapshot();
        super::capture::apply(&mut scratch, &validated);
        if !super::has_intact_ring(&scratch, action.player) {
            debug!("Look-ahead leaves mover without a ring");
            return Err(MoveError::WouldBreakLastRing(action.player));
        }
    }

    Ok(validated)
}

fn check_move(grid: &Grid, action: Move) -> Result<ValidatedMove, MoveError> {
    let Move {
        player,
        center,
        direction,
        distance,
    } = action;

    if !center.is_playable() {
        return Err(MoveError::OutOfBounds(center));
    }
    let footprint = Footprint::extract(grid, center, player)?;

    // Ownership
    if let Some(foreign) = footprint.first_foreign_stone() {
        return Err(MoveError::NotOwnedByPlayer(foreign));
    }
    if footprint.owned().is_empty() {
        return Err(MoveError::NoPieceAtCenter(center));
    }

    // Shape
    if !footprint.owned().contains(direction) {
        return Err(MoveError::IllegalDirectionForShape(direction));
    }

    // Distance
    if distance < 1 {
        return Err(MoveError::ZeroDistance);
    }
    if !footprint.centered() && distance > MAX_UNCENTERED_DISTANCE {
        return Err(MoveError::DistanceExceedsShapeLimit {
            requested: distance,
            limit: MAX_UNCENTERED_DISTANCE,
        });
    }

    // Path: only the moving piece may appear in intermediate windows.
    // Windows BOARD_SIZE or more steps away lie entirely off the array.
    let start: BTreeSet<Coord> = center.window().into_iter().collect();
    for step in 1..distance.min(BOARD_SIZE) {
        let swept = center.step(direction, step);
        if let Some(blocker) = swept
            .window()
            .into_iter()
            .find(|cell| grid.get(*cell).is_occupied() && !start.contains(cell))
        {
            debug!(step, blocker = %blocker, "Path blocked");
            return Err(MoveError::PathBlocked(blocker));
        }
    }

    // Landing: the whole landing window stays off the border.
    let landing_center = center.step(direction, distance);
    if !landing_center.window().iter().all(|cell| cell.is_playable()) {
        return Err(MoveError::OutOfBounds(landing_center));
    }
    let pattern: Vec<(Coord, Coord, Player)> = footprint
        .stones()
        .map(|(from, owner)| (from, from.step(direction, distance), owner))
        .collect();

    // Everything in the landing window outside the moving piece is captured.
    let landing: BTreeSet<Coord> = landing_center.window().into_iter().collect();
    let captures: Vec<Capture> = landing
        .difference(&start)
        .filter_map(|&coord| {
            grid.get(coord)
                .owner()
                .map(|player| Capture { coord, player })
        })
        .collect();

    debug!(
        stones = pattern.len(),
        captures = captures.len(),
        landing = %landing_center,
        "Move validated"
    );
    Ok(ValidatedMove::new(action, start, landing, pattern, captures))
}

/// Lists every move `player` can legally make on `grid`.
#[instrument(skip(grid))]
pub fn legal_moves(grid: &Grid, player: Player, policy: SuicidePolicy) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in INTERIOR_MIN..=INTERIOR_MAX {
        for col in INTERIOR_MIN..=INTERIOR_MAX {
            let center = Coord::new(row, col);
            let Ok(footprint) = Footprint::extract(grid, center, player) else {
                continue;
            };
            if footprint.owned().is_empty() || footprint.first_foreign_stone().is_some() {
                continue;
            }
            let reach = if footprint.centered() {
                BOARD_SIZE
            } else {
                MAX_UNCENTERED_DISTANCE
            };
            for direction in footprint.directions() {
                for distance in 1..=reach {
                    let action = Move::new(player, center, direction, distance);
                    match validate_with_policy(grid, action, policy) {
                        Ok(_) => moves.push(action),
                        // Sliding further only adds to the swept path.
                        Err(MoveError::WouldBreakLastRing(_)) => {}
                        Err(_) => break,
                    }
                }
            }
        }
    }
    debug!(count = moves.len(), "Enumerated legal moves");
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gess::Cell;

    fn place(grid: &mut Grid, player: Player, coords: &[(i32, i32)]) {
        for &(r, c) in coords {
            grid.set(Coord::new(r, c), Cell::Stone(player)).unwrap();
        }
    }

    #[test]
    fn test_each_direction_requires_its_ring_bit() {
        let center = Coord::new(9, 9);
        for shape in Direction::ALL {
            let mut grid = Grid::empty();
            let stone = center.step(shape, 1);
            place(&mut grid, Player::Black, &[(stone.row, stone.col)]);

            for direction in Direction::ALL {
                let result = validate(&grid, Player::Black, center, direction, 1);
                if direction == shape {
                    assert!(result.is_ok(), "{shape} stone should allow {direction}");
                } else {
                    assert_eq!(
                        result,
                        Err(MoveError::IllegalDirectionForShape(direction)),
                        "{shape} stone should forbid {direction}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_uncentered_distance_cap() {
        let mut grid = Grid::empty();
        place(&mut grid, Player::White, &[(10, 9)]);
        let center = Coord::new(9, 9);
        assert!(validate(&grid, Player::White, center, Direction::N, 3).is_ok());
        assert_eq!(
            validate(&grid, Player::White, center, Direction::N, 4),
            Err(MoveError::DistanceExceedsShapeLimit {
                requested: 4,
                limit: 3
            })
        );
    }

    #[test]
    fn test_centered_piece_slides_to_the_edge() {
        let mut grid = Grid::empty();
        place(&mut grid, Player::Black, &[(3, 9), (4, 9)]);
        let center = Coord::new(3, 9);
        // The landing window reaches row 18, the last playable row.
        assert!(validate(&grid, Player::Black, center, Direction::N, 14).is_ok());
        assert_eq!(
            validate(&grid, Player::Black, center, Direction::N, 15),
            Err(MoveError::OutOfBounds(Coord::new(18, 9)))
        );
    }

    #[test]
    fn test_landing_window_may_not_touch_border() {
        let mut grid = Grid::empty();
        place(&mut grid, Player::Black, &[(1, 6)]);
        // Row 1 is playable, but a window centered there covers row 0.
        assert_eq!(
            validate(&grid, Player::Black, Coord::new(1, 5), Direction::E, 1),
            Err(MoveError::OutOfBounds(Coord::new(1, 6)))
        );
        place(&mut grid, Player::Black, &[(2, 6)]);
        assert!(validate(&grid, Player::Black, Coord::new(2, 5), Direction::E, 1).is_ok());
    }

    #[test]
    fn test_huge_distance_is_out_of_bounds() {
        let mut grid = Grid::empty();
        place(&mut grid, Player::Black, &[(9, 9), (10, 9)]);
        let center = Coord::new(9, 9);
        assert_eq!(
            validate(&grid, Player::Black, center, Direction::N, i32::MAX),
            Err(MoveError::OutOfBounds(Coord::new(i32::MAX, 9)))
        );
        assert_eq!(
            validate(&grid, Player::Black, center, Direction::N, i32::MIN),
            Err(MoveError::ZeroDistance)
        );
    }

    #[test]
    fn test_blocked_path_reported_before_bounds() {
        let mut grid = Grid::empty();
        place(&mut grid, Player::Black, &[(15, 9), (16, 9)]);
        place(&mut grid, Player::White, &[(18, 10)]);
        assert_eq!(
            validate(&grid, Player::Black, Coord::new(15, 9), Direction::N, 3),
            Err(MoveError::PathBlocked(Coord::new(18, 10)))
        );
    }

    #[test]
    fn test_empty_and_center_only_footprints_are_immobile() {
        let mut grid = Grid::empty();
        let center = Coord::new(9, 9);
        assert_eq!(
            validate(&grid, Player::Black, center, Direction::N, 1),
            Err(MoveError::NoPieceAtCenter(center))
        );
        place(&mut grid, Player::Black, &[(9, 9)]);
        assert_eq!(
            validate(&grid, Player::Black, center, Direction::N, 1),
            Err(MoveError::NoPieceAtCenter(center))
        );
    }

    #[test]
    fn test_opponent_stone_in_footprint_is_rejected() {
        let mut grid = Grid::empty();
        place(&mut grid, Player::Black, &[(10, 9)]);
        place(&mut grid, Player::White, &[(8, 8)]);
        assert_eq!(
            validate(&grid, Player::Black, Coord::new(9, 9), Direction::N, 1),
            Err(MoveError::NotOwnedByPlayer(Coord::new(8, 8)))
        );
    }

    #[test]
    fn test_zero_distance_is_rejected() {
        let mut grid = Grid::empty();
        place(&mut grid, Player::Black, &[(10, 9)]);
        assert_eq!(
            validate(&grid, Player::Black, Coord::new(9, 9), Direction::N, 0),
            Err(MoveError::ZeroDistance)
        );
    }

    #[test]
    fn test_stone_in_swept_window_blocks() {
        let mut grid = Grid::empty();
        place(&mut grid, Player::Black, &[(9, 9), (10, 9)]);
        // Three rows past the center, one column off the axis.
        place(&mut grid, Player::White, &[(12, 10)]);
        let center = Coord::new(9, 9);
        // Landing on it captures; sliding past it does not.
        assert!(validate(&grid, Player::Black, center, Direction::N, 2).is_ok());
        assert_eq!(
            validate(&grid, Player::Black, center, Direction::N, 3),
            Err(MoveError::PathBlocked(Coord::new(12, 10)))
        );
    }

    #[test]
    fn test_own_piece_does_not_block_itself() {
        let mut grid = Grid::empty();
        place(&mut grid, Player::Black, &[(9, 9), (10, 9), (10, 10), (8, 8)]);
        let result = validate(&grid, Player::Black, Coord::new(9, 9), Direction::N, 2);
        assert!(result.is_ok());
    }

    #[test]
    fn test_own_stone_outside_piece_blocks() {
        let mut grid = Grid::empty();
        place(&mut grid, Player::Black, &[(9, 9), (10, 9), (12, 8)]);
        assert_eq!(
            validate(&grid, Player::Black, Coord::new(9, 9), Direction::N, 3),
            Err(MoveError::PathBlocked(Coord::new(12, 8)))
        );
    }

    #[test]
    fn test_start_on_border_is_out_of_bounds() {
        let grid = Grid::standard();
        assert_eq!(
            validate(&grid, Player::Black, Coord::new(0, 4), Direction::N, 1),
            Err(MoveError::OutOfBounds(Coord::new(0, 4)))
        );
    }

    #[test]
    fn test_captures_are_reported_row_major() {
        let mut grid = Grid::empty();
        place(&mut grid, Player::Black, &[(9, 9), (10, 9)]);
        place(&mut grid, Player::White, &[(13, 10), (13, 8)]);
        let validated = validate(&grid, Player::Black, Coord::new(9, 9), Direction::N, 3).unwrap();
        assert_eq!(
            validated.captures(),
            &vec![
                Capture {
                    coord: Coord::new(13, 8),
                    player: Player::White
                },
                Capture {
                    coord: Coord::new(13, 10),
                    player: Player::White
                },
            ]
        );
        assert_eq!(validated.landing_center(), Coord::new(12, 9));
    }

    #[test]
    fn test_forbidden_suicide_is_rejected() {
        let mut grid = Grid::empty();
        let ring_center = Coord::new(5, 5);
        for coord in ring_center.window() {
            if coord != ring_center {
                place(&mut grid, Player::Black, &[(coord.row, coord.col)]);
            }
        }
        // Lone stone south of (8, 7): landing on (7, 7) clears ring cell (6, 6).
        place(&mut grid, Player::Black, &[(7, 7), (12, 12)]);
        let suicide = Move::new(Player::Black, Coord::new(8, 7), Direction::S, 1);
        let harmless = Move::new(Player::Black, Coord::new(11, 12), Direction::N, 1);

        assert!(validate_with_policy(&grid, suicide, SuicidePolicy::Permitted).is_ok());
        assert_eq!(
            validate_with_policy(&grid, suicide, SuicidePolicy::Forbidden),
            Err(MoveError::WouldBreakLastRing(Player::Black))
        );
        assert!(validate_with_policy(&grid, harmless, SuicidePolicy::Forbidden).is_ok());
    }

    #[test]
    fn test_legal_moves_all_validate() {
        let grid = Grid::standard();
        let moves = legal_moves(&grid, Player::Black, SuicidePolicy::Permitted);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert_eq!(mv.player, Player::Black);
            assert!(validate(&grid, mv.player, mv.center, mv.direction, mv.distance).is_ok());
        }
    }
}
