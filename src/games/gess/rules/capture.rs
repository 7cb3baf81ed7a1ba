//! Capture resolution.
//!
//! Applying a move is three set operations on the grid:
//!
//! 1. clear the start window,
//! 2. clear the landing window,
//! 3. write the moving stones at their translated cells.
//!
//! Any stone in the landing window that is not part of the moving piece is
//! therefore gone, whatever its color.

use super::super::action::{CaptureReport, ValidatedMove};
use super::super::{Cell, Grid};
use tracing::{debug, instrument, warn};

/// Applies a validated move to `grid` and reports the removed stones.
#[instrument(skip(grid, validated), fields(action = %validated.action()))]
pub fn apply(grid: &mut Grid, validated: &ValidatedMove) -> CaptureReport {
    for &coord in validated.start().union(validated.landing()) {
        // Border cells of a window are always empty already.
        if coord.is_playable()
            && let Err(e) = grid.set(coord, Cell::Empty)
        {
            warn!(error = %e, "Unexpected write failure while clearing");
        }
    }

    for &(_, to, owner) in validated.pattern() {
        if let Err(e) = grid.set(to, Cell::Stone(owner)) {
            warn!(error = %e, "Unexpected write failure while placing");
        }
    }

    let report = CaptureReport {
        captured: validated.captures().clone(),
    };
    debug!(captured = report.captured.len(), "Capture resolved");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gess::rules::validate;
    use crate::games::gess::{Capture, Coord, Direction, Player};

    fn place(grid: &mut Grid, player: Player, coords: &[(i32, i32)]) {
        for &(r, c) in coords {
            grid.set(Coord::new(r, c), Cell::Stone(player)).unwrap();
        }
    }

    #[test]
    fn test_landing_window_is_cleared_outside_pattern() {
        let mut grid = Grid::empty();
        // Centered piece with a single N stone.
        place(&mut grid, Player::Black, &[(5, 5), (6, 5)]);
        // Leading edge of the landing window after a 3-cell slide: one cell
        // on the axis, one off it.
        place(&mut grid, Player::White, &[(9, 5), (9, 6)]);

        let validated = validate(&grid, Player::Black, Coord::new(5, 5), Direction::N, 3).unwrap();
        let report = apply(&mut grid, &validated);

        assert_eq!(grid.get(Coord::new(9, 6)), Cell::Empty);
        assert_eq!(grid.get(Coord::new(9, 5)), Cell::Stone(Player::Black));
        assert_eq!(grid.get(Coord::new(8, 5)), Cell::Stone(Player::Black));
        assert_eq!(grid.get(Coord::new(5, 5)), Cell::Empty);
        assert_eq!(grid.get(Coord::new(6, 5)), Cell::Empty);
        assert_eq!(report.count(Player::White), 2);
        assert!(report.captured.contains(&Capture {
            coord: Coord::new(9, 6),
            player: Player::White
        }));
    }

    #[test]
    fn test_own_stones_in_landing_window_are_removed() {
        let mut grid = Grid::empty();
        place(&mut grid, Player::White, &[(10, 10), (8, 8), (7, 6)]);

        let validated = validate(&grid, Player::White, Coord::new(9, 9), Direction::SW, 2).unwrap();
        let report = apply(&mut grid, &validated);

        assert_eq!(
            report.captured,
            vec![Capture {
                coord: Coord::new(7, 6),
                player: Player::White
            }]
        );
        assert_eq!(grid.stone_count(Player::White), 2);
        assert_eq!(grid.get(Coord::new(8, 8)), Cell::Stone(Player::White));
        assert_eq!(grid.get(Coord::new(6, 6)), Cell::Stone(Player::White));
    }

    #[test]
    fn test_overlapping_short_move_keeps_piece_intact() {
        let mut grid = Grid::empty();
        place(&mut grid, Player::Black, &[(8, 8), (8, 9), (8, 10), (10, 9)]);

        let validated = validate(&grid, Player::Black, Coord::new(9, 9), Direction::N, 1).unwrap();
        let report = apply(&mut grid, &validated);

        assert!(report.is_empty());
        for (r, c) in [(9, 8), (9, 9), (9, 10), (11, 9)] {
            assert_eq!(grid.get(Coord::new(r, c)), Cell::Stone(Player::Black));
        }
        assert_eq!(grid.stone_count(Player::Black), 4);
        assert_eq!(grid.get(Coord::new(8, 9)), Cell::Empty);
    }

    #[test]
    fn test_no_stone_lands_in_border() {
        let mut grid = Grid::empty();
        place(&mut grid, Player::Black, &[(16, 4), (17, 4), (17, 5)]);

        let validated = validate(&grid, Player::Black, Coord::new(16, 4), Direction::N, 1).unwrap();
        apply(&mut grid, &validated);
        assert!(grid.border_is_clear());
        assert_eq!(grid.get(Coord::new(18, 5)), Cell::Stone(Player::Black));
    }
}
