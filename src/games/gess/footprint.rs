//! Footprints: the 3×3 window that forms a movable piece.
//!
//! A footprint is derived from the grid on demand and never stored, so it
//! can never disagree with the cells it was read from.

use super::action::MoveError;
use super::coord::{Coord, Direction};
use super::grid::Grid;
use super::types::{Cell, Player};
use tracing::instrument;

/// Eight-bit set of ring cells, one bit per [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RingMask(u8);

impl RingMask {
    /// Mask with every ring cell set.
    pub const FULL: RingMask = RingMask(0xFF);

    /// Wraps raw bits.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw bits.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Checks if the ring cell in `direction` is set.
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Checks if no ring cell is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of ring cells set.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Directions whose ring cell is set, clockwise from north.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }
}

impl FromIterator<Direction> for RingMask {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut mask = RingMask::default();
        for direction in iter {
            mask.insert(direction);
        }
        mask
    }
}

/// The 3×3 neighbourhood of a center, read from the perspective of one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footprint {
    center: Coord,
    player: Player,
    cells: [Cell; 9],
    owned: RingMask,
    opponent: RingMask,
    centered: bool,
}

impl Footprint {
    /// Reads the footprint centered at `center` for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if any cell of the window falls
    /// outside the allocated grid.
    #[instrument(skip(grid))]
    pub fn extract(grid: &Grid, center: Coord, player: Player) -> Result<Self, MoveError> {
        let window = center.window();
        if let Some(outside) = window.iter().find(|c| !grid.in_bounds(**c)) {
            return Err(MoveError::OutOfBounds(*outside));
        }

        let cells = window.map(|coord| grid.get(coord));
        let mut owned = RingMask::default();
        let mut opponent = RingMask::default();
        for direction in Direction::ALL {
            match grid.get(center.step(direction, 1)).owner() {
                Some(p) if p == player => owned.insert(direction),
                Some(_) => opponent.insert(direction),
                None => {}
            }
        }

        Ok(Self {
            center,
            player,
            cells,
            owned,
            opponent,
            centered: grid.get(center).is_occupied(),
        })
    }

    /// The center coordinate.
    pub fn center(&self) -> Coord {
        self.center
    }

    /// The player this footprint was read for.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Ring cells holding `player`'s stones.
    pub fn owned(&self) -> RingMask {
        self.owned
    }

    /// Ring cells holding the opponent's stones.
    pub fn opponent(&self) -> RingMask {
        self.opponent
    }

    /// Whether the center cell holds a stone.
    pub fn centered(&self) -> bool {
        self.centered
    }

    /// The center cell.
    pub fn center_cell(&self) -> Cell {
        self.cells[4]
    }

    /// Directions this shape allows.
    pub fn directions(&self) -> impl Iterator<Item = Direction> {
        self.owned.directions()
    }

    /// The nine (coordinate, cell) pairs, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.center.window().into_iter().zip(self.cells)
    }

    /// Occupied cells of the window.
    pub fn stones(&self) -> impl Iterator<Item = (Coord, Player)> + '_ {
        self.cells()
            .filter_map(|(coord, cell)| cell.owner().map(|p| (coord, p)))
    }

    /// First cell holding a stone of the opponent, center included.
    pub fn first_foreign_stone(&self) -> Option<Coord> {
        self.stones()
            .find(|(_, p)| *p != self.player)
            .map(|(coord, _)| coord)
    }

    /// Checks if this is an intact ring for its player: hollow center, full ring.
    pub fn is_ring(&self) -> bool {
        self.center_cell() == Cell::Empty && self.owned == RingMask::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black(grid: &mut Grid, coords: &[(i32, i32)]) {
        for &(r, c) in coords {
            grid.set(Coord::new(r, c), Cell::Stone(Player::Black)).unwrap();
        }
    }

    #[test]
    fn test_masks_follow_occupancy() {
        let mut grid = Grid::empty();
        black(&mut grid, &[(6, 5), (5, 6)]);
        grid.set(Coord::new(4, 4), Cell::Stone(Player::White)).unwrap();

        let fp = Footprint::extract(&grid, Coord::new(5, 5), Player::Black).unwrap();
        assert!(fp.owned().contains(Direction::N));
        assert!(fp.owned().contains(Direction::E));
        assert_eq!(fp.owned().count(), 2);
        assert!(fp.opponent().contains(Direction::SW));
        assert!(!fp.centered());
        assert_eq!(fp.first_foreign_stone(), Some(Coord::new(4, 4)));
    }

    #[test]
    fn test_centered_flag() {
        let mut grid = Grid::empty();
        black(&mut grid, &[(5, 5), (6, 5)]);
        let fp = Footprint::extract(&grid, Coord::new(5, 5), Player::Black).unwrap();
        assert!(fp.centered());
        assert_eq!(fp.directions().collect::<Vec<_>>(), vec![Direction::N]);
    }

    #[test]
    fn test_window_must_fit_array() {
        let grid = Grid::standard();
        assert!(Footprint::extract(&grid, Coord::new(1, 1), Player::Black).is_ok());
        assert!(Footprint::extract(&grid, Coord::new(18, 18), Player::White).is_ok());
        assert!(matches!(
            Footprint::extract(&grid, Coord::new(0, 5), Player::Black),
            Err(MoveError::OutOfBounds(_))
        ));
        assert!(matches!(
            Footprint::extract(&grid, Coord::new(7, 19), Player::Black),
            Err(MoveError::OutOfBounds(_))
        ));
    }

    #[test]
    fn test_starting_ring_is_detected() {
        let grid = Grid::standard();
        let fp = Footprint::extract(&grid, Coord::new(2, 11), Player::Black).unwrap();
        assert!(fp.is_ring());
        let fp = Footprint::extract(&grid, Coord::new(17, 11), Player::White).unwrap();
        assert!(fp.is_ring());
    }

    #[test]
    fn test_mask_from_directions() {
        let mask: RingMask = [Direction::N, Direction::S].into_iter().collect();
        assert_eq!(mask.bits(), Direction::N.bit() | Direction::S.bit());
        assert_eq!(
            mask.directions().collect::<Vec<_>>(),
            vec![Direction::N, Direction::S]
        );
    }
}
