//! Grid storage for the 20×20 Gess board.
//!
//! The grid is dumb storage: it knows which cells hold which stones and
//! refuses writes into the border, nothing more. Rules live in
//! [`super::rules`].

use super::coord::{BOARD_SIZE, Coord};
use super::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

const SIZE: usize = BOARD_SIZE as usize;

/// Number of stones each player starts with.
pub const STARTING_STONES: usize = 43;

const FIRST_RANK: &[i32] = &[2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 15, 17];
const SECOND_RANK: &[i32] = &[1, 2, 3, 5, 7, 8, 9, 10, 12, 14, 16, 17, 18];
const FOURTH_RANK: &[i32] = &[2, 5, 8, 11, 14, 17];

/// Error raised by grid storage.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GridError {
    /// Write outside the playable interior.
    #[display("Cell {} is outside the playable interior", _0)]
    OutOfBounds(Coord),

    /// A serialized grid has the wrong shape.
    #[display("Grid must be {}x{}, got {} rows", BOARD_SIZE, BOARD_SIZE, rows)]
    Dimensions {
        /// Number of rows found.
        rows: usize,
    },

    /// A serialized grid has a stone in the border.
    #[display("Border cell {} is occupied", _0)]
    BorderOccupied(Coord),
}

impl std::error::Error for GridError {}

/// The 20×20 Gess board, border included.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
}

impl Grid {
    /// Creates a grid with no stones.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Creates a grid with the standard starting layout.
    #[instrument]
    pub fn standard() -> Self {
        let mut grid = Self::empty();
        let layout: [(i32, &[i32]); 4] = [
            (1, FIRST_RANK),
            (2, SECOND_RANK),
            (3, FIRST_RANK),
            (6, FOURTH_RANK),
        ];
        for (rank, columns) in layout {
            for &col in columns {
                grid.put(Coord::new(rank, col), Cell::Stone(Player::Black));
                grid.put(
                    Coord::new(BOARD_SIZE - 1 - rank, col),
                    Cell::Stone(Player::White),
                );
            }
        }
        grid
    }

    /// Gets the cell at `coord`. Cells off the allocated array read as empty.
    pub fn get(&self, coord: Coord) -> Cell {
        if !coord.in_bounds() {
            return Cell::Empty;
        }
        self.cells[coord.row as usize][coord.col as usize]
    }

    /// Sets the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` is not in the playable
    /// interior. The border can only ever hold [`Cell::Empty`].
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), GridError> {
        if !coord.is_playable() {
            return Err(GridError::OutOfBounds(coord));
        }
        self.put(coord, cell);
        Ok(())
    }

    /// Checks if `coord` addresses a cell of the allocated array.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.in_bounds()
    }

    /// Returns an owned copy for read-only consumers.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    /// Counts the stones owned by `player`.
    pub fn stone_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_owned_by(player))
            .count()
    }

    /// Iterates every occupied cell in row-major order.
    pub fn stones(&self) -> impl Iterator<Item = (Coord, Player)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| {
                cell.owner()
                    .map(|player| (Coord::new(r as i32, c as i32), player))
            })
        })
    }

    /// Returns the cells as rows, south to north.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Checks that no stone sits in the border.
    pub fn border_is_clear(&self) -> bool {
        self.stones().all(|(coord, _)| coord.is_playable())
    }

    /// Unchecked write; callers guarantee `coord` is in bounds.
    fn put(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row as usize][coord.col as usize] = cell;
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        if rows.len() != SIZE || rows.iter().any(|row| row.len() != SIZE) {
            return Err(GridError::Dimensions { rows: rows.len() });
        }
        let mut grid = Grid::empty();
        for (r, row) in rows.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                let coord = Coord::new(r as i32, c as i32);
                if cell.is_occupied() && !coord.is_playable() {
                    return Err(GridError::BorderOccupied(coord));
                }
                grid.put(coord, cell);
            }
        }
        Ok(grid)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.cells.iter().map(|row| row.to_vec()).collect()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("black", &self.stone_count(Player::Black))
            .field("white", &self.stone_count(Player::White))
            .finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: String = (0..BOARD_SIZE)
            .map(|c| {
                let letter = Coord::new(0, c).to_string();
                format!(" {}", &letter[..1])
            })
            .collect();
        writeln!(f, "   {}", header)?;
        for row in (0..SIZE).rev() {
            write!(f, "{:>2} ", row + 1)?;
            for cell in &self.cells[row] {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f, " {:<2}", row + 1)?;
        }
        write!(f, "   {}", header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_stone_counts() {
        let grid = Grid::standard();
        assert_eq!(grid.stone_count(Player::Black), STARTING_STONES);
        assert_eq!(grid.stone_count(Player::White), STARTING_STONES);
        assert!(grid.border_is_clear());
    }

    #[test]
    fn test_standard_layout_is_mirrored() {
        let grid = Grid::standard();
        for (coord, player) in grid.stones() {
            let mirror = Coord::new(BOARD_SIZE - 1 - coord.row, coord.col);
            assert_eq!(grid.get(mirror), Cell::Stone(player.opponent()));
        }
    }

    #[test]
    fn test_set_rejects_border() {
        let mut grid = Grid::empty();
        let border = Coord::new(0, 7);
        assert_eq!(
            grid.set(border, Cell::Stone(Player::Black)),
            Err(GridError::OutOfBounds(border))
        );
        assert_eq!(grid.get(border), Cell::Empty);
        assert!(grid.set(Coord::new(1, 7), Cell::Stone(Player::Black)).is_ok());
    }

    #[test]
    fn test_get_off_array_reads_empty() {
        let grid = Grid::standard();
        assert_eq!(grid.get(Coord::new(-3, 40)), Cell::Empty);
        assert!(!grid.in_bounds(Coord::new(20, 0)));
    }

    #[test]
    fn test_snapshot_is_independent_copy() {
        let mut grid = Grid::standard();
        let snapshot = grid.snapshot();
        grid.set(Coord::new(9, 9), Cell::Stone(Player::White)).unwrap();
        assert_ne!(grid, snapshot);
        assert_eq!(snapshot.get(Coord::new(9, 9)), Cell::Empty);
    }

    #[test]
    fn test_try_from_rejects_border_stone() {
        let mut rows: Vec<Vec<Cell>> = Grid::empty().into();
        rows[19][3] = Cell::Stone(Player::White);
        assert_eq!(
            Grid::try_from(rows),
            Err(GridError::BorderOccupied(Coord::new(19, 3)))
        );
    }

    #[test]
    fn test_try_from_rejects_wrong_shape() {
        let rows = vec![vec![Cell::Empty; 20]; 19];
        assert_eq!(Grid::try_from(rows), Err(GridError::Dimensions { rows: 19 }));
    }

    #[test]
    fn test_display_labels_rows_and_columns() {
        let text = Grid::standard().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 22);
        assert!(lines[0].contains('a') && lines[0].contains('t'));
        assert!(lines[1].trim_start().starts_with("20"));
        assert!(lines[20].trim_start().starts_with('1'));
    }
}
