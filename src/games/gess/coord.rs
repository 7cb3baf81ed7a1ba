//! Board coordinates, compass directions and algebraic notation.
//!
//! Rows grow towards White's home edge (north), columns grow east.
//! Notation is `<column letter><row number>`, both 1-based on the
//! printed board: `a1` is the south-west corner, `t20` the north-east.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use tracing::instrument;

/// Width and height of the full grid, border included.
pub const BOARD_SIZE: i32 = 20;

/// Lowest row/column index of the playable interior.
pub const INTERIOR_MIN: i32 = 1;

/// Highest row/column index of the playable interior.
pub const INTERIOR_MAX: i32 = BOARD_SIZE - 2;

const COLUMN_LETTERS: &[u8; BOARD_SIZE as usize] = b"abcdefghijklmnopqrst";

/// A (row, column) location on the grid, 0-based.
///
/// Coordinates are signed so that translations off the board can be
/// represented and rejected instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (0 = Black's edge).
    pub row: i32,
    /// Column index (0 = column `a`).
    pub col: i32,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Checks if the coordinate lies inside the allocated 20×20 array.
    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Checks if the coordinate lies inside the playable 18×18 interior.
    pub fn is_playable(self) -> bool {
        (INTERIOR_MIN..=INTERIOR_MAX).contains(&self.row)
            && (INTERIOR_MIN..=INTERIOR_MAX).contains(&self.col)
    }

    /// Returns the coordinate `distance` steps away in `direction`.
    /// Saturates at the `i32` range instead of overflowing.
    pub fn step(self, direction: Direction, distance: i32) -> Self {
        let (dr, dc) = direction.offset();
        Self::new(
            self.row.saturating_add(dr.saturating_mul(distance)),
            self.col.saturating_add(dc.saturating_mul(distance)),
        )
    }

    /// The nine coordinates of the 3×3 window centered here, row-major.
    pub fn window(self) -> [Coord; 9] {
        let mut cells = [self; 9];
        for (i, cell) in cells.iter_mut().enumerate() {
            let dr = i as i32 / 3 - 1;
            let dc = i as i32 % 3 - 1;
            *cell = self + (dr, dc);
        }
        cells
    }
}

impl Add<(i32, i32)> for Coord {
    type Output = Coord;

    fn add(self, (dr, dc): (i32, i32)) -> Self::Output {
        Coord::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match usize::try_from(self.col).ok().and_then(|c| COLUMN_LETTERS.get(c)) {
            Some(&letter) if (0..BOARD_SIZE).contains(&self.row) => {
                write!(f, "{}{}", letter as char, self.row + 1)
            }
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Error parsing algebraic notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CoordError {
    /// The column letter is not in `a..=t`.
    #[display("Invalid column in {:?} (expected a-t)", _0)]
    Column(String),

    /// The row number is missing, not a number, or not in `1..=20`.
    #[display("Invalid row in {:?} (expected 1-20)", _0)]
    Row(String),
}

impl std::error::Error for CoordError {}

impl FromStr for Coord {
    type Err = CoordError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars
            .next()
            .map(|c| c.to_ascii_lowercase())
            .ok_or_else(|| CoordError::Column(s.to_string()))?;
        let col = COLUMN_LETTERS
            .iter()
            .position(|&l| l as char == letter)
            .ok_or_else(|| CoordError::Column(s.to_string()))?;
        let row: i32 = chars
            .as_str()
            .parse()
            .map_err(|_| CoordError::Row(s.to_string()))?;
        if !(1..=BOARD_SIZE).contains(&row) {
            return Err(CoordError::Row(s.to_string()));
        }
        Ok(Coord::new(row - 1, col as i32))
    }
}

/// One of the eight compass directions a piece can slide in.
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
    strum::EnumString,
    strum::Display,
)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum Direction {
    /// Towards White's edge.
    N,
    /// North-east.
    NE,
    /// Increasing column.
    E,
    /// South-east.
    SE,
    /// Towards Black's edge.
    S,
    /// South-west.
    SW,
    /// Decreasing column.
    W,
    /// North-west.
    NW,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Unit (row, column) step for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::N => (1, 0),
            Direction::NE => (1, 1),
            Direction::E => (0, 1),
            Direction::SE => (-1, 1),
            Direction::S => (-1, 0),
            Direction::SW => (-1, -1),
            Direction::W => (0, -1),
            Direction::NW => (1, -1),
        }
    }

    /// Direction whose unit step is `(dr, dc)`, if any.
    pub fn from_offset(dr: i32, dc: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.offset() == (dr, dc))
    }

    /// Bit assigned to this direction in a ring bitmask.
    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        let (dr, dc) = self.offset();
        // Every offset has its negation in the table.
        Self::from_offset(-dr, -dc).unwrap_or(self)
    }
}
