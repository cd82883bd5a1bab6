//! The 10×10 grid: positions, directions, and the cell-number rules that
//! drive treasure relocation.
//!
//! ## Layout
//!
//! Cells are numbered 0..=99 in row-major order:
//!
//! ```text
//! row = position / 10
//! col = position % 10
//! ```
//!
//! Moving Up/Down shifts by a full row (±10), Left/Right by a single cell
//! (±1). A move that would cross the outer boundary — or wrap a row edge —
//! is invalid.

use serde::{Deserialize, Serialize};

/// Grid side length.
pub const GRID_SIZE: u8 = 10;

/// Total number of cells.
pub const GRID_CELLS: u8 = GRID_SIZE * GRID_SIZE;

/// A cell on the grid, in `0..=99`.
///
/// Construction is checked; a `Position` always holds a valid cell.
///
/// ```
/// use treasure_hunt::core::Position;
///
/// let pos = Position::new(55).unwrap();
/// assert_eq!(pos.row(), 5);
/// assert_eq!(pos.col(), 5);
/// assert!(Position::new(100).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position(u8);

impl Position {
    /// Create a position, returning `None` if `cell` is off the grid.
    #[must_use]
    pub const fn new(cell: u8) -> Option<Self> {
        if cell < GRID_CELLS {
            Some(Self(cell))
        } else {
            None
        }
    }

    /// Map an arbitrary value onto the grid by modulo.
    ///
    /// Total by construction; used to reduce random draws to a cell.
    #[must_use]
    pub const fn from_modulo(value: u32) -> Self {
        Self((value % GRID_CELLS as u32) as u8)
    }

    /// Raw cell number.
    #[must_use]
    pub const fn cell(self) -> u8 {
        self.0
    }

    /// Row index (0 = top).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / GRID_SIZE
    }

    /// Column index (0 = left).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % GRID_SIZE
    }

    /// Apply a direction, returning the destination cell.
    ///
    /// Returns `None` when the move would cross a grid or row boundary:
    /// Up from row 0, Down from row 9, Left from column 0, Right from
    /// column 9.
    ///
    /// ```
    /// use treasure_hunt::core::{Direction, Position};
    ///
    /// let center = Position::new(55).unwrap();
    /// assert_eq!(center.step(Direction::Up), Position::new(45));
    ///
    /// let corner = Position::new(0).unwrap();
    /// assert_eq!(corner.step(Direction::Up), None);
    /// assert_eq!(corner.step(Direction::Left), None);
    /// ```
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => {
                if self.row() == 0 {
                    None
                } else {
                    Some(Self(self.0 - GRID_SIZE))
                }
            }
            Direction::Down => {
                if self.row() == GRID_SIZE - 1 {
                    None
                } else {
                    Some(Self(self.0 + GRID_SIZE))
                }
            }
            Direction::Left => {
                if self.col() == 0 {
                    None
                } else {
                    Some(Self(self.0 - 1))
                }
            }
            Direction::Right => {
                if self.col() == GRID_SIZE - 1 {
                    None
                } else {
                    Some(Self(self.0 + 1))
                }
            }
        }
    }

    /// Whether the cell number is divisible by 5. Cell 0 counts.
    #[must_use]
    pub const fn divisible_by_five(self) -> bool {
        self.0 % 5 == 0
    }

    /// Whether the cell number is prime (2, 3, 5, 7, ..., 97).
    ///
    /// 0 and 1 are not prime.
    #[must_use]
    pub const fn is_prime(self) -> bool {
        let n = self.0 as u16;
        if n < 2 {
            return false;
        }
        if n % 2 == 0 {
            return n == 2;
        }
        let mut d = 3u16;
        while d * d <= n {
            if n % d == 0 {
                return false;
            }
            d += 2;
        }
        true
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Movement direction, with the contract's wire encoding 0/1/2/3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in wire order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Decode from the wire value used by the contract interface.
    ///
    /// ```
    /// use treasure_hunt::core::Direction;
    ///
    /// assert_eq!(Direction::from_wire(0), Some(Direction::Up));
    /// assert_eq!(Direction::from_wire(3), Some(Direction::Right));
    /// assert_eq!(Direction::from_wire(4), None);
    /// ```
    #[must_use]
    pub const fn from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Encode to the wire value.
    #[must_use]
    pub const fn wire(self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Signed cell delta for a valid application of this direction.
    #[must_use]
    pub const fn delta(self) -> i8 {
        match self {
            Direction::Up => -(GRID_SIZE as i8),
            Direction::Down => GRID_SIZE as i8,
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{name}")
    }
}
