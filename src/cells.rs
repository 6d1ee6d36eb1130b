use std::convert::From;
use std::fmt;

/// A grid position. A cell is either a passage or a wall, the `GridState` knows which.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cell {
    pub column: u32,
    pub row: u32,
}

impl Cell {
    pub fn new(column: u32, row: u32) -> Cell {
        Cell { column, row }
    }

    /// Creates a new `Cell` offset `steps` cells away in the given direction.
    /// Returns None if the result would have a negative coordinate or does
    /// not fit in a `u32`. No grid bounds are checked here.
    pub fn offset(self, direction: Direction, steps: u32) -> Option<Cell> {
        let (dx, dy) = direction.vector();
        let steps = i64::from(steps);
        let column = i64::from(self.column) + dx * steps;
        let row = i64::from(self.row) + dy * steps;

        if column < 0 || row < 0 || column > i64::from(u32::MAX) || row > i64::from(u32::MAX) {
            None
        } else {
            Some(Cell::new(column as u32, row as u32))
        }
    }

    /// Are the two cells next to each other along one axis?
    pub fn is_adjacent(self, other: Cell) -> bool {
        let column_gap = (i64::from(self.column) - i64::from(other.column)).abs();
        let row_gap = (i64::from(self.row) - i64::from(other.row)).abs();
        column_gap + row_gap == 1
    }
}

impl From<(u32, u32)> for Cell {
    fn from(column_row_pair: (u32, u32)) -> Cell {
        Cell::new(column_row_pair.0, column_row_pair.1)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Direction {
    Down,
    Up,
    Left,
    Right,
}

impl Direction {
    /// Every direction in the order carving and searching visit them.
    /// Changing this order changes every maze produced from a given seed.
    pub const ALL: [Direction; 4] = [Direction::Down, Direction::Up, Direction::Left, Direction::Right];

    /// Unit vector as (column delta, row delta). Rows grow downwards.
    #[inline]
    pub fn vector(self) -> (i64, i64) {
        match self {
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
