use bit_set::BitSet;

use crate::cells::{Cell, Direction};
use crate::grid_dimensions::GridDimensions;
use crate::grid_iterators::{CellIter, RowIter};
use crate::units::{ColumnsCount, RowsCount};


/// The open/wall matrix of a maze. A set bit is a passage, everything else is wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    dimensions: GridDimensions,
    open: BitSet,
}

impl GridState {
    /// A solid block of wall.
    pub fn new(dimensions: GridDimensions) -> GridState {
        GridState {
            dimensions,
            open: BitSet::with_capacity(dimensions.size()),
        }
    }

    /// Turn every cell back into wall.
    pub fn reset(&mut self) {
        self.open.clear();
    }

    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.dimensions.columns()
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size()
    }

    /// Is the cell within the grid's dimensions
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.dimensions.contains(cell)
    }

    /// Is the cell a passage?
    ///
    /// Panics if the cell is outside the grid. Callers check `contains` first.
    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.open.contains(self.index_of(cell))
    }

    /// Make the cell a passage. Returns true if it was a wall before.
    ///
    /// Panics if the cell is outside the grid.
    #[inline]
    pub fn open(&mut self, cell: Cell) -> bool {
        let index = self.index_of(cell);
        self.open.insert(index)
    }

    /// The cell `steps` cells away in `direction`, if that is still on the grid.
    pub fn neighbour_at_direction(&self,
                                  cell: Cell,
                                  direction: Direction,
                                  steps: u32)
                                  -> Option<Cell> {
        cell.offset(direction, steps).filter(|c| self.contains(*c))
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.dimensions)
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(self.dimensions)
    }

    /// Open cells in row major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let dimensions = self.dimensions;
        self.open.iter().map(move |index| dimensions.index_to_cell(index))
    }

    #[inline]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    fn index_of(&self, cell: Cell) -> usize {
        assert!(self.contains(cell),
                "cell {} lies outside the {}x{} grid",
                cell,
                self.columns().0,
                self.rows().0);
        cell.row as usize * self.columns().0 + cell.column as usize
    }
}
