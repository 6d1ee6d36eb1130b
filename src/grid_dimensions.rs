use rand::Rng;

use crate::cells::Cell;
use crate::units::{CellPixels, ColumnsCount, Height, RowsCount, Width};


/// The extent of a rectangular grid. Both sides are at least one cell long.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridDimensions {
    columns: ColumnsCount,
    rows: RowsCount,
}

impl GridDimensions {
    /// Returns None when either side is zero or a coordinate would not fit in a `u32`.
    pub fn new(columns: ColumnsCount, rows: RowsCount) -> Option<GridDimensions> {
        let fits = |n: usize| n > 0 && n <= u32::MAX as usize;
        if fits(columns.0) && fits(rows.0) && columns.0.checked_mul(rows.0).is_some() {
            Some(GridDimensions { columns, rows })
        } else {
            None
        }
    }

    /// How many whole cells of `cell_pixels` fit in a display area.
    pub fn from_display_area(width: Width,
                             height: Height,
                             cell_pixels: CellPixels)
                             -> Option<GridDimensions> {
        if cell_pixels.0 == 0 {
            return None;
        }
        GridDimensions::new(ColumnsCount(width.0 / cell_pixels.0),
                            RowsCount(height.0 / cell_pixels.0))
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.columns.0 * self.rows.0
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        (cell.column as usize) < self.columns.0 && (cell.row as usize) < self.rows.0
    }

    /// Row major index of a cell, None outside the grid.
    #[inline]
    pub fn cell_to_index(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row as usize * self.columns.0 + cell.column as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_cell(&self, index: usize) -> Cell {
        let column = index % self.columns.0;
        let row = index / self.columns.0;
        Cell::new(column as u32, row as u32)
    }

    /// Uniform sample over the whole grid, column drawn first.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        let column = rng.gen_range(0..self.columns.0);
        let row = rng.gen_range(0..self.rows.0);
        Cell::new(column as u32, row as u32)
    }
}
