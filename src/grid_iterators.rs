use std::fmt;

use crate::cells::Cell;
use crate::grid_dimensions::GridDimensions;

/// Row major walk over every cell of a grid.
#[derive(Clone)]
pub struct CellIter {
    dimensions: GridDimensions,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub fn new(dimensions: GridDimensions) -> CellIter {
        CellIter {
            dimensions,
            current_cell_number: 0,
            cells_count: dimensions.size(),
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let cell = self.dimensions.index_to_cell(self.current_cell_number);
            self.current_cell_number += 1;
            Some(cell)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Walks a grid one row at a time, top row first.
#[derive(Debug, Clone)]
pub struct RowIter {
    dimensions: GridDimensions,
    current_row: usize,
}

impl RowIter {
    pub fn new(dimensions: GridDimensions) -> RowIter {
        RowIter {
            dimensions,
            current_row: 0,
        }
    }
}

impl Iterator for RowIter {
    type Item = Vec<Cell>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row < self.dimensions.rows().0 {
            let row = self.current_row as u32;
            let cells = (0..self.dimensions.columns().0)
                .map(|column| Cell::new(column as u32, row))
                .collect();
            self.current_row += 1;
            Some(cells)
        } else {
            None
        }
    }
}
