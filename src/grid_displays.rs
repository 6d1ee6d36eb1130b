use std::fmt;

use crate::cells::Cell;
use crate::grid::GridState;
use crate::utils::FnvHashSet;

const WALL_BODY: &str = "██";
const PASSAGE_BODY: &str = "  ";

/// Something that wants to show its own content inside some cells of a text render.
pub trait GridDisplay {
    /// Two glyphs for the cell body, or None to fall back to the plain wall/passage look.
    fn render_cell_body(&self, cell: Cell) -> Option<String>;
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_cells: FnvHashSet<Cell>,
}
impl PathDisplay {
    pub fn new(path: &[Cell]) -> Self {
        PathDisplay { on_path_cells: path.iter().cloned().collect() }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, cell: Cell) -> Option<String> {
        if self.on_path_cells.contains(&cell) {
            Some(String::from("··"))
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start: Cell,
    end: Option<Cell>,
}
impl StartEndPointsDisplay {
    pub fn new(start: Cell, end: Option<Cell>) -> StartEndPointsDisplay {
        StartEndPointsDisplay { start, end }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, cell: Cell) -> Option<String> {
        if cell == self.start {
            Some(String::from("S "))
        } else if Some(cell) == self.end {
            Some(String::from("E "))
        } else {
            None
        }
    }
}

/// A text rendering of a grid with overlays. The first overlay with something to
/// say about a cell wins.
pub struct GridView<'a> {
    grid: &'a GridState,
    displays: Vec<&'a dyn GridDisplay>,
}

impl GridState {
    pub fn view<'a>(&'a self, displays: &[&'a dyn GridDisplay]) -> GridView<'a> {
        GridView {
            grid: self,
            displays: displays.to_vec(),
        }
    }
}

impl<'a> fmt::Display for GridView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.grid.iter_row() {
            let mut line = String::with_capacity(row.len() * WALL_BODY.len());
            for cell in row {
                let overlay = self.displays
                    .iter()
                    .filter_map(|display| display.render_cell_body(cell))
                    .next();
                match overlay {
                    Some(body) => line.push_str(&body),
                    None if self.grid.is_open(cell) => line.push_str(PASSAGE_BODY),
                    None => line.push_str(WALL_BODY),
                }
            }
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.view(&[]))
    }
}
