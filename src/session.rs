use std::error::Error;
use std::fmt;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::cells::Cell;
use crate::events::{ColourTag, DrawEvent};
use crate::generators;
use crate::grid::GridState;
use crate::grid_dimensions::GridDimensions;
use crate::pathing;


/// Why `MazeSession::solve` produced no path. Neither is a fault: the caller
/// reports them to the user and carries on.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum SolveError {
    NoEndCellConfigured,
    NoPathFound,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SolveError::NoEndCellConfigured => write!(f, "no end cell has been chosen"),
            SolveError::NoPathFound => write!(f, "no path from the start to the end cell"),
        }
    }
}

impl Error for SolveError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Start to end, inclusive.
    pub path: Vec<Cell>,
    pub events: Vec<DrawEvent>,
}

/// One maze and everything needed to build and solve it: the grid, the start and
/// end cells and the random source. Seeding the random source makes every
/// generation pass replayable.
#[derive(Debug)]
pub struct MazeSession<R: Rng = XorShiftRng> {
    grid: GridState,
    start: Cell,
    end: Option<Cell>,
    rng: R,
}

impl MazeSession<XorShiftRng> {
    pub fn from_seed(dimensions: GridDimensions, seed: u64) -> MazeSession<XorShiftRng> {
        MazeSession::new(dimensions, XorShiftRng::seed_from_u64(seed))
    }

    pub fn from_entropy(dimensions: GridDimensions) -> MazeSession<XorShiftRng> {
        MazeSession::new(dimensions, XorShiftRng::from_entropy())
    }
}

impl<R: Rng> MazeSession<R> {
    /// A wall filled grid with a freshly sampled start cell.
    pub fn new(dimensions: GridDimensions, mut rng: R) -> MazeSession<R> {
        let start = dimensions.random_cell(&mut rng);
        debug!("new {}x{} maze, start cell {}",
               dimensions.columns().0,
               dimensions.rows().0,
               start);
        MazeSession {
            grid: GridState::new(dimensions),
            start,
            end: None,
            rng,
        }
    }

    /// Throw the maze away: every cell becomes wall again, the end cell is cleared
    /// and a new start cell is sampled over the new dimensions.
    pub fn reset(&mut self, dimensions: GridDimensions) {
        if dimensions == self.grid.dimensions() {
            self.grid.reset();
        } else {
            self.grid = GridState::new(dimensions);
        }
        self.end = None;
        self.start = dimensions.random_cell(&mut self.rng);
        debug!("reset to {}x{}, start cell {}",
               dimensions.columns().0,
               dimensions.rows().0,
               self.start);
    }

    #[inline]
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.grid.dimensions()
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Cell> {
        self.end
    }

    /// Carve the maze, collecting the draw events.
    pub fn generate(&mut self) -> Vec<DrawEvent> {
        let mut events = Vec::with_capacity(self.grid.size() * 2);
        self.generate_with(|event| events.push(event));
        events
    }

    /// Carve the maze, handing each draw event to `on_draw` as it happens.
    pub fn generate_with<F: FnMut(DrawEvent)>(&mut self, on_draw: F) {
        info!("generating maze from {}", self.start);
        generators::recursive_backtracker(&mut self.grid, self.start, &mut self.rng, on_draw);
        info!("maze generated, {} of {} cells open",
              self.grid.open_count(),
              self.grid.size());
    }

    /// Choose the end cell. Only passages are accepted, anything else (walls and
    /// cells off the grid) is ignored and leaves the current end cell in place.
    pub fn set_end(&mut self, cell: Cell) -> bool {
        if self.grid.contains(cell) && self.grid.is_open(cell) {
            self.end = Some(cell);
            debug!("end cell set to {}", cell);
            true
        } else {
            debug!("ignoring end cell {}: not a passage", cell);
            false
        }
    }

    /// A uniformly chosen passage, None before anything has been carved.
    pub fn random_open_cell(&mut self) -> Option<Cell> {
        let open_count = self.grid.open_count();
        if open_count == 0 {
            return None;
        }
        let pick = self.rng.gen_range(0..open_count);
        self.grid.open_cells().nth(pick)
    }

    /// Search for a path from the start to the end cell.
    ///
    /// On success the events mark every path cell, then the start and the end.
    pub fn solve(&self) -> Result<Solution, SolveError> {
        let end = match self.end {
            Some(end) => end,
            None => {
                info!("no end cell chosen, nothing to solve");
                return Err(SolveError::NoEndCellConfigured);
            }
        };

        info!("searching for a path from {} to {}", self.start, end);
        match pathing::dfs_path(&self.grid, self.start, end) {
            Some(path) => {
                info!("path found, {} cells long", path.len());
                let mut events = path.iter()
                    .map(|&cell| DrawEvent::new(cell, ColourTag::PathMarker))
                    .collect::<Vec<_>>();
                events.push(DrawEvent::new(self.start, ColourTag::HighlightStart));
                events.push(DrawEvent::new(end, ColourTag::HighlightEnd));
                Ok(Solution { path, events })
            }
            None => {
                info!("no path from {} to {}", self.start, end);
                Err(SolveError::NoPathFound)
            }
        }
    }
}
