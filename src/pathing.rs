use crate::cells::{Cell, Direction};
use crate::grid::GridState;
use crate::utils;

// One step of the search: a cell on the current path and the next direction
// still to be tried from it.
#[derive(Debug, Copy, Clone)]
struct Frame {
    cell: Cell,
    next_direction: usize,
}

impl Frame {
    fn new(cell: Cell) -> Frame {
        Frame { cell, next_direction: 0 }
    }
}

/// Depth first search with backtracking from `start` to `end` over open cells.
///
/// Directions are tried in `Direction::ALL` order and the first simple path found
/// is returned, which is not necessarily the shortest one. Returns None when `end`
/// cannot be reached. The grid is only read.
///
/// The search keeps its own stack of frames rather than recursing, so the path can
/// be as long as the grid has cells.
pub fn dfs_path(grid: &GridState, start: Cell, end: Cell) -> Option<Vec<Cell>> {
    let mut frames = vec![Frame::new(start)];
    let mut on_path = utils::fnv_hashset::<Cell>(grid.size().min(1024));
    on_path.insert(start);

    while let Some(top) = frames.last().copied() {
        if top.cell == end {
            return Some(frames.iter().map(|frame| frame.cell).collect());
        }

        if top.next_direction >= Direction::ALL.len() {
            // Dead end, back up to the previous decision point
            frames.pop();
            on_path.remove(&top.cell);
            continue;
        }

        let direction = Direction::ALL[top.next_direction];
        if let Some(frame) = frames.last_mut() {
            frame.next_direction += 1;
        }

        if let Some(next) = grid.neighbour_at_direction(top.cell, direction, 1) {
            if !on_path.contains(&next) && grid.is_open(next) {
                on_path.insert(next);
                frames.push(Frame::new(next));
            }
        }
    }

    None
}
