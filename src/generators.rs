use rand::Rng;
use smallvec::SmallVec;

use crate::cells::{Cell, Direction};
use crate::events::{ColourTag, DrawEvent};
use crate::grid::GridState;

/// A wall cell to knock through together with the unvisited cell behind it.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CarveCandidate {
    pub wall: Cell,
    pub beyond: Cell,
}

pub type CarveCandidates = SmallVec<[CarveCandidate; 4]>;

/// The two-step jumps available from `cell`, in `Direction::ALL` order.
///
/// A jump only counts when both the adjacent cell and the one past it are still
/// wall. A wall whose far side is already a passage is never carved, which keeps
/// the maze free of loops.
pub fn find_neighbours(grid: &GridState, cell: Cell) -> CarveCandidates {
    Direction::ALL
        .iter()
        .filter_map(|&direction| {
            let wall = grid.neighbour_at_direction(cell, direction, 1)?;
            if grid.is_open(wall) {
                return None;
            }
            let beyond = grid.neighbour_at_direction(cell, direction, 2)?;
            if grid.is_open(beyond) {
                return None;
            }
            Some(CarveCandidate { wall, beyond })
        })
        .collect()
}

/// Carve a perfect maze into `grid` by randomised depth first search from `start`.
///
/// Every visit to a cell (including visits while backtracking through it) and
/// every opened wall is reported to `on_draw` as a `Neutral` event, in the order
/// it happens. The last event highlights `start`.
///
/// The stack holds the current cell on top. When the current cell has nowhere
/// left to go it is dropped and the cell below becomes current again; the run
/// ends when the start cell itself is dropped.
pub fn recursive_backtracker<R, F>(grid: &mut GridState, start: Cell, rng: &mut R, mut on_draw: F)
    where R: Rng + ?Sized,
          F: FnMut(DrawEvent)
{
    let mut stack: Vec<Cell> = Vec::with_capacity(grid.size() / 2 + 1);
    stack.push(start);

    while let Some(current) = stack.pop() {
        grid.open(current);
        on_draw(DrawEvent::new(current, ColourTag::Neutral));
        stack.push(current);

        let candidates = find_neighbours(grid, current);
        if candidates.is_empty() {
            let finished = stack.pop();
            if finished == Some(start) {
                break;
            }
        } else {
            let chosen = candidates[rng.gen_range(0..candidates.len())];
            grid.open(chosen.wall);
            on_draw(DrawEvent::new(chosen.wall, ColourTag::Neutral));
            stack.push(chosen.beyond);
        }
    }

    on_draw(DrawEvent::new(start, ColourTag::HighlightStart));
}

#[cfg(test)]
mod tests {

    use petgraph::algo::{connected_components, is_cyclic_undirected};
    use quickcheck::quickcheck;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::grid_dimensions::GridDimensions;
    use crate::grid_graph::open_cell_graph;
    use crate::units::{ColumnsCount, RowsCount};

    fn grid(w: usize, h: usize) -> GridState {
        GridState::new(GridDimensions::new(ColumnsCount(w), RowsCount(h)).unwrap())
    }

    fn carve(g: &mut GridState, start: Cell, seed: u64) -> Vec<DrawEvent> {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let mut events = vec![];
        recursive_backtracker(g, start, &mut rng, |e| events.push(e));
        events
    }

    fn is_perfect(g: &GridState) -> bool {
        let graph = open_cell_graph(g);
        graph.node_count() > 0 && connected_components(&graph) == 1 &&
        !is_cyclic_undirected(&graph) && graph.edge_count() == graph.node_count() - 1
    }

    #[test]
    fn neighbours_on_a_solid_grid() {
        let g = grid(5, 5);
        let found = find_neighbours(&g, Cell::new(2, 2));
        let expected = [CarveCandidate { wall: Cell::new(2, 3), beyond: Cell::new(2, 4) },
                        CarveCandidate { wall: Cell::new(2, 1), beyond: Cell::new(2, 0) },
                        CarveCandidate { wall: Cell::new(1, 2), beyond: Cell::new(0, 2) },
                        CarveCandidate { wall: Cell::new(3, 2), beyond: Cell::new(4, 2) }];
        assert_eq!(&*found, &expected[..]);
    }

    #[test]
    fn neighbours_need_room_for_two_steps() {
        let g = grid(2, 2);
        assert!(find_neighbours(&g, Cell::new(0, 0)).is_empty());

        let g = grid(3, 1);
        let found = find_neighbours(&g, Cell::new(0, 0));
        assert_eq!(&*found,
                   &[CarveCandidate { wall: Cell::new(1, 0), beyond: Cell::new(2, 0) }][..]);
    }

    #[test]
    fn no_jump_into_an_open_cell() {
        let mut g = grid(5, 1);
        g.open(Cell::new(4, 0));
        // (3, 0) is still wall but the cell past it is a passage already
        assert!(find_neighbours(&g, Cell::new(2, 0)).len() == 1);
        assert_eq!(find_neighbours(&g, Cell::new(2, 0))[0].wall, Cell::new(1, 0));

        g.open(Cell::new(1, 0));
        assert!(find_neighbours(&g, Cell::new(2, 0)).is_empty());
    }

    #[test]
    fn single_cell_grid() {
        let mut g = grid(1, 1);
        let start = Cell::new(0, 0);
        let events = carve(&mut g, start, 1);
        assert!(g.is_open(start));
        assert_eq!(events,
                   vec![DrawEvent::new(start, ColourTag::Neutral),
                        DrawEvent::new(start, ColourTag::HighlightStart)]);
    }

    #[test]
    fn scripted_four_by_four() {
        // Every random pick lands on the first candidate
        let mut g = grid(4, 4);
        let start = Cell::new(0, 0);
        let mut rng = StepRng::new(0, 0);
        let mut events = vec![];
        recursive_backtracker(&mut g, start, &mut rng, |e| events.push(e));

        let gc = |x, y| Cell::new(x, y);
        assert_eq!(g.open_cells().collect::<Vec<_>>(),
                   vec![gc(0, 0), gc(2, 0), gc(0, 1), gc(2, 1), gc(0, 2), gc(1, 2), gc(2, 2)]);

        let neutral = |x, y| DrawEvent::new(gc(x, y), ColourTag::Neutral);
        assert_eq!(events,
                   vec![neutral(0, 0),
                        neutral(0, 1),
                        neutral(0, 2),
                        neutral(1, 2),
                        neutral(2, 2),
                        neutral(2, 1),
                        neutral(2, 0),
                        neutral(2, 2),
                        neutral(0, 2),
                        neutral(0, 0),
                        DrawEvent::new(start, ColourTag::HighlightStart)]);
        assert!(is_perfect(&g));
    }

    #[test]
    fn every_room_is_carved_on_odd_grids() {
        let mut g = grid(9, 7);
        let start = Cell::new(4, 2);
        carve(&mut g, start, 99);
        // Cells an even number of steps from the start on both axes are rooms
        for c in g.iter() {
            let even_offset = |a: u32, b: u32| (a as i64 - b as i64) % 2 == 0;
            if even_offset(c.column, start.column) && even_offset(c.row, start.row) {
                assert!(g.is_open(c), "room {} was never carved", c);
            }
            if !even_offset(c.column, start.column) && !even_offset(c.row, start.row) {
                assert!(!g.is_open(c), "pillar {} was carved", c);
            }
        }
        assert!(is_perfect(&g));
    }

    #[test]
    fn same_seed_same_maze() {
        let mut a = grid(21, 13);
        let mut b = grid(21, 13);
        let start = Cell::new(3, 8);
        let events_a = carve(&mut a, start, 4242);
        let events_b = carve(&mut b, start, 4242);
        assert_eq!(a, b);
        assert_eq!(events_a, events_b);
    }

    #[test]
    fn every_opened_cell_is_drawn() {
        let mut g = grid(15, 15);
        let events = carve(&mut g, Cell::new(0, 14), 7);
        for c in g.open_cells() {
            assert!(events.iter().any(|e| e.cell == c && e.colour == ColourTag::Neutral));
        }
        assert_eq!(events.last(),
                   Some(&DrawEvent::new(Cell::new(0, 14), ColourTag::HighlightStart)));
    }

    #[test]
    fn quickcheck_mazes_are_perfect() {
        fn p(width: u8, height: u8, start_seed: u16, seed: u64) -> bool {
            let (w, h) = (width as usize % 24 + 1, height as usize % 24 + 1);
            let mut g = grid(w, h);
            let start = g.dimensions().index_to_cell(start_seed as usize % (w * h));
            carve(&mut g, start, seed);
            g.is_open(start) && is_perfect(&g)
        }
        quickcheck(p as fn(u8, u8, u16, u64) -> bool)
    }
}
