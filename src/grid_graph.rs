use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{Cell, Direction};
use crate::grid::GridState;
use crate::utils;

/// The passages of a maze as an undirected graph: one node per open cell, in row
/// major order, and an edge between every pair of grid-adjacent open cells.
pub fn open_cell_graph(grid: &GridState) -> UnGraph<Cell, ()> {
    let open_count = grid.open_count();
    let mut graph = UnGraph::with_capacity(open_count, open_count);
    let mut node_of = utils::fnv_hashmap::<Cell, NodeIndex>(open_count);

    for cell in grid.open_cells() {
        node_of.insert(cell, graph.add_node(cell));
    }

    // Looking only right and down adds each edge once.
    for cell in grid.open_cells() {
        for &direction in &[Direction::Right, Direction::Down] {
            if let Some(next) = grid.neighbour_at_direction(cell, direction, 1) {
                if let (Some(&a), Some(&b)) = (node_of.get(&cell), node_of.get(&next)) {
                    graph.add_edge(a, b, ());
                }
            }
        }
    }

    graph
}

/// Serialize a maze graph: line 1 is `n m` (#vertices #edges), every further line
/// is an edge as a pair of 1-based vertex indices.
pub fn format_edges(graph: &UnGraph<Cell, ()>) -> String {
    let header = format!("{} {}", graph.node_count(), graph.edge_count());
    let edges = graph
        .raw_edges()
        .iter()
        .map(|edge| format!("{} {}", edge.source().index() + 1, edge.target().index() + 1));

    let mut data = std::iter::once(header).chain(edges).join("\n");
    data.push('\n');
    data
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::grid_dimensions::GridDimensions;
    use crate::units::{ColumnsCount, RowsCount};

    fn grid(w: usize, h: usize) -> GridState {
        GridState::new(GridDimensions::new(ColumnsCount(w), RowsCount(h)).unwrap())
    }

    #[test]
    fn walls_are_not_nodes() {
        let g = grid(3, 3);
        let graph = open_cell_graph(&g);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(format_edges(&graph), "0 0\n");
    }

    #[test]
    fn l_shaped_passage() {
        let mut g = grid(3, 3);
        for c in &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 2)] {
            g.open(*c);
        }
        let graph = open_cell_graph(&g);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph[NodeIndex::new(0)], Cell::new(0, 0));
        assert_eq!(format_edges(&graph), "4 2\n1 2\n2 3\n");
    }

    #[test]
    fn open_square_has_a_cycle() {
        let mut g = grid(2, 2);
        for c in g.iter().collect::<Vec<_>>() {
            g.open(c);
        }
        let graph = open_cell_graph(&g);
        assert_eq!(graph.edge_count(), 4);
        assert!(petgraph::algo::is_cyclic_undirected(&graph));
    }
}
