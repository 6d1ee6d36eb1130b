//! **dfs-mazes** carves perfect mazes by randomised depth first backtracking on a
//! grid of cells and finds routes through them with a backtracking depth first search.

pub mod cells;
pub mod config;
pub mod events;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_graph;
pub mod grid_iterators;
pub mod pathing;
pub mod renderers;
pub mod session;
pub mod units;
mod utils;
