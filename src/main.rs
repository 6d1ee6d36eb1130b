use docopt::Docopt;
use log::{info, warn};
use serde_derive::Deserialize;
use dfs_mazes::{
    cells::Cell,
    config::{GridSize, MazeConfig},
    grid_displays::{GridDisplay, PathDisplay, StartEndPointsDisplay},
    grid_graph,
    renderers::{self, RenderOptionsBuilder},
    session::MazeSession,
    units::{CellPixels, ColumnsCount, Height, RowsCount, Width},
};
use std::{
    io,
    io::prelude::*,
    fs::File,
};

const USAGE: &str = "DFS Mazes

Carves a perfect maze by randomised depth first backtracking and searches it
for a path from a random start cell to a chosen end cell.

Usage:
    dfs_mazes_driver -h | --help
    dfs_mazes_driver [--screen-width=<w> --screen-height=<h>] [--grid-width=<c> --grid-height=<r>] [--cell-size=<n>] [--seed=<s>] [--end-x=<x> --end-y=<y> | --random-end] [--text-out=<path>] [--image-out=<path>] [--save-edges=<path>]

Options:
    -h --help              Show this screen.
    --screen-width=<w>     Width in pixels of the display area the grid is fitted to [default: 1024].
    --screen-height=<h>    Height in pixels of the display area the grid is fitted to [default: 864].
    --grid-width=<c>       Number of grid columns, overrides the display area.
    --grid-height=<r>      Number of grid rows, overrides the display area.
    --cell-size=<n>        Pixel side length of one cell [default: 8].
    --seed=<s>             Seed for the random source, the same seed gives the same maze.
    --end-x=<x>            Column of the path end cell. Must be a passage.
    --end-y=<y>            Row of the path end cell. Must be a passage.
    --random-end           Pick a random passage as the path end cell.
    --text-out=<path>      Output file path for a textual rendering of the maze, `-` for stdout.
    --image-out=<path>     Output file path for an image rendering of the maze. Always PNG format.
    --save-edges=<path>    Serialize the maze passages to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_screen_width: usize,
    flag_screen_height: usize,
    flag_grid_width: Option<usize>,
    flag_grid_height: Option<usize>,
    flag_cell_size: usize,
    flag_seed: Option<u64>,
    flag_end_x: Option<u32>,
    flag_end_y: Option<u32>,
    flag_random_end: bool,
    flag_text_out: String,
    flag_image_out: String,
    flag_save_edges: String,
}

// Create the Error, ErrorKind, ResultExt, and Result types with `error_chain!`.
mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            ConfigFailure(::dfs_mazes::config::ConfigError);
            ImageWriteError(::image::ImageError);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let config = maze_config_from_args(&args);
    let dimensions = config.dimensions()?;

    let mut session = match config.seed {
        Some(seed) => MazeSession::from_seed(dimensions, seed),
        None => MazeSession::from_entropy(dimensions),
    };

    let mut events = session.generate();

    choose_end_cell(&mut session, &args);

    let path = match session.solve() {
        Ok(solution) => {
            events.extend(solution.events);
            Some(solution.path)
        }
        Err(reason) => {
            info!("{}", reason);
            None
        }
    };

    let any_output = !args.flag_text_out.is_empty() || !args.flag_image_out.is_empty() ||
                     !args.flag_save_edges.is_empty();

    if !args.flag_text_out.is_empty() || !any_output {
        let points = StartEndPointsDisplay::new(session.start(), session.end());
        let on_path = PathDisplay::new(path.as_ref().map_or(&[][..], |p| &p[..]));
        let displays: [&dyn GridDisplay; 2] = [&points, &on_path];
        let text = format!("{}", session.grid().view(&displays));

        if args.flag_text_out.is_empty() || args.flag_text_out == "-" {
            print!("{}", text);
        } else {
            write_text_to_file(&text, &args.flag_text_out)
                .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
        }
    }

    if !args.flag_image_out.is_empty() {
        let options = RenderOptionsBuilder::new().cell_pixels(config.cell_pixels).build();
        let image = renderers::render_events(dimensions, &options, &events);
        renderers::save_png(&image, &args.flag_image_out)
            .chain_err(|| format!("Failed to write maze image {}", args.flag_image_out))?;
        info!("wrote {}", args.flag_image_out);
    }

    if !args.flag_save_edges.is_empty() {
        let graph = grid_graph::open_cell_graph(session.grid());
        write_text_to_file(&grid_graph::format_edges(&graph), &args.flag_save_edges)
            .chain_err(|| format!("Failed to write maze graph to text file {}", args.flag_save_edges))?;
    }

    Ok(())
}

fn maze_config_from_args(args: &MazeArgs) -> MazeConfig {
    let grid_size = match (args.flag_grid_width, args.flag_grid_height) {
        (Some(columns), Some(rows)) => GridSize::Explicit {
            columns: ColumnsCount(columns),
            rows: RowsCount(rows),
        },
        _ => GridSize::DisplayArea {
            width: Width(args.flag_screen_width),
            height: Height(args.flag_screen_height),
        },
    };

    MazeConfig {
        grid_size,
        cell_pixels: CellPixels(args.flag_cell_size),
        seed: args.flag_seed,
    }
}

/// Stands in for the user clicking on a cell.
fn choose_end_cell(session: &mut MazeSession, args: &MazeArgs) {
    if let (Some(x), Some(y)) = (args.flag_end_x, args.flag_end_y) {
        let cell = Cell::new(x, y);
        if !session.set_end(cell) {
            warn!("end cell {} is not a passage, ignoring it", cell);
        }
    } else if args.flag_random_end {
        if let Some(cell) = session.random_open_cell() {
            session.set_end(cell);
        }
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
