use std::error::Error;
use std::fmt;

use crate::grid_dimensions::GridDimensions;
use crate::units::{CellPixels, ColumnsCount, Height, RowsCount, Width};

pub const DEFAULT_SCREEN_WIDTH: usize = 1024;
pub const DEFAULT_SCREEN_HEIGHT: usize = 864;
pub const DEFAULT_CELL_PIXELS: usize = 8;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum ConfigError {
    ZeroCellSize,
    /// Not even one whole cell fits in the display area.
    AreaTooSmall { width: usize, height: usize, cell_pixels: usize },
    InvalidGridSize { columns: usize, rows: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConfigError::ZeroCellSize => write!(f, "cell size must be at least one pixel"),
            ConfigError::AreaTooSmall { width, height, cell_pixels } => {
                write!(f,
                       "a {}x{} display area cannot hold a single {} pixel cell",
                       width,
                       height,
                       cell_pixels)
            }
            ConfigError::InvalidGridSize { columns, rows } => {
                write!(f, "a {}x{} grid is not a usable maze size", columns, rows)
            }
        }
    }
}

impl Error for ConfigError {}

/// Where the grid size comes from.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridSize {
    /// As many cells as fit in the display area.
    DisplayArea { width: Width, height: Height },
    Explicit { columns: ColumnsCount, rows: RowsCount },
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct MazeConfig {
    pub grid_size: GridSize,
    pub cell_pixels: CellPixels,
    /// None draws a seed from the operating system.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            grid_size: GridSize::DisplayArea {
                width: Width(DEFAULT_SCREEN_WIDTH),
                height: Height(DEFAULT_SCREEN_HEIGHT),
            },
            cell_pixels: CellPixels(DEFAULT_CELL_PIXELS),
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn dimensions(&self) -> Result<GridDimensions, ConfigError> {
        let CellPixels(cell_pixels) = self.cell_pixels;
        if cell_pixels == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        match self.grid_size {
            GridSize::DisplayArea { width, height } => {
                GridDimensions::from_display_area(width, height, self.cell_pixels)
                    .ok_or(ConfigError::AreaTooSmall {
                        width: width.0,
                        height: height.0,
                        cell_pixels,
                    })
            }
            GridSize::Explicit { columns, rows } => {
                GridDimensions::new(columns, rows).ok_or(ConfigError::InvalidGridSize {
                    columns: columns.0,
                    rows: rows.0,
                })
            }
        }
    }
}
