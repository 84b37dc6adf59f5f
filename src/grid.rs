use crate::error::{Result, SnakeError};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Logical grid dimensions (columns by rows) of the toroidal board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Derives the grid from a canvas measured in pixels and a square tile size.
    ///
    /// Partial tiles at the right and bottom edges are dropped.
    pub fn from_canvas(width_px: u32, height_px: u32, tile_px: u32) -> Result<Self> {
        if tile_px == 0 {
            return Err(SnakeError::InvalidGrid("tile size must be positive".into()));
        }

        let width = axis_cells(width_px, tile_px, "width")?;
        let height = axis_cells(height_px, tile_px, "height")?;

        Ok(Self { width, height })
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the cell a fresh snake starts on.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }

    /// Returns true when `cell` lies inside the grid.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < i32::from(self.width)
            && cell.y < i32::from(self.height)
    }

    /// Offsets `cell` by `(dx, dy)`, re-entering from the opposite edge when
    /// the result leaves the grid.
    #[must_use]
    pub fn wrap(self, cell: Cell, dx: i32, dy: i32) -> Cell {
        debug_assert!(self.width > 0 && self.height > 0);

        Cell {
            x: wrap_axis(cell.x + dx, i32::from(self.width)),
            y: wrap_axis(cell.y + dy, i32::from(self.height)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    value.rem_euclid(upper_bound)
}

fn axis_cells(pixels: u32, tile_px: u32, axis: &str) -> Result<u16> {
    let cells = pixels / tile_px;
    if cells == 0 {
        return Err(SnakeError::InvalidGrid(format!(
            "canvas {axis} of {pixels}px holds no {tile_px}px tile"
        )));
    }

    u16::try_from(cells)
        .map_err(|_| SnakeError::InvalidGrid(format!("{cells} cells exceed the {axis} limit")))
}
