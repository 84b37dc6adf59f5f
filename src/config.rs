use std::fs;
use std::io;
use std::path::Path;

use ratatui::style::Color;
use ratatui::symbols::border;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SnakeError};
use crate::grid::GridSize;

/// Tick interval of a fresh session in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 120;

/// Floor for the tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Interval reduction applied each time food is eaten.
pub const TICK_INTERVAL_STEP_MS: u64 = 2;

/// Score awarded per food.
pub const FOOD_REWARD: u32 = 10;

pub const DEFAULT_CANVAS_WIDTH_PX: u32 = 400;
pub const DEFAULT_CANVAS_HEIGHT_PX: u32 = 400;
pub const DEFAULT_TILE_PX: u32 = 20;

/// Board geometry, optionally read from a JSON file.
///
/// Missing keys fall back to the defaults, so `{"tile_size": 10}` alone is a
/// valid file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub tile_size: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH_PX,
            canvas_height: DEFAULT_CANVAS_HEIGHT_PX,
            tile_size: DEFAULT_TILE_PX,
        }
    }
}

impl GameConfig {
    /// Loads a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map_err(|source| SnakeError::ConfigFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the logical grid this canvas and tile size produce.
    pub fn grid(&self) -> Result<GridSize> {
        GridSize::from_canvas(self.canvas_width, self.canvas_height, self.tile_size)
    }
}

/// Colours applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    /// Background of empty board cells.
    pub board_bg: Color,
    pub border_fg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Emerald snake on a midnight board.
pub const THEME: Theme = Theme {
    snake_head: Color::Rgb(0x10, 0xb9, 0x81),
    snake_body: Color::Rgb(0x05, 0x96, 0x69),
    food: Color::Rgb(0xef, 0x44, 0x44),
    board_bg: Color::Rgb(0x07, 0x10, 0x22),
    border_fg: Color::Rgb(0x33, 0x41, 0x55),
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Rgb(0x10, 0xb9, 0x81),
    menu_footer: Color::DarkGray,
};

/// Rounded border around the board.
pub const BORDER_BOARD: border::Set = border::ROUNDED;

/// Glyph drawn for one cell; two columns keep cells roughly square.
pub const GLYPH_CELL: &str = "██";

/// Terminal columns per logical cell.
pub const CELL_COLUMNS: u16 = 2;
