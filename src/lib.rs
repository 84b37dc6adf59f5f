//! Snake on a wraparound grid.
//!
//! [`game::GameEngine`] holds one session and advances it a tick at a time;
//! [`scheduler::Scheduler`] decides when those ticks happen. The remaining
//! modules are the terminal collaborators around them.

pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod scheduler;
pub mod score;
pub mod snake;
pub mod terminal;
pub mod ui;
