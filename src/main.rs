use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use wrap_snake::app::App;
use wrap_snake::config::GameConfig;
use wrap_snake::error::Result;
use wrap_snake::food::FoodPlacer;
use wrap_snake::game::GameEngine;
use wrap_snake::logging;
use wrap_snake::score::JsonScoreStore;
use wrap_snake::terminal::TerminalSession;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with `canvas_width`, `canvas_height` and `tile_size`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed food placement for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Where to keep the high score (defaults to the user data directory).
    #[arg(long = "score-file")]
    score_file: Option<PathBuf>,

    /// Write diagnostics to this file; filtered by RUST_LOG.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let grid = config.grid()?;

    let store = match cli.score_file {
        Some(path) => JsonScoreStore::new(path),
        None => JsonScoreStore::at_default_location(),
    };
    let placer = match cli.seed {
        Some(seed) => FoodPlacer::with_seed(seed),
        None => FoodPlacer::from_entropy(),
    };

    info!(
        width = grid.width,
        height = grid.height,
        score_file = %store.path().display(),
        "starting"
    );

    let engine = GameEngine::new(grid, placer, Box::new(store));
    let mut session = TerminalSession::enter()?;
    App::new(engine).run(session.terminal_mut())
}
