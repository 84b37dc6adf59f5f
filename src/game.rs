use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::{
    DEFAULT_TICK_INTERVAL_MS, FOOD_REWARD, MIN_TICK_INTERVAL_MS, TICK_INTERVAL_STEP_MS,
};
use crate::food::FoodPlacer;
use crate::grid::{Cell, GridSize};
use crate::input::{Direction, GameInput};
use crate::scheduler::{Cadence, TickTarget};
use crate::score::HighScoreStore;
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// No session has been started yet.
    Idle,
    Running,
    Paused,
    /// The snake ran into itself.
    Over,
    /// The snake filled the grid; no free cell was left for food.
    Won,
}

impl GameStatus {
    /// Returns true for the end states of a session.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Over | Self::Won)
    }
}

/// What a single call to [`GameEngine::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The engine was not running, nothing changed.
    Skipped,
    Moved,
    Ate,
    Collided,
    Filled,
}

/// Read-only snapshot handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub bounds: GridSize,
    pub snake: &'a Snake,
    pub food: Option<Cell>,
    pub score: u32,
    pub high_score: u32,
    pub tick_interval_ms: u64,
    pub status: GameStatus,
    /// The session that just ended beat the previous high score.
    pub new_high_score: bool,
}

impl GameView<'_> {
    /// True while a session is live, paused or not.
    #[must_use]
    pub fn running(&self) -> bool {
        matches!(self.status, GameStatus::Running | GameStatus::Paused)
    }

    #[must_use]
    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }
}

/// Complete mutable state for one game session plus its collaborators.
pub struct GameEngine {
    pub snake: Snake,
    pub food: Option<Cell>,
    score: u32,
    tick_interval_ms: u64,
    tick_count: u64,
    status: GameStatus,
    high_score: u32,
    new_high_score: bool,
    bounds: GridSize,
    placer: FoodPlacer,
    store: Box<dyn HighScoreStore>,
}

impl GameEngine {
    /// Creates an idle engine. Call [`GameEngine::reset`] to start playing.
    #[must_use]
    pub fn new(bounds: GridSize, placer: FoodPlacer, store: Box<dyn HighScoreStore>) -> Self {
        let mut engine = Self {
            snake: Snake::new(bounds.center(), Direction::Right),
            food: None,
            score: 0,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            tick_count: 0,
            status: GameStatus::Idle,
            high_score: 0,
            new_high_score: false,
            bounds,
            placer,
            store,
        };
        engine.high_score = engine.load_high_score();
        engine
    }

    /// Starts a fresh session, discarding whatever state came before.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.bounds.center(), Direction::Right);
        self.food = self.placer.place(self.bounds, &self.snake);
        self.score = 0;
        self.tick_interval_ms = DEFAULT_TICK_INTERVAL_MS;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        self.high_score = self.load_high_score();
        self.new_high_score = false;

        info!(
            width = self.bounds.width,
            height = self.bounds.height,
            high_score = self.high_score,
            "session started"
        );

        if self.food.is_none() {
            self.finish(GameStatus::Won);
        }
    }

    /// Flips between running and paused. No effect outside a live session.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
        debug!(status = ?self.status, "pause toggled");
    }

    /// Queues a turn for the next tick. Reversals are ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if !matches!(self.status, GameStatus::Running | GameStatus::Paused) {
            return;
        }

        if !self.snake.set_direction(direction) {
            debug!(?direction, "reversal ignored");
        }
    }

    /// Applies one external input event. `Quit` belongs to the runtime.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.set_direction(direction),
            GameInput::TogglePause => self.toggle_pause(),
            GameInput::Reset => self.reset(),
            GameInput::Quit => {}
        }
    }

    /// Advances the simulation by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Skipped;
        }

        self.tick_count += 1;
        let candidate = self
            .snake
            .propose_move(self.snake.pending_direction(), self.bounds);

        if self.snake.collides_with(candidate) {
            self.finish(GameStatus::Over);
            return TickOutcome::Collided;
        }

        let grew = self.food == Some(candidate);
        self.snake.advance(candidate, grew);

        if !grew {
            return TickOutcome::Moved;
        }

        self.score += FOOD_REWARD;
        self.speed_up();
        self.food = self.placer.place(self.bounds, &self.snake);
        debug!(
            score = self.score,
            length = self.snake.len(),
            tick_interval_ms = self.tick_interval_ms,
            "food eaten"
        );

        if self.food.is_none() {
            self.finish(GameStatus::Won);
            return TickOutcome::Filled;
        }

        TickOutcome::Ate
    }

    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView {
            bounds: self.bounds,
            snake: &self.snake,
            food: self.food,
            score: self.score,
            high_score: self.high_score,
            tick_interval_ms: self.tick_interval_ms,
            status: self.status,
            new_high_score: self.new_high_score,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Current tick interval in milliseconds.
    #[must_use]
    pub fn speed_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    fn speed_up(&mut self) {
        if self.tick_interval_ms > MIN_TICK_INTERVAL_MS {
            self.tick_interval_ms = self
                .tick_interval_ms
                .saturating_sub(TICK_INTERVAL_STEP_MS)
                .max(MIN_TICK_INTERVAL_MS);
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        info!(
            ?status,
            score = self.score,
            length = self.snake.len(),
            ticks = self.tick_count,
            "session ended"
        );

        if self.score <= self.high_score {
            return;
        }

        self.high_score = self.score;
        self.new_high_score = true;
        if let Err(error) = self.store.save(self.score) {
            warn!(%error, "failed to save high score");
        }
    }

    fn load_high_score(&self) -> u32 {
        self.store.load().unwrap_or_else(|error| {
            warn!(%error, "unreadable high score, using 0");
            0
        })
    }
}

impl TickTarget for GameEngine {
    type Outcome = TickOutcome;

    fn cadence(&self) -> Cadence {
        match self.status {
            GameStatus::Running => Cadence::Active(self.tick_interval()),
            GameStatus::Paused => Cadence::Idle(self.tick_interval()),
            GameStatus::Idle | GameStatus::Over | GameStatus::Won => Cadence::Stopped,
        }
    }

    fn on_tick(&mut self) -> TickOutcome {
        self.tick()
    }
}
