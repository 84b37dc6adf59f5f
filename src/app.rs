use std::time::{Duration, Instant};

use tracing::info;

use crate::config::{Theme, THEME};
use crate::error::Result;
use crate::game::{GameEngine, TickOutcome};
use crate::input::{GameInput, InputHandler};
use crate::renderer;
use crate::scheduler::Scheduler;
use crate::terminal::AppTerminal;

/// Upper bound on one input wait; the frame is redrawn at least this often.
const MAX_INPUT_WAIT: Duration = Duration::from_millis(250);

/// Owns the engine and its scheduler for the lifetime of the program.
pub struct App {
    engine: GameEngine,
    scheduler: Scheduler,
    input: InputHandler,
    theme: &'static Theme,
}

impl App {
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            scheduler: Scheduler::new(),
            input: InputHandler::new(),
            theme: &THEME,
        }
    }

    /// Starts the first session and plays until the user quits.
    pub fn run(mut self, terminal: &mut AppTerminal) -> Result<()> {
        self.restart(Instant::now());

        loop {
            self.draw(terminal)?;

            let wait = self
                .scheduler
                .time_until_due(Instant::now())
                .map_or(MAX_INPUT_WAIT, |due| due.min(MAX_INPUT_WAIT));

            if let Some(input) = self.input.poll_input(wait)? {
                if !self.handle_input(input, Instant::now()) {
                    break;
                }
                continue;
            }

            self.poll_scheduler(Instant::now());
        }

        info!(
            score = self.engine.score(),
            high_score = self.engine.high_score(),
            "quit"
        );
        Ok(())
    }

    /// Applies one input. Returns `false` when the user asked to quit.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) -> bool {
        match input {
            GameInput::Quit => return false,
            GameInput::Reset => self.restart(now),
            other => self.engine.apply_input(other),
        }
        true
    }

    /// Fires the pending tick if it is due.
    pub fn poll_scheduler(&mut self, now: Instant) -> Option<TickOutcome> {
        self.scheduler.poll(now, &mut self.engine)
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    fn restart(&mut self, now: Instant) {
        self.scheduler.cancel();
        self.engine.reset();
        self.scheduler.start(now, self.engine.tick_interval());
    }

    fn draw(&self, terminal: &mut AppTerminal) -> Result<()> {
        terminal.draw(|frame| renderer::render(frame, &self.engine.view(), self.theme))?;
        Ok(())
    }
}
