use std::collections::VecDeque;

use crate::grid::{Cell, GridSize};
use crate::input::{direction_change_is_valid, Direction};

/// Snake body plus the direction it is heading.
///
/// The body is stored head-first. Direction changes are buffered in a single
/// pending slot that the next [`Snake::advance`] commits.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Cell, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty segment list.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        })
    }

    /// Returns the head position one step from the current head in `direction`.
    #[must_use]
    pub fn propose_move(&self, direction: Direction, bounds: GridSize) -> Cell {
        let (dx, dy) = direction.delta();
        bounds.wrap(self.head(), dx, dy)
    }

    /// Moves the snake onto `new_head`, keeping the tail when it `grew`.
    ///
    /// The pending direction becomes the current direction.
    pub fn advance(&mut self, new_head: Cell, grew: bool) {
        self.body.push_front(new_head);
        if !grew {
            let _ = self.body.pop_back();
        }
        self.direction = self.pending_direction;
    }

    /// Buffers a turn for the next tick.
    ///
    /// A reversal of the last applied direction is ignored and returns `false`.
    /// Repeated calls between ticks overwrite each other.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.pending_direction = direction;
        true
    }

    /// Returns true if any current segment occupies `cell`.
    ///
    /// The tail counts even though a non-growing move would vacate it.
    #[must_use]
    pub fn collides_with(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the direction of the last applied move.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the direction the next tick will move in.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
