//! Single-timer tick scheduling.
//!
//! The scheduler holds at most one pending deadline. Time is always passed in
//! by the caller, so the runtime drives it with `Instant::now()` and tests
//! drive it with synthetic instants.

use std::time::{Duration, Instant};

use tracing::trace;

/// How a tick target wants to be driven right now.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cadence {
    /// Tick after the interval elapses.
    Active(Duration),
    /// Re-check after the interval without ticking.
    Idle(Duration),
    /// Stop re-arming.
    Stopped,
}

/// Anything the scheduler can drive.
pub trait TickTarget {
    type Outcome;

    fn cadence(&self) -> Cadence;

    fn on_tick(&mut self) -> Self::Outcome;
}

#[derive(Debug, Clone, Copy)]
struct Deadline {
    due: Instant,
    generation: u64,
}

/// Fires ticks on a variable interval; pausable and restartable.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Option<Deadline>,
    generation: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any pending deadline with one `interval` after `now`.
    pub fn start(&mut self, now: Instant, interval: Duration) {
        self.generation += 1;
        if self.pending.is_some() {
            trace!(generation = self.generation, "replacing pending tick");
        }
        self.arm(now, interval);
    }

    /// Drops the pending deadline, if any.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            trace!(generation = self.generation, "tick cancelled");
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Counts calls to [`Scheduler::start`]; each one starts a new timer lineage.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Time left until the pending deadline; zero when overdue, `None` when idle.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|deadline| deadline.due.saturating_duration_since(now))
    }

    /// Fires the pending deadline if it has passed.
    ///
    /// An active target ticks and the timer re-arms with the interval the
    /// target reports afterwards. An idle target only re-arms. A stopped
    /// target leaves the scheduler disarmed.
    pub fn poll<T: TickTarget + ?Sized>(&mut self, now: Instant, target: &mut T) -> Option<T::Outcome> {
        let deadline = self.pending?;
        if now < deadline.due {
            return None;
        }
        self.pending = None;

        match target.cadence() {
            Cadence::Active(_) => {
                let outcome = target.on_tick();
                self.rearm_for(now, target.cadence());
                Some(outcome)
            }
            Cadence::Idle(interval) => {
                self.arm(now, interval);
                None
            }
            Cadence::Stopped => {
                trace!(generation = deadline.generation, "target stopped");
                None
            }
        }
    }

    fn rearm_for(&mut self, now: Instant, cadence: Cadence) {
        match cadence {
            Cadence::Active(interval) | Cadence::Idle(interval) => self.arm(now, interval),
            Cadence::Stopped => {
                trace!(generation = self.generation, "target stopped after tick");
            }
        }
    }

    fn arm(&mut self, now: Instant, interval: Duration) {
        self.pending = Some(Deadline {
            due: now + interval,
            generation: self.generation,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{Cadence, Scheduler, TickTarget};

    const INTERVAL: Duration = Duration::from_millis(100);

    #[derive(Debug)]
    struct Counter {
        cadence: Cadence,
        ticks: u32,
        stop_after: Option<u32>,
    }

    impl Counter {
        fn active() -> Self {
            Self {
                cadence: Cadence::Active(INTERVAL),
                ticks: 0,
                stop_after: None,
            }
        }
    }

    impl TickTarget for Counter {
        type Outcome = u32;

        fn cadence(&self) -> Cadence {
            self.cadence
        }

        fn on_tick(&mut self) -> u32 {
            self.ticks += 1;
            if self.stop_after == Some(self.ticks) {
                self.cadence = Cadence::Stopped;
            }
            self.ticks
        }
    }

    #[test]
    fn nothing_fires_before_the_deadline() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let mut counter = Counter::active();
        scheduler.start(start, INTERVAL);

        assert_eq!(scheduler.poll(start + Duration::from_millis(99), &mut counter), None);
        assert_eq!(counter.ticks, 0);
        assert_eq!(
            scheduler.time_until_due(start + Duration::from_millis(40)),
            Some(Duration::from_millis(60))
        );
    }

    #[test]
    fn active_target_ticks_and_rearms() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let mut counter = Counter::active();
        scheduler.start(start, INTERVAL);

        let first = start + INTERVAL;
        assert_eq!(scheduler.poll(first, &mut counter), Some(1));
        assert_eq!(scheduler.time_until_due(first), Some(INTERVAL));
        assert_eq!(scheduler.poll(first + INTERVAL, &mut counter), Some(2));
    }

    #[test]
    fn interval_changes_apply_to_the_next_deadline() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let mut counter = Counter::active();
        scheduler.start(start, INTERVAL);

        counter.cadence = Cadence::Active(Duration::from_millis(40));
        let fired = start + INTERVAL;
        scheduler.poll(fired, &mut counter);

        assert_eq!(
            scheduler.time_until_due(fired),
            Some(Duration::from_millis(40))
        );
    }

    #[test]
    fn idle_target_rearms_without_ticking() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let mut counter = Counter::active();
        counter.cadence = Cadence::Idle(INTERVAL);
        scheduler.start(start, INTERVAL);

        for step in 1..=5 {
            assert_eq!(scheduler.poll(start + INTERVAL * step, &mut counter), None);
        }

        assert_eq!(counter.ticks, 0);
        assert!(scheduler.is_armed());
    }

    #[test]
    fn stopped_target_disarms() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let mut counter = Counter::active();
        counter.stop_after = Some(2);
        scheduler.start(start, INTERVAL);

        assert_eq!(scheduler.poll(start + INTERVAL, &mut counter), Some(1));
        assert_eq!(scheduler.poll(start + INTERVAL * 2, &mut counter), Some(2));

        assert!(!scheduler.is_armed());
        assert_eq!(scheduler.poll(start + INTERVAL * 10, &mut counter), None);
        assert_eq!(counter.ticks, 2);
    }

    #[test]
    fn restart_replaces_the_pending_deadline() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let mut counter = Counter::active();

        scheduler.start(start, INTERVAL);
        scheduler.start(start + Duration::from_millis(80), INTERVAL);
        scheduler.start(start + Duration::from_millis(90), INTERVAL);

        assert_eq!(scheduler.generation(), 3);
        assert_eq!(scheduler.poll(start + INTERVAL, &mut counter), None);
        assert_eq!(
            scheduler.poll(start + Duration::from_millis(190), &mut counter),
            Some(1)
        );
        assert_eq!(counter.ticks, 1);
    }

    #[test]
    fn cancel_prevents_firing() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let mut counter = Counter::active();
        scheduler.start(start, INTERVAL);

        scheduler.cancel();

        assert_eq!(scheduler.time_until_due(start), None);
        assert_eq!(scheduler.poll(start + INTERVAL * 3, &mut counter), None);
        assert_eq!(counter.ticks, 0);
    }
}
