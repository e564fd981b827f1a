//! The step emitter: [`StepSink`] observers and the [`Stepper`] that
//! algorithms report through.
//!
//! An algorithm never talks to a renderer directly. It hands each event to
//! its `Stepper`, which notifies the sink synchronously and then yields at the
//! pause gate for the configured delay.

use std::time::Duration;

use crate::control::Control;
use crate::error::Result;
use crate::run::RunState;

/// Observer of algorithm steps (typically a renderer).
///
/// Implementations must apply events idempotently and should return quickly;
/// pacing is the stepper's job.
pub trait StepSink<E> {
    fn on_step(&mut self, event: &E);
}

impl<E, F: FnMut(&E)> StepSink<E> for F {
    fn on_step(&mut self, event: &E) {
        self(event)
    }
}

/// A sink that keeps every event it receives, in order.
#[derive(Clone, Debug)]
pub struct Recorder<E> {
    pub events: Vec<E>,
}

impl<E> Default for Recorder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Recorder<E> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Number of recorded events matching `pred`.
    pub fn count(&self, pred: impl Fn(&E) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl<E: Clone> StepSink<E> for Recorder<E> {
    fn on_step(&mut self, event: &E) {
        self.events.push(event.clone());
    }
}

/// Per-run emitter binding a sink to the pause gate and run counters.
pub struct Stepper<'a, E> {
    sink: &'a mut dyn StepSink<E>,
    control: &'a Control,
    state: &'a RunState,
    delay: Duration,
}

impl<'a, E> Stepper<'a, E> {
    pub fn new(
        sink: &'a mut dyn StepSink<E>,
        control: &'a Control,
        state: &'a RunState,
        delay: Duration,
    ) -> Self {
        Self {
            sink,
            control,
            state,
            delay,
        }
    }

    /// Notify the sink without yielding.
    pub fn mark(&mut self, event: E) {
        self.sink.on_step(&event);
    }

    /// Notify the sink, then yield for the default delay.
    pub fn emit(&mut self, event: E) -> Result<()> {
        self.emit_for(event, self.delay)
    }

    /// Notify the sink, then yield for `delay`.
    pub fn emit_for(&mut self, event: E, delay: Duration) -> Result<()> {
        self.sink.on_step(&event);
        self.control.checkpoint(delay)
    }

    /// A state-mutating step: counted, then emitted.
    pub fn step(&mut self, event: E) -> Result<()> {
        self.state.add_step();
        self.emit(event)
    }

    /// A node visit: counted, then emitted.
    pub fn visit(&mut self, event: E) -> Result<()> {
        self.state.add_visit();
        self.emit(event)
    }

    /// Steps counted so far in this run.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.state.step_count()
    }

    /// Visits counted so far in this run.
    #[inline]
    pub fn visited(&self) -> u64 {
        self.state.visited_count()
    }
}
