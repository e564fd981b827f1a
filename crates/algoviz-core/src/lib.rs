//! **algoviz-core**: shared types for the step-observable algorithm
//! visualizer.
//!
//! This crate provides the pieces every engine needs: grid coordinates, the
//! error type, run configuration, the cooperative pause/cancel [`Control`],
//! the [`StepSink`] observer interface with its [`Stepper`] emitter, and the
//! live [`RunState`] counters.

pub mod config;
pub mod control;
pub mod error;
pub mod geom;
pub mod run;
pub mod step;

pub use config::{Config, speed_label};
pub use control::Control;
pub use error::{Error, Result};
pub use geom::Point;
pub use run::{RunGuard, RunState, RunStats};
pub use step::{Recorder, StepSink, Stepper};
