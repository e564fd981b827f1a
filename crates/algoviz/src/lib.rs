//! **algoviz**: drives the sorting and pathfinding engines.
//!
//! Two entry points:
//!
//! - the one-shot [`run_sort`] and [`run_pathfind`], which run an algorithm
//!   picked by name on a copy of the caller's data;
//! - the stateful [`Session`], which owns the values and the grid, allows a
//!   single run at a time and rejects edits while it is running.
//!
//! Both report every step to a caller-supplied [`StepSink`] and honour the
//! pause and cancel requests of a shared [`Control`].

mod report;
mod session;

use algoviz_core::{Config, Control, Result, RunGuard, RunState, StepSink, Stepper};
use algoviz_paths::{Grid, PathAlgorithm, PathStep};
use algoviz_sort::{SortAlgorithm, SortStep};

pub use algoviz_core::{Error, Point, RunStats};
pub use report::{PathReport, SortReport};
pub use session::Session;

/// Sort a copy of `values` with the algorithm named `algorithm`.
///
/// `control` is used as is: a control that was cancelled earlier cancels this
/// run at its first step.
pub fn run_sort(
    values: &[i64],
    algorithm: &str,
    config: &Config,
    control: &Control,
    sink: &mut dyn StepSink<SortStep<i64>>,
) -> Result<SortReport> {
    let algorithm: SortAlgorithm = algorithm.parse()?;
    let state = RunState::new();
    let guard = state.begin()?;
    sort_with(&guard, values, algorithm, config, control, sink)
}

/// Search a copy of `grid` with the algorithm named `algorithm`.
///
/// The searched copy, with its distances and back links, is returned in the
/// report.
pub fn run_pathfind(
    grid: &Grid,
    algorithm: &str,
    config: &Config,
    control: &Control,
    sink: &mut dyn StepSink<PathStep>,
) -> Result<PathReport> {
    let algorithm: PathAlgorithm = algorithm.parse()?;
    let state = RunState::new();
    let guard = state.begin()?;
    pathfind_with(&guard, grid, algorithm, config, control, sink)
}

pub(crate) fn sort_with(
    guard: &RunGuard<'_>,
    values: &[i64],
    algorithm: SortAlgorithm,
    config: &Config,
    control: &Control,
    sink: &mut dyn StepSink<SortStep<i64>>,
) -> Result<SortReport> {
    let mut values = values.to_vec();
    let mut st = Stepper::new(sink, control, guard.state(), config.animation_delay());
    algorithm.sort(&mut values, &mut st)?;
    Ok(SortReport {
        algorithm,
        steps: st.steps(),
        values,
    })
}

pub(crate) fn pathfind_with(
    guard: &RunGuard<'_>,
    grid: &Grid,
    algorithm: PathAlgorithm,
    config: &Config,
    control: &Control,
    sink: &mut dyn StepSink<PathStep>,
) -> Result<PathReport> {
    let mut grid = grid.clone();
    let mut st = Stepper::new(sink, control, guard.state(), config.visit_delay());
    let path = algorithm.find(&mut grid, &mut st, config.path_delay())?;
    Ok(PathReport {
        algorithm,
        visited: st.visited(),
        path,
        grid,
    })
}
