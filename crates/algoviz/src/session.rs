use std::sync::{Mutex, MutexGuard, PoisonError};

use algoviz_core::{
    Config, Control, Error, Point, Result, RunGuard, RunState, RunStats, StepSink,
};
use algoviz_paths::{Grid, PathAlgorithm, PathStep};
use algoviz_sort::{SortAlgorithm, SortStep, check_len, parse_values, random_values};
use rand::Rng;

use crate::report::{PathReport, SortReport};
use crate::{pathfind_with, sort_with};

/// The values and grid a user works on, plus the state of the (single)
/// run operating on them.
///
/// A `Session` is meant to be shared between the thread running an
/// algorithm and the threads issuing pause, cancel, edits or stats queries.
/// Runs work on a copy of the session's data and store the result back only
/// when they complete; a cancelled or failed run leaves the data as it was.
#[derive(Debug)]
pub struct Session {
    config: Config,
    control: Control,
    state: RunState,
    values: Mutex<Vec<i64>>,
    grid: Mutex<Grid>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Session {
    /// Create a session with random values and an empty grid sized by
    /// `config`.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let values = random_values(&mut rand::rng());
        let grid = Grid::from_config(&config)?;
        Ok(Self {
            config,
            control: Control::new(),
            state: RunState::new(),
            values: Mutex::new(values),
            grid: Mutex::new(grid),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The pause gate of this session's runs. Clone it to drive a run from
    /// another thread.
    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Counters of the current run, or of the last one once it is over.
    pub fn stats(&self) -> RunStats {
        self.state.stats(self.control.is_paused())
    }

    /// A copy of the values to sort.
    pub fn values(&self) -> Vec<i64> {
        lock(&self.values).clone()
    }

    /// A copy of the grid.
    pub fn grid(&self) -> Grid {
        lock(&self.grid).clone()
    }

    // Edits hold the data lock across the running check, so a run that has
    // begun either sees the edit in its copy or causes the edit to fail.
    fn edit<T, R>(
        &self,
        data: &Mutex<T>,
        what: &str,
        f: impl FnOnce(&mut T) -> Result<R>,
    ) -> Result<R> {
        let mut data = lock(data);
        if self.state.is_running() {
            log::warn!("rejected {what} during a run");
            return Err(Error::RunInProgress);
        }
        f(&mut data)
    }

    /// Replace the values to sort. At least two are required.
    pub fn set_values(&self, values: Vec<i64>) -> Result<()> {
        check_len(values.len())?;
        self.edit(&self.values, "value edit", |v| {
            *v = values;
            Ok(())
        })
    }

    /// Replace the values with a comma-separated list such as `"5, 3, 8"`.
    pub fn set_values_from_str(&self, input: &str) -> Result<()> {
        self.set_values(parse_values(input)?)
    }

    /// Replace the values with a random sequence.
    pub fn generate_values(&self, rng: &mut impl Rng) -> Result<()> {
        self.edit(&self.values, "value generation", |v| {
            *v = random_values(rng);
            Ok(())
        })
    }

    pub fn set_start(&self, p: Point) -> Result<()> {
        self.edit(&self.grid, "start move", |g| g.set_start(p))
    }

    pub fn set_end(&self, p: Point) -> Result<()> {
        self.edit(&self.grid, "end move", |g| g.set_end(p))
    }

    /// Flip the wall at `p`; returns whether it is now a wall.
    pub fn toggle_wall(&self, p: Point) -> Result<bool> {
        self.edit(&self.grid, "wall toggle", |g| g.toggle_wall(p))
    }

    pub fn set_weight(&self, p: Point, weight: i32) -> Result<()> {
        self.edit(&self.grid, "weight change", |g| g.set_weight(p, weight))
    }

    /// Scatter walls with the configured density.
    pub fn generate_maze(&self, rng: &mut impl Rng) -> Result<()> {
        let density = self.config.maze_density;
        self.edit(&self.grid, "maze generation", |g| {
            g.generate_maze(rng, density);
            Ok(())
        })
    }

    /// Forget the last search while keeping walls and markers.
    pub fn clear_search(&self) -> Result<()> {
        self.edit(&self.grid, "search reset", |g| {
            g.reset_search();
            Ok(())
        })
    }

    /// Replace the grid with an empty one; start and end are unset.
    pub fn reset_grid(&self) -> Result<()> {
        let fresh = Grid::from_config(&self.config)?;
        self.edit(&self.grid, "grid reset", |g| {
            *g = fresh;
            Ok(())
        })
    }

    // The control is reset before the run becomes visible, so a cancel sent
    // by anyone who has seen `is_running()` is kept.
    fn begin(&self) -> Result<RunGuard<'_>> {
        self.state
            .begin_with(|| self.control.reset())
            .inspect_err(|_| {
                log::warn!("rejected a run while another is active");
            })
    }

    /// Sort the session's values, storing them back once sorted.
    ///
    /// Blocks the calling thread for the whole run. Pause, resume and cancel
    /// through [`control`](Self::control) from another thread.
    pub fn run_sort(
        &self,
        algorithm: SortAlgorithm,
        sink: &mut dyn StepSink<SortStep<i64>>,
    ) -> Result<SortReport> {
        let guard = self.begin()?;
        let input = self.values();
        match sort_with(&guard, &input, algorithm, &self.config, &self.control, sink) {
            Ok(report) => {
                log::info!(
                    "{} sorted {} values in {} steps",
                    algorithm.title(),
                    input.len(),
                    report.steps
                );
                *lock(&self.values) = report.values.clone();
                Ok(report)
            }
            Err(e) => {
                log::info!("{} stopped: {e}", algorithm.title());
                Err(e)
            }
        }
    }

    /// Search the session's grid from start to end, storing the searched
    /// grid back once done.
    pub fn run_pathfind(
        &self,
        algorithm: PathAlgorithm,
        sink: &mut dyn StepSink<PathStep>,
    ) -> Result<PathReport> {
        let guard = self.begin()?;
        let input = self.grid();
        match pathfind_with(&guard, &input, algorithm, &self.config, &self.control, sink) {
            Ok(report) => {
                match &report.path {
                    Some(path) => log::info!(
                        "{} found a {}-hop path after {} visits",
                        algorithm.title(),
                        path.hops(),
                        report.visited
                    ),
                    None => log::info!(
                        "{}: no path after {} visits",
                        algorithm.title(),
                        report.visited
                    ),
                }
                *lock(&self.grid) = report.grid.clone();
                Ok(report)
            }
            Err(e) => {
                log::info!("{} stopped: {e}", algorithm.title());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use algoviz_core::Recorder;

    use super::*;

    fn session() -> Session {
        let config = Config::default()
            .with_animation_delay_ms(1)
            .with_search_delays_ms(0, 0);
        Session::new(config).unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = Session::new(Config::default().with_grid(0, 5)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn starts_with_random_values_and_empty_grid() {
        let s = session();
        assert!(algoviz_sort::RANDOM_LEN.contains(&s.values().len()));
        let g = s.grid();
        assert_eq!((g.rows(), g.cols()), (25, 50));
        assert_eq!(g.start(), None);
        assert!(!s.is_running());
    }

    #[test]
    fn value_edits() {
        let s = session();
        s.set_values_from_str("4, 2, 9").unwrap();
        assert_eq!(s.values(), vec![4, 2, 9]);
        assert!(matches!(s.set_values(vec![1]), Err(Error::InvalidInput(_))));
        assert!(s.set_values_from_str("4, two").is_err());
        assert_eq!(s.values(), vec![4, 2, 9]);
    }

    #[test]
    fn sorted_values_are_stored() {
        let s = session();
        s.set_values(vec![5, 3, 8, 1]).unwrap();
        let mut rec = Recorder::<SortStep<i64>>::new();
        let report = s.run_sort(SortAlgorithm::Insertion, &mut rec).unwrap();
        assert_eq!(report.steps, 4);
        assert_eq!(s.values(), vec![1, 3, 5, 8]);
        assert_eq!(s.stats().step_count, 4);
        assert!(!s.stats().is_running);
    }

    #[test]
    fn grid_edits_and_search() {
        let s = session();
        s.set_start(Point::new(0, 0)).unwrap();
        s.set_end(Point::new(0, 4)).unwrap();
        assert!(s.toggle_wall(Point::new(0, 2)).unwrap());
        s.set_weight(Point::new(1, 2), 3).unwrap();

        let mut rec = Recorder::<PathStep>::new();
        let report = s.run_pathfind(PathAlgorithm::Dijkstra, &mut rec).unwrap();
        // Through the heavy node or one row further down, both cost 8.
        assert_eq!(report.grid.node(Point::new(0, 4)).unwrap().distance, 8);
        assert_eq!(s.stats().visited_count, report.visited);
        assert_eq!(s.grid().node(Point::new(0, 4)).unwrap().distance, 8);

        s.clear_search().unwrap();
        let end = s.grid().node(Point::new(0, 4)).cloned().unwrap();
        assert_eq!(end.distance, algoviz_paths::UNREACHABLE);
        assert!(s.grid().is_wall(Point::new(0, 2)));

        s.reset_grid().unwrap();
        assert_eq!(s.grid().start(), None);
        assert!(!s.grid().is_wall(Point::new(0, 2)));
    }

    #[test]
    fn maze_keeps_markers_open() {
        let s = session();
        s.set_start(Point::new(3, 3)).unwrap();
        s.set_end(Point::new(10, 40)).unwrap();
        s.generate_maze(&mut rand::rng()).unwrap();
        let g = s.grid();
        assert!(!g.is_wall(Point::new(3, 3)));
        assert!(!g.is_wall(Point::new(10, 40)));
        assert_eq!(g.start(), Some(Point::new(3, 3)));
    }

    #[test]
    fn cancel_seen_after_start_is_kept() {
        let s = session();
        s.set_values(vec![3, 1, 2]).unwrap();
        // Cancelled before the run: cleared by the run's setup.
        s.control().cancel();
        let control = s.control().clone();
        let mut cancelled_once = false;
        let mut sink = |_: &SortStep<i64>| {
            if !cancelled_once {
                cancelled_once = true;
                control.cancel();
            }
        };
        // Cancelled once running: honoured at the first step boundary.
        assert_eq!(s.run_sort(SortAlgorithm::Bubble, &mut sink), Err(Error::Cancelled));
        assert_eq!(s.values(), vec![3, 1, 2]);
    }

    #[test]
    fn missing_endpoints_fail_without_changes() {
        let s = session();
        s.set_start(Point::new(1, 1)).unwrap();
        let before = s.grid();
        let mut rec = Recorder::<PathStep>::new();
        let err = s.run_pathfind(PathAlgorithm::Bfs, &mut rec).unwrap_err();
        assert!(matches!(err, Error::PreconditionUnmet(_)));
        assert_eq!(s.grid(), before);
        assert!(rec.events.is_empty());
        assert!(!s.is_running());
    }
}
