//! Instrumented pathfinding on a 4-connected grid.
//!
//! Searches run on a [`Grid`] between its start and end markers, reporting
//! every node they expand as a [`PathStep::Visit`] and then the found path as
//! [`PathStep::Path`] events:
//!
//! - **BFS** ([`Grid::bfs`]) fewest hops
//! - **DFS** ([`Grid::dfs`]) some path, not necessarily short
//! - **Dijkstra** ([`Grid::dijkstra`]) least total weight
//! - **A\*** ([`Grid::astar`]) least total weight, Manhattan heuristic
//!
//! A search only fails on unmet preconditions or cancellation; an unreachable
//! end is `Ok(None)`.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod grid;
mod maze;
mod neighbors;
mod path;
mod queue;
mod step;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use algoviz_core::{Error, Result, Stepper};

pub use grid::{Grid, Node, UNREACHABLE};
pub use neighbors::Neighbors;
pub use path::Path;
pub use step::PathStep;

/// Stepper specialised to pathfinding events.
pub type PathStepper<'a> = Stepper<'a, PathStep>;

/// The available search algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PathAlgorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl PathAlgorithm {
    pub const ALL: [Self; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::AStar];

    /// Short identifier, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "aStar",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Bfs => "Breadth-First Search (BFS)",
            Self::Dfs => "Depth-First Search (DFS)",
            Self::Dijkstra => "Dijkstra's Algorithm",
            Self::AStar => "A* Search",
        }
    }

    pub fn time_complexity(self) -> &'static str {
        match self {
            Self::Bfs | Self::Dfs => "O(V + E)",
            Self::Dijkstra | Self::AStar => "O(E + V log V)",
        }
    }

    /// Whether the found path is always a cheapest one.
    pub fn guarantees_shortest(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    /// Search `grid` from start to end, then animate the path found with
    /// `path_delay` between nodes.
    ///
    /// Unset start or end is [`Error::PreconditionUnmet`] and leaves the grid
    /// untouched.
    pub fn find(
        self,
        grid: &mut Grid,
        st: &mut PathStepper<'_>,
        path_delay: Duration,
    ) -> Result<Option<Path>> {
        log::debug!("{} on a {}x{} grid", self.title(), grid.rows(), grid.cols());
        let found = match self {
            Self::Bfs => grid.bfs(st),
            Self::Dfs => grid.dfs(st),
            Self::Dijkstra => grid.dijkstra(st),
            Self::AStar => grid.astar(st),
        }?;
        log::debug!(
            "{} visited {} nodes, path: {:?}",
            self.name(),
            st.visited(),
            found.as_ref().map(Path::hops)
        );
        if let Some(path) = &found {
            path.animate(st, path_delay)?;
        }
        Ok(found)
    }
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PathAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        if t == "a*" || t == "A*" {
            return Ok(Self::AStar);
        }
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_owned()))
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::time::Duration;

    use algoviz_core::{Control, Point, Recorder, Result, RunState, Stepper};

    use crate::{Grid, Path, PathStep, PathStepper};

    /// Run `f` on `grid` with a zero-delay stepper; returns the result and
    /// the visited points in order.
    pub(crate) fn search_grid(
        grid: &mut Grid,
        f: impl FnOnce(&mut Grid, &mut PathStepper<'_>) -> Result<Option<Path>>,
    ) -> (Result<Option<Path>>, Vec<Point>) {
        let mut rec = Recorder::new();
        let control = Control::new();
        let state = RunState::new();
        let mut st = Stepper::new(&mut rec, &control, &state, Duration::ZERO);
        let res = f(grid, &mut st);
        let visits = rec
            .events
            .iter()
            .filter_map(|e| match e {
                PathStep::Visit(p) => Some(*p),
                PathStep::Path(_) => None,
            })
            .collect();
        (res, visits)
    }

    /// Like [`search_grid`] on a grid parsed from ASCII art.
    pub(crate) fn search(
        art: &str,
        f: impl FnOnce(&mut Grid, &mut PathStepper<'_>) -> Result<Option<Path>>,
    ) -> (Result<Option<Path>>, Vec<Point>) {
        let mut grid = Grid::from_ascii(art).unwrap();
        search_grid(&mut grid, f)
    }
}
