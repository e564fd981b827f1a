use algoviz_paths::{Grid, Path, PathAlgorithm};
use algoviz_sort::SortAlgorithm;

/// Outcome of a completed sort.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortReport {
    pub algorithm: SortAlgorithm,
    /// The sorted values.
    pub values: Vec<i64>,
    /// Counted steps (swaps and writes).
    pub steps: u64,
}

/// Outcome of a completed search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathReport {
    pub algorithm: PathAlgorithm,
    /// The path found, or `None` if the end is unreachable.
    pub path: Option<Path>,
    /// Nodes expanded by the search.
    pub visited: u64,
    /// The grid as left by the search.
    pub grid: Grid,
}

impl PathReport {
    /// Hops on the path found, 0 if none.
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Path::hops)
    }
}
