use std::time::Duration;

use algoviz_core::{Point, Result};

use crate::{PathStep, PathStepper};

/// A path found by a search, ordered from start to end.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<Point>,
}

impl Path {
    pub(crate) fn new(nodes: Vec<Point>) -> Self {
        Self { nodes }
    }

    /// Every node on the path, start and end included.
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Number of moves from start to end.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Point> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.nodes.last().copied()
    }

    /// Report every node after the start as a [`PathStep::Path`], pausing
    /// `delay` after each.
    pub fn animate(&self, st: &mut PathStepper<'_>, delay: Duration) -> Result<()> {
        for &p in self.nodes.iter().skip(1) {
            st.emit_for(PathStep::Path(p), delay)?;
        }
        Ok(())
    }
}
