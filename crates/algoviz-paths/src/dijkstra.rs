use algoviz_core::Result;

use crate::grid::Grid;
use crate::neighbors::Neighbors;
use crate::path::Path;
use crate::queue::OpenSet;
use crate::{PathStep, PathStepper};

impl Grid {
    /// Dijkstra's algorithm from start to end, using node weights as the
    /// cost of entering a node.
    ///
    /// Nodes are settled in order of distance; equal distances are settled
    /// in the order they were first queued. Returns `Ok(None)` once the
    /// frontier is exhausted without reaching the end.
    pub fn dijkstra(&mut self, st: &mut PathStepper<'_>) -> Result<Option<Path>> {
        let (start, end) = self.begin_search()?;

        let mut settled = vec![false; self.len()];
        let mut open = OpenSet::new();
        let mut nb = Neighbors::new();

        self.nodes_mut()[start].distance = 0;
        open.push(start, 0);

        while let Some((ci, dist)) = open.pop() {
            // Skip stale entries.
            if settled[ci] || dist > self.nodes()[ci].distance {
                continue;
            }
            settled[ci] = true;

            st.visit(PathStep::Visit(self.point(ci)))?;
            if ci == end {
                return Ok(Some(self.trace_path(end)));
            }

            for &ni in nb.open(self, ci) {
                if settled[ni] {
                    continue;
                }
                let n = &mut self.nodes_mut()[ni];
                let tentative = dist.saturating_add(n.weight);
                if tentative < n.distance {
                    n.distance = tentative;
                    n.previous = Some(ci);
                    open.push(ni, tentative);
                }
            }
        }

        Ok(None)
    }
}
