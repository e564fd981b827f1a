use std::collections::VecDeque;

use algoviz_core::Result;

use crate::grid::Grid;
use crate::neighbors::Neighbors;
use crate::path::Path;
use crate::{PathStep, PathStepper};

impl Grid {
    /// Breadth-first search from start to end.
    ///
    /// Explores level by level, so the returned path has the fewest hops.
    /// Returns `Ok(None)` when the end is unreachable.
    pub fn bfs(&mut self, st: &mut PathStepper<'_>) -> Result<Option<Path>> {
        let (start, end) = self.begin_search()?;

        // Marked when queued, so nothing is queued twice.
        let mut seen = vec![false; self.len()];
        let mut queue = VecDeque::new();
        let mut nb = Neighbors::new();

        seen[start] = true;
        self.nodes_mut()[start].distance = 0;
        queue.push_back(start);

        while let Some(ci) = queue.pop_front() {
            st.visit(PathStep::Visit(self.point(ci)))?;
            if ci == end {
                return Ok(Some(self.trace_path(end)));
            }

            let next = self.nodes()[ci].distance + 1;
            for &ni in nb.open(self, ci) {
                if seen[ni] {
                    continue;
                }
                seen[ni] = true;
                let n = &mut self.nodes_mut()[ni];
                n.distance = next;
                n.previous = Some(ci);
                queue.push_back(ni);
            }
        }

        Ok(None)
    }
}
