use algoviz_core::Result;

use crate::grid::Grid;
use crate::neighbors::Neighbors;
use crate::path::Path;
use crate::{PathStep, PathStepper};

impl Grid {
    /// Depth-first search from start to end.
    ///
    /// Neighbors are pushed in reverse so they pop in the usual
    /// right, left, down, up order. The path found is not necessarily the
    /// shortest.
    pub fn dfs(&mut self, st: &mut PathStepper<'_>) -> Result<Option<Path>> {
        let (start, end) = self.begin_search()?;

        let mut seen = vec![false; self.len()];
        let mut stack = vec![start];
        let mut nb = Neighbors::new();

        seen[start] = true;
        self.nodes_mut()[start].distance = 0;

        while let Some(ci) = stack.pop() {
            st.visit(PathStep::Visit(self.point(ci)))?;
            if ci == end {
                return Ok(Some(self.trace_path(end)));
            }

            let next = self.nodes()[ci].distance + 1;
            for &ni in nb.open(self, ci).iter().rev() {
                if seen[ni] {
                    continue;
                }
                seen[ni] = true;
                let n = &mut self.nodes_mut()[ni];
                n.distance = next;
                n.previous = Some(ci);
                stack.push(ni);
            }
        }

        Ok(None)
    }
}
