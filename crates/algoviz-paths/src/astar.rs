use algoviz_core::Result;

use crate::grid::{Grid, UNREACHABLE};
use crate::neighbors::Neighbors;
use crate::path::Path;
use crate::queue::OpenSet;
use crate::{PathStep, PathStepper};

impl Grid {
    /// A* search from start to end with the Manhattan distance heuristic.
    ///
    /// The heuristic never overestimates on a 4-connected grid whose weights
    /// are at least 1, so the path is optimal. The open set is ordered by
    /// f-score, ties in queue order. A node whose g-score improves while
    /// queued is queued again and the stale entry skipped; expanded nodes are
    /// never expanded twice.
    pub fn astar(&mut self, st: &mut PathStepper<'_>) -> Result<Option<Path>> {
        let (start, end) = self.begin_search()?;
        let goal = self.point(end);

        let mut closed = vec![false; self.len()];
        let mut f_score = vec![UNREACHABLE; self.len()];
        let mut open = OpenSet::new();
        let mut nb = Neighbors::new();

        // g-scores live in `Node::distance`.
        self.nodes_mut()[start].distance = 0;
        f_score[start] = self.point(start).manhattan(goal);
        open.push(start, f_score[start]);

        while let Some((ci, f)) = open.pop() {
            if closed[ci] || f > f_score[ci] {
                continue;
            }
            closed[ci] = true;

            st.visit(PathStep::Visit(self.point(ci)))?;
            if ci == end {
                return Ok(Some(self.trace_path(end)));
            }

            let g = self.nodes()[ci].distance;
            for &ni in nb.open(self, ci) {
                if closed[ni] {
                    continue;
                }
                let h = self.point(ni).manhattan(goal);
                let n = &mut self.nodes_mut()[ni];
                let tentative = g.saturating_add(n.weight);
                if tentative < n.distance {
                    n.distance = tentative;
                    n.previous = Some(ci);
                    f_score[ni] = tentative.saturating_add(h);
                    open.push(ni, f_score[ni]);
                }
            }
        }

        Ok(None)
    }
}
