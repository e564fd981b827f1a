use crate::grid::Grid;

/// Cached neighbor computation helper.
///
/// Enumerates the open (in-bounds, non-wall) 4-connected neighbors of a node
/// in exploration order: right, left, down, up.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<usize>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Arena indices of the open neighbors of node `idx`.
    pub fn open(&mut self, grid: &Grid, idx: usize) -> &[usize] {
        self.buf.clear();
        for p in grid.point(idx).neighbors_4() {
            if let Some(n) = grid.idx(p) {
                if !grid.nodes()[n].is_wall {
                    self.buf.push(n);
                }
            }
        }
        &self.buf
    }
}
