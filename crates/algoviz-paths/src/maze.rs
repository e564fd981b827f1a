use rand::Rng;

use crate::grid::Grid;

impl Grid {
    /// Scatter walls at random: every node other than start and end becomes
    /// a wall with probability `density` and is opened otherwise.
    ///
    /// Weights are kept; the previous search is forgotten.
    pub fn generate_maze(&mut self, rng: &mut impl Rng, density: f64) {
        self.reset_search();
        for i in 0..self.len() {
            let p = self.point(i);
            if self.is_start(p) || self.is_end(p) {
                continue;
            }
            let r: f64 = rng.random();
            self.nodes_mut()[i].is_wall = r < density;
        }
        log::debug!(
            "maze with density {density}: {} walls",
            self.nodes().iter().filter(|n| n.is_wall).count()
        );
    }
}
