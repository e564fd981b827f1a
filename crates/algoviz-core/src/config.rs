//! Run configuration: animation pacing and grid dimensions.

use std::time::Duration;

use crate::error::{Error, Result};

/// Slowest allowed per-step delay for sorting animations.
pub const MAX_ANIMATION_DELAY_MS: u64 = 1000;

/// Configuration consumed by the engines and the driver.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Delay after every sorting step, in milliseconds.
    pub animation_delay_ms: u64,
    /// Number of grid rows.
    pub grid_rows: usize,
    /// Number of grid columns.
    pub grid_cols: usize,
    /// Delay after every node visit during a search, in milliseconds.
    pub visit_delay_ms: u64,
    /// Delay after every path step during reconstruction, in milliseconds.
    pub path_delay_ms: u64,
    /// Probability that a cell becomes a wall when a maze is generated.
    pub maze_density: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animation_delay_ms: 500,
            grid_rows: 25,
            grid_cols: 50,
            visit_delay_ms: 20,
            path_delay_ms: 40,
            maze_density: 0.25,
        }
    }
}

impl Config {
    /// Set the sorting delay.
    pub fn with_animation_delay_ms(mut self, ms: u64) -> Self {
        self.animation_delay_ms = ms;
        self
    }

    /// Set the sorting delay from a speed slider value in `1..=100`.
    ///
    /// Higher speeds mean shorter delays: `1000 - 10 * speed`, never below
    /// one millisecond.
    pub fn with_speed(mut self, speed: u32) -> Self {
        let speed = u64::from(speed.clamp(1, 100));
        self.animation_delay_ms = (MAX_ANIMATION_DELAY_MS - speed * 10).max(1);
        self
    }

    /// Set the grid dimensions.
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.grid_rows = rows;
        self.grid_cols = cols;
        self
    }

    /// Set the search pacing (visit and path delays).
    pub fn with_search_delays_ms(mut self, visit: u64, path: u64) -> Self {
        self.visit_delay_ms = visit;
        self.path_delay_ms = path;
        self
    }

    /// Set the maze wall probability.
    pub fn with_maze_density(mut self, density: f64) -> Self {
        self.maze_density = density;
        self
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_ANIMATION_DELAY_MS).contains(&self.animation_delay_ms) {
            return Err(Error::InvalidConfig(format!(
                "animation_delay_ms must be in 1..={MAX_ANIMATION_DELAY_MS}, got {}",
                self.animation_delay_ms
            )));
        }
        if self.grid_rows == 0 || self.grid_cols == 0 {
            return Err(Error::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_rows, self.grid_cols
            )));
        }
        if i32::try_from(self.grid_rows).is_err() || i32::try_from(self.grid_cols).is_err() {
            return Err(Error::InvalidConfig("grid dimensions too large".into()));
        }
        if !(0.0..1.0).contains(&self.maze_density) {
            return Err(Error::InvalidConfig(format!(
                "maze_density must be in [0, 1), got {}",
                self.maze_density
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn animation_delay(&self) -> Duration {
        Duration::from_millis(self.animation_delay_ms)
    }

    #[inline]
    pub fn visit_delay(&self) -> Duration {
        Duration::from_millis(self.visit_delay_ms)
    }

    #[inline]
    pub fn path_delay(&self) -> Duration {
        Duration::from_millis(self.path_delay_ms)
    }
}

/// Human-readable label for a speed slider value.
pub fn speed_label(speed: u32) -> &'static str {
    match speed {
        91.. => "Very Fast",
        76..=90 => "Fast",
        51..=75 => "Medium",
        26..=50 => "Slow",
        _ => "Very Slow",
    }
}
