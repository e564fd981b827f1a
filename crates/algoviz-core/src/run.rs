//! Live run bookkeeping: [`RunState`], [`RunGuard`] and [`RunStats`].

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::error::{Error, Result};

/// Counters and the running flag of the (single) active run.
///
/// Counters are atomics so another thread can read a consistent-enough
/// snapshot while the algorithm is running.
#[derive(Debug, Default)]
pub struct RunState {
    /// Held from the start of `begin` until the guard drops.
    claimed: AtomicBool,
    /// Published once the run is set up.
    running: AtomicBool,
    steps: AtomicU64,
    visited: AtomicU64,
}

/// A point-in-time copy of a [`RunState`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    pub is_running: bool,
    pub is_paused: bool,
    pub step_count: u64,
    pub visited_count: u64,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the run slot and zero the counters.
    ///
    /// Fails with [`Error::ConcurrentRunRejected`] if a run is active. The
    /// slot is released when the returned guard is dropped.
    pub fn begin(&self) -> Result<RunGuard<'_>> {
        self.begin_with(|| {})
    }

    /// Like [`begin`](Self::begin), running `prepare` after the slot is
    /// claimed but before [`is_running`](Self::is_running) turns true.
    ///
    /// Whoever has seen the run as running therefore acts after `prepare`.
    pub fn begin_with(&self, prepare: impl FnOnce()) -> Result<RunGuard<'_>> {
        if self
            .claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::ConcurrentRunRejected);
        }
        let guard = RunGuard { state: self };
        prepare();
        self.steps.store(0, Ordering::Relaxed);
        self.visited.store(0, Ordering::Relaxed);
        self.running.store(true, Ordering::Release);
        Ok(guard)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    #[inline]
    pub fn step_count(&self) -> u64 {
        self.steps.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn visited_count(&self) -> u64 {
        self.visited.load(Ordering::Relaxed)
    }

    #[inline]
    pub(crate) fn add_step(&self) {
        self.steps.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn add_visit(&self) {
        self.visited.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot the counters. `is_paused` comes from the caller's control.
    pub fn stats(&self, is_paused: bool) -> RunStats {
        RunStats {
            is_running: self.is_running(),
            is_paused,
            step_count: self.step_count(),
            visited_count: self.visited_count(),
        }
    }
}

/// Holds the run slot of a [`RunState`] for the duration of one run.
#[derive(Debug)]
pub struct RunGuard<'a> {
    state: &'a RunState,
}

impl RunGuard<'_> {
    /// The state this guard belongs to.
    pub fn state(&self) -> &RunState {
        self.state
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.state.running.store(false, Ordering::Release);
        self.state.claimed.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_rejected() {
        let s = RunState::new();
        let guard = s.begin().unwrap();
        assert!(s.is_running());
        assert_eq!(s.begin().unwrap_err(), Error::ConcurrentRunRejected);
        drop(guard);
        assert!(!s.is_running());
        assert!(s.begin().is_ok());
    }

    #[test]
    fn prepare_runs_before_the_run_is_visible() {
        let s = RunState::new();
        let mut seen = None;
        let guard = s
            .begin_with(|| {
                seen = Some((s.is_running(), s.begin().map(|_| ())));
            })
            .unwrap();
        assert_eq!(seen, Some((false, Err(Error::ConcurrentRunRejected))));
        assert!(s.is_running());
        drop(guard);
        assert!(s.begin().is_ok());
    }

    #[test]
    fn begin_zeroes_counters() {
        let s = RunState::new();
        {
            let _g = s.begin().unwrap();
            s.add_step();
            s.add_step();
            s.add_visit();
        }
        // Counters survive the end of a run for the driver to display.
        assert_eq!(s.step_count(), 2);
        assert_eq!(s.visited_count(), 1);

        let _g = s.begin().unwrap();
        assert_eq!(s.stats(false), RunStats {
            is_running: true,
            is_paused: false,
            step_count: 0,
            visited_count: 0,
        });
    }
}
