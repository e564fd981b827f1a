//! The pause gate and cancellation token: [`Control`].
//!
//! A `Control` is shared between the running algorithm and whoever drives
//! it. The algorithm calls [`checkpoint`](Control::checkpoint) at every step
//! boundary; other threads call [`pause`](Control::pause),
//! [`resume`](Control::resume) and [`cancel`](Control::cancel).

use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

type ResumeHook = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct Flags {
    paused: bool,
    cancelled: bool,
    resume_hooks: Vec<ResumeHook>,
}

#[derive(Default)]
struct Shared {
    flags: Mutex<Flags>,
    wake: Condvar,
}

/// Cooperative pause/resume/cancel handle.
///
/// Cloning yields another handle to the same state.
#[derive(Clone, Default)]
pub struct Control {
    shared: Arc<Shared>,
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = self.lock();
        f.debug_struct("Control")
            .field("paused", &flags.paused)
            .field("cancelled", &flags.cancelled)
            .field("resume_hooks", &flags.resume_hooks.len())
            .finish()
    }
}

impl Control {
    /// Create a new, running, non-cancelled control.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Flags> {
        self.shared
            .flags
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether the gate is currently closed.
    pub fn is_paused(&self) -> bool {
        self.lock().paused
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.lock().cancelled
    }

    /// Close the gate. The algorithm stops at its next step boundary.
    pub fn pause(&self) {
        let mut flags = self.lock();
        if !flags.paused {
            log::trace!("pause requested");
        }
        flags.paused = true;
    }

    /// Open the gate and fire every pending [`on_resume`](Self::on_resume)
    /// callback once.
    pub fn resume(&self) {
        let hooks = {
            let mut flags = self.lock();
            if !flags.paused {
                return;
            }
            log::trace!("resume requested");
            flags.paused = false;
            std::mem::take(&mut flags.resume_hooks)
        };
        self.shared.wake.notify_all();
        for hook in hooks {
            hook();
        }
    }

    /// Flip between paused and running. Returns `true` if now paused.
    pub fn toggle(&self) -> bool {
        if self.is_paused() {
            self.resume();
            false
        } else {
            self.pause();
            true
        }
    }

    /// Request cancellation. Also wakes a paused or sleeping algorithm so it
    /// can observe the request.
    pub fn cancel(&self) {
        self.lock().cancelled = true;
        log::trace!("cancel requested");
        self.shared.wake.notify_all();
    }

    /// Register a one-shot callback fired on the next resume.
    pub fn on_resume(&self, hook: impl FnOnce() + Send + 'static) {
        self.lock().resume_hooks.push(Box::new(hook));
    }

    /// Clear pause and cancellation ahead of a new run. Pending resume
    /// callbacks are dropped.
    pub fn reset(&self) {
        let mut flags = self.lock();
        flags.paused = false;
        flags.cancelled = false;
        flags.resume_hooks.clear();
    }

    /// Step boundary: wait out `delay`, then block while paused.
    ///
    /// Returns [`Error::Cancelled`] as soon as cancellation is observed,
    /// including in the middle of the delay or while paused.
    pub fn checkpoint(&self, delay: Duration) -> Result<()> {
        let mut flags = self.lock();

        if !delay.is_zero() {
            let deadline = Instant::now() + delay;
            loop {
                if flags.cancelled {
                    return Err(Error::Cancelled);
                }
                let now = Instant::now();
                if now >= deadline {
                    break;
                }
                flags = self
                    .shared
                    .wake
                    .wait_timeout(flags, deadline - now)
                    .unwrap_or_else(PoisonError::into_inner)
                    .0;
            }
        }

        while flags.paused && !flags.cancelled {
            flags = self
                .shared
                .wake
                .wait(flags)
                .unwrap_or_else(PoisonError::into_inner);
        }

        if flags.cancelled {
            return Err(Error::Cancelled);
        }
        Ok(())
    }
}
