//! Frame pacing and Ctrl-C handling.
//!
//! A [`Pacer`] is the only place the show waits. [`ThreadPacer`] sleeps for
//! real but wakes up early when an [`Interrupt`] is raised, so a Ctrl-C during
//! the animation unwinds through the show and the cursor gets restored.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use super::error::ShowError;

/// Exit status used when the user interrupts with Ctrl-C.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Something that can wait between frames.
pub trait Pacer {
    /// Wait for `duration`, or fail with [`ShowError::Interrupted`].
    fn pause(&mut self, duration: Duration) -> Result<(), ShowError>;
}

/// Ctrl-C state shared with the signal handler.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    raised: Arc<AtomicBool>,
    cooperative: Arc<AtomicBool>,
}

impl Interrupt {
    /// Create an interrupt flag with no handler attached (for tests).
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the process-wide Ctrl-C handler.
    ///
    /// While cooperative, Ctrl-C only raises the flag. Otherwise the process
    /// exits with status 130, which is what a blocked line read needs.
    pub fn install() -> Result<Self, ctrlc::Error> {
        let interrupt = Self::new();
        let handler = interrupt.clone();
        ctrlc::set_handler(move || {
            handler.raise();
            if !handler.is_cooperative() {
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
        })?;
        Ok(interrupt)
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    pub fn set_cooperative(&self, cooperative: bool) {
        self.cooperative.store(cooperative, Ordering::SeqCst);
    }

    pub fn is_cooperative(&self) -> bool {
        self.cooperative.load(Ordering::SeqCst)
    }
}

/// Sleeps on the current thread, checking an [`Interrupt`] between slices.
#[derive(Debug, Clone)]
pub struct ThreadPacer {
    interrupt: Interrupt,
    slice: Duration,
}

impl ThreadPacer {
    /// Granularity of interrupt checks.
    pub const DEFAULT_SLICE: Duration = Duration::from_millis(25);

    pub fn new(interrupt: Interrupt) -> Self {
        Self {
            interrupt,
            slice: Self::DEFAULT_SLICE,
        }
    }

    pub fn with_slice(mut self, slice: Duration) -> Self {
        self.slice = slice.max(Duration::from_millis(1));
        self
    }
}

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) -> Result<(), ShowError> {
        let deadline = Instant::now() + duration;
        loop {
            if self.interrupt.is_raised() {
                return Err(ShowError::Interrupted);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            thread::sleep(self.slice.min(deadline - now));
        }
    }
}

/// Records requested pauses without waiting.
#[derive(Debug, Clone, Default)]
pub struct RecordingPacer {
    pauses: Vec<Duration>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Sum of all recorded pauses.
    pub fn total(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) -> Result<(), ShowError> {
        self.pauses.push(duration);
        Ok(())
    }
}
