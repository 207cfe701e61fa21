//! Progress reporting and cooperative cancellation.
//!
//! Progress is reported synchronously from the pair processing loop, every
//! `progress_interval` pairs and once more with `100` at the end.
//! Cancellation is checked between two pairs, never in the middle of one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::{GeoStegoError, Result};

/// Receives progress in percent, `0..=100`
pub trait Progress {
    fn report(&mut self, percent: u8);

    /// polled between two pixel pairs
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F: FnMut(u8)> Progress for F {
    fn report(&mut self, percent: u8) {
        self(percent)
    }
}

/// Discards all progress reports
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn report(&mut self, _percent: u8) {}
}

/// Shared flag to request cancellation of an in-flight encode or decode.
///
/// Clones share the same flag, so one clone can be handed to another thread.
#[derive(Debug, Default, Clone)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Wraps a progress receiver and makes it observe a [`CancelFlag`]
pub struct Cancellable<P> {
    inner: P,
    flag: CancelFlag,
}

impl<P: Progress> Cancellable<P> {
    pub fn new(inner: P, flag: CancelFlag) -> Self {
        Self { inner, flag }
    }
}

impl<P: Progress> Progress for Cancellable<P> {
    fn report(&mut self, percent: u8) {
        self.inner.report(percent)
    }

    fn is_cancelled(&self) -> bool {
        self.flag.is_cancelled() || self.inner.is_cancelled()
    }
}

/// Throttles reports to one every `interval` pairs, reports never decrease
pub(crate) struct ProgressTracker<'p> {
    progress: &'p mut dyn Progress,
    interval: usize,
    pairs_seen: usize,
    last_reported: u8,
}

impl<'p> ProgressTracker<'p> {
    pub fn new(progress: &'p mut dyn Progress, interval: usize) -> Self {
        Self {
            progress,
            interval: interval.max(1),
            pairs_seen: 0,
            last_reported: 0,
        }
    }

    /// Called once per processed pair with the bits done so far and the bits expected in total.
    ///
    /// The expected total may change while decoding, a shrinking percentage is
    /// reported as the last value again.
    pub fn pair_done(&mut self, bits_done: usize, bits_total: usize) -> Result<()> {
        self.pairs_seen += 1;
        if self.progress.is_cancelled() {
            return Err(GeoStegoError::Cancelled);
        }
        if self.pairs_seen % self.interval == 0 {
            self.last_reported = percent_of(bits_done, bits_total).max(self.last_reported);
            self.progress.report(self.last_reported);
        }

        Ok(())
    }

    pub fn finish(&mut self) {
        self.progress.report(100);
    }
}

/// never reaches 100 before [`ProgressTracker::finish`]
fn percent_of(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (done.saturating_mul(100) / total).min(99) as u8
}
