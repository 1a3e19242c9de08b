//! Stopping a search from another thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared stop flag for one background search.
///
/// The worker handle and the search's observer each hold a clone. Either
/// side may [`cancel`](Self::cancel): the handle when the caller gives up,
/// the observer when nobody reads its progress any more. The search loop
/// checks [`is_cancelled`](Self::is_cancelled) before every pop, so it stops
/// within one expansion.
#[derive(Clone, Debug, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Flag the search for stopping. Calling it again has no effect.
    #[inline]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}
