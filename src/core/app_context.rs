//! Application lifecycle state shared with the outside sender

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Handle to the "application mounted" latch.
///
/// The latch starts unset and flips to set once, when the application
/// becomes interactive. It never reverts. Clones observe the same latch.
///
/// # Example
///
/// ```
/// use fanout_logger::core::AppContext;
///
/// let app = AppContext::new();
/// let seen_by_sender = app.clone();
///
/// assert!(app.mark_mounted());
/// assert!(!app.mark_mounted());
/// assert!(seen_by_sender.is_mounted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    mounted: Arc<AtomicBool>,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context whose latch is already set
    pub fn mounted() -> Self {
        let ctx = Self::new();
        ctx.mark_mounted();
        ctx
    }

    /// Set the latch. Returns `true` only for the call that performed the
    /// transition.
    pub fn mark_mounted(&self) -> bool {
        !self.mounted.swap(true, Ordering::AcqRel)
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }
}
