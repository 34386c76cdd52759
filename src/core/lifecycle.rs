//! Page-lifetime cancellation shared by every subscription.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation signal, created once at page construction and threaded
/// into every subscription.
///
/// Clones are cheap and observe the same signal. Subscription callbacks are
/// wrapped with [`guard`](Lifecycle::guard) so emissions arriving after
/// [`teardown`](Lifecycle::teardown) are dropped instead of mutating state;
/// async continuations check [`is_cancelled`](Lifecycle::is_cancelled) after
/// each suspension point for the same reason.
#[derive(Clone, Debug, Default)]
pub struct Lifecycle {
    cancelled: Arc<AtomicBool>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once [`teardown`](Self::teardown) has run.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Marks the signal complete.
    ///
    /// Calling this a second time is a no-op.
    pub fn teardown(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Wraps a subscription callback so it stops firing after teardown.
    pub fn guard<T>(&self, f: impl Fn(T) + 'static) -> impl Fn(T) + 'static {
        let token = self.clone();
        move |value| {
            if !token.is_cancelled() {
                f(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_guard_passes_emissions_while_alive() {
        let lifecycle = Lifecycle::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let guarded = lifecycle.guard(move |v: u32| sink.borrow_mut().push(v));

        guarded(1);
        guarded(2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_guard_drops_emissions_after_teardown() {
        let lifecycle = Lifecycle::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let guarded = lifecycle.guard(move |v: u32| sink.borrow_mut().push(v));

        guarded(1);
        lifecycle.teardown();
        guarded(2);
        guarded(3);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let lifecycle = Lifecycle::new();
        lifecycle.teardown();
        lifecycle.teardown();
        assert!(lifecycle.is_cancelled());
    }

    #[test]
    fn test_clones_share_the_signal() {
        let lifecycle = Lifecycle::new();
        let clone = lifecycle.clone();
        clone.teardown();
        assert!(lifecycle.is_cancelled());
    }
}
