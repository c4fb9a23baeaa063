//! Interrupt-guarded shared state.
//!
//! Everything the tick interrupt and the main loop both touch lives in one
//! value behind a [`Guarded`].  The only way in is [`Guarded::lock`], which
//! runs the closure inside a `critical-section`, so a tick can never observe
//! a half-written update from the main loop and vice versa.

use core::cell::RefCell;

use critical_section::Mutex;

/// A `static`-friendly cell whose contents are only reachable inside a
/// critical section.
pub struct Guarded<T> {
    inner: Mutex<RefCell<T>>,
}

impl<T> Guarded<T> {
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(value)),
        }
    }

    /// Run `f` with exclusive access to the guarded value.
    ///
    /// Nested `lock` calls on the same `Guarded` panic (the `RefCell` is
    /// already borrowed); never call back into the owner from inside `f`.
    pub fn lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    /// Consume the guard and return the value.
    pub fn into_inner(self) -> T {
        self.inner.into_inner().into_inner()
    }
}
