//! Mutex shim so the engine works with or without `std`.

/// Thin wrapper over [`std::sync::Mutex`] matching `spin`'s infallible
/// lock API.
#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    /// Creates a new mutex around the value.
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    /// Locks the mutex, recovering the data from a poisoned lock; the
    /// engine keeps serving after a caller panicked while holding a guard.
    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;
