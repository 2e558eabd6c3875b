//! Lock shim: `std::sync::Mutex` under `std`, `spin::Mutex` under `alloc`.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;
#[cfg(feature = "std")]
pub type Guard<'a, T> = std::sync::MutexGuard<'a, T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub type Guard<'a, T> = spin::MutexGuard<'a, T>;

/// Mutex with an infallible `lock`.
pub struct Mutex<T>(Inner<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(Inner::new(value))
    }

    /// Locks the mutex. A poisoned `std` lock is recovered, not propagated.
    #[cfg(feature = "std")]
    pub fn lock(&self) -> Guard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> Guard<'_, T> {
        self.0.lock()
    }
}
