use crate::sync::{self, Condvar, Mutex};

/// A counting semaphore for threads.
///
/// Tracks a number of available units. [`signal`](Semaphore::signal) adds a
/// unit and wakes one waiter, [`wait`](Semaphore::wait) blocks until a unit is
/// available and takes it.
///
/// The count is only ever touched with `count` locked, and waiters re-check
/// `count > 0` under that lock before sleeping, so a `signal` racing with a
/// `wait` is never lost.
///
/// No fairness is guaranteed: which of several blocked waiters a `signal`
/// releases is up to the platform's condition variable.
///
/// # Example
///
/// ```
/// use blocking_deque::Semaphore;
/// use std::sync::Arc;
/// use std::thread;
///
/// let sem = Arc::new(Semaphore::new(0));
/// let signaller = sem.clone();
/// thread::spawn(move || signaller.signal());
/// sem.wait();
/// assert!(!sem.try_wait());
/// ```
pub struct Semaphore {
    count: Mutex<usize>,
    available: Condvar,
}

impl Semaphore {
    /// Creates a semaphore holding `count` units.
    #[cfg(not(feature = "loom"))]
    pub const fn new(count: usize) -> Self {
        Self {
            count: Mutex::new(count),
            available: Condvar::new(),
        }
    }

    /// Creates a semaphore holding `count` units.
    #[cfg(feature = "loom")]
    pub fn new(count: usize) -> Self {
        Self {
            count: Mutex::new(count),
            available: Condvar::new(),
        }
    }

    /// Adds a unit and wakes one blocked [`wait`](Semaphore::wait), if any.
    ///
    /// Never blocks for longer than the internal critical section.
    pub fn signal(&self) {
        let mut count = sync::lock(&self.count);
        *count += 1;
        /* Notifying with the lock held: the woken waiter can't observe the
         * count until we release, and a waiter that hasn't started sleeping
         * yet will see count > 0 before it does. */
        self.available.notify_one();
    }

    /// Takes a unit, blocking until one is available.
    pub fn wait(&self) {
        let mut count = sync::lock(&self.count);
        if *count == 0 {
            tracing::trace!("semaphore empty, parking");
        }
        while *count == 0 {
            count = match self.available.wait(count) {
                Ok(g) => g,
                Err(poisoned) => poisoned.into_inner(),
            };
        }
        *count -= 1;
    }

    /// Takes a unit if one is available, without blocking.
    ///
    /// Returns `true` if a unit was taken.
    pub fn try_wait(&self) -> bool {
        let mut count = sync::lock(&self.count);
        if *count == 0 {
            false
        } else {
            *count -= 1;
            true
        }
    }
}

impl Default for Semaphore {
    fn default() -> Self {
        Self::new(0)
    }
}

impl std::fmt::Debug for Semaphore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Semaphore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
