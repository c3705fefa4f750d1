#![allow(unused_imports)]
cfg_loom! {
    pub(crate) use loom::sync::*;
}

cfg_not_loom! {
    pub(crate) use std::sync::*;
}

/// Locks `mutex`, ignoring poison.
///
/// A panicking holder can't leave the counter or the storage half-updated,
/// so the data behind a poisoned lock is still valid.
#[inline]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    }
}
