#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

// loom integration
#[doc(hidden)]
macro_rules! cfg_loom {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "loom")]
            $item
        )*
    };
}
#[doc(hidden)]
macro_rules! cfg_not_loom {
    ($($item:item)*) => {
        $(
            #[cfg(not(feature = "loom"))]
            $item
        )*
    };
}

#[doc(hidden)]
mod sync;
//loom integration finished.

/// A module containing the error types used by the library.
pub mod error;

mod deque;
mod semaphore;

pub use deque::{BlockingDeque, ConsumerIter};
pub use error::TryPopError;
pub use semaphore::Semaphore;
