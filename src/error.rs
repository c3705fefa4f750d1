use std::error::Error;
use std::fmt;

/// Error for the non-blocking pops of a [`BlockingDeque`](crate::BlockingDeque).
///
/// Returned by [`try_pop_front`](crate::BlockingDeque::try_pop_front) and
/// [`try_pop_back`](crate::BlockingDeque::try_pop_back).
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TryPopError {
    /// No element was available at the time of the call.
    Empty,
}

impl Error for TryPopError {}

impl fmt::Display for TryPopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TryPopError::Empty => f.write_str("popping from an empty queue"),
        }
    }
}
