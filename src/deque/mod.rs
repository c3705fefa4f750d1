use crate::error::TryPopError;
use crate::semaphore::Semaphore;
use crate::sync::{self, Mutex};
use std::collections::VecDeque;
use std::fmt;

mod iter;
pub use iter::ConsumerIter;

/// An unbounded double-ended queue for handing values between threads.
///
/// Pushes never block. Pops block until an element is available. Every
/// stored element is accounted for by one unit of an internal [`Semaphore`],
/// so a pop that got past the semaphore always finds an element.
///
/// There's no capacity limit and no way to cancel a blocked pop: a consumer
/// popping from a queue nobody pushes to anymore sleeps forever.
///
/// # Example
///
/// ```
/// use blocking_deque::BlockingDeque;
/// use std::thread;
///
/// let queue = BlockingDeque::new();
/// thread::scope(|s| {
///     s.spawn(|| {
///         for i in 0..4 {
///             queue.push_back(i);
///         }
///     });
///     for i in 0..4 {
///         assert_eq!(queue.pop_front(), i);
///     }
/// });
/// ```
pub struct BlockingDeque<T> {
    data: Mutex<VecDeque<T>>,
    available: Semaphore,
}

impl<T> BlockingDeque<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            data: Mutex::new(VecDeque::new()),
            available: Semaphore::new(0),
        }
    }

    /// Appends `item` to the back of the queue and wakes one blocked consumer.
    pub fn push_back(&self, item: T) {
        sync::lock(&self.data).push_back(item);
        self.available.signal();
    }

    /// Prepends `item` to the front of the queue and wakes one blocked consumer.
    pub fn push_front(&self, item: T) {
        sync::lock(&self.data).push_front(item);
        self.available.signal();
    }

    /// Removes the last element, blocking until there is one.
    pub fn pop_back(&self) -> T {
        self.available.wait();
        self.take(VecDeque::pop_back)
    }

    /// Removes the first element, blocking until there is one.
    pub fn pop_front(&self) -> T {
        self.available.wait();
        self.take(VecDeque::pop_front)
    }

    /// Removes the last element if there is one, without blocking.
    pub fn try_pop_back(&self) -> Result<T, TryPopError> {
        if self.available.try_wait() {
            Ok(self.take(VecDeque::pop_back))
        } else {
            Err(TryPopError::Empty)
        }
    }

    /// Removes the first element if there is one, without blocking.
    pub fn try_pop_front(&self) -> Result<T, TryPopError> {
        if self.available.try_wait() {
            Ok(self.take(VecDeque::pop_front))
        } else {
            Err(TryPopError::Empty)
        }
    }

    /// Returns the number of stored elements.
    ///
    /// This is a snapshot: other threads may push or pop before the caller
    /// acts on it.
    pub fn size(&self) -> usize {
        sync::lock(&self.data).len()
    }

    /// Returns `true` if the queue held no elements at the time of the call.
    ///
    /// Same caveats as [`size`](BlockingDeque::size).
    pub fn is_empty(&self) -> bool {
        sync::lock(&self.data).is_empty()
    }

    /// Consumes the queue, returning the elements nobody popped.
    pub fn into_inner(self) -> VecDeque<T> {
        match self.data.into_inner() {
            Ok(data) => data,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Starts a blocking traversal from the front.
    ///
    /// Pops the first element right away, blocking if the queue is empty.
    pub fn begin(&self) -> ConsumerIter<'_, T> {
        ConsumerIter::primed(self, iter::End::Front, false)
    }

    /// Starts a blocking traversal from the back.
    ///
    /// Pops the last element right away, blocking if the queue is empty.
    pub fn rbegin(&self) -> ConsumerIter<'_, T> {
        ConsumerIter::primed(self, iter::End::Back, false)
    }

    /// Starts a detached traversal from the front.
    ///
    /// Ends instead of blocking whenever the queue is seen empty, including
    /// right now: on an empty queue the returned iterator is already at the end.
    pub fn begin_detached(&self) -> ConsumerIter<'_, T> {
        ConsumerIter::primed(self, iter::End::Front, true)
    }

    /// Starts a detached traversal from the back.
    ///
    /// See [`begin_detached`](BlockingDeque::begin_detached).
    pub fn rbegin_detached(&self) -> ConsumerIter<'_, T> {
        ConsumerIter::primed(self, iter::End::Back, true)
    }

    /// Returns the end sentinel of a front traversal. Doesn't touch the queue.
    pub fn end(&self) -> ConsumerIter<'_, T> {
        ConsumerIter::end(self, iter::End::Front)
    }

    /// Returns the end sentinel of a back traversal. Doesn't touch the queue.
    pub fn rend(&self) -> ConsumerIter<'_, T> {
        ConsumerIter::end(self, iter::End::Back)
    }

    /// Removes an element the caller already holds a semaphore unit for.
    fn take(&self, pop: fn(&mut VecDeque<T>) -> Option<T>) -> T {
        match pop(&mut sync::lock(&self.data)) {
            Some(item) => item,
            None => unreachable!("semaphore count out of sync with queue length"),
        }
    }
}

impl<T> Default for BlockingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for BlockingDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for BlockingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let data: VecDeque<T> = iter.into_iter().collect();
        let available = Semaphore::new(data.len());
        Self {
            data: Mutex::new(data),
            available,
        }
    }
}

impl<'q, T> IntoIterator for &'q BlockingDeque<T> {
    type Item = T;
    type IntoIter = ConsumerIter<'q, T>;

    /// Same as [`begin`](BlockingDeque::begin).
    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

impl<T> fmt::Debug for BlockingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingDeque")
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}
