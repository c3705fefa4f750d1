use super::BlockingDeque;
use std::fmt;
use std::iter::FusedIterator;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub(super) enum End {
    Front,
    Back,
}

/// A consuming cursor over a [`BlockingDeque`].
///
/// Each step pops an element off the queue and holds it until the next step.
/// Created by [`begin`](BlockingDeque::begin), [`rbegin`](BlockingDeque::rbegin),
/// their `_detached` variants, and the [`end`](BlockingDeque::end)/[`rend`](BlockingDeque::rend)
/// sentinels.
///
/// A normal cursor blocks on an empty queue. A *detached* one checks the
/// queue's size before popping and ends the traversal if it's zero. That
/// check isn't atomic with the pop: a concurrent push right after it is
/// missed, and a concurrent consumer can drain the queue between the check
/// and the pop, which then blocks.
///
/// As an [`Iterator`], the cursor yields the held value first and pops the
/// next one lazily on the following call.
///
/// # Equality
///
/// Two cursors compare equal iff both are at the end. A live cursor is never
/// equal to anything, itself included, so `==` is only good for checking
/// whether a traversal finished.
///
/// # Example
///
/// ```
/// use blocking_deque::BlockingDeque;
///
/// let queue: BlockingDeque<_> = (1..=3).collect();
/// let mut it = queue.begin_detached();
/// while it != queue.end() {
///     println!("{}", it.get().unwrap());
///     it.advance_front();
/// }
/// assert_eq!(queue.size(), 0);
/// ```
pub struct ConsumerIter<'q, T> {
    queue: &'q BlockingDeque<T>,
    value: Option<T>,
    direction: End,
    detached: bool,
    is_end: bool,
}

impl<'q, T> ConsumerIter<'q, T> {
    pub(super) fn primed(queue: &'q BlockingDeque<T>, direction: End, detached: bool) -> Self {
        let mut it = Self {
            queue,
            value: None,
            direction,
            detached,
            is_end: false,
        };
        it.step(direction);
        it
    }

    pub(super) fn end(queue: &'q BlockingDeque<T>, direction: End) -> Self {
        Self {
            queue,
            value: None,
            direction,
            detached: false,
            is_end: true,
        }
    }

    /// Returns the held value, or `None` at the end.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns the held value mutably, or `None` at the end.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Pops the next value from the end this cursor was started on.
    pub fn advance(&mut self) -> &mut Self {
        self.step(self.direction);
        self
    }

    /// Pops the next value from the front of the queue.
    pub fn advance_front(&mut self) -> &mut Self {
        self.step(End::Front);
        self
    }

    /// Pops the next value from the back of the queue.
    pub fn advance_back(&mut self) -> &mut Self {
        self.step(End::Back);
        self
    }

    /// Returns `true` once the traversal is over.
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Switches detached mode on or off for the following steps.
    pub fn detach(&mut self, enable: bool) {
        self.detached = enable;
    }

    /// Returns `true` if the cursor stops on an empty queue instead of blocking.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    fn step(&mut self, from: End) {
        if self.is_end {
            return;
        }
        if self.detached && self.queue.size() == 0 {
            tracing::trace!(?from, "detached traversal found the queue empty");
            self.value = None;
            self.is_end = true;
            return;
        }
        self.value = Some(match from {
            End::Front => self.queue.pop_front(),
            End::Back => self.queue.pop_back(),
        });
    }
}

impl<T> Iterator for ConsumerIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(value) = self.value.take() {
            return Some(value);
        }
        self.advance();
        self.value.take()
    }
}

impl<T> FusedIterator for ConsumerIter<'_, T> {}

impl<T> PartialEq for ConsumerIter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_end && other.is_end
    }
}

impl<T: fmt::Debug> fmt::Debug for ConsumerIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsumerIter")
            .field("value", &self.value)
            .field("detached", &self.detached)
            .field("is_end", &self.is_end)
            .finish_non_exhaustive()
    }
}
