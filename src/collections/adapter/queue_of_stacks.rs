use std::{convert::Infallible, marker::PhantomData};

use crate::collections::{
    ContainerError,
    adapter::{ContainerCommon, StackLike, infallible},
};

/// FIFO queue made out of two stacks.
///
/// `enqueue` is O(1). `dequeue` is amortized O(1) and O(n) in the worst case:
/// `output` is refilled by reversing all of `input` onto it, and only when it
/// runs dry.
///
/// Everything in `output` is older than everything in `input`. The top of
/// `input` is the newest element, the top of `output` the oldest.
pub struct QueueOfStacks<T, S: StackLike<T, PushError = Infallible> = Vec<T>> {
    input: S,
    output: S,
    _phantom_data: PhantomData<T>,
}

impl<T, S: StackLike<T, PushError = Infallible> + Default> QueueOfStacks<T, S> {
    #[inline]
    pub fn new() -> Self {
        Self {
            input: S::default(),
            output: S::default(),
            _phantom_data: PhantomData,
        }
    }
}

impl<T, S: StackLike<T, PushError = Infallible>> QueueOfStacks<T, S> {
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        infallible(self.input.push(value));
    }

    /// Removes and returns the earliest enqueued element.
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        if let Some(value) = self.output.pop() {
            return Ok(value);
        }
        self.refill();
        self.output.pop().ok_or(ContainerError::EmptyContainer)
    }

    /// Returns the element the next `dequeue` would remove.
    ///
    /// Needs `&mut self` since it may have to move `input` over to `output`.
    pub fn peek(&mut self) -> Result<&T, ContainerError> {
        if self.output.is_empty() {
            self.refill();
        }
        self.output.top().ok_or(ContainerError::EmptyContainer)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.input.len() + self.output.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty() && self.output.is_empty()
    }

    fn refill(&mut self) {
        while let Some(value) = self.input.pop() {
            infallible(self.output.push(value));
        }
    }
}

impl<T, S: StackLike<T, PushError = Infallible> + Default> Default for QueueOfStacks<T, S> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: StackLike<T, PushError = Infallible> + std::fmt::Debug> std::fmt::Debug
    for QueueOfStacks<T, S>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueOfStacks")
            .field("input", &self.input)
            .field("output", &self.output)
            .finish()
    }
}

impl<T, S: StackLike<T, PushError = Infallible>> ContainerCommon for QueueOfStacks<T, S> {
    #[inline]
    fn len(&self) -> usize {
        self.size()
    }

    #[inline]
    fn capacity(&self) -> usize {
        usize::MAX
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        false
    }
}

impl<T, S: StackLike<T, PushError = Infallible>> Extend<T> for QueueOfStacks<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.enqueue(value));
    }
}

impl<T, S: StackLike<T, PushError = Infallible> + Default> FromIterator<T>
    for QueueOfStacks<T, S>
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
