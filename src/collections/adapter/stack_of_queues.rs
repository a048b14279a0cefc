use std::{collections::VecDeque, convert::Infallible, marker::PhantomData};

use crate::collections::{
    ContainerError,
    adapter::{ContainerCommon, QueueLike, infallible},
};

/// Stack made out of two queues.
///
/// `push` is O(1), `pop` is O(n). Between calls every element sits in `input`
/// in push order and `output` is empty.
pub struct StackOfQueues<T, Q: QueueLike<T, PushError = Infallible> = VecDeque<T>> {
    input: Q,
    output: Q,
    _phantom_data: PhantomData<T>,
}

impl<T, Q: QueueLike<T, PushError = Infallible> + Default> StackOfQueues<T, Q> {
    #[inline]
    pub fn new() -> Self {
        Self {
            input: Q::default(),
            output: Q::default(),
            _phantom_data: PhantomData,
        }
    }
}

impl<T, Q: QueueLike<T, PushError = Infallible>> StackOfQueues<T, Q> {
    #[inline]
    pub fn push(&mut self, value: T) {
        infallible(self.input.push_back(value));
    }

    /// Removes and returns the most recently pushed element.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        // Every pop rotates the whole stack through `output` and back, so the
        // cost is O(n) even in steady state. Leaving `output` reversed between
        // calls and rotating only on exhaustion would give amortized O(1).
        while self.input.len() > 1 {
            if let Some(value) = self.input.pop_front() {
                infallible(self.output.push_back(value));
            }
        }
        let top = self
            .input
            .pop_front()
            .ok_or(ContainerError::EmptyContainer)?;
        while let Some(value) = self.output.pop_front() {
            infallible(self.input.push_back(value));
        }
        Ok(top)
    }

    /// Returns the element the next `pop` would remove.
    #[inline]
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.input.back().ok_or(ContainerError::EmptyContainer)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.input.len() + self.output.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty() && self.output.is_empty()
    }
}

impl<T, Q: QueueLike<T, PushError = Infallible> + Default> Default for StackOfQueues<T, Q> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Q: QueueLike<T, PushError = Infallible> + std::fmt::Debug> std::fmt::Debug
    for StackOfQueues<T, Q>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackOfQueues")
            .field("input", &self.input)
            .field("output", &self.output)
            .finish()
    }
}

impl<T, Q: QueueLike<T, PushError = Infallible>> ContainerCommon for StackOfQueues<T, Q> {
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

impl<T, Q: QueueLike<T, PushError = Infallible>> Extend<T> for StackOfQueues<T, Q> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

impl<T, Q: QueueLike<T, PushError = Infallible> + Default> FromIterator<T>
    for StackOfQueues<T, Q>
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}
