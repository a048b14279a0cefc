//! FIFO queue over a doubly-linked list.
//!
//! Nodes live in a [`Slab`] arena and link to each other by key, so relinking
//! is plain index bookkeeping. Keys `0` and `1` are the head and tail
//! sentinels. They are allocated by [`LinkedQueue::new`], carry no value and
//! are never removed, so neither end of the chain needs a null check.
//!
//! New elements go right after the head sentinel, old ones leave right before
//! the tail sentinel:
//!
//! ```text
//! HEAD <-> newest <-> ... <-> oldest <-> TAIL
//! ```

use slab::Slab;

use crate::collections::ContainerError;

const HEAD: usize = 0;
const TAIL: usize = 1;

#[derive(Debug)]
struct Node<T> {
    /// `None` only for the two sentinels.
    value: Option<T>,
    prev: usize,
    next: usize,
}

/// FIFO queue implemented with a doubly-linked list.
///
/// Both `enqueue` and `dequeue` are O(1). Freed nodes are recycled by the
/// arena, so memory follows the peak number of queued elements.
pub struct LinkedQueue<T> {
    nodes: Slab<Node<T>>,
    len: usize,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        let mut nodes = Slab::with_capacity(2);
        let head = nodes.insert(Node {
            value: None,
            prev: HEAD,
            next: TAIL,
        });
        let tail = nodes.insert(Node {
            value: None,
            prev: HEAD,
            next: TAIL,
        });
        debug_assert_eq!((head, tail), (HEAD, TAIL));
        Self { nodes, len: 0 }
    }

    pub fn enqueue(&mut self, value: T) {
        let next = self.nodes[HEAD].next;
        let key = self.nodes.insert(Node {
            value: Some(value),
            prev: HEAD,
            next,
        });
        self.nodes[next].prev = key;
        self.nodes[HEAD].next = key;
        self.len += 1;
    }

    /// Removes and returns the earliest enqueued element.
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        let key = self.nodes[TAIL].prev;
        if key == HEAD {
            return Err(ContainerError::EmptyContainer);
        }
        let node = self.nodes.remove(key);
        self.nodes[node.prev].next = TAIL;
        self.nodes[TAIL].prev = node.prev;
        self.len -= 1;
        node.value.ok_or(ContainerError::EmptyContainer)
    }

    /// Returns the element the next `dequeue` would remove.
    #[inline]
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.nodes[self.nodes[TAIL].prev]
            .value
            .as_ref()
            .ok_or(ContainerError::EmptyContainer)
    }

    #[inline]
    pub fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        let key = self.nodes[TAIL].prev;
        self.nodes[key]
            .value
            .as_mut()
            .ok_or(ContainerError::EmptyContainer)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes[HEAD].next == TAIL
    }

    /// Iterates from the oldest element to the newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.nodes[TAIL].prev,
            back: self.nodes[HEAD].next,
            remaining: self.len,
        }
    }

    #[inline]
    fn newest(&self) -> Option<&T> {
        self.nodes[self.nodes[HEAD].next].value.as_ref()
    }

    #[inline]
    fn newest_mut(&mut self) -> Option<&mut T> {
        let key = self.nodes[HEAD].next;
        self.nodes[key].value.as_mut()
    }
}

impl<T> Default for LinkedQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.enqueue(value));
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`LinkedQueue`], oldest first.
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front];
        self.front = node.prev;
        self.remaining -= 1;
        node.value.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back];
        self.back = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(feature = "collections_adapter")]
impl<T> crate::collections::QueueLike<T> for LinkedQueue<T> {
    type PushError = std::convert::Infallible;

    #[inline]
    fn push_back(&mut self, value: T) -> Result<(), Self::PushError> {
        self.enqueue(value);
        Ok(())
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        self.dequeue().ok()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.peek().ok()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.peek_mut().ok()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.newest()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        self.newest_mut()
    }
}


#[cfg(test)]
mod proptests {
    use std::collections::VecDeque;

    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn matches_reference_queue(ops in prop::collection::vec(any::<Option<u8>>(), 0..256)) {
            let mut q = LinkedQueue::<u8>::new();
            let mut reference = VecDeque::new();
            for op in ops {
                match op {
                    Some(value) => {
                        q.enqueue(value);
                        reference.push_back(value);
                    }
                    None => {
                        let expected = reference.pop_front().ok_or(ContainerError::EmptyContainer);
                        prop_assert_eq!(q.dequeue(), expected);
                    }
                }
                prop_assert_eq!(q.size(), reference.len());
                prop_assert!(q.iter().eq(reference.iter()));
            }
        }
    }
}
