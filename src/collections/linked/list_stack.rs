use crate::collections::ContainerError;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Stack implemented with a singly-linked list.
///
/// `head` is the forward link of a payload-free head sentinel: the top of the
/// stack is the node right after it, and an empty stack has no such node.
/// `push` and `pop` are both O(1).
pub struct LinkedStack<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedStack<T> {
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn push(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Removes and returns the most recently pushed element.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        let node = self.head.take().ok_or(ContainerError::EmptyContainer)?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Ok(value)
    }

    #[inline]
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.head
            .as_deref()
            .map(|node| &node.value)
            .ok_or(ContainerError::EmptyContainer)
    }

    #[inline]
    pub fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.head
            .as_deref_mut()
            .map(|node| &mut node.value)
            .ok_or(ContainerError::EmptyContainer)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        // Unlink node by node, dropping the boxes recursively could blow the
        // call stack on long chains.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Default for LinkedStack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(feature = "collections_adapter")]
impl<T> crate::collections::StackLike<T> for LinkedStack<T> {
    type PushError = std::convert::Infallible;

    #[inline]
    fn push(&mut self, value: T) -> Result<(), Self::PushError> {
        self.push(value);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop().ok()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.peek().ok()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.peek_mut().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_nodes<T>(s: &LinkedStack<T>) -> usize {
        let mut count = 0;
        let mut link = &s.head;
        while let Some(node) = link {
            count += 1;
            link = &node.next;
        }
        count
    }

    fn drain<T>(s: &mut LinkedStack<T>) -> Vec<T> {
        std::iter::from_fn(|| s.pop().ok()).collect()
    }

    #[test]
    fn t_empty() {
        let mut s = LinkedStack::<i32>::new();
        assert_eq!(s.size(), 0);
        assert!(s.is_empty());
        assert_eq!(s.pop(), Err(ContainerError::EmptyContainer));
        assert_eq!(s.peek(), Err(ContainerError::EmptyContainer));
        assert_eq!(s.peek_mut(), Err(ContainerError::EmptyContainer));
        assert_eq!(count_nodes(&s), 0);
    }

    #[test]
    fn t_interleaved() {
        let mut s = LinkedStack::new();
        s.push('a');
        s.push('b');
        assert_eq!(s.pop(), Ok('b'));
        s.push('c');
        assert_eq!(s.size(), 2);
        assert_eq!(count_nodes(&s), 2);
        assert_eq!(s.pop(), Ok('c'));
        assert_eq!(s.pop(), Ok('a'));
        assert_eq!(s.pop(), Err(ContainerError::EmptyContainer));
    }

    #[test]
    fn t_round_trip() {
        for n in [0, 1, 2, 50] {
            let mut s: LinkedStack<usize> = (0..n).collect();
            assert_eq!(s.size(), n);
            assert_eq!(count_nodes(&s), n);
            assert_eq!(drain(&mut s), (0..n).rev().collect::<Vec<_>>());
            assert_eq!(count_nodes(&s), 0);
        }
    }

    #[test]
    fn t_reuse_after_empty() {
        let mut s = LinkedStack::new();
        s.extend([1, 2]);
        assert_eq!(drain(&mut s), [2, 1]);
        s.extend([3, 4]);
        assert_eq!(s.pop(), Ok(4));
        s.push(5);
        assert_eq!(drain(&mut s), [5, 3]);
    }

    #[test]
    fn t_peek_and_iter() {
        let mut s: LinkedStack<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(s.peek(), Ok(&3));
        if let Ok(x) = s.peek_mut() {
            *x = 30;
        }
        assert_eq!(s.iter().len(), 3);
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), [30, 2, 1]);
        assert_eq!(format!("{s:?}"), "[30, 2, 1]");
        assert_eq!(s.size(), 3);
    }

    #[test]
    fn t_none_is_a_value() {
        let mut s = LinkedStack::<Option<i32>>::new();
        s.push(None);
        assert_eq!(s.pop(), Ok(None));
        assert_eq!(s.pop(), Err(ContainerError::EmptyContainer));
    }

    #[test]
    fn t_drop_long_chain() {
        let s: LinkedStack<u32> = (0..1_000_000).collect();
        assert_eq!(s.size(), 1_000_000);
        drop(s);
    }

    #[cfg(feature = "collections_adapter")]
    #[test]
    fn t_stack_like() {
        use crate::collections::{ContainerCommon, StackLike};

        let mut s = LinkedStack::<i32>::new();
        assert_eq!(StackLike::push(&mut s, 1), Ok(()));
        assert_eq!(StackLike::push(&mut s, 2), Ok(()));
        assert_eq!(StackLike::top(&s), Some(&2));
        if let Some(x) = StackLike::top_mut(&mut s) {
            *x = 20;
        }
        assert_eq!(ContainerCommon::len(&s), 2);
        assert_eq!(StackLike::pop(&mut s), Some(20));
        assert_eq!(StackLike::pop(&mut s), Some(1));
        assert_eq!(StackLike::pop(&mut s), None);
        assert!(ContainerCommon::is_empty(&s));
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn matches_reference_stack(ops in prop::collection::vec(any::<Option<u8>>(), 0..256)) {
            let mut s = LinkedStack::<u8>::new();
            let mut reference = Vec::new();
            for op in ops {
                match op {
                    Some(value) => {
                        s.push(value);
                        reference.push(value);
                    }
                    None => {
                        let expected = reference.pop().ok_or(ContainerError::EmptyContainer);
                        prop_assert_eq!(s.pop(), expected);
                    }
                }
                prop_assert_eq!(s.size(), reference.len());
                prop_assert!(s.iter().eq(reference.iter().rev()));
            }
        }
    }
}
