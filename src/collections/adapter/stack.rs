use std::{
    collections::{LinkedList, VecDeque},
    convert::Infallible,
};

use crate::collections::adapter::ContainerCommon;

/// A LIFO buffer usable as a building block by the adapters in this module.
///
/// `push` reports a full container through `PushError`. The adapters only
/// accept unbounded buffers, i.e. `PushError = Infallible`.
pub trait StackLike<T>: ContainerCommon {
    type PushError;

    fn push(&mut self, value: T) -> Result<(), Self::PushError>;

    fn pop(&mut self) -> Option<T>;

    fn top(&self) -> Option<&T>;

    fn top_mut(&mut self) -> Option<&mut T>;
}

impl<T> StackLike<T> for Vec<T> {
    type PushError = Infallible;

    #[inline]
    fn push(&mut self, value: T) -> Result<(), Self::PushError> {
        self.push(value);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.last()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }
}

impl<T> StackLike<T> for VecDeque<T> {
    type PushError = Infallible;

    #[inline]
    fn push(&mut self, value: T) -> Result<(), Self::PushError> {
        self.push_back(value);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }
}

impl<T> StackLike<T> for LinkedList<T> {
    type PushError = Infallible;

    #[inline]
    fn push(&mut self, value: T) -> Result<(), Self::PushError> {
        self.push_front(value);
        Ok(())
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.front()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lifo<S: StackLike<i32, PushError = Infallible>>(mut s: S) {
        assert_eq!(s.push(1), Ok(()));
        assert_eq!(s.push(2), Ok(()));
        assert_eq!(s.top(), Some(&2));
        if let Some(x) = s.top_mut() {
            *x = 20;
        }
        assert_eq!(s.pop(), Some(20));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn t_std_stacks() {
        lifo(Vec::new());
        lifo(VecDeque::new());
        lifo(LinkedList::new());
    }
}
