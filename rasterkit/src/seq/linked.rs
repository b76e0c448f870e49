use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::seq::Sequence;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Sequence backed by a singly linked chain of boxed nodes. Each node owns its successor, so
/// `get` and `set` walk `index` links from the head.
pub struct LinkedSeq<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T: Copy + Default> LinkedSeq<T> {
    /// `len` slots holding `T::default()`.
    pub fn new(len: usize) -> Self {
        Self::filled(len, T::default())
    }
}

impl<T: Copy> LinkedSeq<T> {
    pub fn filled(len: usize, value: T) -> Self {
        // Build back to front so that each push is O(1)
        let mut head = None;
        for _ in 0..len {
            head = Some(Box::new(Node { value, next: head }));
        }
        Self { head, len }
    }

    pub fn iter(&self) -> LinkedIter<'_, T> {
        LinkedIter {
            node: self.head.as_deref(),
            remaining: self.len,
        }
    }

    fn node(&self, index: usize) -> Result<&Node<T>> {
        self.check_index(index)?;
        let mut node = self.head.as_deref();
        for _ in 0..index {
            node = node.and_then(|n| n.next.as_deref());
        }
        node.ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    fn node_mut(&mut self, index: usize) -> Result<&mut Node<T>> {
        self.check_index(index)?;
        let mut node = self.head.as_deref_mut();
        for _ in 0..index {
            node = node.and_then(|n| n.next.as_deref_mut());
        }
        node.ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len,
        })
    }
}

impl<T: Copy> Sequence for LinkedSeq<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<T> {
        self.node(index).map(|n| n.value)
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.node_mut(index)?.value = value;
        Ok(())
    }
}

impl<T> Drop for LinkedSeq<T> {
    fn drop(&mut self) {
        // Unlink one node at a time; the default drop would recurse once per node
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T: Copy> Clone for LinkedSeq<T> {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl<T: Copy> FromIterator<T> for LinkedSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut head = None;
        let mut tail = &mut head;
        let mut len = 0;
        for value in iter {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
            len += 1;
        }
        Self { head, len }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for LinkedSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T: Copy> IntoIterator for &'a LinkedSeq<T> {
    type Item = T;
    type IntoIter = LinkedIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walks the chain once, following the links rather than re-indexing from the head.
pub struct LinkedIter<'a, T> {
    node: Option<&'a Node<T>>,
    remaining: usize,
}

impl<T: Copy> Iterator for LinkedIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.node?;
        self.node = node.next.as_deref();
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Copy> ExactSizeIterator for LinkedIter<'_, T> {}
impl<T: Copy> FusedIterator for LinkedIter<'_, T> {}
