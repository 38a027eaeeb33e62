use core::iter::FusedIterator;
use core::marker::PhantomData;

use super::node::{Link, Node, Word};

/// An iterator over the values of a [`WordList`](super::WordList).
pub struct Iter<'a> {
    current: Link,
    _list: PhantomData<&'a Node>,
}

impl<'a> Iter<'a> {
    /// Creates an iterator starting at `head`.
    ///
    /// # Safety
    ///
    /// The chain starting at `head` must stay alive and unmodified for `'a`.
    pub(crate) unsafe fn new(head: Link) -> Self {
        Self {
            current: head,
            _list: PhantomData,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        let node = self.current?;
        let node = unsafe { node.as_ref() };
        self.current = node.next;
        Some(node.value)
    }
}

impl FusedIterator for Iter<'_> {}

impl Clone for Iter<'_> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            _list: PhantomData,
        }
    }
}

// The iterator only reads nodes that its borrow keeps alive and unmodified.
unsafe impl Send for Iter<'_> {}
unsafe impl Sync for Iter<'_> {}
