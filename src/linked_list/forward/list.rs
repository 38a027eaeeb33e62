use core::fmt;
use core::marker::PhantomData;

use super::cursor::Cursor;
use super::error::ListError;
use super::iter::Iter;
use super::node::{Link, Node, Word};
use crate::raw_alloc::{Global, RawAlloc};

/// A singly linked list of [`Word`]s.
///
/// The list holds only its head link; the length is recounted on every
/// [`len`](WordList::len) call. All nodes are acquired from and released to
/// the allocator `A` the list was built with.
pub struct WordList<A: RawAlloc = Global> {
    head: Link,
    alloc: A,
    _marker: PhantomData<Node>,
}

impl WordList<Global> {
    /// Creates a new, empty list over the global allocator.
    pub const fn new() -> Self {
        Self::new_in(Global)
    }
}

impl Default for WordList<Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: RawAlloc> WordList<A> {
    /// Creates a new, empty list that acquires its nodes from `alloc`.
    ///
    /// An allocator that is not ready is accepted here, but every insertion
    /// into the list then fails with [`ListError::NotReady`].
    pub const fn new_in(alloc: A) -> Self {
        Self {
            head: None,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Like [`new_in`](WordList::new_in), but refuses an allocator that is not
    /// ready with [`ListError::NotReady`].
    pub fn try_new_in(alloc: A) -> Result<Self, ListError> {
        if !alloc.is_ready() {
            return Err(ListError::NotReady);
        }
        Ok(Self::new_in(alloc))
    }

    /// The allocator this list acquires its nodes from.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Number of nodes reachable from the head.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Release every node and leave the list empty and ready for reuse.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            // SAFETY: the chain was detached from the head above, so `node`
            // is reachable from nowhere but `current`.
            let taken = unsafe { Node::free(&self.alloc, node) };
            current = taken.next;
        }
    }

    /// Insert `value` at position 0.
    pub fn push_front(&mut self, value: Word) -> Result<(), ListError> {
        self.ensure_ready()?;
        let node = Node::alloc(&self.alloc, value, self.head).ok_or(ListError::AllocFailure)?;
        self.head = Some(node);
        Ok(())
    }

    /// Append `value` after the last node.
    pub fn push_back(&mut self, value: Word) -> Result<(), ListError> {
        self.ensure_ready()?;
        let link = Self::tail_link(&mut self.head);
        let node = Node::alloc(&self.alloc, value, None).ok_or(ListError::AllocFailure)?;
        *link = Some(node);
        Ok(())
    }

    /// Insert `value` so that it ends up at position `index`.
    ///
    /// `index` may be anything in `0..=len`; `0` is [`push_front`](WordList::push_front)
    /// and `len` is [`push_back`](WordList::push_back).
    pub fn insert(&mut self, index: usize, value: Word) -> Result<(), ListError> {
        self.ensure_ready()?;
        let link = Self::link_at(&mut self.head, index)
            .map_err(|len| ListError::OutOfRange { index, len })?;
        let node = Node::alloc(&self.alloc, value, *link).ok_or(ListError::AllocFailure)?;
        *link = Some(node);
        Ok(())
    }

    /// Position of the first node holding `value`, scanning from the head.
    pub fn find(&self, value: Word) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    pub fn contains(&self, value: Word) -> bool {
        self.find(value).is_some()
    }

    /// Value at position `index`.
    pub fn get(&self, index: usize) -> Option<Word> {
        self.iter().nth(index)
    }

    /// Value at the head.
    pub fn first(&self) -> Option<Word> {
        // SAFETY: nodes reachable from the head are live while `self` is borrowed.
        self.head.map(|node| unsafe { node.as_ref().value })
    }

    /// Unlink and release the node at `index`, returning its value.
    ///
    /// Positions after `index` shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<Word, ListError> {
        if self.head.is_none() {
            return Err(ListError::BadArgument);
        }
        let link = Self::link_at(&mut self.head, index)
            .map_err(|len| ListError::OutOfRange { index, len })?;
        let Some(node) = *link else {
            return Err(ListError::OutOfRange { index, len: index });
        };
        // SAFETY: `node` is owned by this list; it is unlinked right after and
        // never touched again.
        let taken = unsafe { Node::free(&self.alloc, node) };
        *link = taken.next;
        Ok(taken.value)
    }

    /// Unlink and release the head node, returning its value.
    pub fn pop_front(&mut self) -> Option<Word> {
        let node = self.head?;
        // SAFETY: as in `remove`.
        let taken = unsafe { Node::free(&self.alloc, node) };
        self.head = taken.next;
        Some(taken.value)
    }

    /// A cursor positioned at `index`, which must be in `0..len`.
    pub fn cursor(&self, index: usize) -> Result<Cursor<'_>, ListError> {
        let mut current = self.head;
        for passed in 0..index {
            // SAFETY: nodes reachable from the head are live while `self` is borrowed.
            current = match current {
                Some(node) => unsafe { node.as_ref().next },
                None => return Err(ListError::OutOfRange { index, len: passed }),
            };
        }
        let node = current.ok_or(ListError::OutOfRange { index, len: index })?;
        // SAFETY: the cursor borrows `self`, which keeps the chain alive and unmodified.
        Ok(unsafe { Cursor::new(node, index) })
    }

    /// An iterator over the values, head to tail.
    pub fn iter(&self) -> Iter<'_> {
        // SAFETY: the iterator borrows `self`, which keeps the chain alive and unmodified.
        unsafe { Iter::new(self.head) }
    }

    /// Nodes are only acquired from an allocator that can also take them back.
    fn ensure_ready(&self) -> Result<(), ListError> {
        if self.alloc.is_ready() {
            Ok(())
        } else {
            Err(ListError::NotReady)
        }
    }

    /// The link that position `index` hangs off: the head for `0`, otherwise the
    /// `next` field of the node at `index - 1`.
    ///
    /// Fails with the list length when `index > len`.
    fn link_at(head: &mut Link, index: usize) -> Result<&mut Link, usize> {
        let mut link = head;
        for passed in 0..index {
            let Some(node) = *link else {
                return Err(passed);
            };
            // SAFETY: `node` is owned by the list `head` belongs to, which is
            // mutably borrowed for as long as the returned link.
            link = unsafe { &mut (*node.as_ptr()).next };
        }
        Ok(link)
    }

    /// The `None` link at the end of the chain.
    fn tail_link(head: &mut Link) -> &mut Link {
        let mut link = head;
        while let Some(node) = *link {
            // SAFETY: as in `link_at`.
            link = unsafe { &mut (*node.as_ptr()).next };
        }
        link
    }
}

impl<A: RawAlloc> Drop for WordList<A> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, A: RawAlloc> IntoIterator for &'a WordList<A> {
    type Item = Word;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<A: RawAlloc> fmt::Debug for WordList<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<A: RawAlloc, B: RawAlloc> PartialEq<WordList<B>> for WordList<A> {
    fn eq(&self, other: &WordList<B>) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<A: RawAlloc> Eq for WordList<A> {}

// The list owns its nodes outright; sharing or sending it is as safe as
// sharing or sending the allocator.
unsafe impl<A: RawAlloc + Send> Send for WordList<A> {}
unsafe impl<A: RawAlloc + Sync> Sync for WordList<A> {}
