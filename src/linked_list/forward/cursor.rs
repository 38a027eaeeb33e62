use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::node::{Node, Word};

#[derive(Clone, Copy)]
enum State {
    At(NonNull<Node>),
    AtEnd,
}

/// A forward cursor into a [`WordList`](super::WordList).
///
/// The cursor caches the value and index of the node it sits on. Advancing
/// past the tail moves it to the end state, where it stays; the cached value
/// and index remain those of the last node visited.
///
/// The cursor borrows the list, so the list cannot change underneath it:
///
/// ```compile_fail
/// use forward_word_list::WordList;
///
/// let mut list = WordList::new();
/// list.push_back(1).unwrap();
/// let cursor = list.cursor(0).unwrap();
/// list.push_back(2).unwrap();
/// cursor.value();
/// ```
pub struct Cursor<'a> {
    state: State,
    index: usize,
    value: Word,
    _list: PhantomData<&'a Node>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor on `node`, which sits at `index`.
    ///
    /// # Safety
    ///
    /// The chain starting at `node` must stay alive and unmodified for `'a`.
    pub(crate) unsafe fn new(node: NonNull<Node>, index: usize) -> Self {
        Self {
            state: State::At(node),
            index,
            value: unsafe { node.as_ref().value },
            _list: PhantomData,
        }
    }

    /// The cached value of the current node.
    pub fn value(&self) -> Word {
        self.value
    }

    /// The position of the current node.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the cursor has run past the tail.
    pub fn is_at_end(&self) -> bool {
        matches!(self.state, State::AtEnd)
    }

    /// Move to the next node.
    ///
    /// Returns `true` if there was one. At the tail the cursor moves to the
    /// end state and returns `false`, as does every later call.
    pub fn advance(&mut self) -> bool {
        let State::At(node) = self.state else {
            return false;
        };
        match unsafe { node.as_ref().next } {
            Some(next) => {
                self.state = State::At(next);
                self.index += 1;
                self.value = unsafe { next.as_ref().value };
                true
            }
            None => {
                self.state = State::AtEnd;
                false
            }
        }
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("value", &self.value)
            .field("at_end", &self.is_at_end())
            .finish()
    }
}
