//! # Forward Word List
//!
//! A singly linked list of [`Word`]s addressed by zero-based position.
//!
//! ## Core Components
//!
//! - [`list::WordList`]: owns the chain of nodes and the allocator they come from.
//! - [`cursor::Cursor`]: a forward cursor that caches the value and index it sits on.
//! - [`iter::Iter`]: a plain [`Iterator`] over the values.
//! - [`error::ListError`]: why an operation was refused.
//!
//! ## Ownership
//!
//! - Every node reachable from the head is owned by the list and is released
//!   exactly once, by [`WordList::remove`], [`WordList::pop_front`],
//!   [`WordList::clear`] or drop.
//! - Cursors and iterators borrow the list, so it cannot be mutated while one
//!   is alive.
//! - A failed operation leaves the list exactly as it was.

pub mod cursor;
pub mod error;
pub mod iter;
pub mod list;
mod node;

pub use cursor::Cursor;
pub use error::ListError;
pub use iter::Iter;
pub use list::WordList;
pub use node::Word;

#[cfg(test)]
mod tests;
