//! A singly linked list of machine words with an injectable allocator.
//!
//! - [`linked_list::forward`]: the [`WordList`] container and its [`Cursor`].
//! - [`raw_alloc`]: the [`RawAlloc`] facility nodes are acquired from, including
//!   the C-style [`Hooks`] pair.
//! - [`ffi`]: the C ABI over process-wide hooks.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod ffi;
pub mod linked_list;
pub mod raw_alloc;

pub use linked_list::forward::{Cursor, ListError, Word, WordList};
pub use raw_alloc::{Global, Hooks, RawAlloc};
