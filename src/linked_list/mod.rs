//! Linked lists whose nodes live in storage from an injected allocator.
//!
//! # Examples
//!
//! ```
//! use forward_word_list::linked_list::forward::WordList;
//!
//! let mut list = WordList::new();
//! list.push_back(10).unwrap();
//! list.push_back(20).unwrap();
//! list.push_back(30).unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.find(20), Some(1));
//! assert_eq!(list.find(40), None);
//!
//! list.push_front(5).unwrap();
//! list.insert(2, 15).unwrap();
//!
//! let mut cursor = list.cursor(0).unwrap();
//! let mut values = vec![cursor.value()];
//! while cursor.advance() {
//!     values.push(cursor.value());
//! }
//! assert_eq!(values, vec![5, 10, 15, 20, 30]);
//! ```
pub mod forward;
