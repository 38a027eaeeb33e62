mod list;

use alloc::vec::Vec;

use super::{Word, WordList};
use crate::raw_alloc::RawAlloc;

/// Build a list over `alloc` holding `values` in order.
fn list_in<A: RawAlloc>(alloc: A, values: &[Word]) -> WordList<A> {
    let mut list = WordList::new_in(alloc);
    for &value in values {
        list.push_back(value).unwrap();
    }
    list
}

fn values<A: RawAlloc>(list: &WordList<A>) -> Vec<Word> {
    list.iter().collect()
}
