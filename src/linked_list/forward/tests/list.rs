use core::ffi::c_void;
use core::ptr::null_mut;

use super::{list_in, values};
use crate::linked_list::forward::{ListError, WordList};
use crate::raw_alloc::{
    AcquireFn, Global, Hooks, Limited, Tracking, system_acquire, system_release,
};

unsafe extern "C" fn exhausted(_size: usize) -> *mut c_void {
    null_mut()
}

#[test]
fn test_new_list_is_empty() {
    let list = WordList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.first(), None);
    assert_eq!(list.find(0), None);
}

#[test]
fn test_push_back_appends_in_order() {
    let mut list = WordList::new();
    list.push_back(10).unwrap();
    list.push_back(20).unwrap();
    list.push_back(30).unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(list.find(20), Some(1));
    assert_eq!(list.find(40), None);
    assert_eq!(values(&list), vec![10, 20, 30]);
}

#[test]
fn test_push_front_and_insert() {
    let mut list = list_in(Global, &[10, 20, 30]);

    list.push_front(5).unwrap();
    assert_eq!(values(&list), vec![5, 10, 20, 30]);

    list.insert(2, 15).unwrap();
    assert_eq!(values(&list), vec![5, 10, 15, 20, 30]);
    assert_eq!(list.len(), 5);
}

#[test]
fn test_insert_at_bounds() {
    let mut list = WordList::new();
    list.insert(0, 2).unwrap();
    list.insert(0, 1).unwrap();
    list.insert(2, 3).unwrap();
    assert_eq!(values(&list), vec![1, 2, 3]);

    assert_eq!(
        list.insert(5, 9),
        Err(ListError::OutOfRange { index: 5, len: 3 })
    );
    assert_eq!(
        list.insert(4, 9),
        Err(ListError::OutOfRange { index: 4, len: 3 })
    );
    assert_eq!(values(&list), vec![1, 2, 3]);
}

#[test]
fn test_insert_out_of_range_acquires_nothing() {
    let tracker = Tracking::new();
    let mut list = list_in(&tracker, &[1, 2]);
    assert_eq!(tracker.acquired(), 2);

    assert!(list.insert(3, 7).is_err());
    assert_eq!(tracker.acquired(), 2);
}

#[test]
fn test_remove() {
    let mut list = list_in(Global, &[5, 10, 15, 20, 30]);

    assert_eq!(list.remove(0), Ok(5));
    assert_eq!(values(&list), vec![10, 15, 20, 30]);

    assert_eq!(list.remove(3), Ok(30));
    assert_eq!(values(&list), vec![10, 15, 20]);

    assert_eq!(
        list.remove(5),
        Err(ListError::OutOfRange { index: 5, len: 3 })
    );
    assert_eq!(
        list.remove(3),
        Err(ListError::OutOfRange { index: 3, len: 3 })
    );
    assert_eq!(values(&list), vec![10, 15, 20]);

    assert_eq!(list.remove(1), Ok(15));
    assert_eq!(values(&list), vec![10, 20]);
}

#[test]
fn test_remove_from_empty_list() {
    let mut list = WordList::new();
    assert_eq!(list.remove(0), Err(ListError::BadArgument));
}

#[test]
fn test_find_returns_first_match() {
    let list = list_in(Global, &[4, 7, 4, 7]);
    assert_eq!(list.find(7), Some(1));
    assert_eq!(list.find(4), Some(0));
    assert!(list.contains(4));
    assert!(!list.contains(5));
}

#[test]
fn test_get_and_first() {
    let list = list_in(Global, &[3, 1, 4]);
    assert_eq!(list.first(), Some(3));
    assert_eq!(list.get(0), Some(3));
    assert_eq!(list.get(2), Some(4));
    assert_eq!(list.get(3), None);
}

#[test]
fn test_pop_front() {
    let mut list = list_in(Global, &[1, 2]);
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_clear_releases_every_node() {
    let tracker = Tracking::new();
    let mut list = list_in(&tracker, &[1, 2, 3, 4]);
    assert_eq!(tracker.live(), 4);

    list.clear();
    assert!(list.is_empty());
    assert_eq!(tracker.released(), 4);
    assert!(tracker.is_balanced());

    // The list is ready for reuse.
    list.push_back(9).unwrap();
    assert_eq!(values(&list), vec![9]);
}

#[test]
fn test_clear_empty_list_releases_nothing() {
    let tracker = Tracking::new();
    let mut list = WordList::new_in(&tracker);
    list.clear();
    assert_eq!(tracker.released(), 0);
}

#[test]
fn test_drop_releases_every_node() {
    let tracker = Tracking::new();
    {
        let mut list = list_in(&tracker, &[1, 2, 3]);
        list.remove(1).unwrap();
    }
    assert_eq!(tracker.acquired(), 3);
    assert_eq!(tracker.released(), 3);
    assert!(tracker.is_balanced());
}

#[test]
fn test_alloc_failure_leaves_list_unchanged() {
    let limited = Limited::new(2);
    let mut list = list_in(&limited, &[1, 2]);

    assert_eq!(list.push_front(7), Err(ListError::AllocFailure));
    assert_eq!(list.push_back(7), Err(ListError::AllocFailure));
    assert_eq!(list.insert(1, 7), Err(ListError::AllocFailure));
    assert_eq!(list.len(), 2);
    assert_eq!(values(&list), vec![1, 2]);

    limited.refill(1);
    list.insert(1, 7).unwrap();
    assert_eq!(values(&list), vec![1, 7, 2]);
}

#[test]
fn test_hooks_must_be_registered() {
    let mut hooks = Hooks::new();
    assert_eq!(
        WordList::try_new_in(hooks).err(),
        Some(ListError::NotReady)
    );

    hooks.register_acquire(Some(system_acquire as AcquireFn));
    assert!(WordList::try_new_in(hooks).is_err());

    hooks.register_release(Some(system_release));
    let mut list = WordList::try_new_in(hooks).unwrap();
    list.push_back(1).unwrap();
    list.push_back(2).unwrap();
    assert_eq!(values(&list), vec![1, 2]);
}

#[test]
fn test_unready_allocator_refuses_insertions() {
    let mut hooks = Hooks::new();
    hooks.register_acquire(Some(system_acquire as AcquireFn));
    let tracker = Tracking::wrap(hooks);
    let mut list = WordList::new_in(&tracker);

    assert_eq!(list.push_back(1), Err(ListError::NotReady));
    assert_eq!(list.push_front(1), Err(ListError::NotReady));
    assert_eq!(list.insert(0, 1), Err(ListError::NotReady));
    assert!(list.is_empty());
    assert_eq!(tracker.acquired(), 0);
}

#[test]
fn test_exhausted_hook_push_front_fails() {
    let mut hooks = Hooks::system();
    let mut list = WordList::try_new_in(hooks).unwrap();
    list.push_back(1).unwrap();
    drop(list);

    hooks.register_acquire(Some(exhausted));
    let mut list = WordList::try_new_in(hooks).unwrap();
    assert_eq!(list.push_front(7), Err(ListError::AllocFailure));
    assert_eq!(list.len(), 0);
}

#[test]
fn test_debug_and_eq() {
    let a = list_in(Global, &[1, 2, 3]);
    let tracker = Tracking::new();
    let b = list_in(&tracker, &[1, 2, 3]);
    let c = list_in(Global, &[1, 2]);

    assert_eq!(format!("{a:?}"), "[1, 2, 3]");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_into_iterator() {
    let list = list_in(Global, &[2, 4, 6]);
    let mut sum = 0;
    for value in &list {
        sum += value;
    }
    assert_eq!(sum, 12);
}

#[test]
fn test_len_handles_long_lists() {
    let mut list = WordList::new();
    for i in 0..10_000 {
        list.push_front(i).unwrap();
    }
    assert_eq!(list.len(), 10_000);
    assert_eq!(list.find(0), Some(9_999));
}
