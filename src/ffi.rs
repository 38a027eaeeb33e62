//! C ABI over process-wide allocator hooks.
//!
//! Mirrors the classic `linked_list_*` C interface: failures are reported as
//! `false`, a null pointer, or [`SIZE_MAX`]. The hooks registered here are
//! copied into each list when it is created, so replacing them later does not
//! affect lists that already exist.
//!
//! List headers and iterators are acquired through the hooks. An iterator
//! holds a plain pointer into its list; mutating or releasing the list while
//! an iterator is alive is undefined behaviour, exactly as in C.

use core::alloc::Layout;
use core::ptr::{NonNull, null_mut};

use spin::Mutex;

use crate::linked_list::forward::{Cursor, Word, WordList};
use crate::raw_alloc::{AcquireFn, Hooks, RawAlloc, ReleaseFn};

/// The failure / not-found value of size-valued functions.
pub const SIZE_MAX: usize = usize::MAX;

static HOOKS: Mutex<Hooks> = Mutex::new(Hooks::new());

/// An opaque list header.
pub struct FfiList {
    list: WordList<Hooks>,
}

/// An opaque iterator.
pub struct FfiIterator {
    cursor: Cursor<'static>,
    hooks: Hooks,
}

/// Registers the `malloc()`-like function used for headers, nodes and iterators.
///
/// Returns `false` when `malloc` is null.
#[unsafe(no_mangle)]
pub extern "C" fn linked_list_register_malloc(malloc: Option<AcquireFn>) -> bool {
    HOOKS.lock().register_acquire(malloc)
}

/// Registers the `free()`-like function.
///
/// Returns `false` when `free` is null.
#[unsafe(no_mangle)]
pub extern "C" fn linked_list_register_free(free: Option<ReleaseFn>) -> bool {
    HOOKS.lock().register_release(free)
}

/// Creates an empty list. Returns null when the hooks are not registered or
/// the header cannot be acquired.
#[unsafe(no_mangle)]
pub extern "C" fn linked_list_create() -> *mut FfiList {
    let hooks = *HOOKS.lock();
    let Ok(list) = WordList::try_new_in(hooks) else {
        return null_mut();
    };
    let Some(header) = hooks.acquire(Layout::new::<FfiList>()) else {
        return null_mut();
    };
    let header = header.cast::<FfiList>();
    // SAFETY: freshly acquired storage, sized and aligned for `FfiList`.
    unsafe { header.as_ptr().write(FfiList { list }) };
    header.as_ptr()
}

/// Releases every node of `ll` and leaves it empty.
///
/// The header itself stays allocated; release it with [`linked_list_release`].
///
/// # Safety
///
/// `ll` must be null or a live list from [`linked_list_create`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linked_list_delete(ll: *mut FfiList) -> bool {
    match unsafe { list_mut(ll) } {
        Some(list) => {
            list.clear();
            true
        }
        None => false,
    }
}

/// Empties `ll` and releases its header.
///
/// # Safety
///
/// `ll` must be null or a live list from [`linked_list_create`]; it is dangling
/// afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linked_list_release(ll: *mut FfiList) -> bool {
    let Some(header) = NonNull::new(ll) else {
        return false;
    };
    // SAFETY: the caller hands over a live header; it is read out exactly once.
    let FfiList { list } = unsafe { header.as_ptr().read() };
    let hooks = *list.allocator();
    drop(list);
    // SAFETY: the header was acquired from these hooks with this layout.
    unsafe { hooks.release(header.cast(), Layout::new::<FfiList>()) };
    true
}

/// Number of elements in `ll`, or [`SIZE_MAX`] when `ll` is null.
///
/// # Safety
///
/// `ll` must be null or a live list from [`linked_list_create`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linked_list_size(ll: *mut FfiList) -> usize {
    unsafe { list_ref(ll) }.map_or(SIZE_MAX, |list| list.len())
}

/// Appends `data` after the last element.
///
/// # Safety
///
/// `ll` must be null or a live list from [`linked_list_create`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linked_list_insert_end(ll: *mut FfiList, data: Word) -> bool {
    unsafe { list_mut(ll) }.is_some_and(|list| list.push_back(data).is_ok())
}

/// Inserts `data` at the front.
///
/// # Safety
///
/// `ll` must be null or a live list from [`linked_list_create`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linked_list_insert_front(ll: *mut FfiList, data: Word) -> bool {
    unsafe { list_mut(ll) }.is_some_and(|list| list.push_front(data).is_ok())
}

/// Inserts `data` so that it ends up at `index`, which must not exceed the size.
///
/// # Safety
///
/// `ll` must be null or a live list from [`linked_list_create`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linked_list_insert(ll: *mut FfiList, index: usize, data: Word) -> bool {
    unsafe { list_mut(ll) }.is_some_and(|list| list.insert(index, data).is_ok())
}

/// Index of the first element equal to `data`, or [`SIZE_MAX`] when there is
/// none or `ll` is null.
///
/// # Safety
///
/// `ll` must be null or a live list from [`linked_list_create`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linked_list_find(ll: *mut FfiList, data: Word) -> usize {
    unsafe { list_ref(ll) }
        .and_then(|list| list.find(data))
        .unwrap_or(SIZE_MAX)
}

/// Removes the element at `index`.
///
/// # Safety
///
/// `ll` must be null or a live list from [`linked_list_create`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linked_list_remove(ll: *mut FfiList, index: usize) -> bool {
    unsafe { list_mut(ll) }.is_some_and(|list| list.remove(index).is_ok())
}

/// Creates an iterator positioned at `index`, which must be below the size.
///
/// # Safety
///
/// `ll` must be null or a live list from [`linked_list_create`], and must
/// outlive the iterator without being modified.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linked_list_create_iterator(
    ll: *mut FfiList,
    index: usize,
) -> *mut FfiIterator {
    // SAFETY: the caller keeps the list alive and unmodified while the
    // iterator exists, which is what the `'static` borrow stands for.
    let list: Option<&'static WordList<Hooks>> = unsafe { list_ref(ll) };
    let Some(list) = list else {
        return null_mut();
    };
    let Ok(cursor) = list.cursor(index) else {
        return null_mut();
    };
    let hooks = *list.allocator();
    let Some(slot) = hooks.acquire(Layout::new::<FfiIterator>()) else {
        return null_mut();
    };
    let slot = slot.cast::<FfiIterator>();
    // SAFETY: freshly acquired storage, sized and aligned for `FfiIterator`.
    unsafe { slot.as_ptr().write(FfiIterator { cursor, hooks }) };
    slot.as_ptr()
}

/// Releases an iterator. Its list is not affected.
///
/// # Safety
///
/// `iter` must be null or a live iterator from [`linked_list_create_iterator`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linked_list_delete_iterator(iter: *mut FfiIterator) -> bool {
    let Some(slot) = NonNull::new(iter) else {
        return false;
    };
    // SAFETY: the caller hands over a live iterator; it is read out exactly once.
    let FfiIterator { hooks, .. } = unsafe { slot.as_ptr().read() };
    // SAFETY: the iterator was acquired from these hooks with this layout.
    unsafe { hooks.release(slot.cast(), Layout::new::<FfiIterator>()) };
    true
}

/// Advances to the next element. Returns `false` once the end is reached.
///
/// # Safety
///
/// `iter` must be null or a live iterator from [`linked_list_create_iterator`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linked_list_iterate(iter: *mut FfiIterator) -> bool {
    unsafe { iter.as_mut() }.is_some_and(|iter| iter.cursor.advance())
}

/// The element the iterator sits on, or `0` when `iter` is null.
///
/// # Safety
///
/// `iter` must be null or a live iterator from [`linked_list_create_iterator`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linked_list_iterator_data(iter: *const FfiIterator) -> Word {
    unsafe { iter.as_ref() }.map_or(0, |iter| iter.cursor.value())
}

/// The index the iterator sits on, or [`SIZE_MAX`] when `iter` is null.
///
/// # Safety
///
/// `iter` must be null or a live iterator from [`linked_list_create_iterator`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linked_list_iterator_index(iter: *const FfiIterator) -> usize {
    unsafe { iter.as_ref() }.map_or(SIZE_MAX, |iter| iter.cursor.index())
}

unsafe fn list_ref<'a>(ll: *mut FfiList) -> Option<&'a WordList<Hooks>> {
    unsafe { ll.as_ref() }.map(|header| &header.list)
}

unsafe fn list_mut<'a>(ll: *mut FfiList) -> Option<&'a mut WordList<Hooks>> {
    unsafe { ll.as_mut() }.map(|header| &mut header.list)
}
