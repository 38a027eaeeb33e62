use core::alloc::Layout;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicUsize, Ordering};

use hashbrown::HashSet;
use spin::Mutex;

use super::{Global, RawAlloc};

/// An allocator that records every address it hands out.
///
/// Releasing an address that is not live (never acquired here, or already
/// released) panics, so a list that double-frees or frees foreign storage is
/// caught at the offending call. Share it by reference to inspect the counts
/// after the list is gone:
///
/// ```
/// use forward_word_list::{WordList, raw_alloc::Tracking};
///
/// let tracker = Tracking::new();
/// {
///     let mut list = WordList::new_in(&tracker);
///     list.push_back(1).unwrap();
///     list.push_back(2).unwrap();
/// }
/// assert_eq!(tracker.acquired(), 2);
/// assert!(tracker.is_balanced());
/// ```
pub struct Tracking<A: RawAlloc = Global> {
    inner: A,
    live: Mutex<HashSet<usize>>,
    acquired: AtomicUsize,
    released: AtomicUsize,
}

impl Tracking<Global> {
    /// Track allocations served by the global allocator.
    pub fn new() -> Self {
        Self::wrap(Global)
    }
}

impl Default for Tracking<Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: RawAlloc> Tracking<A> {
    /// Track allocations served by `inner`.
    pub fn wrap(inner: A) -> Self {
        Self {
            inner,
            live: Mutex::new(HashSet::new()),
            acquired: AtomicUsize::new(0),
            released: AtomicUsize::new(0),
        }
    }

    /// Number of successful acquisitions so far.
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::Relaxed)
    }

    /// Number of releases so far.
    pub fn released(&self) -> usize {
        self.released.load(Ordering::Relaxed)
    }

    /// Number of addresses acquired and not yet released.
    pub fn live(&self) -> usize {
        self.live.lock().len()
    }

    /// True when everything acquired has been released.
    pub fn is_balanced(&self) -> bool {
        self.live() == 0
    }
}

impl<A: RawAlloc> RawAlloc for Tracking<A> {
    fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }

    fn acquire(&self, layout: Layout) -> Option<NonNull<u8>> {
        let ptr = self.inner.acquire(layout)?;
        self.live.lock().insert(ptr.as_ptr().addr());
        self.acquired.fetch_add(1, Ordering::Relaxed);
        Some(ptr)
    }

    /// # Panics
    ///
    /// Panics when `ptr` is not live: it was never acquired here, or it was
    /// already released.
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        let known = self.live.lock().remove(&ptr.as_ptr().addr());
        assert!(known, "released an address that is not live: {ptr:p}");
        self.released.fetch_add(1, Ordering::Relaxed);
        unsafe { self.inner.release(ptr, layout) }
    }
}

/// An allocator that serves a fixed number of acquisitions and then reports
/// exhaustion.
pub struct Limited<A: RawAlloc = Global> {
    inner: A,
    remaining: AtomicUsize,
}

impl Limited<Global> {
    /// Serve at most `budget` acquisitions from the global allocator.
    pub fn new(budget: usize) -> Self {
        Self::wrap(Global, budget)
    }
}

impl<A: RawAlloc> Limited<A> {
    /// Serve at most `budget` acquisitions from `inner`.
    pub fn wrap(inner: A, budget: usize) -> Self {
        Self {
            inner,
            remaining: AtomicUsize::new(budget),
        }
    }

    /// Acquisitions left before the allocator reports exhaustion.
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Relaxed)
    }

    /// Reset the budget.
    pub fn refill(&self, budget: usize) {
        self.remaining.store(budget, Ordering::Relaxed);
    }
}

impl<A: RawAlloc> RawAlloc for Limited<A> {
    fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }

    fn acquire(&self, layout: Layout) -> Option<NonNull<u8>> {
        self.remaining
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
            .ok()?;
        self.inner.acquire(layout)
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { self.inner.release(ptr, layout) }
    }
}
