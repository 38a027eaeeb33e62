//! Allocation facilities a list acquires its storage from.
//!
//! A list never reaches for a global allocator on its own: every node is
//! acquired from, and released back to, the [`RawAlloc`] the list was
//! constructed with. [`Global`] forwards to the Rust global allocator,
//! [`Hooks`] forwards to a registered `malloc`/`free`-like pair, and
//! [`Tracking`] / [`Limited`] wrap either one for diagnostics.

use core::alloc::Layout;
use core::ptr::NonNull;

mod hooks;
mod tracking;

pub use hooks::{AcquireFn, HOOK_ALIGN, Hooks, ReleaseFn, system_acquire, system_release};
pub use tracking::{Limited, Tracking};

/// A source of raw storage.
pub trait RawAlloc {
    /// Whether the allocator can serve requests at all.
    ///
    /// Lists refuse to be built over an allocator that is not ready.
    fn is_ready(&self) -> bool {
        true
    }

    /// Acquire storage for `layout`, or `None` when the allocator is exhausted.
    fn acquire(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Release storage previously handed out by [`RawAlloc::acquire`].
    ///
    /// # Safety
    ///
    /// `ptr` must come from `acquire` on this allocator with the same `layout`
    /// and must not have been released already.
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout);
}

impl<A> RawAlloc for &A
where
    A: RawAlloc + ?Sized,
{
    #[inline]
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    #[inline]
    fn acquire(&self, layout: Layout) -> Option<NonNull<u8>> {
        (**self).acquire(layout)
    }

    #[inline]
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { (**self).release(ptr, layout) }
    }
}

/// The Rust global allocator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Global;

impl RawAlloc for Global {
    fn acquire(&self, layout: Layout) -> Option<NonNull<u8>> {
        // `alloc` is undefined for zero-sized layouts.
        if layout.size() == 0 {
            return None;
        }
        NonNull::new(unsafe { alloc::alloc::alloc(layout) })
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
