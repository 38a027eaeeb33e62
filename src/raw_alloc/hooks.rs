use core::alloc::Layout;
use core::ffi::c_void;
use core::ptr::{NonNull, null_mut};

use super::RawAlloc;

/// A `malloc()`-like function.
pub type AcquireFn = unsafe extern "C" fn(size: usize) -> *mut c_void;

/// A `free()`-like function.
pub type ReleaseFn = unsafe extern "C" fn(addr: *mut c_void);

/// Alignment every hook allocation is expected to honour, as C's `max_align_t`.
pub const HOOK_ALIGN: usize = 16;

/// A registered pair of acquire/release functions.
///
/// Starts out unregistered. Both functions must be registered before the
/// pair is ready; a list built over an unready pair is refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hooks {
    acquire: Option<AcquireFn>,
    release: Option<ReleaseFn>,
}

impl Hooks {
    /// An unregistered pair.
    pub const fn new() -> Self {
        Self {
            acquire: None,
            release: None,
        }
    }

    /// A ready pair backed by the Rust global allocator.
    pub const fn system() -> Self {
        Self {
            acquire: Some(system_acquire as AcquireFn),
            release: Some(system_release as ReleaseFn),
        }
    }

    /// Register the acquire function.
    ///
    /// Returns `false` and keeps the previous registration when `acquire` is `None`.
    pub fn register_acquire(&mut self, acquire: Option<AcquireFn>) -> bool {
        match acquire {
            Some(acquire) => {
                self.acquire = Some(acquire);
                true
            }
            None => false,
        }
    }

    /// Register the release function.
    ///
    /// Returns `false` and keeps the previous registration when `release` is `None`.
    pub fn register_release(&mut self, release: Option<ReleaseFn>) -> bool {
        match release {
            Some(release) => {
                self.release = Some(release);
                true
            }
            None => false,
        }
    }

    /// Whether an acquire function is registered.
    pub fn has_acquire(&self) -> bool {
        self.acquire.is_some()
    }

    /// Whether a release function is registered.
    pub fn has_release(&self) -> bool {
        self.release.is_some()
    }
}

impl RawAlloc for Hooks {
    fn is_ready(&self) -> bool {
        self.has_acquire() && self.has_release()
    }

    fn acquire(&self, layout: Layout) -> Option<NonNull<u8>> {
        let acquire = self.acquire?;
        if layout.align() > HOOK_ALIGN {
            return None;
        }
        let ptr = NonNull::new(unsafe { acquire(layout.size()) }.cast::<u8>())?;
        debug_assert!(
            ptr.as_ptr().addr() % layout.align() == 0,
            "acquire hook returned a misaligned address"
        );
        Some(ptr)
    }

    unsafe fn release(&self, ptr: NonNull<u8>, _layout: Layout) {
        // Without a release hook the storage leaks.
        if let Some(release) = self.release {
            unsafe { release(ptr.as_ptr().cast()) }
        }
    }
}

/// `malloc()` over the Rust global allocator.
///
/// The block size is kept in a header of [`HOOK_ALIGN`] bytes in front of the
/// returned address, so [`system_release`] needs only the address.
pub extern "C" fn system_acquire(size: usize) -> *mut c_void {
    let Some(total) = size.checked_add(HOOK_ALIGN) else {
        return null_mut();
    };
    let Ok(layout) = Layout::from_size_align(total, HOOK_ALIGN) else {
        return null_mut();
    };
    unsafe {
        let base = alloc::alloc::alloc(layout);
        if base.is_null() {
            return null_mut();
        }
        base.cast::<usize>().write(total);
        base.add(HOOK_ALIGN).cast()
    }
}

/// `free()` over the Rust global allocator. A null `addr` is a no-op.
///
/// # Safety
///
/// `addr` must be null or come from [`system_acquire`] and not be released yet.
pub unsafe extern "C" fn system_release(addr: *mut c_void) {
    if addr.is_null() {
        return;
    }
    unsafe {
        let base = addr.cast::<u8>().sub(HOOK_ALIGN);
        let total = base.cast::<usize>().read();
        alloc::alloc::dealloc(base, Layout::from_size_align_unchecked(total, HOOK_ALIGN));
    }
}
