use core::alloc::Layout;
use core::ptr::NonNull;

use crate::raw_alloc::RawAlloc;

/// The value carried by every node.
pub type Word = u32;

/// A forward link: the next node, or `None` at the tail.
pub(crate) type Link = Option<NonNull<Node>>;

/// A node in a forward word list.
pub(crate) struct Node {
    pub(crate) value: Word,
    pub(crate) next: Link,
}

impl Node {
    const LAYOUT: Layout = Layout::new::<Node>();

    /// Acquire storage from `alloc` and initialise a node in it.
    ///
    /// Returns `None` when the allocator is exhausted; nothing is linked yet.
    pub(crate) fn alloc<A>(alloc: &A, value: Word, next: Link) -> Option<NonNull<Node>>
    where
        A: RawAlloc + ?Sized,
    {
        let ptr = alloc.acquire(Self::LAYOUT)?.cast::<Node>();
        debug_assert!(ptr.as_ptr().is_aligned());
        unsafe { ptr.as_ptr().write(Node { value, next }) };
        Some(ptr)
    }

    /// Move the node out of its storage and release the storage to `alloc`.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::alloc`] on the same allocator, must already
    /// be unreachable from any list, and must not be used afterwards.
    pub(crate) unsafe fn free<A>(alloc: &A, node: NonNull<Node>) -> Node
    where
        A: RawAlloc + ?Sized,
    {
        unsafe {
            let taken = node.as_ptr().read();
            alloc.release(node.cast(), Self::LAYOUT);
            taken
        }
    }
}
