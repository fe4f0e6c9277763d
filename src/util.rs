use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// Moves `value` to the heap, returning `None` instead of aborting when the
/// allocator is out of memory. On failure `value` is dropped and nothing is
/// left allocated.
pub(crate) fn try_box<T>(value: T) -> Option<Box<T>> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Some(Box::new(value));
    }

    // SAFETY: `layout` has a non-zero size, which is the only requirement of
    // `alloc::alloc`.
    let ptr = NonNull::new(unsafe { alloc::alloc(layout) }.cast::<T>())?;

    // SAFETY: `ptr` is non-null and was just allocated by the global allocator
    // with the layout of `T`, so it is valid for writes and well aligned.
    // After the write it holds an initialized `T`, which is exactly what
    // `Box::from_raw` requires to take ownership of the allocation.
    unsafe {
        ptr.as_ptr().write(value);
        Some(Box::from_raw(ptr.as_ptr()))
    }
}
