//! Memory providers.
//!
//! A provider hands out raw, uninitialized blocks and takes them back. It never
//! constructs or destroys the values placed in those blocks: that is the job of
//! the lifecycle helpers in [`crate::storage`].

use core::alloc::Layout;
use core::fmt;
use core::ptr::NonNull;
#[cfg(feature = "zeroize")]
use core::slice;

#[cfg(feature = "alloc")]
use core::mem::transmute;

#[cfg(feature = "alloc")]
use alloc_crate::alloc::{alloc as raw_alloc, dealloc as raw_dealloc};

use const_default::ConstDefault;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

#[cfg(all(not(test), feature = "alloc"))]
pub use alloc_crate::alloc::handle_alloc_error;

#[cfg(any(test, not(feature = "alloc")))]
/// Custom allocation error handler.
pub fn handle_alloc_error(layout: Layout) -> ! {
    panic!("memory allocation of {} bytes failed", layout.size());
}

#[cfg(feature = "alloc")]
#[inline]
pub(crate) fn layout_dangling(layout: Layout) -> NonNull<u8> {
    // FIXME: use Layout::dangling when stabilized
    // SAFETY: layout alignments are guaranteed to be non-zero.
    #[allow(clippy::useless_transmute)]
    unsafe {
        NonNull::new_unchecked(transmute(layout.align()))
    }
}

/// The AllocError error indicates an acquisition failure that may be due to
/// resource exhaustion or to something wrong when combining the given input
/// arguments with this provider.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AllocError;

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("memory allocation failed")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AllocError {}

/// A memory provider acquires and releases raw blocks described via `Layout`.
///
/// Blocks are paired 1:1: each block returned from `allocate` is given back
/// exactly once through `deallocate`, with the same layout. The container
/// never releases part of a block.
///
/// Copying a container copies its provider through the provider's own
/// `Clone` implementation, which is where a provider decides whether a
/// copied container shares state with the original.
///
/// # Safety
/// - Blocks returned from a provider must point to valid memory and retain
///   their validity until they are deallocated, or until the instance and
///   all of its clones are dropped.
/// - Moving the provider must not invalidate blocks returned from it.
pub unsafe trait Allocator {
    /// Try to acquire a block of memory fitting `layout`.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Release a block produced by this provider.
    ///
    /// # Safety
    /// The value `ptr` must represent a block produced by this provider, otherwise
    /// a memory access error may occur. The value `layout` must correspond to the
    /// layout used when acquiring the block.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

unsafe impl<A: Allocator + ?Sized> Allocator for &A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        (**self).deallocate(ptr, layout)
    }
}

/// The global memory allocator.
///
/// When the `alloc` feature is enabled, this type implements the `Allocator`
/// trait by forwarding calls to the allocator registered with the
/// `#[global_allocator]` attribute if there is one, or the `std` crate's default.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "alloc", derive(Default, Copy))]
pub struct Global;

#[cfg(feature = "alloc")]
unsafe impl Allocator for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        let ptr = if layout.size() == 0 {
            layout_dangling(layout)
        } else {
            let Some(ptr) = NonNull::new(unsafe { raw_alloc(layout) }) else {
                return Err(AllocError);
            };
            ptr
        };
        Ok(NonNull::slice_from_raw_parts(ptr, layout.size()))
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() > 0 {
            raw_dealloc(ptr.as_ptr(), layout);
        }
    }
}

#[cfg(not(feature = "alloc"))]
// Stub implementation to allow Global as the default provider type
// even when the `alloc` feature is not enabled. Any usage as a provider
// will result in a panic.
unsafe impl Allocator for Global {
    fn allocate(&self, _layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        unimplemented!();
    }

    unsafe fn deallocate(&self, _ptr: NonNull<u8>, _layout: Layout) {
        unimplemented!();
    }
}

#[cfg(feature = "alloc")]
impl ConstDefault for Global {
    const DEFAULT: Self = Global;
}

#[cfg(feature = "zeroize")]
/// A provider which acquires via `A` and zeroizes every block when it is released.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroizingAlloc<A>(pub A);

#[cfg(feature = "zeroize")]
unsafe impl<A: Allocator> Allocator for ZeroizingAlloc<A> {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        self.0.allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() > 0 {
            let mem = slice::from_raw_parts_mut(ptr.as_ptr(), layout.size());
            mem.zeroize();
        }
        self.0.deallocate(ptr, layout)
    }
}

#[cfg(feature = "zeroize")]
impl<A: ConstDefault> ConstDefault for ZeroizingAlloc<A> {
    const DEFAULT: Self = ZeroizingAlloc(A::DEFAULT);
}

#[cfg(feature = "log")]
/// An instrumented provider which acquires via `A` and logs every acquire
/// and release at `debug` level. Failed acquisitions are logged at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingAlloc<A>(pub A);

#[cfg(feature = "log")]
unsafe impl<A: Allocator> Allocator for LoggingAlloc<A> {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        match self.0.allocate(layout) {
            Ok(ptr) => {
                log::debug!(
                    "acquire {} bytes (align {}) at {:p}",
                    layout.size(),
                    layout.align(),
                    ptr.cast::<u8>()
                );
                Ok(ptr)
            }
            Err(err) => {
                log::warn!(
                    "acquire {} bytes (align {}) failed",
                    layout.size(),
                    layout.align()
                );
                Err(err)
            }
        }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        log::debug!(
            "release {} bytes (align {}) at {:p}",
            layout.size(),
            layout.align(),
            ptr
        );
        self.0.deallocate(ptr, layout)
    }
}

#[cfg(feature = "log")]
impl<A: ConstDefault> ConstDefault for LoggingAlloc<A> {
    const DEFAULT: Self = LoggingAlloc(A::DEFAULT);
}

#[cfg(feature = "allocator-api2")]
/// Adapts any `allocator_api2` allocator, such as `&bumpalo::Bump`, into a
/// memory provider.
#[derive(Debug, Default, Clone, Copy)]
pub struct Api2<A>(pub A);

#[cfg(feature = "allocator-api2")]
unsafe impl<A: allocator_api2::alloc::Allocator> Allocator for Api2<A> {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        self.0.allocate(layout).map_err(|_| AllocError)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.0.deallocate(ptr, layout)
    }
}

#[cfg(feature = "allocator-api2")]
impl<A: ConstDefault> ConstDefault for Api2<A> {
    const DEFAULT: Self = Api2(A::DEFAULT);
}
