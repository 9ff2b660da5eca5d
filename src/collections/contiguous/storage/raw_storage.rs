use std::alloc::{self, Layout};
use std::any;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::util::alloc::{record_alloc, record_dealloc, take_injected_failure};
use crate::util::error::{AllocFailure, CapacityOverflow, ReserveError};

/// An owned block of memory with room for `cap` values of `T`, none of which are assumed to be
/// initialized.
///
/// RawStorage never reads, writes or drops a `T`. Dropping it releases the block without running
/// any destructors, so whoever places values into the block must drop them (or move them out)
/// before the storage itself is dropped or replaced.
///
/// A capacity of zero never holds an allocation, and neither does any capacity for a zero-sized
/// `T`. In both cases the pointer is dangling but well aligned.
pub(crate) struct RawStorage<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawStorage<T> {
    /// Creates an empty RawStorage with capacity 0, without allocating.
    pub(crate) const fn new() -> RawStorage<T> {
        RawStorage {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a block with room for exactly `cap` values of `T`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the size of the block would exceed [`isize::MAX`] bytes and
    /// [`AllocFailure`] if the global allocator can't provide the memory. No memory is held by this
    /// function when it fails.
    pub(crate) fn try_allocate(cap: usize) -> Result<RawStorage<T>, ReserveError> {
        let layout = Self::make_layout(cap)?;

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            let raw_ptr: *mut T = if take_injected_failure() {
                std::ptr::null_mut()
            } else {
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            };

            let ptr = NonNull::new(raw_ptr).ok_or(AllocFailure { layout })?;
            record_alloc();
            log::trace!(
                "allocated {} slots ({} bytes) for {}",
                cap,
                layout.size(),
                any::type_name::<T>()
            );
            ptr
        };

        Ok(RawStorage {
            ptr,
            cap,
            _phantom: PhantomData,
        })
    }

    /// Returns the number of values the block has room for.
    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a pointer to the start of the block.
    pub(crate) const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a pointer to the slot at `index`, with no regard for whether it is initialized.
    ///
    /// # Safety
    /// `index` must be no greater than the capacity of the storage. A pointer to the slot at
    /// `index == cap` is valid to compute but not to read or write.
    pub(crate) const unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.cap);
        // SAFETY: The caller guarantees index <= cap, so the offset stays within (or one past the
        // end of) the block, which is no larger than isize::MAX bytes.
        unsafe { self.ptr.add(index).as_ptr() }
    }

    /// Exchanges the blocks owned by self and `other`. No values are moved or copied.
    pub(crate) fn swap(&mut self, other: &mut RawStorage<T>) {
        mem::swap(self, other);
    }

    /// Takes the block out of self, leaving self empty with capacity 0.
    pub(crate) fn take(&mut self) -> RawStorage<T> {
        mem::replace(self, RawStorage::new())
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `cap`
    /// values of `T`.
    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        let size = self.cap * size_of::<T>();

        if size != 0 {
            // SAFETY: The block was allocated by try_allocate with Layout::array::<T>(cap), which
            // produced exactly this size and alignment.
            let layout = unsafe { Layout::from_size_align_unchecked(size, align_of::<T>()) };

            // SAFETY: ptr was allocated in the global allocator with layout and hasn't been
            // released, as RawStorage can't be copied. Zero-sized layouts are never allocated.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }

            record_dealloc();
            log::trace!("released {} slots for {}", self.cap, any::type_name::<T>());
        }
    }
}

impl<T> Debug for RawStorage<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("ptr", &self.ptr)
            .field("cap", &self.cap)
            .finish()
    }
}

// SAFETY: RawStorage uniquely owns its block, so sending it is as safe as sending the values of T
// that may be placed inside.
unsafe impl<T: Send> Send for RawStorage<T> {}
// SAFETY: RawStorage provides no interior mutability through a shared reference by itself, any
// writes through the pointers it hands out are the responsibility of the owner.
unsafe impl<T: Sync> Sync for RawStorage<T> {}
