use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, ManuallyDrop};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use super::GrowthPolicy;
use crate::collections::contiguous::storage::RawStorage;
use crate::util::error::{ConstructError, EmptyCollection, IndexOutOfBounds, ReserveError};
use crate::util::result::{ReserveResultExtension, ResultExtension};

/// A variable size contiguous collection, built directly on top of a block of uninitialized
/// memory.
///
/// The first `len` slots of the block hold initialized values, the remaining `cap - len` slots are
/// uninitialized and are never read or dropped. The capacity only changes when more room is
/// needed, it is never reduced by removing elements.
///
/// Every method that can fail comes in two forms: a `try_` method that returns a [`Result`], and a
/// method without the prefix that panics instead. If memory can't be allocated, the panicking forms
/// defer to [`std::alloc::handle_alloc_error`].
///
/// # Invalidation
/// Any operation which changes the capacity moves the elements to a new block. References into the
/// DynamicArray can't outlive such a call, because every one of them takes `&mut self`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `m`: The number of items in the second DynamicArray.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `resize` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `clone` | `O(n)` |
/// | `clone_from` | `O(n+m)` |
/// | `take` | `O(1)` |
///
/// \* If the DynamicArray doesn't have enough capacity for the new element, `push` will take
/// `O(n)`.
///
/// \** If the DynamicArray already has the requested capacity, `reserve` is `O(1)`.
pub struct DynamicArray<T> {
    pub(crate) storage: RawStorage<T>,
    pub(crate) len: usize,
    pub(crate) growth: GrowthPolicy,
}

impl<T> DynamicArray<T> {
    /// Creates a new DynamicArray with length and capacity 0. Memory will be allocated when the
    /// capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub const fn new() -> DynamicArray<T> {
        DynamicArray::with_growth(GrowthPolicy::DOUBLING)
    }

    /// Creates a new, empty DynamicArray which grows according to the provided policy.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::{DynamicArray, GrowthPolicy};
    /// let mut arr = DynamicArray::with_growth(GrowthPolicy::new(8, 4));
    /// arr.push(1_u8);
    /// assert_eq!(arr.cap(), 8);
    /// arr.extend(2..=9);
    /// assert_eq!(arr.cap(), 32);
    /// ```
    pub const fn with_growth(growth: GrowthPolicy) -> DynamicArray<T> {
        DynamicArray {
            storage: RawStorage::new(),
            len: 0,
            growth,
        }
    }

    /// Creates a new DynamicArray with capacity exactly equal to the provided value, allowing
    /// values to be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<u8> = DynamicArray::with_cap(5);
    /// assert_eq!(arr.cap(), 5);
    /// arr.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(arr.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> DynamicArray<T> {
        Self::try_with_cap(cap).or_handle()
    }

    /// Creates a new DynamicArray with capacity exactly equal to the provided value.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the memory couldn't be allocated.
    pub fn try_with_cap(cap: usize) -> Result<DynamicArray<T>, ReserveError> {
        Ok(DynamicArray {
            storage: RawStorage::try_allocate(cap)?,
            len: 0,
            growth: GrowthPolicy::DOUBLING,
        })
    }

    /// Creates a DynamicArray of `len` elements, constructing the element at each index `i` with
    /// `f(i)`. The capacity is exactly `len`.
    ///
    /// If `f` panics, every element constructed so far is dropped and the memory is released.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::from_fn(4, |i| i * i);
    /// assert_eq!(&*arr, &[0, 1, 4, 9]);
    /// ```
    pub fn from_fn<F: FnMut(usize) -> T>(len: usize, mut f: F) -> DynamicArray<T> {
        let mut arr = Self::with_cap(len);

        for i in 0..len {
            // SAFETY: arr has been created with capacity for len values.
            unsafe { arr.push_unchecked(f(i)); }
        }

        arr
    }

    /// Creates a DynamicArray of `len` elements, constructing the element at each index `i` with
    /// `f(i)` and stopping at the first failure.
    ///
    /// # Errors
    /// Returns [`ConstructError::Reserve`] if the memory couldn't be allocated, or
    /// [`ConstructError::Element`] with the index and error of the first element that couldn't be
    /// constructed. In the latter case, all previously constructed elements are dropped before
    /// returning.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// # use dynamic_array::error::ConstructError;
    /// let parsed = DynamicArray::try_from_fn(3, |i| ["1", "2", "x"][i].parse::<u8>());
    /// assert!(matches!(parsed, Err(ConstructError::Element { index: 2, .. })));
    /// ```
    pub fn try_from_fn<E, F>(len: usize, mut f: F) -> Result<DynamicArray<T>, ConstructError<E>>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        let mut arr = Self::try_with_cap(len)?;

        for index in 0..len {
            // On an error, arr is dropped along with the elements constructed so far.
            let value = f(index).map_err(|error| ConstructError::Element { index, error })?;
            // SAFETY: arr has been created with capacity for len values.
            unsafe { arr.push_unchecked(value); }
        }

        Ok(arr)
    }

    /// Returns the length of the DynamicArray.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::from([1_u8, 2, 3]);
    /// assert_eq!(arr.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the DynamicArray. Unlike [`Vec`], the capacity is guaranteed
    /// to be exactly the value requested from [`reserve`](DynamicArray::reserve) or
    /// [`with_cap`](DynamicArray::with_cap), or the value chosen by the [`GrowthPolicy`].
    pub const fn cap(&self) -> usize {
        self.storage.cap()
    }

    /// Returns the policy used to grow the DynamicArray.
    pub const fn growth(&self) -> GrowthPolicy {
        self.growth
    }

    /// Replaces the policy used to grow the DynamicArray. The current capacity isn't affected.
    pub const fn set_growth(&mut self, growth: GrowthPolicy) {
        self.growth = growth;
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::from(['a', 'b']);
    /// assert_eq!(arr.at(1), Ok(&'b'));
    /// assert!(arr.at(2).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len and all values < len are initialized.
        Ok(unsafe { &*self.storage.slot(index) })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len and all values < len are initialized. The mutable borrow of self
        // guarantees that this is the only reference to the element.
        Ok(unsafe { &mut *self.storage.slot(index) })
    }

    /// Push the provided value onto the end of the DynamicArray, increasing the capacity according
    /// to its [`GrowthPolicy`] if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::<u8>::new();
    /// let mut caps = vec![arr.cap()];
    /// for i in 1..=3 {
    ///     arr.push(i);
    ///     caps.push(arr.cap());
    /// }
    /// assert_eq!(&*arr, &[1, 2, 3]);
    /// assert_eq!(caps, [0, 1, 2, 4]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).or_handle()
    }

    /// Push the provided value onto the end of the DynamicArray, increasing the capacity according
    /// to its [`GrowthPolicy`] if required.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the DynamicArray needed to grow and couldn't. The DynamicArray
    /// is unchanged in this case and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), ReserveError> {
        if self.len == self.cap() {
            self.grow()?;
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Push the provided value onto the end of the DynamicArray, assuming that there is enough
    /// capacity to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the DynamicArray has enough capacity to add the
    /// provided value. Using this method on a DynamicArray without enough capacity is undefined
    /// behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that len < cap, so the slot is within the block
        // and currently uninitialized.
        unsafe { self.storage.slot(self.len).write(value); }
        self.len += 1;
    }

    /// Pops the last value off the end of the DynamicArray, returning an owned value if the
    /// DynamicArray has length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from_fn(5, |i| i);
    /// for i in (0..arr.len()).rev() {
    ///     assert_eq!(arr.pop(), Some(i));
    /// }
    /// assert_eq!(arr.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, the slot is logically uninitialized afterwards.
            self.len -= 1;

            // SAFETY: len has just been decremented and the slot it refers to is initialized. The
            // value is moved out of the block and won't be read again.
            Some(unsafe { self.storage.slot(self.len).read() })
        }
    }

    /// Drops the last element of the DynamicArray in place.
    ///
    /// # Panics
    /// Panics if the DynamicArray is empty.
    pub fn pop_back(&mut self) {
        self.try_pop_back().throw()
    }

    /// Drops the last element of the DynamicArray in place.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the DynamicArray is empty.
    pub fn try_pop_back(&mut self) -> Result<(), EmptyCollection> {
        if self.len == 0 {
            return Err(EmptyCollection);
        }

        self.len -= 1;
        // SAFETY: The slot at the old len - 1 is initialized and no longer counted by len, so it
        // won't be dropped twice even if its destructor panics.
        unsafe { ptr::drop_in_place(self.storage.slot(self.len)); }
        Ok(())
    }

    /// Ensures that the DynamicArray has a capacity of at least `cap`. If the capacity is already
    /// sufficient this does nothing, otherwise the capacity becomes exactly `cap`.
    ///
    /// Note that, unlike [`Vec::reserve`], `cap` is the total capacity rather than the number of
    /// additional elements.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([1_u8, 2]);
    /// arr.reserve(10);
    /// assert_eq!(arr.cap(), 10);
    /// arr.reserve(3);
    /// assert_eq!(arr.cap(), 10);
    /// assert_eq!(&*arr, &[1, 2]);
    /// ```
    pub fn reserve(&mut self, cap: usize) {
        self.try_reserve(cap).or_handle()
    }

    /// Ensures that the DynamicArray has a capacity of at least `cap`.
    ///
    /// Elements are relocated to the new block by a bitwise move, which can't fail, so the
    /// DynamicArray is unchanged if an error is returned.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the new block couldn't be allocated.
    pub fn try_reserve(&mut self, cap: usize) -> Result<(), ReserveError> {
        if cap <= self.cap() { return Ok(()); }

        let mut storage = RawStorage::try_allocate(cap)?;

        // SAFETY: Both blocks are valid for len values of T, properly aligned and don't overlap.
        // After copying, the values in the old block are treated as moved and the block is
        // released without dropping them.
        unsafe {
            ptr::copy_nonoverlapping(self.storage.as_ptr(), storage.as_ptr(), self.len);
        }

        // The old block ends up in storage and is released at the end of this scope.
        self.storage.swap(&mut storage);
        Ok(())
    }

    /// Resizes the DynamicArray to `len`, constructing new elements with `f` or dropping excess
    /// elements as required. When growing, the capacity becomes exactly `len` if it wasn't already
    /// large enough.
    ///
    /// If `f` panics, the elements constructed before it remain in the DynamicArray.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub fn resize_with<F: FnMut() -> T>(&mut self, len: usize, mut f: F) {
        self.reserve(len);

        if len > self.len {
            for _ in self.len..len {
                // SAFETY: The capacity has been reserved for len values.
                unsafe { self.push_unchecked(f()); }
            }
        } else {
            self.truncate(len);
        }
    }

    /// Shortens the DynamicArray to `len`, dropping any elements beyond it. Does nothing if the
    /// DynamicArray is already no longer than `len`. The capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len { return; }

        // SAFETY: len < self.len <= cap, so the slot is within the block.
        let start = unsafe { self.storage.slot(len) };
        let tail = ptr::slice_from_raw_parts_mut(start, self.len - len);

        // Shrink len before dropping, so a panicking destructor can't cause a double drop.
        self.len = len;

        // SAFETY: All values in tail were initialized and are no longer counted by len.
        unsafe { ptr::drop_in_place(tail); }
    }

    /// Drops all elements of the DynamicArray. The capacity is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from_fn(10, |i| i.to_string());
    /// arr.clear();
    /// assert!(arr.is_empty());
    /// assert_eq!(arr.cap(), 10);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Moves all elements and the capacity out of self, leaving self empty with capacity 0. The
    /// GrowthPolicy stays with both arrays.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut a = DynamicArray::from([1, 2, 3]);
    /// let b = a.take();
    /// assert_eq!((a.len(), a.cap()), (0, 0));
    /// assert_eq!(&*b, &[1, 2, 3]);
    /// ```
    pub fn take(&mut self) -> DynamicArray<T> {
        let growth = self.growth;
        mem::replace(self, DynamicArray::with_growth(growth))
    }

    /// Swaps the contents, capacity and GrowthPolicy of self and `other`, without moving any
    /// elements.
    pub fn swap(&mut self, other: &mut DynamicArray<T>) {
        mem::swap(self, other);
    }

    /// Grows the storage according to the GrowthPolicy. After calling this, the DynamicArray can
    /// take at least one more element.
    pub(crate) fn grow(&mut self) -> Result<(), ReserveError> {
        let new_cap = self.growth.next_cap(self.cap())?;
        log::trace!("growing from {} to {} slots", self.cap(), new_cap);
        self.try_reserve(new_cap)
    }

    /// Decomposes the DynamicArray into its storage and the number of initialized values at the
    /// start of it, without dropping anything.
    pub(crate) fn into_raw_parts(self) -> (RawStorage<T>, usize) {
        let mut arr = ManuallyDrop::new(self);
        (arr.storage.take(), arr.len)
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T: Default> DynamicArray<T> {
    /// Creates a DynamicArray containing `len` default values, with capacity exactly `len`.
    ///
    /// If [`T::default`](Default::default) panics, every element constructed so far is dropped
    /// and the memory is released.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u32> = DynamicArray::with_len(3);
    /// assert_eq!(&*arr, &[0, 0, 0]);
    /// assert_eq!(arr.cap(), 3);
    /// ```
    pub fn with_len(len: usize) -> DynamicArray<T> {
        Self::from_fn(len, |_| T::default())
    }

    /// Creates a DynamicArray containing `len` default values.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the memory couldn't be allocated.
    pub fn try_with_len(len: usize) -> Result<DynamicArray<T>, ReserveError> {
        let mut arr = Self::try_with_cap(len)?;
        for _ in 0..len {
            // SAFETY: arr has been created with capacity for len values.
            unsafe { arr.push_unchecked(T::default()); }
        }
        Ok(arr)
    }

    /// Resizes the DynamicArray to `len`, filling new slots with default values or dropping excess
    /// elements as required.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([7, 8]);
    /// arr.resize(5);
    /// assert_eq!(&*arr, &[7, 8, 0, 0, 0]);
    /// arr.resize(1);
    /// assert_eq!(&*arr, &[7]);
    /// assert_eq!(arr.cap(), 5);
    /// ```
    pub fn resize(&mut self, len: usize) {
        self.resize_with(len, T::default);
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Creates a copy of self with capacity exactly equal to its length.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the memory couldn't be allocated.
    pub fn try_clone(&self) -> Result<DynamicArray<T>, ReserveError> {
        let mut arr = Self::try_with_cap(self.len)?;
        arr.growth = self.growth;

        for value in self.iter() {
            // SAFETY: arr has been created with capacity for self.len values. If clone panics,
            // arr drops the values cloned so far.
            unsafe { arr.push_unchecked(value.clone()); }
        }

        Ok(arr)
    }

    /// Replaces the contents of self with a copy of `source`.
    ///
    /// If `source` doesn't fit in the current capacity, a complete copy is built first and then
    /// swapped in, so self is unchanged if building it fails. Otherwise, the existing elements are
    /// assigned to with [`Clone::clone_from`], then trailing elements are cloned or dropped. A panic
    /// during this second path leaves self valid, but partially assigned. The capacity is never
    /// reduced.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if a larger block was needed and couldn't be allocated.
    pub fn try_clone_from(&mut self, source: &DynamicArray<T>) -> Result<(), ReserveError> {
        if source.len > self.cap() {
            let mut arr = source.try_clone()?;
            arr.growth = self.growth;
            // The previous contents end up in arr and are dropped along with it.
            self.swap(&mut arr);
            return Ok(());
        }

        let shared = cmp::min(self.len, source.len);
        self[..shared].clone_from_slice(&source[..shared]);

        if source.len > self.len {
            for value in &source[self.len..] {
                // SAFETY: source.len <= cap, so there is room for every remaining value.
                unsafe { self.push_unchecked(value.clone()); }
            }
        } else {
            self.truncate(source.len);
        }

        Ok(())
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        // Growth goes through push, so extending follows the GrowthPolicy.
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut arr = DynamicArray::with_cap(iter.size_hint().0);

        for item in iter {
            arr.push(item);
        }

        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // Drop all initialized values in place. The storage is implicitly dropped afterwards,
        // which releases the block without touching its contents.
        self.clear();
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: DynamicArray is valid as a slice for len values, which are all initialized. The
        // pointer is nonnull, properly aligned and the range entirely contained within the block.
        // The total size is < isize::MAX as the result of being a valid allocation.
        unsafe { slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the mutable borrow of self preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.storage.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        self.try_clone().or_handle()
    }

    fn clone_from(&mut self, source: &Self) {
        self.try_clone_from(source).or_handle()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
