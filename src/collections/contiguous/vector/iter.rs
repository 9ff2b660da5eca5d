use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use super::DynamicArray;
use crate::collections::contiguous::storage::RawStorage;

/// An owning iterator over the elements of a [`DynamicArray`], created by
/// [`DynamicArray::into_iter`](IntoIterator::into_iter).
///
/// The initialized elements occupy the slots `start..end` of the storage. Slots before `start` and
/// after `end` have already been moved out.
pub struct IntoIter<T> {
    pub(crate) storage: RawStorage<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining elements as a slice.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut iter = DynamicArray::from([1, 2, 3]).into_iter();
    /// iter.next();
    /// assert_eq!(iter.as_slice(), &[2, 3]);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: start..end are initialized and start <= end <= cap.
        unsafe { slice::from_raw_parts(self.storage.slot(self.start), self.end - self.start) }
    }

    /// Returns the remaining elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: start..end are initialized and start <= end <= cap.
        unsafe { slice::from_raw_parts_mut(self.storage.slot(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start < end, so the slot is initialized. Incrementing start marks it as moved.
        let value = unsafe { self.storage.slot(self.start).read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: The slot at the old end - 1 is initialized and is no longer within start..end.
        Some(unsafe { self.storage.slot(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining: *mut [T] = self.as_mut_slice();
        self.start = self.end;

        // SAFETY: The remaining values are initialized and are no longer tracked by the iterator.
        // The storage releases the block afterwards.
        unsafe { ptr::drop_in_place(remaining); }
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (storage, len) = self.into_raw_parts();
        IntoIter {
            storage,
            start: 0,
            end: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
