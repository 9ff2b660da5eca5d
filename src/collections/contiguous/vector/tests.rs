#![cfg(test)]

use std::cmp;
use std::hash::{BuildHasher, RandomState};
use std::iter;

use proptest::prelude::*;

use super::*;
use crate::util::alloc::{self, CountedDrop, Tripwire, ZeroSizedType};
use crate::util::panic::assert_panics;

fn tripwires(values: &[usize]) -> DynamicArray<Tripwire> {
    values.iter().map(|v| Tripwire::new(*v)).collect()
}

fn values(arr: &DynamicArray<Tripwire>) -> Vec<usize> {
    arr.iter().map(|t| t.0).collect()
}

#[test]
fn test_push_growth_sequence() {
    let mut arr = DynamicArray::new();
    let mut caps = vec![arr.cap()];

    for i in 1..=3 {
        arr.push(i);
        caps.push(arr.cap());
    }

    assert_eq!(caps, [0, 1, 2, 4], "Capacity should double from 1.");
    assert_eq!(arr.len(), 3);
    assert_eq!(&*arr, &[1, 2, 3]);
}

#[test]
fn test_amortized_growth() {
    let mut arr = DynamicArray::new();
    let mut reallocations = 0;

    for i in 0..1000_u32 {
        let old_cap = arr.cap();
        arr.push(i);
        if arr.cap() != old_cap {
            reallocations += 1;
            assert!(arr.cap().is_power_of_two());
            assert_eq!(arr.cap(), if old_cap == 0 { 1 } else { old_cap * 2 });
        }
    }

    // 1, 2, 4, ..., 1024
    assert_eq!(reallocations, 11);
    assert_eq!(arr.cap(), 1024);
    assert!(arr.iter().copied().eq(0..1000));
}

#[test]
fn test_custom_growth() {
    let mut arr = DynamicArray::with_growth(GrowthPolicy::new(3, 3));
    let mut caps = Vec::new();

    for i in 0..10 {
        arr.push(i);
        if caps.last() != Some(&arr.cap()) {
            caps.push(arr.cap());
        }
    }
    assert_eq!(caps, [3, 9, 27]);

    assert_panics!({ GrowthPolicy::new(0, 2) });
    assert_panics!({ GrowthPolicy::new(1, 1) });
    assert_eq!(GrowthPolicy::DOUBLING.next_cap(usize::MAX), Err(crate::error::CapacityOverflow));
}

#[test]
fn test_pop() {
    let mut arr = DynamicArray::from([1, 2, 3]);

    assert_eq!(arr.pop(), Some(3));
    arr.pop_back();
    assert_eq!(&*arr, &[1]);
    assert_eq!(arr.try_pop_back(), Ok(()));
    assert_eq!(arr.pop(), None);
    assert_eq!(arr.cap(), 3, "Popping should never shrink the capacity.");

    assert!(arr.try_pop_back().is_err());
    assert_panics!({ arr.pop_back() });
    assert!(arr.is_empty(), "A failed pop should leave the array empty.");

    let counter = CountedDrop::new(0);
    let mut arr = DynamicArray::from_fn(3, |_| counter.clone());
    arr.pop_back();
    assert_eq!(counter.take(), 1, "pop_back should drop the element in place.");
    drop(arr.pop());
    assert_eq!(counter.take(), 1);
}

#[test]
fn test_at() {
    let mut arr = DynamicArray::from(['a', 'b', 'c']);

    assert_eq!(arr.at(0), Ok(&'a'));
    assert_eq!(arr.at(3), Err(crate::error::IndexOutOfBounds { index: 3, len: 3 }));
    *arr.at_mut(1).unwrap() = 'z';
    assert_eq!(arr[1], 'z');
    assert!(arr.at_mut(10).is_err());

    assert_panics!({ arr[3] });

    arr.reserve(20);
    assert!(
        arr.at(3).is_err(),
        "Slots beyond the length should be inaccessible regardless of capacity."
    );
}

#[test]
fn test_with_len_and_resize() {
    let arr: DynamicArray<u64> = DynamicArray::with_len(4);
    assert_eq!(&*arr, &[0, 0, 0, 0]);
    assert_eq!(arr.cap(), 4);

    let mut arr = DynamicArray::from([7, 8]);
    arr.resize(5);
    assert_eq!(&*arr, &[7, 8, 0, 0, 0]);
    assert_eq!(arr.len(), 5);
    assert_eq!(arr.cap(), 5, "Resizing should reserve exactly the new length.");

    arr.resize(2);
    assert_eq!(&*arr, &[7, 8]);
    assert_eq!(arr.cap(), 5);

    let mut next = 10;
    arr.resize_with(4, || {
        next += 1;
        next
    });
    assert_eq!(&*arr, &[7, 8, 11, 12]);

    let counter = CountedDrop::new(0);
    let mut arr = DynamicArray::from_fn(10, |_| counter.clone());
    arr.resize_with(4, || unreachable!());
    assert_eq!(counter.take(), 6, "6 elements should have been dropped while shrinking.");
}

#[test]
fn test_reserve() {
    let mut arr = DynamicArray::from([1_u16, 2, 3]);
    let old_ptr = arr.storage.as_ptr();

    arr.reserve(2);
    assert_eq!(arr.cap(), 3);
    assert_eq!(arr.storage.as_ptr(), old_ptr, "A sufficient capacity shouldn't reallocate.");

    arr.reserve(50);
    assert_eq!(arr.cap(), 50);
    assert_eq!(&*arr, &[1, 2, 3], "Reserving should keep all elements in order.");

    let counter = CountedDrop::new(0);
    let mut arr = DynamicArray::from_fn(5, |_| counter.clone());
    arr.reserve(100);
    assert_eq!(counter.take(), 0, "Relocation shouldn't drop anything.");
    drop(arr);
    assert_eq!(counter.take(), 5);

    let mut arr = DynamicArray::<u64>::new();
    assert!(arr.try_reserve(usize::MAX).unwrap_err().is_capacity_overflow());
    assert_eq!(arr.cap(), 0);
}

#[test]
fn test_clear_and_drop() {
    let counter = CountedDrop::new(0);
    let mut arr = DynamicArray::from_fn(10, |_| counter.clone());

    arr.clear();
    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
    assert_eq!(arr.len(), 0);
    assert_eq!(arr.cap(), 10, "Clearing shouldn't change the capacity.");

    arr.extend(iter::repeat_with(|| counter.clone()).take(4));
    drop(arr);
    assert_eq!(counter.take(), 4, "Dropping should drop every live element.");
}

#[test]
fn test_clone() {
    let mut a = DynamicArray::with_cap(16);
    a.extend(["a", "b", "c"].map(String::from));

    let mut b = a.clone();
    assert_eq!(a, b);
    assert_eq!(b.cap(), 3, "A clone should have capacity equal to the original's length.");

    b[0].push('!');
    b.push(String::from("d"));
    assert_eq!(&*a, &["a", "b", "c"], "Mutating a clone shouldn't affect the original.");
    assert_eq!(&*b, &["a!", "b", "c", "d"]);
}

#[test]
fn test_clone_from_shrinking() {
    let mut a = tripwires(&[0; 10]);
    let b = tripwires(&[1, 2, 3]);
    let cap = a.cap();
    assert!(cap >= 10);

    a.clone_from(&b);
    assert_eq!(values(&a), [1, 2, 3]);
    assert_eq!(a.len(), 3);
    assert_eq!(a.cap(), cap, "Assignment shouldn't change the capacity.");
    assert_eq!(Tripwire::live(), 6, "The 7 excess elements should have been dropped.");
}

#[test]
fn test_clone_from_growing_in_place() {
    let mut a = DynamicArray::with_cap(10);
    a.extend([9, 9]);
    let old_ptr = a.storage.as_ptr();

    a.clone_from(&DynamicArray::from([1, 2, 3, 4, 5]));
    assert_eq!(&*a, &[1, 2, 3, 4, 5]);
    assert_eq!(a.cap(), 10);
    assert_eq!(a.storage.as_ptr(), old_ptr, "A sufficient capacity shouldn't reallocate.");
}

#[test]
fn test_clone_from_reallocating() {
    let mut a = DynamicArray::with_growth(GrowthPolicy::new(2, 4));
    a.extend([1, 2]);
    let b = DynamicArray::from_fn(7, |i| i * 10);

    a.clone_from(&b);
    assert_eq!(a, b);
    assert_eq!(a.cap(), 7);
    assert_eq!(a.growth(), GrowthPolicy::new(2, 4), "Assignment should keep the growth policy.");
}

#[test]
fn test_take_and_swap() {
    let mut a = DynamicArray::from([1, 2, 3]);
    let mut b = a.take();

    assert_eq!((a.len(), a.cap()), (0, 0), "The source of a move should be empty.");
    assert_eq!(&*b, &[1, 2, 3]);

    a.push(4);
    assert_eq!(&*a, &[4], "The source of a move should be reusable.");

    a.swap(&mut b);
    assert_eq!(&*a, &[1, 2, 3]);
    assert_eq!(&*b, &[4]);

    let counter = CountedDrop::new(0);
    let mut c = DynamicArray::from_fn(3, |_| counter.clone());
    assert_eq!(c.len(), 3);
    c = DynamicArray::from_fn(2, |_| counter.clone()).take();
    assert_eq!(counter.take(), 3, "Move assignment should drop the previous contents.");
    assert_eq!(c.len(), 2);
}

#[test]
fn test_iterators() {
    let mut arr = DynamicArray::from_fn(5, |i| i);
    let collected: DynamicArray<_> = arr.iter().copied().collect();
    assert_eq!(arr, collected, "Collected iter should be equal.");

    for i in &mut arr {
        *i *= 2;
    }
    assert_eq!(&*arr, &[0, 2, 4, 6, 8], "DynamicArray mutated by iterator should equal this slice.");
    assert_eq!((&arr).into_iter().count(), 5, "Borrowed iteration should be restartable.");

    let mut iter = arr.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let counter = CountedDrop::new(0);
    let arr = DynamicArray::from_fn(10, |_| counter.clone());
    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    drop(iter);
    assert_eq!(counter.take(), 10, "Dropping an owned iterator should drop all elements.");
}

#[test]
fn test_zst_support() {
    let before = alloc::live_blocks();
    let mut arr = DynamicArray::<ZeroSizedType>::new();

    for _ in 0..10 {
        arr.push(ZeroSizedType);
    }
    assert_eq!(arr.len(), 10);
    assert_eq!(arr.cap(), 16);
    assert_eq!(arr[9], ZeroSizedType);
    assert_eq!(arr.into_iter().count(), 10);
    assert_eq!(alloc::live_blocks(), before, "Zero-sized types should never allocate.");
}

#[test]
fn test_equality_and_hash() {
    let arr = DynamicArray::from_fn(5, |i| i);
    let mut other = DynamicArray::with_cap(100);
    other.extend(0..5);

    assert_eq!(arr, other, "Capacity shouldn't affect equality.");
    assert_ne!(arr, DynamicArray::from([0, 1, 2, 5, 4]));

    let state = RandomState::new();
    assert_eq!(state.hash_one(&arr), state.hash_one(&other));
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_failed_construction_is_not_leaked() {
    let before = alloc::live_blocks();

    Tripwire::arm(3);
    assert_panics!({ DynamicArray::<Tripwire>::with_len(6) });
    Tripwire::disarm();

    assert_eq!(Tripwire::live(), 0, "Constructed elements should be dropped.");
    assert_eq!(alloc::live_blocks(), before, "The block should be released.");

    let counter = CountedDrop::new(0);
    let result = DynamicArray::try_from_fn(5, |i| {
        if i == 4 { Err("bad element") } else { Ok(counter.clone()) }
    });
    assert!(matches!(
        result,
        Err(crate::error::ConstructError::Element { index: 4, error: "bad element" })
    ));
    assert_eq!(counter.take(), 4);
    assert_eq!(alloc::live_blocks(), before);
}

#[test]
fn test_failed_clone_is_not_leaked() {
    let before = alloc::live_blocks();
    let original = tripwires(&[1, 2, 3, 4, 5]);

    Tripwire::arm(2);
    assert_panics!({ original.clone() });
    Tripwire::disarm();

    assert_eq!(Tripwire::live(), 5, "Only the original elements should be alive.");
    assert_eq!(values(&original), [1, 2, 3, 4, 5]);
    assert_eq!(alloc::live_blocks(), before + 1);
}

#[test]
fn test_failed_reallocating_assignment_is_strong() {
    let mut a = tripwires(&[7, 8]);
    a.reserve(3);
    let b = tripwires(&[1, 2, 3, 4]);

    Tripwire::arm(3);
    assert_panics!({ a.clone_from(&b) });
    Tripwire::disarm();

    assert_eq!(values(&a), [7, 8], "A failed reallocating assignment should change nothing.");
    assert_eq!(a.cap(), 3);
    assert_eq!(Tripwire::live(), 6);
}

#[test]
fn test_failed_assignment_in_place_is_basic() {
    let mut a = tripwires(&[0, 0, 0]);
    a.reserve(10);
    let b = tripwires(&[1, 2, 3, 4, 5]);

    // Assignments to the 3 existing elements succeed, cloning the 4th fails.
    Tripwire::arm(3);
    assert_panics!({ a.clone_from(&b) });
    Tripwire::disarm();

    assert_eq!(values(&a), [1, 2, 3], "Completed assignments should remain.");
    assert_eq!(Tripwire::live(), a.len() + b.len());
}

#[test]
fn test_failed_resize_keeps_constructed() {
    let mut arr = tripwires(&[5, 6]);

    Tripwire::arm(1);
    assert_panics!({ arr.resize(5) });
    Tripwire::disarm();

    assert_eq!(values(&arr), [5, 6, 0]);
    assert_eq!(arr.cap(), 5);
    assert_eq!(Tripwire::live(), 3);
}

#[test]
fn test_failed_allocation() {
    let before = alloc::live_blocks();

    alloc::fail_next_alloc();
    assert!(DynamicArray::<u8>::try_with_cap(8).unwrap_err().is_alloc_failure());
    assert_eq!(alloc::live_blocks(), before);

    let mut arr = DynamicArray::from([1_u32, 2]);
    alloc::fail_next_alloc();
    assert!(arr.try_push(3).is_err());
    assert_eq!(&*arr, &[1, 2], "A failed push should leave the array unchanged.");
    assert_eq!(arr.cap(), 2);

    alloc::fail_next_alloc();
    assert!(arr.try_reserve(100).is_err());
    assert_eq!((&*arr, arr.cap()), (&[1, 2][..], 2));

    alloc::fail_next_alloc();
    assert!(matches!(
        arr.try_clone(),
        Err(crate::error::ReserveError::AllocFailure(_))
    ));

    let mut small = DynamicArray::<u32>::new();
    alloc::fail_next_alloc();
    assert!(small.try_clone_from(&arr).is_err());
    assert!(small.is_empty());

    alloc::fail_next_alloc();
    assert!(matches!(
        DynamicArray::try_from_fn(3, |_| Ok::<u8, ()>(0)),
        Err(crate::error::ConstructError::Reserve(_))
    ));

    assert!(arr.try_push(3).is_ok());
    assert_eq!(&*arr, &[1, 2, 3]);
    assert_eq!(alloc::live_blocks(), before + 1);
}

#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    Pop,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::Push),
        Just(Op::Pop),
    ]
}

proptest! {
    #[test]
    fn push_pop_tracks_len(ops in prop::collection::vec(op(), 0..200)) {
        let mut arr = DynamicArray::new();
        let mut model = Vec::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    arr.push(value);
                    model.push(value);
                },
                Op::Pop => prop_assert_eq!(arr.pop(), model.pop()),
            }
            prop_assert_eq!(arr.len(), model.len());
            prop_assert!(arr.cap() >= arr.len());
            prop_assert!(arr.cap() == 0 || arr.cap().is_power_of_two());
        }

        prop_assert_eq!(&*arr, &model[..]);
    }

    #[test]
    fn reserve_preserves_contents(
        values in prop::collection::vec(any::<i32>(), 0..50),
        cap in 0_usize..100,
    ) {
        let mut arr: DynamicArray<i32> = values.iter().copied().collect();
        let old_cap = arr.cap();

        arr.reserve(cap);
        prop_assert_eq!(arr.cap(), cmp::max(old_cap, cap));
        prop_assert_eq!(&*arr, &values[..]);
    }

    #[test]
    fn clone_from_matches_source(
        dest in prop::collection::vec(any::<u16>(), 0..30),
        source in prop::collection::vec(any::<u16>(), 0..30),
        extra in 0_usize..30,
    ) {
        let mut a: DynamicArray<u16> = dest.iter().copied().collect();
        a.reserve(dest.len() + extra);
        let old_cap = a.cap();
        let b: DynamicArray<u16> = source.iter().copied().collect();

        a.clone_from(&b);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.cap(), cmp::max(old_cap, source.len()));
    }
}
