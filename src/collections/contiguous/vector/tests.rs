#![cfg(test)]

use std::iter;

use proptest::prelude::*;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_lazy_allocation() {
    let vec = Vector::<u32>::new();
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.cap(), 0, "A new Vector shouldn't allocate.");

    let vec = Vector::<u32>::default();
    assert_eq!(vec.cap(), 0, "A default Vector shouldn't allocate either.");
}

#[test]
fn test_push_growth() {
    let mut vec = Vector::new();
    vec.push(0_u32);
    assert_eq!(vec.cap(), DEFAULT_CAP, "The first push should allocate the default capacity.");

    for i in 1..16 {
        vec.push(i);
    }
    assert_eq!(vec.cap(), 16, "Filling the Vector exactly shouldn't grow it.");

    vec.push(16);
    assert_eq!(vec.cap(), 32, "Pushing onto a full Vector should double its capacity.");
    assert_eq!(vec.len(), 17);
    assert!(
        vec.iter().copied().eq(0..17),
        "Elements should stay in push order across reallocation."
    );
}

#[test]
fn test_append_slice_growth() {
    let mut vec = Vector::<u8>::new();
    vec.append_slice(&[]);
    assert_eq!(vec.len(), 0);
    assert_eq!(
        vec.cap(), 16,
        "Appending nothing to an empty Vector still seeds the default capacity."
    );

    vec.append_slice(&[1; 13]);
    assert_eq!(vec.cap(), 16);

    vec.append_slice(&[2, 2]);
    assert_eq!(vec.cap(), 16, "A bulk append leaving a free slot shouldn't grow.");

    vec.append_slice(&[3]);
    assert_eq!(vec.len(), 16);
    assert_eq!(
        vec.cap(), 32,
        "A bulk append that would fill the Vector exactly should grow it."
    );

    vec.append_slice(&[4; 100]);
    assert_eq!(vec.len(), 116);
    assert_eq!(vec.cap(), 128, "Capacity should double until it exceeds the new length.");

    assert_eq!(&vec[..13], &[1; 13]);
    assert_eq!(&vec[13..16], &[2, 2, 3]);
    assert!(vec[16..].iter().all(|i| *i == 4));
}

#[test]
fn test_prepend() {
    let mut vec = Vector::from([1_u8, 2, 3].as_slice());
    vec.prepend(0);
    assert_eq!(&*vec, &[0, 1, 2, 3], "The prepended value should come first.");

    let mut vec = Vector::new();
    vec.prepend("only");
    assert_eq!(&*vec, &["only"], "Prepending onto an empty Vector should work.");
    assert_eq!(vec.cap(), DEFAULT_CAP);

    let mut vec: Vector<usize> = (0..16).collect();
    assert_eq!(vec.cap(), 16);
    vec.prepend(100);
    assert_eq!(vec.cap(), 32, "Prepending onto a full Vector should double its capacity.");
    assert_eq!(vec[0], 100);
    assert!(vec[1..].iter().copied().eq(0..16));
}

#[test]
fn test_append_moves_elements() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(3).collect();
    let other: Vector<_> = iter::repeat_with(|| counter.clone()).take(5).collect();

    vec.append(other);
    assert_eq!(vec.len(), 8);
    assert_eq!(*counter.borrow(), 0, "No elements should be dropped while appending.");

    drop(vec);
    assert_eq!(counter.take(), 8, "Every element should be dropped exactly once.");
}

#[test]
fn test_pop_and_clear() {
    let mut vec = Vector::from([1_u8, 2, 3].as_slice());
    assert_eq!(vec.pop(), Some(3));
    assert_eq!(vec.len(), 2);

    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let cap = vec.cap();
    vec.clear();

    assert!(vec.is_empty());
    assert_eq!(vec.cap(), cap, "Clearing should keep the allocation.");
    assert_eq!(counter.take(), 10, "Clearing should drop every element.");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..20 {
        vec.push(ZeroSizedType);
    }
    vec.prepend(ZeroSizedType);

    assert_eq!(vec.len(), 21);
    assert_eq!(vec.cap(), 32, "ZSTs should still follow the growth policy.");
    assert_eq!(vec[20], ZeroSizedType);
    assert_eq!(vec.into_iter().count(), 21);
}

#[test]
fn test_into_iter() {
    let vec: Vector<String> = ["a", "b", "c", "d"].into_iter().map(String::from).collect();
    let mut iter = vec.into_iter();

    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next().as_deref(), Some("a"));
    assert_eq!(iter.next_back().as_deref(), Some("d"));
    assert_eq!(iter.as_slice(), &["b", "c"]);

    let counter = CountedDrop::new(0);
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(6).collect();
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(*counter.borrow(), 2);

    drop(iter);
    assert_eq!(counter.take(), 6, "Dropping the iterator should drop the remaining elements.");
}

#[test]
fn test_spare_capacity() {
    let mut vec = Vector::<u8>::with_cap(8);
    vec.push(1);

    let spare = vec.spare_capacity_mut();
    assert_eq!(spare.len(), 7);
    spare[0].write(2);
    spare[1].write(3);

    // SAFETY: The two slots after len were just initialized.
    unsafe { vec.set_len(3); }
    assert_eq!(&*vec, &[1, 2, 3]);
}

#[test]
fn test_clone_and_equality() {
    let vec: Vector<_> = (0_u16..40).collect();
    let clone = vec.clone();

    assert_eq!(vec, clone, "A clone should be equal to the original.");
    assert_eq!(vec.cap(), clone.cap(), "A clone should keep the capacity of the original.");
    assert_ne!(vec, Vector::from([0_u16, 1].as_slice()));
}

#[test]
fn test_capacity_overflow() {
    assert_panics!({
        let mut vec = Vector::<u8>::new();
        vec.grow_past(usize::MAX);
    }, "Growing past usize::MAX elements should panic.");

    assert_panics!({
        Vector::<u16>::with_cap(isize::MAX as usize);
    }, "A layout exceeding isize::MAX bytes should panic.");
}

proptest! {
    #[test]
    fn pushes_keep_order(values in prop::collection::vec(any::<u32>(), 0..200)) {
        let mut vec = Vector::new();
        for value in &values {
            vec.push(*value);
        }

        prop_assert_eq!(vec.len(), values.len());
        prop_assert!(vec.cap() >= values.len());
        prop_assert_eq!(&*vec, values.as_slice());
    }

    #[test]
    fn append_slice_leaves_a_free_slot(
        start in prop::collection::vec(any::<u8>(), 0..100),
        block in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let mut vec = Vector::from(start.as_slice());
        vec.append_slice(&block);

        prop_assert_eq!(vec.len(), start.len() + block.len());
        prop_assert!(vec.cap() > vec.len());
        prop_assert_eq!(&vec[..start.len()], start.as_slice());
        prop_assert_eq!(&vec[start.len()..], block.as_slice());
    }

    #[test]
    fn prepend_puts_value_first(
        values in prop::collection::vec(any::<i64>(), 1..100),
        value in any::<i64>(),
    ) {
        let mut vec = Vector::from(values.as_slice());
        vec.prepend(value);

        prop_assert_eq!(vec[0], value);
        prop_assert_eq!(&vec[1..], values.as_slice());
    }
}
