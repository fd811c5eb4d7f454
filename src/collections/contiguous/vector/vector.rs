use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The capacity a Vector takes on the first time it needs to grow.
pub const DEFAULT_CAP: usize = 16;

/// The factor the capacity is multiplied by each time a Vector grows.
pub const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection with an explicit length and capacity.
///
/// Growth is lazy: a new Vector owns no memory and allocates [`DEFAULT_CAP`] slots the first time
/// something is added. From then on the capacity is multiplied by [`GROWTH_FACTOR`] whenever more
/// room is needed, so pushing is amortized `O(1)`.
///
/// Any operation which grows the Vector may move its contents. The borrow checker already stops
/// references into the Vector from surviving a push, but raw pointers from
/// [`as_ptr`](Vector::as_ptr) are invalidated just the same.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `m`: The number of items being appended.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `prepend` | `O(n)` |
/// | `append_slice` | `O(m)`*, `O(n+m)` |
/// | `append` | `O(m)`*, `O(n+m)` |
/// | `pop` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* If the Vector already has enough capacity.
///
/// # Panics
/// Every method that grows the Vector panics if the new capacity can't be represented, which
/// happens once the memory layout would exceed [`isize::MAX`] bytes. If the allocator can't
/// satisfy a request, the process is aborted via [`handle_alloc_error`](alloc::handle_alloc_error).
pub struct Vector<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the first
    /// element is added.
    ///
    /// # Examples
    /// ```
    /// # use dawn::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dawn::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        let mut vec = Vector::new();
        if cap != 0 {
            vec.realloc_with_cap(cap);
        }
        vec
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the Vector can hold before it has to grow.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a raw pointer to the start of the Vector's storage. The pointer is dangling if
    /// nothing has been allocated yet.
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr().cast_const()
    }

    /// Pushes the provided value onto the end of the Vector, growing it if it is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dawn::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 16);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.grow();
        }

        // SAFETY: The Vector has at least one free slot after the check above, so len is in bounds
        // of the allocation.
        unsafe { self.ptr.add(self.len).write(value); }
        self.len += 1;
    }

    /// Inserts the provided value at the front of the Vector, moving every other element one slot
    /// back. Unlike [`push`](Vector::push), this is always `O(n)`.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dawn::collections::contiguous::Vector;
    /// let mut vec = Vector::from([2_u8, 3].as_slice());
    /// vec.prepend(1);
    /// vec.prepend(0);
    /// assert_eq!(&*vec, &[0, 1, 2, 3]);
    /// ```
    pub fn prepend(&mut self, value: T) {
        if self.len == self.cap {
            self.grow();
        }

        // SAFETY: There is room for len + 1 elements. ptr::copy handles the overlapping ranges as
        // if the elements were moved from the back, so nothing is overwritten before it is moved.
        unsafe {
            ptr::copy(self.ptr.as_ptr(), self.ptr.add(1).as_ptr(), self.len);
            self.ptr.write(value);
        }
        self.len += 1;
    }

    /// Appends a copy of every element in `values` to the end of the Vector, preserving their
    /// order.
    ///
    /// Bulk appends grow until the capacity is strictly greater than the new length, so there is
    /// always at least one free slot left afterwards.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dawn::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// vec.append_slice(&[0_u8; 16]);
    /// assert_eq!(vec.len(), 16);
    /// assert_eq!(vec.cap(), 32);
    /// ```
    pub fn append_slice(&mut self, values: &[T])
    where
        T: Copy,
    {
        self.grow_past(values.len());

        // SAFETY: The Vector has room for values.len() more elements. values can't overlap the
        // spare capacity, because it is borrowed immutably while self is borrowed mutably.
        unsafe {
            ptr::copy_nonoverlapping(
                values.as_ptr(),
                self.ptr.add(self.len).as_ptr(),
                values.len(),
            );
        }
        self.len += values.len();
    }

    /// Moves all elements from `other` to the end of self, using the same growth rule as
    /// [`append_slice`](Vector::append_slice).
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn append(&mut self, mut other: Vector<T>) {
        self.grow_past(other.len);

        // SAFETY: self has room for other.len more elements and the two Vectors own separate
        // allocations.
        unsafe {
            ptr::copy_nonoverlapping(
                other.ptr.as_ptr().cast_const(),
                self.ptr.add(self.len).as_ptr(),
                other.len,
            );
        }
        self.len += other.len;

        // The elements belong to self now, so other only has its allocation left to free.
        other.len = 0;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use dawn::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;

            // SAFETY: The value at len was initialized before the decrement and is no longer
            // considered part of the Vector, so reading it out moves it.
            Some(unsafe { self.ptr.add(self.len).read() })
        }
    }

    /// Drops every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        let elems: *mut [T] = &mut **self;
        // Set len first so a panicking Drop can't lead to a double drop.
        self.len = 0;

        // SAFETY: elems covered exactly the initialized elements, which are now outside of len.
        unsafe { ptr::drop_in_place(elems); }
    }

    /// Returns the uninitialized slots between `len` and `cap`.
    ///
    /// Once some of them have been written, [`set_len`](Vector::set_len) makes them part of the
    /// Vector.
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: The range len..cap lies within the allocation (or is empty) and MaybeUninit
        // doesn't require initialization.
        unsafe {
            slice::from_raw_parts_mut(
                self.ptr.add(self.len).as_ptr().cast(),
                self.cap - self.len,
            )
        }
    }

    /// Sets the length of the Vector without touching its contents.
    ///
    /// # Safety
    /// `new_len` must be less than or equal to [`cap`](Vector::cap) and every element below
    /// `new_len` must be initialized. Shrinking the length this way leaks the elements past it.
    pub const unsafe fn set_len(&mut self, new_len: usize) {
        self.len = new_len;
    }

    /// Grows the Vector to allow for the insertion of one more element: the capacity is doubled,
    /// or set to [`DEFAULT_CAP`] if nothing has been allocated yet.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = match self.cap {
            0 => DEFAULT_CAP,
            cap => cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
        };

        self.realloc_with_cap(new_cap);
    }

    /// Grows the Vector so that its capacity is strictly greater than `len + extra`, doubling from
    /// the current capacity (or [`DEFAULT_CAP`]). Does nothing if that is already the case.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow_past(&mut self, extra: usize) {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();
        if required < self.cap {
            return;
        }

        let mut new_cap = match self.cap {
            0 => DEFAULT_CAP,
            cap => cap,
        };
        while required >= new_cap {
            new_cap = new_cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw();
        }

        self.realloc_with_cap(new_cap);
    }

    /// Reallocates the storage with room for exactly `new_cap` elements. Zero-sized types never
    /// allocate, only the capacity is updated.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len, "reallocation would discard initialized elements");

        if size_of::<T>() == 0 {
            self.cap = new_cap;
            return;
        }

        let new_layout = Layout::array::<T>(new_cap).map_err(|_| CapacityOverflow).throw();

        let new_ptr = if self.cap == 0 {
            // SAFETY: new_cap is non-zero here (callers never shrink an empty Vector to 0) and T
            // isn't zero-sized, so the layout has a non-zero size.
            unsafe { alloc::alloc(new_layout) }
        } else {
            // SAFETY: ptr was allocated by this allocator with the layout for the old capacity,
            // which was already checked when it was created. The new size doesn't exceed
            // isize::MAX because Layout::array succeeded.
            unsafe {
                alloc::realloc(
                    self.ptr.as_ptr().cast(),
                    Layout::array::<T>(self.cap).map_err(|_| CapacityOverflow).throw(),
                    new_layout.size(),
                )
            }
        };

        self.ptr = NonNull::new(new_ptr.cast())
            .unwrap_or_else(|| alloc::handle_alloc_error(new_layout));
        self.cap = new_cap;
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and are never used again.
        unsafe { ptr::drop_in_place(&mut **self as *mut [T]); }

        if size_of::<T>() != 0 && self.cap != 0 {
            // SAFETY: ptr was allocated with exactly this layout, which was valid at the time.
            unsafe {
                alloc::dealloc(
                    self.ptr.as_ptr().cast(),
                    Layout::array::<T>(self.cap).unwrap_unchecked(),
                );
            }
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull and properly aligned, even when dangling.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for Deref, with uniqueness guaranteed by &mut self.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Copy> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        let mut vec = Vector::new();
        vec.append_slice(value);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap);

        for value in self.iter() {
            vec.push(value.clone());
        }

        vec
    }
}

// SAFETY: Vectors uniquely own their elements, so they are Send when T is.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker and has no interior mutability.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap)
            .finish()
    }
}
