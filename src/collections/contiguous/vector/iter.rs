use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::ptr;

use super::Vector;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let back = self.len;
        IntoIter {
            vec: self,
            front: 0,
            back,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`]. Produces values of type `T`.
///
/// Elements between `front` and `back` are still owned by the iterator. The Vector's length is
/// zeroed when the iterator is dropped so that it only frees its allocation.
pub struct IntoIter<T> {
    pub(crate) vec: Vector<T>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> IntoIter<T> {
    /// Returns the elements which haven't been yielded yet.
    pub fn as_slice(&self) -> &[T] {
        &self.vec[self.front..self.back]
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        // SAFETY: front < back <= len, so the element is initialized and hasn't been read yet.
        let value = unsafe { self.vec.ptr.add(self.front).read() };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        // SAFETY: back is now in front..len and hasn't been read yet.
        Some(unsafe { self.vec.ptr.add(self.back).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining: *mut [T] = &mut self.vec[self.front..self.back];
        // Everything else has been moved out already.
        self.vec.len = 0;

        // SAFETY: The remaining range is still initialized and owned by the iterator.
        unsafe { ptr::drop_in_place(remaining); }
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
