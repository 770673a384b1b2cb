//! Growable double-ended queue backed by a circular buffer.
//!
//! # Layout
//! Elements live in a boxed slice of `Option<T>` slots.  The deque tracks a `head`
//! cursor (the physical slot of logical index 0) and a `len` counter; logical index
//! `i` lives in slot `(head + i) % capacity`.  Slots outside that window are `None`.
//!
//! # Growth
//! When a push finds every slot occupied, the buffer is reallocated at twice its
//! capacity (minimum 1).  Elements are moved across in logical order starting at
//! slot 0, so `head` resets to 0.  Capacity never shrinks.
//!
//! # Signed indexing
//! [`Deque::at`], [`Deque::at_mut`], [`Deque::set`] and the `[]` operators accept an
//! `isize`.  Negative indices count from the back: `-1` is the last element and
//! `-len` the first.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::iter::{FusedIterator, repeat_with};
use core::mem;
use core::ops::{Index, IndexMut};

#[cfg(feature = "std")]
use std::collections::VecDeque;

use crate::error::DequeError;

// ─── AnyDeque ─────────────────────────────────────────────────────────────────

/// An object-safe abstraction over double-ended queue types.
///
/// Implemented by both [`Deque<T>`] and `VecDeque<T>` so that code can operate on a
/// deque without knowing which backend is in use.
pub trait AnyDeque<T> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element to the back.
    fn push_back(&mut self, item: T);
    /// Prepends an element to the front.
    fn push_front(&mut self, item: T);
    /// Removes and returns the element from the back, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;
    /// Removes and returns the element from the front, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;
    /// Removes all elements.
    fn clear(&mut self);
    /// Returns a shared reference to the front element, or `None` if empty.
    fn front(&self) -> Option<&T>;
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back(&self) -> Option<&T>;
    /// Returns the element at signed logical `index`, or `None` if out of range.
    fn at(&self, index: isize) -> Option<&T>;
}

#[cfg(feature = "std")]
impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn at(&self, index: isize) -> Option<&T> {
        resolve_index(index, self.len()).and_then(|i| self.get(i))
    }
}

/// Resolves a signed logical index against `len`.
///
/// Non-negative indices must be `< len`; negative indices are taken from the back
/// and must not reach past the front.
#[inline(always)]
pub(crate) fn resolve_index(index: isize, len: usize) -> Option<usize> {
    if index >= 0 {
        let i = index as usize;
        (i < len).then_some(i)
    } else {
        let from_back = index.unsigned_abs();
        (from_back <= len).then(|| len - from_back)
    }
}

fn alloc_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    repeat_with(|| None).take(capacity).collect()
}

// ─── Deque ────────────────────────────────────────────────────────────────────

/// A double-ended queue with amortized O(1) pushes at both ends and O(1) signed
/// indexing.
///
/// ```rust
/// use ring_deque::Deque;
///
/// let mut d = Deque::new();
/// d.push_front(123);
/// d.push_front(4);
/// d.push_back(7);
///
/// assert_eq!(d.at(0), Some(&4));
/// assert_eq!(d.at(-1), Some(&7));
/// assert_eq!(d.at(3), None);
/// assert_eq!(d.to_string(), ">[4, 123, 7]<");
/// ```
#[derive(Clone)]
pub struct Deque<T> {
    buf: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T> AnyDeque<T> for Deque<T> {
    fn len(&self) -> usize {
        self.len
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn at(&self, index: isize) -> Option<&T> {
        self.at(index)
    }
}

impl<T> Deque<T> {
    /// Largest length a deque of `T` may be constructed with.
    pub const MAX_LEN: usize = isize::MAX as usize / mem::size_of::<Option<T>>();

    /// Creates an empty deque.  Does not allocate.
    pub fn new() -> Self {
        Self {
            buf: Vec::new().into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    /// Creates an empty deque with room for `capacity` elements before the first
    /// reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: alloc_slots(capacity),
            head: 0,
            len: 0,
        }
    }

    /// Creates a deque of `len` elements, each set to `T::default()`.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self {
            buf: repeat_with(|| Some(T::default())).take(len).collect(),
            head: 0,
            len,
        }
    }

    /// Creates a deque of `len` clones of `value`.
    ///
    /// Every slot receives its own `Clone`; for shared handles such as `Rc<U>` all
    /// slots therefore point at the same allocation.
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            buf: alloc::vec![Some(value); len].into_boxed_slice(),
            head: 0,
            len,
        }
    }

    /// Signed-size counterpart of [`with_len`](Deque::with_len).
    ///
    /// # Errors
    /// [`DequeError::InvalidSize`] if `len` is negative, [`DequeError::TooLarge`] if it
    /// exceeds [`MAX_LEN`](Deque::MAX_LEN).
    pub fn try_with_len(len: isize) -> Result<Self, DequeError>
    where
        T: Default,
    {
        Ok(Self::with_len(Self::checked_len(len)?))
    }

    /// Signed-size counterpart of [`from_elem`](Deque::from_elem).
    ///
    /// # Errors
    /// Same as [`try_with_len`](Deque::try_with_len).
    pub fn try_from_elem(len: isize, value: T) -> Result<Self, DequeError>
    where
        T: Clone,
    {
        Ok(Self::from_elem(Self::checked_len(len)?, value))
    }

    fn checked_len(requested: isize) -> Result<usize, DequeError> {
        let Ok(len) = usize::try_from(requested) else {
            log::debug!("rejecting negative deque size {requested}");
            return Err(DequeError::InvalidSize(requested));
        };
        if len > Self::MAX_LEN {
            log::debug!("rejecting deque size {len} above {}", Self::MAX_LEN);
            return Err(DequeError::TooLarge(len));
        }
        Ok(len)
    }

    /// Returns the number of elements in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](Deque::len).
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Advances a physical slot index by `add`, wrapping at capacity.
    /// Requires `idx < capacity` and `add <= capacity`.
    #[inline(always)]
    fn wrap_add(&self, idx: usize, add: usize) -> usize {
        let cap = self.capacity();
        let idx = idx + add;
        if idx >= cap { idx - cap } else { idx }
    }

    /// Moves a physical slot index back by `sub`, wrapping at capacity.
    #[inline(always)]
    fn wrap_sub(&self, idx: usize, sub: usize) -> usize {
        if idx >= sub {
            idx - sub
        } else {
            idx + self.capacity() - sub
        }
    }

    /// Returns the element at unsigned logical `index`, or `None`.
    ///
    /// Logical index 0 is the front.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.buf[self.wrap_add(self.head, index)].as_ref()
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the element at unsigned logical `index`.
    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let slot = self.wrap_add(self.head, index);
            self.buf[slot].as_mut()
        } else {
            None
        }
    }

    /// Returns the element at signed logical `index`, or `None` when the index is
    /// out of range in either direction.
    #[inline(always)]
    pub fn at(&self, index: isize) -> Option<&T> {
        resolve_index(index, self.len).and_then(|i| self.get(i))
    }

    /// Mutable counterpart of [`at`](Deque::at).
    #[inline(always)]
    pub fn at_mut(&mut self, index: isize) -> Option<&mut T> {
        resolve_index(index, self.len).and_then(move |i| self.get_mut(i))
    }

    /// Replaces the element at signed logical `index`, returning the previous one.
    ///
    /// # Errors
    /// [`DequeError::IndexOutOfRange`] if `index` is outside `[-len, len)`.  The
    /// deque is left untouched in that case.
    pub fn set(&mut self, index: isize, value: T) -> Result<T, DequeError> {
        let len = self.len;
        match self.at_mut(index) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(DequeError::IndexOutOfRange { index, len }),
        }
    }

    /// Returns a shared reference to the front element, or `None` if empty.
    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a shared reference to the back element, or `None` if empty.
    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Returns an exclusive reference to the front element, or `None` if empty.
    #[inline(always)]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns an exclusive reference to the back element, or `None` if empty.
    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.len.checked_sub(1).and_then(move |i| self.get_mut(i))
    }

    /// Appends `item` to the back of the deque, growing the buffer if it is full.
    #[inline(always)]
    pub fn push_back(&mut self, item: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        let tail = self.wrap_add(self.head, self.len);
        self.buf[tail] = Some(item);
        self.len += 1;
    }

    /// Prepends `item` to the front of the deque, growing the buffer if it is full.
    #[inline(always)]
    pub fn push_front(&mut self, item: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.head = self.wrap_sub(self.head, 1);
        self.buf[self.head] = Some(item);
        self.len += 1;
    }

    /// Removes and returns the last element, or `None` if empty.
    #[inline(always)]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let tail = self.wrap_add(self.head, self.len);
        self.buf[tail].take()
    }

    /// Removes and returns the first element, or `None` if empty.
    #[inline(always)]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.buf[self.head].take();
        self.head = self.wrap_add(self.head, 1);
        self.len -= 1;
        item
    }

    /// Drops every element.  Capacity is kept.
    pub fn clear(&mut self) {
        for i in 0..self.len {
            let slot = self.wrap_add(self.head, i);
            self.buf[slot] = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Ensures room for at least `additional` more elements without reallocating.
    ///
    /// Capacity is doubled until it fits, so the growth rule matches the one used
    /// by the push operations.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.len.saturating_add(additional);
        if required > self.capacity() {
            let mut new_cap = self.capacity().max(1);
            while new_cap < required {
                new_cap = new_cap.saturating_mul(2);
            }
            self.grow_to(new_cap);
        }
    }

    /// Returns a front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            front: 0,
            back: self.len,
        }
    }

    /// Cold path: doubles the capacity (minimum 1).
    #[inline(never)]
    fn grow(&mut self) {
        let new_cap = self.capacity().saturating_mul(2).max(1);
        self.grow_to(new_cap);
    }

    /// Reallocates to `new_cap` slots, writing the elements in logical order
    /// (front → back) from slot 0.  After this call `head == 0`.
    fn grow_to(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        log::trace!(
            "growing deque storage from {} to {new_cap} slots ({} live)",
            self.capacity(),
            self.len
        );
        let mut buf = Vec::with_capacity(new_cap);
        for i in 0..self.len {
            let slot = self.wrap_add(self.head, i);
            buf.push(self.buf[slot].take());
        }
        buf.resize_with(new_cap, || None);
        self.buf = buf.into_boxed_slice();
        self.head = 0;
    }
}

// --- Index Traits ---

impl<T> Index<isize> for Deque<T> {
    type Output = T;

    fn index(&self, index: isize) -> &Self::Output {
        self.at(index).expect("index out of range")
    }
}

impl<T> IndexMut<isize> for Deque<T> {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        self.at_mut(index).expect("index out of range")
    }
}

// --- Formatting ---

/// Renders `>[e0, e1, ...]<`, each element in its `Debug` form.
impl<T: fmt::Debug> fmt::Display for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(">[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item:?}")?;
        }
        f.write_str("]<")
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// --- Standard Traits ---

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for Deque<T> {}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    fn from(vec: Vec<T>) -> Self {
        let len = vec.len();
        Self {
            buf: vec.into_iter().map(Some).collect(),
            head: 0,
            len,
        }
    }
}

// ─── Iterators ────────────────────────────────────────────────────────────────

/// Borrowing iterator over a [`Deque`], front to back.
pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    front: usize,
    back: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.deque.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.deque.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`Deque`], front to back.
pub struct IntoIter<T> {
    deque: Deque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len, Some(self.deque.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
