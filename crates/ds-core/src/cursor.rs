//! Bounded sequence cursor.
//!
//! A [`Cursor`] owns an ordered buffer, tracks a current position inside it
//! and optionally limits how large the buffer may grow. Operations fall into
//! three groups:
//!
//! - navigation (`first`, `next`, `seek`, ...) moves the position and hands
//!   back the element found there;
//! - branching operations (`take`, `skip`, `replace`) leave the receiver
//!   alone and return a new, independent cursor;
//! - in-place mutation (`insert`, `append`, `delete`, ...) edits the
//!   receiver's buffer.
//!
//! `set`, `delete` and `swap` treat an invalid index as a silent no-op. Every
//! other operation reports failure through [`CursorError`] and leaves the
//! receiver untouched when it does.

use std::fmt;
use std::sync::Arc;

use crate::error::CursorError;

type LessFn<T> = dyn Fn(&[T], usize, usize) -> bool + Send + Sync;

/// A pluggable `less(i, j)` comparison over two buffer indices.
///
/// The hook receives the cursor's current buffer, so it always compares the
/// elements as they are now, even after swaps. It exists so that external,
/// index-based sorting routines (see [`crate::sort`]) can order a cursor's
/// contents; the cursor never sorts on its own.
pub struct OrderingHook<T> {
    less: Arc<LessFn<T>>,
}

impl<T> OrderingHook<T> {
    /// Wraps an index-based comparison.
    pub fn new<F>(less: F) -> Self
    where
        F: Fn(&[T], usize, usize) -> bool + Send + Sync + 'static,
    {
        Self {
            less: Arc::new(less),
        }
    }

    /// Orders by an element comparison: `less(i, j)` is `f(&buf[i], &buf[j])`.
    pub fn by<F>(f: F) -> Self
    where
        T: 'static,
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self::new(move |buf: &[T], i, j| f(&buf[i], &buf[j]))
    }

    /// Uses the element type's own ordering.
    pub fn natural() -> Self
    where
        T: Ord + 'static,
    {
        Self::by(|a: &T, b: &T| a < b)
    }

    fn less(&self, buf: &[T], i: usize, j: usize) -> bool {
        (self.less)(buf, i, j)
    }
}

impl<T> Clone for OrderingHook<T> {
    fn clone(&self) -> Self {
        Self {
            less: Arc::clone(&self.less),
        }
    }
}

impl<T> fmt::Debug for OrderingHook<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrderingHook(..)")
    }
}

/// Configuration attached to a [`Cursor`] when it is created.
pub struct CursorOptions<T> {
    /// Largest buffer length that `insert` will allow. Defaults to `usize::MAX`.
    pub capacity: usize,
    /// Comparison consulted by [`Cursor::less`].
    pub ordering: Option<OrderingHook<T>>,
    /// When set, `append` and `prepend` also refuse to grow past `capacity`.
    pub enforce_capacity_on_append: bool,
}

impl<T> CursorOptions<T> {
    /// Sets [`CursorOptions::capacity`].
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Installs the hook consulted by [`Cursor::less`].
    #[must_use]
    pub fn with_ordering(mut self, ordering: OrderingHook<T>) -> Self {
        self.ordering = Some(ordering);
        self
    }

    /// Sets [`CursorOptions::enforce_capacity_on_append`].
    #[must_use]
    pub fn enforce_capacity_on_append(mut self, enforce: bool) -> Self {
        self.enforce_capacity_on_append = enforce;
        self
    }
}

impl<T> Default for CursorOptions<T> {
    fn default() -> Self {
        Self {
            capacity: usize::MAX,
            ordering: None,
            enforce_capacity_on_append: false,
        }
    }
}

impl<T> Clone for CursorOptions<T> {
    fn clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            ordering: self.ordering.clone(),
            enforce_capacity_on_append: self.enforce_capacity_on_append,
        }
    }
}

impl<T> fmt::Debug for CursorOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorOptions")
            .field("capacity", &self.capacity)
            .field("ordering", &self.ordering.is_some())
            .field("enforce_capacity_on_append", &self.enforce_capacity_on_append)
            .finish()
    }
}

/// A position-tracking view over an owned, ordered buffer.
///
/// Invariant: when the buffer is non-empty and the last operation was a
/// navigation, `position < len`. In-place deletion may leave the position
/// past the end; navigation and `get` report that as
/// [`CursorError::IndexOutOfRange`] rather than moving it back.
pub struct Cursor<T> {
    buffer: Vec<T>,
    position: usize,
    options: CursorOptions<T>,
}

impl<T: Clone> Cursor<T> {
    /// Copies `initial` into a new cursor positioned at 0 with no capacity limit.
    pub fn new(initial: &[T]) -> Self {
        Self::with_options(initial, CursorOptions::default())
    }

    /// Copies `initial` into a new cursor positioned at 0.
    ///
    /// The capacity is taken verbatim. A capacity smaller than `initial`
    /// simply makes every capacity-checked operation fail.
    pub fn with_options(initial: &[T], options: CursorOptions<T>) -> Self {
        Self::from_vec_with_options(initial.to_vec(), options)
    }

    /// Returns a copy of the half-open range `[start, end)`.
    ///
    /// Both bounds must be occupied indices, so `end == len` is rejected.
    ///
    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] if either bound is not an occupied
    /// index or `start > end`.
    pub fn slice(&self, start: usize, end: usize) -> Result<Vec<T>, CursorError> {
        self.check_range(start, end)?;
        Ok(self.buffer[start..end].to_vec())
    }

    /// Extracts the next `count` elements starting at the position.
    ///
    /// Returns the extracted elements and a new cursor over whatever follows
    /// them, positioned at 0. The receiver is not modified.
    ///
    /// # Errors
    ///
    /// [`CursorError::Underflow`] if fewer than `count` elements remain.
    pub fn take(&self, count: usize) -> Result<(Vec<T>, Cursor<T>), CursorError> {
        let end = self
            .position
            .checked_add(count)
            .filter(|&end| end <= self.buffer.len())
            .ok_or(CursorError::Underflow)?;

        let taken = self.buffer[self.position..end].to_vec();
        let rest = self.branch(self.buffer[end..].to_vec(), 0);
        Ok((taken, rest))
    }

    /// Returns a new cursor over the buffer from `position + count` onwards.
    ///
    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] if `position + count` is not an
    /// occupied index.
    pub fn skip(&self, count: usize) -> Result<Cursor<T>, CursorError> {
        let start = self
            .position
            .checked_add(count)
            .filter(|&start| self.is_valid(start))
            .ok_or(CursorError::IndexOutOfRange)?;

        Ok(self.branch(self.buffer[start..].to_vec(), 0))
    }

    /// Overwrites elements starting at the position. See [`Cursor::replace_at`].
    ///
    /// # Errors
    ///
    /// Same as [`Cursor::replace_at`].
    pub fn replace<I>(&self, values: I) -> Result<Cursor<T>, CursorError>
    where
        I: IntoIterator<Item = T>,
    {
        self.replace_at(self.position, values)
    }

    /// Returns a new cursor whose buffer has `values` written over the
    /// elements starting at `index`.
    ///
    /// The length never changes: the whole window is replaced or nothing is.
    /// The new cursor keeps the receiver's position.
    ///
    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] if `index` is not occupied,
    /// [`CursorError::Overflow`] if the window would run past the end.
    pub fn replace_at<I>(&self, index: usize, values: I) -> Result<Cursor<T>, CursorError>
    where
        I: IntoIterator<Item = T>,
    {
        if !self.is_valid(index) {
            return Err(CursorError::IndexOutOfRange);
        }

        let values: Vec<T> = values.into_iter().collect();
        let end = index.saturating_add(values.len());
        if end > self.buffer.len() {
            return Err(CursorError::Overflow);
        }

        let mut buffer = self.buffer.clone();
        buffer.splice(index..end, values);
        Ok(self.branch(buffer, self.position))
    }

    fn branch(&self, buffer: Vec<T>, position: usize) -> Cursor<T> {
        Cursor {
            buffer,
            position,
            options: self.options.clone(),
        }
    }
}

impl<T> Cursor<T> {
    /// Takes ownership of `buffer`; no copy is made.
    pub fn from_vec(buffer: Vec<T>) -> Self {
        Self::from_vec_with_options(buffer, CursorOptions::default())
    }

    /// Like [`Cursor::from_vec`], with explicit options.
    pub fn from_vec_with_options(buffer: Vec<T>, options: CursorOptions<T>) -> Self {
        Self {
            buffer,
            position: 0,
            options,
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The current position. Not necessarily an occupied index.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The bound checked by `insert`.
    pub fn capacity(&self) -> usize {
        self.options.capacity
    }

    /// Options this cursor was built with; derived cursors inherit them.
    pub fn options(&self) -> &CursorOptions<T> {
        &self.options
    }

    /// Borrows the whole buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Consumes the cursor and returns its buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.buffer
    }

    /// Moves to index 0.
    ///
    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] on an empty buffer.
    pub fn first(&mut self) -> Result<&T, CursorError> {
        self.seek(0)
    }

    /// Moves to the last index.
    ///
    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] on an empty buffer.
    pub fn last(&mut self) -> Result<&T, CursorError> {
        let last = self
            .buffer
            .len()
            .checked_sub(1)
            .ok_or(CursorError::IndexOutOfRange)?;
        self.seek(last)
    }

    /// Moves one step forward.
    ///
    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] at the last element; the position is
    /// left where it was.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&T, CursorError> {
        let index = self
            .position
            .checked_add(1)
            .ok_or(CursorError::IndexOutOfRange)?;
        self.seek(index)
    }

    /// Moves one step back.
    ///
    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] at index 0; the position is left
    /// where it was.
    pub fn prev(&mut self) -> Result<&T, CursorError> {
        let index = self
            .position
            .checked_sub(1)
            .ok_or(CursorError::IndexOutOfRange)?;
        self.seek(index)
    }

    /// Returns the element at the position without moving.
    ///
    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] if the position is not occupied.
    pub fn get(&self) -> Result<&T, CursorError> {
        self.buffer
            .get(self.position)
            .ok_or(CursorError::IndexOutOfRange)
    }

    /// Moves to `index` and returns the element there.
    ///
    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] if `index` is not occupied; the
    /// position is left where it was.
    pub fn seek(&mut self, index: usize) -> Result<&T, CursorError> {
        let value = self
            .buffer
            .get(index)
            .ok_or(CursorError::IndexOutOfRange)?;
        self.position = index;
        Ok(value)
    }

    /// Overwrites the element at the position. Does nothing if the position
    /// is not occupied.
    pub fn set(&mut self, value: T) {
        if let Some(slot) = self.buffer.get_mut(self.position) {
            *slot = value;
        }
    }

    /// Removes the element at the position. See [`Cursor::delete_at`].
    pub fn delete(&mut self) -> Option<T> {
        self.delete_at(self.position)
    }

    /// Removes the element at `index`, shifting later elements left.
    ///
    /// Returns the removed element, or `None` without touching the buffer if
    /// `index` is not occupied. The position keeps its numeric value.
    pub fn delete_at(&mut self, index: usize) -> Option<T> {
        self.is_valid(index).then(|| self.buffer.remove(index))
    }

    /// Removes the half-open range `[start, end)` in place.
    ///
    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] under the same rules as
    /// [`Cursor::slice`].
    pub fn chop(&mut self, start: usize, end: usize) -> Result<(), CursorError> {
        self.check_range(start, end)?;
        self.buffer.drain(start..end);
        Ok(())
    }

    /// Inserts at the position. See [`Cursor::insert_at`].
    ///
    /// # Errors
    ///
    /// Same as [`Cursor::insert_at`].
    pub fn insert<I>(&mut self, values: I) -> Result<(), CursorError>
    where
        I: IntoIterator<Item = T>,
    {
        self.insert_at(self.position, values)
    }

    /// Inserts `values` before the element at `index`, shifting it and
    /// everything after it to the right.
    ///
    /// `index` must be occupied: inserting at `len` is rejected, use
    /// [`Cursor::append`] for that. The capacity check is
    /// `index + values.len() <= capacity`.
    ///
    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] if `index` is not occupied,
    /// [`CursorError::Overflow`] if the capacity check fails.
    pub fn insert_at<I>(&mut self, index: usize, values: I) -> Result<(), CursorError>
    where
        I: IntoIterator<Item = T>,
    {
        if !self.is_valid(index) {
            return Err(CursorError::IndexOutOfRange);
        }

        let values: Vec<T> = values.into_iter().collect();
        if index.saturating_add(values.len()) > self.options.capacity {
            return Err(CursorError::Overflow);
        }

        self.buffer.splice(index..index, values);
        Ok(())
    }

    /// Extends the buffer at the end.
    ///
    /// Capacity is only consulted when the cursor was built with
    /// `enforce_capacity_on_append`.
    ///
    /// # Errors
    ///
    /// [`CursorError::Overflow`] if capacity is enforced and would be exceeded.
    pub fn append<I>(&mut self, values: I) -> Result<(), CursorError>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        self.check_growth(values.len())?;
        self.buffer.extend(values);
        Ok(())
    }

    /// Inserts at the front and shifts the position forward so that the
    /// current element stays current.
    ///
    /// # Errors
    ///
    /// Same as [`Cursor::append`].
    pub fn prepend<I>(&mut self, values: I) -> Result<(), CursorError>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        self.check_growth(values.len())?;

        let shift = values.len();
        self.buffer.splice(0..0, values);
        self.position += shift;
        Ok(())
    }

    /// Exchanges two elements. Does nothing unless both indices are occupied.
    pub fn swap(&mut self, i: usize, j: usize) {
        if self.is_valid(i) && self.is_valid(j) {
            self.buffer.swap(i, j);
        }
    }

    /// Reports whether the element at `i` orders before the one at `j`.
    ///
    /// Consults the configured [`OrderingHook`]; without one, or when either
    /// index is not occupied, the answer is `false`.
    pub fn less(&self, i: usize, j: usize) -> bool {
        match &self.options.ordering {
            Some(hook) if self.is_valid(i) && self.is_valid(j) => hook.less(&self.buffer, i, j),
            _ => false,
        }
    }

    /// Visits every element from the position to the end, advancing the
    /// position as it goes.
    ///
    /// Stops at the first error returned by `visit` and leaves the position
    /// on the element that produced it. After a complete pass the position
    /// rests on the last element.
    ///
    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] (converted into `E`) if the position
    /// is not occupied when the call begins, otherwise whatever `visit`
    /// returns.
    pub fn for_each<E, F>(&mut self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
        E: From<CursorError>,
    {
        if !self.is_valid(self.position) {
            return Err(CursorError::IndexOutOfRange.into());
        }

        loop {
            visit(&self.buffer[self.position])?;
            if !self.is_valid(self.position + 1) {
                return Ok(());
            }
            self.position += 1;
        }
    }

    fn is_valid(&self, index: usize) -> bool {
        index < self.buffer.len()
    }

    fn check_range(&self, start: usize, end: usize) -> Result<(), CursorError> {
        if self.is_valid(start) && self.is_valid(end) && start <= end {
            Ok(())
        } else {
            Err(CursorError::IndexOutOfRange)
        }
    }

    fn check_growth(&self, additional: usize) -> Result<(), CursorError> {
        if self.options.enforce_capacity_on_append
            && self.buffer.len().saturating_add(additional) > self.options.capacity
        {
            return Err(CursorError::Overflow);
        }
        Ok(())
    }
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

impl<T> From<Vec<T>> for Cursor<T> {
    fn from(buffer: Vec<T>) -> Self {
        Self::from_vec(buffer)
    }
}

impl<T: Clone> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        self.branch(self.buffer.clone(), self.position)
    }
}

// The ordering hook is not comparable and does not take part.
impl<T: PartialEq> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
            && self.position == other.position
            && self.options.capacity == other.options.capacity
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("buffer", &self.buffer)
            .field("position", &self.position)
            .field("options", &self.options)
            .finish()
    }
}
