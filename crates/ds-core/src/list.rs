//! Navigation-only cursor.
//!
//! [`ListCursor`] shares the navigation and extraction behaviour of
//! [`crate::Cursor`] but carries no capacity and no ordering hook, and its
//! `append`/`prepend` push a single element.

use crate::error::CursorError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCursor<T> {
    buffer: Vec<T>,
    position: usize,
}

impl<T> ListCursor<T> {
    /// Takes ownership of `buffer` and starts at position 0.
    pub fn new(buffer: Vec<T>) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    pub fn into_vec(self) -> Vec<T> {
        self.buffer
    }

    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] on an empty buffer.
    pub fn first(&mut self) -> Result<&T, CursorError> {
        self.seek(0)
    }

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

    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] at the last element.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&T, CursorError> {
        let index = self
            .position
            .checked_add(1)
            .ok_or(CursorError::IndexOutOfRange)?;
        self.seek(index)
    }

    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] at index 0.
    pub fn prev(&mut self) -> Result<&T, CursorError> {
        let index = self
            .position
            .checked_sub(1)
            .ok_or(CursorError::IndexOutOfRange)?;
        self.seek(index)
    }

    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] if the position is not occupied.
    pub fn get(&self) -> Result<&T, CursorError> {
        self.buffer
            .get(self.position)
            .ok_or(CursorError::IndexOutOfRange)
    }

    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] if `index` is not occupied.
    pub fn seek(&mut self, index: usize) -> Result<&T, CursorError> {
        let value = self
            .buffer
            .get(index)
            .ok_or(CursorError::IndexOutOfRange)?;
        self.position = index;
        Ok(value)
    }

    pub fn set(&mut self, value: T) {
        if let Some(slot) = self.buffer.get_mut(self.position) {
            *slot = value;
        }
    }

    pub fn delete(&mut self) -> Option<T> {
        self.is_valid(self.position)
            .then(|| self.buffer.remove(self.position))
    }

    /// Removes `[start, end)` in place; both bounds must be occupied indices.
    ///
    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] otherwise.
    pub fn chop(&mut self, start: usize, end: usize) -> Result<(), CursorError> {
        self.check_range(start, end)?;
        self.buffer.drain(start..end);
        Ok(())
    }

    pub fn append(&mut self, value: T) {
        self.buffer.push(value);
    }

    /// Pushes to the front. The position is not adjusted.
    pub fn prepend(&mut self, value: T) {
        self.buffer.insert(0, value);
    }

    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] if the position is not occupied when
    /// the call begins, otherwise the first error returned by `visit`.
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
}

impl<T: Clone> ListCursor<T> {
    /// Copies `[start, end)`; both bounds must be occupied indices.
    ///
    /// # Errors
    ///
    /// [`CursorError::IndexOutOfRange`] otherwise.
    pub fn slice(&self, start: usize, end: usize) -> Result<Vec<T>, CursorError> {
        self.check_range(start, end)?;
        Ok(self.buffer[start..end].to_vec())
    }

    /// A new cursor over [`ListCursor::slice`].
    ///
    /// # Errors
    ///
    /// Same as [`ListCursor::slice`].
    pub fn take(&self, start: usize, end: usize) -> Result<ListCursor<T>, CursorError> {
        self.slice(start, end).map(ListCursor::new)
    }
}

impl<T> Default for ListCursor<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for ListCursor<T> {
    fn from(buffer: Vec<T>) -> Self {
        Self::new(buffer)
    }
}
