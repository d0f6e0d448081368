//! Index-based sorting over anything that can compare and swap by position.

use crate::cursor::Cursor;

/// The minimal capability a comparison sort needs.
pub trait Sortable {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the element at `i` must come before the one at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    fn swap(&mut self, i: usize, j: usize);
}

impl<T> Sortable for Cursor<T> {
    fn len(&self) -> usize {
        Cursor::len(self)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        Cursor::less(self, i, j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        Cursor::swap(self, i, j);
    }
}

/// Sorts `data` in place with a heap sort. Not stable.
///
/// Only [`Sortable::less`] and [`Sortable::swap`] are used, so a cursor
/// without an ordering hook comes out unchanged.
pub fn sort<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();
    for root in (0..n / 2).rev() {
        sift_down(data, root, n);
    }
    for end in (1..n).rev() {
        // The root is a maximum of `[0, end]`; if `end` ties it, it is
        // already in place and dropping a last leaf keeps the heap valid.
        if data.less(end, 0) {
            data.swap(0, end);
            sift_down(data, 0, end);
        }
    }
}

/// Reports whether `data` is in non-decreasing order under [`Sortable::less`].
pub fn is_sorted<S: Sortable + ?Sized>(data: &S) -> bool {
    (1..data.len()).all(|i| !data.less(i, i - 1))
}

fn sift_down<S: Sortable + ?Sized>(data: &mut S, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && data.less(child, child + 1) {
            child += 1;
        }
        if !data.less(root, child) {
            return;
        }
        data.swap(root, child);
        root = child;
    }
}
