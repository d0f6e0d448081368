//! # ds-core
//!
//! Generic in-memory containers.
//!
//! - [`Cursor`]: a position-tracking view over an owned buffer with an
//!   optional capacity and a pluggable ordering hook.
//! - [`ListCursor`]: the same navigation without capacity or ordering.
//! - [`Tree`]: an n-ary tree with parent links and leaf collection.
//! - [`sort`]: an index-based sort driven by [`sort::Sortable`], which
//!   [`Cursor`] implements.
//!
//! ```
//! use ds_core::{Cursor, CursorError};
//!
//! let cursor = Cursor::new(&[1, 2, 3, 4, 5]);
//! let (taken, rest) = cursor.take(3)?;
//! assert_eq!(taken, vec![1, 2, 3]);
//! assert_eq!(rest.as_slice(), &[4, 5]);
//! assert_eq!(cursor.replace_at(3, [10, 20, 30]).unwrap_err(), CursorError::Overflow);
//! # Ok::<(), CursorError>(())
//! ```
//!
//! None of these types synchronise internally; share them across threads
//! behind a lock if needed.

pub mod cursor;
pub mod error;
pub mod list;
pub mod sort;
pub mod tree;

pub use cursor::{Cursor, CursorOptions, OrderingHook};
pub use error::{CursorError, TreeError};
pub use list::ListCursor;
pub use tree::{NodeId, Tree};
