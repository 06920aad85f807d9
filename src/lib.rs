//! # lilr
//!
//! **Sparse n-dimensional arrays stored as nested sorted singly-linked lists.**
//!
//! lilr implements the list-of-lists sparse layout: each dimension level is
//! an ordered linked sequence of `(index, value)` entries, every absent
//! index implicitly holds one shared default value, and removal prunes
//! emptied sublists so absence always means "default everywhere below".
//!
//! ## Why list-of-lists?
//!
//! - **Cheap incremental mutation**: point insert and remove touch only the
//!   lists along one coordinate path
//! - **Arbitrary rank**: the same structure nests for any number of
//!   dimensions
//! - **Non-zero defaults**: the sparse "background" value is arbitrary, not
//!   hardwired to zero
//! - **Lossless conversion**: imports from dense arrays and compressed-row
//!   matrices, casting copies across element types
//!
//! ## Quick Start
//!
//! ```
//! use lilr::prelude::*;
//!
//! let mut s = ListStorage::<f64>::zeros([3, 3])?;
//! s.insert(&[0, 0], 5.0)?;
//! s.insert(&[1, 2], 7.0)?;
//!
//! assert_eq!(*s.get(&[1, 2])?, 7.0);
//! assert_eq!(*s.get(&[2, 2])?, 0.0);
//! assert_eq!(s.count_stored(), 2);
//!
//! s.remove(&[0, 0])?;
//! assert_eq!(s.count_stored(), 1);
//! # Ok::<(), lilr::error::Error>(())
//! ```
//!
//! Storages are single-threaded values: there is no internal locking, and
//! references returned by `get` must not be retained across a mutating call
//! on the same storage.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod csr;
pub mod dense;
pub mod dtype;
pub mod error;
pub mod list;
pub mod shape;
pub mod storage;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::csr::CsrMatrix;
    pub use crate::dense::DenseArray;
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::shape::Shape;
    pub use crate::storage::ListStorage;
}
