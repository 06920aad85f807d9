//! Compressed-row sparse matrix collaborator
//!
//! Rank-2 sparse layout with the diagonal stored out-of-band: the value
//! array holds the diagonal first, then a designated zero slot, then the
//! off-diagonal values; the index array holds the row pointers first, then
//! the column index of each off-diagonal value. This is the layout the
//! list-of-lists importer re-merges into one ascending-by-column sequence
//! per row. Layout design itself is out of scope here; this type only
//! validates and exposes it.

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::ops::Range;

/// Compressed-row sparse matrix with an out-of-band diagonal
///
/// For an `n x m` matrix:
/// - `a[0..n]` are the diagonal values, `a[n]` is the zero slot (the value
///   of every cell the structure leaves implicit), `a[n + 1..]` are the
///   off-diagonal values;
/// - `ija[0..=n]` are row pointers into the shared tail region, so row `i`
///   owns positions `ija[i]..ija[i + 1]`, and `ija[p]` for `p > n` is the
///   column of the off-diagonal value `a[p]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<T: Element> {
    shape: [usize; 2],
    a: Vec<T>,
    ija: Vec<usize>,
}

impl<T: Element> CsrMatrix<T> {
    /// Create a compressed-row matrix from its raw arrays
    ///
    /// # Errors
    ///
    /// Returns an error if the arrays disagree in length, the row pointers
    /// are not monotone or do not span exactly the tail region, a column
    /// index is out of range or refers to the diagonal, or columns within a
    /// row are not strictly ascending.
    pub fn new(shape: [usize; 2], a: Vec<T>, ija: Vec<usize>) -> Result<Self> {
        let [nrows, ncols] = shape;
        if nrows == 0 || ncols == 0 {
            return Err(Error::invalid_argument("shape", "dimensions must be positive"));
        }
        if a.len() != ija.len() {
            return Err(Error::shape_mismatch(&[a.len()], &[ija.len()]));
        }
        if a.len() < nrows + 1 {
            return Err(Error::invalid_argument(
                "a",
                format!("need at least {} slots for diagonal and zero", nrows + 1),
            ));
        }
        if ija[0] != nrows + 1 {
            return Err(Error::invalid_argument(
                "ija",
                format!("first row pointer must be {}", nrows + 1),
            ));
        }
        if ija[nrows] != ija.len() {
            return Err(Error::invalid_argument(
                "ija",
                "last row pointer must equal the array length",
            ));
        }
        for i in 0..nrows {
            if ija[i] > ija[i + 1] {
                return Err(Error::invalid_argument(
                    "ija",
                    format!("row pointers decrease at row {i}"),
                ));
            }
            let mut prev_col = None;
            for p in ija[i]..ija[i + 1] {
                let col = ija[p];
                if col >= ncols {
                    return Err(Error::IndexOutOfBounds {
                        index: col,
                        axis: 1,
                        size: ncols,
                    });
                }
                if col == i {
                    return Err(Error::invalid_argument(
                        "ija",
                        format!("row {i} stores its diagonal in the off-diagonal run"),
                    ));
                }
                if prev_col.map_or(false, |prev: usize| prev >= col) {
                    return Err(Error::invalid_argument(
                        "ija",
                        format!("columns of row {i} are not strictly ascending"),
                    ));
                }
                prev_col = Some(col);
            }
        }
        Ok(Self { shape, a, ija })
    }

    /// Matrix shape `[nrows, ncols]`
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// Runtime element type tag
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// The designated zero slot: the implicit value of unstored cells
    #[inline]
    pub fn zero(&self) -> T {
        self.a[self.shape[0]]
    }

    /// Diagonal value of row `i`
    ///
    /// # Panics
    ///
    /// Panics if `i >= nrows`.
    #[inline]
    pub fn diagonal(&self, i: usize) -> T {
        debug_assert!(i < self.shape[0]);
        self.a[i]
    }

    /// Positions of row `i`'s off-diagonal run in the tail region
    ///
    /// # Panics
    ///
    /// Panics if `i >= nrows`.
    #[inline]
    pub fn row_range(&self, i: usize) -> Range<usize> {
        self.ija[i]..self.ija[i + 1]
    }

    /// Column of the off-diagonal value at position `p`
    #[inline]
    pub fn col_index(&self, p: usize) -> usize {
        self.ija[p]
    }

    /// Off-diagonal value at position `p`
    #[inline]
    pub fn value(&self, p: usize) -> T {
        self.a[p]
    }

    /// Number of stored off-diagonal values
    #[inline]
    pub fn off_diagonal_len(&self) -> usize {
        self.ija.len() - self.shape[0] - 1
    }
}
