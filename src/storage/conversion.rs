//! Conversions: casting copies and imports from dense and compressed-row

use crate::csr::CsrMatrix;
use crate::dense::DenseArray;
use crate::dtype::Element;
use crate::error::Result;
use crate::list::List;
use crate::storage::{Entry, ListStorage};

impl<T: Element> ListStorage<T> {
    /// Deep copy with every payload and the default converted to `U`
    ///
    /// Conversion goes through the [`Element`] contract and is defined for
    /// every ordered pair of element types; casting to the same type
    /// degenerates to a plain copy.
    pub fn cast<U: Element>(&self) -> ListStorage<U> {
        ListStorage {
            shape: self.shape.clone(),
            default: U::from_f64(self.default.to_f64()),
            rows: cast_list(&self.rows),
        }
    }

    /// Import from a dense row-major array, under the target dtype's zero
    ///
    /// Walks the dense data once in row-major order; source values equal to
    /// the source dtype's zero are skipped, and a nested list is only
    /// attached to its parent when at least one non-zero descendant was
    /// found. Entries are linked through append cursors, so construction is
    /// O(1) per element.
    pub fn from_dense<S: Element>(dense: &DenseArray<S>) -> Result<Self> {
        let mut storage = Self::new(dense.shape().clone(), T::zero())?;
        let mut pos = 0;
        if let Some(rows) = dense_level(dense.data(), dense.shape(), &mut pos) {
            storage.rows = rows;
        }
        Ok(storage)
    }

    /// Materialize the full dense equivalent of this storage
    ///
    /// Every un-materialized coordinate becomes an explicit copy of the
    /// default value.
    pub fn to_dense(&self) -> DenseArray<T> {
        let mut data = vec![self.default; self.shape.numel()];
        fill_dense(&self.rows, &self.shape, 0, &mut data);
        DenseArray {
            shape: self.shape.clone(),
            data,
        }
    }

    /// Import from a compressed-row matrix (always rank 2)
    ///
    /// The default value is converted from the source's zero slot. Each
    /// row's out-of-band diagonal is re-merged into the ascending
    /// off-diagonal column run: it is spliced in before the first larger
    /// column, or appended when the run ends first. Rows that hold no
    /// off-diagonal values and a zero diagonal produce no nested list.
    pub fn from_csr<S: Element>(src: &CsrMatrix<S>) -> Result<Self> {
        let [nrows, ncols] = src.shape();
        let zero = src.zero();
        let mut storage = Self::new([nrows, ncols], T::from_f64(zero.to_f64()))?;

        let mut rows = List::new();
        let mut rows_tail = rows.appender();
        for i in 0..nrows {
            let mut pending_diag: Option<T> = if i < ncols && src.diagonal(i) != zero {
                Some(T::from_f64(src.diagonal(i).to_f64()))
            } else {
                None
            };

            let mut row = List::new();
            let mut tail = row.appender();
            for p in src.row_range(i) {
                let col = src.col_index(p);
                if col > i {
                    if let Some(diag) = pending_diag.take() {
                        tail = tail.push(i, Entry::Value(diag));
                    }
                }
                tail = tail.push(col, Entry::Value(T::from_f64(src.value(p).to_f64())));
            }
            if let Some(diag) = pending_diag.take() {
                tail = tail.push(i, Entry::Value(diag));
            }

            if !row.is_empty() {
                rows_tail = rows_tail.push(i, Entry::List(row));
            }
        }
        storage.rows = rows;
        Ok(storage)
    }
}

fn cast_list<T: Element, U: Element>(list: &List<Entry<T>>) -> List<Entry<U>> {
    let mut out = List::new();
    let mut tail = out.appender();
    for (key, entry) in list.iter() {
        let converted = match entry {
            Entry::Value(v) => Entry::Value(U::from_f64(v.to_f64())),
            Entry::List(sub) => Entry::List(cast_list(sub)),
        };
        tail = tail.push(key, converted);
    }
    out
}

/// Build one nesting level from the row-major dense walk
///
/// `pos` is the running offset into the dense data; the leaf loop advances
/// it once per scalar, so recursion order matches the row-major layout.
/// Returns `None` when nothing at this level was worth materializing.
fn dense_level<S: Element, T: Element>(
    data: &[S],
    dims: &[usize],
    pos: &mut usize,
) -> Option<List<Entry<T>>> {
    let (&dim, rest) = dims.split_first()?;
    let mut list = List::new();
    let mut tail = list.appender();
    if rest.is_empty() {
        for key in 0..dim {
            let value = data[*pos];
            *pos += 1;
            if value != S::zero() {
                tail = tail.push(key, Entry::Value(T::from_f64(value.to_f64())));
            }
        }
    } else {
        for key in 0..dim {
            if let Some(sub) = dense_level(data, rest, pos) {
                tail = tail.push(key, Entry::List(sub));
            }
        }
    }
    if list.is_empty() {
        None
    } else {
        Some(list)
    }
}

fn fill_dense<T: Element>(list: &List<Entry<T>>, dims: &[usize], base: usize, data: &mut [T]) {
    let stride: usize = dims[1..].iter().product();
    for (key, entry) in list.iter() {
        match entry {
            Entry::Value(value) => data[base + key] = *value,
            Entry::List(sub) => fill_dense(sub, &dims[1..], base + key * stride, data),
        }
    }
}
