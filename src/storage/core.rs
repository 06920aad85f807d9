//! Core ListStorage implementation: creation, point access, mutation, counting

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::list::List;
use crate::shape::Shape;

/// One payload slot in the recursive structure
///
/// Nodes at depth `d < rank - 1` hold nested lists; nodes at depth
/// `rank - 1` hold scalar values. Construction and mutation never mix the
/// two at one depth.
#[derive(Clone, Debug)]
pub(crate) enum Entry<T> {
    /// Nested list for an outer dimension
    List(List<Entry<T>>),
    /// Scalar payload at the innermost dimension
    Value(T),
}

/// Sparse n-dimensional storage backed by nested sorted linked lists
///
/// Every coordinate not explicitly materialized reads as the shared
/// `default` value. Materialization happens lazily on insert; removal
/// prunes nested lists as soon as they become empty, so the absence of a
/// key at any level always means "this subtree equals the default
/// everywhere".
///
/// # Example
///
/// ```
/// use lilr::storage::ListStorage;
///
/// let mut s = ListStorage::<f64>::zeros([3, 3])?;
/// s.insert(&[0, 0], 5.0)?;
/// s.insert(&[1, 2], 7.0)?;
///
/// assert_eq!(*s.get(&[0, 0])?, 5.0);
/// assert_eq!(*s.get(&[2, 2])?, 0.0); // never written: default
/// assert_eq!(s.count_stored(), 2);
/// # Ok::<(), lilr::error::Error>(())
/// ```
#[derive(Clone)]
pub struct ListStorage<T: Element> {
    pub(crate) shape: Shape,
    pub(crate) default: T,
    pub(crate) rows: List<Entry<T>>,
}

impl<T: Element> ListStorage<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an empty storage with the given shape and default value
    ///
    /// Ownership of `default` transfers to the storage; it becomes the value
    /// of every un-materialized coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape has rank 0 or any dimension of size 0.
    pub fn new(shape: impl Into<Shape>, default: T) -> Result<Self> {
        let shape = shape.into();
        if shape.is_empty() {
            return Err(Error::invalid_argument("shape", "rank must be at least 1"));
        }
        if let Some(axis) = shape.iter().position(|&dim| dim == 0) {
            return Err(Error::invalid_argument(
                "shape",
                format!("dimension {axis} has size 0"),
            ));
        }
        Ok(Self {
            shape,
            default,
            rows: List::new(),
        })
    }

    /// Create an empty storage whose default is the dtype's zero
    pub fn zeros(shape: impl Into<Shape>) -> Result<Self> {
        Self::new(shape, T::zero())
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Shape of the storage
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of dimensions
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.ndim()
    }

    /// Runtime element type tag
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// The shared value of every un-materialized coordinate
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Returns true if no coordinate is materialized
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn check_coords(&self, coords: &[usize]) -> Result<()> {
        if coords.len() != self.rank() {
            return Err(Error::RankMismatch {
                expected: self.rank(),
                got: coords.len(),
            });
        }
        for (axis, (&index, &size)) in coords.iter().zip(self.shape.iter()).enumerate() {
            if index >= size {
                return Err(Error::IndexOutOfBounds { index, axis, size });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Point access and mutation
    // =========================================================================

    /// Read the value at `coords`
    ///
    /// Descends one list per dimension; any missing key short-circuits to
    /// the default value. Never allocates. The returned reference must not
    /// be retained across a mutating call on the same storage.
    pub fn get(&self, coords: &[usize]) -> Result<&T> {
        self.check_coords(coords)?;
        let last = coords.len() - 1;
        let mut list = &self.rows;
        for &index in &coords[..last] {
            match list.find(index) {
                Some(Entry::List(sub)) => list = sub,
                _ => return Ok(&self.default),
            }
        }
        match list.find(coords[last]) {
            Some(Entry::Value(value)) => Ok(value),
            _ => Ok(&self.default),
        }
    }

    /// Store `value` at `coords`, returning the payload it replaced
    ///
    /// Materializes nested lists for each missing outer key, then performs
    /// an ordered insert at the innermost level. Inserting a value equal to
    /// the default is allowed and stores it explicitly; this path never
    /// prunes.
    pub fn insert(&mut self, coords: &[usize], value: T) -> Result<Option<T>> {
        self.check_coords(coords)?;
        let last = coords.len() - 1;
        let mut list = &mut self.rows;
        for &index in &coords[..last] {
            list = match list.find_or_insert_with(index, || Entry::List(List::new())) {
                Entry::List(sub) => sub,
                Entry::Value(_) => unreachable!("outer levels hold nested lists"),
            };
        }
        match list.insert(coords[last], Entry::Value(value)) {
            Some(Entry::Value(prev)) => Ok(Some(prev)),
            Some(Entry::List(_)) => unreachable!("innermost level holds scalar values"),
            None => Ok(None),
        }
    }

    /// Remove the value at `coords`, returning it if one was materialized
    ///
    /// A missing key at any level means there is nothing to remove:
    /// `Ok(None)` with no side effects. After a successful removal, every
    /// nested list left empty is unlinked from its parent, innermost first,
    /// stopping at the first level that remains non-empty.
    pub fn remove(&mut self, coords: &[usize]) -> Result<Option<T>> {
        self.check_coords(coords)?;
        Ok(remove_in(&mut self.rows, coords))
    }

    // =========================================================================
    // Counting
    // =========================================================================

    /// Number of materialized scalar payloads across all nesting levels
    pub fn count_stored(&self) -> usize {
        count_in(&self.rows)
    }

    /// Number of materialized payloads off the main diagonal (rank 2 only)
    ///
    /// # Errors
    ///
    /// Returns [`Error::RankMismatch`] for storages of any other rank.
    pub fn count_off_diagonal(&self) -> Result<usize> {
        if self.rank() != 2 {
            return Err(Error::RankMismatch {
                expected: 2,
                got: self.rank(),
            });
        }
        let mut count = 0;
        for (i, entry) in self.rows.iter() {
            if let Entry::List(row) = entry {
                count += row.iter().filter(|&(j, _)| j != i).count();
            }
        }
        Ok(count)
    }
}

impl<T: Element> std::fmt::Debug for ListStorage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListStorage")
            .field("shape", &self.shape)
            .field("dtype", &self.dtype())
            .field("stored", &self.count_stored())
            .finish()
    }
}

/// Recursive removal with cascading prune
///
/// The recursion stack plays the role of the per-level node trail: after the
/// innermost removal succeeds, each unwinding frame checks whether the child
/// list it descended into is now empty and unlinks it if so.
fn remove_in<T>(list: &mut List<Entry<T>>, coords: &[usize]) -> Option<T> {
    let (&index, rest) = coords.split_first()?;
    if rest.is_empty() {
        return match list.remove(index)? {
            Entry::Value(value) => Some(value),
            Entry::List(_) => unreachable!("innermost level holds scalar values"),
        };
    }
    let removed = match list.find_mut(index) {
        Some(Entry::List(sub)) => remove_in(sub, rest),
        _ => None,
    };
    if removed.is_some() {
        let now_empty = matches!(list.find(index), Some(Entry::List(sub)) if sub.is_empty());
        if now_empty {
            list.remove(index);
        }
    }
    removed
}

fn count_in<T>(list: &List<Entry<T>>) -> usize {
    list.iter()
        .map(|(_, entry)| match entry {
            Entry::Value(_) => 1,
            Entry::List(sub) => count_in(sub),
        })
        .sum()
}
