//! Structural equality over list storages
//!
//! Two storages can describe the same dense content with different subsets
//! of cells materialized, so comparison is two-tier: first every
//! materialized cell is checked (a cell present on one side only is checked
//! against the other side's default), then, if fewer cells were checked
//! than the shape holds, the two defaults themselves must match — the
//! remaining cells implicitly equal their own side's default.

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::list::List;
use crate::storage::{Entry, ListStorage};

impl<T: Element> ListStorage<T> {
    /// Compare the full n-dimensional content of two storages
    ///
    /// Cells that exist in neither structure compare through the two default
    /// values; cells that exist in either compare explicitly. Defined only
    /// for storages of identical rank and shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when the shapes differ.
    pub fn content_eq(&self, other: &Self) -> Result<bool> {
        if self.shape != other.shape {
            return Err(Error::shape_mismatch(&self.shape, &other.shape));
        }
        let max_elements = self.shape.numel();
        let mut checked = 0usize;

        let materialized_eq = match (self.rows.is_empty(), other.rows.is_empty()) {
            // Both empty: only the defaults matter.
            (true, true) => return Ok(self.default == other.default),
            (true, false) => all_eq_value(&other.rows, &self.default, &mut checked),
            (false, true) => all_eq_value(&self.rows, &other.default, &mut checked),
            (false, false) => eq_lists(
                &self.rows,
                &other.rows,
                &self.default,
                &other.default,
                &mut checked,
            ),
        };
        if !materialized_eq {
            return Ok(false);
        }
        // Partial coverage: the cells nobody materialized still have to agree.
        if checked < max_elements {
            return Ok(self.default == other.default);
        }
        Ok(true)
    }
}

/// Do all scalar payloads under `list` equal `value`?
///
/// Counts every leaf visited into `checked`; short-circuits on the first
/// mismatch, in which case the count is a lower bound (the caller only uses
/// it on success).
fn all_eq_value<T: Element>(list: &List<Entry<T>>, value: &T, checked: &mut usize) -> bool {
    list.iter().all(|(_, entry)| match entry {
        Entry::Value(v) => {
            *checked += 1;
            v == value
        }
        Entry::List(sub) => all_eq_value(sub, value, checked),
    })
}

fn entry_eq_value<T: Element>(entry: &Entry<T>, value: &T, checked: &mut usize) -> bool {
    match entry {
        Entry::Value(v) => {
            *checked += 1;
            v == value
        }
        Entry::List(sub) => all_eq_value(sub, value, checked),
    }
}

/// Keyed co-walk of two lists at the same nesting level
///
/// A key present on one side only compares that side's subtree against the
/// other side's default value.
fn eq_lists<T: Element>(
    left: &List<Entry<T>>,
    right: &List<Entry<T>>,
    left_default: &T,
    right_default: &T,
    checked: &mut usize,
) -> bool {
    let mut li = left.iter().peekable();
    let mut ri = right.iter().peekable();
    loop {
        match (li.peek().copied(), ri.peek().copied()) {
            (None, None) => return true,
            (Some((_, le)), None) => {
                if !entry_eq_value(le, right_default, checked) {
                    return false;
                }
                li.next();
            }
            (None, Some((_, re))) => {
                if !entry_eq_value(re, left_default, checked) {
                    return false;
                }
                ri.next();
            }
            (Some((lk, le)), Some((rk, re))) => {
                if lk < rk {
                    if !entry_eq_value(le, right_default, checked) {
                        return false;
                    }
                    li.next();
                } else if rk < lk {
                    if !entry_eq_value(re, left_default, checked) {
                        return false;
                    }
                    ri.next();
                } else {
                    let equal = match (le, re) {
                        (Entry::Value(lv), Entry::Value(rv)) => {
                            *checked += 1;
                            lv == rv
                        }
                        (Entry::List(ls), Entry::List(rs)) => {
                            eq_lists(ls, rs, left_default, right_default, checked)
                        }
                        _ => false,
                    };
                    if !equal {
                        return false;
                    }
                    li.next();
                    ri.next();
                }
            }
        }
    }
}
