//! Sorted singly-linked list primitive: unique ascending keys, owned values
//!
//! `List` is the building block of the recursive storage. Each node carries
//! an unsigned coordinate key and an owned payload; traversal along `next`
//! always yields strictly ascending keys. Ordered construction paths append
//! through an [`Appender`] cursor for O(1) insertion per element instead of
//! re-scanning from the head.

use std::fmt;
use std::mem;

type Link<V> = Option<Box<Node<V>>>;

/// One (key, payload) entry in a [`List`]
struct Node<V> {
    key: usize,
    value: V,
    next: Link<V>,
}

/// Ordered, unique-key singly-linked sequence of nodes
///
/// Invariants: keys are strictly ascending along `next`; an empty list has
/// no head node. All mutating operations preserve these invariants.
pub struct List<V> {
    first: Link<V>,
}

impl<V> List<V> {
    /// Create an empty list
    pub fn new() -> Self {
        Self { first: None }
    }

    /// Returns true if the list has no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Number of nodes in the list. O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Find the value stored under `key`, if any
    ///
    /// Linear scan; stops early at the first node whose key exceeds `key`,
    /// since the keys are sorted.
    pub fn find(&self, key: usize) -> Option<&V> {
        let mut curr = self.first.as_deref();
        while let Some(node) = curr {
            if node.key == key {
                return Some(&node.value);
            }
            if node.key > key {
                return None;
            }
            curr = node.next.as_deref();
        }
        None
    }

    /// Mutable variant of [`find`](Self::find)
    pub fn find_mut(&mut self, key: usize) -> Option<&mut V> {
        let mut curr = self.first.as_deref_mut();
        while let Some(node) = curr {
            if node.key == key {
                return Some(&mut node.value);
            }
            if node.key > key {
                return None;
            }
            curr = node.next.as_deref_mut();
        }
        None
    }

    /// Insert `value` under `key` at its ordered position
    ///
    /// If a node with `key` already exists its value is replaced in place and
    /// the previous value is returned, so the caller decides what happens to
    /// the overwritten payload.
    pub fn insert(&mut self, key: usize, value: V) -> Option<V> {
        let mut link = &mut self.first;
        loop {
            match link.take() {
                None => {
                    *link = Some(Box::new(Node {
                        key,
                        value,
                        next: None,
                    }));
                    return None;
                }
                Some(mut node) if node.key == key => {
                    let prev = mem::replace(&mut node.value, value);
                    *link = Some(node);
                    return Some(prev);
                }
                Some(node) if node.key > key => {
                    *link = Some(Box::new(Node {
                        key,
                        value,
                        next: Some(node),
                    }));
                    return None;
                }
                Some(node) => {
                    // node.key < key: reattach and keep scanning.
                    link = &mut link.insert(node).next;
                }
            }
        }
    }

    /// Look up `key`, inserting `default()` at its ordered position when absent
    pub fn find_or_insert_with(&mut self, key: usize, default: impl FnOnce() -> V) -> &mut V {
        let mut link = &mut self.first;
        loop {
            match link.take() {
                Some(node) if node.key == key => {
                    return &mut link.insert(node).value;
                }
                Some(node) if node.key < key => {
                    link = &mut link.insert(node).next;
                }
                next => {
                    // Hit the tail or the first larger key: splice in here.
                    let node = Box::new(Node {
                        key,
                        value: default(),
                        next,
                    });
                    return &mut link.insert(node).value;
                }
            }
        }
    }

    /// Unlink the node with `key` and return its payload
    ///
    /// Returns `None` without side effects if no such key exists.
    pub fn remove(&mut self, key: usize) -> Option<V> {
        let mut link = &mut self.first;
        loop {
            match link.take() {
                None => return None,
                Some(node) if node.key == key => {
                    let node = *node;
                    *link = node.next;
                    return Some(node.value);
                }
                Some(node) if node.key > key => {
                    *link = Some(node);
                    return None;
                }
                Some(node) => {
                    link = &mut link.insert(node).next;
                }
            }
        }
    }

    /// Append-only cursor positioned at the current tail
    ///
    /// Bulk construction over already-sorted input goes through the returned
    /// [`Appender`]; each push is O(1).
    pub fn appender(&mut self) -> Appender<'_, V> {
        let mut last_key = None;
        let mut link = &mut self.first;
        while let Some(node) = link {
            last_key = Some(node.key);
            link = &mut node.next;
        }
        Appender { link, last_key }
    }

    /// Iterate over `(key, &value)` pairs in ascending key order
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            next: self.first.as_deref(),
        }
    }
}

impl<V> Default for List<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink node by node so dropping a long row does not recurse along `next`.
impl<V> Drop for List<V> {
    fn drop(&mut self) {
        let mut curr = self.first.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

// Clone iteratively for the same reason; a derived clone would recurse
// through the whole chain.
impl<V: Clone> Clone for List<V> {
    fn clone(&self) -> Self {
        let mut out = List::new();
        let mut tail = out.appender();
        for (key, value) in self.iter() {
            tail = tail.push(key, value.clone());
        }
        out
    }
}

impl<V: fmt::Debug> fmt::Debug for List<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// O(1) append cursor over a [`List`]
///
/// The caller guarantees pushed keys are strictly greater than every key
/// already in the list; the ordering invariant is asserted in debug builds
/// rather than re-derived by scanning.
pub struct Appender<'a, V> {
    link: &'a mut Link<V>,
    last_key: Option<usize>,
}

impl<'a, V> Appender<'a, V> {
    /// Append a node at the tail, returning the advanced cursor
    pub fn push(self, key: usize, value: V) -> Self {
        debug_assert!(self.link.is_none(), "appender must point at the tail");
        debug_assert!(
            self.last_key.map_or(true, |k| k < key),
            "appender keys must be strictly ascending"
        );
        let Appender { link, .. } = self;
        let node = link.insert(Box::new(Node {
            key,
            value,
            next: None,
        }));
        Appender {
            link: &mut node.next,
            last_key: Some(key),
        }
    }
}

/// Iterator over `(key, &value)` pairs of a [`List`]
pub struct Iter<'a, V> {
    next: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (usize, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some((node.key, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<V>(list: &List<V>) -> Vec<usize> {
        list.iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_insert_keeps_keys_sorted() {
        let mut list = List::new();
        for key in [5, 1, 9, 3, 7] {
            assert_eq!(list.insert(key, key * 10), None);
        }
        assert_eq!(keys(&list), vec![1, 3, 5, 7, 9]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_insert_replaces_and_returns_previous() {
        let mut list = List::new();
        list.insert(4, "a");
        list.insert(2, "b");
        assert_eq!(list.insert(4, "c"), Some("a"));
        assert_eq!(list.find(4), Some(&"c"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_find_misses() {
        let mut list = List::new();
        list.insert(2, ());
        list.insert(6, ());
        assert!(list.find(0).is_none());
        assert!(list.find(4).is_none());
        assert!(list.find(9).is_none());
        assert!(list.find(2).is_some());
    }

    #[test]
    fn test_find_mut() {
        let mut list = List::new();
        list.insert(3, 30);
        *list.find_mut(3).unwrap() = 31;
        assert_eq!(list.find(3), Some(&31));
        assert!(list.find_mut(5).is_none());
    }

    #[test]
    fn test_remove_head_middle_tail() {
        let mut list = List::new();
        for key in 0..5 {
            list.insert(key, key);
        }
        assert_eq!(list.remove(0), Some(0));
        assert_eq!(list.remove(2), Some(2));
        assert_eq!(list.remove(4), Some(4));
        assert_eq!(list.remove(7), None);
        assert_eq!(keys(&list), vec![1, 3]);
    }

    #[test]
    fn test_remove_until_empty() {
        let mut list = List::new();
        list.insert(1, 'x');
        assert_eq!(list.remove(1), Some('x'));
        assert!(list.is_empty());
        assert_eq!(list.remove(1), None);
    }

    #[test]
    fn test_find_or_insert_with() {
        let mut list: List<Vec<i32>> = List::new();
        list.find_or_insert_with(3, Vec::new).push(1);
        list.find_or_insert_with(1, Vec::new).push(2);
        list.find_or_insert_with(3, Vec::new).push(3);
        assert_eq!(keys(&list), vec![1, 3]);
        assert_eq!(list.find(3), Some(&vec![1, 3]));
    }

    #[test]
    fn test_appender_on_fresh_and_non_empty_list() {
        let mut list = List::new();
        let mut tail = list.appender();
        for key in 0..4 {
            tail = tail.push(key, key);
        }
        assert_eq!(keys(&list), vec![0, 1, 2, 3]);

        let mut tail = list.appender();
        tail = tail.push(10, 10);
        let _ = tail.push(11, 11);
        assert_eq!(keys(&list), vec![0, 1, 2, 3, 10, 11]);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut list = List::new();
        list.insert(1, 100);
        list.insert(2, 200);
        let mut copy = list.clone();
        copy.insert(1, 101);
        assert_eq!(list.find(1), Some(&100));
        assert_eq!(copy.find(1), Some(&101));
    }

    #[test]
    fn test_long_list_drop_does_not_overflow() {
        let mut list = List::new();
        let mut tail = list.appender();
        for key in 0..200_000 {
            tail = tail.push(key, key);
        }
        drop(list);
    }
}
