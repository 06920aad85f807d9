//! List-of-lists sparse storage
//!
//! A [`ListStorage`] keeps one sorted singly-linked [`List`](crate::list::List)
//! per materialized slice of each dimension: nodes at every level but the
//! innermost hold nested lists, innermost nodes hold scalar payloads, and
//! every coordinate never written implicitly holds the storage's shared
//! default value. Mutation keeps the structure minimal: removing the last
//! entry of a nested list cascades upward and unlinks the emptied lists.

mod conversion;
mod core;
mod equality;

pub use self::core::ListStorage;
pub(crate) use self::core::Entry;
