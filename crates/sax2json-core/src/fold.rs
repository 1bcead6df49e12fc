//! Sibling folding: repeated keys become arrays.
//!
//! XML has no array syntax; repetition is expressed by siblings sharing a
//! name. [`fold`] is the single place where a second arrival under an existing
//! key turns into an array, so an [`Object`] never silently overwrites a key.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::node::{Node, Object};

/// Add `value` under `key`, folding repeated keys into an array.
///
/// - absent key: inserted as-is
/// - key holding a non-array: replaced by `[old, value]`; the key is removed
///   and re-inserted, so it moves to the end of the object's key order
/// - key holding an array: `value` is appended in place
///
/// Promotion is one-way. Once a key holds an array it keeps receiving
/// appends, so element order always matches arrival order.
///
/// # Example
/// ```
/// use sax2json_core::{fold, Node, Object};
/// let mut object = Object::new();
/// fold(&mut object, "item".into(), Node::from("a"));
/// fold(&mut object, "item".into(), Node::from("b"));
/// assert_eq!(
///     object.get("item"),
///     Some(&Node::Array(vec![Node::from("a"), Node::from("b")]))
/// );
/// ```
pub fn fold(container: &mut Object, key: String, value: Node) {
    if let Some(Node::Array(items)) = container.get_mut(&key) {
        items.push(value);
        return;
    }
    match container.remove(&key) {
        Some(existing) => {
            container.insert(key, Node::Array(vec![existing, value]));
        }
        None => {
            container.insert(key, value);
        }
    }
}

/// Build an object by folding `(key, value)` pairs in order.
///
/// Produces the same object as calling [`fold`] once per pair, without
/// shifting entries on every promotion. Each key carries the arrival index
/// of its last move (insertion or promotion) and keys are ordered by that
/// index at the end.
pub fn fold_all<I>(pairs: I) -> Object
where
    I: IntoIterator<Item = (String, Node)>,
{
    let mut slots: IndexMap<String, (usize, Node)> = IndexMap::new();
    for (arrival, (key, value)) in pairs.into_iter().enumerate() {
        match slots.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert((arrival, value));
            }
            Entry::Occupied(mut entry) => {
                let (moved_at, node) = entry.get_mut();
                if let Node::Array(items) = node {
                    items.push(value);
                } else {
                    let existing = std::mem::replace(node, Node::Null);
                    *node = Node::Array(vec![existing, value]);
                    *moved_at = arrival;
                }
            }
        }
    }

    slots.sort_by(|_, (a, _), _, (b, _)| a.cmp(b));
    slots
        .into_iter()
        .map(|(key, (_, node))| (key, node))
        .collect()
}
