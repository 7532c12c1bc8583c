//! Conversions between integer sets and general-purpose hash and tree sets
//!
//! These are the collections an `IntSet` usually replaces, so moving data
//! in and out of them is the common migration path.

use std::collections::BTreeSet;

use hashbrown::HashSet;
use intset_core::{IntSet, Member, Result};

/// Collect the members of `set` into a hash set
pub fn to_hash_set(set: &IntSet) -> HashSet<usize> {
    let mut out = HashSet::with_capacity(set.len());
    out.extend(set.iter());
    out
}

/// Build a set from the values of a hash set
///
/// Fails with [`intset_core::IntSetError::OutOfDomain`] if any value is
/// negative.
pub fn from_hash_set<T: Member, S>(hash_set: &HashSet<T, S>) -> Result<IntSet> {
    IntSet::from_elements(hash_set.iter().copied())
}

/// Collect the members of `set` into an ordered tree set
pub fn to_btree_set(set: &IntSet) -> BTreeSet<usize> {
    set.iter().collect()
}

/// Build a set from the values of a tree set
///
/// Values are inserted largest first so storage is grown exactly once.
pub fn from_btree_set<T: Member>(tree_set: &BTreeSet<T>) -> Result<IntSet> {
    IntSet::from_elements(tree_set.iter().rev().copied())
}
