//! Growable word-packed set of non-negative integers
//!
//! Storage starts empty, grows on insertion by appending zero words, and
//! never shrinks on its own. Removal and clearing zero bits in place.

use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::iter::Iter;
use crate::traits::{Member, SetAlgebra, WordStorage};
use crate::validation::{check_word_in_bounds, grown_len, parse_members};
use crate::word::{word_base, word_index_and_mask, Word, WORD_BITS};
use crate::{IntSetError, Result};

/// Set of small non-negative integers packed into 64-bit words
///
/// Integer `n` is a member iff bit `n % 64` of word `n / 64` is set. Word
/// indices at or beyond the current storage length are implicitly empty.
/// The empty set owns no storage and is the [`Default`] value.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IntSet {
    /// Membership bits, lowest word first
    words: Vec<Word>,
}

impl IntSet {
    /// Create an empty set without allocating
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Create an empty set with room for `word_count` words
    ///
    /// Only capacity is reserved; the set still has zero words.
    pub fn with_word_capacity(word_count: usize) -> Result<Self> {
        let mut set = Self::new();
        set.reserve_words(word_count)?;
        Ok(set)
    }

    /// Create a set that adopts `words` as its storage
    pub fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Create a set holding every value of `xs`
    pub fn from_elements<I, T>(xs: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Member,
    {
        let mut set = Self::new();
        set.add_all(xs)?;
        Ok(set)
    }

    /// Report whether `x` is a member
    ///
    /// Reading never grows storage. Fails with [`IntSetError::OutOfDomain`]
    /// for negative `x`.
    #[inline]
    pub fn has<T: Member>(&self, x: T) -> Result<bool> {
        let (word_index, mask) = word_index_and_mask(x.to_index()?);
        Ok(self
            .words
            .get(word_index)
            .is_some_and(|word| word & mask != 0))
    }

    /// Insert `x`, growing storage as needed
    ///
    /// Fails with [`IntSetError::OutOfDomain`] for negative `x` and with
    /// [`IntSetError::AllocationFailure`] when storage cannot grow. The set
    /// is unchanged on failure.
    #[inline]
    pub fn add<T: Member>(&mut self, x: T) -> Result<()> {
        let (word_index, mask) = word_index_and_mask(x.to_index()?);
        self.grow_to(word_index)?;
        self.words[word_index] |= mask;
        Ok(())
    }

    /// Insert every value of `xs` in order
    ///
    /// Stops at the first failing value; values before it stay inserted.
    pub fn add_all<I, T>(&mut self, xs: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Member,
    {
        for x in xs {
            self.add(x)?;
        }
        Ok(())
    }

    /// Remove `x`
    ///
    /// `x` must address an existing word: removing a value past the end of
    /// storage fails with [`IntSetError::OutOfDomain`] and never grows the
    /// set. Removing an absent value inside storage is a no-op.
    #[inline]
    pub fn remove<T: Member>(&mut self, x: T) -> Result<()> {
        let (word_index, mask) = word_index_and_mask(x.to_index()?);
        check_word_in_bounds(word_index, self.words.len())?;
        self.words[word_index] &= !mask;
        Ok(())
    }

    /// Remove every member, keeping the storage length
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Count the members
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Is the set empty?
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Collect the members into a new ascending vector
    pub fn elements(&self) -> Vec<usize> {
        let mut elements = Vec::with_capacity(self.len());
        elements.extend(self.iter());
        elements
    }

    /// Iterate over the members in ascending order
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.words)
    }

    /// Get the smallest member
    pub fn min(&self) -> Option<usize> {
        self.iter().next()
    }

    /// Get the largest member
    pub fn max(&self) -> Option<usize> {
        let word_index = self.used_len().checked_sub(1)?;
        let word = self.words[word_index];
        Some(word_base(word_index) + (WORD_BITS - 1 - word.leading_zeros() as usize))
    }

    /// Make an independent copy with freshly allocated storage
    ///
    /// Fails with [`IntSetError::AllocationFailure`] instead of aborting when
    /// the copy cannot be allocated.
    pub fn copy(&self) -> Result<Self> {
        let mut words = Vec::new();
        words
            .try_reserve_exact(self.words.len())
            .map_err(|_| IntSetError::AllocationFailure)?;
        words.extend_from_slice(&self.words);
        Ok(Self { words })
    }

    /// Is every member of `self` also in `other`?
    pub fn is_subset(&self, other: &IntSet) -> bool {
        self.words
            .iter()
            .enumerate()
            .all(|(i, &a)| a & !other.word_at(i) == 0)
    }

    /// Is every member of `other` also in `self`?
    pub fn is_superset(&self, other: &IntSet) -> bool {
        other.is_subset(self)
    }

    /// Do `self` and `other` have no member in common?
    pub fn is_disjoint(&self, other: &IntSet) -> bool {
        self.words
            .iter()
            .zip(&other.words)
            .all(|(a, b)| a & b == 0)
    }

    /// Drop trailing all-zero words and release spare capacity
    pub fn shrink_to_fit(&mut self) {
        let used = self.used_len();
        if used < self.words.len() {
            log::debug!(
                "intset shrinking from {} to {} words",
                self.words.len(),
                used
            );
            self.words.truncate(used);
        }
        self.words.shrink_to_fit();
    }

    /// Sets `self = self | other`.
    pub fn union_with(&mut self, other: &IntSet) -> Result<()> {
        <Self as SetAlgebra>::union_with(self, other)
    }

    /// Sets `self = self & other`.
    pub fn intersect_with(&mut self, other: &IntSet) {
        <Self as SetAlgebra>::intersect_with(self, other)
    }

    /// Sets `self = self - other`.
    pub fn difference_with(&mut self, other: &IntSet) {
        <Self as SetAlgebra>::difference_with(self, other)
    }

    /// Sets `self = self ^ other`.
    pub fn symmetric_difference_with(&mut self, other: &IntSet) -> Result<()> {
        <Self as SetAlgebra>::symmetric_difference_with(self, other)
    }

    /// Word at `index`, or zero past the end of storage
    #[inline]
    fn word_at(&self, index: usize) -> Word {
        self.words.get(index).copied().unwrap_or(0)
    }

    /// Length of storage without trailing all-zero words
    fn used_len(&self) -> usize {
        self.words
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |i| i + 1)
    }

    fn reserve_words(&mut self, additional: usize) -> Result<()> {
        self.words
            .try_reserve(additional)
            .map_err(|_| IntSetError::AllocationFailure)
    }

    /// Append zero words until `word_index` exists
    fn grow_to(&mut self, word_index: usize) -> Result<()> {
        let old_len = self.words.len();
        if let Some(new_len) = grown_len(word_index, old_len)? {
            self.reserve_words(new_len - old_len)?;
            log::trace!("intset growing from {old_len} to {new_len} words");
            self.words.resize(new_len, 0);
        }
        Ok(())
    }

    /// Append the words of `other` that lie past the end of `self`
    fn extend_from_tail(&mut self, other: &IntSet) -> Result<()> {
        let old_len = self.words.len();
        if let Some(tail) = other.words.get(old_len..).filter(|t| !t.is_empty()) {
            self.reserve_words(tail.len())?;
            log::trace!(
                "intset growing from {old_len} to {} words",
                old_len + tail.len()
            );
            self.words.extend_from_slice(tail);
        }
        Ok(())
    }
}

impl SetAlgebra for IntSet {
    fn union_with(&mut self, other: &IntSet) -> Result<()> {
        // Reserve before touching any word so a failure leaves self intact
        let extra = other.words.len().saturating_sub(self.words.len());
        self.reserve_words(extra)?;
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a |= b;
        }
        self.extend_from_tail(other)
    }

    fn intersect_with(&mut self, other: &IntSet) {
        let common = self.words.len().min(other.words.len());
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a &= b;
        }
        // Nothing past the end of other can be in the intersection
        self.words[common..].fill(0);
    }

    fn difference_with(&mut self, other: &IntSet) {
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a &= !b;
        }
    }

    fn symmetric_difference_with(&mut self, other: &IntSet) -> Result<()> {
        let extra = other.words.len().saturating_sub(self.words.len());
        self.reserve_words(extra)?;
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a ^= b;
        }
        self.extend_from_tail(other)
    }
}

impl WordStorage for IntSet {
    fn words(&self) -> &[Word] {
        &self.words
    }
}

impl PartialEq for IntSet {
    /// Sets are equal when they hold the same members, whatever their
    /// storage length
    fn eq(&self, other: &Self) -> bool {
        let (short, long) = if self.words.len() <= other.words.len() {
            (&self.words, &other.words)
        } else {
            (&other.words, &self.words)
        };
        let (head, tail) = long.split_at(short.len());
        short.as_slice() == head && tail.iter().all(|&w| w == 0)
    }
}

impl Eq for IntSet {}

impl Hash for IntSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.words[..self.used_len()].hash(state);
    }
}

impl fmt::Display for IntSet {
    /// Renders as `{1 9 144}`, or `{}` when empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, n) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{n}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromStr for IntSet {
    type Err = IntSetError;

    /// Parse the rendered form `{n1 n2 ...}`
    fn from_str(s: &str) -> Result<Self> {
        let mut set = IntSet::new();
        parse_members(s, |n| set.add(n))?;
        Ok(set)
    }
}

impl<'a> IntoIterator for &'a IntSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn set(xs: &[usize]) -> IntSet {
        IntSet::from_elements(xs.iter().copied()).unwrap()
    }

    #[test]
    fn test_empty_set() {
        let s = IntSet::new();

        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
        assert_eq!(s.word_len(), 0);
        assert_eq!(s.has(0), Ok(false));
        assert_eq!(s.elements(), Vec::<usize>::new());
        assert_eq!(s.to_string(), "{}");
        assert_eq!(s, IntSet::default());
    }

    #[test]
    fn test_add_remove_clear_scenario() {
        let mut s = IntSet::new();
        s.add_all([1, 9, 144]).unwrap();
        assert_eq!(s.to_string(), "{1 9 144}");
        assert_eq!(s.len(), 3);

        s.add(9).unwrap();
        assert_eq!(s.len(), 3);

        s.remove(9).unwrap();
        assert_eq!(s.to_string(), "{1 144}");
        assert_eq!(s.has(9), Ok(false));

        s.clear();
        assert_eq!(s.to_string(), "{}");
        assert_eq!(s.len(), 0);
        // Clearing keeps storage
        assert_eq!(s.word_len(), 3);
    }

    #[test]
    fn test_with_word_capacity() {
        let mut s = IntSet::with_word_capacity(4).unwrap();
        assert_eq!(s.word_len(), 0);

        s.add(255).unwrap();
        assert_eq!(s.word_len(), 4);
        assert_eq!(
            IntSet::with_word_capacity(usize::MAX).map(|s| s.len()),
            Err(IntSetError::AllocationFailure)
        );
    }

    #[test]
    fn test_has_does_not_grow() {
        let s = set(&[3]);
        assert_eq!(s.has(1_000_000), Ok(false));
        assert_eq!(s.has(usize::MAX), Ok(false));
        assert_eq!(s.word_len(), 1);
    }

    #[test]
    fn test_add_grows_to_word() {
        let mut s = IntSet::new();
        s.add(64).unwrap();
        assert_eq!(s.word_len(), 2);
        assert_eq!(s.words(), &[0, 1]);

        s.add(63).unwrap();
        assert_eq!(s.word_len(), 2);
        assert_eq!(s.elements(), vec![63, 64]);
    }

    #[test]
    fn test_negative_values_rejected() {
        let mut s = set(&[1, 2]);

        assert_eq!(s.has(-1), Err(IntSetError::OutOfDomain));
        assert_eq!(s.add(-1), Err(IntSetError::OutOfDomain));
        assert_eq!(s.remove(-1i64), Err(IntSetError::OutOfDomain));
        assert_eq!(s.add_all([3, -4, 5]), Err(IntSetError::OutOfDomain));

        // 3 went in before the failure, 5 never did
        assert_eq!(s.to_string(), "{1 2 3}");
    }

    #[test]
    fn test_remove_past_storage_fails() {
        let mut s = set(&[1]);

        assert_eq!(s.remove(64), Err(IntSetError::OutOfDomain));
        assert_eq!(s.word_len(), 1);

        let mut empty = IntSet::new();
        assert_eq!(empty.remove(0), Err(IntSetError::OutOfDomain));
        assert_eq!(empty.word_len(), 0);

        // Absent but addressable is fine
        assert_eq!(s.remove(5), Ok(()));
        assert_eq!(s.to_string(), "{1}");
    }

    #[test]
    fn test_allocation_failure_leaves_set_unchanged() {
        let mut s = set(&[7]);
        assert_eq!(s.add(usize::MAX), Err(IntSetError::AllocationFailure));
        assert_eq!(s.word_len(), 1);
        assert_eq!(s.to_string(), "{7}");
    }

    #[test]
    fn test_set_algebra_scenario() {
        let a = set(&[1, 5, 9]);
        let b = set(&[5, 9, 10]);

        let mut s = a.clone();
        s.union_with(&b).unwrap();
        assert_eq!(s.to_string(), "{1 5 9 10}");

        let mut s = a.clone();
        s.intersect_with(&b);
        assert_eq!(s.to_string(), "{5 9}");

        let mut s = a.clone();
        s.difference_with(&b);
        assert_eq!(s.to_string(), "{1}");

        let mut s = a.clone();
        s.symmetric_difference_with(&b).unwrap();
        assert_eq!(s.to_string(), "{1 10}");
    }

    #[test]
    fn test_set_algebra_uneven_lengths() {
        let short = set(&[1, 2]);
        let long = set(&[2, 70, 200]);

        let mut s = short.clone();
        s.union_with(&long).unwrap();
        assert_eq!(s.to_string(), "{1 2 70 200}");
        assert_eq!(s.word_len(), 4);

        let mut s = short.clone();
        s.symmetric_difference_with(&long).unwrap();
        assert_eq!(s.to_string(), "{1 70 200}");
        assert_eq!(s.word_len(), 4);

        let mut s = long.clone();
        s.difference_with(&short);
        assert_eq!(s.to_string(), "{70 200}");
        assert_eq!(s.word_len(), 4);
    }

    #[test]
    fn test_intersect_clears_past_shorter_operand() {
        let mut s = set(&[1, 70, 200]);
        s.intersect_with(&set(&[1]));

        assert_eq!(s.to_string(), "{1}");
        assert_eq!(s.has(70), Ok(false));
        assert_eq!(s.has(200), Ok(false));
        // Storage is kept
        assert_eq!(s.word_len(), 4);

        let mut s = set(&[1, 70]);
        s.intersect_with(&IntSet::new());
        assert!(s.is_empty());
    }

    #[test]
    fn test_equality_ignores_trailing_zero_words() {
        let mut a = set(&[1, 200]);
        a.remove(200).unwrap();
        let b = set(&[1]);

        assert_ne!(a.word_len(), b.word_len());
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, set(&[2]));
        assert_ne!(set(&[1, 200]), b);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut original = set(&[1, 9, 144]);
        let mut copy = original.copy().unwrap();
        assert_eq!(copy, original);

        copy.add(500).unwrap();
        copy.remove(1).unwrap();
        assert_eq!(original.to_string(), "{1 9 144}");

        original.clear();
        assert_eq!(copy.to_string(), "{9 144 500}");
    }

    #[test]
    fn test_elements_ascending_regardless_of_order() {
        let s = IntSet::from_elements([144u32, 1, 300, 9, 1]).unwrap();
        assert_eq!(s.elements(), vec![1, 9, 144, 300]);
        assert_eq!(s.to_string(), "{1 9 144 300}");
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(IntSet::new().min(), None);
        assert_eq!(IntSet::new().max(), None);

        let mut s = set(&[9, 63, 64, 144]);
        assert_eq!(s.min(), Some(9));
        assert_eq!(s.max(), Some(144));

        s.remove(144).unwrap();
        assert_eq!(s.max(), Some(64));
    }

    #[test]
    fn test_relations() {
        let a = set(&[1, 5, 9]);
        let b = set(&[1, 5, 9, 300]);
        let c = set(&[2, 301]);

        assert!(a.is_subset(&b));
        assert!(!b.is_subset(&a));
        assert!(b.is_superset(&a));
        assert!(a.is_disjoint(&c));
        assert!(!b.is_disjoint(&set(&[300])));
        assert!(IntSet::new().is_subset(&a));
    }

    #[test]
    fn test_shrink_to_fit() {
        let mut s = set(&[1, 500]);
        s.remove(500).unwrap();
        assert_eq!(s.word_len(), 8);

        s.shrink_to_fit();
        assert_eq!(s.word_len(), 1);
        assert_eq!(s.to_string(), "{1}");

        s.clear();
        s.shrink_to_fit();
        assert_eq!(s.word_len(), 0);
    }

    #[test]
    fn test_parse_round_trip() {
        for text in ["{}", "{0}", "{1 9 144}", "{63 64 1000}"] {
            let s: IntSet = text.parse().unwrap();
            assert_eq!(s.to_string(), text);
        }

        let s: IntSet = "{144 1 9 9}".parse().unwrap();
        assert_eq!(s, set(&[1, 9, 144]));

        assert_eq!("{1, 2}".parse::<IntSet>(), Err(IntSetError::InvalidFormat));
        assert_eq!("[1 2]".parse::<IntSet>(), Err(IntSetError::InvalidFormat));
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(alloc::format!("{:?}", set(&[1, 9])), "{1, 9}");
    }

    #[test]
    fn test_word_bytes() {
        let s = set(&[0, 64]);
        assert_eq!(s.as_bytes().len(), 16);
        assert_eq!(IntSet::from_words(s.words().to_vec()), s);
    }
}
