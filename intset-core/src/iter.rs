//! Ascending iteration over packed membership bits

use core::iter::FusedIterator;
use core::slice;

use crate::word::{Word, WORD_BITS};

/// Iterator over the members of a set, smallest first
///
/// Scans words low to high and, within a word, pops the lowest set bit
/// until the word is exhausted.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// Words not yet loaded
    words: slice::Iter<'a, Word>,
    /// Remaining bits of the current word
    word: Word,
    /// Bit index of bit 0 of the current word
    base: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(words: &'a [Word]) -> Self {
        let mut words = words.iter();
        let word = words.next().copied().unwrap_or(0);
        Self {
            words,
            word,
            base: 0,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        while self.word == 0 {
            self.word = *self.words.next()?;
            self.base += WORD_BITS;
        }
        let bit = self.word.trailing_zeros() as usize;
        // clear lowest set bit
        self.word &= self.word - 1;
        Some(self.base + bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self
            .words
            .len()
            .saturating_mul(WORD_BITS)
            .saturating_add(self.word.count_ones() as usize);
        (0, Some(upper))
    }
}

impl FusedIterator for Iter<'_> {}
