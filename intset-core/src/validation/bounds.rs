//! Word index bounds validation
//!
//! Mutations that must not grow storage (such as removal) validate their
//! word index here before any write happens.

use crate::IntSetError;

/// Validate that `word_index` addresses an existing word
///
/// Fails with [`IntSetError::OutOfDomain`] when the index is at or past
/// `word_len`.
#[inline]
pub const fn check_word_in_bounds(word_index: usize, word_len: usize) -> Result<(), IntSetError> {
    if word_index >= word_len {
        return Err(IntSetError::OutOfDomain);
    }
    Ok(())
}

/// Compute the word length needed so that `word_index` exists
///
/// Returns `None` when the storage is already long enough. Overflow cannot
/// happen for a `usize` word index derived from a bit index, but it is
/// still reported as [`IntSetError::OutOfDomain`].
#[inline]
pub const fn grown_len(word_index: usize, word_len: usize) -> Result<Option<usize>, IntSetError> {
    if word_index < word_len {
        return Ok(None);
    }
    match word_index.checked_add(1) {
        Some(len) => Ok(Some(len)),
        None => Err(IntSetError::OutOfDomain),
    }
}
