//! Read access to the words backing a set

use crate::word::{Word, WORD_BITS};

/// Trait for types that expose their membership bits as a word slice
pub trait WordStorage {
    /// Get the backing words, lowest word first
    fn words(&self) -> &[Word];

    /// Get the number of backing words
    fn word_len(&self) -> usize {
        self.words().len()
    }

    /// Get the number of bit positions the current storage can address
    fn bit_capacity(&self) -> usize {
        self.word_len() * WORD_BITS
    }

    /// View the backing words as raw bytes in native byte order
    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.words())
    }
}

impl WordStorage for [Word] {
    fn words(&self) -> &[Word] {
        self
    }
}
