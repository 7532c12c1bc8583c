//! Word layout for packed membership bits
//!
//! An integer `n` lives at bit `n % WORD_BITS` of word `n / WORD_BITS`.
//! The width is fixed at 64 bits on every target so that the word storage
//! and the rendered form of a set never depend on the host.

/// Unit of packed membership bits
pub type Word = u64;

/// Number of bits in a [`Word`]
pub const WORD_BITS: usize = Word::BITS as usize;

/// Number of bytes in a [`Word`]
pub const WORD_BYTES: usize = core::mem::size_of::<Word>();

/// Split a bit index into its word index and the single-bit mask within that word
#[inline]
pub const fn word_index_and_mask(index: usize) -> (usize, Word) {
    let word_index = index / WORD_BITS;
    let mask = 1 << (index % WORD_BITS);
    (word_index, mask)
}

/// Number of words needed to hold every bit index below `bits`
#[inline]
pub const fn words_for_bits(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Bit index of the lowest bit of word `word_index`
#[inline]
pub const fn word_base(word_index: usize) -> usize {
    word_index * WORD_BITS
}
