#![no_std]

//! intset-core - Word-Packed Integer Set
//!
//! This crate provides a growable set of small non-negative integers stored
//! as a bit vector of 64-bit words, together with the word layout, error
//! type, and traits it is built on.
//!
//! Membership, insertion and removal are O(1); the set-algebra operators
//! work a word at a time. The crate is `no_std`; the [`IntSet`] structure
//! itself needs the `alloc` feature (on by default).

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod iter;
pub mod traits;
pub mod validation;
pub mod word;

#[cfg(feature = "alloc")]
pub mod intset;

pub use error::*;
pub use iter::Iter;
pub use traits::*;
pub use validation::{check_word_in_bounds, parse_members};
pub use word::{Word, WORD_BITS};

#[cfg(feature = "alloc")]
pub use intset::IntSet;
