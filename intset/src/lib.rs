//! intset - Word-Packed Integer Sets
//!
//! This library provides a compact set of small non-negative integers,
//! stored one bit per possible member in a growable vector of 64-bit words.
//! For dense-ish ranges it is smaller and faster than a general hash set,
//! and the set-algebra operators work on whole words at a time.
//!
//! ## Architecture
//!
//! - **intset-core**: `no_std` word layout, error type, traits, and the
//!   `IntSet` structure
//! - **intset**: std integration with hash-set interop and JSON snapshots
//!
//! ## Quick Start
//!
//! ```rust
//! use intset::IntSet;
//!
//! fn example() -> intset::Result<()> {
//!     let mut a = IntSet::new();
//!     a.add_all([1, 5, 9])?;
//!
//!     let b: IntSet = "{5 9 10}".parse()?;
//!     a.union_with(&b)?;
//!     assert_eq!(a.to_string(), "{1 5 9 10}");
//!
//!     assert_eq!(a.has(-1), Err(intset::IntSetError::OutOfDomain));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **serde** (default): JSON snapshots and `Serialize`/`Deserialize` for
//!   `IntSet`

// Re-export core abstractions
pub use intset_core::{
    // Core structure
    IntSet, Iter,
    // Traits
    Member, SetAlgebra, WordStorage,
    // Word layout
    Word, WORD_BITS,
    // Error handling
    ErrorCategory, IntSetError, Result,
};

// Implementation modules
pub mod interop;
#[cfg(feature = "serde")]
pub mod snapshot;

// Public exports
pub use interop::{from_btree_set, from_hash_set, to_btree_set, to_hash_set};

#[cfg(feature = "serde")]
pub use snapshot::{SetSnapshot, SnapshotError};
