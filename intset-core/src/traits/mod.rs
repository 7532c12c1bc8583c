//! Abstract interfaces for word-packed integer sets
//!
//! These traits describe the element domain, the in-place set-algebra
//! contract and read access to word storage. `IntSet` implements all of
//! them; the traits themselves carry no storage.

pub mod algebra;
pub mod member;
pub mod storage;

pub use algebra::SetAlgebra;
pub use member::Member;
pub use storage::WordStorage;
