//! Validation utilities for integer sets
//!
//! Pure functions with no allocation: bounds checks on word indices and
//! parsing of the `{n1 n2 ...}` text form.

pub mod bounds;
pub mod parsing;

pub use bounds::{check_word_in_bounds, grown_len};
pub use parsing::{parse_members, parse_usize};
