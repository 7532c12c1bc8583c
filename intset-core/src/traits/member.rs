//! Element domain for integer sets
//!
//! Any primitive integer can be offered to a set. Values that are negative
//! or do not fit a `usize` bit index are rejected with
//! [`IntSetError::OutOfDomain`] before the set is touched.

use crate::{IntSetError, Result};

/// Trait for integer types that can address a bit in a set
pub trait Member: Copy {
    /// Convert to a bit index
    ///
    /// Fails with [`IntSetError::OutOfDomain`] for negative values and for
    /// values larger than `usize::MAX`.
    fn to_index(self) -> Result<usize>;
}

macro_rules! impl_member {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Member for $ty {
                #[inline]
                fn to_index(self) -> Result<usize> {
                    usize::try_from(self).map_err(|_| IntSetError::OutOfDomain)
                }
            }
        )*
    };
}

impl_member!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
