//! In-place set algebra over word-packed sets
//!
//! Every operator rewrites the receiver as `self OP other`, walking the two
//! word sequences index by index. Work is proportional to the number of
//! words, not the number of members.

use crate::Result;

/// Trait for sets that support the four binary set-algebra operators
pub trait SetAlgebra<Rhs: ?Sized = Self> {
    /// Set `self` to `self ∪ other`
    ///
    /// May grow the receiver up to the length of `other`, so it can fail
    /// with [`crate::IntSetError::AllocationFailure`]. On failure the
    /// receiver is unchanged.
    fn union_with(&mut self, other: &Rhs) -> Result<()>;

    /// Set `self` to `self ∩ other`
    ///
    /// Never grows the receiver.
    fn intersect_with(&mut self, other: &Rhs);

    /// Set `self` to `self \ other`
    ///
    /// Never grows the receiver.
    fn difference_with(&mut self, other: &Rhs);

    /// Set `self` to `self △ other`
    ///
    /// May grow the receiver like [`SetAlgebra::union_with`].
    fn symmetric_difference_with(&mut self, other: &Rhs) -> Result<()>;
}
