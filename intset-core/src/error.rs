//! Error types for integer set operations

/// Errors that can occur during integer set operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntSetError {
    /// Value is negative, does not fit a bit index, or lies beyond storage
    OutOfDomain,
    /// Word storage could not be grown
    AllocationFailure,
    /// Text is not of the form `{n1 n2 ...}`
    InvalidFormat,
}

/// Broad classification of an [`IntSetError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller passed a value outside the set's domain
    Domain,
    /// The environment ran out of memory
    Resource,
    /// Malformed textual input
    Parse,
}

impl IntSetError {
    /// Get the category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            IntSetError::OutOfDomain => ErrorCategory::Domain,
            IntSetError::AllocationFailure => ErrorCategory::Resource,
            IntSetError::InvalidFormat => ErrorCategory::Parse,
        }
    }
}

impl core::fmt::Display for IntSetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            IntSetError::OutOfDomain => "Value outside the set domain",
            IntSetError::AllocationFailure => "Failed to allocate word storage",
            IntSetError::InvalidFormat => "Invalid set literal",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for IntSetError {}

/// Result type for integer set operations
pub type Result<T> = core::result::Result<T, IntSetError>;
