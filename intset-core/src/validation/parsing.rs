//! Parsing of the textual set form
//!
//! A set renders as `{n1 n2 ...}`: an opening brace, decimal members
//! separated by exactly one space, and a closing brace. The empty set is
//! `{}`. The parser accepts members in any order and tolerates duplicates,
//! but nothing else.

use crate::{IntSetError, Result};

/// Parse a set literal, calling `visit` for every member in textual order
///
/// Fails with [`IntSetError::InvalidFormat`] if the text does not follow the
/// rendering grammar and with [`IntSetError::OutOfDomain`] if a member does
/// not fit in a `usize`. Any error returned by `visit` is passed through.
pub fn parse_members<F>(text: &str, mut visit: F) -> Result<()>
where
    F: FnMut(usize) -> Result<()>,
{
    let inner = text
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or(IntSetError::InvalidFormat)?;

    if inner.is_empty() {
        return Ok(());
    }

    for token in inner.split(' ') {
        visit(parse_usize(token)?)?;
    }

    Ok(())
}

/// Parse a non-empty run of ASCII digits as a `usize`
pub fn parse_usize(s: &str) -> Result<usize> {
    if s.is_empty() {
        return Err(IntSetError::InvalidFormat);
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(IntSetError::InvalidFormat);
        }

        let digit = (byte - b'0') as usize;

        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(IntSetError::OutOfDomain)?;
    }

    Ok(result)
}
