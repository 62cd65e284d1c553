//! Text-to-value parsing for store accessors.

use core::num::IntErrorKind;

use crate::error::ValidationError;

/// Parse a single decimal integer.
///
/// Surrounding whitespace (including the trailing newline `echo` appends)
/// is ignored; anything else after the number is not.  Integers too large
/// for `i64` are syntactically fine but out of domain.
pub fn parse_int(text: &str) -> Result<i64, ValidationError> {
    text.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValidationError::OutOfDomain,
        _ => ValidationError::NotParsable,
    })
}

/// Parse a `0`/`1` switch value.
pub fn parse_switch(text: &str) -> Result<bool, ValidationError> {
    match parse_int(text)? {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(ValidationError::OutOfDomain),
    }
}
