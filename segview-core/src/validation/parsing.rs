//! Parsing utilities for numeric command-line input
//!
//! Parsing is strict: anything that is not a plain decimal number is
//! rejected rather than silently read as zero.

use crate::ViewError;

/// Parse a non-negative count such as a loop or row count
///
/// Leading and trailing whitespace is ignored. Empty input, signs and any
/// non-digit character are rejected with `InvalidArgument`; values that do
/// not fit in `usize` fail with `SizeOverflow`.
pub fn parse_count(input: &str) -> Result<usize, ViewError> {
    let digits = input.trim();

    if digits.is_empty() {
        return Err(ViewError::InvalidArgument("expected a number, found nothing"));
    }

    let mut result: usize = 0;

    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return Err(ViewError::InvalidArgument(
                "expected a non-negative decimal integer",
            ));
        }

        let digit = (byte - b'0') as usize;

        result = result
            .checked_mul(10)
            .and_then(|value| value.checked_add(digit))
            .ok_or(ViewError::SizeOverflow)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("0"), Ok(0));
        assert_eq!(parse_count("10"), Ok(10));
        assert_eq!(parse_count(" 250 "), Ok(250));
        assert_eq!(parse_count("007"), Ok(7));

        // Invalid cases
        assert!(matches!(parse_count(""), Err(ViewError::InvalidArgument(_))));
        assert!(matches!(parse_count("   "), Err(ViewError::InvalidArgument(_))));
        assert!(matches!(parse_count("abc"), Err(ViewError::InvalidArgument(_))));
        assert!(matches!(parse_count("12a"), Err(ViewError::InvalidArgument(_))));
        assert!(matches!(parse_count("-3"), Err(ViewError::InvalidArgument(_))));
        assert!(matches!(parse_count("+3"), Err(ViewError::InvalidArgument(_))));
        assert!(matches!(parse_count("1.5"), Err(ViewError::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_count_overflow() {
        assert_eq!(parse_count("99999999999999999999999999"), Err(ViewError::SizeOverflow));
    }
}
