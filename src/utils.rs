//! Shared validation helpers for values crossing the public boundary.

use num_traits::{PrimInt, ToPrimitive};
use std::fmt::Display;

use crate::error::{RadixPackError, Result};

/// Converts any primitive integer into a byte value, failing with
/// `ValueOutOfRange` when it lies outside [0, 255].
///
/// `what` names the offending parameter in the error message.
pub fn checked_byte<T>(value: T, what: &'static str) -> Result<u8>
where
    T: PrimInt + Display,
{
    value.to_u8().ok_or_else(|| RadixPackError::ValueOutOfRange {
        what,
        value: value.to_string(),
    })
}

/// Validates the bounds of an initial window and returns them as bytes.
pub fn checked_bounds<T>(min: T, max: T) -> Result<(u8, u8)>
where
    T: PrimInt + Display,
{
    let min = checked_byte(min, "Parameter min")?;
    let max = checked_byte(max, "Parameter max")?;
    if min >= max {
        return Err(RadixPackError::InvalidBounds { min, max });
    }
    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_byte_accepts_full_range() {
        assert_eq!(checked_byte(0i32, "byte").unwrap(), 0);
        assert_eq!(checked_byte(255u64, "byte").unwrap(), 255);
    }

    #[test]
    fn test_checked_byte_rejects_out_of_range() {
        let err = checked_byte(-1i16, "Parameter byte").unwrap_err();
        assert!(matches!(err, RadixPackError::ValueOutOfRange { value, .. } if value == "-1"));
        assert!(checked_byte(256u32, "Parameter byte").is_err());
    }

    #[test]
    fn test_checked_bounds() {
        assert_eq!(checked_bounds(32, 226).unwrap(), (32, 226));
        assert!(matches!(
            checked_bounds(7, 7),
            Err(RadixPackError::InvalidBounds { min: 7, max: 7 })
        ));
        assert!(matches!(
            checked_bounds(9, 3),
            Err(RadixPackError::InvalidBounds { .. })
        ));
        assert!(matches!(
            checked_bounds(0, 1000),
            Err(RadixPackError::ValueOutOfRange { .. })
        ));
    }
}
