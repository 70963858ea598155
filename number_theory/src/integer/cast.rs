use num_traits::{NumCast, ToPrimitive};

use crate::NumberTheoryError;

/// Checked integer-to-integer conversion.
///
/// Returns [`NumberTheoryError::CastOverflow`] when `value` does not fit
/// in the target type.
#[inline]
pub fn checked_cast<T: ToPrimitive, U: NumCast>(value: T) -> Result<U, NumberTheoryError> {
    U::from(value).ok_or(NumberTheoryError::CastOverflow)
}
