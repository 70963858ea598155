use std::ops::{Div, Mul};

use num_traits::{Float, One, PrimInt};

use crate::integer::SignAbs;

/// Accumulates values according to the binary representation of `binary`.
///
/// For each bit of `binary`, from lower to higher, applies `operation` to
/// the accumulated state. As an example, when the operation is addition of
/// the bit, this becomes a popcount; [`pow`] uses it to drive
/// square-and-multiply.
pub fn binary_accumulate<T, U, F>(binary: T, initial_value: U, mut operation: F) -> U
where
    T: PrimInt,
    F: FnMut(bool, &mut U),
{
    let two = T::one() + T::one();
    let mut current = binary;
    let mut result = initial_value;
    while !current.is_zero() {
        let bit = !(current % two).is_zero();
        current = current / two;
        operation(bit, &mut result);
    }
    result
}

/// Computes `base` raised to an integer `exponent` with O(log |exponent|)
/// multiplications.
///
/// A negative exponent returns the multiplicative inverse of the result,
/// computed as `1 / result` in the base ring. For plain integer types this
/// is the ordinary division operator and is exact only when the result
/// divides one; in a ring with inverses, such as the modular types, it is
/// the true inverse.
pub fn pow<T, E>(base: T, exponent: E) -> T
where
    T: Clone + One + Mul<Output = T> + Div<Output = T>,
    E: PrimInt + SignAbs<UnsignedT: PrimInt>,
{
    let negative = exponent < E::zero();

    // At the n-th bit of the exponent, `state.1` is base^(2^n) and
    // `state.0` is the answer for the first n bits.
    let state = binary_accumulate(
        SignAbs::unsigned_abs(exponent),
        (T::one(), base),
        |bit, state: &mut (T, T)| {
            if bit {
                state.0 = state.0.clone() * state.1.clone();
            }
            state.1 = state.1.clone() * state.1.clone();
        },
    );

    if negative {
        T::one() / state.0
    } else {
        state.0
    }
}

/// Computes `base` raised to a non-integer `exponent`.
///
/// Delegates to the platform floating-point power function.
#[inline]
pub fn powf<F: Float>(base: F, exponent: F) -> F {
    base.powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_accumulate_popcount() {
        let count = binary_accumulate(0b0110_1011u32, 0u32, |bit, acc| {
            if bit {
                *acc += 1;
            }
        });
        assert_eq!(count, 0b0110_1011u32.count_ones());
    }

    #[test]
    fn test_pow_matches_repeated_multiplication() {
        for base in 0..=10i64 {
            let mut expected = 1i64;
            for exponent in 0..=15u32 {
                assert_eq!(pow(base, exponent), expected);
                expected *= base;
            }
        }
    }

    #[test]
    fn test_pow_zero_exponent() {
        assert_eq!(pow(0i32, 0u32), 1);
        assert_eq!(pow(7u64, 0u64), 1);
    }

    #[test]
    fn test_pow_negative_exponent_float() {
        let value = pow(2.0f64, -3i32);
        assert!((value - 0.125).abs() < f64::EPSILON);
    }

    #[test]
    fn test_powf() {
        assert_eq!(powf(2.0f64, 0.5), 2.0f64.powf(0.5));
        assert_eq!(powf(1.5f32, -2.25), 1.5f32.powf(-2.25));
    }
}
