//! This module defines the errors that may occur during
//! the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberTheoryError {
    /// Error that occurs when the given value has no inverse element with the given modulus.
    #[error("Value {value} has no inverse element with the modulus {modulus}!")]
    NoInverse {
        /// The value being inverted.
        value: String,
        /// The modulus.
        modulus: String,
    },
    /// Error that occurs when asking for the minimum prime factor of 0, 1 or -1.
    #[error("Minimum prime factor does not exist for {value}!")]
    NoPrimeFactor {
        /// The queried value.
        value: String,
    },
    /// Error that occurs when taking an even root of a negative number.
    #[error("No real {degree}th root exists for the negative value {value}!")]
    NoRealRoot {
        /// The radicand.
        value: String,
        /// The root degree.
        degree: i32,
    },
    /// Error that occurs when the root degree is zero or negative.
    #[error("The root degree must be positive, got {degree}!")]
    InvalidRootDegree {
        /// The root degree.
        degree: i32,
    },
    /// Error that occurs when a query exceeds a sieve's limit.
    #[error("The number {value} exceeds the sieve limit {limit}!")]
    OutOfRange {
        /// The queried value.
        value: String,
        /// The sieve limit.
        limit: String,
    },
    /// Error that occurs when sieving would overflow the product accumulator.
    #[error(
        "Sieving up to {limit} would overflow the {accumulator_bits}-bit product accumulator. \
         Please use a smaller limit."
    )]
    SieveOverflow {
        /// The requested limit.
        limit: String,
        /// Width of the accumulator used for `prime * num` products.
        accumulator_bits: u32,
    },
    /// Error that occurs when a checked numeric conversion loses information.
    #[error("Out of range integral type conversion attempted.")]
    CastOverflow,
}
