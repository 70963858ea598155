//! Defines some traits and helpers for primitive integers.

mod bits;
mod cast;
mod sign;

pub use bits::Bits;
pub use cast::checked_cast;
pub use sign::SignAbs;
