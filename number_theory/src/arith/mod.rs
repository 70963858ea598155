//! Arithmetic algorithms: greatest common divisors with Bézout
//! coefficients, binary exponentiation and integer roots.

mod gcd;
mod pow;
mod root;

pub use gcd::Exgcd;
pub use pow::{binary_accumulate, pow, powf};
pub use root::Iroot;
