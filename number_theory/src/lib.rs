#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! A small number-theory toolkit over fixed-width integers.
//!
//! Provides modular-ring value types with compile-time overflow checking,
//! the extended Euclidean algorithm with bounded Bézout coefficients,
//! binary exponentiation, integer nth roots, linear (Euler) prime sieving
//! with minimum-prime-factor factorization, and coprime-pair enumeration.
//!
//! Everything here is pure, synchronous computation. Constructed tables
//! such as [`EulerSieve`] are immutable after construction and safe to
//! query from multiple threads.

pub mod arith;
pub mod integer;
pub mod modular;
pub mod prime;
pub mod sieve;

pub mod error;

pub use error::NumberTheoryError;

pub use arith::{binary_accumulate, pow, powf, Exgcd, Iroot};
pub use modular::{
    Modular16, Modular32, Modular64, Modular8, ModularI16, ModularI32, ModularI64, ModularI8,
    RingElement,
};
pub use sieve::{EulerSieve, Sieve};
