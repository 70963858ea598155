//! Prime sieves: the linear Euler sieve with its minimum-prime-factor
//! table, and a plain Sieve-of-Eratosthenes primality table.
//!
//! Both sieves treat their limit as **inclusive**: `limit` itself is in
//! range for every query, and the first out-of-range magnitude is
//! `limit + 1`.

mod eratosthenes;
mod euler;

pub use eratosthenes::Sieve;
pub use euler::EulerSieve;
