use core::fmt::Display;

use num_traits::PrimInt;

use crate::NumberTheoryError;

/// Sieve of Eratosthenes.
///
/// A primality table for `0..=limit`, answering [`is_prime`](Self::is_prime)
/// queries in constant time.
#[derive(Debug, Clone)]
pub struct Sieve<T> {
    limit: T,
    table: Vec<bool>,
}

impl<T: PrimInt + Display> Sieve<T> {
    /// Builds the primality table up to an inclusive `limit`.
    ///
    /// Negative limits produce a table that only knows 0.
    pub fn new(limit: T) -> Self {
        let bound = limit.to_usize().unwrap_or(0);
        let size = bound + 1;

        let mut table = vec![true; size];
        table[0] = false;
        if size > 1 {
            table[1] = false;
        }

        let mut i = 2;
        while i * i < size {
            if table[i] {
                let mut multiple = i * i;
                while multiple < size {
                    table[multiple] = false;
                    multiple += i;
                }
            }
            i += 1;
        }

        Self { limit, table }
    }

    /// Returns the inclusive upper bound of the sieve.
    #[inline]
    pub fn limit(&self) -> T {
        self.limit
    }

    /// Returns whether `number` is prime. Negative numbers are never
    /// prime.
    ///
    /// # Errors
    ///
    /// [`NumberTheoryError::OutOfRange`] when `number` exceeds the limit.
    pub fn is_prime(&self, number: T) -> Result<bool, NumberTheoryError> {
        if number < T::zero() {
            return Ok(false);
        }
        match number.to_usize() {
            Some(value) if value < self.table.len() => Ok(self.table[value]),
            _ => Err(NumberTheoryError::OutOfRange {
                value: number.to_string(),
                limit: self.limit.to_string(),
            }),
        }
    }
}
