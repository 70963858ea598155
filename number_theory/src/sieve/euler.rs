use core::fmt::Display;

use num_traits::{PrimInt, ToPrimitive};

use crate::integer::{checked_cast, Bits, SignAbs};
use crate::NumberTheoryError;

/// Sieve of Euler.
///
/// Finds all prime numbers up to an inclusive `limit`, and keeps the
/// minimum prime factor of every number in range, which also yields
/// factorizations. Each composite is marked exactly once, by its
/// smallest prime factor, so construction is linear in the limit.
///
/// The sieve is immutable after construction and safe to query from
/// multiple threads.
#[derive(Debug, Clone)]
pub struct EulerSieve<T> {
    limit: T,
    min_prime_factor: Vec<T>,
    primes: Vec<T>,
}

impl<T> EulerSieve<T>
where
    T: PrimInt + Display + SignAbs<UnsignedT: ToPrimitive>,
{
    /// Constructs the sieve in a single linear pass over `2..=limit`.
    ///
    /// Products `prime * num` are evaluated in a 64-bit accumulator.
    /// Limits below 2 produce an empty sieve.
    ///
    /// # Errors
    ///
    /// [`NumberTheoryError::SieveOverflow`] when the products could
    /// overflow the accumulator, before anything is allocated, and
    /// [`NumberTheoryError::CastOverflow`] when the table does not fit
    /// the address space.
    pub fn new(limit: T) -> Result<Self, NumberTheoryError> {
        let bound = limit.to_u64().unwrap_or(0);

        if bound.bit_len() * 2 > u64::BITS {
            return Err(NumberTheoryError::SieveOverflow {
                limit: limit.to_string(),
                accumulator_bits: u64::BITS,
            });
        }

        let size = if bound < 2 {
            0
        } else {
            checked_cast::<u64, usize>(bound)? + 1
        };

        let mut min_prime_factor = vec![0u64; size];
        let mut primes: Vec<u64> = Vec::new();

        for num in 2..=bound {
            if min_prime_factor[num as usize] == 0 {
                primes.push(num);
                min_prime_factor[num as usize] = num;
            }
            for &prime in &primes {
                if prime > min_prime_factor[num as usize] {
                    break;
                }
                let x = prime * num;
                if x > bound {
                    break;
                }
                min_prime_factor[x as usize] = prime;
            }
        }

        Ok(Self {
            limit,
            min_prime_factor: min_prime_factor
                .into_iter()
                .map(|v| T::from(v).unwrap())
                .collect(),
            primes: primes.into_iter().map(|v| T::from(v).unwrap()).collect(),
        })
    }

    /// Returns the inclusive upper bound of the sieve.
    #[inline]
    pub fn limit(&self) -> T {
        self.limit
    }

    /// Returns the primes up to the limit, in ascending order.
    #[inline]
    pub fn primes(&self) -> &[T] {
        &self.primes
    }

    /// Returns the minimum prime factor of the magnitude of `number`.
    ///
    /// # Errors
    ///
    /// [`NumberTheoryError::NoPrimeFactor`] for magnitudes of 0 or 1, and
    /// [`NumberTheoryError::OutOfRange`] past the limit.
    pub fn min_prime_factor(&self, number: T) -> Result<T, NumberTheoryError> {
        let index = self.checked_index(number)?;
        Ok(self.min_prime_factor[index])
    }

    /// Factorizes the magnitude of `number` into ascending
    /// `(prime, exponent)` pairs, by repeated division through the
    /// minimum-prime-factor table.
    ///
    /// # Errors
    ///
    /// Same as [`min_prime_factor`](Self::min_prime_factor).
    pub fn factorize(&self, number: T) -> Result<Vec<(T, u32)>, NumberTheoryError> {
        let mut remaining = self.checked_index(number)? as u64;

        let mut factors = Vec::new();
        while remaining > 1 {
            let prime = self.min_prime_factor[remaining as usize];
            let p = prime.to_u64().unwrap();

            let mut exponent = 0;
            while remaining % p == 0 {
                exponent += 1;
                remaining /= p;
            }
            factors.push((prime, exponent));
        }
        Ok(factors)
    }

    fn checked_index(&self, number: T) -> Result<usize, NumberTheoryError> {
        let magnitude = SignAbs::unsigned_abs(number).to_u64().unwrap_or(u64::MAX);

        if magnitude <= 1 {
            return Err(NumberTheoryError::NoPrimeFactor {
                value: number.to_string(),
            });
        }
        if magnitude > self.limit.to_u64().unwrap_or(0) {
            return Err(NumberTheoryError::OutOfRange {
                value: number.to_string(),
                limit: self.limit.to_string(),
            });
        }
        Ok(magnitude as usize)
    }
}
