/// Generates a const-generic modular ring type over one backing integer
/// type, together with its operator, conversion, formatting, num-traits
/// and serde surface.
///
/// `Digits` is the number of usable value bits of the backing type (its
/// full width for unsigned types, one less for signed ones); the
/// compile-time overflow assertions are stated against it.
macro_rules! impl_modular {
    (impl $ModularT:ident<$ValueT:ty>; Digits: $digits:expr) => {
        /// Ring of integers modulo the compile-time constant `M`.
        ///
        /// The carried value is always the canonical representative in
        /// `[0, M)`. Instantiations with different moduli are distinct,
        /// unrelated types.
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
        pub struct $ModularT<const M: $ValueT>($ValueT);

        impl<const M: $ValueT> $ModularT<M> {
            /// The modulus of the modular ring.
            pub const MODULUS: $ValueT = M;

            const POSITIVE_MODULUS: () =
                assert!(M > 0, "Modular requires modulus to be a positive integer.");

            const MODULUS_WIDTH: u32 = <$ValueT>::BITS - M.leading_zeros();

            const ADD_SAFE: () = assert!(
                Self::MODULUS_WIDTH + 1 <= $digits,
                "Modular addition may overflow. Please use a larger integer type."
            );

            const MUL_SAFE: () = assert!(
                Self::MODULUS_WIDTH * 2 <= $digits,
                "Modular multiplication may overflow. Please use a larger integer type."
            );

            /// Creates an element from any value of the backing type,
            /// normalized into `[0, M)` by the Euclidean remainder.
            #[inline]
            pub fn new(value: $ValueT) -> Self {
                let () = Self::POSITIVE_MODULUS;
                Self(value.rem_euclid(M))
            }

            /// Retrieves the canonical representative.
            #[inline]
            pub const fn get(self) -> $ValueT {
                self.0
            }

            /// Sets the element to a given value, normalizing it.
            #[inline]
            pub fn set(&mut self, value: $ValueT) {
                *self = Self::new(value);
            }

            /// The multiplicative inverse, computed from the Bézout
            /// coefficient of the value.
            ///
            /// # Errors
            ///
            /// [`NoInverse`](crate::NumberTheoryError::NoInverse) when
            /// `gcd(value, M) != 1`, since no inverse exists then.
            pub fn inverse(self) -> Result<Self, $crate::NumberTheoryError> {
                if !$crate::arith::Exgcd::coprime(self.0, M) {
                    return Err($crate::NumberTheoryError::NoInverse {
                        value: self.0.to_string(),
                        modulus: M.to_string(),
                    });
                }

                let (x, _) = $crate::arith::Exgcd::exgcd(self.0, M);
                // x is bounded by M, so one modulus correction suffices.
                let value = if x < 0 {
                    M.wrapping_add(x as $ValueT)
                } else {
                    x as $ValueT
                };
                Ok(Self(value))
            }
        }

        impl<const M: $ValueT> $crate::modular::RingElement for $ModularT<M> {
            #[inline]
            fn add(self, rhs: Self) -> Self {
                let () = Self::ADD_SAFE;
                let mut value = self.0 + rhs.0;
                if value >= M {
                    value -= M;
                }
                Self(value)
            }

            #[inline]
            fn subtract(self, rhs: Self) -> Self {
                $crate::modular::RingElement::add(self, $crate::modular::RingElement::negate(rhs))
            }

            #[inline]
            fn multiply(self, rhs: Self) -> Self {
                let () = Self::MUL_SAFE;
                Self::new(self.0 * rhs.0)
            }

            #[inline]
            fn negate(self) -> Self {
                if self.0 == 0 {
                    self
                } else {
                    Self(M - self.0)
                }
            }

            #[inline]
            fn equal(self, rhs: Self) -> bool {
                self.0 == rhs.0
            }
        }

        impl<const M: $ValueT> core::ops::Add<Self> for $ModularT<M> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                $crate::modular::RingElement::add(self, rhs)
            }
        }

        impl<const M: $ValueT> core::ops::AddAssign<Self> for $ModularT<M> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = $crate::modular::RingElement::add(*self, rhs);
            }
        }

        impl<const M: $ValueT> core::ops::Sub<Self> for $ModularT<M> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                $crate::modular::RingElement::subtract(self, rhs)
            }
        }

        impl<const M: $ValueT> core::ops::SubAssign<Self> for $ModularT<M> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = $crate::modular::RingElement::subtract(*self, rhs);
            }
        }

        impl<const M: $ValueT> core::ops::Mul<Self> for $ModularT<M> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                $crate::modular::RingElement::multiply(self, rhs)
            }
        }

        impl<const M: $ValueT> core::ops::MulAssign<Self> for $ModularT<M> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = $crate::modular::RingElement::multiply(*self, rhs);
            }
        }

        impl<const M: $ValueT> core::ops::Neg for $ModularT<M> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                $crate::modular::RingElement::negate(self)
            }
        }

        impl<const M: $ValueT> core::ops::Div<Self> for $ModularT<M> {
            type Output = Self;

            /// # Panics
            ///
            /// Panics when `rhs` is not invertible; use
            /// [`inverse`](Self::inverse) for the fallible form.
            #[inline]
            fn div(self, rhs: Self) -> Self::Output {
                $crate::modular::RingElement::multiply(self, num_traits::Inv::inv(rhs))
            }
        }

        impl<const M: $ValueT> core::ops::DivAssign<Self> for $ModularT<M> {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl<const M: $ValueT> num_traits::Zero for $ModularT<M> {
            #[inline]
            fn zero() -> Self {
                Self(0)
            }

            #[inline]
            fn is_zero(&self) -> bool {
                self.0 == 0
            }
        }

        impl<const M: $ValueT> num_traits::One for $ModularT<M> {
            #[inline]
            fn one() -> Self {
                Self::new(1)
            }
        }

        impl<const M: $ValueT> num_traits::Inv for $ModularT<M> {
            type Output = Self;

            /// # Panics
            ///
            /// Panics when the value is not invertible; use
            /// [`inverse`](Self::inverse) for the fallible form.
            #[inline]
            fn inv(self) -> Self::Output {
                match self.inverse() {
                    Ok(value) => value,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<const M: $ValueT> From<$ValueT> for $ModularT<M> {
            #[inline]
            fn from(value: $ValueT) -> Self {
                Self::new(value)
            }
        }

        impl<const M: $ValueT> From<$ModularT<M>> for $ValueT {
            #[inline]
            fn from(value: $ModularT<M>) -> Self {
                value.get()
            }
        }

        impl<const M: $ValueT> core::fmt::Display for $ModularT<M> {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl<const M: $ValueT> core::str::FromStr for $ModularT<M> {
            type Err = <$ValueT as core::str::FromStr>::Err;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ValueT as core::str::FromStr>::from_str(s).map(Self::new)
            }
        }

        impl<const M: $ValueT> serde::Serialize for $ModularT<M> {
            #[inline]
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de, const M: $ValueT> serde::Deserialize<'de> for $ModularT<M> {
            #[inline]
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <$ValueT as serde::Deserialize>::deserialize(deserializer).map(Self::new)
            }
        }
    };
}
