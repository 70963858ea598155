use crate::integer::SignAbs;

/// Greatest common divisor and Bézout coefficients.
pub trait Exgcd: Sized + SignAbs {
    /// Signed type carrying the Bézout coefficients.
    type SignedT;

    /// Calculates the greatest common divisor of the magnitudes of the
    /// number and `other`. The result is always non-negative.
    fn gcd(self, other: Self) -> Self::UnsignedT;

    /// Check whether two numbers are coprime.
    fn coprime(self, other: Self) -> bool;

    /// Returns coefficients `(x, y)` such that
    /// `x * a + y * b == gcd(|a|, |b|)`.
    ///
    /// The computation runs on the unsigned magnitudes, so negating the
    /// minimal representable value of a signed type cannot overflow; the
    /// signs of `a` and `b` are reapplied to the final coefficients.
    ///
    /// The returned coefficients are bounded: `|x| <= |b|` and
    /// `|y| <= |a|` whenever both inputs are nonzero.
    ///
    /// We maintain `xa * |a| + ya * |b| == ta` and
    /// `xb * |a| + yb * |b| == tb` across every quotient-remainder step
    /// `(ta, tb) -> (tb, ta - q * tb)` of the Euclidean algorithm, with
    /// the coefficient pairs updated in lockstep. When `tb` reaches zero,
    /// `ta` is the gcd and `(xa, ya)` witnesses it.
    ///
    /// For the bound, observe that the coefficient iterates alternate in
    /// sign and grow in magnitude, and that at termination
    /// `|xb| = |b| / g` and `|yb| = |a| / g`; the returned previous pair
    /// satisfies `|xa| <= |b| / (2g)` and `|ya| <= |a| / (2g)` except in
    /// the degenerate cases where a coefficient is 0 or 1. Every iterate
    /// therefore fits the double-width signed accumulator, and the
    /// returned pair fits the same-width signed type.
    ///
    /// `exgcd(0, 0)` returns `(1, 0)`, preserving the identity with
    /// `gcd = 0`.
    fn exgcd(self, other: Self) -> (Self::SignedT, Self::SignedT);
}

macro_rules! impl_exgcd {
    (impl Exgcd for $SelfT:ty; UnsignedType: $UnsignedT:ty; SignedType: $SignedT:ty; WideType: $WideT:ty) => {
        impl Exgcd for $SelfT {
            type SignedT = $SignedT;

            #[inline]
            fn gcd(self, other: Self) -> Self::UnsignedT {
                // Use Stein's algorithm
                let mut m: $UnsignedT = SignAbs::unsigned_abs(self);
                let mut n: $UnsignedT = SignAbs::unsigned_abs(other);
                if m == 0 || n == 0 {
                    return m | n;
                }

                // find common factors of 2
                let shift = (m | n).trailing_zeros();

                // divide n and m by 2 until odd
                m >>= m.trailing_zeros();
                n >>= n.trailing_zeros();

                while m != n {
                    if m > n {
                        m -= n;
                        m >>= m.trailing_zeros();
                    } else {
                        n -= m;
                        n >>= n.trailing_zeros();
                    }
                }
                m << shift
            }

            #[inline(always)]
            fn coprime(self, other: Self) -> bool {
                Self::gcd(self, other) == 1
            }

            fn exgcd(self, other: Self) -> ($SignedT, $SignedT) {
                let (mut ta, mut tb): ($UnsignedT, $UnsignedT) =
                    (SignAbs::unsigned_abs(self), SignAbs::unsigned_abs(other));

                let (mut xa, mut ya): ($WideT, $WideT) = (1, 0);
                let (mut xb, mut yb): ($WideT, $WideT) = (0, 1);

                while tb != 0 {
                    let q = ta / tb;
                    let qs = q as $WideT;

                    let tc = ta - q * tb;
                    let xc = xa - qs * xb;
                    let yc = ya - qs * yb;

                    xa = xb;
                    xb = xc;
                    ya = yb;
                    yb = yc;
                    ta = tb;
                    tb = tc;
                }

                let mut x = xa;
                let mut y = ya;
                if SignAbs::sign(self) < 0 {
                    x = -x;
                }
                if SignAbs::sign(other) < 0 {
                    y = -y;
                }

                debug_assert!(<$SignedT>::MIN as $WideT <= x && x <= <$SignedT>::MAX as $WideT);
                debug_assert!(<$SignedT>::MIN as $WideT <= y && y <= <$SignedT>::MAX as $WideT);

                (x as $SignedT, y as $SignedT)
            }
        }
    };
}

impl_exgcd!(impl Exgcd for u8; UnsignedType: u8; SignedType: i8; WideType: i16);
impl_exgcd!(impl Exgcd for u16; UnsignedType: u16; SignedType: i16; WideType: i32);
impl_exgcd!(impl Exgcd for u32; UnsignedType: u32; SignedType: i32; WideType: i64);
impl_exgcd!(impl Exgcd for u64; UnsignedType: u64; SignedType: i64; WideType: i128);
impl_exgcd!(impl Exgcd for i8; UnsignedType: u8; SignedType: i8; WideType: i16);
impl_exgcd!(impl Exgcd for i16; UnsignedType: u16; SignedType: i16; WideType: i32);
impl_exgcd!(impl Exgcd for i32; UnsignedType: u32; SignedType: i32; WideType: i64);
impl_exgcd!(impl Exgcd for i64; UnsignedType: u64; SignedType: i64; WideType: i128);
