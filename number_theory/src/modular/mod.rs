//! Rings of integers modulo a compile-time constant.
//!
//! One value type is generated per backing width and signedness
//! ([`Modular8`] through [`Modular64`] and [`ModularI8`] through
//! [`ModularI64`]), each parameterized by its modulus as a const generic,
//! so two instantiations with different moduli are distinct, unrelated
//! types with zero runtime overhead.
//!
//! The overflow contract is enforced at compile time: instantiating an
//! addition for a modulus wider than the backing type allows, or a
//! multiplication for a modulus wider than half the backing type, is a
//! build error rather than a silent wraparound.
//!
//! ```
//! use number_theory::Modular32;
//!
//! type Mod10 = Modular32<10>;
//!
//! let a = Mod10::new(123);
//! assert_eq!(a.get(), 3);
//! assert_eq!((a * Mod10::new(9)).get(), 7);
//! ```

#[macro_use]
mod macros;

/// Interface of a ring value type.
///
/// The arithmetic operator sugar for the modular types is generated
/// against this trait, so the operator logic exists once.
pub trait RingElement: Sized + Copy + PartialEq {
    /// Addition in the ring.
    fn add(self, rhs: Self) -> Self;

    /// Subtraction in the ring.
    fn subtract(self, rhs: Self) -> Self;

    /// Multiplication in the ring.
    fn multiply(self, rhs: Self) -> Self;

    /// The additive inverse.
    fn negate(self) -> Self;

    /// Compares canonical representatives for equality.
    #[inline]
    fn equal(self, rhs: Self) -> bool {
        self == rhs
    }
}

impl_modular!(impl Modular8<u8>; Digits: 8);
impl_modular!(impl Modular16<u16>; Digits: 16);
impl_modular!(impl Modular32<u32>; Digits: 32);
impl_modular!(impl Modular64<u64>; Digits: 64);
impl_modular!(impl ModularI8<i8>; Digits: 7);
impl_modular!(impl ModularI16<i16>; Digits: 15);
impl_modular!(impl ModularI32<i32>; Digits: 31);
impl_modular!(impl ModularI64<i64>; Digits: 63);
