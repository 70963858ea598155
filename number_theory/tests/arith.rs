use number_theory::{binary_accumulate, pow, powf, Exgcd, Iroot, NumberTheoryError};
use rand::{thread_rng, Rng};

#[test]
fn test_exgcd_identity_exhaustive_small() {
    for a in -50..=50i64 {
        for b in -50..=50i64 {
            let (x, y) = i64::exgcd(a, b);
            let g = i64::gcd(a, b);
            assert_eq!(x as i128 * a as i128 + y as i128 * b as i128, g as i128);

            if a != 0 && b != 0 {
                assert!(x.unsigned_abs() <= b.unsigned_abs());
                assert!(y.unsigned_abs() <= a.unsigned_abs());
            }
        }
    }
}

#[test]
fn test_exgcd_across_widths() {
    let mut rng = thread_rng();

    for _ in 0..200 {
        let a: i8 = rng.gen();
        let b: i8 = rng.gen();
        let (x, y) = i8::exgcd(a, b);
        assert_eq!(
            x as i32 * a as i32 + y as i32 * b as i32,
            i8::gcd(a, b) as i32
        );
    }

    for _ in 0..200 {
        let a: u16 = rng.gen();
        let b: u16 = rng.gen();
        let (x, y) = u16::exgcd(a, b);
        assert_eq!(
            x as i64 * a as i64 + y as i64 * b as i64,
            u16::gcd(a, b) as i64
        );
    }
}

#[test]
fn test_exgcd_concrete() {
    let (x, y) = i32::exgcd(99, 78);
    assert_eq!((x, y), (-11, 14));
    assert_eq!(x * 99 + y * 78, 3);

    assert_eq!(i32::exgcd(0, 0), (1, 0));
    assert_eq!(i32::exgcd(0, 7), (0, 1));
    assert_eq!(i32::exgcd(7, 0), (1, 0));
}

#[test]
fn test_pow_reference() {
    // reference by repeated multiplication
    for base in -6..=6i64 {
        let mut expected = 1i64;
        for exponent in 0..=12u32 {
            assert_eq!(pow(base, exponent), expected, "{base}^{exponent}");
            expected *= base;
        }
    }

    assert_eq!(pow(1i64, -5i64), 1);
    assert_eq!(pow(-1i64, -3i64), -1);
}

#[test]
fn test_pow_float_and_binary_accumulate() {
    assert_eq!(powf(2.0f64, 10.0), 1024.0);
    assert!((powf(2.0f64, 0.5) - std::f64::consts::SQRT_2).abs() < 1e-15);

    // binary_accumulate with addition is a popcount
    let ones = binary_accumulate(0x00ff_00ffu64, 0u32, |bit, acc| *acc += bit as u32);
    assert_eq!(ones, 16);
}

#[test]
fn test_iroot_scenarios() {
    assert_eq!(125i64.iroot(3), Ok(5));
    assert_eq!((-125i64).iroot(3), Ok(-5));
    assert_eq!(63u64.iroot(2), Ok(7));
    assert_eq!(64u64.iroot(2), Ok(8));
    assert_eq!(65u64.iroot(2), Ok(8));

    assert_eq!(
        (-8i64).iroot(2),
        Err(NumberTheoryError::NoRealRoot {
            value: "-8".to_string(),
            degree: 2,
        })
    );
    assert_eq!(
        7u32.iroot(0),
        Err(NumberTheoryError::InvalidRootDegree { degree: 0 })
    );
}

#[test]
fn test_iroot_bracketing_64bit() {
    let mut rng = thread_rng();

    for _ in 0..300 {
        let x: i64 = rng.gen();
        let degree = 2 * rng.gen_range(1..=10) + 1; // odd, 3..=21
        let y = x.iroot(degree).unwrap();

        assert_eq!(y.signum(), if x == 0 { 0 } else { x.signum() });

        let magnitude = y.unsigned_abs() as u128;
        let n = degree as u32;
        let power = |v: u128| (0..n).try_fold(1u128, |acc, _| acc.checked_mul(v));
        assert!(power(magnitude).is_some_and(|v| v <= x.unsigned_abs() as u128));
        assert!(power(magnitude + 1).is_none_or(|v| v > x.unsigned_abs() as u128));
    }
}
