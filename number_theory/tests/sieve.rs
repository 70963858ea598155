use number_theory::{prime::coprime_pairs, prime::is_prime, EulerSieve, NumberTheoryError, Sieve};

#[test]
fn test_euler_sieve_scenarios() {
    let sieve = EulerSieve::new(30u32).unwrap();
    assert_eq!(
        sieve.primes(),
        [2, 3, 5, 7, 11, 13, 17, 19, 23, 29].as_slice()
    );
    assert_eq!(sieve.min_prime_factor(15), Ok(3));
}

#[test]
fn test_sieves_agree_with_trial_division() {
    let limit = 3000i64;
    let euler = EulerSieve::new(limit).unwrap();
    let eratosthenes = Sieve::new(limit);

    let mut primes = euler.primes().iter().copied();
    for n in 0..=limit {
        let expected = is_prime(n);
        assert_eq!(eratosthenes.is_prime(n), Ok(expected), "mismatch at {n}");
        if expected {
            assert_eq!(primes.next(), Some(n));
        }
    }
    assert_eq!(primes.next(), None);
}

#[test]
fn test_min_prime_factor_is_minimal() {
    let sieve = EulerSieve::new(2000u64).unwrap();

    for n in 2..=2000u64 {
        let p = sieve.min_prime_factor(n).unwrap();
        assert!(is_prime(p));
        assert_eq!(n % p, 0);
        assert!((2..p).all(|d| n % d != 0));
    }
}

#[test]
fn test_factorize_round_trip() {
    let sieve = EulerSieve::new(5000u64).unwrap();

    for n in 2..=5000u64 {
        let factors = sieve.factorize(n).unwrap();

        // ascending primes, positive exponents, product reconstructs n
        assert!(factors.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(factors.iter().all(|&(_, e)| e > 0));
        let product = factors
            .iter()
            .fold(1u64, |acc, &(p, e)| acc * p.pow(e));
        assert_eq!(product, n);
    }
}

#[test]
fn test_error_surface() {
    let sieve = EulerSieve::new(100i32).unwrap();

    assert!(matches!(
        sieve.min_prime_factor(-1),
        Err(NumberTheoryError::NoPrimeFactor { .. })
    ));
    assert!(matches!(
        sieve.factorize(101),
        Err(NumberTheoryError::OutOfRange { .. })
    ));
    assert!(matches!(
        EulerSieve::new(u64::MAX),
        Err(NumberTheoryError::SieveOverflow { .. })
    ));

    let table = Sieve::new(100i32);
    assert_eq!(table.is_prime(-97), Ok(false));
    assert!(matches!(
        table.is_prime(101),
        Err(NumberTheoryError::OutOfRange { .. })
    ));
}

#[test]
fn test_coprime_pairs_against_sieve_gcd() {
    use number_theory::Exgcd;

    let limit = 40u32;
    let pairs = coprime_pairs(limit);

    let mut count = 0usize;
    for x in 0..=limit {
        for y in 0..=x {
            if u32::gcd(x, y) == 1 {
                count += 1;
                assert!(pairs.contains(&(x, y)), "missing ({x}, {y})");
            }
        }
    }
    assert_eq!(pairs.len(), count);
}
