use num_bigint::BigUint;
use num_traits::{FromPrimitive, One};
use quickcheck::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;
use textbook_rsa::number_theory::{gcd, mod_pow};
use textbook_rsa::primality::is_prime;
use textbook_rsa::{KeyPair, RsaError, RsaKeyGenerator};

#[test]
fn test_textbook_vector() {
    let p = BigUint::from_u32(61).unwrap();
    let q = BigUint::from_u32(53).unwrap();
    let e = BigUint::from_u32(17).unwrap();
    let keypair = KeyPair::from_parts(&p, &q, &e).unwrap();

    assert_eq!(keypair.modulus(), &BigUint::from_u32(3233).unwrap());
    assert_eq!(keypair.private().d(), &BigUint::from_u32(2753).unwrap());
    assert!(!keypair.is_symmetric());
}

#[test]
fn test_from_parts_rejects_non_coprime_exponent() {
    let p = BigUint::from_u32(61).unwrap();
    let q = BigUint::from_u32(53).unwrap();
    let e = BigUint::from_u32(15).unwrap();
    assert!(matches!(
        KeyPair::from_parts(&p, &q, &e),
        Err(RsaError::NoInverseExists { .. })
    ));
}

#[test]
fn test_from_parts_rejects_degenerate_primes() {
    let five = BigUint::from_u32(5).unwrap();
    let three = BigUint::from_u32(3).unwrap();
    for small in [0u32, 1] {
        let small = BigUint::from_u32(small).unwrap();
        assert!(matches!(
            KeyPair::from_parts(&small, &five, &three),
            Err(RsaError::NoInverseExists { .. })
        ));
        assert!(matches!(
            KeyPair::from_parts(&five, &small, &three),
            Err(RsaError::NoInverseExists { .. })
        ));
    }
}

#[test]
fn test_zero_rounds_still_yield_valid_keys() {
    let generator = RsaKeyGenerator::new(2).unwrap().with_rounds(0);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let trace = generator.generate_with_rng(&mut rng);
        assert!(is_prime(&trace.p) && is_prime(&trace.q));

        let keypair = trace.keypair();
        let n = keypair.modulus();
        for m in 0u32..200 {
            let m = BigUint::from(m) % n;
            let c = mod_pow(&m, &keypair.public().e, n);
            assert_eq!(mod_pow(&c, keypair.private().d(), n), m);
        }
    }
}

#[test]
fn test_key_generation_trace_is_consistent() {
    let generator = RsaKeyGenerator::new(3).unwrap();
    for _ in 0..10 {
        let trace = generator.generate_with_trace();
        let one = BigUint::one();

        assert!(is_prime(&trace.p) && is_prime(&trace.q));
        assert_ne!(trace.p, trace.q, "p and q must differ");
        assert_eq!(trace.n, &trace.p * &trace.q);
        assert_eq!(trace.r, (&trace.p - &one) * (&trace.q - &one));
        assert!(trace.e >= BigUint::from(2u8) && trace.e < trace.r);
        assert_eq!(gcd(&trace.e, &trace.r), one);
        assert_eq!((&trace.e * &trace.d) % &trace.r, one);

        let keypair = trace.keypair();
        assert_eq!(keypair.public().e, trace.e);
        assert_eq!(keypair.private().d(), &trace.d);
        assert_eq!(keypair.is_symmetric(), trace.is_symmetric());
    }
}

#[test]
fn test_symmetric_keys_are_flagged() {
    // r = 4 leaves e = 3 as the only choice, and 3 is its own inverse
    let keypair = KeyPair::from_parts(
        &BigUint::from_u32(3).unwrap(),
        &BigUint::from_u32(5).unwrap(),
        &BigUint::from_u32(3).unwrap(),
    )
    .unwrap();
    assert!(keypair.is_symmetric());
}

#[test]
fn test_equal_primes_can_be_allowed() {
    let generator = RsaKeyGenerator::new(1).unwrap().allow_equal_primes(true);
    let mut rng = StdRng::seed_from_u64(3);
    let coincided = (0..400).any(|_| generator.generate_with_rng(&mut rng).primes_coincide());
    assert!(coincided, "p = q never occurred with one-digit primes");
}

#[test]
fn test_generator_rejects_bad_lengths() {
    assert!(RsaKeyGenerator::new(0).is_err());
    assert!(RsaKeyGenerator::new(6).is_err());
    assert_eq!(RsaKeyGenerator::new(4).unwrap().digit_length(), 4);
}

quickcheck! {
    fn prop_keygen_round_trip(val: u16) -> bool {
        let keypair = RsaKeyGenerator::new(2).unwrap().with_rounds(12).generate_keypair();
        let n = keypair.modulus();
        let m = BigUint::from(val) % n;

        let c = mod_pow(&m, &keypair.public().e, n);
        mod_pow(&c, keypair.private().d(), n) == m
    }
}
