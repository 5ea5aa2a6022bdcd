use crate::error::{Result, RsaError};
use crate::primality::{MillerRabinTest, PrimalityTest};
use num_bigint::{BigUint, RandBigInt};
use rand::{Rng, thread_rng};

/// Shortest prime length, in decimal digits, accepted for key generation.
pub const MIN_DIGIT_LENGTH: usize = 1;
/// Longest prime length accepted; beyond this the brute-force demo never finishes.
pub const MAX_DIGIT_LENGTH: usize = 5;

pub fn check_digit_length(digit_length: usize) -> Result<()> {
    if (MIN_DIGIT_LENGTH..=MAX_DIGIT_LENGTH).contains(&digit_length) {
        Ok(())
    } else {
        Err(RsaError::InvalidDigitLength {
            requested: digit_length,
            min: MIN_DIGIT_LENGTH,
            max: MAX_DIGIT_LENGTH,
        })
    }
}

/// Half-open range `[10^(L-1), 10^L)` of integers with exactly `L` decimal digits.
pub fn digit_bounds(digit_length: usize) -> Result<(BigUint, BigUint)> {
    check_digit_length(digit_length)?;
    let ten = BigUint::from(10u8);
    let low = ten.pow(digit_length as u32 - 1);
    let high = ten.pow(digit_length as u32);
    Ok((low, high))
}

/// Random prime with `digit_length` decimal digits, Miller-Rabin with default rounds.
pub fn generate_prime(digit_length: usize) -> Result<BigUint> {
    generate_prime_with(&MillerRabinTest::default(), digit_length, &mut thread_rng())
}

/// Samples uniformly from the digit range until `test` accepts a candidate.
///
/// There is no retry cap: termination relies on the density of primes, which
/// is high enough for every accepted digit length.
pub fn generate_prime_with<T, R>(test: &T, digit_length: usize, rng: &mut R) -> Result<BigUint>
where
    T: PrimalityTest + ?Sized,
    R: Rng + ?Sized,
{
    let (low, high) = digit_bounds(digit_length)?;
    Ok(sample_prime(test, &low, &high, rng))
}

pub(crate) fn sample_prime<T, R>(test: &T, low: &BigUint, high: &BigUint, rng: &mut R) -> BigUint
where
    T: PrimalityTest + ?Sized,
    R: Rng + ?Sized,
{
    let mut attempts = 0u64;
    loop {
        attempts += 1;
        let candidate = rng.gen_biguint_range(low, high);
        if test.is_probably_prime(&candidate) {
            log::debug!("found prime {candidate} in [{low}, {high}) after {attempts} candidates");
            return candidate;
        }
    }
}
