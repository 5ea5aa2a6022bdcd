pub(crate) mod generation;
pub(crate) mod miller_rabin;
pub use generation::{
    MAX_DIGIT_LENGTH, MIN_DIGIT_LENGTH, check_digit_length, digit_bounds, generate_prime,
    generate_prime_with,
};
pub use miller_rabin::MillerRabinTest;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

/// Number of witness rounds used unless a test is configured otherwise.
pub const DEFAULT_ROUNDS: u32 = 10;

/// Probabilistic primality test.
/// Template method: the public entry point is fixed, implementors supply one round.
pub trait PrimalityTest {
    /// Returns `true` if `n` is probably prime. Composite inputs slip through with
    /// probability bounded by the per-round error raised to `rounds()`.
    fn is_probably_prime(&self, n: &BigUint) -> bool {
        if let Some(verdict) = trivial_verdict(n) {
            return verdict;
        }
        (0..self.rounds()).all(|_| self.run_iteration(n))
    }

    fn rounds(&self) -> u32 {
        DEFAULT_ROUNDS
    }

    /// One round for an odd `n > 3`; `false` means `n` is certainly composite.
    fn run_iteration(&self, n: &BigUint) -> bool;
}

/// Miller-Rabin with the default number of rounds.
pub fn is_prime(n: &BigUint) -> bool {
    MillerRabinTest::default().is_probably_prime(n)
}

fn trivial_verdict(n: &BigUint) -> Option<bool> {
    let three = BigUint::from(3u8);
    if *n <= BigUint::one() {
        Some(false)
    } else if *n <= three {
        Some(true)
    } else if n.is_even() {
        Some(false)
    } else {
        None
    }
}
