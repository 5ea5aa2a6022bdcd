use crate::number_theory::mod_pow;
use crate::primality::{DEFAULT_ROUNDS, PrimalityTest};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::thread_rng;

/// Miller-Rabin test. Each round misses a composite with probability at most 1/4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MillerRabinTest {
    rounds: u32,
}

impl MillerRabinTest {
    /// Zero rounds would accept every odd number and falls back to `DEFAULT_ROUNDS`.
    pub fn new(rounds: u32) -> Self {
        let rounds = if rounds == 0 { DEFAULT_ROUNDS } else { rounds };
        Self { rounds }
    }
}

impl Default for MillerRabinTest {
    fn default() -> Self {
        Self::new(DEFAULT_ROUNDS)
    }
}

impl PrimalityTest for MillerRabinTest {
    fn rounds(&self) -> u32 {
        self.rounds
    }

    fn run_iteration(&self, n: &BigUint) -> bool {
        let one = BigUint::one();
        let two = BigUint::from(2u8);
        let upper = n - &one;

        // n - 1 = 2^r * s, s odd
        let r = upper.trailing_zeros().unwrap_or(0);
        let s = &upper >> r;

        let mut rng = thread_rng();
        let a = rng.gen_biguint_range(&two, n);
        let mut x = mod_pow(&a, &s, n);

        if x == one || x == upper {
            return true;
        }

        for _ in 1..r {
            x = mod_pow(&x, &two, n);

            if x == upper {
                return true;
            }

            // 1 is a fixed point of squaring, n - 1 can no longer appear
            if x == one {
                return false;
            }
        }

        false
    }
}
