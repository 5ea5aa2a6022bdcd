use crate::error::{Result, RsaError};
use crate::number_theory::{gcd, mod_inverse};
use crate::primality::generation::sample_prime;
use crate::primality::{MillerRabinTest, digit_bounds};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{Rng, thread_rng};
use std::fmt;

/// Public half of a key pair: `(e, n)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    pub e: BigUint,
    pub n: BigUint,
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.e, self.n)
    }
}

/// Private half of a key pair: `(d, n)`.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    d: BigUint,
    n: BigUint,
}

impl PrivateKey {
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("d", &"<redacted>")
            .field("n", &self.n)
            .finish()
    }
}

/// RSA key pair with `e * d ≡ 1 (mod (p-1)(q-1))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    public: PublicKey,
    private: PrivateKey,
}

impl KeyPair {
    /// Builds the pair for fixed `p`, `q` and `e`, deriving `d`.
    ///
    /// `p` or `q` below 2 leaves no `r` to invert `e` modulo and reports
    /// `NoInverseExists` against `n`.
    pub fn from_parts(p: &BigUint, q: &BigUint, e: &BigUint) -> Result<Self> {
        let one = BigUint::one();
        let n = p * q;
        if p <= &one || q <= &one {
            return Err(RsaError::NoInverseExists {
                value: e.clone(),
                modulus: n,
            });
        }
        let r = (p - &one) * (q - &one);
        let d = mod_inverse(e, &r)?;
        Ok(Self::assemble(e.clone(), d, n))
    }

    fn assemble(e: BigUint, d: BigUint, n: BigUint) -> Self {
        Self {
            public: PublicKey { e, n: n.clone() },
            private: PrivateKey { d, n },
        }
    }

    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    pub fn private(&self) -> &PrivateKey {
        &self.private
    }

    pub fn modulus(&self) -> &BigUint {
        &self.public.n
    }

    /// `e == d`: encryption and decryption use the same exponent.
    pub fn is_symmetric(&self) -> bool {
        self.public.e == self.private.d
    }
}

/// Every intermediate value of one key generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyGenTrace {
    pub p: BigUint,
    pub q: BigUint,
    pub n: BigUint,
    pub r: BigUint,
    pub e: BigUint,
    pub d: BigUint,
}

impl KeyGenTrace {
    pub fn keypair(&self) -> KeyPair {
        KeyPair::assemble(self.e.clone(), self.d.clone(), self.n.clone())
    }

    pub fn into_keypair(self) -> KeyPair {
        KeyPair::assemble(self.e, self.d, self.n)
    }

    pub fn is_symmetric(&self) -> bool {
        self.e == self.d
    }

    /// `p == q`, only possible when equal primes are allowed.
    pub fn primes_coincide(&self) -> bool {
        self.p == self.q
    }
}

/// Key pair generator over primes of a fixed decimal length.
#[derive(Debug, Clone)]
pub struct RsaKeyGenerator {
    test: MillerRabinTest,
    digit_length: usize,
    low: BigUint,
    high: BigUint,
    allow_equal_primes: bool,
}

impl RsaKeyGenerator {
    /// Fails with `InvalidDigitLength` outside `[MIN_DIGIT_LENGTH, MAX_DIGIT_LENGTH]`.
    pub fn new(digit_length: usize) -> Result<Self> {
        let (low, high) = digit_bounds(digit_length)?;
        Ok(Self {
            test: MillerRabinTest::default(),
            digit_length,
            low,
            high,
            allow_equal_primes: false,
        })
    }

    /// Miller-Rabin rounds per candidate; 0 means `DEFAULT_ROUNDS`.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.test = MillerRabinTest::new(rounds);
        self
    }

    /// Keep `q` even when it equals `p`. Off by default: with `n = p²` the
    /// exponents stop being inverse for symbols sharing a factor with `n`.
    pub fn allow_equal_primes(mut self, allow: bool) -> Self {
        self.allow_equal_primes = allow;
        self
    }

    pub fn digit_length(&self) -> usize {
        self.digit_length
    }

    pub fn generate_keypair(&self) -> KeyPair {
        self.generate_with_trace().into_keypair()
    }

    pub fn generate_with_trace(&self) -> KeyGenTrace {
        self.generate_with_rng(&mut thread_rng())
    }

    /// Retries internally until a usable pair comes out; never fails.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> KeyGenTrace {
        let one = BigUint::one();
        let two = BigUint::from(2u8);
        let three = BigUint::from(3u8);

        loop {
            let p = sample_prime(&self.test, &self.low, &self.high, rng);
            let q = loop {
                let candidate = sample_prime(&self.test, &self.low, &self.high, rng);
                if self.allow_equal_primes || candidate != p {
                    break candidate;
                }
            };

            let n = &p * &q;
            let r = (&p - &one) * (&q - &one);

            // [2, r - 1] is empty
            if r < three {
                log::debug!("p = {p}, q = {q} leave no public exponent, redrawing");
                continue;
            }

            let e = loop {
                let candidate = rng.gen_biguint_range(&two, &r);
                if gcd(&candidate, &r) == one {
                    break candidate;
                }
            };

            let d = match mod_inverse(&e, &r) {
                Ok(d) => d,
                Err(err) => {
                    log::warn!("{err}, redrawing");
                    continue;
                }
            };

            let trace = KeyGenTrace { p, q, n, r, e, d };
            if trace.is_symmetric() {
                log::warn!("generated symmetric keys: e = d = {}", trace.e);
            }
            log::debug!(
                "generated key pair with n = {} and e = {}",
                trace.n,
                trace.e
            );
            return trace;
        }
    }
}
