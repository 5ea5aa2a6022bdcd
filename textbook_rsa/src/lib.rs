//! Textbook RSA over small decimal primes: key generation, per-symbol encryption
//! between named parties and two attacks on the resulting ciphertext.

pub mod attacks;
pub mod codec;
pub mod error;
pub mod number_theory;
pub mod primality;
pub mod rsa;

pub use attacks::{Attacker, BruteForceResult, FrequencyTable};
pub use error::{Result, RsaError};
pub use rsa::{KeyGenTrace, KeyPair, Party, PrivateKey, PublicKey, RsaKeyGenerator};
