use crate::codec::{apply_exponent, decode_text, encode_text};
use crate::error::Result;
use crate::rsa::keygen::{KeyPair, PublicKey, RsaKeyGenerator};
use num_bigint::BigUint;
use std::fmt;

/// A named participant owning one key pair.
///
/// The private exponent never leaves the struct; callers can only test a
/// candidate against it with [`Party::matches_private_exponent`].
#[derive(Debug, Clone)]
pub struct Party {
    name: String,
    keypair: KeyPair,
}

impl Party {
    /// Generates a fresh key pair from primes of `digit_length` decimal digits.
    pub fn new(name: impl Into<String>, digit_length: usize) -> Result<Self> {
        let keypair = RsaKeyGenerator::new(digit_length)?.generate_keypair();
        Ok(Self::from_keypair(name, keypair))
    }

    pub fn from_keypair(name: impl Into<String>, keypair: KeyPair) -> Self {
        Self {
            name: name.into(),
            keypair,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn public_key(&self) -> &PublicKey {
        self.keypair.public()
    }

    /// `m^e mod n` under the recipient's key; `m` must be below `n`.
    pub fn encrypt_symbol(&self, recipient: &PublicKey, m: &BigUint) -> Result<BigUint> {
        let mut out = apply_exponent(std::slice::from_ref(m), &recipient.e, &recipient.n)?;
        Ok(out.remove(0))
    }

    /// `c^d mod n` under this party's own key.
    pub fn decrypt_symbol(&self, c: &BigUint) -> Result<BigUint> {
        let mut out = self.decrypt_symbols(std::slice::from_ref(c))?;
        Ok(out.remove(0))
    }

    pub fn encrypt_symbols(
        &self,
        recipient: &PublicKey,
        symbols: &[BigUint],
    ) -> Result<Vec<BigUint>> {
        apply_exponent(symbols, &recipient.e, &recipient.n)
    }

    pub fn decrypt_symbols(&self, symbols: &[BigUint]) -> Result<Vec<BigUint>> {
        let private = self.keypair.private();
        apply_exponent(symbols, private.d(), private.n())
    }

    /// Encrypts each character of `plaintext` for `recipient`.
    pub fn encrypt_message(&self, recipient: &Party, plaintext: &str) -> Result<Vec<BigUint>> {
        self.encrypt_for(recipient.public_key(), plaintext)
    }

    pub fn encrypt_for(&self, recipient: &PublicKey, plaintext: &str) -> Result<Vec<BigUint>> {
        self.encrypt_symbols(recipient, &encode_text(plaintext))
    }

    pub fn decrypt_message(&self, ciphertext: &[BigUint]) -> Result<String> {
        decode_text(&self.decrypt_symbols(ciphertext)?)
    }

    pub fn matches_private_exponent(&self, candidate: &BigUint) -> bool {
        self.keypair.private().d() == candidate
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.name, self.public_key())
    }
}
