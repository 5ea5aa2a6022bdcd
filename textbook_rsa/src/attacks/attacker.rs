use crate::attacks::brute_force::{BruteForceResult, brute_force, brute_force_cancellable};
use crate::attacks::frequency::{FrequencyTable, frequency_analysis};
use crate::error::Result;
use crate::rsa::keygen::PublicKey;
use crate::rsa::party::Party;
use num_bigint::BigUint;
use std::sync::atomic::AtomicBool;

/// An eavesdropper: an ordinary party plus the two attacks.
///
/// The attacks only use what is observable on the wire, the target's public
/// key and a ciphertext, together with a guessed plaintext.
#[derive(Debug, Clone)]
pub struct Attacker {
    identity: Party,
}

impl Attacker {
    pub fn new(name: impl Into<String>, digit_length: usize) -> Result<Self> {
        Ok(Self::from_party(Party::new(name, digit_length)?))
    }

    pub fn from_party(identity: Party) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &Party {
        &self.identity
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    pub fn frequency_analysis(&self, ciphertext: &[BigUint]) -> FrequencyTable {
        frequency_analysis(ciphertext)
    }

    pub fn brute_force(
        &self,
        ciphertext: &[BigUint],
        target: &PublicKey,
        known_plaintext: &str,
    ) -> BruteForceResult {
        brute_force(ciphertext, target, known_plaintext)
    }

    pub fn brute_force_cancellable(
        &self,
        ciphertext: &[BigUint],
        target: &PublicKey,
        known_plaintext: &str,
        cancel: &AtomicBool,
    ) -> BruteForceResult {
        brute_force_cancellable(ciphertext, target, known_plaintext, cancel)
    }
}
