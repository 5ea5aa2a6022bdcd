use crate::codec::{apply_exponent, decode_text};
use crate::rsa::keygen::PublicKey;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

/// Outcome of an exhaustive private-exponent search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BruteForceResult {
    /// First exponent whose decryption equals the known plaintext.
    pub found_exponent: Option<BigUint>,
    /// Distinct decodable decryptions that did not match, in the order tried.
    pub attempted_plaintexts: Vec<String>,
    pub matched_plaintext: Option<String>,
    /// The search was stopped before a match or the end of the range.
    pub cancelled: bool,
}

impl BruteForceResult {
    pub fn is_success(&self) -> bool {
        self.found_exponent.is_some()
    }
}

/// Tries every `d` in `[0, n)` until `ciphertext` decrypts to `known_plaintext`.
///
/// Blocks for up to `n` candidates. Candidates whose output is not valid text
/// are skipped.
pub fn brute_force(
    ciphertext: &[BigUint],
    target: &PublicKey,
    known_plaintext: &str,
) -> BruteForceResult {
    brute_force_cancellable(ciphertext, target, known_plaintext, &AtomicBool::new(false))
}

/// Same as [`brute_force`], checking `cancel` before every candidate.
pub fn brute_force_cancellable(
    ciphertext: &[BigUint],
    target: &PublicKey,
    known_plaintext: &str,
    cancel: &AtomicBool,
) -> BruteForceResult {
    let n = &target.n;
    let mut result = BruteForceResult::default();
    let mut seen: HashSet<String> = HashSet::new();
    let mut d = BigUint::zero();

    log::info!("brute force over n = {n} started");

    while &d < n {
        if cancel.load(Ordering::Relaxed) {
            log::info!("brute force cancelled at d = {d}");
            result.cancelled = true;
            return result;
        }

        let attempt = apply_exponent(ciphertext, &d, n).and_then(|symbols| decode_text(&symbols));
        match attempt {
            Ok(plaintext) if plaintext == known_plaintext => {
                log::info!("brute force found d = {d}");
                result.found_exponent = Some(d);
                result.matched_plaintext = Some(plaintext);
                return result;
            }
            Ok(plaintext) => {
                if seen.insert(plaintext.clone()) {
                    result.attempted_plaintexts.push(plaintext);
                }
            }
            Err(err) => log::trace!("d = {d} skipped: {err}"),
        }

        d += BigUint::one();
    }

    log::info!(
        "brute force exhausted n = {n} with {} distinct decryptions",
        result.attempted_plaintexts.len()
    );
    result
}
