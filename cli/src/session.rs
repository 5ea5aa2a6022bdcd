use num_bigint::BigUint;
use rand::seq::SliceRandom;
use textbook_rsa::{Attacker, Party, Result, RsaKeyGenerator};

/// How many of the non-matching brute-force decryptions get shown.
const SAMPLE_ATTEMPTS: usize = 3;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub digit_length: usize,
    pub alice: String,
    pub bob: String,
    pub attacker: String,
    pub allow_equal_primes: bool,
}

/// Parties of the demo plus the last message Alice sent.
pub struct Session {
    alice: Party,
    bob: Party,
    charlie: Attacker,
    plaintext: String,
    ciphertext: Vec<BigUint>,
    allow_equal_primes: bool,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let generator = RsaKeyGenerator::new(config.digit_length)?
            .allow_equal_primes(config.allow_equal_primes);
        let party = |name: &str| Party::from_keypair(name, generator.generate_keypair());

        Ok(Self {
            alice: party(&config.alice),
            bob: party(&config.bob),
            charlie: Attacker::from_party(party(&config.attacker)),
            plaintext: String::new(),
            ciphertext: Vec::new(),
            allow_equal_primes: config.allow_equal_primes,
        })
    }

    /// Sender, recipient and attacker, in that order.
    pub fn names(&self) -> [&str; 3] {
        [self.alice.name(), self.bob.name(), self.charlie.name()]
    }

    pub fn plaintext(&self) -> &str {
        &self.plaintext
    }

    pub fn ciphertext(&self) -> &[BigUint] {
        &self.ciphertext
    }

    /// Step-by-step key generation, independent of the session's parties.
    pub fn key_generation(&self, digit_length: usize) -> Result<String> {
        let trace = RsaKeyGenerator::new(digit_length)?
            .allow_equal_primes(self.allow_equal_primes)
            .generate_with_trace();

        let mut lines = vec![format!("p = {}", trace.p), format!("q = {}", trace.q)];
        if trace.primes_coincide() {
            lines.push("p = q  :  n is a square!".to_owned());
        }
        lines.push(format!("n = p * q = {}", trace.n));
        lines.push(format!("r = (p - 1)(q - 1) = {}", trace.r));
        lines.push(format!("e = random coprime to r in [2, r - 1] = {}", trace.e));
        lines.push(format!("d = e^-1 mod r = {}", trace.d));
        if trace.is_symmetric() {
            lines.push("e = d  :  Insecure keys!".to_owned());
        }
        lines.push(format!("Public key = ({}, {})", trace.e, trace.n));
        lines.push(format!("Private key = ({}, {})", trace.d, trace.n));
        Ok(lines.join("\n"))
    }

    pub fn show_texts(&self) -> String {
        format!(
            "Current plaintext m: {}\nCurrent ciphertext c: {}",
            self.plaintext(),
            render_symbols(self.ciphertext())
        )
    }

    /// Encrypts `message` for Bob and keeps it as the current pair. On failure
    /// the previous pair is left untouched.
    pub fn alice_encrypts(&mut self, message: &str) -> Result<String> {
        let ciphertext = self.alice.encrypt_message(&self.bob, message)?;
        self.plaintext = message.to_owned();
        self.ciphertext = ciphertext;
        Ok(format!(
            "For every character m, send m^e mod n with {}'s key {}\n{} receives:\n{}",
            self.bob.name(),
            self.bob.public_key(),
            self.bob.name(),
            render_symbols(&self.ciphertext)
        ))
    }

    pub fn bob_decrypts(&self) -> Result<String> {
        let plaintext = self.bob.decrypt_message(&self.ciphertext)?;
        Ok(format!(
            "{name} receives:\n{}\nFor every character c, decrypt c^d mod n\n{name} decrypts: \"{plaintext}\"",
            render_symbols(&self.ciphertext),
            name = self.bob.name(),
        ))
    }

    pub fn charlie_frequency(&self) -> String {
        let table = self.charlie.frequency_analysis(&self.ciphertext);
        format!("{} counts:\n{}", self.charlie.name(), table)
    }

    pub fn charlie_brute_force(&self) -> String {
        let name = self.charlie.name();
        let target = self.bob.public_key();
        let mut lines = vec![
            format!("{name} knows n = {}", target.n),
            format!("{name} tries brute force to find a valid d"),
        ];

        // an empty ciphertext trivially "decrypts" under d = 0
        if self.ciphertext.is_empty() {
            lines.push(format!("{} has not sent anything yet", self.alice.name()));
            lines.push(format!("{name}'s brute force failed"));
            return lines.join("\n");
        }

        let result = self.charlie.brute_force(&self.ciphertext, target, &self.plaintext);
        match (&result.found_exponent, &result.matched_plaintext) {
            (Some(d), Some(plaintext)) => {
                lines.push(format!("Found a valid d = {d}"));
                if self.bob.matches_private_exponent(d) {
                    lines.push(format!("It is exactly {}'s private exponent", self.bob.name()));
                }
                lines.push(format!("{name} learned the plaintext:\n{plaintext}"));

                let mut rng = rand::thread_rng();
                let samples: Vec<&String> = result
                    .attempted_plaintexts
                    .choose_multiple(&mut rng, SAMPLE_ATTEMPTS)
                    .collect();
                if !samples.is_empty() {
                    lines.push(format!("Some other decryptions {name} tried:"));
                    lines.extend(samples.into_iter().map(|sample| format!("{sample:?}")));
                }
            }
            _ => {
                lines.push(format!("{name}'s brute force failed"));
                lines.push("and could not find a likely plaintext".to_owned());
            }
        }
        lines.join("\n")
    }
}

fn render_symbols(symbols: &[BigUint]) -> String {
    symbols
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
