use num_bigint::BigUint;
use std::sync::atomic::AtomicBool;
use textbook_rsa::attacks::brute_force;
use textbook_rsa::codec::{apply_exponent, decode_text};
use textbook_rsa::{Attacker, KeyPair, Party};

fn textbook_bob() -> Party {
    let keypair = KeyPair::from_parts(
        &BigUint::from(61u32),
        &BigUint::from(53u32),
        &BigUint::from(17u32),
    )
    .unwrap();
    Party::from_keypair("Bob", keypair)
}

#[test]
fn test_recovers_working_exponent() {
    let bob = textbook_bob();
    let alice = Party::new("Alice", 2).unwrap();
    let charlie = Attacker::new("Charlie", 2).unwrap();

    let ciphertext = alice.encrypt_message(&bob, "Hi!").unwrap();
    let result = charlie.brute_force(&ciphertext, bob.public_key(), "Hi!");

    assert!(result.is_success());
    assert!(!result.cancelled);
    assert_eq!(result.matched_plaintext.as_deref(), Some("Hi!"));

    let d = result.found_exponent.unwrap();
    assert!(d < BigUint::from(3233u32));
    let recovered = apply_exponent(&ciphertext, &d, &bob.public_key().n).unwrap();
    assert_eq!(decode_text(&recovered).unwrap(), "Hi!");
}

#[test]
fn test_attempts_are_distinct_and_exclude_match() {
    let bob = textbook_bob();
    let ciphertext = bob.encrypt_for(bob.public_key(), "ok").unwrap();
    let result = brute_force(&ciphertext, bob.public_key(), "ok");

    let mut sorted = result.attempted_plaintexts.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), result.attempted_plaintexts.len());
    assert!(!result.attempted_plaintexts.iter().any(|p| p == "ok"));
    // d = 0 maps every symbol to 1, d = 1 leaves the ciphertext as is
    assert_eq!(result.attempted_plaintexts[0], "\u{1}\u{1}");
}

#[test]
fn test_exhausts_without_match() {
    let bob = textbook_bob();
    let ciphertext = bob.encrypt_for(bob.public_key(), "ab").unwrap();
    let result = brute_force(&ciphertext, bob.public_key(), "abc");

    assert!(!result.is_success());
    assert!(!result.cancelled);
    assert_eq!(result.found_exponent, None);
    assert_eq!(result.matched_plaintext, None);
    assert!(!result.attempted_plaintexts.is_empty());
}

#[test]
fn test_undecodable_candidates_are_skipped() {
    let bob = textbook_bob();
    // symbols at or above n fail for every candidate
    let ciphertext = vec![BigUint::from(5000u32)];
    let result = brute_force(&ciphertext, bob.public_key(), "A");

    assert!(!result.is_success());
    assert!(result.attempted_plaintexts.is_empty());
}

#[test]
fn test_cancelled_search_stops_immediately() {
    let bob = textbook_bob();
    let charlie = Attacker::new("Charlie", 2).unwrap();
    let ciphertext = bob.encrypt_for(bob.public_key(), "x").unwrap();

    let cancel = AtomicBool::new(true);
    let result = charlie.brute_force_cancellable(&ciphertext, bob.public_key(), "x", &cancel);

    assert!(result.cancelled);
    assert!(!result.is_success());
    assert!(result.attempted_plaintexts.is_empty());
}

#[test]
fn test_generated_keys_fall_to_brute_force() {
    let alice = Party::new("Alice", 2).unwrap();
    let bob = Party::new("Bob", 2).unwrap();
    let charlie = Attacker::new("Charlie", 2).unwrap();

    let ciphertext = alice.encrypt_message(&bob, "Hey").unwrap();
    let result = charlie.brute_force(&ciphertext, bob.public_key(), "Hey");

    let d = result.found_exponent.expect("no exponent found below n");
    let recovered = apply_exponent(&ciphertext, &d, &bob.public_key().n).unwrap();
    assert_eq!(decode_text(&recovered).unwrap(), "Hey");
    assert_eq!(charlie.identity().name(), "Charlie");
}
