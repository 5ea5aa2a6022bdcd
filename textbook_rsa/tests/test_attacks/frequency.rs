use num_bigint::BigUint;
use textbook_rsa::attacks::frequency_analysis;
use textbook_rsa::{Attacker, KeyPair, Party};

fn symbols(values: &[u32]) -> Vec<BigUint> {
    values.iter().map(|&v| BigUint::from(v)).collect()
}

#[test]
fn test_counts_sorted_descending() {
    let table = frequency_analysis(&symbols(&[1, 1, 1, 2]));
    assert_eq!(
        table.entries(),
        &[(BigUint::from(1u32), 3), (BigUint::from(2u32), 1)]
    );
}

#[test]
fn test_ties_keep_first_seen_order() {
    let table = frequency_analysis(&symbols(&[9, 4, 7, 4, 9, 7, 5]));
    let order: Vec<u32> = table
        .iter()
        .map(|(s, _)| s.to_u32_digits().first().copied().unwrap_or(0))
        .collect();
    assert_eq!(order, vec![9, 4, 7, 5]);
    assert_eq!(table.count(&BigUint::from(5u32)), 1);
    assert_eq!(table.count(&BigUint::from(42u32)), 0);
}

#[test]
fn test_empty_ciphertext() {
    let table = frequency_analysis(&[]);
    assert!(table.is_empty());
    assert_eq!(table.to_string(), "");
}

#[test]
fn test_display() {
    let table = frequency_analysis(&symbols(&[3, 8, 3]));
    assert_eq!(table.to_string(), "3 : 2\n8 : 1\n");
}

#[test]
fn test_frequency_mirrors_plaintext_letters() {
    let bob = Party::from_keypair(
        "Bob",
        KeyPair::from_parts(&BigUint::from(61u32), &BigUint::from(53u32), &BigUint::from(17u32))
            .unwrap(),
    );
    let charlie = Attacker::new("Charlie", 2).unwrap();
    let ciphertext = bob.encrypt_for(bob.public_key(), "banana").unwrap();

    let table = charlie.frequency_analysis(&ciphertext);
    let counts: Vec<usize> = table.iter().map(|(_, count)| count).collect();
    assert_eq!(counts, vec![3, 2, 1]);
    assert_eq!(table.len(), 3);
}
