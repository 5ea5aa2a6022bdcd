use textbook_rsa::{Attacker, Party, RsaKeyGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1) Key generation with every intermediate value
    let trace = RsaKeyGenerator::new(2)?.generate_with_trace();
    println!("p = {}, q = {}", trace.p, trace.q);
    println!("n = p * q = {}", trace.n);
    println!("r = (p - 1)(q - 1) = {}", trace.r);
    println!("e = {}, d = e^-1 mod r = {}", trace.e, trace.d);
    if trace.is_symmetric() {
        println!("e = d: insecure keys!");
    }

    // 2) Alice -> Bob
    let alice = Party::new("Alice", 2)?;
    let bob = Party::new("Bob", 2)?;
    let charlie = Attacker::new("Charlie", 2)?;

    let plaintext = "attack at dawn";
    let ciphertext = alice.encrypt_message(&bob, plaintext)?;
    println!("{bob}");
    println!("ciphertext: {:?}", ciphertext.iter().map(|c| c.to_string()).collect::<Vec<_>>());
    println!("Bob decrypts: {}", bob.decrypt_message(&ciphertext)?);

    // 3) Frequency analysis
    print!("{}", charlie.frequency_analysis(&ciphertext));

    // 4) Brute force
    let result = charlie.brute_force(&ciphertext, bob.public_key(), plaintext);
    match result.found_exponent {
        Some(d) => println!(
            "found d = {d} (Bob's own d: {}), {} other decryptions tried",
            bob.matches_private_exponent(&d),
            result.attempted_plaintexts.len()
        ),
        None => println!("brute force failed"),
    }
    Ok(())
}
