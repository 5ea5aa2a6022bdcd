mod session;

use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use session::{Session, SessionConfig};
use std::error::Error;
use textbook_rsa::primality::MAX_DIGIT_LENGTH;

fn menu(session: &Session) -> String {
    let [alice, bob, charlie] = session.names();
    format!(
        "\n======================================\n\
         1. Generate keys\n\
         2. Show current plaintext and ciphertext\n\
         3. {alice} encrypts message\n\
         4. {bob} decrypts message\n\
         5. {charlie} starts frequency analysis\n\
         6. {charlie} does brute force\n\
         0. End program"
    )
}

/// Interactive textbook RSA demo: Alice writes to Bob while Charlie listens in.
#[derive(Parser, Debug)]
#[command(name = "rsa-demo", version)]
struct Args {
    /// Decimal length of the primes behind every party's key
    #[arg(short, long, default_value_t = 2)]
    digits: usize,

    #[arg(long, default_value = "Alice")]
    alice: String,

    #[arg(long, default_value = "Bob")]
    bob: String,

    #[arg(long, default_value = "Charlie")]
    attacker: String,

    /// Let both primes of a key coincide
    #[arg(long)]
    allow_equal_primes: bool,
}

impl From<Args> for SessionConfig {
    fn from(args: Args) -> Self {
        SessionConfig {
            digit_length: args.digits,
            alice: args.alice,
            bob: args.bob,
            attacker: args.attacker,
            allow_equal_primes: args.allow_equal_primes,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("Run args: {:?}", args);

    let mut session = Session::new(&args.into())?;
    let mut rl = DefaultEditor::new()?;

    loop {
        println!("{}", menu(&session));
        let Some(line) = read_line(&mut rl, "Enter choice > ")? else {
            break;
        };

        let output = match line.trim().parse::<u8>() {
            Ok(0) => break,
            Ok(1) => {
                let prompt = format!("Enter prime length (<= {MAX_DIGIT_LENGTH}) > ");
                let Some(input) = read_line(&mut rl, &prompt)? else {
                    break;
                };
                match input.trim().parse::<usize>() {
                    Ok(length) => session.key_generation(length).map_err(|e| e.to_string()),
                    Err(_) => Err("Invalid prime length".to_owned()),
                }
            }
            Ok(2) => Ok(session.show_texts()),
            Ok(3) => {
                let [alice, bob, _] = session.names();
                let prompt = format!("You are {alice}. What are you sending {bob}? > ");
                let Some(message) = read_line(&mut rl, &prompt)? else {
                    break;
                };
                session.alice_encrypts(&message).map_err(|e| e.to_string())
            }
            Ok(4) => session.bob_decrypts().map_err(|e| e.to_string()),
            Ok(5) => Ok(session.charlie_frequency()),
            Ok(6) => Ok(session.charlie_brute_force()),
            _ => Err("Not a valid option".to_owned()),
        };

        match output {
            Ok(text) => println!("{text}"),
            Err(message) => println!("{message}"),
        }
    }

    Ok(())
}

/// `None` on Ctrl-C / Ctrl-D.
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>, ReadlineError> {
    match rl.readline(prompt) {
        Ok(line) => {
            let _ = rl.add_history_entry(line.as_str());
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err),
    }
}
