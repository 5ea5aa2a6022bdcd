pub mod keygen;
pub mod party;

pub use keygen::{KeyGenTrace, KeyPair, PrivateKey, PublicKey, RsaKeyGenerator};
pub use party::Party;
