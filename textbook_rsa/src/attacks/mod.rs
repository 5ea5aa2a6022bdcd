pub mod attacker;
pub mod brute_force;
pub mod frequency;

pub use attacker::Attacker;
pub use brute_force::{BruteForceResult, brute_force, brute_force_cancellable};
pub use frequency::{FrequencyTable, frequency_analysis};
