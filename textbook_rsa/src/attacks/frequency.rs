use num_bigint::BigUint;
use std::collections::HashMap;
use std::fmt;

/// Occurrence counts of ciphertext symbols, most frequent first.
/// Equal counts keep the order in which the symbols first appeared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    entries: Vec<(BigUint, usize)>,
}

impl FrequencyTable {
    pub fn entries(&self) -> &[(BigUint, usize)] {
        &self.entries
    }

    pub fn count(&self, symbol: &BigUint) -> usize {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map_or(0, |(_, count)| *count)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BigUint, usize)> {
        self.entries.iter().map(|(symbol, count)| (symbol, *count))
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, count) in self.iter() {
            writeln!(f, "{symbol} : {count}")?;
        }
        Ok(())
    }
}

/// Counts every distinct symbol of `ciphertext`.
pub fn frequency_analysis(ciphertext: &[BigUint]) -> FrequencyTable {
    let mut index: HashMap<&BigUint, usize> = HashMap::new();
    let mut entries: Vec<(BigUint, usize)> = Vec::new();

    for symbol in ciphertext {
        match index.get(symbol) {
            Some(&slot) => entries[slot].1 += 1,
            None => {
                index.insert(symbol, entries.len());
                entries.push((symbol.clone(), 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    FrequencyTable { entries }
}
