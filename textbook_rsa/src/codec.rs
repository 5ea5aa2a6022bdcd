//! Text <-> symbol conversion and the per-symbol exponentiation shared by
//! encryption, decryption and key search.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::error::{Result, RsaError};
use crate::number_theory::mod_pow;

/// One past the largest Unicode code point.
pub const CODE_POINT_LIMIT: u32 = 0x11_0000;

/// Unicode scalar values of `text`, in order.
pub fn encode_text(text: &str) -> Vec<BigUint> {
    text.chars().map(|c| BigUint::from(u32::from(c))).collect()
}

pub fn decode_symbol(symbol: &BigUint) -> Option<char> {
    symbol.to_u32().and_then(char::from_u32)
}

/// Inverse of [`encode_text`]. Fails on the first value that is not a Unicode
/// scalar value (too large, or a surrogate).
pub fn decode_text(symbols: &[BigUint]) -> Result<String> {
    symbols
        .iter()
        .map(|symbol| {
            decode_symbol(symbol).ok_or_else(|| RsaError::EncodingOverflow {
                symbol: symbol.clone(),
                modulus: BigUint::from(CODE_POINT_LIMIT),
            })
        })
        .collect()
}

/// Raises every symbol to `exponent` modulo `modulus`, independently and in order.
///
/// Every symbol must lie in `[0, modulus)`; otherwise nothing is returned.
pub fn apply_exponent(
    symbols: &[BigUint],
    exponent: &BigUint,
    modulus: &BigUint,
) -> Result<Vec<BigUint>> {
    symbols
        .iter()
        .map(|symbol| {
            if symbol >= modulus {
                return Err(RsaError::EncodingOverflow {
                    symbol: symbol.clone(),
                    modulus: modulus.clone(),
                });
            }
            Ok(mod_pow(symbol, exponent, modulus))
        })
        .collect()
}
