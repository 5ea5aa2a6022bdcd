use num_bigint::BigUint;

/// Errors produced by the RSA core.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RsaError {
    #[error("Invalid digit length: {requested} (must be in [{min}, {max}])")]
    InvalidDigitLength {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// When decoding text, `modulus` is the Unicode code point limit.
    #[error("Symbol {symbol} is not a valid code below {modulus}")]
    EncodingOverflow { symbol: BigUint, modulus: BigUint },

    #[error("{value} has no inverse modulo {modulus}")]
    NoInverseExists { value: BigUint, modulus: BigUint },
}

pub type Result<T> = std::result::Result<T, RsaError>;
