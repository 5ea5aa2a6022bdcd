use num_bigint::{BigInt, BigUint, ToBigInt};
use num_traits::{One, Signed, Zero};

use crate::error::{Result, RsaError};

pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = a % &b;
        a = b;
        b = r;
    }
    a
}

/// Returns `(g, x, y)` such that `a*x + b*y = g = gcd(a, b)`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let tmp_r = old_r - &q * &r;
        old_r = r;
        r = tmp_r;

        let tmp_s = old_s - &q * &s;
        old_s = s;
        s = tmp_s;

        let tmp_t = old_t - &q * &t;
        old_t = t;
        t = tmp_t;
    }

    (old_r, old_s, old_t)
}

/// `base^exponent mod modulus` by square-and-multiply. Moduli 0 and 1 yield zero.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_zero() || modulus.is_one() {
        return BigUint::zero();
    }
    let mut base = base % modulus;
    let mut exp = exponent.clone();
    let mut result = BigUint::one();

    while !exp.is_zero() {
        if exp.bit(0) {
            result = (result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }
    result
}

/// Multiplicative inverse of `a` modulo `m`, normalised into `[0, m)`.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    let no_inverse = || RsaError::NoInverseExists {
        value: a.clone(),
        modulus: m.clone(),
    };
    if m <= &BigUint::one() {
        return Err(no_inverse());
    }

    // BigUint -> BigInt never fails
    let a_int = a.to_bigint().ok_or_else(no_inverse)?;
    let m_int = m.to_bigint().ok_or_else(no_inverse)?;

    let (g, x, _) = extended_gcd(&a_int, &m_int);
    if !g.is_one() {
        return Err(no_inverse());
    }

    let mut x = x % &m_int;
    if x.is_negative() {
        x += &m_int;
    }
    x.to_biguint().ok_or_else(no_inverse)
}
