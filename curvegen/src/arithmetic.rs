//! Arbitrary-precision helpers: modular inversion and Montgomery domain
//! conversion under a limb-aligned modulus width.

use crate::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Size of a limb in the consuming arithmetic routines.
pub const LIMB_BITS: u64 = 32;

/// Number of limbs needed to hold `m`.
pub fn num_limbs(m: &BigUint) -> u64 {
    m.bits().div_ceil(LIMB_BITS)
}

/// Smallest multiple of [`LIMB_BITS`] which is greater than or equal to the
/// bit length of `m`.
///
/// This is the exponent `k` of the Montgomery radix `R = 2^k` used for `m`.
pub fn limb_aligned_bits(m: &BigUint) -> u64 {
    num_limbs(m) * LIMB_BITS
}

/// Translate `x` into the Montgomery domain modulo `m`, i.e. compute
/// `x * R mod m` where `R = 2^limb_aligned_bits(m)`.
///
/// Negative inputs are reduced into `[0, m)`.
///
/// # Panics
///
/// - If `m` is zero
pub fn to_montgomery(x: &BigInt, m: &BigUint) -> BigUint {
    let m = BigInt::from(m.clone());
    magnitude((x << limb_aligned_bits(m.magnitude())).mod_floor(&m))
}

/// Translate `x` out of the Montgomery domain modulo `m`, i.e. compute
/// `x * R^-1 mod m`.
///
/// Fails with [`Error::NotInvertible`] when `R` is not a unit modulo `m`
/// (any even modulus).
pub fn from_montgomery(x: &BigUint, m: &BigUint) -> Result<BigUint> {
    let r = BigInt::from(BigUint::one() << limb_aligned_bits(m));
    let r_inv = mod_inverse(&r, m)?;
    Ok((x * r_inv) % m)
}

/// `R^2 mod m`, the constant which translates a value into the Montgomery
/// domain with a single Montgomery multiplication.
pub fn montgomery_rr(m: &BigUint) -> BigUint {
    let r = BigInt::one() << limb_aligned_bits(m);
    to_montgomery(&r, m)
}

/// Compute the multiplicative inverse of `a` modulo `m` using the extended
/// Euclidean algorithm.
///
/// Returns the unique `x` in `[0, m)` with `a * x ≡ 1 (mod m)`, or
/// [`Error::NotInvertible`] if `gcd(a, m) != 1` or `m <= 1`.
pub fn mod_inverse(a: &BigInt, m: &BigUint) -> Result<BigUint> {
    if m <= &BigUint::one() {
        return Err(Error::NotInvertible);
    }

    let m = BigInt::from(m.clone());
    let (gcd, x) = extended_gcd(a, &m);

    if !gcd.is_one() {
        return Err(Error::NotInvertible);
    }

    Ok(magnitude(x.mod_floor(&m)))
}

/// Returns `(g, x)` such that `g = gcd(|a|, |b|)` and `a * x ≡ g (mod b)`.
fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let (mut last_rem, mut rem) = (a.abs(), b.abs());
    let (mut last_x, mut x) = (BigInt::one(), BigInt::zero());

    while !rem.is_zero() {
        let (quotient, next_rem) = last_rem.div_rem(&rem);
        last_rem = core::mem::replace(&mut rem, next_rem);

        let next_x = &last_x - &quotient * &x;
        last_x = core::mem::replace(&mut x, next_x);
    }

    if a.is_negative() {
        last_x = -last_x;
    }

    (last_rem, last_x)
}

/// Magnitude of a value already reduced into `[0, m)`.
fn magnitude(x: BigInt) -> BigUint {
    debug_assert_ne!(x.sign(), Sign::Minus);
    x.into_parts().1
}
