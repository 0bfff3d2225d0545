//! Compact, human-auditable curve descriptions.

use crate::{Error, GeneratedParameterSet, Result, params};
use core::fmt;
use num_bigint::{BigInt, BigUint};
use num_traits::{Num, One, Zero};

/// Single signed term of a closed-form [`Formula`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Term {
    /// `+2^e`
    AddPow2(u32),

    /// `-2^e`
    SubPow2(u32),

    /// `+c` where `c` is a hexadecimal literal.
    AddHex(&'static str),

    /// `-c` where `c` is a hexadecimal literal.
    SubHex(&'static str),
}

/// Closed form of a modulus or group order written as a sum of powers of two
/// and hexadecimal constants, which makes the special structure of the value
/// evident.
///
/// ```
/// use curvegen::{Formula, Term};
///
/// // 2^256 - 2^224 + 2^192 + 2^96 - 1
/// const Q: Formula = Formula(&[
///     Term::AddPow2(256),
///     Term::SubPow2(224),
///     Term::AddPow2(192),
///     Term::AddPow2(96),
///     Term::SubPow2(0),
/// ]);
///
/// assert_eq!(Q.to_string(), "2^256 - 2^224 + 2^192 + 2^96 - 1");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Formula(pub &'static [Term]);

impl Formula {
    /// Evaluate the formula.
    ///
    /// Returns `None` if one of the hexadecimal terms is malformed.
    pub fn evaluate(&self) -> Option<BigInt> {
        self.0.iter().try_fold(BigInt::zero(), |acc, term| {
            Some(match *term {
                Term::AddPow2(e) => acc + (BigInt::one() << e),
                Term::SubPow2(e) => acc - (BigInt::one() << e),
                Term::AddHex(hex) => acc + BigInt::from(parse_hex(hex)?),
                Term::SubHex(hex) => acc - BigInt::from(parse_hex(hex)?),
            })
        })
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.0.iter().enumerate() {
            let (negative, magnitude) = match *term {
                Term::AddPow2(0) => (false, "1".into()),
                Term::SubPow2(0) => (true, "1".into()),
                Term::AddPow2(e) => (false, format!("2^{e}")),
                Term::SubPow2(e) => (true, format!("2^{e}")),
                Term::AddHex(hex) => (false, format!("0x{}", strip_hex_prefix(hex))),
                Term::SubHex(hex) => (true, format!("0x{}", strip_hex_prefix(hex))),
            };

            match (i, negative) {
                (0, false) => f.write_str(&magnitude)?,
                (0, true) => write!(f, "-{magnitude}")?,
                (_, false) => write!(f, " + {magnitude}")?,
                (_, true) => write!(f, " - {magnitude}")?,
            }
        }

        Ok(())
    }
}

/// Description of a short Weierstrass curve `y² = x³ + ax + b` over a prime
/// field, as published.
///
/// The modulus `q` and the order `n` are given both as a closed-form
/// [`Formula`] and as a hexadecimal literal so that [`CurveSpec::validate`]
/// can verify that the literals are correct.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CurveSpec {
    /// Display name of the curve, e.g. `P-256`.
    pub name: &'static str,

    /// Field modulus in closed form.
    pub q_formula: Formula,

    /// Field modulus as a hexadecimal literal.
    pub q: &'static str,

    /// Group order in closed form.
    pub n_formula: Formula,

    /// Group order as a hexadecimal literal.
    pub n: &'static str,

    /// Coefficient `a` in the curve equation. Must be -3.
    pub a: i64,

    /// Coefficient `b` in the curve equation.
    pub b: &'static str,

    /// Base point x-coordinate.
    pub gx: &'static str,

    /// Base point y-coordinate.
    pub gy: &'static str,

    /// Cofactor. Must be 1.
    pub cofactor: u32,
}

impl CurveSpec {
    /// Check the curve description for internal consistency and derive the
    /// full set of parameters needed by the generated artifact.
    pub fn validate(&self) -> Result<GeneratedParameterSet> {
        params::derive(self)
    }

    /// Parse the hexadecimal literal `value` of the parameter `parameter`.
    pub(crate) fn literal(&self, parameter: &'static str, value: &str) -> Result<BigUint> {
        parse_hex(value).ok_or(Error::MalformedLiteral {
            curve: self.name,
            parameter,
        })
    }

    /// Evaluate `formula`, the closed form of `parameter`.
    pub(crate) fn closed_form(
        &self,
        parameter: &'static str,
        formula: &Formula,
    ) -> Result<BigInt> {
        formula.evaluate().ok_or(Error::MalformedLiteral {
            curve: self.name,
            parameter,
        })
    }
}

fn strip_hex_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x").unwrap_or(hex)
}

/// Parse a hexadecimal literal with optional `0x` prefix and `_` separators.
fn parse_hex(hex: &str) -> Option<BigUint> {
    let hex = strip_hex_prefix(hex);
    let digits: String = hex.chars().filter(|&c| c != '_').collect();

    if digits.is_empty() {
        return None;
    }

    BigUint::from_str_radix(&digits, 16).ok()
}
