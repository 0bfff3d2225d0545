//! Derivation of the generated parameter set from a [`CurveSpec`].

use crate::{
    CurveSpec, Error, Result,
    arithmetic::{from_montgomery, montgomery_rr, num_limbs, to_montgomery},
};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::One;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Column at which the hexadecimal rendering of `n - 2` is wrapped.
pub const WRAP_COLUMNS: usize = 66;

/// Separator inserted between the wrapped lines of `n - 2`, continuing the
/// number on the next comment line.
const WRAP_SEPARATOR: &str = "\\\n    //      ";

/// Every value the generated artifact needs for one curve.
///
/// Field elements (`one`, `a`, `b`, `gx`, `gy`) are in the Montgomery domain
/// modulo `q`; `one_rr_mod_n` is in the Montgomery domain modulo `n`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedParameterSet {
    /// Display name of the curve.
    pub name: &'static str,

    /// Bit length of `q`.
    pub bits: u64,

    /// Number of 32-bit limbs needed to hold `q`.
    pub num_limbs: u64,

    /// Field modulus.
    pub q: BigUint,

    /// `R^2 mod q`.
    pub q_rr: BigUint,

    /// Group order.
    pub n: BigUint,

    /// Montgomery encoding of 1 modulo `q`, i.e. `R mod q`.
    pub one: BigUint,

    /// Coefficient `a`, Montgomery encoded.
    pub a: BigUint,

    /// Coefficient `b`, Montgomery encoded.
    pub b: BigUint,

    /// Base point x-coordinate, Montgomery encoded.
    pub gx: BigUint,

    /// Base point y-coordinate, Montgomery encoded.
    pub gy: BigUint,

    /// `q - n`.
    pub q_minus_n: BigInt,

    /// `(R mod n)^2 mod n`, the scalar-domain `R^2` constant.
    pub one_rr_mod_n: BigUint,

    /// `n - 2` in hexadecimal, wrapped at [`WRAP_COLUMNS`] for embedding in
    /// a comment.
    pub n_minus_2: String,

    /// Closed form of `q`.
    pub q_formula: String,

    /// Closed form of `n`.
    pub n_formula: String,
}

impl GeneratedParameterSet {
    /// Short identifier of the curve, derived from the bit length of `q`.
    pub fn identifier(&self) -> String {
        self.bits.to_string()
    }

    /// Name of the file the artifact for this curve is written to.
    pub fn file_name(&self) -> String {
        format!("p{}.rs", self.identifier())
    }

    /// Flat name → value mapping consumed by the template.
    ///
    /// Integers are rendered as lowercase hexadecimal without prefix.
    pub fn substitutions(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("name", self.name.to_owned()),
            ("bits", self.bits.to_string()),
            ("num_limbs", self.num_limbs.to_string()),
            ("q", format!("{:x}", self.q)),
            ("q_rr", format!("{:x}", self.q_rr)),
            ("n", format!("{:x}", self.n)),
            ("one", format!("{:x}", self.one)),
            ("a", format!("{:x}", self.a)),
            ("b", format!("{:x}", self.b)),
            ("gx", format!("{:x}", self.gx)),
            ("gy", format!("{:x}", self.gy)),
            ("q_minus_n", format!("{:x}", self.q_minus_n)),
            ("one_rr_mod_n", format!("{:x}", self.one_rr_mod_n)),
            ("n_minus_2", self.n_minus_2.clone()),
            ("q_formula", self.q_formula.clone()),
            ("n_formula", self.n_formula.clone()),
        ])
    }
}

#[instrument(level = "debug", skip_all, fields(curve = spec.name))]
pub(crate) fn derive(spec: &CurveSpec) -> Result<GeneratedParameterSet> {
    let curve = spec.name;

    if spec.a != -3 {
        return Err(Error::UnsupportedCurveShape {
            curve,
            reason: "only curves where a == -3 are supported",
        });
    }

    if spec.cofactor != 1 {
        return Err(Error::UnsupportedCurveShape {
            curve,
            reason: "only curves with cofactor 1 are supported",
        });
    }

    let q = spec.literal("q", spec.q)?;
    if spec.closed_form("q", &spec.q_formula)? != BigInt::from(q.clone()) {
        return Err(Error::FormulaMismatch {
            curve,
            parameter: "q",
        });
    }

    let n = spec.literal("n", spec.n)?;
    if spec.closed_form("n", &spec.n_formula)? != BigInt::from(n.clone()) {
        return Err(Error::FormulaMismatch {
            curve,
            parameter: "n",
        });
    }

    if q <= BigUint::one() || n <= BigUint::one() {
        return Err(Error::UnsupportedCurveShape {
            curve,
            reason: "modulus and order must be greater than one",
        });
    }

    let a = BigInt::from(spec.a);
    let b = BigInt::from(spec.literal("b", spec.b)?);
    let gx = BigInt::from(spec.literal("gx", spec.gx)?);
    let gy = BigInt::from(spec.literal("gy", spec.gy)?);

    let one_mod_n = to_montgomery(&BigInt::one(), &n);

    let params = GeneratedParameterSet {
        name: curve,
        bits: q.bits(),
        num_limbs: num_limbs(&q),
        q_rr: montgomery_rr(&q),
        one: to_montgomery(&BigInt::one(), &q),
        a: to_montgomery(&a, &q),
        b: to_montgomery(&b, &q),
        gx: to_montgomery(&gx, &q),
        gy: to_montgomery(&gy, &q),
        q_minus_n: BigInt::from(q.clone()) - BigInt::from(n.clone()),
        one_rr_mod_n: (&one_mod_n * &one_mod_n) % &n,
        n_minus_2: wrap_hex(&(&n - 2u32)),
        q_formula: spec.q_formula.to_string(),
        n_formula: spec.n_formula.to_string(),
        q,
        n,
    };

    // Decoding every encoded constant must give back its plain value.
    let q = BigInt::from(params.q.clone());
    let field_elements = [
        ("one", &params.one, BigInt::one()),
        ("q_rr", &params.q_rr, BigInt::from(params.one.clone())),
        ("a", &params.a, a),
        ("b", &params.b, b),
        ("gx", &params.gx, gx),
        ("gy", &params.gy, gy),
    ];

    for (parameter, encoded, expected) in field_elements {
        check_round_trip(curve, parameter, encoded, &params.q, expected.mod_floor(&q))?;
    }

    check_round_trip(
        curve,
        "one_rr_mod_n",
        &params.one_rr_mod_n,
        &params.n,
        BigInt::from(one_mod_n),
    )?;

    debug!(
        bits = params.bits,
        q_rr = %format!("{:x}", params.q_rr),
        one_rr_mod_n = %format!("{:x}", params.one_rr_mod_n),
        "derived curve parameters"
    );

    Ok(params)
}

/// Decode `encoded` and compare it with `expected`.
///
/// `R` is only invertible modulo an odd modulus, so nothing is checked for an
/// even one.
fn check_round_trip(
    curve: &'static str,
    parameter: &'static str,
    encoded: &BigUint,
    modulus: &BigUint,
    expected: BigInt,
) -> Result<()> {
    if modulus.is_even() || BigInt::from(from_montgomery(encoded, modulus)?) == expected {
        Ok(())
    } else {
        Err(Error::FormulaMismatch { curve, parameter })
    }
}

/// Render `x` as `0x`-prefixed hexadecimal, split into comment lines of at
/// most [`WRAP_COLUMNS`] characters.
fn wrap_hex(x: &BigUint) -> String {
    let hex: Vec<char> = format!("{x:#x}").chars().collect();

    hex.chunks(WRAP_COLUMNS)
        .map(|line| line.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(WRAP_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_short_value() {
        assert_eq!(wrap_hex(&BigUint::from(0xabcdu32)), "0xabcd");
    }

    #[test]
    fn wrap_long_value() {
        let x = (BigUint::one() << 300u32) - 1u32;
        let wrapped = wrap_hex(&x);
        let lines: Vec<&str> = wrapped.split(WRAP_SEPARATOR).collect();

        // "0x" followed by 75 hex digits
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), WRAP_COLUMNS);
        assert_eq!(lines[1].len(), 77 - WRAP_COLUMNS);
        assert!(lines[0].starts_with("0xfff"));
    }

    #[test]
    fn round_trip_skipped_for_even_modulus() {
        let modulus = BigUint::from(1u32) << 256u32;
        let bogus = BigUint::from(12345u32);
        assert!(check_round_trip("even", "one", &bogus, &modulus, BigInt::one()).is_ok());
    }

    #[test]
    fn round_trip_mismatch_for_odd_modulus() {
        let modulus = BigUint::from(1_000_003u32);
        let encoded = to_montgomery(&BigInt::from(5), &modulus);
        assert!(matches!(
            check_round_trip("odd", "gx", &encoded, &modulus, BigInt::from(6)),
            Err(Error::FormulaMismatch {
                parameter: "gx",
                ..
            })
        ));
        assert!(check_round_trip("odd", "gx", &encoded, &modulus, BigInt::from(5)).is_ok());
    }

    #[test]
    fn identifier_and_file_name() {
        let params = crate::P384.validate().unwrap();
        assert_eq!(params.identifier(), "384");
        assert_eq!(params.file_name(), "p384.rs");
    }

    #[test]
    fn substitutions_cover_all_fields() {
        let subs = crate::P256.validate().unwrap().substitutions();
        assert_eq!(subs.len(), 16);
        assert_eq!(subs["bits"], "256");
        assert_eq!(subs["num_limbs"], "8");
        assert_eq!(subs["q_minus_n"], "4319055358e8617b0c46353d039cdaae");
        assert_eq!(subs["q_formula"], "2^256 - 2^224 + 2^192 + 2^96 - 1");
    }
}
