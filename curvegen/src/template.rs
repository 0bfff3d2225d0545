//! Artifact template and `${name}` placeholder substitution.

use crate::{Error, Result};
use std::collections::BTreeMap;

/// Template for the operation tables of one curve.
///
/// Placeholders are written `${name}` and are filled from
/// [`GeneratedParameterSet::substitutions`](crate::GeneratedParameterSet::substitutions).
pub const CURVE_TEMPLATE: &str = r##"// This file was generated by `curvegen` from the description of ${name}.
// Do not edit it by hand.
//
// q = ${q_formula}
// n = ${n_formula}

use super::{elem::binary_op, *};

pub static COMMON_OPS: CommonOps = CommonOps {
    num_limbs: ${num_limbs},

    q: Modulus {
        p: limbs_from_hex("${q}"),
        rr: limbs_from_hex("${q_rr}"),
    },
    n: Elem::from_hex("${n}"),

    one: Elem::from_hex("${one}"),
    a: Elem::from_hex("${a}"),
    b: Elem::from_hex("${b}"),

    elem_mul_mont: p${bits}_elem_mul_mont,
    elem_sqr_mont: p${bits}_elem_sqr_mont,

    point_add_jacobian_impl: nistz${bits}_point_add,
};

pub static PRIVATE_KEY_OPS: PrivateKeyOps = PrivateKeyOps {
    common: &COMMON_OPS,
    elem_inv_squared: p${bits}_elem_inv_squared,
    point_mul_base_impl: p${bits}_point_mul_base_impl,
    point_mul_impl: nistz${bits}_point_mul,
};

fn p${bits}_point_mul_base_impl(a: &Scalar) -> Point {
    const GENERATOR: (Elem<R>, Elem<R>) = (
        Elem::from_hex("${gx}"),
        Elem::from_hex("${gy}"),
    );

    PRIVATE_KEY_OPS.point_mul(a, &GENERATOR)
}

pub static PUBLIC_KEY_OPS: PublicKeyOps = PublicKeyOps {
    common: &COMMON_OPS,
};

pub static SCALAR_OPS: ScalarOps = ScalarOps {
    common: &COMMON_OPS,
    scalar_inv_to_mont_impl: p${bits}_scalar_inv_to_mont,
    scalar_mul_mont: p${bits}_scalar_mul_mont,
};

pub static PUBLIC_SCALAR_OPS: PublicScalarOps = PublicScalarOps {
    scalar_ops: &SCALAR_OPS,
    public_key_ops: &PUBLIC_KEY_OPS,
    private_key_ops: &PRIVATE_KEY_OPS,

    q_minus_n: Elem::from_hex("${q_minus_n}"),
};

pub static PRIVATE_SCALAR_OPS: PrivateScalarOps = PrivateScalarOps {
    scalar_ops: &SCALAR_OPS,

    oneRR_mod_n: Scalar::from_hex("${one_rr_mod_n}"),
};

fn p${bits}_scalar_inv_to_mont(a: &Scalar<Unencoded>) -> Scalar<R> {
    // Scalar inversion uses Fermat's Little Theorem:
    //
    //    a**-1 (mod n) == a**(n - 2) (mod n)
    //
    // where n - 2 is:
    //
    //    ${n_minus_2}

    fn to_mont(a: &Scalar<Unencoded>) -> Scalar<R> {
        static N_RR: Scalar<Unencoded> = Scalar {
            limbs: PRIVATE_SCALAR_OPS.oneRR_mod_n.limbs,
            m: PhantomData,
            encoding: PhantomData,
        };
        binary_op(p${bits}_scalar_mul_mont, a, &N_RR)
    }

    let _a = to_mont(a);
    unimplemented!("addition chain for n - 2 on ${name}")
}

unsafe extern "C" fn p${bits}_elem_sqr_mont(
    r: *mut Limb,   // [COMMON_OPS.num_limbs]
    a: *const Limb, // [COMMON_OPS.num_limbs]
) {
    p${bits}_elem_mul_mont(r, a, a);
}

prefixed_extern! {
    fn p${bits}_elem_mul_mont(
        r: *mut Limb,   // [COMMON_OPS.num_limbs]
        a: *const Limb, // [COMMON_OPS.num_limbs]
        b: *const Limb, // [COMMON_OPS.num_limbs]
    );

    fn nistz${bits}_point_add(
        r: *mut Limb,   // [3][COMMON_OPS.num_limbs]
        a: *const Limb, // [3][COMMON_OPS.num_limbs]
        b: *const Limb, // [3][COMMON_OPS.num_limbs]
    );
    fn nistz${bits}_point_mul(
        r: *mut Limb,          // [3][COMMON_OPS.num_limbs]
        p_scalar: *const Limb, // [COMMON_OPS.num_limbs]
        p_x: *const Limb,      // [COMMON_OPS.num_limbs]
        p_y: *const Limb,      // [COMMON_OPS.num_limbs]
    );

    fn p${bits}_scalar_mul_mont(
        r: *mut Limb,   // [COMMON_OPS.num_limbs]
        a: *const Limb, // [COMMON_OPS.num_limbs]
        b: *const Limb, // [COMMON_OPS.num_limbs]
    );
}
"##;

/// Replace every `${name}` placeholder in `template` with its value.
///
/// A `$` which is not followed by `{` is copied as-is.
///
/// # Errors
///
/// - [`Error::MissingPlaceholder`] if a placeholder has no value
/// - [`Error::MalformedTemplate`] if a `${` is never closed
pub fn render<V: AsRef<str>>(template: &str, values: &BTreeMap<&str, V>) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);

        let name_start = start + 2;
        let name_len = rest[name_start..]
            .find('}')
            .ok_or(Error::MalformedTemplate {
                offset: offset + start,
            })?;
        let name = &rest[name_start..name_start + name_len];

        let value = values.get(name).ok_or_else(|| Error::MissingPlaceholder {
            name: name.to_owned(),
        })?;
        out.push_str(value.as_ref());

        let consumed = name_start + name_len + 1;
        rest = &rest[consumed..];
        offset += consumed;
    }

    out.push_str(rest);
    Ok(out)
}

/// Names of all placeholders referenced by `template`, in order of first
/// appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();

    for chunk in template.split("${").skip(1) {
        if let Some((name, _)) = chunk.split_once('}') {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> BTreeMap<&'static str, &'static str> {
        BTreeMap::from([("bits", "256"), ("q", "ffff")])
    }

    #[test]
    fn substitutes_every_occurrence() {
        let out = render("p${bits}_mul(${q}, ${bits})", &values()).unwrap();
        assert_eq!(out, "p256_mul(ffff, 256)");
    }

    #[test]
    fn passes_through_lone_dollar() {
        let out = render("$x ${q} $", &values()).unwrap();
        assert_eq!(out, "$x ffff $");
    }

    #[test]
    fn missing_placeholder_is_an_error() {
        match render("${bits} ${n}", &values()) {
            Err(Error::MissingPlaceholder { name }) => assert_eq!(name, "n"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unterminated_placeholder_is_an_error() {
        assert!(matches!(
            render("ok ${bits} ${q", &values()),
            Err(Error::MalformedTemplate { offset: 11 })
        ));
    }

    #[test]
    fn curve_template_placeholders() {
        let names = placeholders(CURVE_TEMPLATE);
        assert_eq!(
            names,
            [
                "name",
                "q_formula",
                "n_formula",
                "num_limbs",
                "q",
                "q_rr",
                "n",
                "one",
                "a",
                "b",
                "bits",
                "gx",
                "gy",
                "q_minus_n",
                "one_rr_mod_n",
                "n_minus_2",
            ]
        );
    }
}
