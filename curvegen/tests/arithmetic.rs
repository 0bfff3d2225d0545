//! Modular inversion and Montgomery conversion property tests.

use curvegen::{
    Error,
    arithmetic::{from_montgomery, limb_aligned_bits, mod_inverse, to_montgomery},
    num_bigint::{BigInt, BigUint},
};
use num_integer::Integer;
use num_traits::{One, Zero};
use proptest::prelude::*;

prop_compose! {
    fn uint()(bytes in any::<[u8; 40]>()) -> BigUint {
        BigUint::from_bytes_be(&bytes)
    }
}

prop_compose! {
    /// Modulus greater than one.
    fn modulus()(bytes in any::<[u8; 40]>()) -> BigUint {
        BigUint::from_bytes_be(&bytes) + 2u32
    }
}

prop_compose! {
    /// Odd modulus greater than one.
    fn odd_modulus()(m in modulus()) -> BigUint {
        m | BigUint::one()
    }
}

proptest! {
    #[test]
    fn inverse_of_unit(a in uint(), m in modulus()) {
        prop_assume!(a.gcd(&m).is_one());

        let inv = mod_inverse(&BigInt::from(a.clone()), &m).unwrap();
        prop_assert!(inv < m);
        prop_assert!(((&a * &inv) % &m).is_one());
    }

    #[test]
    fn inverse_of_negative_unit(a in uint(), m in modulus()) {
        prop_assume!(a.gcd(&m).is_one());

        let inv = mod_inverse(&-BigInt::from(a.clone()), &m).unwrap();
        prop_assert!(inv < m);
        prop_assert!(((&a * &inv + 1u32) % &m).is_zero());
    }

    #[test]
    fn inverse_of_non_unit(g in 2u64.., k in any::<u64>(), l in 1u64..) {
        let a = BigInt::from(g) * BigInt::from(k);
        let m = BigUint::from(g) * BigUint::from(l);

        prop_assert!(matches!(mod_inverse(&a, &m), Err(Error::NotInvertible)));
    }

    #[test]
    fn montgomery_is_linear(x in uint(), y in uint(), m in modulus()) {
        let sum = to_montgomery(&BigInt::from(&x + &y), &m);
        let x_mont = to_montgomery(&BigInt::from(x), &m);
        let y_mont = to_montgomery(&BigInt::from(y), &m);

        prop_assert_eq!(sum, (x_mont + y_mont) % &m);
    }

    #[test]
    fn montgomery_is_reduced(x in uint(), m in modulus()) {
        prop_assert!(to_montgomery(&BigInt::from(x.clone()), &m) < m);
        prop_assert!(to_montgomery(&-BigInt::from(x), &m) < m);
    }

    #[test]
    fn montgomery_round_trip(x in uint(), m in odd_modulus()) {
        let mont = to_montgomery(&BigInt::from(x.clone()), &m);

        // Multiplying by the inverse of R recovers x mod m.
        let r = BigInt::one() << limb_aligned_bits(&m);
        let r_inv = mod_inverse(&r, &m).unwrap();
        prop_assert_eq!((&mont * r_inv) % &m, &x % &m);

        prop_assert_eq!(from_montgomery(&mont, &m).unwrap(), &x % &m);
    }
}
