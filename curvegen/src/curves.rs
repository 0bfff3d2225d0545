//! Built-in curve descriptions.
//!
//! The curve parameters are from [NIST SP 800-186] § 3.2.1. The modulus and
//! order are given in closed form so that their special structure is evident,
//! and as the hexadecimal literals printed in the standard, so that
//! [`CurveSpec::validate`] can verify that the literals are correct.
//!
//! [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final

use crate::{CurveSpec, Formula, Term::*};

/// NIST P-256 (a.k.a. secp256r1, prime256v1).
pub const P256: CurveSpec = CurveSpec {
    name: "P-256",
    q_formula: Formula(&[AddPow2(256), SubPow2(224), AddPow2(192), AddPow2(96), SubPow2(0)]),
    q: "ffffffff_00000001_00000000_00000000_00000000_ffffffff_ffffffff_ffffffff",
    n_formula: Formula(&[
        AddPow2(256),
        SubPow2(224),
        AddPow2(192),
        SubPow2(128),
        AddHex("bce6faad_a7179e84_f3b9cac2_fc632551"),
    ]),
    n: "ffffffff_00000000_ffffffff_ffffffff_bce6faad_a7179e84_f3b9cac2_fc632551",
    a: -3,
    b: "5ac635d8_aa3a93e7_b3ebbd55_769886bc_651d06b0_cc53b0f6_3bce3c3e_27d2604b",
    gx: "6b17d1f2_e12c4247_f8bce6e5_63a440f2_77037d81_2deb33a0_f4a13945_d898c296",
    gy: "4fe342e2_fe1a7f9b_8ee7eb4a_7c0f9e16_2bce3357_6b315ece_cbb64068_37bf51f5",
    cofactor: 1,
};

/// NIST P-384 (a.k.a. secp384r1).
pub const P384: CurveSpec = CurveSpec {
    name: "P-384",
    q_formula: Formula(&[AddPow2(384), SubPow2(128), SubPow2(96), AddPow2(32), SubPow2(0)]),
    q: "ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_\
        ffffffff_fffffffe_ffffffff_00000000_00000000_ffffffff",
    n_formula: Formula(&[
        AddPow2(384),
        SubPow2(192),
        AddHex("c7634d81_f4372ddf_581a0db2_48b0a77a_ecec196a_ccc52973"),
    ]),
    n: "ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_\
        c7634d81_f4372ddf_581a0db2_48b0a77a_ecec196a_ccc52973",
    a: -3,
    b: "b3312fa7_e23ee7e4_988e056b_e3f82d19_181d9c6e_fe814112_\
        0314088f_5013875a_c656398d_8a2ed19d_2a85c8ed_d3ec2aef",
    gx: "aa87ca22_be8b0537_8eb1c71e_f320ad74_6e1d3b62_8ba79b98_\
         59f741e0_82542a38_5502f25d_bf55296c_3a545e38_72760ab7",
    gy: "3617de4a_96262c6f_5d9e98bf_9292dc29_f8f41dbd_289a147c_\
         e9da3113_b5f0b8c0_0a60b1ce_1d7e819d_7a431d7c_90ea0e5f",
    cofactor: 1,
};

/// NIST P-521 (a.k.a. secp521r1).
pub const P521: CurveSpec = CurveSpec {
    name: "P-521",
    q_formula: Formula(&[AddPow2(521), SubPow2(0)]),
    q: "1ff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_\
        ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff",
    n_formula: Formula(&[
        AddPow2(521),
        SubPow2(260),
        AddHex("a_51868783_bf2f966b_7fcc0148_f709a5d0_3bb5c9b8_899c47ae_bb6fb71e_91386409"),
    ]),
    n: "1ff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_fffffffa_\
        51868783_bf2f966b_7fcc0148_f709a5d0_3bb5c9b8_899c47ae_bb6fb71e_91386409",
    a: -3,
    b: "051_953eb961_8e1c9a1f_929a21a0_b68540ee_a2da725b_99b315f3_b8b48991_8ef109e1_\
        56193951_ec7e937b_1652c0bd_3bb1bf07_3573df88_3d2c34f1_ef451fd4_6b503f00",
    gx: "c6_858e06b7_0404e9cd_9e3ecb66_2395b442_9c648139_053fb521_f828af60_6b4d3dba_\
         a14b5e77_efe75928_fe1dc127_a2ffa8de_3348b3c1_856a429b_f97e7e31_c2e5bd66",
    gy: "118_39296a78_9a3bc004_5c8a5fb4_2c7d1bd9_98f54449_579b4468_17afbd17_273e662c_\
         97ee7299_5ef42640_c550b901_3fad0761_353c7086_a272c240_88be9476_9fd16650",
    cofactor: 1,
};

/// All built-in curves, smallest modulus first.
pub const CURVES: [CurveSpec; 3] = [P256, P384, P521];
