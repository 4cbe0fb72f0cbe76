//! Parameter tables for BLS12-377.
//!
//! Field elements are canonical (non-Montgomery) little-endian 64-bit limbs.

/// Number of 64-bit limbs in a base field element
pub const BLS12_377_FQ_LIMBS: usize = 6;

/// Number of 64-bit limbs in a scalar field element
pub const BLS12_377_FR_LIMBS: usize = 4;

/// Base field modulus p
pub const BLS12_377_FQ_MODULUS: [u64; 6] = [
    0x8508_c000_0000_0001,
    0x170b_5d44_3000_0000,
    0x1ef3_622f_ba09_4800,
    0x1a22_d9f3_00f5_138f,
    0xc63b_05c0_6ca1_493b,
    0x01ae_3a46_17c5_10ea,
];

/// Quadratic non-residue in the base field (5)
pub const BLS12_377_FQ_NONRESIDUE: [u64; 6] = [
    0x0000_0000_0000_0005,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// Prime subgroup order r
pub const BLS12_377_FR_MODULUS: [u64; 4] = [
    0x0a11_8000_0000_0001,
    0x59aa_76fe_d000_0001,
    0x60b4_4d1e_5c37_b001,
    0x12ab_655e_9a2c_a556,
];

/// Quadratic non-residue in the scalar field (11)
pub const BLS12_377_FR_NONRESIDUE: [u64; 4] = [
    0x0000_0000_0000_000b,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// BLS parameter x
pub const BLS12_377_X: u64 = 0x8508_c000_0000_0001;

/// Sign of the BLS parameter x
pub const BLS12_377_X_IS_NEGATIVE: bool = false;

/// G1 curve coefficient b
pub const BLS12_377_G1_COEFF_B: [u64; 6] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// G1 generator x
pub const BLS12_377_G1_GENERATOR_X: [u64; 6] = [
    0xeab9_b16e_b21b_e9ef,
    0xd548_1512_ffcd_394e,
    0x1882_82c8_bd37_cb5c,
    0x8595_1e2c_aa9d_41bb,
    0xc8fc_6225_bf87_ff54,
    0x0088_48de_fe74_0a67,
];

/// G1 generator y
pub const BLS12_377_G1_GENERATOR_Y: [u64; 6] = [
    0xfd82_de55_559c_8ea6,
    0xc2fe_3d36_34a9_591a,
    0x6d18_2ad4_4fb8_2305,
    0xbd7f_b348_ca3e_52d9,
    0x1f67_4f5d_30af_eec4,
    0x0191_4a69_c510_2eff,
];

/// Twisted curve coefficient b'
pub const BLS12_377_G2_COEFF_B: [[u64; 6]; 2] = [
    [
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
    [
        0x1c9e_d999_9999_999a,
        0x0dd3_9e5c_1ccc_cccd,
        0x1292_07b6_3c6b_f800,
        0xdc7b_4f91_cd5f_d889,
        0x43bd_0373_7460_c589,
        0x0102_22f6_db0f_d6f3,
    ],
];

/// G2 generator x
pub const BLS12_377_G2_GENERATOR_X: [[u64; 6]; 2] = [
    [
        0x74e3_e48f_7c00_5196,
        0x7188_9f52_bb53_5402,
        0x7ea5_01f5_57db_6b9b,
        0xc565_f071_203e_5031,
        0xc896_30a2_a384_1d01,
        0x0184_80be_71c7_85fe,
    ],
    [
        0xb26b_fefa_6ea1_6afe,
        0x5cf8_9984_bff7_6fe6,
        0xe722_3ece_0799_c9de,
        0x5327_77ee_6651_cecb,
        0x70dc_5a51_b1b1_40d5,
        0x00ea_6040_e700_4031,
    ],
];

/// G2 generator y
pub const BLS12_377_G2_GENERATOR_Y: [[u64; 6]; 2] = [
    [
        0xf094_0944_09fd_4ddf,
        0xf2cf_8888_6d8c_7c2e,
        0xe458_c282_f832_d204,
        0xde03_ed72_74b4_9a58,
        0xd960_736b_cbb2_efb4,
        0x0069_0d66_5d44_6f7b,
    ],
    [
        0xd9a1_cdd1_85eb_8f93,
        0x4279_b83f_5e52_270b,
        0x2463_b01a_cee3_04c2,
        0x61ef_11ac_3d59_1bf1,
        0x9e54_9da3_151a_70aa,
        0x00f8_169f_d283_5518,
    ],
];

/// Fq2 = Fq[u]/(u^2 - beta): beta
pub const BLS12_377_FQ2_NONRESIDUE: [u64; 6] = [
    0x8508_bfff_ffff_fffc,
    0x170b_5d44_3000_0000,
    0x1ef3_622f_ba09_4800,
    0x1a22_d9f3_00f5_138f,
    0xc63b_05c0_6ca1_493b,
    0x01ae_3a46_17c5_10ea,
];

/// Fq6 = Fq2[v]/(v^3 - xi): xi, also the twist element
pub const BLS12_377_FQ6_NONRESIDUE: [[u64; 6]; 2] = [
    [
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
    [
        0x0000_0000_0000_0001,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
];

/// beta^((p^i - 1)/2)
pub const BLS12_377_FQ2_FROBENIUS_C1: [[u64; 6]; 2] = [
    [
        0x0000_0000_0000_0001,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
    [
        0x8508_c000_0000_0000,
        0x170b_5d44_3000_0000,
        0x1ef3_622f_ba09_4800,
        0x1a22_d9f3_00f5_138f,
        0xc63b_05c0_6ca1_493b,
        0x01ae_3a46_17c5_10ea,
    ],
];

/// xi^((p^i - 1)/3)
pub const BLS12_377_FQ6_FROBENIUS_C1: [[[u64; 6]; 2]; 6] = [
    [
        [
            0x0000_0000_0000_0001,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x8508_c000_0000_0002,
            0x4522_17cc_9000_0000,
            0xc5ed_1347_970d_ec00,
            0x619a_af7d_3459_4aab,
            0x09b3_af05_dd14_f6ec,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x8508_c000_0000_0001,
            0x4522_17cc_9000_0000,
            0xc5ed_1347_970d_ec00,
            0x619a_af7d_3459_4aab,
            0x09b3_af05_dd14_f6ec,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x8508_c000_0000_0000,
            0x170b_5d44_3000_0000,
            0x1ef3_622f_ba09_4800,
            0x1a22_d9f3_00f5_138f,
            0xc63b_05c0_6ca1_493b,
            0x01ae_3a46_17c5_10ea,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0xffff_ffff_ffff_ffff,
            0xd1e9_4577_9fff_ffff,
            0x5906_4ee8_22fb_5bff,
            0xb888_2a75_cc9b_c8e3,
            0xbc87_56ba_8f8c_524e,
            0x01ae_3a46_17c5_10ea,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x0000_0000_0000_0000,
            0xd1e9_4577_a000_0000,
            0x5906_4ee8_22fb_5bff,
            0xb888_2a75_cc9b_c8e3,
            0xbc87_56ba_8f8c_524e,
            0x01ae_3a46_17c5_10ea,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
];

/// xi^(2(p^i - 1)/3)
pub const BLS12_377_FQ6_FROBENIUS_C2: [[[u64; 6]; 2]; 6] = [
    [
        [
            0x0000_0000_0000_0001,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x8508_c000_0000_0001,
            0x4522_17cc_9000_0000,
            0xc5ed_1347_970d_ec00,
            0x619a_af7d_3459_4aab,
            0x09b3_af05_dd14_f6ec,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0xffff_ffff_ffff_ffff,
            0xd1e9_4577_9fff_ffff,
            0x5906_4ee8_22fb_5bff,
            0xb888_2a75_cc9b_c8e3,
            0xbc87_56ba_8f8c_524e,
            0x01ae_3a46_17c5_10ea,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x0000_0000_0000_0001,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x8508_c000_0000_0001,
            0x4522_17cc_9000_0000,
            0xc5ed_1347_970d_ec00,
            0x619a_af7d_3459_4aab,
            0x09b3_af05_dd14_f6ec,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0xffff_ffff_ffff_ffff,
            0xd1e9_4577_9fff_ffff,
            0x5906_4ee8_22fb_5bff,
            0xb888_2a75_cc9b_c8e3,
            0xbc87_56ba_8f8c_524e,
            0x01ae_3a46_17c5_10ea,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
];

/// xi^((p^i - 1)/6)
pub const BLS12_377_FQ12_FROBENIUS_C1: [[[u64; 6]; 2]; 12] = [
    [
        [
            0x0000_0000_0000_0001,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0xe938_a9d1_104f_2031,
            0xb576_68e5_58eb_0188,
            0xc681_bf34_a3aa_559d,
            0x5c8a_45e0_f94e_bc8e,
            0x33c1_e306_8256_7f91,
            0x009a_9975_399c_0196,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x8508_c000_0000_0002,
            0x4522_17cc_9000_0000,
            0xc5ed_1347_970d_ec00,
            0x619a_af7d_3459_4aab,
            0x09b3_af05_dd14_f6ec,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x6e76_d5ec_f139_1c63,
            0x9958_8459_bff2_7d8e,
            0xbce6_49cf_436b_0f62,
            0x4003_98f5_0ad1_dec1,
            0xc0c5_34db_1a79_beb1,
            0x0168_0a40_7965_37ca,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x8508_c000_0000_0001,
            0x4522_17cc_9000_0000,
            0xc5ed_1347_970d_ec00,
            0x619a_af7d_3459_4aab,
            0x09b3_af05_dd14_f6ec,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x853e_2c1b_e0e9_fc32,
            0xe3e2_1b74_6707_7c05,
            0xf664_8a9a_9fc0_b9c4,
            0xe379_5314_1183_2232,
            0x8d03_51d4_9823_3f1f,
            0x00cd_70cb_3fc9_3634,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x8508_c000_0000_0000,
            0x170b_5d44_3000_0000,
            0x1ef3_622f_ba09_4800,
            0x1a22_d9f3_00f5_138f,
            0xc63b_05c0_6ca1_493b,
            0x01ae_3a46_17c5_10ea,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x9bd0_162e_efb0_dfd0,
            0x6194_f45e_d714_fe77,
            0x5871_a2fb_165e_f262,
            0xbd98_9412_07a6_5700,
            0x9279_22b9_ea4a_c9a9,
            0x0113_a0d0_de29_0f54,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0xffff_ffff_ffff_ffff,
            0xd1e9_4577_9fff_ffff,
            0x5906_4ee8_22fb_5bff,
            0xb888_2a75_cc9b_c8e3,
            0xbc87_56ba_8f8c_524e,
            0x01ae_3a46_17c5_10ea,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x1691_ea13_0ec6_e39e,
            0x7db2_d8ea_700d_8272,
            0x620d_1860_769e_389d,
            0xda1f_40fd_f623_34cd,
            0x0575_d0e5_5227_8a89,
            0x0046_3005_9e5f_d920,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x0000_0000_0000_0000,
            0xd1e9_4577_a000_0000,
            0x5906_4ee8_22fb_5bff,
            0xb888_2a75_cc9b_c8e3,
            0xbc87_56ba_8f8c_524e,
            0x01ae_3a46_17c5_10ea,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0xffca_93e4_1f16_03cf,
            0x3329_41cf_c8f8_83fa,
            0x288e_d795_1a48_8e3b,
            0x36a9_86de_ef71_f15c,
            0x3937_b3eb_d47e_0a1b,
            0x00e0_c97a_d7fb_dab6,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
];

/// Frobenius twist coefficient applied to x by mul_by_q
pub const BLS12_377_TWIST_MUL_BY_Q_X: [[u64; 6]; 2] = [
    [
        0x8508_c000_0000_0002,
        0x4522_17cc_9000_0000,
        0xc5ed_1347_970d_ec00,
        0x619a_af7d_3459_4aab,
        0x09b3_af05_dd14_f6ec,
        0x0000_0000_0000_0000,
    ],
    [
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
];

/// Frobenius twist coefficient applied to y by mul_by_q
pub const BLS12_377_TWIST_MUL_BY_Q_Y: [[u64; 6]; 2] = [
    [
        0x6e76_d5ec_f139_1c63,
        0x9958_8459_bff2_7d8e,
        0xbce6_49cf_436b_0f62,
        0x4003_98f5_0ad1_dec1,
        0xc0c5_34db_1a79_beb1,
        0x0168_0a40_7965_37ca,
    ],
    [
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
];
