//! Parameter tables for MNT6-298.
//!
//! Field elements are canonical (non-Montgomery) little-endian 64-bit limbs.

/// Number of 64-bit limbs in a base field element
pub const MNT6_298_FQ_LIMBS: usize = 5;

/// Number of 64-bit limbs in a scalar field element
pub const MNT6_298_FR_LIMBS: usize = 5;

/// Base field modulus q
pub const MNT6_298_FQ_MODULUS: [u64; 5] = [
    0xbb43_34a4_0000_0001,
    0xfb49_4c07_925d_6ad3,
    0xcaee_c963_5cf4_4194,
    0xa266_249d_a7b0_548e,
    0x0000_03bc_f7bc_d473,
];

/// Quadratic non-residue in the base field (5)
pub const MNT6_298_FQ_NONRESIDUE: [u64; 5] = [
    0x0000_0000_0000_0005,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// Prime subgroup order r (the MNT4-298 base field modulus)
pub const MNT6_298_FR_MODULUS: [u64; 5] = [
    0xc90c_d65a_7166_0001,
    0x41a9_e35e_5120_0e12,
    0xcaee_c963_5d13_30ea,
    0xa266_249d_a7b0_548e,
    0x0000_03bc_f7bc_d473,
];

/// Quadratic non-residue in the scalar field (17)
pub const MNT6_298_FR_NONRESIDUE: [u64; 5] = [
    0x0000_0000_0000_0011,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// |t - 1|, the ate loop count
pub const MNT6_298_ATE_LOOP_COUNT: [u64; 3] = [0x0dc9_a1b6_7166_0000, 0x4660_9756_bec2_a33f, 0x0000_0000_001e_ef55];

/// Sign of t - 1
pub const MNT6_298_ATE_LOOP_COUNT_IS_NEGATIVE: bool = true;

/// |w0| in the hard part exponent `w1 q + w0`, w1 = 1
pub const MNT6_298_FINAL_EXPONENT_W0: [u64; 3] = [0x0dc9_a1b6_7166_0000, 0x4660_9756_bec2_a33f, 0x0000_0000_001e_ef55];

/// Sign of w0
pub const MNT6_298_FINAL_EXPONENT_W0_IS_NEGATIVE: bool = true;

/// G1 coefficient a
pub const MNT6_298_G1_COEFF_A: [u64; 5] = [
    0x0000_0000_0000_000b,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// G1 coefficient b
pub const MNT6_298_G1_COEFF_B: [u64; 5] = [
    0xdba5_9463_d0c6_5282,
    0x20b1_a2d2_63fd_e47d,
    0x3d6c_24e6_83fc_09b4,
    0xdd04_2e95_7b71_c44d,
    0x0000_00d6_8c7b_1dc5,
];

/// G1 generator x
pub const MNT6_298_G1_GENERATOR_X: [u64; 5] = [
    0xadeb_c01a_bbc0_447d,
    0xe0b4_c671_3925_84bd,
    0x61ed_56f9_bad7_9b57,
    0x2c69_d1d9_0471_b2ba,
    0x0000_02a4_feee_24fd,
];

/// G1 generator y
pub const MNT6_298_G1_GENERATOR_Y: [u64; 5] = [
    0x8a33_3d73_d91d_3028,
    0x5d71_e9c7_5e1b_9720,
    0xfd69_cbfc_bff0_7fc2,
    0xdb2f_82f4_e037_bf7a,
    0x0000_0329_86c2_45f6,
];

/// G2 coefficient a = a ξ^2, by coordinate
pub const MNT6_298_G2_COEFF_A: [[u64; 5]; 3] = [
    [
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
    ],
    [
        0x0000_0000_0000_000b,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
];

/// G2 coefficient b = b ξ^3, by coordinate
pub const MNT6_298_G2_COEFF_B: [[u64; 5]; 3] = [
    [
        0x8ef8_b14f_13df_9c89,
        0xa82e_e214_6198_0ba1,
        0x682d_ef1d_36f7_eeef,
        0xaeae_c44d_c188_80f3,
        0x0000_0073_c6aa_c069,
    ],
    [
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
    ],
];

/// G2 generator x, by coordinate
pub const MNT6_298_G2_GENERATOR_X: [[u64; 5]; 3] = [
    [
        0x44ad_7625_7e4c_6813,
        0xada7_404b_743a_d2e6,
        0x02cb_aa72_3cd6_0035,
        0x56ce_532b_ccb3_b449,
        0x0000_034f_7320_a12b,
    ],
    [
        0xa9b1_5cac_5a0c_80fa,
        0x40fe_c84f_1b28_90ab,
        0xb45f_6819_52e0_1093,
        0x52ee_c50e_61a7_0ab5,
        0x0000_00cf_4162_0baa,
    ],
    [
        0x0125_8391_bd49_17ce,
        0xf31b_056a_c767_e2cb,
        0xb480_07ca_3c4e_105c,
        0xe326_433c_ccb8_032f,
        0x0000_011f_9917_0e10,
    ],
];

/// G2 generator y, by coordinate
pub const MNT6_298_G2_GENERATOR_Y: [[u64; 5]; 3] = [
    [
        0x7a58_2c1b_60fe_cc91,
        0x8309_487c_0b83_e171,
        0x5e07_ebd3_8b36_3ec4,
        0xc64d_62ad_05c7_9c41,
        0x0000_03a6_5968_f03c,
    ],
    [
        0x2faa_5b2c_3768_5c6e,
        0x2dcb_0c71_17cc_7440,
        0x451a_b3ac_caea_5db8,
        0xdb15_06c1_a24c_efc2,
        0x0000_00ca_5e84_27e5,
    ],
    [
        0x7baf_782f_5c60_e7f7,
        0xbb71_5f64_7c2e_55a2,
        0x9a1b_3e19_7277_d83a,
        0x02c9_a4ef_9413_0762,
        0x0000_00f7_5d2d_d883,
    ],
];

/// Cubic non-residue defining Fq3 (5)
pub const MNT6_298_FQ3_NONRESIDUE: [u64; 5] = [
    0x0000_0000_0000_0005,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// `5^((q^k - 1) / 3)` for k = 0, 1, 2
pub const MNT6_298_FQ3_FROBENIUS_C1: [[u64; 5]; 3] = [
    [
        0x0000_0000_0000_0001,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
    [
        0xd3f6_8016_5534_4bec,
        0xb277_a6d0_5b75_068a,
        0x6820_4a98_4565_5f46,
        0x2e26_f0e8_34e1_5faf,
        0x0000_03b4_8e50_a166,
    ],
    [
        0xe74c_b48d_aacb_b414,
        0x48d1_a537_36e8_6448,
        0x62ce_7ecb_178e_e24e,
        0x743f_33b5_72ce_f4df,
        0x0000_0008_696c_330d,
    ],
];

/// `5^(2 (q^k - 1) / 3)` for k = 0, 1, 2
pub const MNT6_298_FQ3_FROBENIUS_C2: [[u64; 5]; 3] = [
    [
        0x0000_0000_0000_0001,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
    [
        0xe74c_b48d_aacb_b414,
        0x48d1_a537_36e8_6448,
        0x62ce_7ecb_178e_e24e,
        0x743f_33b5_72ce_f4df,
        0x0000_0008_696c_330d,
    ],
    [
        0xd3f6_8016_5534_4bec,
        0xb277_a6d0_5b75_068a,
        0x6820_4a98_4565_5f46,
        0x2e26_f0e8_34e1_5faf,
        0x0000_03b4_8e50_a166,
    ],
];

/// `5^((q^k - 1) / 6)` for k = 0..6
pub const MNT6_298_FQ6_FROBENIUS_C1: [[u64; 5]; 6] = [
    [
        0x0000_0000_0000_0001,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
    [
        0xd3f6_8016_5534_4bed,
        0xb277_a6d0_5b75_068a,
        0x6820_4a98_4565_5f46,
        0x2e26_f0e8_34e1_5faf,
        0x0000_03b4_8e50_a166,
    ],
    [
        0xd3f6_8016_5534_4bec,
        0xb277_a6d0_5b75_068a,
        0x6820_4a98_4565_5f46,
        0x2e26_f0e8_34e1_5faf,
        0x0000_03b4_8e50_a166,
    ],
    [
        0xbb43_34a4_0000_0000,
        0xfb49_4c07_925d_6ad3,
        0xcaee_c963_5cf4_4194,
        0xa266_249d_a7b0_548e,
        0x0000_03bc_f7bc_d473,
    ],
    [
        0xe74c_b48d_aacb_b414,
        0x48d1_a537_36e8_6448,
        0x62ce_7ecb_178e_e24e,
        0x743f_33b5_72ce_f4df,
        0x0000_0008_696c_330d,
    ],
    [
        0xe74c_b48d_aacb_b415,
        0x48d1_a537_36e8_6448,
        0x62ce_7ecb_178e_e24e,
        0x743f_33b5_72ce_f4df,
        0x0000_0008_696c_330d,
    ],
];
