//! Parameter tables for MNT4-298.
//!
//! Field elements are canonical (non-Montgomery) little-endian 64-bit limbs.

/// Number of 64-bit limbs in a base field element
pub const MNT4_298_FQ_LIMBS: usize = 5;

/// Number of 64-bit limbs in a scalar field element
pub const MNT4_298_FR_LIMBS: usize = 5;

/// Base field modulus q
pub const MNT4_298_FQ_MODULUS: [u64; 5] = [
    0xc90c_d65a_7166_0001,
    0x41a9_e35e_5120_0e12,
    0xcaee_c963_5d13_30ea,
    0xa266_249d_a7b0_548e,
    0x0000_03bc_f7bc_d473,
];

/// Quadratic non-residue in the base field (17)
pub const MNT4_298_FQ_NONRESIDUE: [u64; 5] = [
    0x0000_0000_0000_0011,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// Prime subgroup order r (the MNT6-298 base field modulus)
pub const MNT4_298_FR_MODULUS: [u64; 5] = [
    0xbb43_34a4_0000_0001,
    0xfb49_4c07_925d_6ad3,
    0xcaee_c963_5cf4_4194,
    0xa266_249d_a7b0_548e,
    0x0000_03bc_f7bc_d473,
];

/// Quadratic non-residue in the scalar field (5)
pub const MNT4_298_FR_NONRESIDUE: [u64; 5] = [
    0x0000_0000_0000_0005,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// |t - 1|, the ate loop count
pub const MNT4_298_ATE_LOOP_COUNT: [u64; 3] = [0x0dc9_a1b6_7166_0000, 0x4660_9756_bec2_a33f, 0x0000_0000_001e_ef55];

/// Sign of t - 1
pub const MNT4_298_ATE_LOOP_COUNT_IS_NEGATIVE: bool = false;

/// |w0| in the hard part exponent `w1 q + w0`, w1 = 1
pub const MNT4_298_FINAL_EXPONENT_W0: [u64; 3] = [0x0dc9_a1b6_7166_0001, 0x4660_9756_bec2_a33f, 0x0000_0000_001e_ef55];

/// Sign of w0
pub const MNT4_298_FINAL_EXPONENT_W0_IS_NEGATIVE: bool = false;

/// G1 coefficient a
pub const MNT4_298_G1_COEFF_A: [u64; 5] = [
    0x0000_0000_0000_0002,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// G1 coefficient b
pub const MNT4_298_G1_COEFF_B: [u64; 5] = [
    0x5d4b_0ef5_28ec_0fd5,
    0x7b98_0f4e_9cd2_1a51,
    0xc3ed_d2a2_070a_085c,
    0x1558_5ea4_d523_234f,
    0x0000_0354_5a27_6394,
];

/// G1 generator x
pub const MNT4_298_G1_GENERATOR_X: [u64; 5] = [
    0xa216_b5b9_c8d2_af46,
    0x60c4_0794_92b9_48de,
    0xaee8_6aba_8f73_d690,
    0xba85_213f_e6ca_3875,
    0x0000_007a_2caf_82a1,
];

/// G1 generator y
pub const MNT4_298_G1_GENERATOR_Y: [u64; 5] = [
    0x9cba_48e7_10a4_8ab2,
    0x6778_c1af_d96a_71e2,
    0x89d0_148d_cc98_62d3,
    0x8267_2f7f_159f_ec2e,
    0x0000_02db_6194_61cc,
];

/// G2 coefficient a = a ξ^2, by coordinate
pub const MNT4_298_G2_COEFF_A: [[u64; 5]; 2] = [
    [
        0x0000_0000_0000_0022,
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

/// G2 coefficient b = b ξ^3, by coordinate
pub const MNT4_298_G2_COEFF_B: [[u64; 5]; 2] = [
    [
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
    [
        0x6a3b_6efb_12b3_0d16,
        0x5c24_b1b1_a912_ec4d,
        0x1ecd_2ff0_038a_b06a,
        0xe6e2_23b5_5400_63ee,
        0x0000_0087_788d_2a0e,
    ],
];

/// G2 generator x, by coordinate
pub const MNT4_298_G2_GENERATOR_X: [[u64; 5]; 2] = [
    [
        0xba79_03df_6c09_a9a4,
        0x2cb1_4f01_a931_e72d,
        0x9001_f205_151e_12a7,
        0x6605_71ff_542f_2ef8,
        0x0000_0371_7804_91c5,
    ],
    [
        0x968b_e32c_0ae0_a989,
        0x0330_2bb6_c02c_712c,
        0x697c_851f_002f_5763,
        0xda16_5def_8380_81af,
        0x0000_004b_a59a_3f72,
    ],
];

/// G2 generator y, by coordinate
pub const MNT4_298_G2_GENERATOR_Y: [[u64; 5]; 2] = [
    [
        0x0d95_22bc_a4e7_9f22,
        0xec98_f0f6_10a5_aafd,
        0xd31e_5c4b_3b2e_0b60,
        0xaad8_68a1_c47d_6605,
        0x0000_004b_471f_33ff,
    ],
    [
        0x84fb_61a3_cbf0_e0f1,
        0x3b51_68ed_8d75_c7c4,
        0xcb7d_982f_78ec_9cfc,
        0xa503_1f3f_81a5_c100,
        0x0000_0355_d05a_1c69,
    ],
];

/// Quadratic non-residue defining Fq2 (17)
pub const MNT4_298_FQ2_NONRESIDUE: [u64; 5] = [
    0x0000_0000_0000_0011,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// `17^((q^k - 1) / 2)` for k = 0, 1
pub const MNT4_298_FQ2_FROBENIUS_C1: [[u64; 5]; 2] = [
    [
        0x0000_0000_0000_0001,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
    [
        0xc90c_d65a_7166_0000,
        0x41a9_e35e_5120_0e12,
        0xcaee_c963_5d13_30ea,
        0xa266_249d_a7b0_548e,
        0x0000_03bc_f7bc_d473,
    ],
];

/// `17^((q^k - 1) / 4)` for k = 0..4
pub const MNT4_298_FQ4_FROBENIUS_C1: [[u64; 5]; 4] = [
    [
        0x0000_0000_0000_0001,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
    [
        0x94dd_5d7d_ef69_80c4,
        0x8cd9_fae5_c1f7_bdcf,
        0x8d53_4beb_17da_f751,
        0x9916_dfdc_c2fd_1f96,
        0x0000_000f_7377_9fe0,
    ],
    [
        0xc90c_d65a_7166_0000,
        0x41a9_e35e_5120_0e12,
        0xcaee_c963_5d13_30ea,
        0xa266_249d_a7b0_548e,
        0x0000_03bc_f7bc_d473,
    ],
    [
        0x342f_78dc_81fc_7f3d,
        0xb4cf_e878_8f28_5043,
        0x3d9b_7d78_4538_3998,
        0x094f_44c0_e4b3_34f8,
        0x0000_03ad_8445_3493,
    ],
];
