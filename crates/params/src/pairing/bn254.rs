//! Parameter tables for BN254 (alt_bn128).
//!
//! Field elements are canonical (non-Montgomery) little-endian 64-bit limbs.

/// Number of 64-bit limbs in a base field element
pub const BN254_FQ_LIMBS: usize = 4;

/// Number of 64-bit limbs in a scalar field element
pub const BN254_FR_LIMBS: usize = 4;

/// Base field modulus p
pub const BN254_FQ_MODULUS: [u64; 4] = [
    0x3c20_8c16_d87c_fd47,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// Quadratic non-residue in the base field (3)
pub const BN254_FQ_NONRESIDUE: [u64; 4] = [
    0x0000_0000_0000_0003,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// Prime subgroup order r
pub const BN254_FR_MODULUS: [u64; 4] = [
    0x43e1_f593_f000_0001,
    0x2833_e848_79b9_7091,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// Quadratic non-residue in the scalar field (5)
pub const BN254_FR_NONRESIDUE: [u64; 4] = [
    0x0000_0000_0000_0005,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// BN parameter u
pub const BN254_U: u64 = 0x44e9_92b4_4a69_09f1;

/// Ate loop count 6u + 2
pub const BN254_ATE_LOOP_COUNT: [u64; 2] = [0x9d79_7039_be76_3ba8, 0x0000_0000_0000_0001];

/// G1 curve coefficient b
pub const BN254_G1_COEFF_B: [u64; 4] = [
    0x0000_0000_0000_0003,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// G1 generator x
pub const BN254_G1_GENERATOR_X: [u64; 4] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// G1 generator y
pub const BN254_G1_GENERATOR_Y: [u64; 4] = [
    0x0000_0000_0000_0002,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// Twisted curve coefficient b'
pub const BN254_G2_COEFF_B: [[u64; 4]; 2] = [
    [
        0x3267_e6dc_24a1_38e5,
        0xb5b4_c5e5_59db_efa3,
        0x81be_1899_1be0_6ac3,
        0x2b14_9d40_ceb8_aaae,
    ],
    [
        0xe4a2_bd06_85c3_15d2,
        0xa74f_a084_e52d_1852,
        0xcd2c_afad_eed8_fdf4,
        0x0097_13b0_3af0_fed4,
    ],
];

/// G2 generator x
pub const BN254_G2_GENERATOR_X: [[u64; 4]; 2] = [
    [
        0x46de_bd5c_d992_f6ed,
        0x6743_22d4_f75e_dadd,
        0x426a_0066_5e5c_4479,
        0x1800_deef_121f_1e76,
    ],
    [
        0x97e4_85b7_aef3_12c2,
        0xf1aa_4933_35a9_e712,
        0x7260_bfb7_31fb_5d25,
        0x198e_9393_920d_483a,
    ],
];

/// G2 generator y
pub const BN254_G2_GENERATOR_Y: [[u64; 4]; 2] = [
    [
        0x4ce6_cc01_66fa_7daa,
        0xe3d1_e769_0c43_d37b,
        0x4aab_7180_8dcb_408f,
        0x12c8_5ea5_db8c_6deb,
    ],
    [
        0x55ac_dadc_d122_975b,
        0xbc4b_3133_70b3_8ef3,
        0xec9e_99ad_690c_3395,
        0x0906_89d0_585f_f075,
    ],
];

/// Fq2 = Fq[u]/(u^2 - beta): beta
pub const BN254_FQ2_NONRESIDUE: [u64; 4] = [
    0x3c20_8c16_d87c_fd46,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// Fq6 = Fq2[v]/(v^3 - xi): xi, also the twist element
pub const BN254_FQ6_NONRESIDUE: [[u64; 4]; 2] = [
    [
        0x0000_0000_0000_0009,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
    [
        0x0000_0000_0000_0001,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
];

/// beta^((p^i - 1)/2)
pub const BN254_FQ2_FROBENIUS_C1: [[u64; 4]; 2] = [
    [
        0x0000_0000_0000_0001,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
    [
        0x3c20_8c16_d87c_fd46,
        0x9781_6a91_6871_ca8d,
        0xb850_45b6_8181_585d,
        0x3064_4e72_e131_a029,
    ],
];

/// xi^((p^i - 1)/3)
pub const BN254_FQ6_FROBENIUS_C1: [[[u64; 4]; 2]; 6] = [
    [
        [
            0x0000_0000_0000_0001,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x99e3_9557_176f_553d,
            0xb78c_c310_c2c3_330c,
            0x4c0b_ec3c_f559_b143,
            0x2fb3_4798_4f79_11f7,
        ],
        [
            0x1665_d51c_640f_cba2,
            0x32ae_2a1d_0b7c_9dce,
            0x4ba4_cc8b_d75a_0794,
            0x16c9_e550_61eb_ae20,
        ],
    ],
    [
        [
            0xe4bd_44e5_607c_fd48,
            0xc28f_069f_bb96_6e3d,
            0x5e6d_d9e7_e0ac_ccb0,
            0x3064_4e72_e131_a029,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x7b74_6ee8_7bdc_fb6d,
            0x805f_fd3d_5d69_42d3,
            0xbaff_1c77_959f_25ac,
            0x0856_e078_b755_ef0a,
        ],
        [
            0x380c_ab2b_aaa5_86de,
            0x0fdf_31bf_98ff_2631,
            0xa9f3_0e6d_ec26_094f,
            0x04f1_de41_b3d1_766f,
        ],
    ],
    [
        [
            0x5763_4731_77ff_fffe,
            0xd4f2_63f1_acdb_5c4f,
            0x59e2_6bce_a0d4_8bac,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x62e9_13ee_1dad_a9e4,
            0xf716_14d4_b0b7_1f3a,
            0x6995_82b8_7809_d9ca,
            0x28be_74d4_bb94_3f51,
        ],
        [
            0xedae_0bce_c9c7_aac7,
            0x54f4_0eb4_c3f6_068d,
            0xc2b8_6abc_be01_477a,
            0x14a8_8ae0_cb74_7b99,
        ],
    ],
];

/// xi^(2(p^i - 1)/3)
pub const BN254_FQ6_FROBENIUS_C2: [[[u64; 4]; 2]; 6] = [
    [
        [
            0x0000_0000_0000_0001,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x848a_1f55_921e_a762,
            0xd333_65f7_be94_ec72,
            0x80f3_c0b7_5a18_1e84,
            0x05b5_4f5e_64ee_a801,
        ],
        [
            0xc13b_4711_cd2b_8126,
            0x3685_d2ea_1bde_c763,
            0x9f3a_80b0_3b0b_1c92,
            0x2c14_5edb_e7fd_8aee,
        ],
    ],
    [
        [
            0x5763_4731_77ff_fffe,
            0xd4f2_63f1_acdb_5c4f,
            0x59e2_6bce_a0d4_8bac,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x0e1a_92bc_3ccb_f066,
            0xe633_0945_75b0_6bcb,
            0x19be_e0f7_b5b2_444e,
            0x0bc5_8c66_11c0_8dab,
        ],
        [
            0x5fe3_ed9d_730c_239f,
            0xa44a_9e08_737f_96e5,
            0xfeb0_f6ef_0cd2_1d04,
            0x23d5_e999_e191_0a12,
        ],
    ],
    [
        [
            0xe4bd_44e5_607c_fd48,
            0xc28f_069f_bb96_6e3d,
            0x5e6d_d9e7_e0ac_ccb0,
            0x3064_4e72_e131_a029,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0xa97b_da05_0992_657f,
            0xde1a_fb54_342c_724f,
            0x1d9d_a407_71b6_f589,
            0x1ee9_72ae_6a82_6a7d,
        ],
        [
            0x5721_e37e_70c2_55c9,
            0x5432_6430_4185_36d1,
            0xd2b5_13cd_bb25_7724,
            0x10de_546f_f8d4_ab51,
        ],
    ],
];

/// xi^((p^i - 1)/6)
pub const BN254_FQ12_FROBENIUS_C1: [[[u64; 4]; 2]; 12] = [
    [
        [
            0x0000_0000_0000_0001,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0xd60b_35da_dcc9_e470,
            0x5c52_1e08_292f_2176,
            0xe8b9_9fdd_76e6_8b60,
            0x1284_b71c_2865_a7df,
        ],
        [
            0xca5c_f05f_80f3_62ac,
            0x7479_9277_8eee_c7e5,
            0xa632_7cfe_1215_0b8e,
            0x2469_96f3_b4fa_e7e6,
        ],
    ],
    [
        [
            0xe4bd_44e5_607c_fd49,
            0xc28f_069f_bb96_6e3d,
            0x5e6d_d9e7_e0ac_ccb0,
            0x3064_4e72_e131_a029,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0xe86f_7d39_1ed4_a67f,
            0x894c_b38d_be55_d24a,
            0xefe9_608c_d0ac_aa90,
            0x19dc_81cf_cc82_e4bb,
        ],
        [
            0x7694_aa2b_f4c0_c101,
            0x7f03_a5e3_97d4_39ec,
            0x06cb_eee3_3576_139d,
            0x00ab_f8b6_0be7_7d73,
        ],
    ],
    [
        [
            0xe4bd_44e5_607c_fd48,
            0xc28f_069f_bb96_6e3d,
            0x5e6d_d9e7_e0ac_ccb0,
            0x3064_4e72_e131_a029,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x1264_475e_420a_c20f,
            0x2cfa_9585_9526_b0d4,
            0x072f_c0af_59c6_1f30,
            0x0757_cab3_a41d_3cdc,
        ],
        [
            0xe858_45e3_4c4a_5b9c,
            0xa20b_7dfd_7157_3c93,
            0x18e9_b79b_a4e2_606c,
            0x0ca6_b035_381e_35b6,
        ],
    ],
    [
        [
            0x3c20_8c16_d87c_fd46,
            0x9781_6a91_6871_ca8d,
            0xb850_45b6_8181_585d,
            0x3064_4e72_e131_a029,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x6615_563b_fbb3_18d7,
            0x3b2f_4c89_3f42_a916,
            0xcf96_a5d9_0a9a_ccfd,
            0x1ddf_9756_b8cb_f849,
        ],
        [
            0x71c3_9bb7_5789_9a9b,
            0x2307_d819_d983_02a7,
            0x121d_c8b8_6f6c_4ccf,
            0x0bfa_b77f_2c36_b843,
        ],
    ],
    [
        [
            0x5763_4731_77ff_fffe,
            0xd4f2_63f1_acdb_5c4f,
            0x59e2_6bce_a0d4_8bac,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x53b1_0edd_b9a8_56c8,
            0x0e34_b703_aa1b_f842,
            0xc866_e529_b0d4_adcd,
            0x1687_cca3_14ae_bb6d,
        ],
        [
            0xc58b_e1ea_e3bc_3c46,
            0x187d_c4ad_d09d_90a0,
            0xb184_56d3_4c0b_44c0,
            0x2fb8_55bc_d54a_22b6,
        ],
    ],
    [
        [
            0x5763_4731_77ff_ffff,
            0xd4f2_63f1_acdb_5c4f,
            0x59e2_6bce_a0d4_8bac,
            0x0000_0000_0000_0000,
        ],
        [
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ],
    ],
    [
        [
            0x29bc_44b8_9672_3b38,
            0x6a86_d50b_d34b_19b9,
            0xb120_8507_27bb_392d,
            0x290c_83bf_3d14_634d,
        ],
        [
            0x53c8_4633_8c32_a1ab,
            0xf575_ec93_f71a_8df9,
            0x9f66_8e1a_dc9e_f7f0,
            0x23bd_9e3d_a913_6a73,
        ],
    ],
];

/// Frobenius twist coefficient applied to x by mul_by_q
pub const BN254_TWIST_MUL_BY_Q_X: [[u64; 4]; 2] = [
    [
        0x99e3_9557_176f_553d,
        0xb78c_c310_c2c3_330c,
        0x4c0b_ec3c_f559_b143,
        0x2fb3_4798_4f79_11f7,
    ],
    [
        0x1665_d51c_640f_cba2,
        0x32ae_2a1d_0b7c_9dce,
        0x4ba4_cc8b_d75a_0794,
        0x16c9_e550_61eb_ae20,
    ],
];

/// Frobenius twist coefficient applied to y by mul_by_q
pub const BN254_TWIST_MUL_BY_Q_Y: [[u64; 4]; 2] = [
    [
        0xdc54_0146_71a0_135a,
        0xdbaa_e0ed_a9c9_5998,
        0xdc5e_c698_b6e2_f9b9,
        0x063c_f305_489a_f5dc,
    ],
    [
        0x82d3_7f63_2623_b0e3,
        0x2180_7dc9_8fa2_5bd2,
        0x0704_b5a7_ec79_6f2b,
        0x07c0_3cbc_ac41_049a,
    ],
];
