//! Parameter tables for BW6-761.
//!
//! Field elements are canonical (non-Montgomery) little-endian 64-bit limbs.

/// Number of 64-bit limbs in a base field element
pub const BW6_761_FQ_LIMBS: usize = 12;

/// Number of 64-bit limbs in a scalar field element
pub const BW6_761_FR_LIMBS: usize = 6;

/// Base field modulus p
pub const BW6_761_FQ_MODULUS: [u64; 12] = [
    0xf49d_0000_0000_008b,
    0xe691_3e68_7000_0082,
    0x160c_f8ae_eaf0_a437,
    0x98a1_16c2_5667_a8f8,
    0x71dc_d3dc_73eb_ff2e,
    0x8689_c8ed_12f9_fd90,
    0x03ce_baff_25b4_2304,
    0x707b_a638_e584_e919,
    0x5282_75ef_8087_be41,
    0xb926_186a_81d1_4688,
    0xd187_c940_04fa_ff3e,
    0x0122_e824_fb83_ce0a,
];

/// Quadratic non-residue in the base field (2)
pub const BW6_761_FQ_NONRESIDUE: [u64; 12] = [
    0x0000_0000_0000_0002,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// Prime subgroup order r (the BLS12-377 base field modulus)
pub const BW6_761_FR_MODULUS: [u64; 6] = [
    0x8508_c000_0000_0001,
    0x170b_5d44_3000_0000,
    0x1ef3_622f_ba09_4800,
    0x1a22_d9f3_00f5_138f,
    0xc63b_05c0_6ca1_493b,
    0x01ae_3a46_17c5_10ea,
];

/// Quadratic non-residue in the scalar field (5)
pub const BW6_761_FR_NONRESIDUE: [u64; 6] = [
    0x0000_0000_0000_0005,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// Seed u shared with BLS12-377
pub const BW6_761_X: u64 = 0x8508_c000_0000_0001;

/// Sign of the seed
pub const BW6_761_X_IS_NEGATIVE: bool = false;

/// First ate loop count u + 1
pub const BW6_761_ATE_LOOP_COUNT_1: [u64; 1] = [0x8508_c000_0000_0002];

/// Sign of the first loop count
pub const BW6_761_ATE_LOOP_COUNT_1_IS_NEGATIVE: bool = false;

/// Second ate loop count u^3 - u^2 - u
pub const BW6_761_ATE_LOOP_COUNT_2: [u64; 3] = [0xffff_ffff_ffff_ffff, 0x8a44_2f99_1fff_ffff, 0x23ed_1347_970d_ec00];

/// Sign of the second loop count
pub const BW6_761_ATE_LOOP_COUNT_2_IS_NEGATIVE: bool = false;

/// Coefficients (ascending powers of u) of R0 in the hard part f^R0(u) * (f^p)^R1(u)
pub const BW6_761_HARD_PART_R0: [i16; 8] = [-220, -263, -73, -314, -197, 269, 70, -103];

/// Coefficients (ascending powers of u) of R1 in the hard part f^R0(u) * (f^p)^R1(u)
pub const BW6_761_HARD_PART_R1: [i16; 10] = [229, 34, -181, 452, -65, -445, 492, 77, -276, 103];

/// G1 curve coefficient b (-1)
pub const BW6_761_G1_COEFF_B: [u64; 12] = [
    0xf49d_0000_0000_008a,
    0xe691_3e68_7000_0082,
    0x160c_f8ae_eaf0_a437,
    0x98a1_16c2_5667_a8f8,
    0x71dc_d3dc_73eb_ff2e,
    0x8689_c8ed_12f9_fd90,
    0x03ce_baff_25b4_2304,
    0x707b_a638_e584_e919,
    0x5282_75ef_8087_be41,
    0xb926_186a_81d1_4688,
    0xd187_c940_04fa_ff3e,
    0x0122_e824_fb83_ce0a,
];

/// G1 generator x
pub const BW6_761_G1_GENERATOR_X: [u64; 12] = [
    0x4088_f3af_66e5_b43d,
    0x0559_28ac_a6af_603f,
    0x6750_dd03_5613_3e82,
    0x0375_8f9a_280c_a27f,
    0x5bd7_1fa0_c9ea_0971,
    0xa17a_54ce_4772_9b90,
    0x11db_fcd2_94c2_e746,
    0x7901_7ffa_c155_20ac,
    0xee05_c54b_85f5_6fc7,
    0xe6a0_cfb7_551b_27f0,
    0xb277_ce98_a477_beae,
    0x0107_5b02_0ea1_90c8,
];

/// G1 generator y
pub const BW6_761_G1_GENERATOR_Y: [u64; 12] = [
    0xbafc_8f2d_b4e9_5363,
    0xad1c_b2be_0b20_d2a1,
    0xb2b0_8119_cad0_fb93,
    0x9f9d_f141_b305_3253,
    0xbe3f_b90b_6fc2_cdd4,
    0xcc68_5d31_717a_4c55,
    0xc5b8_fa17_71b5_b806,
    0x2659_09f1_af7e_0dba,
    0x1a73_48d2_a2e5_73a3,
    0x0f95_2589_884c_9ec6,
    0xe6fd_637b_45cc_2a42,
    0x0058_b84e_0a6f_c574,
];

/// Twisted curve coefficient b' = b * beta (4)
pub const BW6_761_G2_COEFF_B: [u64; 12] = [
    0x0000_0000_0000_0004,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
];

/// G2 generator x
pub const BW6_761_G2_GENERATOR_X: [u64; 12] = [
    0xa830_c194_cd02_5f1c,
    0x6410_cf4f_e1bf_995b,
    0x00e9_6efb_c2ad_54b0,
    0xce69_48cb_3cd2_08d7,
    0x9633_17a3_00e1_b6ba,
    0xc5bb_cae9_ac70_e7c7,
    0x734e_c3f1_f09f_eb58,
    0x26b4_1c5d_ab3d_a268,
    0x4c06_2010_1389_0f6d,
    0xd610_53aa_c5a7_115f,
    0xc852_a82e_69d6_60f9,
    0x0110_1332_41d9_b816,
];

/// G2 generator y
pub const BW6_761_G2_GENERATOR_Y: [u64; 12] = [
    0xeb70_a167_28c7_3b61,
    0x91ec_0594_f9ea_c689,
    0x58aa_2d3a_3c5a_02a5,
    0x3ea9_6fcd_504a_ffc7,
    0x8906_c170_ffa8_2300,
    0x64f2_93db_d2c7_12b8,
    0x94c9_7eb7_3329_3fef,
    0x0a1d_86c8_0b95_a59c,
    0x81a7_8e27_53ff_e316,
    0x26b7_cf9a_cec2_181c,
    0x8179_eb10_e4b6_d2dc,
    0x0017_c335_7761_369f,
];

/// Fq3 = Fq[u]/(u^3 - beta): beta (-4), also the twist element
pub const BW6_761_FQ3_NONRESIDUE: [u64; 12] = [
    0xf49d_0000_0000_0087,
    0xe691_3e68_7000_0082,
    0x160c_f8ae_eaf0_a437,
    0x98a1_16c2_5667_a8f8,
    0x71dc_d3dc_73eb_ff2e,
    0x8689_c8ed_12f9_fd90,
    0x03ce_baff_25b4_2304,
    0x707b_a638_e584_e919,
    0x5282_75ef_8087_be41,
    0xb926_186a_81d1_4688,
    0xd187_c940_04fa_ff3e,
    0x0122_e824_fb83_ce0a,
];

/// beta^((p^i - 1)/3)
pub const BW6_761_FQ3_FROBENIUS_C1: [[u64; 12]; 3] = [
    [
        0x0000_0000_0000_0001,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
    [
        0x5e7b_c000_0000_0060,
        0x2149_83de_3000_0053,
        0x5fe3_f89c_1181_1c1e,
        0xa5b0_93ed_79b1_c57b,
        0xab85_79e0_2ed3_cddc,
        0xf87f_a593_08c0_7a8f,
        0x5870_636c_b60d_217f,
        0x8231_32b9_71cd_efc6,
        0x256a_b7ae_1429_7a1a,
        0x4d06_e685_45f7_e64c,
        0x2703_5cdf_02ac_b274,
        0x00cf_ca63_8f15_00e3,
    ],
    [
        0x9621_4000_0000_002a,
        0xc547_ba8a_4000_002f,
        0xb629_0012_d96f_8819,
        0xf2f0_82d4_dcb5_e37c,
        0xc657_59fc_4518_3151,
        0x8e0a_235a_0a39_8300,
        0xab5e_5792_6fa7_0184,
        0xee4a_737f_73b6_f952,
        0x2d17_be41_6c5e_4426,
        0x6c1f_31e5_3bd9_603c,
        0xaa84_6c61_024e_4cca,
        0x0053_1dc1_6c6e_cd27,
    ],
];

/// beta^(2(p^i - 1)/3)
pub const BW6_761_FQ3_FROBENIUS_C2: [[u64; 12]; 3] = [
    [
        0x0000_0000_0000_0001,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
    [
        0x9621_4000_0000_002a,
        0xc547_ba8a_4000_002f,
        0xb629_0012_d96f_8819,
        0xf2f0_82d4_dcb5_e37c,
        0xc657_59fc_4518_3151,
        0x8e0a_235a_0a39_8300,
        0xab5e_5792_6fa7_0184,
        0xee4a_737f_73b6_f952,
        0x2d17_be41_6c5e_4426,
        0x6c1f_31e5_3bd9_603c,
        0xaa84_6c61_024e_4cca,
        0x0053_1dc1_6c6e_cd27,
    ],
    [
        0x5e7b_c000_0000_0060,
        0x2149_83de_3000_0053,
        0x5fe3_f89c_1181_1c1e,
        0xa5b0_93ed_79b1_c57b,
        0xab85_79e0_2ed3_cddc,
        0xf87f_a593_08c0_7a8f,
        0x5870_636c_b60d_217f,
        0x8231_32b9_71cd_efc6,
        0x256a_b7ae_1429_7a1a,
        0x4d06_e685_45f7_e64c,
        0x2703_5cdf_02ac_b274,
        0x00cf_ca63_8f15_00e3,
    ],
];

/// beta^((p^i - 1)/6)
pub const BW6_761_FQ6_FROBENIUS_C1: [[u64; 12]; 6] = [
    [
        0x0000_0000_0000_0001,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ],
    [
        0x5e7b_c000_0000_0061,
        0x2149_83de_3000_0053,
        0x5fe3_f89c_1181_1c1e,
        0xa5b0_93ed_79b1_c57b,
        0xab85_79e0_2ed3_cddc,
        0xf87f_a593_08c0_7a8f,
        0x5870_636c_b60d_217f,
        0x8231_32b9_71cd_efc6,
        0x256a_b7ae_1429_7a1a,
        0x4d06_e685_45f7_e64c,
        0x2703_5cdf_02ac_b274,
        0x00cf_ca63_8f15_00e3,
    ],
    [
        0x5e7b_c000_0000_0060,
        0x2149_83de_3000_0053,
        0x5fe3_f89c_1181_1c1e,
        0xa5b0_93ed_79b1_c57b,
        0xab85_79e0_2ed3_cddc,
        0xf87f_a593_08c0_7a8f,
        0x5870_636c_b60d_217f,
        0x8231_32b9_71cd_efc6,
        0x256a_b7ae_1429_7a1a,
        0x4d06_e685_45f7_e64c,
        0x2703_5cdf_02ac_b274,
        0x00cf_ca63_8f15_00e3,
    ],
    [
        0xf49d_0000_0000_008a,
        0xe691_3e68_7000_0082,
        0x160c_f8ae_eaf0_a437,
        0x98a1_16c2_5667_a8f8,
        0x71dc_d3dc_73eb_ff2e,
        0x8689_c8ed_12f9_fd90,
        0x03ce_baff_25b4_2304,
        0x707b_a638_e584_e919,
        0x5282_75ef_8087_be41,
        0xb926_186a_81d1_4688,
        0xd187_c940_04fa_ff3e,
        0x0122_e824_fb83_ce0a,
    ],
    [
        0x9621_4000_0000_002a,
        0xc547_ba8a_4000_002f,
        0xb629_0012_d96f_8819,
        0xf2f0_82d4_dcb5_e37c,
        0xc657_59fc_4518_3151,
        0x8e0a_235a_0a39_8300,
        0xab5e_5792_6fa7_0184,
        0xee4a_737f_73b6_f952,
        0x2d17_be41_6c5e_4426,
        0x6c1f_31e5_3bd9_603c,
        0xaa84_6c61_024e_4cca,
        0x0053_1dc1_6c6e_cd27,
    ],
    [
        0x9621_4000_0000_002b,
        0xc547_ba8a_4000_002f,
        0xb629_0012_d96f_8819,
        0xf2f0_82d4_dcb5_e37c,
        0xc657_59fc_4518_3151,
        0x8e0a_235a_0a39_8300,
        0xab5e_5792_6fa7_0184,
        0xee4a_737f_73b6_f952,
        0x2d17_be41_6c5e_4426,
        0x6c1f_31e5_3bd9_603c,
        0xaa84_6c61_024e_4cca,
        0x0053_1dc1_6c6e_cd27,
    ],
];
