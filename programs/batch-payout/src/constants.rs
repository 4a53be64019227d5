use anchor_lang::prelude::*;

// PDA Seeds
pub const PAYOUT_CONFIG_SEED: &[u8] = b"payout_config";

// Fee parameters
pub const DEFAULT_FEE_BPS: u16 = 10; // 0.1%
pub const MAX_FEE_BPS: u16 = 10_000; // 100%
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Fee collection wallet, 0x75F387d2351785174f20474308C71E578feFCFF6 left-padded to 32 bytes
pub const FEE_WALLET: Pubkey = Pubkey::new_from_array([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x75, 0xf3, 0x87, 0xd2, 0x35, 0x17, 0x85, 0x17, 0x4f, 0x20, 0x47, 0x43,
    0x08, 0xc7, 0x1e, 0x57, 0x8f, 0xef, 0xcf, 0xf6,
]);
