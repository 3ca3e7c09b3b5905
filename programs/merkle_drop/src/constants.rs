use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds and sizing limits used throughout the merkle drop program.
 */

/// ===== PDA SEED CONSTANTS =====

/// Seed for the airdrop vault PDA derivation
/// - Used in: ["airdrop_vault", merkle_root]
/// - The vault PDA stores the campaign record and is the token authority
///   of the campaign's associated token account
/// - Depends on the root only, so anyone can compute it before creation
#[constant]
pub const AIRDROP_VAULT_SEED: &str = "airdrop_vault";

/// Seed for the global fee config PDA derivation
/// - Used in: ["config"]
#[constant]
pub const CONFIG_SEED: &str = "config";

/// ===== SIZING CONSTANTS =====

/// Maximum number of leaves a single campaign may declare
/// - One claimed bit per leaf, so the bitmap tops out at 8 KiB
/// - Keeps the campaign account under the 10 KiB CPI allocation limit
#[constant]
pub const MAX_RECIPIENTS: u32 = 64 * 1024;
