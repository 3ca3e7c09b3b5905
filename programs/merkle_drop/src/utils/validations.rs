use anchor_lang::prelude::*;

use crate::constants::MAX_RECIPIENTS;
use crate::error::*;
use crate::state::{Campaign, Config, FeeMode};
use crate::utils::merkle::{leaf_hash, verify};

/// Validate the parameters of a new campaign.
pub fn check_create_airdrop(
    now: i64,
    deadline: i64,
    total_amount: u64,
    recipient_count: u32,
) -> Result<()> {
    require!(total_amount > 0, MerkleDropError::InvalidAmount);
    require!(deadline > now, MerkleDropError::InvalidDeadline);
    require!(
        recipient_count > 0 && recipient_count <= MAX_RECIPIENTS,
        MerkleDropError::InvalidRecipientCount
    );
    Ok(())
}

/// Fee the config charges for a given fee mode.
pub fn required_fee(config: &Config, fee_mode: FeeMode) -> u64 {
    match fee_mode {
        FeeMode::PaidInFeeToken => config.token_fee,
        FeeMode::PaidInNativeCurrency => config.native_fee,
    }
}

/// Validate the fee the caller attached; it must match the schedule exactly.
pub fn check_fee(config: &Config, fee_mode: FeeMode, attached: u64) -> Result<u64> {
    let fee = required_fee(config, fee_mode);
    require!(attached == fee, MerkleDropError::FeeMismatch);
    Ok(fee)
}

/// Validate a single claim against its campaign.
///
/// Does not look at the claimed bitmap; `Campaign::mark_claimed` owns that check.
pub fn check_claim(
    campaign: &Campaign,
    now: i64,
    claimant: &Pubkey,
    index: u32,
    amount: u64,
    proof: &[[u8; 32]],
) -> Result<()> {
    // Check: the campaign has not expired.
    require!(!campaign.is_expired(now), MerkleDropError::Expired);

    // Check: the leaf belongs to the committed tree.
    let leaf = leaf_hash(index, claimant, amount);
    require!(verify(proof, campaign.root, leaf), MerkleDropError::InvalidProof);

    Ok(())
}

/// Validate a recovery of the remaining vault balance.
pub fn check_recovery(campaign: &Campaign, now: i64, caller: &Pubkey) -> Result<()> {
    require!(campaign.is_expired(now), MerkleDropError::NotExpired);
    require_keys_eq!(*caller, campaign.depositor, MerkleDropError::NotDepositor);
    Ok(())
}

/// Validate that the parallel claim vectors and the per-entry accounts line up.
/// Returns the number of entries.
pub fn check_batch_lengths(
    vault_addresses: &[Pubkey],
    proofs: &[Vec<[u8; 32]>],
    indices: &[u32],
    amounts: &[u64],
    remaining_accounts: usize,
    accounts_per_entry: usize,
) -> Result<usize> {
    let entries = vault_addresses.len();
    require!(
        proofs.len() == entries && indices.len() == entries && amounts.len() == entries,
        MerkleDropError::BatchLengthMismatch
    );
    let expected_accounts = entries
        .checked_mul(accounts_per_entry)
        .ok_or(MerkleDropError::ArithmeticOverflow)?;
    require!(
        remaining_accounts == expected_accounts,
        MerkleDropError::BatchLengthMismatch
    );
    Ok(entries)
}
