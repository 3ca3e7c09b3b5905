use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::error::*;
use crate::event::*;
use crate::utils::*;

/// Remaining accounts supplied for every claim entry, in order:
/// airdrop vault (mut), vault token account (mut), token mint, claimant token account (mut)
pub const CLAIM_ACCOUNTS_PER_ENTRY: usize = 4;

/**
 * Account context for claiming from one or more campaigns
 *
 * The per-entry accounts are passed as remaining accounts, four per entry
 * (see CLAIM_ACCOUNTS_PER_ENTRY). All entries share one claimant and one
 * token program.
 *
 * Access Control: Any user with a valid merkle proof for their own leaves
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The recipient of every leaf in the batch
    /// - Must sign; leaves are hashed with this key
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a batch of claims
 *
 * @param vault_addresses - Airdrop vault of each entry
 * @param proofs - Sibling path of each entry
 * @param indices - Leaf index of each entry
 * @param amounts - Allocated amount of each entry
 *
 * @returns the total amount transferred
 *
 * Entries are processed in order and any failure aborts the whole
 * transaction, so either every entry is paid or none is. Each entry marks
 * its leaf and persists the campaign before the transfer is issued, and the
 * next entry reloads its campaign from account data, so a repeated leaf in
 * the same batch fails with AlreadyClaimed.
 */
pub fn handle_claim<'info>(
    ctx: Context<'_, '_, 'info, 'info, Claim<'info>>,
    vault_addresses: Vec<Pubkey>,
    proofs: Vec<Vec<[u8; 32]>>,
    indices: Vec<u32>,
    amounts: Vec<u64>,
) -> Result<u64> {
    check_batch_lengths(
        &vault_addresses,
        &proofs,
        &indices,
        &amounts,
        ctx.remaining_accounts.len(),
        CLAIM_ACCOUNTS_PER_ENTRY,
    )?;

    let now = Clock::get()?.unix_timestamp;
    let claimant = ctx.accounts.claimant.key();
    let mut total_transferred: u64 = 0;

    for (i, entry_accounts) in ctx
        .remaining_accounts
        .chunks(CLAIM_ACCOUNTS_PER_ENTRY)
        .enumerate()
    {
        let [vault_info, token_vault_info, mint_info, claimant_token_info] = entry_accounts else {
            return err!(MerkleDropError::BatchLengthMismatch);
        };
        let index = indices[i];
        let amount = amounts[i];

        // ===== VALIDATION PHASE =====

        require_keys_eq!(
            vault_info.key(),
            vault_addresses[i],
            MerkleDropError::UnknownVault
        );
        let mut campaign = load_campaign(vault_info)?;
        require_keys_eq!(
            token_vault_info.key(),
            campaign.token_vault,
            MerkleDropError::UnknownVault
        );
        require_keys_eq!(
            mint_info.key(),
            campaign.token_mint,
            MerkleDropError::TokenMintMismatch
        );

        let mint = InterfaceAccount::<Mint>::try_from(mint_info)?;
        let claimant_token_account =
            InterfaceAccount::<TokenAccount>::try_from(claimant_token_info)?;
        require_keys_eq!(
            claimant_token_account.mint,
            campaign.token_mint,
            MerkleDropError::TokenMintMismatch
        );
        require_keys_eq!(
            claimant_token_account.owner,
            claimant,
            MerkleDropError::InvalidTokenAccount
        );

        // ===== EFFECTS PHASE (State Updates) =====

        // Proof check, then the claimed bit and bookkeeping are persisted before the transfer
        let total_claimed = apply_claim(
            vault_info,
            &mut campaign,
            now,
            &claimant,
            index,
            amount,
            &proofs[i],
        )?;

        // ===== INTERACTIONS PHASE (Token Transfer) =====

        let seeds = campaign.signer_seeds();
        let signer = &[&seeds[..]];
        transfer_token(
            vault_info.clone(),
            token_vault_info.clone(),
            claimant_token_info.clone(),
            mint_info.clone(),
            ctx.accounts.token_program.to_account_info(),
            amount,
            mint.decimals,
            Some(signer),
        )?;

        total_transferred = total_transferred
            .checked_add(amount)
            .ok_or(MerkleDropError::ArithmeticOverflow)?;

        emit_cpi!(AirdropClaimed {
            vault: vault_info.key(),
            claimant,
            index,
            amount,
            total_claimed,
        });
    }

    Ok(total_transferred)
}
