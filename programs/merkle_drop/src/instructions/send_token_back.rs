use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::error::*;
use crate::event::*;
use crate::utils::*;

/**
 * Account context for returning an expired campaign's tokens to its depositor
 *
 * Access Control: Depositor only, after the deadline
 *
 * Business Logic:
 * - Transfers the whole remaining vault balance to the depositor
 * - An empty vault is a successful no-op returning 0
 * - Neither the campaign record nor the vault token account is closed
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SendTokenBackToAirDropper<'info> {
    /// The airdrop vault holding the campaign record
    /// CHECK: Resolved in the handler; anything else is UnknownVault
    #[account(mut)]
    pub airdrop_vault: UncheckedAccount<'info>,

    /// Token account holding the campaign balance
    /// - Must be the one recorded in the campaign
    #[account(mut)]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The distributed token, must match the campaign's mint
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Depositor's token account receiving the remaining tokens
    #[account(mut)]
    pub depositor_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Must be the depositor recorded in the campaign
    pub depositor: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Sends the remaining tokens of an expired campaign back to its depositor
 *
 * @returns the amount recovered (0 when the vault was already empty)
 *
 * Validation Rules:
 * - The vault must hold a campaign of this program
 * - The deadline must have been reached
 * - Only the depositor can call this function
 */
pub fn handle_send_token_back_to_air_dropper(
    ctx: Context<SendTokenBackToAirDropper>,
) -> Result<u64> {
    let vault_info = ctx.accounts.airdrop_vault.to_account_info();

    // ===== VALIDATION PHASE =====

    let mut campaign = load_campaign(&vault_info)?;
    require_keys_eq!(
        ctx.accounts.token_vault.key(),
        campaign.token_vault,
        MerkleDropError::UnknownVault
    );
    require_keys_eq!(
        ctx.accounts.token_mint.key(),
        campaign.token_mint,
        MerkleDropError::TokenMintMismatch
    );
    require_keys_eq!(
        ctx.accounts.depositor_token_account.mint,
        campaign.token_mint,
        MerkleDropError::TokenMintMismatch
    );
    require_keys_eq!(
        ctx.accounts.depositor_token_account.owner,
        ctx.accounts.depositor.key(),
        MerkleDropError::InvalidTokenAccount
    );

    // ===== EFFECTS PHASE =====

    // Deadline and depositor checks, then the recovered amount is persisted
    let now = Clock::get()?.unix_timestamp;
    let remaining_balance = apply_recovery(
        &vault_info,
        &mut campaign,
        now,
        &ctx.accounts.depositor.key(),
        ctx.accounts.token_vault.amount,
    )?;

    // ===== INTERACTIONS PHASE =====

    if remaining_balance > 0 {
        let seeds = campaign.signer_seeds();
        let signer = &[&seeds[..]];
        transfer_token(
            vault_info.clone(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.depositor_token_account.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            remaining_balance,
            ctx.accounts.token_mint.decimals,
            Some(signer),
        )?;

        msg!("recovered {} tokens from {}", remaining_balance, vault_info.key());
    }

    emit_cpi!(TokensRecovered {
        vault: vault_info.key(),
        depositor: campaign.depositor,
        amount_recovered: remaining_balance,
    });

    Ok(remaining_balance)
}
