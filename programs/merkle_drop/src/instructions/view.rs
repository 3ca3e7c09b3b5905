use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use crate::error::*;
use crate::state::*;
use crate::utils::*;

/// No accounts; the vault address is derived from the root alone
#[derive(Accounts)]
pub struct VaultAddressView {}

/// Read-only access to a campaign record
#[derive(Accounts)]
pub struct CampaignView<'info> {
    /// CHECK: Resolved in the handler; anything else is UnknownVault
    pub airdrop_vault: UncheckedAccount<'info>,
}

/// Read-only access to a campaign record and its balance
#[derive(Accounts)]
pub struct CampaignStatusView<'info> {
    /// CHECK: Resolved in the handler; anything else is UnknownVault
    pub airdrop_vault: UncheckedAccount<'info>,

    /// Token account holding the campaign balance
    pub token_vault: InterfaceAccount<'info, TokenAccount>,
}

pub fn handle_get_air_drop_vault_address(
    _ctx: Context<VaultAddressView>,
    root: [u8; 32],
) -> Result<Pubkey> {
    Ok(vault_address(&root).0)
}

pub fn handle_is_claimed(ctx: Context<CampaignView>, index: u32) -> Result<bool> {
    let campaign = load_campaign(&ctx.accounts.airdrop_vault)?;
    read_claimed(&ctx.accounts.airdrop_vault, &campaign, index)
}

pub fn handle_campaign_status(ctx: Context<CampaignStatusView>) -> Result<CampaignStatus> {
    let campaign = load_campaign(&ctx.accounts.airdrop_vault)?;
    require_keys_eq!(
        ctx.accounts.token_vault.key(),
        campaign.token_vault,
        MerkleDropError::UnknownVault
    );

    let now = Clock::get()?.unix_timestamp;
    Ok(CampaignStatus::of(&campaign, now, ctx.accounts.token_vault.amount))
}
