use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for updating the fee config
 *
 * Access Control: Admin only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Fee config account (PDA)
    /// - Derived from: ["config"]
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// Replacement fee mint, left unchanged when omitted
    pub new_fee_mint: Option<InterfaceAccount<'info, Mint>>,

    /// Must match the admin stored in the config
    #[account(constraint = admin.key() == config.admin @ MerkleDropError::OnlyAdmin)]
    pub admin: Signer<'info>,
}

/**
 * Updates the fee schedule, fee receiver, fee mint or admin
 *
 * Every argument is optional; `None` keeps the current value. Fee changes
 * apply to campaigns created afterwards only.
 */
pub fn handle_update_config(
    ctx: Context<UpdateConfig>,
    new_admin: Option<Pubkey>,
    fee_receiver: Option<Pubkey>,
    native_fee: Option<u64>,
    token_fee: Option<u64>,
) -> Result<()> {
    let fee_mint = ctx.accounts.new_fee_mint.as_ref().map(|mint| mint.key());
    let config = &mut ctx.accounts.config;

    config.update(new_admin, fee_receiver, fee_mint, native_fee, token_fee)?;

    let event = ConfigUpdated::new(config.key(), config);
    emit_cpi!(event);

    Ok(())
}
