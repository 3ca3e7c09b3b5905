use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;
use crate::state::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for creating the global fee config
 *
 * The config PDA can only be created once; the signer becomes its admin.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// Fee config account (PDA)
    /// - Derived from: ["config"]
    #[account(
        init,
        payer = admin,
        space = Config::LEN,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    /// Mint in which fee-token payments will be made
    pub fee_mint: InterfaceAccount<'info, Mint>,

    /// Pays for the config account and becomes its admin
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Creates the fee config
 *
 * @param fee_receiver - Account receiving creation fees
 * @param native_fee - Creation fee in lamports
 * @param token_fee - Creation fee in fee-mint base units
 */
pub fn handle_initialize_config(
    ctx: Context<InitializeConfig>,
    fee_receiver: Pubkey,
    native_fee: u64,
    token_fee: u64,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let fee_mint = ctx.accounts.fee_mint.key();

    ctx.accounts.config.initialize(
        ctx.bumps.config,
        admin,
        fee_receiver,
        fee_mint,
        native_fee,
        token_fee,
    )?;

    msg!("config initialized, native fee {}, token fee {}", native_fee, token_fee);

    emit_cpi!(ConfigInitialized {
        config: ctx.accounts.config.key(),
        admin,
        fee_receiver,
        fee_mint,
        native_fee,
        token_fee,
    });

    Ok(())
}
