use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::*;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new airdrop campaign
 *
 * This instruction:
 * - Charges the creation fee in lamports or in the fee token
 * - Registers the campaign record at the deterministic vault address
 * - Creates the vault token account (ATA of the vault PDA)
 * - Deposits the full airdrop amount from the depositor into the vault
 *
 * Access Control: Anyone can create a campaign for an unused merkle root
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(total_amount: u64, data_hash: [u8; 32], root: [u8; 32])]
pub struct CreateAirdrop<'info> {
    /// Global fee config
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// The airdrop vault (PDA) that will hold the campaign record
    /// - Derived from: ["airdrop_vault", root]
    /// - Created in the handler so an existing root reports DuplicateRoot
    /// CHECK: Must be empty; allocated and written by the handler
    #[account(
        mut,
        seeds = [AIRDROP_VAULT_SEED.as_bytes(), root.as_ref()],
        bump
    )]
    pub airdrop_vault: UncheckedAccount<'info>,

    /// Token account holding the campaign balance
    /// - Associated token account of the airdrop vault PDA
    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = token_mint,
        associated_token::authority = airdrop_vault,
        associated_token::token_program = token_program,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token being distributed
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Depositor's token account funding the campaign
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = depositor,
        token::token_program = token_program,
    )]
    pub depositor_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Receives native fees
    /// CHECK: Address is pinned to the config's fee receiver
    #[account(
        mut,
        address = config.fee_receiver @ MerkleDropError::InvalidFeeReceiver
    )]
    pub fee_receiver: UncheckedAccount<'info>,

    /// Fee mint, required when paying in the fee token
    #[account(
        address = config.fee_mint @ MerkleDropError::TokenMintMismatch
    )]
    pub fee_mint: Option<InterfaceAccount<'info, Mint>>,

    /// Depositor's fee-mint account, required when paying in the fee token
    #[account(
        mut,
        token::mint = config.fee_mint,
        token::authority = depositor,
    )]
    pub depositor_fee_token_account: Option<InterfaceAccount<'info, TokenAccount>>,

    /// Fee receiver's fee-mint account, required when paying in the fee token
    #[account(
        mut,
        token::mint = config.fee_mint,
        token::authority = config.fee_receiver,
    )]
    pub fee_receiver_token_account: Option<InterfaceAccount<'info, TokenAccount>>,

    /// Creator and funder of the campaign
    /// - Only this account can recover tokens after the deadline
    #[account(mut)]
    pub depositor: Signer<'info>,

    /// Token program of the distributed token
    pub token_program: Interface<'info, TokenInterface>,

    /// Token program of the fee mint, required when paying in the fee token
    pub fee_token_program: Option<Interface<'info, TokenInterface>>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    /// System program for account creation and native fees
    pub system_program: Program<'info, System>,
}

impl<'info> CreateAirdrop<'info> {
    /// Moves the creation fee to the fee receiver using the selected fee mode
    fn collect_fee(&self, fee_mode: FeeMode, fee: u64) -> Result<()> {
        if fee == 0 {
            return Ok(());
        }

        match fee_mode {
            FeeMode::PaidInNativeCurrency => transfer_lamports(
                self.depositor.to_account_info(),
                self.fee_receiver.to_account_info(),
                self.system_program.to_account_info(),
                fee,
            ),
            FeeMode::PaidInFeeToken => {
                let (Some(fee_mint), Some(from), Some(to), Some(fee_token_program)) = (
                    self.fee_mint.as_ref(),
                    self.depositor_fee_token_account.as_ref(),
                    self.fee_receiver_token_account.as_ref(),
                    self.fee_token_program.as_ref(),
                ) else {
                    return err!(MerkleDropError::FeeAccountsMissing);
                };

                transfer_token(
                    self.depositor.to_account_info(),
                    from.to_account_info(),
                    to.to_account_info(),
                    fee_mint.to_account_info(),
                    fee_token_program.to_account_info(),
                    fee,
                    fee_mint.decimals,
                    None,
                )
            }
        }
    }
}

/**
 * Creates a new airdrop campaign
 *
 * @param total_amount - Amount deposited into the vault
 * @param data_hash - Opaque commitment to the allocation list
 * @param root - Merkle root of (index, recipient, amount) leaves
 * @param deadline - Unix timestamp at which claims stop and recovery opens
 * @param fee_mode - Whether the fee is paid in lamports or in the fee token
 * @param fee_amount - Fee the depositor attaches; must equal the configured fee
 * @param recipient_count - Number of leaves in the tree
 */
#[allow(clippy::too_many_arguments)]
pub fn handle_create_airdrop(
    ctx: Context<CreateAirdrop>,
    total_amount: u64,
    data_hash: [u8; 32],
    root: [u8; 32],
    deadline: i64,
    fee_mode: FeeMode,
    fee_amount: u64,
    recipient_count: u32,
) -> Result<()> {
    // ===== VALIDATION PHASE =====

    let now = Clock::get()?.unix_timestamp;
    check_create_airdrop(now, deadline, total_amount, recipient_count)?;
    let fee = check_fee(&ctx.accounts.config, fee_mode, fee_amount)?;

    // ===== FEE COLLECTION =====

    ctx.accounts.collect_fee(fee_mode, fee)?;

    // ===== REGISTRATION =====

    let vault_bump = ctx.bumps.airdrop_vault;
    create_campaign_account(
        ctx.accounts.depositor.to_account_info(),
        ctx.accounts.airdrop_vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        &root,
        vault_bump,
        Campaign::space(recipient_count),
    )?;

    let mut campaign = Campaign::default();
    campaign.initialize(
        vault_bump,
        root,
        data_hash,
        ctx.accounts.token_mint.key(),
        ctx.accounts.token_vault.key(),
        ctx.accounts.depositor.key(),
        fee_mode,
        total_amount,
        deadline,
        now,
        recipient_count,
    );
    store_campaign(&ctx.accounts.airdrop_vault.to_account_info(), &campaign)?;

    // ===== DEPOSIT =====

    transfer_token(
        ctx.accounts.depositor.to_account_info(),
        ctx.accounts.depositor_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        total_amount,
        ctx.accounts.token_mint.decimals,
        None,
    )?;

    msg!(
        "airdrop {} created with {} tokens for {} recipients",
        ctx.accounts.airdrop_vault.key(),
        total_amount,
        recipient_count
    );

    emit_cpi!(AirdropCreated {
        vault: ctx.accounts.airdrop_vault.key(),
        token_vault: ctx.accounts.token_vault.key(),
        root,
        data_hash,
        token_mint: ctx.accounts.token_mint.key(),
        depositor: ctx.accounts.depositor.key(),
        total_amount,
        recipient_count,
        deadline,
        fee_mode,
        fee_amount: fee,
    });

    Ok(())
}
