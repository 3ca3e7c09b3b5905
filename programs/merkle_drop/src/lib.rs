use anchor_lang::prelude::*;

declare_id!("2QitQrZPeZhNYuvh8az61tsW3bF3wSXUffbeoYVsKreT");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(any(test, feature = "client"))]
pub mod client;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::{CampaignStatus, FeeMode};

/**
 * Merkle Drop Program
 *
 * Distributes a pre-committed set of token allocations without storing them
 * on-chain: each campaign commits its allocations as one merkle root and
 * every recipient proves membership to claim.
 *
 * Key Features:
 * - One campaign per merkle root, found at a deterministic vault address
 * - Isolated custody: every campaign has its own vault PDA and token account
 * - Claimed-index bitmap preventing replay, marked before any transfer
 * - Batched claims across several campaigns in one atomic instruction
 * - Deadline-gated recovery of the remaining balance by the depositor
 * - Creation fee charged in lamports or in a configured fee token
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Config PDA: fee schedule, fee receiver, admin
 * - Airdrop vault PDA: campaign record and token authority, ["airdrop_vault", root]
 * - Vault token account: associated token account of the airdrop vault PDA
 *
 * Workflow:
 * 1. Admin initializes the fee config
 * 2. Depositor creates an airdrop, paying the fee and funding the vault
 * 3. Recipients claim with merkle proofs until the deadline
 * 4. Depositor recovers the remaining tokens after the deadline
 */
#[program]
pub mod merkle_drop {
    use super::*;

    /**
     * Creates the global fee config
     *
     * @param ctx - Account context containing config, fee mint and admin accounts
     * @param fee_receiver - Account receiving creation fees
     * @param native_fee - Creation fee in lamports
     * @param token_fee - Creation fee in fee-mint base units
     *
     * Access Control: Anyone, once; the signer becomes admin
     */
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        fee_receiver: Pubkey,
        native_fee: u64,
        token_fee: u64,
    ) -> Result<()> {
        handle_initialize_config(ctx, fee_receiver, native_fee, token_fee)
    }

    /**
     * Updates the fee config
     *
     * @param new_admin - Replacement admin
     * @param fee_receiver - Replacement fee receiver
     * @param native_fee - Replacement lamport fee
     * @param token_fee - Replacement fee-token fee
     *
     * Access Control: Admin only
     */
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_admin: Option<Pubkey>,
        fee_receiver: Option<Pubkey>,
        native_fee: Option<u64>,
        token_fee: Option<u64>,
    ) -> Result<()> {
        handle_update_config(ctx, new_admin, fee_receiver, native_fee, token_fee)
    }

    /**
     * Creates a new airdrop campaign
     *
     * Charges the creation fee, registers the campaign at the vault address
     * derived from `root` and deposits `total_amount` into the vault.
     *
     * @param total_amount - Amount deposited into the vault
     * @param data_hash - Opaque commitment to the allocation list
     * @param root - Merkle root of (index, recipient, amount) leaves
     * @param deadline - Unix timestamp at which claims stop, must be in the future
     * @param fee_mode - Fee paid in the fee token or in lamports
     * @param fee_amount - Attached fee, must equal the configured fee
     * @param recipient_count - Number of leaves in the tree
     *
     * Access Control: Anyone, for an unused root
     */
    #[allow(clippy::too_many_arguments)]
    pub fn create_airdrop(
        ctx: Context<CreateAirdrop>,
        total_amount: u64,
        data_hash: [u8; 32],
        root: [u8; 32],
        deadline: i64,
        fee_mode: FeeMode,
        fee_amount: u64,
        recipient_count: u32,
    ) -> Result<()> {
        handle_create_airdrop(
            ctx,
            total_amount,
            data_hash,
            root,
            deadline,
            fee_mode,
            fee_amount,
            recipient_count,
        )
    }

    /**
     * Returns the deterministic vault address of a merkle root
     *
     * The address is the same before and after the campaign exists.
     */
    pub fn get_air_drop_vault_address(
        ctx: Context<VaultAddressView>,
        root: [u8; 32],
    ) -> Result<Pubkey> {
        handle_get_air_drop_vault_address(ctx, root)
    }

    /**
     * Claims one or more leaves, possibly across campaigns
     *
     * @param vault_addresses - Airdrop vault of each entry
     * @param proofs - Merkle proof of each entry
     * @param indices - Leaf index of each entry
     * @param amounts - Allocated amount of each entry
     *
     * Remaining accounts: four per entry, see CLAIM_ACCOUNTS_PER_ENTRY.
     * Returns the total amount transferred. All entries succeed or none do.
     *
     * Access Control: Any user with valid proofs for leaves naming them
     */
    pub fn claim<'info>(
        ctx: Context<'_, '_, 'info, 'info, Claim<'info>>,
        vault_addresses: Vec<Pubkey>,
        proofs: Vec<Vec<[u8; 32]>>,
        indices: Vec<u32>,
        amounts: Vec<u64>,
    ) -> Result<u64> {
        handle_claim(ctx, vault_addresses, proofs, indices, amounts)
    }

    /**
     * Sends the remaining tokens of an expired campaign back to its depositor
     *
     * Returns the amount recovered; 0 when the vault is already empty.
     *
     * Access Control: Depositor only, at or after the deadline
     */
    pub fn send_token_back_to_air_dropper(
        ctx: Context<SendTokenBackToAirDropper>,
    ) -> Result<u64> {
        handle_send_token_back_to_air_dropper(ctx)
    }

    /// Returns whether a leaf index of a campaign has been claimed.
    pub fn is_claimed(ctx: Context<CampaignView>, index: u32) -> Result<bool> {
        handle_is_claimed(ctx, index)
    }

    /// Returns the lifecycle status of a campaign at the current time.
    pub fn get_campaign_status(ctx: Context<CampaignStatusView>) -> Result<CampaignStatus> {
        handle_campaign_status(ctx)
    }
}
