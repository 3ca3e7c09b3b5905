use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;

/// How the creation fee of a campaign was charged
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeeMode {
    /// Paid in the config's fee mint through a token transfer
    #[default]
    PaidInFeeToken,
    /// Paid in lamports through a system transfer
    PaidInNativeCurrency,
}

/// Lifecycle of a campaign as observed at a given time
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignStatus {
    /// Before the deadline, claims accepted
    Active,
    /// At or after the deadline with tokens left, recovery permitted
    Expired,
    /// At or after the deadline with an empty vault
    Drained,
}

impl CampaignStatus {
    pub fn of(campaign: &Campaign, now: i64, vault_balance: u64) -> Self {
        if !campaign.is_expired(now) {
            CampaignStatus::Active
        } else if vault_balance > 0 {
            CampaignStatus::Expired
        } else {
            CampaignStatus::Drained
        }
    }
}

/**
 * Airdrop campaign record
 *
 * One account per merkle root. The account lives at the deterministic vault
 * address and signs for the associated token account that holds the
 * undistributed balance, so the vault of one campaign can never be drained
 * through another.
 *
 * Derivation: ["airdrop_vault", merkle_root]
 *
 * Layout: discriminator, the fixed fields below, then the claimed-index
 * bitmap (one bit per leaf, `bitmap_len(recipient_count)` bytes). The bitmap
 * is read and written in place in the account data and is never
 * deserialized.
 *
 * Lifecycle:
 * 1. Created during create_airdrop (a root can be registered only once)
 * 2. Claimed bits and total_claimed grow with every successful claim
 * 3. recovered_amount grows when the depositor recovers after the deadline
 * 4. Never closed; the record stays queryable after the vault is drained
 */
#[account]
#[derive(Default, Debug)]
pub struct Campaign {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing transfers
    pub bump: u8,

    /// Merkle root of (index, recipient, amount) leaves
    pub root: [u8; 32],

    /// Opaque commitment to the full allocation list, never interpreted
    pub data_hash: [u8; 32],

    /// Token mint being distributed
    pub token_mint: Pubkey,

    /// Associated token account of this PDA holding the balance
    pub token_vault: Pubkey,

    /// Account that funded the campaign
    /// - Only this account can recover tokens after the deadline
    pub depositor: Pubkey,

    /// How the creation fee was charged
    pub fee_mode: FeeMode,

    /// Amount deposited at creation
    pub total_amount: u64,

    /// Total amount paid out to claimants
    pub total_claimed: u64,

    /// Total amount returned to the depositor
    pub recovered_amount: u64,

    /// Unix timestamp at which claims stop and recovery opens
    pub deadline: i64,

    /// Unix timestamp of creation
    pub created_at: i64,

    /// Number of leaves in the tree, bounds the bitmap
    pub recipient_count: u32,
}

impl Campaign {
    /// Discriminator + fixed fields, also the offset of the claimed bitmap
    /// - bump + root + data_hash + 3 pubkeys + fee_mode + 5 x 8-byte fields + recipient_count
    pub const LEN: usize = 8 + 1 + 32 + 32 + 32 * 3 + 1 + 8 * 5 + 4;

    /// Bytes needed to hold one bit per leaf
    pub fn bitmap_len(recipient_count: u32) -> usize {
        (recipient_count as usize).div_ceil(8)
    }

    /// Calculate the space required for a campaign with `recipient_count` leaves
    pub fn space(recipient_count: u32) -> usize {
        Self::LEN + Self::bitmap_len(recipient_count)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        bump: u8,
        root: [u8; 32],
        data_hash: [u8; 32],
        token_mint: Pubkey,
        token_vault: Pubkey,
        depositor: Pubkey,
        fee_mode: FeeMode,
        total_amount: u64,
        deadline: i64,
        created_at: i64,
        recipient_count: u32,
    ) {
        self.bump = bump;
        self.root = root;
        self.data_hash = data_hash;
        self.token_mint = token_mint;
        self.token_vault = token_vault;
        self.depositor = depositor;
        self.fee_mode = fee_mode;
        self.total_amount = total_amount;
        self.total_claimed = 0;
        self.recovered_amount = 0;
        self.deadline = deadline;
        self.created_at = created_at;
        self.recipient_count = recipient_count;
    }

    /// Claims are rejected and recovery is allowed from the deadline onwards
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.deadline
    }

    /// Out-of-range indices are reported as unclaimed
    pub fn is_claimed(&self, bitmap: &[u8], index: u32) -> bool {
        if index >= self.recipient_count {
            return false;
        }
        let (byte, mask) = bit_position(index);
        bitmap
            .get(byte)
            .map(|bits| bits & mask != 0)
            .unwrap_or(false)
    }

    /// Sets the claimed bit for `index` in `bitmap`, failing if it was already set
    pub fn mark_claimed(&self, bitmap: &mut [u8], index: u32) -> Result<()> {
        require!(
            index < self.recipient_count,
            MerkleDropError::IndexOutOfRange
        );
        let (byte, mask) = bit_position(index);
        let bits = bitmap
            .get_mut(byte)
            .ok_or(MerkleDropError::IndexOutOfRange)?;
        require!(*bits & mask == 0, MerkleDropError::AlreadyClaimed);
        *bits |= mask;
        Ok(())
    }

    /// Adds a payout to the bookkeeping and returns the new total claimed
    pub fn record_claim(&mut self, amount: u64) -> Result<u64> {
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(MerkleDropError::ArithmeticOverflow)?;
        Ok(self.total_claimed)
    }

    pub fn record_recovery(&mut self, amount: u64) -> Result<()> {
        self.recovered_amount = self
            .recovered_amount
            .checked_add(amount)
            .ok_or(MerkleDropError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Amount the bookkeeping expects to still sit in the vault
    ///
    /// Saturates at zero: tokens sent straight to the vault are recovered on
    /// top of the deposit and push recovered_amount past it.
    pub fn expected_remaining(&self) -> u64 {
        self.total_amount
            .saturating_sub(self.total_claimed)
            .saturating_sub(self.recovered_amount)
    }

    /// PDA signer seeds: ["airdrop_vault", root, bump]
    pub fn signer_seeds(&self) -> [&[u8]; 3] {
        [
            AIRDROP_VAULT_SEED.as_bytes(),
            self.root.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }
}

fn bit_position(index: u32) -> (usize, u8) {
    ((index / 8) as usize, 1u8 << (index % 8))
}
