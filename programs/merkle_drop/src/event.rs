use anchor_lang::prelude::*;

use crate::state::{Config, FeeMode};

/// Event emitted when the fee config is created
#[event]
pub struct ConfigInitialized {
    /// The config account public key
    pub config: Pubkey,
    /// Admin allowed to update the config
    pub admin: Pubkey,
    /// Account receiving creation fees
    pub fee_receiver: Pubkey,
    /// Mint used for fee-token payments
    pub fee_mint: Pubkey,
    /// Creation fee in lamports
    pub native_fee: u64,
    /// Creation fee in fee-mint base units
    pub token_fee: u64,
}

/// Event emitted when the fee config changes
#[event]
pub struct ConfigUpdated {
    pub config: Pubkey,
    pub admin: Pubkey,
    pub fee_receiver: Pubkey,
    pub fee_mint: Pubkey,
    pub native_fee: u64,
    pub token_fee: u64,
}

impl ConfigUpdated {
    /// Snapshot of every updatable field after an update
    pub fn new(config: Pubkey, state: &Config) -> Self {
        ConfigUpdated {
            config,
            admin: state.admin,
            fee_receiver: state.fee_receiver,
            fee_mint: state.fee_mint,
            native_fee: state.native_fee,
            token_fee: state.token_fee,
        }
    }
}

/// Event emitted when a new airdrop campaign is created
#[event]
pub struct AirdropCreated {
    /// Deterministic vault address (also the campaign record)
    pub vault: Pubkey,
    /// Token account holding the campaign balance
    pub token_vault: Pubkey,
    /// Merkle root committing to every allocation
    pub root: [u8; 32],
    /// Opaque commitment to the allocation list
    pub data_hash: [u8; 32],
    /// Token mint being distributed
    pub token_mint: Pubkey,
    /// Account that funded the campaign
    pub depositor: Pubkey,
    /// Amount deposited into the vault
    pub total_amount: u64,
    /// Number of leaves in the tree
    pub recipient_count: u32,
    /// Unix timestamp after which claims stop
    pub deadline: i64,
    /// How the creation fee was charged
    pub fee_mode: FeeMode,
    /// Creation fee charged
    pub fee_amount: u64,
}

/// Event emitted for every claimed leaf
#[event]
pub struct AirdropClaimed {
    /// Vault the tokens were paid from
    pub vault: Pubkey,
    /// Recipient of the tokens
    pub claimant: Pubkey,
    /// Leaf index
    pub index: u32,
    /// Amount transferred for this leaf
    pub amount: u64,
    /// Total claimed from the campaign by all recipients
    pub total_claimed: u64,
}

/// Event emitted when the depositor recovers an expired vault
#[event]
pub struct TokensRecovered {
    /// Vault the tokens were recovered from
    pub vault: Pubkey,
    /// Depositor receiving the tokens
    pub depositor: Pubkey,
    /// Amount recovered by this call (0 when the vault was already empty)
    pub amount_recovered: u64,
}
