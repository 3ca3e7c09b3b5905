use anchor_lang::prelude::*;

use crate::error::*;

/**
 * Global fee configuration
 *
 * Holds the creation fee schedule for both fee modes and the account that
 * receives the fees.
 *
 * Derivation: ["config"]
 */
#[account]
#[derive(Default, Debug)]
pub struct Config {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Can update fees, fee receiver, and hand over the admin role
    pub admin: Pubkey,

    /// Receives native fees directly and token fees through its fee-mint account
    pub fee_receiver: Pubkey,

    /// Mint in which fee-token payments are made
    pub fee_mint: Pubkey,

    /// Creation fee when paying in lamports
    pub native_fee: u64,

    /// Creation fee when paying in the fee mint
    pub token_fee: u64,
}

impl Config {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + 1 + 32 * 3 + 8 * 2;

    // State update for the `initialize_config` instruction.
    pub fn initialize(
        &mut self,
        bump: u8,
        admin: Pubkey,
        fee_receiver: Pubkey,
        fee_mint: Pubkey,
        native_fee: u64,
        token_fee: u64,
    ) -> Result<()> {
        require_keys_neq!(fee_receiver, Pubkey::default(), MerkleDropError::InvalidFeeReceiver);

        self.bump = bump;
        self.admin = admin;
        self.fee_receiver = fee_receiver;
        self.fee_mint = fee_mint;
        self.native_fee = native_fee;
        self.token_fee = token_fee;

        Ok(())
    }

    // State update for the `update_config` instruction. `None` keeps the current value.
    pub fn update(
        &mut self,
        admin: Option<Pubkey>,
        fee_receiver: Option<Pubkey>,
        fee_mint: Option<Pubkey>,
        native_fee: Option<u64>,
        token_fee: Option<u64>,
    ) -> Result<()> {
        if let Some(fee_receiver) = fee_receiver {
            require_keys_neq!(fee_receiver, Pubkey::default(), MerkleDropError::InvalidFeeReceiver);
            self.fee_receiver = fee_receiver;
        }
        if let Some(admin) = admin {
            self.admin = admin;
        }
        if let Some(fee_mint) = fee_mint {
            self.fee_mint = fee_mint;
        }
        if let Some(native_fee) = native_fee {
            self.native_fee = native_fee;
        }
        if let Some(token_fee) = token_fee {
            self.token_fee = token_fee;
        }

        Ok(())
    }
}
