use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

use crate::error::MerkleDropError;

/// Token transfer supporting both SPL Token and Token 2022
///
/// Any failure reported by the token program is logged and surfaced as
/// `TransferFailed`.
#[allow(clippy::too_many_arguments)]
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(token_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(token_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals).map_err(|err| {
        msg!("token transfer of {} failed: {}", amount, err);
        error!(MerkleDropError::TransferFailed)
    })
}

/// Lamport transfer from a signer through the system program
pub fn transfer_lamports<'a>(
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    let cpi_ctx = CpiContext::new(system_program, system_program::Transfer { from, to });

    system_program::transfer(cpi_ctx, amount).map_err(|err| {
        msg!("lamport transfer of {} failed: {}", amount, err);
        error!(MerkleDropError::TransferFailed)
    })
}
