use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::*;
use crate::error::*;
use crate::state::Campaign;
use crate::utils::validations::{check_claim, check_recovery};

/// Deterministic vault address of a merkle root
///
/// Depends on nothing but the root and the program id, so it can be computed
/// before the campaign exists and never changes afterwards.
pub fn vault_address(root: &[u8; 32]) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AIRDROP_VAULT_SEED.as_bytes(), root.as_ref()], &crate::ID)
}

/// Resolves the campaign stored at a vault address
///
/// Only the fixed fields are deserialized; the claimed bitmap stays in the
/// account data. Anything that is not a campaign account owned by this
/// program is reported as `UnknownVault`.
pub fn load_campaign(info: &AccountInfo) -> Result<Campaign> {
    if info.owner != &crate::ID || info.data_is_empty() {
        msg!("{} does not hold a campaign", info.key());
        return err!(MerkleDropError::UnknownVault);
    }
    let data = info.try_borrow_data()?;
    let campaign = Campaign::try_deserialize(&mut data.as_ref()).map_err(|err| {
        msg!("{} does not hold a campaign: {}", info.key(), err);
        error!(MerkleDropError::UnknownVault)
    })?;
    require_gte!(
        data.len(),
        Campaign::space(campaign.recipient_count),
        MerkleDropError::UnknownVault
    );
    Ok(campaign)
}

/// Allocates the campaign account at its PDA
///
/// Fails with `DuplicateRoot` when the PDA already carries data. A PDA that
/// was pre-funded with lamports is topped up, allocated and assigned instead
/// of created.
pub fn create_campaign_account<'info>(
    payer: AccountInfo<'info>,
    campaign: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    root: &[u8; 32],
    bump: u8,
    space: usize,
) -> Result<()> {
    require!(campaign.data_is_empty(), MerkleDropError::DuplicateRoot);
    require!(
        campaign.owner == &system_program::ID,
        MerkleDropError::DuplicateRoot
    );

    let bump_bytes = [bump];
    let seeds: &[&[u8]] = &[AIRDROP_VAULT_SEED.as_bytes(), root.as_ref(), &bump_bytes];
    let signer = &[seeds];
    let rent_exempt = Rent::get()?.minimum_balance(space);
    let current_lamports = campaign.lamports();

    if current_lamports == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                system_program,
                system_program::CreateAccount {
                    from: payer,
                    to: campaign,
                },
                signer,
            ),
            rent_exempt,
            space as u64,
            &crate::ID,
        )?;
        return Ok(());
    }

    let top_up = rent_exempt.saturating_sub(current_lamports);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                system_program::Transfer {
                    from: payer,
                    to: campaign.clone(),
                },
            ),
            top_up,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            system_program::Allocate {
                account_to_allocate: campaign.clone(),
            },
            signer,
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system_program,
            system_program::Assign {
                account_to_assign: campaign,
            },
            signer,
        ),
        &crate::ID,
    )
}

/// Persists the fixed campaign fields into the account data
///
/// The claimed bitmap after them is left untouched.
pub fn store_campaign(info: &AccountInfo, campaign: &Campaign) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    campaign.try_serialize(&mut writer)
}

/// Reads the claimed bit of `index` straight from the account data
pub fn read_claimed(info: &AccountInfo, campaign: &Campaign, index: u32) -> Result<bool> {
    let data = info.try_borrow_data()?;
    let bitmap = data.get(Campaign::LEN..).unwrap_or_default();
    Ok(campaign.is_claimed(bitmap, index))
}

/// Checks one claim and records it in the campaign account
///
/// The claimed bit is set in place and the bookkeeping is persisted before
/// returning, so the caller's transfer always happens after the leaf is
/// spent. Returns the campaign's new total claimed.
pub fn apply_claim(
    info: &AccountInfo,
    campaign: &mut Campaign,
    now: i64,
    claimant: &Pubkey,
    index: u32,
    amount: u64,
    proof: &[[u8; 32]],
) -> Result<u64> {
    check_claim(campaign, now, claimant, index, amount, proof)?;

    let mut data = info.try_borrow_mut_data()?;
    require_gte!(data.len(), Campaign::LEN, MerkleDropError::UnknownVault);
    let (mut header, bitmap) = data.split_at_mut(Campaign::LEN);

    campaign.mark_claimed(bitmap, index)?;
    let total_claimed = campaign.record_claim(amount)?;
    campaign.try_serialize(&mut header)?;

    Ok(total_claimed)
}

/// Checks a recovery and records the amount leaving the vault
///
/// Returns the amount to transfer back to the depositor, 0 for an empty
/// vault. A balance differing from the bookkeeping (tokens sent straight to
/// the vault) is logged and recovered in full.
pub fn apply_recovery(
    info: &AccountInfo,
    campaign: &mut Campaign,
    now: i64,
    caller: &Pubkey,
    vault_balance: u64,
) -> Result<u64> {
    check_recovery(campaign, now, caller)?;
    if vault_balance == 0 {
        return Ok(0);
    }

    let expected = campaign.expected_remaining();
    if vault_balance != expected {
        msg!("vault holds {} but bookkeeping expects {}", vault_balance, expected);
    }

    campaign.record_recovery(vault_balance)?;
    store_campaign(info, campaign)?;

    Ok(vault_balance)
}
