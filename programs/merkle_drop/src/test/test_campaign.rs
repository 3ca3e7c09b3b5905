use anchor_lang::prelude::*;
use anchor_lang::system_program;

use super::{assert_err, empty_bitmap, new_campaign};
use crate::constants::*;
use crate::error::MerkleDropError;
use crate::state::{Campaign, CampaignStatus};
use crate::utils::{create_campaign_account, vault_address};

const DEADLINE: i64 = 1_700_000_000;

/// Runs campaign creation for `root` over a vault account with the given owner and data
fn create_over(root: &[u8; 32], owner: &Pubkey, data: &mut [u8]) -> Result<()> {
    let (vault, bump) = vault_address(root);
    let payer = Pubkey::new_unique();
    let system = system_program::ID;
    let mut payer_lamports = 1_000_000_000;
    let mut vault_lamports = 1_000_000;
    let mut system_lamports = 1;
    let mut payer_data: [u8; 0] = [];
    let mut system_data: [u8; 0] = [];

    create_campaign_account(
        AccountInfo::new(
            &payer,
            true,
            true,
            &mut payer_lamports,
            &mut payer_data,
            &system,
            false,
            0,
        ),
        AccountInfo::new(&vault, false, true, &mut vault_lamports, data, owner, false, 0),
        AccountInfo::new(
            &system,
            false,
            false,
            &mut system_lamports,
            &mut system_data,
            &system,
            true,
            0,
        ),
        root,
        bump,
        Campaign::space(4),
    )
}

#[test]
fn test_space_covers_header_and_bitmap() {
    for recipient_count in [1, 7, 8, 9, 1000, MAX_RECIPIENTS] {
        let campaign = new_campaign([3; 32], 160, DEADLINE, recipient_count);
        let mut serialized = Vec::new();
        campaign.try_serialize(&mut serialized).unwrap();

        assert_eq!(serialized.len(), Campaign::LEN);
        assert_eq!(
            Campaign::space(recipient_count),
            Campaign::LEN + Campaign::bitmap_len(recipient_count)
        );
    }
}

#[test]
fn test_largest_campaign_fits_cpi_allocation() {
    assert!(Campaign::space(MAX_RECIPIENTS) <= 10 * 1024);
    assert_eq!(Campaign::bitmap_len(1), 1);
    assert_eq!(Campaign::bitmap_len(8), 1);
    assert_eq!(Campaign::bitmap_len(9), 2);
}

#[test]
fn test_existing_root_is_rejected() {
    let root = [11u8; 32];

    // Campaign already written by this program
    let campaign = new_campaign(root, 160, DEADLINE, 4);
    let mut data = vec![0u8; Campaign::space(4)];
    let mut writer: &mut [u8] = &mut data;
    campaign.try_serialize(&mut writer).unwrap();
    assert_err(create_over(&root, &crate::ID, &mut data), MerkleDropError::DuplicateRoot);

    // System-owned address that already carries data
    let mut data = vec![1u8; 10];
    assert_err(
        create_over(&root, &system_program::ID, &mut data),
        MerkleDropError::DuplicateRoot,
    );

    // Empty account already assigned to this program
    let mut data: Vec<u8> = Vec::new();
    assert_err(create_over(&root, &crate::ID, &mut data), MerkleDropError::DuplicateRoot);
}

#[test]
fn test_mark_claimed_once() {
    let campaign = new_campaign([1; 32], 160, DEADLINE, 4);
    let mut bitmap = empty_bitmap(&campaign);

    assert!(!campaign.is_claimed(&bitmap, 1));
    campaign.mark_claimed(&mut bitmap, 1).unwrap();
    assert!(campaign.is_claimed(&bitmap, 1));

    assert_err(campaign.mark_claimed(&mut bitmap, 1), MerkleDropError::AlreadyClaimed);
    assert!(campaign.is_claimed(&bitmap, 1), "a rejected mark never clears the bit");

    for other in [0, 2, 3] {
        assert!(!campaign.is_claimed(&bitmap, other));
    }
}

#[test]
fn test_claimed_set_only_grows() {
    let campaign = new_campaign([1; 32], 1_000, DEADLINE, 20);
    let mut bitmap = empty_bitmap(&campaign);
    let order = [19, 0, 8, 7, 9, 15, 16, 1];

    for (step, index) in order.iter().enumerate() {
        campaign.mark_claimed(&mut bitmap, *index).unwrap();
        for earlier in &order[..=step] {
            assert!(campaign.is_claimed(&bitmap, *earlier));
        }
    }
    let claimed = (0..20).filter(|i| campaign.is_claimed(&bitmap, *i)).count();
    assert_eq!(claimed, order.len());
}

#[test]
fn test_index_out_of_range() {
    let campaign = new_campaign([1; 32], 160, DEADLINE, 9);
    let mut bitmap = empty_bitmap(&campaign);

    campaign.mark_claimed(&mut bitmap, 8).unwrap();
    assert_err(campaign.mark_claimed(&mut bitmap, 9), MerkleDropError::IndexOutOfRange);
    assert_err(
        campaign.mark_claimed(&mut bitmap, u32::MAX),
        MerkleDropError::IndexOutOfRange,
    );
    assert!(!campaign.is_claimed(&bitmap, 9));

    // A bitmap shorter than the recipient count never panics
    assert_err(campaign.mark_claimed(&mut [], 0), MerkleDropError::IndexOutOfRange);
    assert!(!campaign.is_claimed(&[], 0));
}

#[test]
fn test_bookkeeping() {
    let mut campaign = new_campaign([1; 32], 160, DEADLINE, 4);

    assert_eq!(campaign.record_claim(50).unwrap(), 50);
    assert_eq!(campaign.record_claim(30).unwrap(), 80);
    assert_eq!(campaign.expected_remaining(), 80);

    campaign.record_recovery(80).unwrap();
    assert_eq!(campaign.expected_remaining(), 0);

    // Recovering a donated surplus saturates instead of failing
    campaign.record_recovery(25).unwrap();
    assert_eq!(campaign.expected_remaining(), 0);

    campaign.total_claimed = u64::MAX;
    assert_err(campaign.record_claim(1), MerkleDropError::ArithmeticOverflow);
}

#[test]
fn test_expiry_boundary() {
    let campaign = new_campaign([1; 32], 160, DEADLINE, 4);

    assert!(!campaign.is_expired(DEADLINE - 1));
    assert!(campaign.is_expired(DEADLINE));
    assert!(campaign.is_expired(DEADLINE + 1));
}

#[test]
fn test_status_transitions() {
    let campaign = new_campaign([1; 32], 160, DEADLINE, 4);
    let status = |now, balance| CampaignStatus::of(&campaign, now, balance);

    assert_eq!(status(DEADLINE - 1, 160), CampaignStatus::Active);
    assert_eq!(status(DEADLINE - 1, 0), CampaignStatus::Active);
    assert_eq!(status(DEADLINE, 160), CampaignStatus::Expired);
    assert_eq!(status(DEADLINE + 100, 0), CampaignStatus::Drained);
}

#[test]
fn test_signer_seeds_derive_vault_address() {
    let root = [42u8; 32];
    let campaign = new_campaign(root, 160, DEADLINE, 4);
    let seeds = campaign.signer_seeds();

    let derived = Pubkey::create_program_address(&seeds, &crate::ID).unwrap();
    assert_eq!(derived, vault_address(&root).0);
}

#[test]
fn test_vault_address_is_stable() {
    let root = [9u8; 32];
    let first = vault_address(&root);

    assert_eq!(first, vault_address(&root));
    assert_ne!(first.0, vault_address(&[10u8; 32]).0);

    let seeds: &[&[u8]] = &[AIRDROP_VAULT_SEED.as_bytes(), &root];
    assert_eq!(first, Pubkey::find_program_address(seeds, &crate::ID));
}
