mod test_campaign;
mod test_config;

use anchor_lang::prelude::*;

use crate::client::Allocation;
use crate::error::MerkleDropError;
use crate::state::{Campaign, FeeMode};

/// Asserts that `result` failed with `expected`
pub fn assert_err<T: std::fmt::Debug>(result: Result<T>, expected: MerkleDropError) {
    let err = result.expect_err("expected an error");
    assert_eq!(err, anchor_lang::error::Error::from(expected), "got {}", err);
}

/// Campaign record as create_airdrop would write it
pub fn new_campaign(
    root: [u8; 32],
    total_amount: u64,
    deadline: i64,
    recipient_count: u32,
) -> Campaign {
    let (_, bump) = crate::utils::vault_address(&root);
    let mut campaign = Campaign::default();
    campaign.initialize(
        bump,
        root,
        [7; 32],
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        FeeMode::PaidInNativeCurrency,
        total_amount,
        deadline,
        deadline - 1_000,
        recipient_count,
    );
    campaign
}

/// Zeroed claimed bitmap sized for `campaign`
pub fn empty_bitmap(campaign: &Campaign) -> Vec<u8> {
    vec![0; Campaign::bitmap_len(campaign.recipient_count)]
}

/// `count` allocations with fresh recipients and amounts 10, 20, 30, ...
pub fn sample_allocations(count: u32) -> Vec<Allocation> {
    (0..count)
        .map(|index| Allocation {
            index,
            recipient: Pubkey::new_unique(),
            amount: 10 * (index as u64 + 1),
        })
        .collect()
}
