use anchor_lang::prelude::*;

use super::assert_err;
use crate::error::MerkleDropError;
use crate::event::ConfigUpdated;
use crate::state::Config;

fn config() -> Config {
    let mut config = Config::default();
    config
        .initialize(
            254,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            50_000_000,
            50,
        )
        .unwrap();
    config
}

#[test]
fn test_len_matches_serialized_size() {
    let mut serialized = Vec::new();
    config().try_serialize(&mut serialized).unwrap();

    assert_eq!(serialized.len(), Config::LEN);
}

#[test]
fn test_initialize_rejects_default_fee_receiver() {
    let mut config = Config::default();
    let result = config.initialize(
        254,
        Pubkey::new_unique(),
        Pubkey::default(),
        Pubkey::new_unique(),
        1,
        1,
    );

    assert_err(result, MerkleDropError::InvalidFeeReceiver);
}

#[test]
fn test_update_keeps_omitted_fields() {
    let mut config = config();
    let before_admin = config.admin;
    let before_receiver = config.fee_receiver;
    let before_mint = config.fee_mint;

    config.update(None, None, None, Some(7), None).unwrap();

    assert_eq!(config.native_fee, 7);
    assert_eq!(config.token_fee, 50);
    assert_eq!(config.admin, before_admin);
    assert_eq!(config.fee_receiver, before_receiver);
    assert_eq!(config.fee_mint, before_mint);
}

#[test]
fn test_update_replaces_fields() {
    let mut config = config();
    let admin = Pubkey::new_unique();
    let receiver = Pubkey::new_unique();
    let mint = Pubkey::new_unique();

    config.update(Some(admin), Some(receiver), Some(mint), Some(0), Some(0)).unwrap();

    assert_eq!(config.admin, admin);
    assert_eq!(config.fee_receiver, receiver);
    assert_eq!(config.fee_mint, mint);
    assert_eq!((config.native_fee, config.token_fee), (0, 0));
}

#[test]
fn test_update_rejects_default_fee_receiver() {
    let mut config = config();
    let before = config.fee_receiver;

    assert_err(
        config.update(None, Some(Pubkey::default()), None, None, None),
        MerkleDropError::InvalidFeeReceiver,
    );
    assert_eq!(config.fee_receiver, before);
}

#[test]
fn test_update_event_reports_fee_mint() {
    let mut config = config();
    let key = Pubkey::new_unique();
    let mint = Pubkey::new_unique();

    config.update(None, None, Some(mint), None, None).unwrap();
    let event = ConfigUpdated::new(key, &config);

    assert_eq!(event.config, key);
    assert_eq!(event.fee_mint, mint);
    assert_eq!(event.admin, config.admin);
    assert_eq!(event.fee_receiver, config.fee_receiver);
    assert_eq!((event.native_fee, event.token_fee), (50_000_000, 50));
}
