use anchor_lang::prelude::*;

#[error_code]
pub enum MerkleDropError {
    // Campaign creation errors
    #[msg("A campaign with this merkle root already exists")]
    DuplicateRoot,
    #[msg("Deadline must be in the future")]
    InvalidDeadline,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Recipient count must be between 1 and MAX_RECIPIENTS")]
    InvalidRecipientCount,

    // Fee errors
    #[msg("Attached fee does not match the configured fee")]
    FeeMismatch,
    #[msg("Fee token accounts are required when paying in the fee token")]
    FeeAccountsMissing,
    #[msg("Fee receiver cannot be the default address")]
    InvalidFeeReceiver,

    // Token movement errors
    #[msg("Token transfer failed")]
    TransferFailed,
    #[msg("Token mint does not match the campaign's token mint")]
    TokenMintMismatch,
    #[msg("Token account is not owned by the expected authority")]
    InvalidTokenAccount,

    // Lookup errors
    #[msg("No campaign is registered at this vault address")]
    UnknownVault,

    // Time window errors
    #[msg("Campaign has expired")]
    Expired,
    #[msg("Campaign has not expired yet")]
    NotExpired,

    // Claim errors
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Index already claimed")]
    AlreadyClaimed,
    #[msg("Index is outside the campaign's recipient range")]
    IndexOutOfRange,
    #[msg("Claim batch arguments and accounts have mismatched lengths")]
    BatchLengthMismatch,

    // Access control errors
    #[msg("Only the depositor can perform this action")]
    NotDepositor,
    #[msg("Only the config admin can perform this action")]
    OnlyAdmin,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
