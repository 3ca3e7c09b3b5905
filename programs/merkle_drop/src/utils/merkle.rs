use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

/// Leaf digest: sha256(index_le || recipient || amount_le)
///
/// The off-chain tree builder must encode leaves with exactly this layout.
pub fn leaf_hash(index: u32, recipient: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[
        &index.to_le_bytes(),
        &recipient.to_bytes(),
        &amount.to_le_bytes(),
    ])
    .to_bytes()
}

/// Parent digest of two siblings, inputs sorted lexicographically first
/// so proofs carry no left/right flag
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Folds `leaf` up through `proof` and compares the result with `root`
///
/// An empty proof only verifies a single-leaf tree (root == leaf).
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));
    computed == root
}
