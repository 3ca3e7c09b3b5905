//! Off-chain helpers for integrators, enabled with the `client` feature

use anchor_lang::prelude::*;

use crate::utils::{hash_pair, leaf_hash};

/// One allocation of the airdrop: leaf `index` pays `amount` to `recipient`
#[derive(Debug, Clone)]
pub struct Allocation {
    pub index: u32,
    pub recipient: Pubkey,
    pub amount: u64,
}

/// Builds the merkle tree of an allocation list, producing the root passed to
/// `create_airdrop` and the proofs passed to `claim`
///
/// Levels are stored back to back in `nodes`; an odd node at the end of a
/// level is paired with itself.
pub struct AllocationTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl AllocationTree {
    pub fn new(allocations: &[Allocation]) -> Self {
        let nodes = allocations
            .iter()
            .map(|a| leaf_hash(a.index, &a.recipient, a.amount))
            .collect();
        let mut tree = AllocationTree {
            nodes,
            leaf_count: allocations.len(),
        };
        tree.build();
        tree
    }

    fn build(&mut self) {
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            for i in (0..level_len).step_by(2) {
                let left = self.nodes[level_start + i];
                let right = if i + 1 < level_len {
                    self.nodes[level_start + i + 1]
                } else {
                    left
                };
                self.nodes.push(hash_pair(&left, &right));
            }
            level_start += level_len;
            level_len = next_level_len(level_len);
        }
    }

    /// All zeros for an empty allocation list
    pub fn root(&self) -> [u8; 32] {
        self.nodes.last().copied().unwrap_or_default()
    }

    /// Number of leaves, the `recipient_count` of the campaign
    pub fn len(&self) -> usize {
        self.leaf_count
    }

    pub fn is_empty(&self) -> bool {
        self.leaf_count == 0
    }

    /// Sibling path of the leaf at `position` (its position in the allocation list)
    pub fn proof(&self, position: usize) -> Option<Vec<[u8; 32]>> {
        if position >= self.leaf_count {
            return None;
        }

        let mut proof = Vec::new();
        let mut current = position;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let sibling = if current % 2 == 0 {
                if current + 1 < level_len {
                    current + 1
                } else {
                    current
                }
            } else {
                current - 1
            };
            proof.push(self.nodes[level_start + sibling]);

            current /= 2;
            level_start += level_len;
            level_len = next_level_len(level_len);
        }

        Some(proof)
    }
}

fn next_level_len(level_len: usize) -> usize {
    level_len.div_ceil(2)
}
