use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::transaction::Transaction;

/// A single block in the chain.
///
/// Field order here is the canonical serialization order: the block hash is
/// computed over the serde_json rendering, and serde emits struct fields in
/// declaration order. Reordering fields changes every hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: i64, // Unix timestamp (UTC)
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

impl Block {
    /// Create a block stamped with the current time. Linking and proof
    /// checks are the ledger's job, not the constructor's.
    pub fn new(
        index: u64,
        transactions: Vec<Transaction>,
        proof: u64,
        previous_hash: String,
    ) -> Self {
        Self {
            index,
            timestamp: Utc::now().timestamp(),
            transactions,
            proof,
            previous_hash,
        }
    }

    /// SHA-256 over the canonical JSON form of the block, hex encoded.
    ///
    /// Proof validation and chain validation recompute this independently
    /// and must agree bit-for-bit.
    pub fn hash(&self) -> String {
        let preimage = serde_json::to_string(self).expect("serialize block");
        let mut hasher = Sha256::new();
        hasher.update(preimage.as_bytes());
        hex::encode(hasher.finalize())
    }
}
