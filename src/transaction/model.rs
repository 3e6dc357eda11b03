use serde::{Deserialize, Serialize};

/// A transfer waiting to be embedded into the next mined block.
///
/// There is no identity beyond the three fields: duplicates are allowed and
/// nothing checks balances or signatures before a transaction enters the
/// pending pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: u64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: u64) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        }
    }
}
