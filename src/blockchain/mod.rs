pub mod block;
pub mod model;
pub mod pow;

pub use block::Block;
pub use model::Blockchain;
pub use pow::{proof_of_work, valid_proof};

/// Proof carried by the genesis block.
pub const GENESIS_PROOF: u64 = 100;

/// Sentinel previous-hash of the genesis block (nothing precedes it).
pub const GENESIS_PREVIOUS_HASH: &str = "1";

/// Number of trailing zero hex characters a valid proof digest must show.
/// Expected search cost grows as 16^n, so keep this low in dev.
pub const PROOF_DIFFICULTY: usize = 4;

/// Sender recorded on the reward transaction of every mined block.
pub const MINING_SENDER: &str = "0";

/// Reward paid to the node that finds a proof.
pub const MINING_REWARD: u64 = 1;
