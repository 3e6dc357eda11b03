use log::debug;

use super::pow::{proof_of_work, valid_proof};
use super::{Block, GENESIS_PREVIOUS_HASH, GENESIS_PROOF, MINING_REWARD, MINING_SENDER};
use crate::error::LedgerError;
use crate::transaction::Transaction;

/// In-memory ledger: the hash-linked chain plus the pool of transactions
/// waiting for the next block.
///
/// One instance lives for the process lifetime. The chain is append-only in
/// normal operation; consensus resolution may replace it wholesale.
#[derive(Debug)]
pub struct Blockchain {
    pub chain: Vec<Block>,
    pending: Vec<Transaction>,
}

impl Blockchain {
    /// Build a ledger anchored by its genesis block.
    pub fn new() -> Self {
        let mut ledger = Self {
            chain: Vec::new(),
            pending: Vec::new(),
        };
        ledger.forge(GENESIS_PROOF, GENESIS_PREVIOUS_HASH.to_string());
        ledger
    }

    /// Final block of the chain.
    pub fn last_block(&self) -> Result<&Block, LedgerError> {
        self.chain.last().ok_or(LedgerError::EmptyChain)
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Transactions queued for the next block.
    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }

    /// Queue a transaction unconditionally and return the index of the
    /// block that will contain it.
    pub fn new_transaction(
        &mut self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: u64,
    ) -> u64 {
        self.pending.push(Transaction::new(sender, recipient, amount));
        self.chain.len() as u64 + 1
    }

    /// Seal the next block with the given proof, draining the pending pool
    /// into it. `previous_hash` defaults to the hash of the current last
    /// block. This is the only chain mutator outside consensus resolution.
    pub fn new_block(
        &mut self,
        proof: u64,
        previous_hash: Option<String>,
    ) -> Result<Block, LedgerError> {
        let previous_hash = match previous_hash {
            Some(hash) => hash,
            None => self.last_block()?.hash(),
        };
        Ok(self.forge(proof, previous_hash).clone())
    }

    fn forge(&mut self, proof: u64, previous_hash: String) -> &Block {
        let block = Block::new(
            self.chain.len() as u64 + 1,
            std::mem::take(&mut self.pending),
            proof,
            previous_hash,
        );
        debug!(
            "forged block #{} carrying {} transaction(s)",
            block.index,
            block.transactions.len()
        );
        self.chain.push(block);
        self.chain.last().expect("chain cannot be empty after push")
    }

    /// Mine the next block: run the proof-of-work search against the
    /// current head, queue the reward transaction for this node, then seal.
    ///
    /// The reward is part of the mining contract, not a separate step: the
    /// freshly mined block always carries it.
    pub fn mine(&mut self, node_id: &str) -> Result<Block, LedgerError> {
        let last = self.last_block()?.clone();
        let proof = proof_of_work(&last);
        let previous_hash = last.hash();

        self.new_transaction(MINING_SENDER, node_id, MINING_REWARD);
        self.new_block(proof, Some(previous_hash))
    }

    /// True when every adjacent pair in `candidate` hash-links correctly and
    /// carries a valid proof.
    ///
    /// The first block is taken on trust: nothing re-checks it against a
    /// known-good genesis, so a self-consistent chain built on a different
    /// genesis passes. Known limitation.
    pub fn valid_chain(candidate: &[Block]) -> bool {
        Self::check_chain(candidate).is_ok()
    }

    pub(crate) fn check_chain(candidate: &[Block]) -> Result<(), LedgerError> {
        for pair in candidate.windows(2) {
            let (prev, block) = (&pair[0], &pair[1]);
            let last_hash = prev.hash();

            if block.previous_hash != last_hash {
                return Err(LedgerError::InvalidChain);
            }
            if !valid_proof(prev.proof, block.proof, &last_hash) {
                return Err(LedgerError::InvalidChain);
            }
        }
        Ok(())
    }

    /// Adopt a chain chosen by consensus resolution. The pending pool is
    /// left untouched.
    pub fn replace_chain(&mut self, chain: Vec<Block>) {
        self.chain = chain;
    }
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ledger_starts_at_genesis() {
        let ledger = Blockchain::new();
        assert_eq!(ledger.len(), 1);

        let genesis = &ledger.chain[0];
        assert_eq!(genesis.index, 1);
        assert_eq!(genesis.proof, GENESIS_PROOF);
        assert_eq!(genesis.previous_hash, GENESIS_PREVIOUS_HASH);
        assert!(genesis.transactions.is_empty());
        assert!(ledger.pending().is_empty());
    }

    #[test]
    fn new_transaction_targets_the_next_block() {
        let mut ledger = Blockchain::new();
        let index = ledger.new_transaction("alice", "bob", 7);
        assert_eq!(index, 2);
        assert_eq!(ledger.pending().len(), 1);

        // Queuing more does not move the target until a block is sealed.
        let index = ledger.new_transaction("bob", "carol", 3);
        assert_eq!(index, 2);
        assert_eq!(ledger.pending().len(), 2);
    }

    #[test]
    fn new_block_drains_the_pending_pool() {
        let mut ledger = Blockchain::new();
        ledger.new_transaction("alice", "bob", 7);
        ledger.new_transaction("bob", "carol", 3);
        let queued = ledger.pending().to_vec();

        let block = ledger.new_block(12345, None).unwrap();
        assert_eq!(block.index, 2);
        assert_eq!(block.transactions, queued);
        assert!(ledger.pending().is_empty());
    }

    #[test]
    fn mine_seals_a_valid_block_with_the_reward() {
        let mut ledger = Blockchain::new();
        ledger.new_transaction("alice", "bob", 7);

        let block = ledger.mine("node-a").unwrap();
        assert_eq!(block.index, 2);
        assert!(ledger.pending().is_empty());

        // Queued transaction plus the bundled reward.
        assert_eq!(block.transactions.len(), 2);
        let reward = block.transactions.last().unwrap();
        assert_eq!(reward.sender, MINING_SENDER);
        assert_eq!(reward.recipient, "node-a");
        assert_eq!(reward.amount, MINING_REWARD);

        let genesis = &ledger.chain[0];
        assert_eq!(block.previous_hash, genesis.hash());
        assert!(valid_proof(genesis.proof, block.proof, &genesis.hash()));
    }

    #[test]
    fn mined_chains_index_monotonically_and_validate() {
        let mut ledger = Blockchain::new();
        ledger.mine("node-a").unwrap();
        ledger.new_transaction("alice", "bob", 1);
        ledger.mine("node-a").unwrap();

        for (i, block) in ledger.chain.iter().enumerate() {
            assert_eq!(block.index, i as u64 + 1);
        }
        for pair in ledger.chain.windows(2) {
            assert_eq!(pair[1].previous_hash, pair[0].hash());
        }
        assert!(Blockchain::valid_chain(&ledger.chain));
    }

    #[test]
    fn tampered_proof_invalidates_the_chain() {
        let mut ledger = Blockchain::new();
        ledger.mine("node-a").unwrap();

        let mut chain = ledger.chain.clone();
        chain[1].proof += 1;
        assert!(!Blockchain::valid_chain(&chain));
    }

    #[test]
    fn tampered_link_invalidates_the_chain() {
        let mut ledger = Blockchain::new();
        ledger.mine("node-a").unwrap();

        let mut chain = ledger.chain.clone();
        chain[1].previous_hash = "1".repeat(64);
        assert!(!Blockchain::valid_chain(&chain));
    }

    #[test]
    fn last_block_fails_only_on_a_chain_with_no_genesis() {
        let ledger = Blockchain {
            chain: Vec::new(),
            pending: Vec::new(),
        };
        assert!(matches!(ledger.last_block(), Err(LedgerError::EmptyChain)));
    }

    #[test]
    fn replace_chain_keeps_the_pending_pool() {
        let mut ledger = Blockchain::new();
        ledger.new_transaction("alice", "bob", 7);

        let mut other = Blockchain::new();
        other.mine("node-b").unwrap();

        ledger.replace_chain(other.chain.clone());
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.pending().len(), 1);
    }
}
