use sha2::{Digest, Sha256};

use super::{Block, PROOF_DIFFICULTY};

/// Check whether `proof` solves the puzzle left by the previous block:
/// SHA-256 of `{last_proof}{proof}{last_hash}` must end in
/// [`PROOF_DIFFICULTY`] zero hex characters.
///
/// Pure function of its inputs; the same predicate gates both the mining
/// search and chain validation.
pub fn valid_proof(last_proof: u64, proof: u64, last_hash: &str) -> bool {
    let guess = format!("{last_proof}{proof}{last_hash}");
    let mut hasher = Sha256::new();
    hasher.update(guess.as_bytes());
    let digest = hex::encode(hasher.finalize());

    let target = "0".repeat(PROOF_DIFFICULTY);
    digest.ends_with(&target)
}

/// Find the smallest proof for the block that will follow `last_block`.
///
/// Linear search from zero, no upper bound: the loop only exits on success,
/// and the expected iteration count is 16^[`PROOF_DIFFICULTY`]. Deterministic
/// for a given previous block.
pub fn proof_of_work(last_block: &Block) -> u64 {
    let last_proof = last_block.proof;
    let last_hash = last_block.hash();

    let mut proof: u64 = 0;
    while !valid_proof(last_proof, proof, &last_hash) {
        proof += 1;
    }
    proof
}

#[cfg(test)]
mod tests {
    use super::{proof_of_work, valid_proof};
    use crate::blockchain::{Block, GENESIS_PREVIOUS_HASH, GENESIS_PROOF};

    // Smallest solution for (100, ?, "1"), found by exhaustive search.
    const KNOWN_PROOF: u64 = 34273;

    #[test]
    fn known_vector_holds() {
        assert!(valid_proof(100, KNOWN_PROOF, "1"));
    }

    #[test]
    fn neighbours_of_known_vector_fail() {
        assert!(!valid_proof(100, KNOWN_PROOF - 1, "1"));
        assert!(!valid_proof(100, KNOWN_PROOF + 1, "1"));
    }

    #[test]
    fn predicate_depends_on_every_input() {
        assert!(!valid_proof(101, KNOWN_PROOF, "1"));
        assert!(!valid_proof(100, KNOWN_PROOF, "2"));
    }

    #[test]
    fn search_finds_the_smallest_solution_for_a_fixed_block() {
        let genesis = Block {
            index: 1,
            timestamp: 0,
            transactions: Vec::new(),
            proof: GENESIS_PROOF,
            previous_hash: GENESIS_PREVIOUS_HASH.to_string(),
        };

        // Precomputed for the pinned genesis hash
        // eb0e1f6b9803f5cb1ce67b39380cbf6a76ffec7f5b66ec89181e27222b1c2aa6.
        let proof = proof_of_work(&genesis);
        assert_eq!(proof, 54114);
        assert!(valid_proof(genesis.proof, proof, &genesis.hash()));
    }
}
