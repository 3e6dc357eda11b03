use actix_web::{HttpResponse, get, web};
use log::info;

use super::models::{AppState, MineResponse};
use crate::blockchain::{MINING_REWARD, MINING_SENDER, proof_of_work};

/// Mine the next block: proof-of-work against the current head, a reward
/// transaction for this node, then seal.
///
/// The search is CPU-bound, so it runs on the blocking pool against a
/// snapshot of the head with the ledger lock released; chain reads are
/// served while the search runs. The lock is taken again only to queue the
/// reward and append.
#[get("/mine")]
pub async fn mine(state: web::Data<AppState>) -> actix_web::Result<HttpResponse> {
    let last = {
        let ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.last_block()?.clone()
    };

    let (proof, previous_hash) = web::block(move || {
        let proof = proof_of_work(&last);
        (proof, last.hash())
    })
    .await?;

    let block = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.new_transaction(MINING_SENDER, state.node_id.as_str(), MINING_REWARD);
        ledger.new_block(proof, Some(previous_hash))?
    };

    info!("mined block #{} (proof={})", block.index, block.proof);
    Ok(HttpResponse::Ok().json(MineResponse {
        message: "New Block Forged",
        index: block.index,
        transactions: block.transactions,
        proof: block.proof,
        previous_hash: block.previous_hash,
    }))
}
