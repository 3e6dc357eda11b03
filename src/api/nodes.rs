use actix_web::{HttpResponse, get, post, web};
use log::info;

use super::models::{
    AppState, ChainAuthoritativeResponse, ChainReplacedResponse, RegisterNodesRequest,
    RegisterNodesResponse,
};
use crate::error::LedgerError;
use crate::network;

/// Register peer nodes to consult during consensus resolution.
#[post("/nodes/register")]
pub async fn register_nodes(
    state: web::Data<AppState>,
    body: web::Json<RegisterNodesRequest>,
) -> actix_web::Result<HttpResponse> {
    let nodes = body
        .into_inner()
        .nodes
        .ok_or_else(|| LedgerError::Validation("please supply a valid list of nodes".to_string()))?;

    let total_nodes = {
        let mut peers = state.peers.lock().expect("mutex poisoned");
        for node in &nodes {
            peers.register(node)?;
        }
        peers.snapshot()
    };

    info!(
        "registered {} node(s), {} known in total",
        nodes.len(),
        total_nodes.len()
    );
    Ok(HttpResponse::Created().json(RegisterNodesResponse {
        message: "New nodes have been added",
        total_nodes,
    }))
}

/// Run longest-chain consensus against every registered peer.
#[get("/nodes/resolve")]
pub async fn resolve(state: web::Data<AppState>) -> actix_web::Result<HttpResponse> {
    let peers = state.peers.lock().expect("mutex poisoned").snapshot();
    let replaced = network::resolve_conflicts(&state.http, &state.ledger, &peers).await;

    let ledger = state.ledger.lock().expect("mutex poisoned");
    let response = if replaced {
        HttpResponse::Ok().json(ChainReplacedResponse {
            message: "Our chain was replaced",
            new_chain: ledger.chain.clone(),
        })
    } else {
        HttpResponse::Ok().json(ChainAuthoritativeResponse {
            message: "Our chain is authoritative",
            chain: ledger.chain.clone(),
        })
    };
    Ok(response)
}
