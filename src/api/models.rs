use std::sync::Mutex;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::blockchain::{Block, Blockchain};
use crate::network::PeerRegistry;
use crate::transaction::Transaction;

/// How long a single peer fetch may take during consensus resolution.
const PEER_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared application state: the in-memory ledger, the peer registry, this
/// node's identity and the HTTP client used for peer fetches.
///
/// All ledger mutation is serialized through the mutex; at most one
/// mutating request is assumed logically in flight at a time.
pub struct AppState {
    pub ledger: Mutex<Blockchain>,
    pub peers: Mutex<PeerRegistry>,
    pub node_id: String,
    pub http: reqwest::Client,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            ledger: Mutex::new(Blockchain::new()),
            peers: Mutex::new(PeerRegistry::new()),
            node_id: Uuid::new_v4().simple().to_string(),
            http: reqwest::Client::builder()
                .timeout(PEER_FETCH_TIMEOUT)
                .build()
                .expect("build http client"),
        }
    }
}

/* ---------- Mining API Models ---------- */

#[derive(Serialize)]
pub struct MineResponse {
    pub message: &'static str,
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

/* ---------- Transaction API Models ---------- */

/// All three fields are required; they stay optional here so absence maps
/// to a ValidationError instead of a deserializer rejection.
#[derive(Deserialize)]
pub struct NewTransactionRequest {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub amount: Option<u64>,
}

#[derive(Serialize)]
pub struct NewTransactionResponse {
    pub message: String,
    pub index: u64,
}

/* ---------- Node API Models ---------- */

#[derive(Deserialize)]
pub struct RegisterNodesRequest {
    pub nodes: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct RegisterNodesResponse {
    pub message: &'static str,
    pub total_nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct ChainReplacedResponse {
    pub message: &'static str,
    pub new_chain: Vec<Block>,
}

#[derive(Serialize)]
pub struct ChainAuthoritativeResponse {
    pub message: &'static str,
    pub chain: Vec<Block>,
}
