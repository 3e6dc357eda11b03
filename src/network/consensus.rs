use std::sync::Mutex;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::blockchain::{Block, Blockchain};
use crate::error::LedgerError;

/// Wire shape of `GET /chain`. The same struct serializes the local
/// endpoint's response and deserializes what peers report during
/// resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainSnapshot {
    pub chain: Vec<Block>,
    pub length: usize,
}

/// Longest-valid-chain consensus: consult every registered peer and adopt
/// the longest chain that both exceeds the local length and validates.
/// Returns true when the local chain was replaced.
///
/// Only a strictly greater reported length can win; equal-length chains
/// never displace the local one. Each peer gets a single fetch attempt,
/// bounded by the client timeout, and a failed or malformed fetch just
/// removes that peer from consideration.
pub async fn resolve_conflicts(
    client: &reqwest::Client,
    ledger: &Mutex<Blockchain>,
    peers: &[String],
) -> bool {
    let mut max_length = ledger.lock().expect("mutex poisoned").len();
    let mut winner: Option<Vec<Block>> = None;

    for peer in peers {
        let snapshot = match fetch_chain(client, peer).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("consensus: skipping peer: {err}");
                continue;
            }
        };

        if snapshot.length <= max_length {
            continue;
        }
        if let Err(err) = Blockchain::check_chain(&snapshot.chain) {
            warn!(
                "consensus: rejecting chain of reported length {} from {peer}: {err}",
                snapshot.length
            );
            continue;
        }

        max_length = snapshot.length;
        winner = Some(snapshot.chain);
    }

    match winner {
        Some(chain) => {
            info!("consensus: local chain replaced ({max_length} block(s))");
            ledger.lock().expect("mutex poisoned").replace_chain(chain);
            true
        }
        None => false,
    }
}

async fn fetch_chain(client: &reqwest::Client, peer: &str) -> Result<ChainSnapshot, LedgerError> {
    let url = format!("{peer}/chain");
    let response = client
        .get(&url)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(|err| LedgerError::PeerUnreachable {
            peer: peer.to_string(),
            reason: err.to_string(),
        })?;

    response
        .json::<ChainSnapshot>()
        .await
        .map_err(|err| LedgerError::PeerUnreachable {
            peer: peer.to_string(),
            reason: err.to_string(),
        })
}
