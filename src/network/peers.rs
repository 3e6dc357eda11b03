use std::collections::HashSet;

use reqwest::Url;

use crate::error::LedgerError;

/// Set of known peer base URLs consulted during consensus resolution.
///
/// Plain collection with no membership protocol; registering a peer says
/// nothing about its liveness.
#[derive(Debug, Default)]
pub struct PeerRegistry {
    nodes: HashSet<String>,
}

impl PeerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and record a peer address, returning the stored form.
    /// Accepts `http://host:port` as well as bare `host:port` (http
    /// assumed). Registering the same peer twice is a no-op.
    pub fn register(&mut self, address: &str) -> Result<String, LedgerError> {
        let normalized = normalize(address)?;
        self.nodes.insert(normalized.clone());
        Ok(normalized)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sorted copy of the peer set. Peers carry no inherent order; sorting
    /// keeps consensus iteration deterministic across calls.
    pub fn snapshot(&self) -> Vec<String> {
        let mut peers: Vec<String> = self.nodes.iter().cloned().collect();
        peers.sort();
        peers
    }
}

fn normalize(address: &str) -> Result<String, LedgerError> {
    let parsed = match Url::parse(address) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => url,
        // "host:port" parses with the host as its scheme; bare hosts fail
        // outright. Both get another try with an explicit scheme.
        _ => Url::parse(&format!("http://{address}"))
            .map_err(|_| LedgerError::Validation(format!("invalid node address: {address}")))?,
    };

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(LedgerError::Validation(format!(
            "invalid node address: {address}"
        )));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
