use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Crate-wide error type.
///
/// Peer-level failures (`PeerUnreachable`, `InvalidChain`) are absorbed
/// inside consensus resolution and never abort a request; the remaining
/// variants surface at the HTTP boundary via `ResponseError`.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Last-block access on a chain with no genesis block. Unreachable as
    /// long as the ledger constructor forged the genesis block.
    #[error("the chain has no blocks")]
    EmptyChain,

    #[error("{0}")]
    Validation(String),

    #[error("peer {peer} unreachable: {reason}")]
    PeerUnreachable { peer: String, reason: String },

    #[error("candidate chain failed hash-link or proof validation")]
    InvalidChain,
}

impl ResponseError for LedgerError {
    fn status_code(&self) -> StatusCode {
        match self {
            LedgerError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "message": self.to_string() }))
    }
}
