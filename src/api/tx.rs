use actix_web::{HttpResponse, post, web};
use log::debug;

use super::models::{AppState, NewTransactionRequest, NewTransactionResponse};
use crate::error::LedgerError;

/// Queue a transaction for the next mined block.
///
/// All three fields are required. Nothing else is checked; balance and
/// signature validation are out of scope for this ledger.
#[post("/transactions/new")]
pub async fn new_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTransactionRequest>,
) -> actix_web::Result<HttpResponse> {
    let body = body.into_inner();
    let sender = body.sender.ok_or_else(|| missing("sender"))?;
    let recipient = body.recipient.ok_or_else(|| missing("recipient"))?;
    let amount = body.amount.ok_or_else(|| missing("amount"))?;

    let index = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.new_transaction(sender, recipient, amount)
    };

    debug!("queued transaction targeting block #{index}");
    Ok(HttpResponse::Created().json(NewTransactionResponse {
        message: format!("Transaction will be added to Block {index}"),
        index,
    }))
}

fn missing(field: &str) -> LedgerError {
    LedgerError::Validation(format!("missing required field: {field}"))
}
