use actix_web::{HttpResponse, Responder, get, web};

use super::models::AppState;
use crate::network::ChainSnapshot;

/// Get the full chain and its length, the exact shape peers fetch from
/// each other during consensus resolution.
#[get("/chain")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ChainSnapshot {
        chain: ledger.chain.clone(),
        length: ledger.len(),
    })
}
