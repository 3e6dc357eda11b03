mod chain;
mod health;
mod mining;
pub mod models;
mod nodes;
mod tx;

use actix_web::web::ServiceConfig;

pub use models::AppState;

/// Routes live at the root: `/chain` is a wire contract consumed verbatim
/// by peers during consensus resolution, so there is no version prefix.
pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(health::health_check)
        .service(mining::mine)
        .service(tx::new_transaction)
        .service(chain::get_chain)
        .service(nodes::register_nodes)
        .service(nodes::resolve);
}
