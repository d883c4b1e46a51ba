use actix_web::web::{self, ServiceConfig};
use actix_web::ResponseError;

pub mod application;
pub mod auth;
pub mod campaign;
pub mod config;
pub mod connection;
pub mod error;
pub mod saved_campaign;
pub mod store;

pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::store::{FixtureStore, Store};

/// Registers every route. The caller supplies `Data<Config>` and
/// `Data<Box<dyn Store>>` on the app.
pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(campaign::endpoints::get_campaign_by_id)
        .service(application::endpoints::get_fallback_applications)
        .service(saved_campaign::endpoints::get_saved_campaign_ids)
        .service(connection::endpoints::test_connection)
        .service(connection::endpoints::debug_applications)
        .default_service(web::to(|| async { Error::PathNotFound.error_response() }));
}
