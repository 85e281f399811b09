mod extract;
mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::SiteConfig;

pub type SharedConfig = Arc<SiteConfig>;

pub fn create_router(config: SiteConfig) -> Router {
    let api = Router::new()
        .route("/commands", get(handlers::list_commands))
        .route("/categories", get(handlers::list_categories))
        .route("/faqs", get(handlers::list_faqs))
        .route("/troubleshooting", get(handlers::list_troubleshooting))
        .route("/features", get(handlers::list_features))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/documentation", get(handlers::pages::documentation))
        .route("/commands", get(handlers::pages::commands))
        .route("/support", get(handlers::pages::support))
        .nest("/api/v1", api)
        .fallback(handlers::pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(config))
}
