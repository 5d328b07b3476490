//! Catalog API - products and users over REST
//!
//! The binary in `main.rs` loads [`config::Config`], opens the store and
//! serves [`app`]. Tests build the same router over the in-memory backend.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use state::AppState;

/// Full application router: API routes, docs, `/health`, `/ready`
pub fn app(state: &AppState) -> Router {
    let api_routes = api::routes(state);
    create_router::<openapi::ApiDoc>(api_routes).merge(health_router(state.config.app))
}
