//! Products API routes, all behind the bearer token check

use axum::{Router, middleware};
use axum_helpers::jwt_auth_middleware;
use domain_products::{InMemoryProductRepository, ProductService, SqlProductRepository, handlers};

use crate::state::{AppState, Storage};

/// Create products router
pub fn router(state: &AppState) -> Router {
    let routes = match &state.storage {
        Storage::Sql(db) => {
            let repository = SqlProductRepository::new(db.clone());
            handlers::router(ProductService::new(repository))
        }
        Storage::Memory => handlers::router(ProductService::new(InMemoryProductRepository::new())),
    };

    routes.route_layer(middleware::from_fn_with_state(
        state.jwt.clone(),
        jwt_auth_middleware,
    ))
}
