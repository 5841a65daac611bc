//! featlist-api - REST API layer for feature lists
//!
//! This crate provides the HTTP API over the [`ListStore`](featlist_core::ListStore)
//! trait. It is storage-agnostic: any backend implementing the trait can serve it.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use featlist_api::{create_router, AppState};
//! use featlist_store::MemoryStore;
//!
//! let state = AppState::new(Arc::new(MemoryStore::new()));
//! let router = create_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the featlist REST API router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // List routes
        .route(
            "/api/lists",
            get(handlers::lists::list_lists).post(handlers::lists::create_list),
        )
        .route(
            "/api/lists/{list_id}",
            get(handlers::lists::get_list)
                .put(handlers::lists::update_list)
                .delete(handlers::lists::delete_list),
        )
        // Feature routes
        .route(
            "/api/lists/{list_id}/features",
            post(handlers::features::add_feature),
        )
        .route(
            "/api/lists/{list_id}/features/{feature_id}",
            put(handlers::features::update_feature).delete(handlers::features::delete_feature),
        )
        // Bulk import
        .route("/api/import", post(handlers::import::import_list))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
