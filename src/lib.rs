//! Cabin booking web frontend.
//!
//! Server-rendered cabin listing and detail pages with a date-range selector
//! that validates stays against booked dates and prices them.

pub mod booking;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod reservation;
pub mod routes;
pub mod session;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::cache::AppCache;
use crate::catalog::Catalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub cache: AppCache,
}

impl AppState {
    pub fn new(catalog: Catalog, cache: AppCache) -> Self {
        Self {
            catalog: Arc::new(catalog),
            cache,
        }
    }
}

/// Build the application router
pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(routes::router())
        .nest("/api", booking::router())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
