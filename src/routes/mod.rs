//! HTML page routes

pub mod cabins;

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};

use crate::AppState;

/// Page router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/cabins", get(cabins::list))
        .route("/cabins/:id", get(cabins::detail))
        .route("/cabins/:id/reservation", post(cabins::select_range))
        .route("/cabins/:id/reservation/clear", post(cabins::clear_range))
}

/// Homepage handler
async fn home() -> Redirect {
    Redirect::to("/cabins")
}
