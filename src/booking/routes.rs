//! JSON endpoints for range validation and stay quotes.

use axum::{
    extract::{Path, Query, State},
    http::Method,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::error::{AppError, Result};
use crate::AppState;

use super::calculators::{compute_stay, price_display};
use super::models::BookedDates;
use super::requests::{QuoteQuery, RangeCheckRequest};
use super::responses::{HealthResponse, QuoteResponse, RangeCheckResponse};
use super::selector::today;
use super::validator::{is_range_booked, reconcile_range, SelectionRules};

/// Booking API router, mounted under `/api`
pub fn router() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        .route("/cabins/:id/quote", get(quote))
        .route("/range/check", post(check_range))
        .route("/health", get(health))
        .layer(cors)
}

/// Quote a stay for a cabin.
///
/// The range goes through the same reconciliation as the date selector: a
/// range overlapping a booked date is reset and quoted as empty.
async fn quote(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<QuoteResponse>> {
    let cabin = state.catalog.cabin(id).ok_or(AppError::NotFound)?;
    let booked_dates = state.catalog.booked_dates(id);

    let requested = query.range();
    let selection_error = SelectionRules::new(today(), state.catalog.settings(), &booked_dates)
        .check(&requested)
        .err()
        .map(|e| e.to_string());

    let range = reconcile_range(requested, &booked_dates);
    let pricing = cabin.pricing();
    let stay = compute_stay(&range, &pricing);

    tracing::debug!(cabin_id = id, ?requested, ?stay, "Quoted stay");

    Ok(Json(QuoteResponse {
        cabin_id: id,
        from: range.from(),
        to: range.to(),
        booked: range != requested,
        selection_error,
        nights: stay.nights,
        total: stay.total,
        price: price_display(&pricing),
    }))
}

/// Check an arbitrary range against a booked-date list
async fn check_range(Json(request): Json<RangeCheckRequest>) -> Json<RangeCheckResponse> {
    let booked_dates: BookedDates = request.booked_dates.iter().copied().collect();

    Json(RangeCheckResponse {
        booked: is_range_booked(&request.range(), &booked_dates),
    })
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        cabins: state.catalog.cabins().len(),
        sessions: state.cache.session_count(),
    })
}
