//! Response DTOs for booking API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::PriceDisplay;

/// Response for a stay quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub cabin_id: i64,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// The requested range overlapped a booked date and was reset
    pub booked: bool,
    /// Why the range would be refused by the date selector, if it would
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_error: Option<String>,
    pub nights: Option<i64>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub total: Option<Decimal>,
    pub price: PriceDisplay,
}

/// Response for a range check
#[derive(Debug, Serialize)]
pub struct RangeCheckResponse {
    pub booked: bool,
}

/// Response for the health endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub cabins: usize,
    pub sessions: u64,
}
