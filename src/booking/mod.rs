//! Booking engine module.
//!
//! Range validation and stay pricing for the cabin detail page, plus the
//! JSON endpoints exposing them.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod selector;
pub mod validator;

// Re-export commonly used items
pub use calculators::{
    compute_stay, format_money, price_display, round_money, PriceDisplay, StayQuote,
};
pub use models::{BookedDates, BookingSettings, CabinPricing, DateRange};
pub use routes::router;
pub use selector::{today, DateSelector, SelectorState};
pub use validator::{is_range_booked, reconcile_range, SelectionError, SelectionRules};
