//! Booking domain types.
//!
//! Plain values shared by the validator, the calculator and the views.
//! Nothing here touches the session store or the catalog file.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Days already committed to other reservations, day granularity
pub type BookedDates = BTreeSet<NaiveDate>;

/// A candidate stay: first and last night.
///
/// Either end may be missing while a selection is in progress. When both
/// are present `from <= to` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateRange {
    /// Empty selection
    pub const fn empty() -> Self {
        Self { from: None, to: None }
    }

    /// Build a range, swapping inverted ends so that `from <= to`.
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        match (from, to) {
            (Some(a), Some(b)) if b < a => Self {
                from: Some(b),
                to: Some(a),
            },
            _ => Self { from, to },
        }
    }

    /// Complete range between two days
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        Self::new(Some(a), Some(b))
    }

    pub fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    /// Both ends, if the selection is complete
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.from.zip(self.to)
    }

    pub fn is_complete(&self) -> bool {
        self.bounds().is_some()
    }

    /// True when neither end is set
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Closed-interval membership; an incomplete range contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.bounds() {
            Some((from, to)) => from <= date && date <= to,
            None => false,
        }
    }
}

/// Per-night pricing attributes of a cabin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CabinPricing {
    pub regular_price: Decimal,
    pub discount: Decimal,
}

impl CabinPricing {
    pub fn new(regular_price: Decimal, discount: Decimal) -> Self {
        Self {
            regular_price,
            discount,
        }
    }

    /// Price actually charged per night
    pub fn nightly_price(&self) -> Decimal {
        self.regular_price - self.discount
    }
}

/// Stay length limits configured for the whole site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct BookingSettings {
    pub min_booking_length: u32,
    pub max_booking_length: u32,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            min_booking_length: 1,
            max_booking_length: 90,
        }
    }
}
