//! Core pricing calculation functions.
//!
//! Pure functions for stay pricing - no session or catalog access.

use rust_decimal::prelude::*;
use serde::Serialize;

use super::models::{CabinPricing, DateRange};

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use cabin_booking_web::booking::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Format an amount for display: `$150`, `$99.5`.
pub fn format_money(amount: Decimal) -> String {
    format!("${}", round_money(amount, 2).normalize())
}

/// How a nightly price is shown.
///
/// Picked once per computation; the cabin card and the date selector both
/// render from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceDisplay {
    /// Discounted price next to the struck-through original
    Discounted {
        #[serde(with = "rust_decimal::serde::str")]
        original: Decimal,
        #[serde(with = "rust_decimal::serde::str")]
        discounted: Decimal,
    },
    /// Regular price only
    Full {
        #[serde(with = "rust_decimal::serde::str")]
        price: Decimal,
    },
}

impl PriceDisplay {
    /// Price shown as the per-night figure
    pub fn nightly(&self) -> Decimal {
        match self {
            PriceDisplay::Discounted { discounted, .. } => *discounted,
            PriceDisplay::Full { price } => *price,
        }
    }

    /// Struck-through original price, when discounted
    pub fn original(&self) -> Option<Decimal> {
        match self {
            PriceDisplay::Discounted { original, .. } => Some(*original),
            PriceDisplay::Full { .. } => None,
        }
    }
}

/// Select the display variant for a cabin's pricing.
pub fn price_display(pricing: &CabinPricing) -> PriceDisplay {
    if pricing.discount <= Decimal::ZERO {
        PriceDisplay::Full {
            price: pricing.regular_price,
        }
    } else {
        PriceDisplay::Discounted {
            original: pricing.regular_price,
            discounted: pricing.nightly_price(),
        }
    }
}

/// Calendar days from `range.from` to `range.to`, if both are set
pub fn nights_between(range: &DateRange) -> Option<i64> {
    range.bounds().map(|(from, to)| (to - from).num_days())
}

/// Nights and total for a selected range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StayQuote {
    pub nights: Option<i64>,
    pub total: Option<Decimal>,
}

impl StayQuote {
    /// Whether there is a stay worth totalling.
    ///
    /// False for an incomplete range and for a zero-night range.
    pub fn has_total(&self) -> bool {
        matches!(self.nights, Some(n) if n != 0)
    }
}

/// Compute nights stayed and total price.
///
/// `total = nights * (regular_price - discount)`; both are `None` when the
/// range is incomplete.
pub fn compute_stay(range: &DateRange, pricing: &CabinPricing) -> StayQuote {
    let nights = nights_between(range);
    let total = nights.map(|n| Decimal::from(n) * pricing.nightly_price());

    StayQuote { nights, total }
}
