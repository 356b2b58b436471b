//! Display models consumed by the askama templates.
//!
//! Everything is pre-formatted to strings and flags so templates stay free
//! of logic.

use serde::Serialize;

use crate::booking::{format_money, price_display, PriceDisplay, SelectionRules, SelectorState};

use super::Cabin;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Nightly price as rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceTag {
    pub nightly: String,
    pub original: String,
    pub discounted: bool,
}

impl From<PriceDisplay> for PriceTag {
    fn from(display: PriceDisplay) -> Self {
        Self {
            nightly: format_money(display.nightly()),
            original: display.original().map(format_money).unwrap_or_default(),
            discounted: display.original().is_some(),
        }
    }
}

/// Cabin summary shown in the listing grid
#[derive(Debug, Clone, Serialize)]
pub struct CabinCard {
    pub id: i64,
    pub name: String,
    pub max_capacity: u32,
    pub image: String,
    pub image_alt: String,
    pub href: String,
    pub price: PriceTag,
}

impl From<&Cabin> for CabinCard {
    fn from(cabin: &Cabin) -> Self {
        Self {
            id: cabin.id,
            name: cabin.name.clone(),
            max_capacity: cabin.max_capacity,
            image: cabin.image.clone(),
            image_alt: format!("Cabin {}", cabin.name),
            href: cabin.href(),
            price: price_display(&cabin.pricing()).into(),
        }
    }
}

/// Date selector panel on the cabin detail page
#[derive(Debug, Clone, Serialize)]
pub struct DateSelectorView {
    pub price: PriceTag,
    /// Selected ends as `YYYY-MM-DD`, empty when unset
    pub from: String,
    pub to: String,
    pub has_total: bool,
    pub nights: i64,
    pub total: String,
    pub can_clear: bool,
    /// Selection window for the date inputs
    pub first_day: String,
    pub last_day: String,
    pub min_span_days: u32,
    pub max_span_days: u32,
    pub unavailable: Vec<String>,
    pub has_unavailable: bool,
    pub select_action: String,
    pub clear_action: String,
}

impl DateSelectorView {
    pub fn new(cabin: &Cabin, rules: &SelectionRules<'_>, state: &SelectorState) -> Self {
        let unavailable: Vec<String> = rules
            .booked_dates()
            .range(rules.first_day()..=rules.last_day())
            .map(|date| date.format(DATE_FORMAT).to_string())
            .collect();
        let format_day = |date: Option<chrono::NaiveDate>| {
            date.map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default()
        };

        Self {
            price: state.price.into(),
            from: format_day(state.range.from()),
            to: format_day(state.range.to()),
            has_total: state.quote.has_total(),
            nights: state.quote.nights.unwrap_or_default(),
            total: state.quote.total.map(format_money).unwrap_or_default(),
            can_clear: state.can_clear(),
            first_day: rules.first_day().format(DATE_FORMAT).to_string(),
            last_day: rules.last_day().format(DATE_FORMAT).to_string(),
            min_span_days: rules.min_span_days(),
            max_span_days: rules.max_span_days(),
            has_unavailable: !unavailable.is_empty(),
            unavailable,
            select_action: format!("{}/reservation", cabin.href()),
            clear_action: format!("{}/reservation/clear", cabin.href()),
        }
    }
}
