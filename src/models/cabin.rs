//! Cabin catalog models

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::booking::CabinPricing;

/// Cabin record as supplied by the catalog
#[derive(Debug, Clone, Deserialize)]
pub struct Cabin {
    pub id: i64,
    pub name: String,
    pub max_capacity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub regular_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount: Decimal,
    pub image: String,
    #[serde(default)]
    pub description: String,
}

impl Cabin {
    pub fn pricing(&self) -> CabinPricing {
        CabinPricing::new(self.regular_price, self.discount)
    }

    /// Detail page link
    pub fn href(&self) -> String {
        format!("/cabins/{}", self.id)
    }
}

/// An existing reservation; every day from start to end is unavailable
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRecord {
    pub cabin_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl BookingRecord {
    /// Days covered by the booking, both ends included
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start_date;
        (0..=(self.end_date - start).num_days()).map(move |i| start + Duration::days(i))
    }
}
