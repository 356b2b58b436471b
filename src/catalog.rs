//! Read-only cabin catalog.
//!
//! Cabins, existing bookings and the site-wide booking settings, loaded once
//! at startup from a JSON file. Booked dates are expanded per cabin on load.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::booking::{BookedDates, BookingSettings};
use crate::models::{BookingRecord, Cabin};

/// Catalog loading error
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    settings: BookingSettings,
    cabins: Vec<Cabin>,
    #[serde(default)]
    bookings: Vec<BookingRecord>,
}

/// In-memory catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    settings: BookingSettings,
    cabins: Vec<Cabin>,
    booked: HashMap<i64, BookedDates>,
}

impl Catalog {
    /// Build a catalog, validating prices, settings and bookings
    pub fn new(
        settings: BookingSettings,
        cabins: Vec<Cabin>,
        bookings: Vec<BookingRecord>,
    ) -> Result<Self, CatalogError> {
        if settings.max_booking_length < settings.min_booking_length {
            return Err(CatalogError::Invalid(format!(
                "max_booking_length {} is below min_booking_length {}",
                settings.max_booking_length, settings.min_booking_length
            )));
        }

        let mut ids = HashSet::new();
        for cabin in &cabins {
            if !ids.insert(cabin.id) {
                return Err(CatalogError::Invalid(format!("duplicate cabin id {}", cabin.id)));
            }
            if cabin.regular_price < Decimal::ZERO {
                return Err(CatalogError::Invalid(format!(
                    "cabin {} has a negative price",
                    cabin.id
                )));
            }
            if cabin.discount < Decimal::ZERO || cabin.discount > cabin.regular_price {
                return Err(CatalogError::Invalid(format!(
                    "cabin {} discount {} is outside 0..={}",
                    cabin.id, cabin.discount, cabin.regular_price
                )));
            }
        }

        let mut booked: HashMap<i64, BookedDates> = HashMap::new();
        for booking in &bookings {
            if !ids.contains(&booking.cabin_id) {
                return Err(CatalogError::Invalid(format!(
                    "booking references unknown cabin {}",
                    booking.cabin_id
                )));
            }
            if booking.end_date < booking.start_date {
                return Err(CatalogError::Invalid(format!(
                    "booking for cabin {} ends before it starts",
                    booking.cabin_id
                )));
            }
            booked
                .entry(booking.cabin_id)
                .or_default()
                .extend(booking.days());
        }

        Ok(Self {
            settings,
            cabins,
            booked,
        })
    }

    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.settings, file.cabins, file.bookings)
    }

    /// Load a catalog file
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&json)?;

        info!(
            path = %path.display(),
            cabins = catalog.cabins.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn settings(&self) -> BookingSettings {
        self.settings
    }

    pub fn cabins(&self) -> &[Cabin] {
        &self.cabins
    }

    pub fn cabin(&self, id: i64) -> Option<&Cabin> {
        self.cabins.iter().find(|cabin| cabin.id == id)
    }

    /// Unavailable days for a cabin
    pub fn booked_dates(&self, cabin_id: i64) -> BookedDates {
        self.booked.get(&cabin_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::SelectionRules;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    const CATALOG: &str = r#"{
        "settings": { "min_booking_length": 2, "max_booking_length": 30 },
        "cabins": [
            { "id": 1, "name": "001", "max_capacity": 2,
              "regular_price": "250", "discount": "0", "image": "/static/cabins/cabin-001.svg" },
            { "id": 2, "name": "002", "max_capacity": 4,
              "regular_price": "350", "discount": "25", "image": "/static/cabins/cabin-002.svg" }
        ],
        "bookings": [
            { "cabin_id": 1, "start_date": "2024-06-01", "end_date": "2024-06-03" },
            { "cabin_id": 1, "start_date": "2024-06-03", "end_date": "2024-06-04" }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(CATALOG).unwrap();

        assert_eq!(catalog.cabins().len(), 2);
        assert_eq!(catalog.settings().min_booking_length, 2);
        assert_eq!(catalog.cabin(2).map(|c| c.name.as_str()), Some("002"));
        assert!(catalog.cabin(9).is_none());
    }

    #[test]
    fn test_booked_dates_are_expanded_and_merged() {
        let catalog = Catalog::from_json(CATALOG).unwrap();

        let booked: Vec<_> = catalog.booked_dates(1).into_iter().collect();
        assert_eq!(booked, vec![day(1), day(2), day(3), day(4)]);
        assert!(catalog.booked_dates(2).is_empty());
    }

    #[test]
    fn test_rejects_discount_above_price() {
        let json = r#"{
            "cabins": [
                { "id": 1, "name": "001", "max_capacity": 2,
                  "regular_price": "100", "discount": "150", "image": "" }
            ]
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_booking_for_unknown_cabin() {
        let json = r#"{
            "cabins": [],
            "bookings": [ { "cabin_id": 5, "start_date": "2024-06-01", "end_date": "2024-06-02" } ]
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_settings() {
        let json = r#"{
            "settings": { "min_booking_length": 10, "max_booking_length": 3 },
            "cabins": []
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn test_extreme_booking_lengths_load_without_overflow() {
        let json = r#"{
            "settings": { "min_booking_length": 4294967295, "max_booking_length": 4294967295 },
            "cabins": []
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let booked = catalog.booked_dates(1);
        let rules = SelectionRules::new(day(1), catalog.settings(), &booked);

        assert_eq!(rules.min_span_days(), u32::MAX);
        assert_eq!(rules.max_span_days(), u32::MAX);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
