//! Request DTOs for booking endpoints and forms.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer};

use super::models::DateRange;

/// Accepts a missing value, an empty string, or `YYYY-MM-DD`.
///
/// Date inputs submit an empty string when left blank.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(de::Error::custom),
    }
}

/// Range selection form posted by the date selector
#[derive(Debug, Default, Deserialize)]
pub struct SelectRangeForm {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub to: Option<NaiveDate>,
}

impl SelectRangeForm {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.from, self.to)
    }
}

/// Query for a stay quote
#[derive(Debug, Default, Deserialize)]
pub struct QuoteQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub to: Option<NaiveDate>,
}

impl QuoteQuery {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.from, self.to)
    }
}

/// Request to check a range against an explicit booked-date list
#[derive(Debug, Deserialize)]
pub struct RangeCheckRequest {
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub booked_dates: Vec<NaiveDate>,
}

impl RangeCheckRequest {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.from, self.to)
    }
}
