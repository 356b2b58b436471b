//! Data models for the catalog and the rendered pages

pub mod cabin;
pub mod views;

pub use cabin::{BookingRecord, Cabin};
pub use views::{CabinCard, DateSelectorView, PriceTag};
