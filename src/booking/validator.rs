//! Range validation.
//!
//! `is_range_booked` is the overlap predicate; `SelectionRules` carries the
//! per-day constraints a calendar enforces before a selection is accepted.

use chrono::{Months, NaiveDate};

use super::models::{BookedDates, BookingSettings, DateRange};

/// How far ahead a stay can be selected
pub const BOOKING_HORIZON_YEARS: u32 = 5;

/// Whether any booked date falls inside the closed interval `[from, to]`.
///
/// An incomplete range is never booked.
pub fn is_range_booked(range: &DateRange, booked_dates: &BookedDates) -> bool {
    match range.bounds() {
        Some((from, to)) => booked_dates.range(from..=to).next().is_some(),
        None => false,
    }
}

/// Corrective step run after every change of range or booked dates:
/// an overlapping range becomes empty, anything else is kept as is.
pub fn reconcile_range(range: DateRange, booked_dates: &BookedDates) -> DateRange {
    if is_range_booked(&range, booked_dates) {
        DateRange::empty()
    } else {
        range
    }
}

/// Why a selection event was ignored
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("{0} is in the past")]
    PastDate(NaiveDate),

    #[error("{0} is already booked")]
    BookedDate(NaiveDate),

    #[error("{0} is beyond the booking horizon")]
    BeyondHorizon(NaiveDate),

    #[error("stay of {days} days is shorter than the minimum of {min}")]
    TooShort { days: i64, min: u32 },

    #[error("stay of {days} days is longer than the maximum of {max}")]
    TooLong { days: i64, max: u32 },
}

/// Selection constraints for one cabin on one day
#[derive(Debug, Clone, Copy)]
pub struct SelectionRules<'a> {
    today: NaiveDate,
    settings: BookingSettings,
    booked_dates: &'a BookedDates,
}

impl<'a> SelectionRules<'a> {
    pub fn new(today: NaiveDate, settings: BookingSettings, booked_dates: &'a BookedDates) -> Self {
        Self {
            today,
            settings,
            booked_dates,
        }
    }

    pub fn booked_dates(&self) -> &'a BookedDates {
        self.booked_dates
    }

    /// First selectable day
    pub fn first_day(&self) -> NaiveDate {
        self.today
    }

    /// Last selectable day
    pub fn last_day(&self) -> NaiveDate {
        self.today
            .checked_add_months(Months::new(12 * BOOKING_HORIZON_YEARS))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Shortest accepted selection, counted in days including both ends.
    ///
    /// One more than `min_booking_length`: the inclusive day count is one
    /// larger than the number of nights.
    pub fn min_span_days(&self) -> u32 {
        self.settings.min_booking_length.saturating_add(1)
    }

    /// Longest accepted selection, counted in days including both ends
    pub fn max_span_days(&self) -> u32 {
        self.settings.max_booking_length
    }

    /// Past days and booked days cannot be picked
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        date < self.today || self.booked_dates.contains(&date)
    }

    /// Check a single day against the calendar constraints
    pub fn check_day(&self, date: NaiveDate) -> Result<(), SelectionError> {
        if self.is_disabled(date) {
            return Err(if date < self.today {
                SelectionError::PastDate(date)
            } else {
                SelectionError::BookedDate(date)
            });
        }
        if date > self.last_day() {
            return Err(SelectionError::BeyondHorizon(date));
        }
        Ok(())
    }

    /// Check a (possibly partial) selection.
    ///
    /// Each present end must be selectable; the span is only checked once
    /// both ends are known. Booked days strictly inside the range are left
    /// to `is_range_booked`.
    pub fn check(&self, range: &DateRange) -> Result<(), SelectionError> {
        for date in [range.from(), range.to()].into_iter().flatten() {
            self.check_day(date)?;
        }

        if let Some((from, to)) = range.bounds() {
            let days = (to - from).num_days() + 1;
            let min = self.min_span_days();
            let max = self.max_span_days();
            if days < i64::from(min) {
                return Err(SelectionError::TooShort { days, min });
            }
            if days > i64::from(max) {
                return Err(SelectionError::TooLong { days, max });
            }
        }

        Ok(())
    }
}
