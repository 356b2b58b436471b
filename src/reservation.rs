//! Session-scoped reservation state.
//!
//! One `ReservationContext` per browser session. The page controller loads
//! it from the cache at the start of a request, mutates it, and stores it
//! back before responding.

use crate::booking::DateRange;

/// Currently selected stay for one booking flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReservationContext {
    cabin_id: Option<i64>,
    range: DateRange,
}

impl ReservationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Cabin whose booking flow owns the range
    pub fn cabin_id(&self) -> Option<i64> {
        self.cabin_id
    }

    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
    }

    pub fn reset_range(&mut self) {
        self.range = DateRange::empty();
    }

    /// Switch the context to a cabin's booking flow.
    ///
    /// Leaving one cabin for another clears the selection. Returns whether
    /// a non-empty range was dropped.
    pub fn enter_cabin(&mut self, cabin_id: i64) -> bool {
        if self.cabin_id == Some(cabin_id) {
            return false;
        }

        let had_range = !self.range.is_empty();
        self.cabin_id = Some(cabin_id);
        self.reset_range();
        had_range
    }
}
