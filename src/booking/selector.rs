//! Date selector controller.
//!
//! Owns the reservation context for the duration of one request and
//! re-runs validation and pricing whenever the range is touched.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::models::Cabin;
use crate::reservation::ReservationContext;

use super::calculators::{compute_stay, price_display, PriceDisplay, StayQuote};
use super::models::{BookedDates, BookingSettings, DateRange};
use super::validator::{is_range_booked, SelectionError, SelectionRules};

/// Current local calendar day
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Everything the date selector renders from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorState {
    pub range: DateRange,
    pub price: PriceDisplay,
    pub quote: StayQuote,
}

impl SelectorState {
    /// The Clear action is offered once either end is set
    pub fn can_clear(&self) -> bool {
        !self.range.is_empty()
    }
}

/// Controller for one cabin's booking flow
pub struct DateSelector<'a> {
    cabin: &'a Cabin,
    settings: BookingSettings,
    booked_dates: &'a BookedDates,
    today: NaiveDate,
}

impl<'a> DateSelector<'a> {
    pub fn new(
        cabin: &'a Cabin,
        settings: BookingSettings,
        booked_dates: &'a BookedDates,
        today: NaiveDate,
    ) -> Self {
        Self {
            cabin,
            settings,
            booked_dates,
            today,
        }
    }

    pub fn rules(&self) -> SelectionRules<'a> {
        SelectionRules::new(self.today, self.settings, self.booked_dates)
    }

    /// Reset the context's range if it overlaps a booked date.
    ///
    /// Returns whether a reset happened.
    pub fn reconcile(&self, ctx: &mut ReservationContext) -> bool {
        if !is_range_booked(&ctx.range(), self.booked_dates) {
            return false;
        }

        debug!(
            cabin_id = self.cabin.id,
            range = ?ctx.range(),
            "Selected range overlaps a booked date, resetting"
        );
        ctx.reset_range();
        true
    }

    /// Apply a selection event.
    ///
    /// A selection breaking the calendar rules is rejected and the previous
    /// range stays. An accepted selection is stored and then reconciled, so
    /// a range spanning a booked day ends up empty.
    pub fn select(
        &self,
        ctx: &mut ReservationContext,
        range: DateRange,
    ) -> Result<(), SelectionError> {
        self.rules().check(&range)?;

        ctx.set_range(range);
        self.reconcile(ctx);
        Ok(())
    }

    /// Reconcile, then compute what the selector shows
    pub fn state(&self, ctx: &mut ReservationContext) -> SelectorState {
        self.reconcile(ctx);

        let range = ctx.range();
        let pricing = self.cabin.pricing();

        SelectorState {
            range,
            price: price_display(&pricing),
            quote: compute_stay(&range, &pricing),
        }
    }
}
