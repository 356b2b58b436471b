//! In-memory caching using moka
//!
//! Holds the session-scoped reservation contexts. Entries expire after the
//! session has been idle, which ends that session's booking flow.

use moka::future::Cache;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::reservation::ReservationContext;

/// Default idle lifetime of a reservation session
pub const DEFAULT_SESSION_IDLE: Duration = Duration::from_secs(30 * 60);

/// Application cache holding reservation contexts
#[derive(Clone)]
pub struct AppCache {
    /// Reservation contexts (session id -> context)
    pub reservations: Cache<Uuid, ReservationContext>,
}

impl AppCache {
    /// Create a new cache instance with the given session idle timeout
    pub fn new(session_idle: Duration) -> Self {
        Self {
            // Reservations: 10k sessions, dropped after idling
            reservations: Cache::builder()
                .max_capacity(10_000)
                .time_to_idle(session_idle)
                .build(),
        }
    }

    /// Load the context for a session, or a fresh one
    pub async fn reservation(&self, session: Uuid) -> ReservationContext {
        match self.reservations.get(&session).await {
            Some(ctx) => {
                debug!("Cache HIT for reservation session: {}", session);
                ctx
            }
            None => {
                debug!("Cache MISS for reservation session: {}", session);
                ReservationContext::new()
            }
        }
    }

    /// Store the context for a session
    pub async fn store_reservation(&self, session: Uuid, ctx: ReservationContext) {
        self.reservations.insert(session, ctx).await;
    }

    /// Number of live reservation sessions, for the health endpoint
    pub fn session_count(&self) -> u64 {
        self.reservations.entry_count()
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_IDLE)
    }
}
