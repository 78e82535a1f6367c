//! Per-user inline query debouncer.
//!
//! Each new query gets a [`QueryTicket`] carrying a process-wide unique generation, recorded as
//! the latest for its user. A ticket is current only while no newer query from the same user has
//! arrived; stale tickets are dropped silently by the caller.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;

/// Handle for one query. Compare against the debouncer to learn whether it is still the latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket {
    pub user_id: u64,
    pub generation: u64,
}

/// Latest generation per user. The only state shared between queries.
#[derive(Debug)]
pub struct QueryDebouncer {
    delay: Duration,
    sequence: AtomicU64,
    generations: Mutex<HashMap<u64, u64>>,
}

impl QueryDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            sequence: AtomicU64::new(0),
            generations: Mutex::new(HashMap::new()),
        }
    }

    /// Registers a new query from `user_id`, superseding any earlier one.
    pub async fn begin(&self, user_id: u64) -> QueryTicket {
        let mut generations = self.generations.lock().await;
        let generation = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        generations.insert(user_id, generation);
        QueryTicket {
            user_id,
            generation,
        }
    }

    pub async fn is_current(&self, ticket: &QueryTicket) -> bool {
        let generations = self.generations.lock().await;
        generations.get(&ticket.user_id) == Some(&ticket.generation)
    }

    /// Waits out the debounce delay. Returns false if a newer query arrived meanwhile.
    pub async fn settle(&self, ticket: &QueryTicket) -> bool {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let current = self.is_current(ticket).await;
        if !current {
            debug!(
                user_id = ticket.user_id,
                generation = ticket.generation,
                "Query superseded during debounce"
            );
        }
        current
    }

    /// Forgets the user's entry if `ticket` is still the latest. Generations are never reused,
    /// so an older ticket cannot become current again.
    pub async fn finish(&self, ticket: &QueryTicket) {
        let mut generations = self.generations.lock().await;
        if generations.get(&ticket.user_id) == Some(&ticket.generation) {
            generations.remove(&ticket.user_id);
        }
    }

    /// Number of users with a query in flight.
    pub async fn pending_users(&self) -> usize {
        self.generations.lock().await.len()
    }
}
