//! Row and event types exchanged with the sinks.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A user row to insert during seeding. Immutable once created.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub is_vip: bool,
}

/// An item row to insert during seeding. Immutable once created.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub daily_inventory: i32,
}

/// A purchase row to insert during generation.
///
/// `purchase_price` is always `item price × quantity` against the cached
/// catalog price.
#[derive(Debug, Clone)]
pub struct NewPurchase {
    pub user_id: i64,
    pub item_id: i64,
    pub quantity: i32,
    pub purchase_price: f64,
}

/// One cached catalog row: the sink-assigned item id and its price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub id: i64,
    pub price: f64,
}

/// A pageview event published to the event sink.
///
/// Ownership passes to the sink on publish; the generator never persists
/// these itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageviewEvent {
    pub user_id: i64,
    pub item_id: i64,
    /// Emission time as epoch seconds.
    pub received_at: i64,
}

impl PageviewEvent {
    /// Build an event stamped with the current wall-clock time.
    pub fn now(user_id: i64, item_id: i64) -> Self {
        Self {
            user_id,
            item_id,
            received_at: Utc::now().timestamp(),
        }
    }
}

/// An inclusive range of sink-assigned ids recorded during seeding.
///
/// Sink ids are monotonic but need not start at 1 (a reused store continues
/// its own sequence), so the engine samples from the exact range it observed
/// rather than assuming `[1, count]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub first: i64,
    pub last: i64,
}

impl IdRange {
    /// Draw an id uniformly from the range.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.gen_range(self.first..=self.last)
    }

    pub fn contains(&self, id: i64) -> bool {
        (self.first..=self.last).contains(&id)
    }

    /// Number of ids covered by the range.
    pub fn len(&self) -> u64 {
        (self.last - self.first + 1) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.last < self.first
    }
}
