//! In-memory sink implementations for tests.
//!
//! These record every write so tests can assert on referential validity,
//! ordering, and cardinality without a live database or broker. Both sinks
//! support injected failures to exercise the fail-fast contract.

use crate::model::{CatalogEntry, NewItem, NewPurchase, NewUser, PageviewEvent};
use crate::sink::{EventSink, RelationalSink};
use anyhow::bail;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

/// A user row as committed to the in-memory store.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_vip: bool,
}

/// An item row as committed to the in-memory store.
#[derive(Debug, Clone)]
pub struct StoredItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub daily_inventory: i32,
}

/// A purchase row as committed to the in-memory store.
#[derive(Debug, Clone)]
pub struct StoredPurchase {
    pub id: i64,
    pub user_id: i64,
    pub item_id: i64,
    pub quantity: i32,
    pub purchase_price: f64,
    /// Epoch seconds at which the insert call was issued.
    pub inserted_at: i64,
}

/// In-memory relational sink with per-table monotonic id sequences.
#[derive(Debug)]
pub struct MemoryStore {
    pub users: Vec<StoredUser>,
    pub items: Vec<StoredItem>,
    pub purchases: Vec<StoredPurchase>,
    next_user_id: i64,
    next_item_id: i64,
    next_purchase_id: i64,
    /// Fail the item insert once this many items exist.
    pub fail_items_after: Option<usize>,
    /// Fail the purchase insert once this many purchases exist.
    pub fail_purchases_after: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_base_id(1)
    }

    /// Start all id sequences at `base`, simulating a reused store whose
    /// sequences are past their initial value.
    pub fn with_base_id(base: i64) -> Self {
        Self {
            users: Vec::new(),
            items: Vec::new(),
            purchases: Vec::new(),
            next_user_id: base,
            next_item_id: base,
            next_purchase_id: base,
            fail_items_after: None,
            fail_purchases_after: None,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RelationalSink for MemoryStore {
    async fn insert_user(&mut self, user: &NewUser) -> anyhow::Result<i64> {
        let id = self.next_user_id;
        self.next_user_id += 1;
        self.users.push(StoredUser {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            is_vip: user.is_vip,
        });
        Ok(id)
    }

    async fn insert_item(&mut self, item: &NewItem) -> anyhow::Result<i64> {
        if let Some(limit) = self.fail_items_after {
            if self.items.len() >= limit {
                bail!("injected item failure");
            }
        }
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.items.push(StoredItem {
            id,
            name: item.name.clone(),
            price: item.price,
            daily_inventory: item.daily_inventory,
        });
        Ok(id)
    }

    async fn insert_purchase(&mut self, purchase: &NewPurchase) -> anyhow::Result<i64> {
        if let Some(limit) = self.fail_purchases_after {
            if self.purchases.len() >= limit {
                bail!("injected purchase failure");
            }
        }
        let id = self.next_purchase_id;
        self.next_purchase_id += 1;
        self.purchases.push(StoredPurchase {
            id,
            user_id: purchase.user_id,
            item_id: purchase.item_id,
            quantity: purchase.quantity,
            purchase_price: purchase.purchase_price,
            inserted_at: Utc::now().timestamp(),
        });
        Ok(id)
    }

    async fn item_catalog(&mut self) -> anyhow::Result<Vec<CatalogEntry>> {
        Ok(self
            .items
            .iter()
            .map(|i| CatalogEntry { id: i.id, price: i.price })
            .collect())
    }
}

/// In-memory event sink recording every published event.
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    published: Mutex<Vec<(String, PageviewEvent)>>,
    /// Fail the publish once this many events have been accepted.
    pub fail_after: Option<usize>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(count: usize) -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            fail_after: Some(count),
        }
    }

    /// Snapshot of all (stream, event) pairs published so far.
    pub fn published(&self) -> Vec<(String, PageviewEvent)> {
        self.published.lock().expect("event sink lock").clone()
    }
}

#[async_trait]
impl EventSink for MemoryEventSink {
    async fn publish(&self, stream: &str, event: &PageviewEvent) -> anyhow::Result<()> {
        let mut published = self.published.lock().expect("event sink lock");
        if let Some(limit) = self.fail_after {
            if published.len() >= limit {
                bail!("injected publish failure");
            }
        }
        published.push((stream.to_string(), event.clone()));
        Ok(())
    }
}
