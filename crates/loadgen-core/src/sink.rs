//! Sink traits: the boundary between the generation engine and the outside
//! world.
//!
//! The engine depends only on these contracts. Implementations report
//! failures through `anyhow`; the engine converts them into its typed error
//! taxonomy at the call site. Both traits assume synchronous, blocking
//! semantics: the engine does not move on until a call returns or fails.

use crate::model::{CatalogEntry, NewItem, NewPurchase, NewUser, PageviewEvent};
use async_trait::async_trait;

/// Transactional reference store holding users, items, and purchases.
#[async_trait]
pub trait RelationalSink: Send {
    /// Insert a user row, returning the sink-assigned id.
    async fn insert_user(&mut self, user: &NewUser) -> anyhow::Result<i64>;

    /// Insert an item row, returning the sink-assigned id.
    async fn insert_item(&mut self, item: &NewItem) -> anyhow::Result<i64>;

    /// Insert a purchase row, returning the sink-assigned id.
    async fn insert_purchase(&mut self, purchase: &NewPurchase) -> anyhow::Result<i64>;

    /// Read back the full item catalog as (id, price) pairs.
    async fn item_catalog(&mut self) -> anyhow::Result<Vec<CatalogEntry>>;
}

/// Append-only event stream.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Publish one event to the named stream, blocking until the sink
    /// acknowledges or fails.
    async fn publish(&self, stream: &str, event: &PageviewEvent) -> anyhow::Result<()>;
}
