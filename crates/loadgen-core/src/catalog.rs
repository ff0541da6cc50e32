//! In-memory item catalog loaded once during seeding.

use crate::error::LoadGenError;
use crate::model::CatalogEntry;
use rand::Rng;

/// Read-only table of (item id, price) pairs materialized by the seed
/// loader.
///
/// Loaded once before generation and never mutated afterwards; the daily
/// inventory attribute on items exists in the store but no stock is
/// decremented here.
#[derive(Debug, Clone)]
pub struct CatalogCache {
    entries: Vec<CatalogEntry>,
}

impl CatalogCache {
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Pick one entry uniformly at random.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> Result<&CatalogEntry, LoadGenError> {
        if self.entries.is_empty() {
            return Err(LoadGenError::EmptyCatalog);
        }
        Ok(&self.entries[rng.gen_range(0..self.entries.len())])
    }

    /// Price of the given item id, if cached.
    pub fn price_of(&self, item_id: i64) -> Option<f64> {
        self.entries.iter().find(|e| e.id == item_id).map(|e| e.price)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
