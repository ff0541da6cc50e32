//! One-shot population bootstrap.
//!
//! Runs sequentially before generation: items, then users, then a re-read
//! of the committed item catalog into the in-memory cache. There is no
//! partial-seed recovery; the first sink failure aborts the whole run.

use crate::catalog::CatalogCache;
use crate::error::LoadGenError;
use crate::model::{IdRange, NewItem, NewUser};
use crate::sink::RelationalSink;
use loadgen_data::DataModel;
use rand::Rng;
use tracing::info;

/// Everything the generation engine needs from a completed seed pass.
#[derive(Debug, Clone)]
pub struct SeedOutcome {
    /// The committed item catalog, re-read from the sink.
    pub catalog: CatalogCache,
    /// Sink-assigned id range of the seeded users.
    pub user_ids: IdRange,
    /// Sink-assigned id range of the seeded items.
    pub item_ids: IdRange,
}

/// Seed the relational store with `item_count` items and `user_count` users,
/// then materialize the item catalog.
///
/// Ids are assigned by the sink; the returned ranges record what the sink
/// actually handed out, so a reused store with a non-trivial sequence start
/// still yields valid references.
pub async fn seed<S, R>(
    sink: &mut S,
    data: &DataModel,
    rng: &mut R,
    user_count: u32,
    item_count: u32,
) -> Result<SeedOutcome, LoadGenError>
where
    S: RelationalSink + ?Sized,
    R: Rng,
{
    if user_count == 0 || item_count == 0 {
        return Err(LoadGenError::Seed(
            "user and item counts must be at least 1".to_string(),
        ));
    }

    info!("Seeding {item_count} shop items");
    let mut item_ids: Option<IdRange> = None;
    for _ in 0..item_count {
        let item = NewItem {
            name: data.item_name(rng),
            price: data.price(rng),
            daily_inventory: data.inventory(rng),
        };
        let id = sink
            .insert_item(&item)
            .await
            .map_err(|e| LoadGenError::Seed(e.to_string()))?;
        item_ids = Some(extend(item_ids, id));
    }

    info!("Seeding {user_count} users");
    let mut user_ids: Option<IdRange> = None;
    for _ in 0..user_count {
        let name = data.person_name(rng);
        let user = NewUser {
            email: data.email(&name),
            name,
            is_vip: data.is_vip(rng),
        };
        let id = sink
            .insert_user(&user)
            .await
            .map_err(|e| LoadGenError::Seed(e.to_string()))?;
        user_ids = Some(extend(user_ids, id));
    }

    let entries = sink
        .item_catalog()
        .await
        .map_err(|e| LoadGenError::Seed(e.to_string()))?;
    if entries.len() != item_count as usize {
        return Err(LoadGenError::Seed(format!(
            "catalog holds {} items but {item_count} were seeded",
            entries.len()
        )));
    }
    let catalog = CatalogCache::from_entries(entries);
    info!("Loaded {} items into the catalog cache", catalog.len());

    // Both ranges are present: counts were checked to be nonzero above.
    let user_ids =
        user_ids.ok_or_else(|| LoadGenError::Seed("no user ids were assigned".to_string()))?;
    let item_ids =
        item_ids.ok_or_else(|| LoadGenError::Seed("no item ids were assigned".to_string()))?;

    Ok(SeedOutcome {
        catalog,
        user_ids,
        item_ids,
    })
}

fn extend(range: Option<IdRange>, id: i64) -> IdRange {
    match range {
        None => IdRange { first: id, last: id },
        Some(r) => IdRange {
            first: r.first.min(id),
            last: r.last.max(id),
        },
    }
}
