//! End-to-end tests of the seed-then-generate flow against in-memory sinks.

use loadgen_core::testing::{MemoryEventSink, MemoryStore};
use loadgen_core::{seed, CatalogCache, GenerationConfig, GenerationEngine, LoadGenError};
use loadgen_data::DataModel;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::time::Duration;

fn config(iterations: u64, background: u32) -> GenerationConfig {
    GenerationConfig {
        iteration_count: iterations,
        tick_interval: Duration::ZERO,
        background_events_per_iteration: background,
        stream: "pageview".to_string(),
    }
}

async fn seeded_store(
    store: &mut MemoryStore,
    users: u32,
    items: u32,
) -> loadgen_core::SeedOutcome {
    let data = DataModel::default();
    let mut rng = StdRng::seed_from_u64(42);
    seed(store, &data, &mut rng, users, items)
        .await
        .expect("seeding failed")
}

#[tokio::test]
async fn referential_validity_with_nontrivial_id_base() {
    // A reused store whose sequences do not start at 1.
    let mut store = MemoryStore::with_base_id(500);
    let outcome = seeded_store(&mut store, 20, 5).await;

    let item_ids: HashSet<i64> = store.items.iter().map(|i| i.id).collect();
    let events = MemoryEventSink::new();
    let mut engine = GenerationEngine::new(
        config(50, 2),
        outcome.catalog,
        outcome.user_ids,
        StdRng::seed_from_u64(7),
    );
    engine.run(&mut store, &events).await.unwrap();

    assert_eq!(store.purchases.len(), 50);
    for purchase in &store.purchases {
        assert!(outcome.user_ids.contains(purchase.user_id));
        assert!(item_ids.contains(&purchase.item_id));
    }
    // Background events must also reference seeded populations.
    for (_, event) in events.published() {
        assert!(outcome.user_ids.contains(event.user_id));
        assert!(item_ids.contains(&event.item_id));
    }
}

#[tokio::test]
async fn purchase_price_is_cached_price_times_quantity() {
    let mut store = MemoryStore::new();
    let outcome = seeded_store(&mut store, 10, 4).await;
    let catalog = outcome.catalog.clone();

    let events = MemoryEventSink::new();
    let mut engine = GenerationEngine::new(
        config(30, 0),
        outcome.catalog,
        outcome.user_ids,
        StdRng::seed_from_u64(3),
    );
    engine.run(&mut store, &events).await.unwrap();

    for purchase in &store.purchases {
        assert!((1..=4).contains(&purchase.quantity));
        let price = catalog.price_of(purchase.item_id).unwrap();
        assert_eq!(purchase.purchase_price, price * f64::from(purchase.quantity));
    }
}

#[tokio::test]
async fn seeding_cardinality() {
    let mut store = MemoryStore::new();
    let outcome = seeded_store(&mut store, 1000, 200).await;

    assert_eq!(store.users.len(), 1000);
    assert_eq!(store.items.len(), 200);
    assert_eq!(outcome.catalog.len(), 200);
    assert_eq!(outcome.user_ids.len(), 1000);
    assert_eq!(outcome.item_ids.len(), 200);
}

#[tokio::test]
async fn linked_event_precedes_purchase_insert() {
    let mut store = MemoryStore::new();
    let outcome = seeded_store(&mut store, 10, 3).await;

    let background = 1u32;
    let events = MemoryEventSink::new();
    let mut engine = GenerationEngine::new(
        config(10, background),
        outcome.catalog,
        outcome.user_ids,
        StdRng::seed_from_u64(11),
    );
    engine.run(&mut store, &events).await.unwrap();

    let published = events.published();
    let per_iteration = (1 + background) as usize;
    for (i, purchase) in store.purchases.iter().enumerate() {
        let (_, linked) = &published[i * per_iteration];
        assert_eq!(linked.user_id, purchase.user_id);
        assert_eq!(linked.item_id, purchase.item_id);
        assert!(linked.received_at <= purchase.inserted_at);
    }
}

#[tokio::test]
async fn publish_failure_aborts_with_completed_count() {
    let mut store = MemoryStore::new();
    let outcome = seeded_store(&mut store, 10, 3).await;

    // One background event per iteration means two publishes per iteration;
    // accepting four lets iterations 1 and 2 finish and fails the linked
    // publish of iteration 3.
    let events = MemoryEventSink::failing_after(4);
    let mut engine = GenerationEngine::new(
        config(10, 1),
        outcome.catalog,
        outcome.user_ids,
        StdRng::seed_from_u64(5),
    );
    let aborted = engine.run(&mut store, &events).await.unwrap_err();

    assert_eq!(aborted.completed, 2);
    assert!(matches!(aborted.source, LoadGenError::Publish(_)));
    // No purchase row for the failed iteration.
    assert_eq!(store.purchases.len(), 2);
}

#[tokio::test]
async fn insert_failure_aborts_with_completed_count() {
    let mut store = MemoryStore::new();
    let outcome = seeded_store(&mut store, 10, 3).await;
    store.fail_purchases_after = Some(3);

    let events = MemoryEventSink::new();
    let mut engine = GenerationEngine::new(
        config(10, 0),
        outcome.catalog,
        outcome.user_ids,
        StdRng::seed_from_u64(5),
    );
    let aborted = engine.run(&mut store, &events).await.unwrap_err();

    assert_eq!(aborted.completed, 3);
    assert!(matches!(aborted.source, LoadGenError::Insert(_)));
    // The failing iteration's events were already published.
    assert_eq!(events.published().len(), 4);
}

#[tokio::test]
async fn identical_seeds_produce_identical_selections() {
    let mut selections = Vec::new();
    for _ in 0..2 {
        let mut store = MemoryStore::new();
        let outcome = seeded_store(&mut store, 50, 10).await;
        let events = MemoryEventSink::new();
        let mut engine = GenerationEngine::new(
            config(25, 2),
            outcome.catalog,
            outcome.user_ids,
            StdRng::seed_from_u64(99),
        );
        engine.run(&mut store, &events).await.unwrap();
        selections.push(
            store
                .purchases
                .iter()
                .map(|p| (p.user_id, p.item_id, p.quantity))
                .collect::<Vec<_>>(),
        );
    }
    assert_eq!(selections[0], selections[1]);
}

#[tokio::test]
async fn empty_catalog_is_a_fatal_precondition() {
    let mut store = MemoryStore::new();
    let events = MemoryEventSink::new();
    let mut engine = GenerationEngine::new(
        config(10, 0),
        CatalogCache::from_entries(Vec::new()),
        loadgen_core::IdRange { first: 1, last: 10 },
        StdRng::seed_from_u64(1),
    );
    let aborted = engine.run(&mut store, &events).await.unwrap_err();

    assert_eq!(aborted.completed, 0);
    assert!(matches!(aborted.source, LoadGenError::EmptyCatalog));
    assert!(events.published().is_empty());
}

#[tokio::test]
async fn seed_failure_is_fatal_and_typed() {
    let mut store = MemoryStore::new();
    store.fail_items_after = Some(2);

    let data = DataModel::default();
    let mut rng = StdRng::seed_from_u64(42);
    let err = seed(&mut store, &data, &mut rng, 10, 5).await.unwrap_err();

    assert!(matches!(err, LoadGenError::Seed(_)));
    // No partial-seed recovery: whatever landed before the failure stays.
    assert_eq!(store.items.len(), 2);
    assert!(store.users.is_empty());
}

#[tokio::test]
async fn end_to_end_small_scenario() {
    let mut store = MemoryStore::new();
    let outcome = seeded_store(&mut store, 5, 3).await;
    let item_ids: HashSet<i64> = store.items.iter().map(|i| i.id).collect();

    let events = MemoryEventSink::new();
    let mut engine = GenerationEngine::new(
        config(2, 1),
        outcome.catalog,
        outcome.user_ids,
        StdRng::seed_from_u64(21),
    );
    let completed = engine.run(&mut store, &events).await.unwrap();

    assert_eq!(completed, 2);
    assert_eq!(store.users.len(), 5);
    assert_eq!(store.items.len(), 3);
    assert_eq!(store.purchases.len(), 2);
    assert_eq!(events.published().len(), 4);
    for purchase in &store.purchases {
        assert!(item_ids.contains(&purchase.item_id));
    }
}
