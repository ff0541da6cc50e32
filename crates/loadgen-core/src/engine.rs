//! The paced dual-write generation loop.

use crate::catalog::CatalogCache;
use crate::error::{LoadGenError, RunAborted};
use crate::model::{IdRange, NewPurchase, PageviewEvent};
use crate::sink::{EventSink, RelationalSink};
use rand::Rng;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Configuration for one generation run. All fields are required.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Total purchase+event cycles to produce.
    pub iteration_count: u64,
    /// Target wall-clock spacing between iteration starts.
    pub tick_interval: Duration,
    /// Extra uncorrelated events emitted alongside each linked event.
    pub background_events_per_iteration: u32,
    /// Event stream to publish pageviews to.
    pub stream: String,
}

/// The core generation loop.
///
/// Each iteration selects a referentially valid (user, item, quantity)
/// triple, publishes one linked pageview event plus the configured number of
/// background events, sleeps out the rest of the tick, and then inserts the
/// purchase row. The event deliberately precedes the insert within an
/// iteration, modeling a view signal arriving ahead of checkout; downstream
/// consumers may rely on that ordering for latency measurement.
///
/// Pacing is best effort: each tick sleeps for whatever budget the sink
/// round trips left over, floored at zero. Drift across iterations is
/// accepted, not corrected.
pub struct GenerationEngine<R> {
    config: GenerationConfig,
    catalog: CatalogCache,
    user_ids: IdRange,
    rng: R,
}

impl<R: Rng + Send> GenerationEngine<R> {
    pub fn new(config: GenerationConfig, catalog: CatalogCache, user_ids: IdRange, rng: R) -> Self {
        Self {
            config,
            catalog,
            user_ids,
            rng,
        }
    }

    /// Run all configured iterations against the two sinks.
    ///
    /// Returns the number of iterations completed. Any sink failure aborts
    /// the run immediately; steps already performed for the failing
    /// iteration are not undone, and [`RunAborted::completed`] reports how
    /// many iterations fully finished before it.
    pub async fn run<S, E>(&mut self, relational: &mut S, events: &E) -> Result<u64, RunAborted>
    where
        S: RelationalSink + ?Sized,
        E: EventSink + ?Sized,
    {
        if self.catalog.is_empty() {
            return Err(RunAborted {
                completed: 0,
                source: LoadGenError::EmptyCatalog,
            });
        }

        let mut completed = 0u64;
        for _ in 0..self.config.iteration_count {
            self.iteration(relational, events)
                .await
                .map_err(|source| RunAborted { completed, source })?;
            completed += 1;

            debug!(completed, "iteration finished");
        }

        Ok(completed)
    }

    async fn iteration<S, E>(&mut self, relational: &mut S, events: &E) -> Result<(), LoadGenError>
    where
        S: RelationalSink + ?Sized,
        E: EventSink + ?Sized,
    {
        let tick_start = Instant::now();

        // Selection order is fixed (item, user, quantity) so a seeded RNG
        // reproduces the same sequence run to run.
        let item = *self.catalog.pick_random(&mut self.rng)?;
        let user_id = self.user_ids.sample(&mut self.rng);
        let quantity = self.rng.gen_range(1..=4);

        let linked = PageviewEvent::now(user_id, item.id);
        events
            .publish(&self.config.stream, &linked)
            .await
            .map_err(|e| LoadGenError::Publish(e.to_string()))?;

        for _ in 0..self.config.background_events_per_iteration {
            let bg_user = self.user_ids.sample(&mut self.rng);
            let bg_item = self.catalog.pick_random(&mut self.rng)?;
            let event = PageviewEvent::now(bg_user, bg_item.id);
            events
                .publish(&self.config.stream, &event)
                .await
                .map_err(|e| LoadGenError::Publish(e.to_string()))?;
        }

        // Sleep out whatever part of the tick the publishes did not consume.
        // The purchase lands after the pause, so its commit always trails
        // the linked event's emission.
        let remaining = self.config.tick_interval.saturating_sub(tick_start.elapsed());
        if !remaining.is_zero() {
            sleep(remaining).await;
        }

        let purchase = NewPurchase {
            user_id,
            item_id: item.id,
            quantity,
            purchase_price: item.price * f64::from(quantity),
        };
        relational
            .insert_purchase(&purchase)
            .await
            .map_err(|e| LoadGenError::Insert(e.to_string()))?;

        Ok(())
    }
}
