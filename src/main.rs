//! Command-line interface for shop-loadgen.
//!
//! Seeds a PostgreSQL shop schema with users and catalog items, then emits a
//! paced stream of correlated writes: one pageview event to Kafka followed
//! by the matching purchase row in PostgreSQL, per iteration.
//!
//! ```bash
//! shop-loadgen \
//!   --postgres "host=localhost user=postgres password=postgres dbname=shop" \
//!   --kafka-brokers localhost:9092 \
//!   --purchase-count 10000 --tick-ms 100
//! ```
//!
//! Connection endpoints can also come from the environment
//! (`POSTGRES_CONNECTION_STRING`, `KAFKA_BROKERS`).

use clap::Parser;
use loadgen_core::{seed, GenerationConfig, GenerationEngine};
use loadgen_data::DataModel;
use loadgen_kafka::KafkaEventSink;
use loadgen_postgresql::PostgresStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "shop-loadgen", about = "Correlated purchase/pageview load generator")]
struct Args {
    /// PostgreSQL connection string
    #[arg(
        long = "postgres",
        env = "POSTGRES_CONNECTION_STRING",
        default_value = "host=localhost user=postgres password=postgres dbname=shop"
    )]
    postgres: String,

    /// Kafka brokers (comma-separated)
    #[arg(long, env = "KAFKA_BROKERS", default_value = "localhost:9092")]
    kafka_brokers: String,

    /// Kafka topic for pageview events
    #[arg(long, default_value = "pageview")]
    topic: String,

    /// Number of users to seed
    #[arg(long, default_value = "1000")]
    user_count: u32,

    /// Number of catalog items to seed
    #[arg(long, default_value = "200")]
    item_count: u32,

    /// Number of purchases to generate
    #[arg(long, default_value = "10000")]
    purchase_count: u64,

    /// Target spacing between purchases, in milliseconds
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// Extra uncorrelated pageviews published per purchase
    #[arg(long, default_value = "10")]
    background_events: u32,

    /// Random seed for deterministic generation (omit for a fresh run)
    #[arg(long)]
    seed: Option<u64>,

    /// Keep the existing schema instead of dropping and recreating it
    #[arg(long)]
    skip_schema_init: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut store = PostgresStore::connect(&args.postgres).await?;
    if !args.skip_schema_init {
        store.init_schema().await?;
    }

    let events = KafkaEventSink::new(&args.kafka_brokers)?;
    events.create_topic_if_not_exists(&args.topic, 1).await?;

    let data = DataModel::default();
    let outcome = seed(&mut store, &data, &mut rng, args.user_count, args.item_count).await?;

    let tick_interval = Duration::from_millis(args.tick_ms);
    match loadgen_core::describe(args.purchase_count, tick_interval) {
        Some(summary) => info!(
            "Generating {} purchases ({summary})",
            args.purchase_count
        ),
        None => info!(
            "Generating {} purchases as fast as the sinks allow",
            args.purchase_count
        ),
    }

    let config = GenerationConfig {
        iteration_count: args.purchase_count,
        tick_interval,
        background_events_per_iteration: args.background_events,
        stream: args.topic.clone(),
    };
    let mut engine = GenerationEngine::new(config, outcome.catalog, outcome.user_ids, rng);
    let completed = engine.run(&mut store, &events).await?;

    info!("Done generating purchases: {completed} iterations completed");
    Ok(())
}
