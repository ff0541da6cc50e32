//! Kafka event sink for shop-loadgen.
//!
//! Publishes JSON-encoded pageview events. Broker endpoints, acknowledgment
//! level, and topic management are all configured here; the engine only
//! sees the [`EventSink`] trait.

use anyhow::Context;
use async_trait::async_trait;
use loadgen_core::{EventSink, PageviewEvent};
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::ClientConfig;
use std::time::Duration;

const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Event sink publishing pageviews to a Kafka topic.
pub struct KafkaEventSink {
    producer: FutureProducer,
    brokers: String,
}

impl KafkaEventSink {
    /// Create a producer that waits for acknowledgment from all replicas
    /// before a publish returns.
    pub fn new(brokers: &str) -> anyhow::Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("acks", "all")
            .set("message.timeout.ms", "5000")
            .create()
            .context("Failed to create Kafka producer")?;

        Ok(Self {
            producer,
            brokers: brokers.to_string(),
        })
    }

    /// Create the topic if it doesn't exist.
    pub async fn create_topic_if_not_exists(&self, topic: &str, partitions: i32) -> anyhow::Result<()> {
        let admin_client: AdminClient<DefaultClientContext> = ClientConfig::new()
            .set("bootstrap.servers", &self.brokers)
            .create()
            .context("Failed to create admin client")?;

        let new_topic = NewTopic::new(topic, partitions, TopicReplication::Fixed(1));
        let opts = AdminOptions::new().operation_timeout(Some(Duration::from_secs(5)));

        let results = admin_client
            .create_topics(&[new_topic], &opts)
            .await
            .context("Failed to create topics")?;
        for result in results {
            match result {
                Ok(topic_name) => {
                    tracing::info!("Topic '{topic_name}' created");
                }
                Err((topic_name, err)) => {
                    if err.to_string().contains("already exists") {
                        tracing::info!("Topic '{topic_name}' already exists");
                    } else {
                        return Err(anyhow::anyhow!("Failed to create topic: {err}"));
                    }
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl EventSink for KafkaEventSink {
    async fn publish(&self, stream: &str, event: &PageviewEvent) -> anyhow::Result<()> {
        let payload = serde_json::to_vec(event).context("Failed to encode pageview event")?;
        let key = event.user_id.to_string();

        let record = FutureRecord::to(stream).key(&key).payload(&payload);

        self.producer
            .send(record, SEND_TIMEOUT)
            .await
            .map_err(|(err, _)| err)
            .context("Failed to send pageview to Kafka")?;

        tracing::debug!(
            "Published pageview: user {} viewed item {}",
            event.user_id,
            event.item_id
        );
        Ok(())
    }
}
