use std::time::Duration;

use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::FutureProducer;
use rdkafka::producer::FutureRecord;
use rdkafka::util::Timeout;

use crate::config::KafkaConfig;
use crate::user::errors::QueueError;
use crate::user::ports::NotificationQueue;

/// Kafka adapter for the notification queue port.
///
/// Fire-and-forget from the domain's point of view; delivery retries live in
/// the producer configuration, not in calling code.
pub struct KafkaNotificationQueue {
    producer: FutureProducer,
    topic: String,
    timeout: Duration,
}

impl KafkaNotificationQueue {
    /// Create a producer with "at least once" delivery semantics.
    ///
    /// # Notes:
    /// - `acks=all`: Wait for all in-sync replicas to acknowledge
    /// - `enable.idempotence=true`: Prevents duplicate messages during retries
    /// - `retry.backoff.ms=100`: Backoff between retry attempts
    pub fn new(config: &KafkaConfig) -> Result<Self, anyhow::Error> {
        tracing::info!(
            brokers = %config.brokers,
            topic = %config.topic,
            "Initializing Kafka producer for user notifications"
        );

        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("message.timeout.ms", "30000")
            .set("compression.type", "gzip")
            .set("enable.idempotence", "true")
            .set("acks", "all")
            .set("retries", "10")
            .set("retry.backoff.ms", "100")
            .create()?;

        Ok(Self {
            producer,
            topic: config.topic.to_string(),
            timeout: Duration::from_secs(30),
        })
    }
}

#[async_trait]
impl NotificationQueue for KafkaNotificationQueue {
    async fn send(&self, message: &str) -> Result<(), QueueError> {
        let record = FutureRecord::<(), str>::to(&self.topic).payload(message);

        self.producer
            .send(record, Timeout::After(self.timeout))
            .await
            .map(|_| {
                tracing::debug!(topic = %self.topic, "Notification published");
            })
            .map_err(|(err, _)| {
                tracing::error!(topic = %self.topic, error = %err, "Failed to publish notification");
                QueueError::SendFailed(err.to_string())
            })
    }
}
