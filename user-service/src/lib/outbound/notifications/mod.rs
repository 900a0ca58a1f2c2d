pub mod queue;

pub use queue::KafkaNotificationQueue;
