//! Event broker

use serde::Serialize;
use tokio::sync::broadcast;

/// One notification delivered to subscribers
#[derive(Debug, Clone, Serialize)]
pub struct EventMessage {
    pub topic: String,
    pub payload: serde_json::Value,
}

/// Receives mutation notifications from repositories.
///
/// `publish` must not block; repositories call it right after a write and
/// never wait on delivery.
pub trait Broker: Send + Sync + 'static {
    fn publish(&self, topics: Vec<String>, payload: serde_json::Value);
}

/// In-process broker backed by a tokio broadcast channel
#[derive(Debug, Clone)]
pub struct BroadcastBroker {
    sender: broadcast::Sender<EventMessage>,
}

impl BroadcastBroker {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EventMessage> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastBroker {
    fn default() -> Self {
        Self::new(1024)
    }
}

impl Broker for BroadcastBroker {
    fn publish(&self, topics: Vec<String>, payload: serde_json::Value) {
        for topic in topics {
            tracing::debug!(topic = %topic, "Publishing event");

            let message = EventMessage {
                topic,
                payload: payload.clone(),
            };
            if let Err(e) = self.sender.send(message) {
                // send only fails when nobody is subscribed
                tracing::trace!(topic = %e.0.topic, "Event dropped, no subscribers");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_every_topic() {
        let broker = BroadcastBroker::new(16);
        let mut rx = broker.subscribe();

        broker.publish(
            vec!["bank.create".to_string(), "bank.create.abc".to_string()],
            serde_json::json!({ "name": "HSBC" }),
        );

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.topic, "bank.create");
        assert_eq!(second.topic, "bank.create.abc");
        assert_eq!(second.payload["name"], "HSBC");
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let broker = BroadcastBroker::default();
        broker.publish(vec!["bank.delete".to_string()], serde_json::Value::Null);
    }
}
