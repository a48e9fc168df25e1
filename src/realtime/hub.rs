//! Broadcast hub for realtime events.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::dto::notification::NotificationDto;

/// Capacity of the broadcast channel. Receivers that fall further behind
/// than this skip the missed events rather than buffering unboundedly.
const CHANNEL_CAPACITY: usize = 256;

/// What happened to the entity named by `topic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    Created,
    Updated,
    Deleted,
}

/// One event on the realtime channel.
///
/// Events with `user_id` set are delivered only to that user's sockets;
/// all others go to every connected client.
#[derive(Debug, Clone, Serialize)]
pub struct RealtimeEvent {
    pub topic: &'static str,
    pub action: EventAction,
    pub payload: serde_json::Value,
    #[serde(skip_serializing)]
    pub user_id: Option<u64>,
}

/// Process-local fan-out hub.
///
/// Cloning is cheap; all clones share the same channel. Publishing never
/// blocks and silently drops events when no socket is connected.
#[derive(Clone)]
pub struct RealtimeHub {
    tx: broadcast::Sender<RealtimeEvent>,
}

impl Default for RealtimeHub {
    fn default() -> Self {
        Self::new()
    }
}

impl RealtimeHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribes a new socket to the event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<RealtimeEvent> {
        self.tx.subscribe()
    }

    /// Broadcasts an entity change to every connected client.
    ///
    /// The payload is the serialized DTO of the changed entity; serialization
    /// failures are logged and dropped rather than failing the request that
    /// triggered the event.
    pub fn publish<T: Serialize>(&self, topic: &'static str, action: EventAction, payload: &T) {
        let payload = match serde_json::to_value(payload) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize realtime payload for {}: {}", topic, e);
                return;
            }
        };

        let _ = self.tx.send(RealtimeEvent {
            topic,
            action,
            payload,
            user_id: None,
        });
    }

    /// Sends a notification event to one user's sockets.
    pub fn notify_user(&self, user_id: u64, notification: NotificationDto) {
        let payload = match serde_json::to_value(&notification) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize notification payload: {}", e);
                return;
            }
        };

        let _ = self.tx.send(RealtimeEvent {
            topic: "notification",
            action: EventAction::Created,
            payload,
            user_id: Some(user_id),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn broadcast_reaches_all_subscribers() {
        let hub = RealtimeHub::new();
        let mut rx_a = hub.subscribe();
        let mut rx_b = hub.subscribe();

        hub.publish("sanction", EventAction::Created, &serde_json::json!({"id": 1}));

        let event_a = rx_a.recv().await.unwrap();
        let event_b = rx_b.recv().await.unwrap();
        assert_eq!(event_a.topic, "sanction");
        assert_eq!(event_b.action, EventAction::Created);
        assert_eq!(event_a.user_id, None);
    }

    #[tokio::test]
    async fn notification_event_carries_target_user() {
        let hub = RealtimeHub::new();
        let mut rx = hub.subscribe();

        let dto = NotificationDto {
            id: 1,
            title: "t".to_string(),
            body: "b".to_string(),
            read: false,
            created_at: chrono::Utc::now(),
        };
        hub.notify_user(42, dto);

        let event = rx.recv().await.unwrap();
        assert_eq!(event.topic, "notification");
        assert_eq!(event.user_id, Some(42));
    }

    #[test]
    fn publish_without_subscribers_does_not_panic() {
        let hub = RealtimeHub::new();
        hub.publish("announcement", EventAction::Deleted, &serde_json::json!({}));
    }
}
