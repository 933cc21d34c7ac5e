//! Draw event fan-out
//!
//! The presentation layer subscribes here for spin ticks and winner
//! celebrations. Delivery is best-effort over unbounded channels; closed
//! subscribers are dropped on the next publish.

use std::sync::RwLock;

use tokio::sync::mpsc;

use crate::store::Winner;

/// Events published during draw sequences.
#[derive(Debug, Clone)]
pub enum DrawEvent {
    /// A name flashed on the wheel during Animating
    SpinTick { category: String, name: String },
    /// A winner was durably committed (cue the celebration)
    WinnerCommitted { winner: Winner },
    /// An in-flight sequence was cancelled before settling
    DrawCancelled { category: String },
    /// A draw-all batch finished
    BatchComplete { category: String, committed: usize },
}

/// Subscription registry for draw events.
#[derive(Debug, Default)]
pub struct EventHub {
    senders: RwLock<Vec<mpsc::UnboundedSender<DrawEvent>>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<DrawEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        if let Ok(mut senders) = self.senders.write() {
            senders.push(tx);
        }
        rx
    }

    /// Publish to all live subscribers, pruning closed ones.
    pub fn publish(&self, event: DrawEvent) {
        if let Ok(mut senders) = self.senders.write() {
            senders.retain(|tx| tx.send(event.clone()).is_ok());
        }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.senders.read().map(|s| s.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let hub = EventHub::new();
        let mut rx = hub.subscribe();

        hub.publish(DrawEvent::SpinTick {
            category: "APAC".to_string(),
            name: "Asha".to_string(),
        });

        match rx.recv().await.unwrap() {
            DrawEvent::SpinTick { category, name } => {
                assert_eq!(category, "APAC");
                assert_eq!(name, "Asha");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn closed_subscribers_are_pruned() {
        let hub = EventHub::new();
        let rx = hub.subscribe();
        assert_eq!(hub.subscriber_count(), 1);

        drop(rx);
        hub.publish(DrawEvent::DrawCancelled {
            category: "APAC".to_string(),
        });
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn publish_reaches_every_subscriber() {
        let hub = EventHub::new();
        let mut a = hub.subscribe();
        let mut b = hub.subscribe();

        hub.publish(DrawEvent::BatchComplete {
            category: "APAC".to_string(),
            committed: 2,
        });

        assert!(matches!(a.recv().await, Some(DrawEvent::BatchComplete { .. })));
        assert!(matches!(b.recv().await, Some(DrawEvent::BatchComplete { .. })));
    }
}
