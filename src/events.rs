//! Detection event notifications
//!
//! Results are always returned to the direct caller; the channel here is an
//! optional side-band so overlays or alert sinks can observe a pass without
//! polling. Events are sent synchronously, so every subscriber is notified
//! no later than `find_matches` returns.

use tokio::sync::mpsc;

use crate::match_image::Match;

#[derive(Debug, Clone)]
pub enum DetectionEvent {
    /// A match survived thresholding during a pass.
    MatchFound(Match),
    /// A per-template or per-frame failure. `template` is `None` for
    /// frame-level failures.
    MatchFailed {
        template: Option<String>,
        reason: String,
    },
}

/// Fan-out list of event subscribers. Closed receivers are pruned lazily on
/// the next emission.
#[derive(Debug, Default)]
pub struct EventSubscribers {
    senders: Vec<mpsc::UnboundedSender<DetectionEvent>>,
}

impl EventSubscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber and return its receiving end.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<DetectionEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.push(tx);
        rx
    }

    pub fn emit(&mut self, event: DetectionEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.senders.len()
    }
}
