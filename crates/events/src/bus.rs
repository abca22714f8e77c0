//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`CollectionEvent`]s. It
//! replaces ambient storage-change listening with an explicit subscription.

use chrono::Utc;
use inspira_core::palette::CollectionList;
use inspira_core::types::{PaletteId, Timestamp};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// CollectionEvent
// ---------------------------------------------------------------------------

/// What happened to a collection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// A record was inserted or replaced.
    Upserted,
    /// A record was removed.
    Removed,
    /// The whole list was rewritten.
    Replaced,
}

/// A change to one of the persisted collection lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionEvent {
    pub list: CollectionList,
    pub change: ChangeKind,
    /// Affected record, absent for whole-list changes.
    pub palette_id: Option<PaletteId>,
    pub timestamp: Timestamp,
}

impl CollectionEvent {
    pub fn new(list: CollectionList, change: ChangeKind) -> Self {
        Self {
            list,
            change,
            palette_id: None,
            timestamp: Utc::now(),
        }
    }

    pub fn upserted(list: CollectionList, id: impl Into<PaletteId>) -> Self {
        Self::new(list, ChangeKind::Upserted).with_palette(id)
    }

    pub fn removed(list: CollectionList, id: impl Into<PaletteId>) -> Self {
        Self::new(list, ChangeKind::Removed).with_palette(id)
    }

    pub fn with_palette(mut self, id: impl Into<PaletteId>) -> Self {
        self.palette_id = Some(id.into());
        self
    }

    /// Dot-separated name for logs, e.g. `"favorites.removed"`.
    pub fn event_type(&self) -> String {
        let change = match self.change {
            ChangeKind::Upserted => "upserted",
            ChangeKind::Removed => "removed",
            ChangeKind::Replaced => "replaced",
        };
        format!("{}.{change}", self.list.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out event bus.
///
/// ```rust
/// use inspira_core::palette::CollectionList;
/// use inspira_events::{CollectionEvent, EventBus};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(CollectionEvent::upserted(CollectionList::Favorites, "beach-0"));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<CollectionEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed events are dropped and
    /// slow receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers. Dropped silently when
    /// nobody is subscribed.
    pub fn publish(&self, event: CollectionEvent) {
        tracing::trace!(event_type = %event.event_type(), "Publishing collection event");
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CollectionEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
