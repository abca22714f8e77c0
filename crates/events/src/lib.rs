//! Inspira collection change notifications.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`, shared via `Arc<EventBus>`.
//! - [`CollectionEvent`]: emitted after every successful collection write
//!   so other views of the same storage can reload.

pub mod bus;

pub use bus::{ChangeKind, CollectionEvent, EventBus};
