//! Inspira client services.
//!
//! Everything a front end needs on top of the domain core:
//!
//! - [`api`]: HTTP client for the palette API.
//! - [`browse`]: tag and palette browsing with static fallbacks.
//! - [`create`]: the palette editor session (save, legacy list, export).
//! - [`collection`]: the filtered collection view.
//! - [`watch`]: reloads a collection view when the store changes.

pub mod api;
pub mod browse;
pub mod collection;
pub mod config;
pub mod create;
pub mod fallback;
pub mod watch;

pub use api::{ApiError, PaletteApi, PaletteSource};
pub use browse::{BrowseService, BrowseSession, Loaded};
pub use collection::{CollectionView, EmptyState};
pub use config::ClientConfig;
pub use create::CreateSession;
