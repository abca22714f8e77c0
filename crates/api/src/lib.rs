//! Inspira palette API server library.
//!
//! Exposes config, state, error handling and routes so integration tests
//! and the binary entrypoint share the same router.

pub mod assembly;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod trending;
