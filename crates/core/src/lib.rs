//! Inspira domain core.
//!
//! Palette types, the collection filter engine, the curated/generated
//! palette catalog, color helpers and PNG export. This crate has no
//! internal dependencies so the store, client and server crates can all
//! share it.

pub mod catalog;
pub mod color;
pub mod error;
pub mod export;
pub mod filter;
pub mod palette;
pub mod types;
pub mod wire;
