use std::sync::Arc;

use crate::config::ServerConfig;
use crate::trending::TrendingSource;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Upstream trending palettes.
    pub trending: Arc<dyn TrendingSource>,
}
