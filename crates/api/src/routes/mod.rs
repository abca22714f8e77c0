pub mod health;
pub mod palettes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /tags                     popular browse tags
/// /palettes?tag=&count=     palettes for a tag
/// /palettes/trending        trending palettes
/// /palette/{id}             palette detail
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(palettes::router())
}
