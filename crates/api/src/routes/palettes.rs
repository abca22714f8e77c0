//! Route definitions for palette browsing.

use axum::routing::get;
use axum::Router;

use crate::handlers::palettes;
use crate::state::AppState;

/// Browse routes mounted at `/api`.
///
/// ```text
/// GET /tags                 -> list_tags
/// GET /palettes             -> palettes_by_tag
/// GET /palettes/trending    -> trending_palettes
/// GET /palette/{id}         -> palette_detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tags", get(palettes::list_tags))
        .route("/palettes", get(palettes::palettes_by_tag))
        .route("/palettes/trending", get(palettes::trending_palettes))
        .route("/palette/{id}", get(palettes::palette_detail))
}
