//! Handlers for the browse endpoints.
//!
//! Responses are bare JSON bodies matching the shapes the browse client
//! reads; there is no `{ "data": ... }` envelope.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use inspira_core::catalog::{is_known_tag, sample_detail, POPULAR_TAGS};
use inspira_core::error::CoreError;
use serde::Deserialize;

use crate::assembly::{
    clamp_count, palettes_for_tag, trending_or_curated, DEFAULT_TAG_COUNT, DEFAULT_TRENDING_COUNT,
};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /api/palettes`.
#[derive(Debug, Deserialize)]
pub struct PalettesQuery {
    pub tag: String,
    pub count: Option<i64>,
}

/// Query parameters for `GET /api/palettes/trending`.
#[derive(Debug, Default, Deserialize)]
pub struct TrendingQuery {
    pub count: Option<i64>,
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// GET /api/tags
pub async fn list_tags() -> Json<&'static [&'static str]> {
    Json(POPULAR_TAGS)
}

// ---------------------------------------------------------------------------
// Palettes
// ---------------------------------------------------------------------------

/// GET /api/palettes?tag=&count=
///
/// Palettes for one of the popular tags. Unknown tags are 404.
pub async fn palettes_by_tag(
    State(state): State<AppState>,
    Query(params): Query<PalettesQuery>,
) -> AppResult<impl IntoResponse> {
    if !is_known_tag(&params.tag) {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Tag",
            id: params.tag,
        }));
    }

    let count = clamp_count(params.count, DEFAULT_TAG_COUNT);
    let body = palettes_for_tag(&params.tag, count, state.trending.as_ref()).await;

    tracing::debug!(
        tag = %params.tag,
        count,
        total = body.total,
        fallback = body.error.is_some(),
        "Served palettes for tag",
    );

    Ok(Json(body))
}

/// GET /api/palettes/trending?count=
pub async fn trending_palettes(
    State(state): State<AppState>,
    Query(params): Query<TrendingQuery>,
) -> AppResult<impl IntoResponse> {
    let count = clamp_count(params.count, DEFAULT_TRENDING_COUNT);
    let body = trending_or_curated(count, state.trending.as_ref()).await;

    tracing::debug!(count, total = body.total, "Served trending palettes");

    Ok(Json(body))
}

/// GET /api/palette/{id}
///
/// Detail view. Every id resolves to the sample record.
pub async fn palette_detail(Path(id): Path<String>) -> AppResult<impl IntoResponse> {
    if id.trim().is_empty() {
        return Err(AppError::BadRequest("Palette id must not be empty".into()));
    }
    Ok(Json(sample_detail(&id)))
}
