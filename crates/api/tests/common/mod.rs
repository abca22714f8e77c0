#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use inspira_api::config::ServerConfig;
use inspira_api::router::build_app_router;
use inspira_api::state::AppState;
use inspira_api::trending::{FixedTrending, TrendingSource};

/// Build a test `ServerConfig` with safe defaults and the upstream disabled.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        trending_url: String::new(),
        trending_timeout_secs: 10,
    }
}

/// Build the full application router, with all middleware layers, over the
/// given trending source.
pub fn build_test_app(trending: impl TrendingSource + 'static) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        trending: Arc::new(trending),
    };
    build_app_router(state, &config)
}

/// App whose upstream returns nothing.
pub fn offline_app() -> Router {
    build_test_app(FixedTrending::empty())
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
