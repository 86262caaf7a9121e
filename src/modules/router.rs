use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, MethodRouter},
    Json, Router,
};
use serde_json::json;

use super::node;
use crate::types::Context;
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "message": "Nodes API is up" })))
}

/// Every path served under `/api`, with its handler.
pub fn routes() -> Vec<(&'static str, MethodRouter<Arc<Context>>)> {
    vec![
        ("/", get(health_check)),
        ("/nodes/list", get(node::routes::list::handler)),
    ]
}

pub fn get_router() -> Router<Arc<Context>> {
    routes()
        .into_iter()
        .fold(Router::new(), |router, (path, route)| router.route(path, route))
}
