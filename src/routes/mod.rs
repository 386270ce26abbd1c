//! Router assembly: common probes, developer API, OpenAPI document.

mod common;
mod developer;
mod docs;

pub use common::common_routes;
pub use developer::{developer_routes, DEVELOPERS_BASE_PATH};
pub use docs::{docs_routes, ApiDoc, OPENAPI_PATH};

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router with request tracing and a request body size limit.
pub fn app_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(docs_routes())
        .nest(DEVELOPERS_BASE_PATH, developer_routes(state))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
