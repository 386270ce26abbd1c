//! OpenAPI document for the developer API, served as JSON.

use crate::model::{DeveloperDto, Status};
use crate::response::ErrorBody;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Developer registry API",
        description = "Create, update, look up, list and delete developer records."
    ),
    paths(
        crate::handlers::developer::create,
        crate::handlers::developer::update,
        crate::handlers::developer::read,
        crate::handlers::developer::list,
        crate::handlers::developer::list_by_specialty,
        crate::handlers::developer::delete,
    ),
    components(schemas(DeveloperDto, Status, ErrorBody)),
    tags((name = "developers", description = "Developer records"))
)]
pub struct ApiDoc;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn docs_routes() -> Router {
    Router::new().route(OPENAPI_PATH, get(openapi_json))
}
