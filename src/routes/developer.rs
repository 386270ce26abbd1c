//! Developer routes, nested under `/api/v1/developers`.
//!
//! | Method & path               | Domain failure |
//! |-----------------------------|----------------|
//! | POST /                      | 400            |
//! | PUT /                       | 400            |
//! | GET /:id                    | 404            |
//! | GET /                       | none           |
//! | GET /specialty/:specialty   | none           |
//! | DELETE /:id?isHard=bool     | 400            |

use crate::handlers::developer::{create, delete as delete_handler, list, list_by_specialty, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const DEVELOPERS_BASE_PATH: &str = "/api/v1/developers";

pub fn developer_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create).put(update))
        .route("/specialty/:specialty", get(list_by_specialty))
        .route("/:id", get(read).delete(delete_handler))
        .with_state(state)
}
