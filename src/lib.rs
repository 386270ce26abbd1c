//! Developer registry: REST service over a relational store of developer records.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{ApiError, AppError, ConfigError};
pub use model::{Developer, DeveloperDto, Status};
pub use routes::{app_router, common_routes, developer_routes, docs_routes, ApiDoc};
pub use service::DeveloperService;
pub use state::AppState;
pub use store::{
    ensure_database_exists, ensure_developers_table, DeveloperStore, MemoryDeveloperStore, PgDeveloperStore,
};
