//! Record store: persistence contract for developers plus the PostgreSQL and in-memory adapters.

mod memory;
mod postgres;

pub use memory::MemoryDeveloperStore;
pub use postgres::{ensure_database_exists, ensure_developers_table, qualified_table, PgDeveloperStore};

use crate::error::AppError;
use crate::model::Developer;
use async_trait::async_trait;

/// Direct pass-through to the backing table. Business rules live in the service.
#[async_trait]
pub trait DeveloperStore: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Developer>, AppError>;

    /// Matches regardless of status.
    async fn find_by_email(&self, email: &str) -> Result<Option<Developer>, AppError>;

    async fn exists_by_id(&self, id: i32) -> Result<bool, AppError>;

    /// Insert when `developer.id` is `None` (a new id is assigned), otherwise replace every
    /// field of the stored row with that id. Returns the stored record.
    async fn save(&self, developer: Developer) -> Result<Developer, AppError>;

    /// All rows regardless of status, in id order.
    async fn find_all(&self) -> Result<Vec<Developer>, AppError>;

    /// Rows with `status = ACTIVE` and an exact `specialty` match.
    async fn find_active_by_specialty(&self, specialty: &str) -> Result<Vec<Developer>, AppError>;

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError>;

    /// Readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
