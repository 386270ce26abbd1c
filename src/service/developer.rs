//! Developer business rules: unique email on create, existence on update/delete,
//! and the active-only visibility of list views.

use crate::error::AppError;
use crate::model::{Developer, Status};
use crate::store::DeveloperStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct DeveloperService {
    store: Arc<dyn DeveloperStore>,
}

impl DeveloperService {
    pub fn new(store: Arc<dyn DeveloperStore>) -> Self {
        DeveloperService { store }
    }

    pub fn store(&self) -> &Arc<dyn DeveloperStore> {
        &self.store
    }

    /// Persist a new developer. Email must be unused by any record, active or deleted.
    /// Status is always set to ACTIVE.
    pub async fn create(&self, mut developer: Developer) -> Result<Developer, AppError> {
        if self.store.find_by_email(&developer.email).await?.is_some() {
            tracing::info!(email = %developer.email, "rejecting developer with duplicate email");
            return Err(AppError::duplicate_email());
        }
        developer.status = Status::Active;
        let saved = self.store.save(developer).await?;
        tracing::info!(id = ?saved.id, "developer created");
        Ok(saved)
    }

    /// Overwrite every field (status included) of an existing developer.
    pub async fn update(&self, developer: Developer) -> Result<Developer, AppError> {
        let id = developer.id.ok_or_else(AppError::developer_not_found)?;
        if !self.store.exists_by_id(id).await? {
            return Err(AppError::developer_not_found());
        }
        let saved = self.store.save(developer).await?;
        tracing::info!(id, "developer updated");
        Ok(saved)
    }

    /// Returns the developer regardless of status.
    pub async fn get_by_id(&self, id: i32) -> Result<Developer, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::developer_not_found)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Developer, AppError> {
        self.store
            .find_by_email(email)
            .await?
            .ok_or_else(AppError::developer_not_found)
    }

    pub async fn list_active(&self) -> Result<Vec<Developer>, AppError> {
        let all = self.store.find_all().await?;
        Ok(all.into_iter().filter(Developer::is_active).collect())
    }

    pub async fn list_active_by_specialty(&self, specialty: &str) -> Result<Vec<Developer>, AppError> {
        self.store.find_active_by_specialty(specialty).await
    }

    /// Flip status to DELETED; the row stays reachable by id.
    pub async fn soft_delete(&self, id: i32) -> Result<(), AppError> {
        let mut developer = self.get_by_id(id).await?;
        developer.status = Status::Deleted;
        self.store.save(developer).await?;
        tracing::info!(id, "developer soft-deleted");
        Ok(())
    }

    pub async fn hard_delete(&self, id: i32) -> Result<(), AppError> {
        let developer = self.get_by_id(id).await?;
        let id = developer.id.unwrap_or(id);
        self.store.delete_by_id(id).await?;
        tracing::info!(id, "developer hard-deleted");
        Ok(())
    }
}
