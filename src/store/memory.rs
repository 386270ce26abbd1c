//! In-process store. Ids are assigned from a counter starting at 1; iteration follows id order.

use super::DeveloperStore;
use crate::error::AppError;
use crate::model::Developer;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Developer>,
}

#[derive(Default)]
pub struct MemoryDeveloperStore {
    table: RwLock<Table>,
}

impl MemoryDeveloperStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeveloperStore for MemoryDeveloperStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Developer>, AppError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Developer>, AppError> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .find(|d| d.email == email)
            .cloned())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn save(&self, mut developer: Developer) -> Result<Developer, AppError> {
        let mut table = self.table.write().await;
        let id = match developer.id {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(_) => return Err(AppError::Db(sqlx::Error::RowNotFound)),
            None => {
                table.last_id = table
                    .last_id
                    .checked_add(1)
                    .ok_or_else(|| AppError::Storage("developer id space exhausted".into()))?;
                table.last_id
            }
        };
        developer.id = Some(id);
        table.rows.insert(id, developer.clone());
        Ok(developer)
    }

    async fn find_all(&self) -> Result<Vec<Developer>, AppError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_active_by_specialty(&self, specialty: &str) -> Result<Vec<Developer>, AppError> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|d| d.is_active() && d.specialty == specialty)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
