//! PostgreSQL adapter. The developers table lives in a configurable schema (`DEVS_SCHEMA`, default `public`).

use super::DeveloperStore;
use crate::error::AppError;
use crate::model::{Developer, Status};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const DEVELOPERS_TABLE: &str = "developers";

const COLUMNS: &str = "id, first_name, last_name, email, specialty, status";

type DeveloperRow = (i32, String, String, String, String, String);

/// Returns the quoted, schema-qualified table name (e.g. `"public"."developers"`).
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(table))
}

/// Create `schema` if not exists, then the developers table inside it.
pub async fn ensure_developers_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(pool)
        .await?;

    let q_table = qualified_table(schema, DEVELOPERS_TABLE);
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL,
            specialty TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT 'ACTIVE'
        )
        "#,
        q_table
    );
    sqlx::query(&ddl).execute(pool).await?;
    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS developers_email_idx ON {} (email)",
        q_table
    ))
    .execute(pool)
    .await?;
    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS developers_specialty_status_idx ON {} (specialty, status)",
        q_table
    ))
    .execute(pool)
    .await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| crate::error::ConfigError::DatabaseUrl(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| crate::error::ConfigError::DatabaseUrl("no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn row_to_developer(row: DeveloperRow) -> Result<Developer, AppError> {
    let (id, first_name, last_name, email, specialty, status) = row;
    Ok(Developer {
        id: Some(id),
        first_name,
        last_name,
        email,
        specialty,
        status: status.parse()?,
    })
}

fn rows_to_developers(rows: Vec<DeveloperRow>) -> Result<Vec<Developer>, AppError> {
    rows.into_iter().map(row_to_developer).collect()
}

#[derive(Clone)]
pub struct PgDeveloperStore {
    pool: PgPool,
    table: String,
}

impl PgDeveloperStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgDeveloperStore {
            pool,
            table: qualified_table(schema, DEVELOPERS_TABLE),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DeveloperStore for PgDeveloperStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Developer>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, self.table);
        tracing::debug!(sql = %sql, id, "query");
        let row: Option<DeveloperRow> = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.map(row_to_developer).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Developer>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE email = $1 ORDER BY id LIMIT 1",
            COLUMNS, self.table
        );
        tracing::debug!(sql = %sql, email = %email, "query");
        let row: Option<DeveloperRow> = sqlx::query_as(&sql).bind(email).fetch_optional(&self.pool).await?;
        row.map(row_to_developer).transpose()
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AppError> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", self.table);
        tracing::debug!(sql = %sql, id, "query");
        let exists: (bool,) = sqlx::query_as(&sql).bind(id).fetch_one(&self.pool).await?;
        Ok(exists.0)
    }

    async fn save(&self, developer: Developer) -> Result<Developer, AppError> {
        let row: DeveloperRow = match developer.id {
            None => {
                let sql = format!(
                    "INSERT INTO {} (first_name, last_name, email, specialty, status) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
                    self.table, COLUMNS
                );
                tracing::debug!(sql = %sql, "query");
                sqlx::query_as(&sql)
                    .bind(&developer.first_name)
                    .bind(&developer.last_name)
                    .bind(&developer.email)
                    .bind(&developer.specialty)
                    .bind(developer.status.as_str())
                    .fetch_one(&self.pool)
                    .await?
            }
            Some(id) => {
                let sql = format!(
                    "UPDATE {} SET first_name = $2, last_name = $3, email = $4, specialty = $5, status = $6 WHERE id = $1 RETURNING {}",
                    self.table, COLUMNS
                );
                tracing::debug!(sql = %sql, id, "query");
                sqlx::query_as(&sql)
                    .bind(id)
                    .bind(&developer.first_name)
                    .bind(&developer.last_name)
                    .bind(&developer.email)
                    .bind(&developer.specialty)
                    .bind(developer.status.as_str())
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or(sqlx::Error::RowNotFound)?
            }
        };
        row_to_developer(row)
    }

    async fn find_all(&self) -> Result<Vec<Developer>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, self.table);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<DeveloperRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        rows_to_developers(rows)
    }

    async fn find_active_by_specialty(&self, specialty: &str) -> Result<Vec<Developer>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE status = $1 AND specialty = $2 ORDER BY id",
            COLUMNS, self.table
        );
        tracing::debug!(sql = %sql, specialty = %specialty, "query");
        let rows: Vec<DeveloperRow> = sqlx::query_as(&sql)
            .bind(Status::Active.as_str())
            .bind(specialty)
            .fetch_all(&self.pool)
            .await?;
        rows_to_developers(rows)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
