pub mod logging;
pub mod metrics;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Connection, PgConnection};
use std::sync::Arc;

use crate::config::{AppConfig, DatabaseConfig};
use crate::error::ServiceError;
use crate::subject::Subject;

pub use logging::LoggingService;
pub use metrics::InstrumentedService;

/// The four subject operations. Decorators and the base store implement the
/// same contract so cross-cutting behavior composes without touching
/// business logic.
#[async_trait]
pub trait SubjectService: Send + Sync {
    async fn get_subjects(&self) -> Result<Vec<Subject>, ServiceError>;
    async fn add_subject(&self, subject: Subject) -> Result<(), ServiceError>;
    async fn update_subject(&self, subject: Subject) -> Result<(), ServiceError>;
    async fn delete_subject(&self, id: i32) -> Result<(), ServiceError>;
}

/// Builds the full chain: Postgres store -> logging -> metrics. The order is
/// fixed; metrics latency is measured outside the logging wrapper.
pub fn new_service(config: &'static AppConfig) -> Arc<dyn SubjectService> {
    let service = PgSubjectService::new(&config.database);
    let service = LoggingService::new(service);
    let service = InstrumentedService::new(
        service,
        crate::metrics::REQUEST_COUNT.clone(),
        crate::metrics::REQUEST_LATENCY.clone(),
    );
    Arc::new(service)
}

/// Base implementation backed by Postgres. Each operation opens its own
/// connection and lets it drop on return; there is no pool. Acceptable for
/// low-traffic deployments and kept deliberately (a pool is the obvious
/// upgrade path if connection setup cost ever matters).
pub struct PgSubjectService {
    database: &'static DatabaseConfig,
}

impl PgSubjectService {
    pub fn new(database: &'static DatabaseConfig) -> Self {
        Self { database }
    }

    async fn connect(&self, method: &str) -> Result<PgConnection, ServiceError> {
        PgConnection::connect(&self.database.connection_url())
            .await
            .map_err(|e| {
                ServiceError::Internal(format!("{method}: unable to connect to database: {e}"))
            })
    }
}

#[async_trait]
impl SubjectService for PgSubjectService {
    async fn get_subjects(&self) -> Result<Vec<Subject>, ServiceError> {
        let mut conn = self.connect("get_subjects").await?;

        // The store serializes each row as JSON; a row that fails to decode
        // aborts the whole call rather than returning partial results.
        let rows: Vec<serde_json::Value> = sqlx::query_scalar(
            "select to_json(t.*) \
             from (select id, comment, date_create, description, last_time_update, \
                   name, type, parent_id from subject) t",
        )
        .fetch_all(&mut conn)
        .await
        .map_err(|e| ServiceError::Internal(format!("get_subjects: query: {e}")))?;

        let mut subjects = Vec::with_capacity(rows.len());
        for row in rows {
            let subject = serde_json::from_value(row)
                .map_err(|e| ServiceError::Internal(format!("get_subjects: decode row: {e}")))?;
            subjects.push(subject);
        }
        Ok(subjects)
    }

    async fn add_subject(&self, subject: Subject) -> Result<(), ServiceError> {
        let mut conn = self.connect("add_subject").await?;

        let mut tx = conn
            .begin()
            .await
            .map_err(|e| ServiceError::Internal(format!("add_subject: begin: {e}")))?;

        let now = Utc::now().naive_utc();
        let result = sqlx::query(
            "insert into subject \
             (comment, date_create, description, last_time_update, name, type, parent_id) \
             values ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&subject.comment)
        .bind(now)
        .bind(&subject.description)
        .bind(now)
        .bind(&subject.name)
        .bind(&subject.subject_type)
        .bind(subject.parent_id)
        .execute(&mut *tx)
        .await;

        match result {
            Ok(_) => tx
                .commit()
                .await
                .map_err(|e| ServiceError::Internal(format!("add_subject: commit: {e}"))),
            Err(e) => {
                // Dropping the transaction would roll back too; being
                // explicit keeps the failure path obvious.
                let _ = tx.rollback().await;
                Err(ServiceError::Internal(format!(
                    "add_subject: insert into subject: {e}"
                )))
            }
        }
    }

    async fn update_subject(&self, subject: Subject) -> Result<(), ServiceError> {
        let mut conn = self.connect("update_subject").await?;

        // Unconditional full-record update; a missing id is not an error.
        sqlx::query(
            "update subject set comment = $2, description = $3, last_time_update = $4, \
             name = $5, type = $6, parent_id = $7 where id = $1",
        )
        .bind(subject.id)
        .bind(&subject.comment)
        .bind(&subject.description)
        .bind(Utc::now().naive_utc())
        .bind(&subject.name)
        .bind(&subject.subject_type)
        .bind(subject.parent_id)
        .execute(&mut conn)
        .await
        .map_err(|e| ServiceError::Internal(format!("update_subject: exec: {e}")))?;

        Ok(())
    }

    async fn delete_subject(&self, id: i32) -> Result<(), ServiceError> {
        let mut conn = self.connect("delete_subject").await?;

        sqlx::query("delete from subject where id = $1")
            .bind(id)
            .execute(&mut conn)
            .await
            .map_err(|e| ServiceError::Internal(format!("delete_subject: exec: {e}")))?;

        Ok(())
    }
}
