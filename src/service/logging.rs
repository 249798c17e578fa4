use async_trait::async_trait;
use std::time::Instant;

use crate::error::ServiceError;
use crate::subject::Subject;

use super::SubjectService;

/// Logs method name, elapsed milliseconds, and the error (empty when none)
/// for every call. Results pass through untouched.
pub struct LoggingService<S> {
    inner: S,
}

impl<S> LoggingService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

/// Error field value for a log record: the error's message, or empty when
/// the call succeeded.
pub(crate) fn error_field<T>(result: &Result<T, ServiceError>) -> String {
    result
        .as_ref()
        .err()
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn log_call<T>(method: &str, begin: Instant, result: &Result<T, ServiceError>) {
    let error = error_field(result);
    tracing::info!(
        method,
        took_ms = begin.elapsed().as_millis() as u64,
        error = %error,
        "service call"
    );
}

#[async_trait]
impl<S: SubjectService> SubjectService for LoggingService<S> {
    async fn get_subjects(&self) -> Result<Vec<Subject>, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.get_subjects().await;
        log_call("get_subjects", begin, &result);
        result
    }

    async fn add_subject(&self, subject: Subject) -> Result<(), ServiceError> {
        let begin = Instant::now();
        let result = self.inner.add_subject(subject).await;
        log_call("add_subject", begin, &result);
        result
    }

    async fn update_subject(&self, subject: Subject) -> Result<(), ServiceError> {
        let begin = Instant::now();
        let result = self.inner.update_subject(subject).await;
        log_call("update_subject", begin, &result);
        result
    }

    async fn delete_subject(&self, id: i32) -> Result<(), ServiceError> {
        let begin = Instant::now();
        let result = self.inner.delete_subject(id).await;
        log_call("delete_subject", begin, &result);
        result
    }
}
