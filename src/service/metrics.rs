use async_trait::async_trait;
use prometheus::{HistogramVec, IntCounterVec};
use std::time::Instant;

use crate::error::ServiceError;
use crate::subject::Subject;

use super::SubjectService;

/// Counts calls and observes latency per method, labeled with an
/// error-present flag. Results pass through untouched. The vectors are
/// injected at construction so tests can use unregistered instances.
pub struct InstrumentedService<S> {
    inner: S,
    request_count: IntCounterVec,
    request_latency: HistogramVec,
}

impl<S> InstrumentedService<S> {
    pub fn new(inner: S, request_count: IntCounterVec, request_latency: HistogramVec) -> Self {
        Self {
            inner,
            request_count,
            request_latency,
        }
    }

    fn observe<T>(&self, method: &str, begin: Instant, result: &Result<T, ServiceError>) {
        let error = if result.is_err() { "true" } else { "false" };
        let labels = &[method, error];
        self.request_count.with_label_values(labels).inc();
        self.request_latency
            .with_label_values(labels)
            .observe(begin.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl<S: SubjectService> SubjectService for InstrumentedService<S> {
    async fn get_subjects(&self) -> Result<Vec<Subject>, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.get_subjects().await;
        self.observe("get_subjects", begin, &result);
        result
    }

    async fn add_subject(&self, subject: Subject) -> Result<(), ServiceError> {
        let begin = Instant::now();
        let result = self.inner.add_subject(subject).await;
        self.observe("add_subject", begin, &result);
        result
    }

    async fn update_subject(&self, subject: Subject) -> Result<(), ServiceError> {
        let begin = Instant::now();
        let result = self.inner.update_subject(subject).await;
        self.observe("update_subject", begin, &result);
        result
    }

    async fn delete_subject(&self, id: i32) -> Result<(), ServiceError> {
        let begin = Instant::now();
        let result = self.inner.delete_subject(id).await;
        self.observe("delete_subject", begin, &result);
        result
    }
}
