use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use std::sync::{Arc, Mutex};

use subject_api::error::ServiceError;
use subject_api::handlers;
use subject_api::service::SubjectService;
use subject_api::subject::Subject;

/// Matches the SECRET_KEY default; tests run with the env unset.
pub const SECRET: &str = "secretkey";

/// In-memory stand-in for the Postgres store. Assigns ids and timestamps on
/// insert the way the real store does, and records which operations ran so
/// tests can assert a route never reached the service.
pub struct MemoryService {
    rows: Mutex<Vec<Subject>>,
    next_id: Mutex<i32>,
    calls: Mutex<Vec<&'static str>>,
}

impl Default for MemoryService {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MemoryService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str) {
        self.calls.lock().unwrap().push(method);
    }
}

#[async_trait]
impl SubjectService for MemoryService {
    async fn get_subjects(&self) -> Result<Vec<Subject>, ServiceError> {
        self.record("get_subjects");
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn add_subject(&self, mut subject: Subject) -> Result<(), ServiceError> {
        self.record("add_subject");
        let mut next_id = self.next_id.lock().unwrap();
        subject.id = *next_id;
        *next_id += 1;
        subject.date_create = "2026-01-15T10:00:00".into();
        subject.last_time_update = "2026-01-15T10:00:00".into();
        self.rows.lock().unwrap().push(subject);
        Ok(())
    }

    async fn update_subject(&self, subject: Subject) -> Result<(), ServiceError> {
        self.record("update_subject");
        let mut rows = self.rows.lock().unwrap();
        // Lenient: a missing id is not an error.
        if let Some(row) = rows.iter_mut().find(|r| r.id == subject.id) {
            let id = row.id;
            let date_create = row.date_create.clone();
            *row = subject;
            row.id = id;
            row.date_create = date_create;
            row.last_time_update = "2026-01-16T10:00:00".into();
        }
        Ok(())
    }

    async fn delete_subject(&self, id: i32) -> Result<(), ServiceError> {
        self.record("delete_subject");
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

/// Service whose every operation fails, for status-mapping tests.
pub struct FailingService;

#[async_trait]
impl SubjectService for FailingService {
    async fn get_subjects(&self) -> Result<Vec<Subject>, ServiceError> {
        Err(ServiceError::Internal(
            "get_subjects: unable to connect to database: refused".into(),
        ))
    }
    async fn add_subject(&self, _subject: Subject) -> Result<(), ServiceError> {
        Err(ServiceError::Internal("add_subject: insert into subject: down".into()))
    }
    async fn update_subject(&self, _subject: Subject) -> Result<(), ServiceError> {
        Err(ServiceError::Internal("update_subject: exec: down".into()))
    }
    async fn delete_subject(&self, _id: i32) -> Result<(), ServiceError> {
        Err(ServiceError::Internal("delete_subject: exec: down".into()))
    }
}

pub fn app(service: Arc<dyn SubjectService>) -> Router {
    handlers::router(service)
}

pub fn token(username: &str, role: &str) -> String {
    encode(
        &Header::default(),
        &json!({ "username": username, "role": role }),
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn admin_token() -> String {
    token("admin", "administrator")
}

pub fn user_token() -> String {
    token("bob", "user")
}

pub fn request(method: &str, uri: &str, auth: Option<&str>, body: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = auth {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
