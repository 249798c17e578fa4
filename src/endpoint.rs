//! Request/response translation layer.
//!
//! Each operation gets a request and a response shape decoupled from the
//! transport, so the same operations are reachable from transports other
//! than HTTP without duplicating business logic. The `err` slot carries
//! "call succeeded, operation failed"; transport-level failures never reach
//! these structs.

use serde::Serialize;

use crate::error::ServiceError;
use crate::service::SubjectService;
use crate::subject::Subject;

#[derive(Debug, Default)]
pub struct GetSubjectsRequest;

#[derive(Debug, Default, Serialize)]
pub struct GetSubjectsResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<Subject>,
    #[serde(skip)]
    pub err: Option<ServiceError>,
}

#[derive(Debug)]
pub struct PostSubjectRequest {
    pub subject: Subject,
}

#[derive(Debug, Default, Serialize)]
pub struct PostSubjectResponse {
    #[serde(skip)]
    pub err: Option<ServiceError>,
}

#[derive(Debug)]
pub struct PutSubjectRequest {
    pub subject: Subject,
}

#[derive(Debug, Default, Serialize)]
pub struct PutSubjectResponse {
    #[serde(skip)]
    pub err: Option<ServiceError>,
}

#[derive(Debug)]
pub struct DeleteSubjectRequest {
    pub id: i32,
}

#[derive(Debug, Default, Serialize)]
pub struct DeleteSubjectResponse {
    #[serde(skip)]
    pub err: Option<ServiceError>,
}

pub async fn get_subjects(
    service: &dyn SubjectService,
    _request: GetSubjectsRequest,
) -> GetSubjectsResponse {
    match service.get_subjects().await {
        Ok(subjects) => GetSubjectsResponse {
            subjects,
            err: None,
        },
        Err(err) => GetSubjectsResponse {
            subjects: Vec::new(),
            err: Some(err),
        },
    }
}

pub async fn post_subject(
    service: &dyn SubjectService,
    request: PostSubjectRequest,
) -> PostSubjectResponse {
    PostSubjectResponse {
        err: service.add_subject(request.subject).await.err(),
    }
}

pub async fn put_subject(
    service: &dyn SubjectService,
    request: PutSubjectRequest,
) -> PutSubjectResponse {
    PutSubjectResponse {
        err: service.update_subject(request.subject).await.err(),
    }
}

pub async fn delete_subject(
    service: &dyn SubjectService,
    request: DeleteSubjectRequest,
) -> DeleteSubjectResponse {
    DeleteSubjectResponse {
        err: service.delete_subject(request.id).await.err(),
    }
}
