use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Json,
};

use crate::auth;
use crate::config::config;
use crate::endpoint::{
    self, DeleteSubjectRequest, DeleteSubjectResponse, GetSubjectsRequest, GetSubjectsResponse,
    PostSubjectRequest, PostSubjectResponse, PutSubjectRequest, PutSubjectResponse,
};
use crate::error::ServiceError;
use crate::subject::Subject;

use super::AppState;

/// GET /subjects - administrator only.
pub async fn get_subjects(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<GetSubjectsResponse>, ServiceError> {
    let claims = auth::token_claims(&headers, &config().security.secret_key)?;
    auth::require_administrator(&claims)?;

    let mut response = endpoint::get_subjects(state.service.as_ref(), GetSubjectsRequest).await;
    if let Some(err) = response.err.take() {
        return Err(err);
    }
    Ok(Json(response))
}

/// POST /subject - intentionally unauthenticated: anyone may create a
/// subject; an administrator acts on records afterwards.
pub async fn post_subject(
    State(state): State<AppState>,
    Json(subject): Json<Subject>,
) -> Result<Json<PostSubjectResponse>, ServiceError> {
    let mut response =
        endpoint::post_subject(state.service.as_ref(), PostSubjectRequest { subject }).await;
    if let Some(err) = response.err.take() {
        return Err(err);
    }
    Ok(Json(response))
}

/// PUT /subject - administrator only; full-record update keyed by body id.
pub async fn put_subject(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(subject): Json<Subject>,
) -> Result<Json<PutSubjectResponse>, ServiceError> {
    let claims = auth::token_claims(&headers, &config().security.secret_key)?;
    auth::require_administrator(&claims)?;

    let mut response =
        endpoint::put_subject(state.service.as_ref(), PutSubjectRequest { subject }).await;
    if let Some(err) = response.err.take() {
        return Err(err);
    }
    Ok(Json(response))
}

/// DELETE /subject/:id - administrator only.
pub async fn delete_subject(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<Json<DeleteSubjectResponse>, ServiceError> {
    let claims = auth::token_claims(&headers, &config().security.secret_key)?;
    auth::require_administrator(&claims)?;

    let mut response =
        endpoint::delete_subject(state.service.as_ref(), DeleteSubjectRequest { id }).await;
    if let Some(err) = response.err.take() {
        return Err(err);
    }
    Ok(Json(response))
}
