// src/handlers/candidates.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::candidate::{
        BulkHireCandidatesPayload, Candidate, CandidateFilter, CandidatePayload,
    },
};

// GET /api/candidates?notHired=true
#[utoipa::path(
    get,
    path = "/api/candidates",
    tag = "Candidates",
    params(("notHired" = Option<bool>, Query, description = "Só candidatos ainda não contratados")),
    responses((status = 200, description = "Lista de candidatos", body = [Candidate])),
    security(("api_jwt" = []))
)]
pub async fn list_candidates(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(filter): Query<CandidateFilter>,
) -> Result<Json<Vec<Candidate>>, AppError> {
    user.require_admin()?;
    let candidates = app_state
        .recruitment_service
        .list_candidates(filter.not_hired.unwrap_or(false))
        .await?;
    Ok(Json(candidates))
}

#[utoipa::path(
    get,
    path = "/api/candidates/{id}",
    tag = "Candidates",
    params(("id" = Uuid, Path, description = "ID do candidato")),
    responses((status = 200, description = "Candidato encontrado", body = Candidate)),
    security(("api_jwt" = []))
)]
pub async fn get_candidate(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Candidate>, AppError> {
    user.require_admin()?;
    Ok(Json(app_state.recruitment_service.get_candidate(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/candidates",
    tag = "Candidates",
    request_body = CandidatePayload,
    responses((status = 201, description = "Candidato criado", body = Candidate)),
    security(("api_jwt" = []))
)]
pub async fn create_candidate(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CandidatePayload>,
) -> Result<impl IntoResponse, AppError> {
    user.require_admin()?;
    payload.validate().map_err(AppError::ValidationError)?;

    let candidate = app_state.recruitment_service.create_candidate(&payload).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

#[utoipa::path(
    put,
    path = "/api/candidates/{id}",
    tag = "Candidates",
    params(("id" = Uuid, Path, description = "ID do candidato")),
    request_body = CandidatePayload,
    responses((status = 200, description = "Candidato atualizado", body = Candidate)),
    security(("api_jwt" = []))
)]
pub async fn update_candidate(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CandidatePayload>,
) -> Result<Json<Candidate>, AppError> {
    user.require_admin()?;
    payload.validate().map_err(AppError::ValidationError)?;

    let candidate = app_state
        .recruitment_service
        .update_candidate(id, &payload)
        .await?;
    Ok(Json(candidate))
}

// POST /api/candidates/bulk-hire marca candidatos como "Hired" fora
// da pipeline (importação de contratados já decididos).
#[utoipa::path(
    post,
    path = "/api/candidates/bulk-hire",
    tag = "Candidates",
    request_body = BulkHireCandidatesPayload,
    responses((status = 200, description = "Quantidade de candidatos marcados")),
    security(("api_jwt" = []))
)]
pub async fn bulk_hire_candidates(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<BulkHireCandidatesPayload>,
) -> Result<Json<serde_json::Value>, AppError> {
    user.require_admin()?;
    let hired = app_state
        .recruitment_service
        .bulk_hire_candidates(&payload.candidate_ids)
        .await?;
    Ok(Json(serde_json::json!({ "hired": hired })))
}
