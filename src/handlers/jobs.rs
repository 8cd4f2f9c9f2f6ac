// src/handlers/jobs.rs

use axum::{
    extract::{Path, State},
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
    models::job::{Job, JobPayload},
};

// Vagas são visíveis para qualquer usuário autenticado (a tela de
// auto-candidatura lista todas); criar e editar é coisa de admin/RH.
#[utoipa::path(
    get,
    path = "/api/job",
    tag = "Jobs",
    responses((status = 200, description = "Lista de vagas", body = [Job])),
    security(("api_jwt" = []))
)]
pub async fn list_jobs(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<Job>>, AppError> {
    Ok(Json(app_state.recruitment_service.list_jobs().await?))
}

#[utoipa::path(
    get,
    path = "/api/job/{id}",
    tag = "Jobs",
    params(("id" = Uuid, Path, description = "ID da vaga")),
    responses((status = 200, description = "Vaga encontrada", body = Job)),
    security(("api_jwt" = []))
)]
pub async fn get_job(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Job>, AppError> {
    Ok(Json(app_state.recruitment_service.get_job(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/job",
    tag = "Jobs",
    request_body = JobPayload,
    responses((status = 201, description = "Vaga criada", body = Job)),
    security(("api_jwt" = []))
)]
pub async fn create_job(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<JobPayload>,
) -> Result<impl IntoResponse, AppError> {
    user.require_admin()?;
    payload.validate().map_err(AppError::ValidationError)?;

    let job = app_state.recruitment_service.create_job(&payload).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

#[utoipa::path(
    put,
    path = "/api/job/{id}",
    tag = "Jobs",
    params(("id" = Uuid, Path, description = "ID da vaga")),
    request_body = JobPayload,
    responses((status = 200, description = "Vaga atualizada", body = Job)),
    security(("api_jwt" = []))
)]
pub async fn update_job(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<JobPayload>,
) -> Result<Json<Job>, AppError> {
    user.require_admin()?;
    payload.validate().map_err(AppError::ValidationError)?;

    Ok(Json(app_state.recruitment_service.update_job(id, &payload).await?))
}
