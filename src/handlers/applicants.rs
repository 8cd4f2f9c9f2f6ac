// src/handlers/applicants.rs
//
// As rotas da pipeline de candidatura. As operações em lote recebem o
// mesmo formato que a tela de entrevistas envia: um array de entradas
// candidato+vaga.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::applicant::{
        ApplicantFilter, ApplicantView, ApplyPayload, BulkDeletePayload, BulkHireEntry,
        BulkUpsertEntry, HiredJobContext, PipelineBoard, UpdateApplicantPayload,
    },
};

// GET /api/applicants?jobId=...
#[utoipa::path(
    get,
    path = "/api/applicants",
    tag = "Applicants",
    params(("jobId" = Option<Uuid>, Query, description = "Filtra por vaga")),
    responses((status = 200, description = "Candidaturas", body = [ApplicantView])),
    security(("api_jwt" = []))
)]
pub async fn list_applicants(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(filter): Query<ApplicantFilter>,
) -> Result<Json<Vec<ApplicantView>>, AppError> {
    user.require_admin()?;
    Ok(Json(app_state.pipeline_service.list(filter.job_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/applicants/{id}",
    tag = "Applicants",
    params(("id" = Uuid, Path, description = "ID da candidatura")),
    responses((status = 200, description = "Candidatura encontrada", body = ApplicantView)),
    security(("api_jwt" = []))
)]
pub async fn get_applicant(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicantView>, AppError> {
    user.require_admin()?;
    Ok(Json(app_state.pipeline_service.get(id).await?))
}

// GET /api/applicants/board/{job_id}: as três colunas da vaga.
#[utoipa::path(
    get,
    path = "/api/applicants/board/{job_id}",
    tag = "Applicants",
    params(("job_id" = Uuid, Path, description = "ID da vaga")),
    responses((status = 200, description = "Quadro da vaga", body = PipelineBoard)),
    security(("api_jwt" = []))
)]
pub async fn board(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<PipelineBoard>, AppError> {
    user.require_admin()?;
    Ok(Json(app_state.pipeline_service.board(job_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/applicants/bulk-upsert",
    tag = "Applicants",
    request_body = [BulkUpsertEntry],
    responses((status = 200, description = "Candidaturas criadas/atualizadas", body = [ApplicantView])),
    security(("api_jwt" = []))
)]
pub async fn bulk_upsert(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(entries): Json<Vec<BulkUpsertEntry>>,
) -> Result<Json<Vec<ApplicantView>>, AppError> {
    user.require_admin()?;
    Ok(Json(app_state.pipeline_service.bulk_upsert(&entries).await?))
}

#[utoipa::path(
    post,
    path = "/api/applicants/bulk-delete",
    tag = "Applicants",
    request_body = BulkDeletePayload,
    responses((status = 200, description = "Quantidade removida")),
    security(("api_jwt" = []))
)]
pub async fn bulk_delete(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<BulkDeletePayload>,
) -> Result<Json<serde_json::Value>, AppError> {
    user.require_admin()?;
    let removed = app_state.pipeline_service.bulk_delete(&payload.ids).await?;
    Ok(Json(serde_json::json!({ "removed": removed })))
}

#[utoipa::path(
    post,
    path = "/api/applicants/bulk-hire",
    tag = "Applicants",
    request_body = [BulkHireEntry],
    responses(
        (status = 200, description = "Candidaturas contratadas", body = [ApplicantView]),
        (status = 409, description = "Selecionados excedem as vagas abertas")
    ),
    security(("api_jwt" = []))
)]
pub async fn bulk_hire(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(entries): Json<Vec<BulkHireEntry>>,
) -> Result<Json<Vec<ApplicantView>>, AppError> {
    user.require_admin()?;
    Ok(Json(app_state.pipeline_service.bulk_hire(&entries).await?))
}

#[utoipa::path(
    put,
    path = "/api/applicants/{id}",
    tag = "Applicants",
    params(("id" = Uuid, Path, description = "ID da candidatura")),
    request_body = UpdateApplicantPayload,
    responses((status = 200, description = "Candidatura atualizada", body = ApplicantView)),
    security(("api_jwt" = []))
)]
pub async fn update_applicant(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateApplicantPayload>,
) -> Result<Json<ApplicantView>, AppError> {
    user.require_admin()?;
    Ok(Json(app_state.pipeline_service.update(id, &payload).await?))
}

// POST /api/applicants/apply: auto-candidatura de qualquer usuário
// autenticado; o registro de candidato dele é criado se não existir.
#[utoipa::path(
    post,
    path = "/api/applicants/apply",
    tag = "Applicants",
    request_body = ApplyPayload,
    responses(
        (status = 201, description = "Candidatura registrada", body = ApplicantView),
        (status = 409, description = "Já existe candidatura para esta vaga")
    ),
    security(("api_jwt" = []))
)]
pub async fn apply(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<ApplyPayload>,
) -> Result<impl IntoResponse, AppError> {
    let view = app_state.pipeline_service.apply(&user, &payload).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

// GET /api/applicants/find-hired-job/{candidate_id}: usado no registro
// pós-contratação para herdar cargo, local e salário da vaga.
#[utoipa::path(
    get,
    path = "/api/applicants/find-hired-job/{candidate_id}",
    tag = "Applicants",
    params(("candidate_id" = Uuid, Path, description = "ID do candidato")),
    responses((status = 200, description = "Candidatura contratada e vaga", body = HiredJobContext)),
    security(("api_jwt" = []))
)]
pub async fn find_hired_job(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(candidate_id): Path<Uuid>,
) -> Result<Json<HiredJobContext>, AppError> {
    user.require_admin()?;
    Ok(Json(app_state.pipeline_service.find_hired_job(candidate_id).await?))
}
