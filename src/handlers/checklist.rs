// src/handlers/checklist.rs

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::checklist::{NewHireChecklist, NewHireView, UpdateChecklistPayload},
};

// GET /api/checklist/new-hires: o serviço filtra pelo papel. Employee
// vê o próprio onboarding, Manager vê os subordinados, RH/admin tudo.
#[utoipa::path(
    get,
    path = "/api/checklist/new-hires",
    tag = "Onboarding",
    responses((status = 200, description = "Checklists visíveis", body = [NewHireView])),
    security(("api_jwt" = []))
)]
pub async fn list_new_hires(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<NewHireView>>, AppError> {
    Ok(Json(app_state.onboarding_service.list_for(&user).await?))
}

#[utoipa::path(
    get,
    path = "/api/checklist/{id}",
    tag = "Onboarding",
    params(("id" = Uuid, Path, description = "ID do checklist")),
    responses((status = 200, description = "Checklist encontrado", body = NewHireChecklist)),
    security(("api_jwt" = []))
)]
pub async fn get_checklist(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<NewHireChecklist>, AppError> {
    Ok(Json(app_state.onboarding_service.get(id).await?))
}

// PUT /api/checklist/{id} grava uma tarefa, inicia ou completa o
// onboarding. Completar com tarefa pendente volta 400.
#[utoipa::path(
    put,
    path = "/api/checklist/{id}",
    tag = "Onboarding",
    params(("id" = Uuid, Path, description = "ID do checklist")),
    request_body = UpdateChecklistPayload,
    responses(
        (status = 200, description = "Checklist atualizado", body = NewHireChecklist),
        (status = 400, description = "Tarefas pendentes impedem a conclusão")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_checklist(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateChecklistPayload>,
) -> Result<Json<NewHireChecklist>, AppError> {
    Ok(Json(app_state.onboarding_service.update(id, &payload).await?))
}
