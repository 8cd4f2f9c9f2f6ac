// src/handlers/employees.rs

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
    models::employee::{Employee, EmployeeRating, SaveRatingsPayload, UpdateEmployeePayload},
};

#[utoipa::path(
    get,
    path = "/api/employee",
    tag = "Employees",
    responses((status = 200, description = "Lista de funcionários", body = [Employee])),
    security(("api_jwt" = []))
)]
pub async fn list_employees(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<Employee>>, AppError> {
    user.require_people_manager()?;
    Ok(Json(app_state.employee_service.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/employee/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "ID do funcionário")),
    responses((status = 200, description = "Funcionário encontrado", body = Employee)),
    security(("api_jwt" = []))
)]
pub async fn get_employee(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Employee>, AppError> {
    // Employee comum só enxerga o próprio registro.
    if !user.0.role.is_people_manager() {
        let own = app_state.employee_service.find_by_user(user.0.id).await?;
        if own.map(|e| e.id) != Some(id) {
            return Err(AppError::Forbidden);
        }
    }
    Ok(Json(app_state.employee_service.get(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/employee/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "ID do funcionário")),
    request_body = UpdateEmployeePayload,
    responses((status = 200, description = "Funcionário atualizado", body = Employee)),
    security(("api_jwt" = []))
)]
pub async fn update_employee(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEmployeePayload>,
) -> Result<Json<Employee>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    Ok(Json(app_state.employee_service.update(&user, id, &payload).await?))
}

// --- Avaliações ---

#[utoipa::path(
    get,
    path = "/api/employee/ratings/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "ID do funcionário")),
    responses((status = 200, description = "Avaliações do funcionário", body = [EmployeeRating])),
    security(("api_jwt" = []))
)]
pub async fn list_ratings(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<EmployeeRating>>, AppError> {
    // O próprio funcionário pode ler as avaliações dele.
    if !user.0.role.is_people_manager() {
        let own = app_state.employee_service.find_by_user(user.0.id).await?;
        if own.map(|e| e.id) != Some(id) {
            return Err(AppError::Forbidden);
        }
    }
    Ok(Json(app_state.employee_service.list_ratings(id).await?))
}

// POST /api/employee/ratings cria avaliações para o funcionário do
// payload (employeeId obrigatório aqui).
#[utoipa::path(
    post,
    path = "/api/employee/ratings",
    tag = "Employees",
    request_body = SaveRatingsPayload,
    responses((status = 201, description = "Avaliações criadas", body = [EmployeeRating])),
    security(("api_jwt" = []))
)]
pub async fn create_ratings(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<SaveRatingsPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let employee_id = payload.employee_id.ok_or(AppError::EmployeeNotFound)?;
    let ratings = app_state
        .employee_service
        .create_ratings(&user, employee_id, &payload)
        .await?;
    Ok((StatusCode::CREATED, Json(ratings)))
}

// PUT /api/employee/ratings/{id} substitui o conjunto inteiro de
// avaliações do funcionário, como a tela de avaliação salva.
#[utoipa::path(
    put,
    path = "/api/employee/ratings/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "ID do funcionário")),
    request_body = SaveRatingsPayload,
    responses((status = 200, description = "Avaliações substituídas", body = [EmployeeRating])),
    security(("api_jwt" = []))
)]
pub async fn replace_ratings(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SaveRatingsPayload>,
) -> Result<Json<Vec<EmployeeRating>>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let ratings = app_state
        .employee_service
        .replace_ratings(&user, id, &payload)
        .await?;
    Ok(Json(ratings))
}
