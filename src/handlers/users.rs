// src/handlers/users.rs

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
    middleware::auth::{AuthenticatedUser, OptionalUser},
    models::auth::{CreateUserPayload, CreateUserResponse, UpdateUserPayload, User},
};

// POST /api/users é pública; com token de admin permite criar contas
// com papel (inclusive o registro pós-contratação de candidatos).
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Usuário criado", body = CreateUserResponse),
        (status = 409, description = "E-mail já cadastrado")
    )
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    OptionalUser(acting): OptionalUser,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let response = app_state
        .user_service
        .create_user(&payload, acting.map(|u| u.role))
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

// Handler da rota protegida /me
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "Users",
    responses((status = 200, description = "Usuário autenticado", body = User)),
    security(("api_jwt" = []))
)]
pub async fn get_me(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}

// PUT /api/users/me: edição da própria conta (sem troca de papel para
// não-admins; o serviço faz essa checagem).
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = "Users",
    request_body = UpdateUserPayload,
    responses((status = 200, description = "Conta atualizada", body = User)),
    security(("api_jwt" = []))
)]
pub async fn update_me(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<Json<User>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let updated = app_state
        .user_service
        .update_user(user.id, &payload, user.role)
        .await?;
    Ok(Json(updated))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses((status = 200, description = "Usuário encontrado", body = User)),
    security(("api_jwt" = []))
)]
pub async fn get_user(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    // Fora o próprio registro, só admin/RH consulta contas.
    if user.0.id != id {
        user.require_admin()?;
    }
    Ok(Json(app_state.user_service.get_user(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    request_body = UpdateUserPayload,
    responses((status = 200, description = "Usuário atualizado", body = User)),
    security(("api_jwt" = []))
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<Json<User>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    if user.0.id != id {
        user.require_admin()?;
    }

    let updated = app_state
        .user_service
        .update_user(id, &payload, user.role())
        .await?;
    Ok(Json(updated))
}
