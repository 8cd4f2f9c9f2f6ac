// src/handlers/letters.rs

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
    models::letter::{DraftLettersPayload, Letter, LetterPayload, UpdateLetterPayload},
};

#[utoipa::path(
    get,
    path = "/api/letters",
    tag = "Letters",
    responses((status = 200, description = "Lista de cartas", body = [Letter])),
    security(("api_jwt" = []))
)]
pub async fn list_letters(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<Letter>>, AppError> {
    user.require_admin()?;
    Ok(Json(app_state.letter_service.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/letters/{id}",
    tag = "Letters",
    params(("id" = Uuid, Path, description = "ID da carta")),
    responses((status = 200, description = "Carta encontrada", body = Letter)),
    security(("api_jwt" = []))
)]
pub async fn get_letter(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Letter>, AppError> {
    user.require_admin()?;
    Ok(Json(app_state.letter_service.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/letters",
    tag = "Letters",
    request_body = LetterPayload,
    responses((status = 201, description = "Carta criada", body = Letter)),
    security(("api_jwt" = []))
)]
pub async fn create_letter(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<LetterPayload>,
) -> Result<impl IntoResponse, AppError> {
    user.require_admin()?;
    payload.validate().map_err(AppError::ValidationError)?;

    let letter = app_state.letter_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(letter)))
}

#[utoipa::path(
    put,
    path = "/api/letters/{id}",
    tag = "Letters",
    params(("id" = Uuid, Path, description = "ID da carta")),
    request_body = UpdateLetterPayload,
    responses((status = 200, description = "Carta atualizada", body = Letter)),
    security(("api_jwt" = []))
)]
pub async fn update_letter(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLetterPayload>,
) -> Result<Json<Letter>, AppError> {
    user.require_admin()?;
    Ok(Json(app_state.letter_service.update(id, &payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/letters/{id}",
    tag = "Letters",
    params(("id" = Uuid, Path, description = "ID da carta")),
    responses((status = 204, description = "Carta removida")),
    security(("api_jwt" = []))
)]
pub async fn delete_letter(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    user.require_admin()?;
    app_state.letter_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /api/letters/draft-letters: rascunhos templados em lote.
#[utoipa::path(
    post,
    path = "/api/letters/draft-letters",
    tag = "Letters",
    request_body = DraftLettersPayload,
    responses((status = 201, description = "Rascunhos criados", body = [Letter])),
    security(("api_jwt" = []))
)]
pub async fn draft_letters(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<DraftLettersPayload>,
) -> Result<impl IntoResponse, AppError> {
    user.require_admin()?;
    let letters = app_state.letter_service.draft_letters(&payload).await?;
    Ok((StatusCode::CREATED, Json(letters)))
}
