// src/middleware/auth.rs

use axum::{
    extract::{FromRequestParts, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::auth::{User, UserRole},
};

// O middleware em si: valida o Bearer token e injeta o usuário nos
// "extensions" da requisição.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    let headers = request.headers();
    let auth_header = headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok());

    if let Some(auth_header) = auth_header {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            let user = app_state.auth_service.validate_token(token).await?;

            request.extensions_mut().insert(user);
            return Ok(next.run(request).await);
        }
    }

    Err(AppError::InvalidToken)
}

// Extrator para obter o usuário autenticado diretamente nos handlers
pub struct AuthenticatedUser(pub User);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or(AppError::InvalidToken)
    }
}

// Variante opcional para rotas públicas que mudam de comportamento com
// token (ex.: POST /users, onde admin cria contas Employee e anônimo só
// registra Guest). Token inválido é erro; token ausente não é.
pub struct OptionalUser(pub Option<User>);

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match token {
            Some(token) => {
                let user = state.auth_service.validate_token(token).await?;
                Ok(OptionalUser(Some(user)))
            }
            None => Ok(OptionalUser(None)),
        }
    }
}

impl AuthenticatedUser {
    /// 403 quando o usuário não é RH nem Administrator.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.0.role.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }

    /// 403 para quem não gerencia pessoas (Manager, RH, Administrator).
    pub fn require_people_manager(&self) -> Result<(), AppError> {
        if self.0.role.is_people_manager() {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }
}
