// src/services/auth.rs

use bcrypt::verify;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{EmployeeRepository, UserRepository},
    models::auth::{AuthResponse, Claims, User, UserProfile},
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    employee_repo: EmployeeRepository,
    jwt_secret: String,
    pool: PgPool,
}

impl AuthService {
    pub fn new(
        user_repo: UserRepository,
        employee_repo: EmployeeRepository,
        jwt_secret: String,
        pool: PgPool,
    ) -> Self {
        Self { user_repo, employee_repo, jwt_secret, pool }
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid = tokio::task::spawn_blocking(move || {
            verify(&password_clone, &password_hash_clone)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.create_token(user.id)?;
        let profile = self.build_profile(&user).await?;

        Ok(AuthResponse { token, role: user.role, profile })
    }

    pub async fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        self.user_repo
            .find_by_id(token_data.claims.sub)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    // O snapshot que o frontend guardava no localStorage: agora sai do
    // login em vez de ser remontado a cada tela.
    pub async fn build_profile(&self, user: &User) -> Result<UserProfile, AppError> {
        let employee = self.employee_repo.find_by_user_id(&self.pool, user.id).await?;
        Ok(UserProfile {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            employee_id: employee.map(|e| e.id),
        })
    }

    fn create_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}
