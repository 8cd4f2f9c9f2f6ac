// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::employee::Employee;

// Papéis fechados em enum: nada de string solta decidindo permissão.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role")]
pub enum UserRole {
    Administrator,
    #[sqlx(rename = "HR")]
    #[serde(rename = "HR")]
    Hr,
    Manager,
    Employee,
    Guest,
}

impl UserRole {
    // Quem pode administrar contas de usuário.
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Administrator | UserRole::Hr)
    }

    // Quem enxerga registros de onboarding / avaliações de terceiros.
    pub fn is_people_manager(&self) -> bool {
        matches!(self, UserRole::Administrator | UserRole::Hr | UserRole::Manager)
    }
}

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    #[schema(ignore)]
    pub password_hash: String,

    pub name: String,
    pub role: UserRole,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Dados para criação de usuário (auto-registro ou via admin).
// Os campos extras só são usados quando role == Employee.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    pub role: Option<UserRole>,

    // Handoff do registro pós-contratação: liga o candidato contratado
    // à nova conta e abre o checklist de onboarding.
    pub candidate_id: Option<Uuid>,

    // Campos de funcionário (apenas role == Employee)
    pub job_title: Option<String>,
    pub location: Option<String>,
    #[schema(example = "4500.00")]
    pub salary: Option<String>,
    pub reports_to: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: Option<String>,
    pub role: Option<UserRole>,
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
}

// Resposta de autenticação: token + o snapshot de perfil que o
// frontend guardava no localStorage (agora vem explícito do login).
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub role: UserRole,
    pub profile: UserProfile,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub employee_id: Option<Uuid>,
}

// Resposta da criação de usuário. Quando o papel é Employee, o
// registro de funcionário criado na mesma transação vem junto.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub user: User,
    pub employee: Option<Employee>,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // Subject (ID do usuário)
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}
