// src/models/employee.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub location: String,
    #[schema(example = "4500.00")]
    pub salary: Decimal,
    pub reports_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeePayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: Option<String>,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub location: Option<String>,
    // String mascarada do input de salário; normalizada no serviço.
    #[schema(example = "$4,500.00")]
    pub salary: Option<String>,
    pub reports_to: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRating {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub category: String,
    pub score: i32,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingPayload {
    #[validate(length(min = 1, message = "A categoria é obrigatória."))]
    pub category: String,
    #[validate(range(min = 1, max = 5, message = "A nota vai de 1 a 5."))]
    pub score: i32,
    pub comments: Option<String>,
}

// POST /employee/ratings cria; PUT /employee/ratings/{id} substitui o
// conjunto inteiro, como a tela de avaliação fazia.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveRatingsPayload {
    pub employee_id: Option<Uuid>,
    #[validate(nested)]
    pub ratings: Vec<RatingPayload>,
}
