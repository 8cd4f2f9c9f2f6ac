// src/models/job.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    #[schema(example = "Backend Engineer")]
    pub title: String,
    pub location: String,
    #[schema(example = "8500.00")]
    pub salary: Decimal,
    // Decrementado a cada contratação; o banco garante >= 0.
    pub open_positions: i32,
    pub description: String,
    pub hiring_manager_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// O salário chega como string do input mascarado do frontend e passa
// pelo normalizador antes de virar Decimal.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    #[validate(length(min = 1, message = "O título é obrigatório."))]
    pub title: String,
    pub location: Option<String>,
    #[schema(example = "$8,500.00")]
    pub salary: Option<String>,
    #[validate(range(min = 0, message = "Vagas abertas não podem ser negativas."))]
    pub open_positions: Option<i32>,
    pub description: Option<String>,
    pub hiring_manager_id: Option<Uuid>,
}
