// src/models/candidate.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Ciclo de vida do candidato: None -> Hired (contratado pela pipeline)
// -> Employee (registrou conta e virou funcionário).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "candidate_status")]
pub enum CandidateStatus {
    None,
    Hired,
    Employee,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,

    // Preenchido quando o candidato já tem conta no sistema
    // (funcionário aplicando internamente, ou pós-registro).
    pub user_id: Option<Uuid>,

    pub name: String,
    pub email: Option<String>,
    // Candidatos externos chegam sem conta, só com e-mail de contato.
    pub external_email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,

    pub status: CandidateStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Candidate {
    /// E-mail de contato efetivo: o interno ganha do externo.
    pub fn contact_email(&self) -> Option<&str> {
        self.email.as_deref().or(self.external_email.as_deref())
    }

    /// Só um candidato já contratado pode ser vinculado a uma conta
    /// de usuário no registro.
    pub fn is_linkable(&self) -> bool {
        self.status == CandidateStatus::Hired
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,
    #[validate(email(message = "O e-mail externo fornecido é inválido."))]
    pub external_email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

// POST /candidates/bulk-hire
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkHireCandidatesPayload {
    pub candidate_ids: Vec<Uuid>,
}

// Filtros do GET /candidates (?notHired=true)
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFilter {
    pub not_hired: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(status: CandidateStatus) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            user_id: None,
            name: "iris".into(),
            email: None,
            external_email: Some("iris@example.com".into()),
            phone: None,
            location: None,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn only_hired_candidates_can_link_a_user_account() {
        assert!(candidate(CandidateStatus::Hired).is_linkable());
        assert!(!candidate(CandidateStatus::None).is_linkable());
        assert!(!candidate(CandidateStatus::Employee).is_linkable());
    }
}
