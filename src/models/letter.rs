// src/models/letter.rs
//
// Cartas de RH. Os rascunhos automáticos da pipeline (oferta, rejeição,
// novo contratado) saem dos templates daqui; o CRUD manual usa o resto.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "letter_type")]
pub enum LetterType {
    #[sqlx(rename = "Job Offer")]
    #[serde(rename = "Job Offer")]
    JobOffer,
    #[sqlx(rename = "New Hire")]
    #[serde(rename = "New Hire")]
    NewHire,
    Rejection,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "letter_status")]
pub enum LetterStatus {
    Draft,
    Sent,
}

impl LetterType {
    /// Template do assunto/corpo por tipo de carta. `job_title` entra
    /// onde o tipo menciona a vaga.
    pub fn draft_content(&self, recipient_name: &str, job_title: &str) -> (String, String) {
        match self {
            LetterType::JobOffer => (
                format!("Job Offer - {job_title}"),
                format!(
                    "Dear {recipient_name},\n\n\
                     We are pleased to offer you the position of {job_title}. \
                     Please review the attached terms and confirm your acceptance.\n\n\
                     Best regards,\nHuman Resources"
                ),
            ),
            LetterType::NewHire => (
                format!("Welcome Aboard - {job_title}"),
                format!(
                    "Dear {recipient_name},\n\n\
                     Welcome to the team! Your hiring for the position of {job_title} \
                     is confirmed. You will receive your onboarding checklist shortly.\n\n\
                     Best regards,\nHuman Resources"
                ),
            ),
            LetterType::Rejection => (
                format!("Your Application - {job_title}"),
                format!(
                    "Dear {recipient_name},\n\n\
                     Thank you for your interest in the position of {job_title}. \
                     After careful consideration we decided not to move forward with \
                     your application at this time.\n\n\
                     Best regards,\nHuman Resources"
                ),
            ),
            LetterType::Custom => (String::new(), String::new()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    pub id: Uuid,
    pub from_email: String,
    pub to_email: String,
    pub subject: String,
    pub message: String,
    pub letter_type: LetterType,
    pub status: LetterStatus,
    pub date_sent: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LetterPayload {
    #[validate(email(message = "O e-mail do remetente é inválido."))]
    pub from_email: String,
    #[validate(email(message = "O e-mail do destinatário é inválido."))]
    pub to_email: String,
    #[validate(length(min = 1, message = "O assunto é obrigatório."))]
    pub subject: String,
    pub message: String,
    pub letter_type: Option<LetterType>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLetterPayload {
    pub from_email: Option<String>,
    pub to_email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub status: Option<LetterStatus>,
}

// POST /letters/draft-letters: geração templada em lote.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftLettersPayload {
    pub letter_type: LetterType,
    #[schema(example = "Backend Engineer")]
    pub job_title: String,
    pub recipients: Vec<DraftRecipient>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecipient {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_template_mentions_position() {
        let (subject, body) = LetterType::JobOffer.draft_content("Ana Souza", "Data Analyst");
        assert_eq!(subject, "Job Offer - Data Analyst");
        assert!(body.contains("Dear Ana Souza"));
        assert!(body.contains("position of Data Analyst"));
    }

    #[test]
    fn rejection_template_is_polite_but_final() {
        let (_, body) = LetterType::Rejection.draft_content("Bruno", "QA Engineer");
        assert!(body.contains("not to move forward"));
    }

    #[test]
    fn custom_letters_have_no_template() {
        let (subject, body) = LetterType::Custom.draft_content("x", "y");
        assert!(subject.is_empty());
        assert!(body.is_empty());
    }
}
