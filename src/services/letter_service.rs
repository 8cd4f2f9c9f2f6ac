// src/services/letter_service.rs
//
// CRUD de cartas + geração templada. A pipeline chama `draft_one` por
// dentro das próprias transações; o endpoint /letters/draft-letters usa
// o mesmo caminho em lote.

use chrono::Utc;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::LetterRepository,
    models::letter::{
        DraftLettersPayload, Letter, LetterPayload, LetterType, UpdateLetterPayload,
    },
};

#[derive(Clone)]
pub struct LetterService {
    repo: LetterRepository,
    // Remetente padrão dos rascunhos automáticos (HR_FROM_EMAIL).
    from_email: String,
    pool: PgPool,
}

impl LetterService {
    pub fn new(repo: LetterRepository, from_email: String, pool: PgPool) -> Self {
        Self { repo, from_email, pool }
    }

    pub async fn list(&self) -> Result<Vec<Letter>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Letter, AppError> {
        self.repo.find_by_id(id).await?.ok_or(AppError::LetterNotFound)
    }

    pub async fn create(&self, payload: &LetterPayload) -> Result<Letter, AppError> {
        self.repo
            .create(
                &self.pool,
                &payload.from_email,
                &payload.to_email,
                &payload.subject,
                &payload.message,
                payload.letter_type.unwrap_or(LetterType::Custom),
            )
            .await
    }

    pub async fn update(&self, id: Uuid, payload: &UpdateLetterPayload) -> Result<Letter, AppError> {
        // Marcar como enviada carimba a data de envio junto.
        let date_sent = match payload.status {
            Some(crate::models::letter::LetterStatus::Sent) => Some(Utc::now()),
            _ => None,
        };

        self.repo
            .update(
                &self.pool,
                id,
                payload.from_email.as_deref(),
                payload.to_email.as_deref(),
                payload.subject.as_deref(),
                payload.message.as_deref(),
                payload.status,
                date_sent,
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }

    /// Rascunha uma carta templada para um destinatário, dentro do
    /// executor que o chamador passar (pool ou transação da pipeline).
    pub async fn draft_one<'e, E>(
        &self,
        executor: E,
        letter_type: LetterType,
        recipient_name: &str,
        recipient_email: &str,
        job_title: &str,
    ) -> Result<Letter, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let (subject, message) = letter_type.draft_content(recipient_name, job_title);
        self.repo
            .create(executor, &self.from_email, recipient_email, &subject, &message, letter_type)
            .await
    }

    /// POST /letters/draft-letters: um rascunho por destinatário.
    pub async fn draft_letters(&self, payload: &DraftLettersPayload) -> Result<Vec<Letter>, AppError> {
        let mut tx = self.pool.begin().await?;

        let mut letters = Vec::with_capacity(payload.recipients.len());
        for recipient in &payload.recipients {
            let letter = self
                .draft_one(
                    &mut *tx,
                    payload.letter_type,
                    &recipient.name,
                    &recipient.email,
                    &payload.job_title,
                )
                .await?;
            letters.push(letter);
        }

        tx.commit().await?;
        Ok(letters)
    }
}
