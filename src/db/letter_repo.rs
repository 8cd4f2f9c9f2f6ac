// src/db/letter_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::letter::{Letter, LetterStatus, LetterType},
};

#[derive(Clone)]
pub struct LetterRepository {
    pool: PgPool,
}

const LETTER_COLUMNS: &str = "id, from_email, to_email, subject, message, letter_type, \
     status, date_sent, created_at, updated_at";

impl LetterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Letter>, AppError> {
        let letters = sqlx::query_as::<_, Letter>(&format!(
            "SELECT {LETTER_COLUMNS} FROM letters ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(letters)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Letter>, AppError> {
        let letter = sqlx::query_as::<_, Letter>(&format!(
            "SELECT {LETTER_COLUMNS} FROM letters WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(letter)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        from_email: &str,
        to_email: &str,
        subject: &str,
        message: &str,
        letter_type: LetterType,
    ) -> Result<Letter, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let letter = sqlx::query_as::<_, Letter>(&format!(
            "INSERT INTO letters (from_email, to_email, subject, message, letter_type) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {LETTER_COLUMNS}"
        ))
        .bind(from_email)
        .bind(to_email)
        .bind(subject)
        .bind(message)
        .bind(letter_type)
        .fetch_one(executor)
        .await?;
        Ok(letter)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        from_email: Option<&str>,
        to_email: Option<&str>,
        subject: Option<&str>,
        message: Option<&str>,
        status: Option<LetterStatus>,
        date_sent: Option<DateTime<Utc>>,
    ) -> Result<Letter, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let letter = sqlx::query_as::<_, Letter>(&format!(
            "UPDATE letters SET \
                from_email = COALESCE($2, from_email), \
                to_email = COALESCE($3, to_email), \
                subject = COALESCE($4, subject), \
                message = COALESCE($5, message), \
                status = COALESCE($6, status), \
                date_sent = COALESCE($7, date_sent), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {LETTER_COLUMNS}"
        ))
        .bind(id)
        .bind(from_email)
        .bind(to_email)
        .bind(subject)
        .bind(message)
        .bind(status)
        .bind(date_sent)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::LetterNotFound)?;
        Ok(letter)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM letters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::LetterNotFound);
        }
        Ok(())
    }
}
