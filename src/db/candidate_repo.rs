// src/db/candidate_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::candidate::{Candidate, CandidatePayload, CandidateStatus},
};

#[derive(Clone)]
pub struct CandidateRepository {
    pool: PgPool,
}

const CANDIDATE_COLUMNS: &str =
    "id, user_id, name, email, external_email, phone, location, status, created_at, updated_at";

impl CandidateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // GET /candidates: com ?notHired=true só volta quem ainda não foi
    // contratado nem virou funcionário.
    pub async fn list(&self, not_hired: bool) -> Result<Vec<Candidate>, AppError> {
        let sql = if not_hired {
            format!(
                "SELECT {CANDIDATE_COLUMNS} FROM candidates \
                 WHERE status = 'None' ORDER BY name"
            )
        } else {
            format!("SELECT {CANDIDATE_COLUMNS} FROM candidates ORDER BY name")
        };

        let candidates = sqlx::query_as::<_, Candidate>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(candidates)
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Candidate>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(candidate)
    }

    pub async fn find_by_user_id<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
    ) -> Result<Option<Candidate>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(executor)
        .await?;
        Ok(candidate)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &CandidatePayload,
        user_id: Option<Uuid>,
        status: CandidateStatus,
    ) -> Result<Candidate, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "INSERT INTO candidates (user_id, name, email, external_email, phone, location, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {CANDIDATE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.external_email)
        .bind(&payload.phone)
        .bind(&payload.location)
        .bind(status)
        .fetch_one(executor)
        .await?;
        Ok(candidate)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        payload: &CandidatePayload,
    ) -> Result<Candidate, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "UPDATE candidates SET \
                name = $2, email = $3, external_email = $4, phone = $5, \
                location = $6, updated_at = now() \
             WHERE id = $1 \
             RETURNING {CANDIDATE_COLUMNS}"
        ))
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.external_email)
        .bind(&payload.phone)
        .bind(&payload.location)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::CandidateNotFound)?;
        Ok(candidate)
    }

    // POST /candidates/bulk-hire e o caminho de contratação da pipeline.
    pub async fn mark_hired<'e, E>(&self, executor: E, ids: &[Uuid]) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            "UPDATE candidates SET status = 'Hired', updated_at = now() \
             WHERE id = ANY($1) AND status = 'None'",
        )
        .bind(ids)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    // Handoff do registro: candidato contratado vira funcionário.
    pub async fn link_user<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Candidate, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "UPDATE candidates SET user_id = $2, status = 'Employee', updated_at = now() \
             WHERE id = $1 \
             RETURNING {CANDIDATE_COLUMNS}"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::CandidateNotFound)?;
        Ok(candidate)
    }
}
