// src/db/applicant_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::applicant::{ApplicantView, InterviewStatus, JobApplicant},
    models::job::Job,
};

#[derive(Clone)]
pub struct ApplicantRepository {
    pool: PgPool,
}

const APPLICANT_COLUMNS: &str =
    "id, candidate_id, job_id, interview_status, next_interview, created_at, updated_at";

// A projeção juntada com o candidato (nome/e-mail denormalizados na
// leitura, nunca na escrita).
const VIEW_SELECT: &str = "SELECT a.id, a.candidate_id, a.job_id, c.name, \
        COALESCE(c.email, c.external_email) AS email, \
        a.interview_status, a.next_interview \
     FROM job_applicants a \
     JOIN candidates c ON c.id = a.candidate_id";

impl ApplicantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_views(&self, job_id: Option<Uuid>) -> Result<Vec<ApplicantView>, AppError> {
        let views = match job_id {
            Some(job_id) => {
                sqlx::query_as::<_, ApplicantView>(&format!(
                    "{VIEW_SELECT} WHERE a.job_id = $1 ORDER BY c.name"
                ))
                .bind(job_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ApplicantView>(&format!("{VIEW_SELECT} ORDER BY c.name"))
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(views)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<JobApplicant>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let applicant = sqlx::query_as::<_, JobApplicant>(&format!(
            "SELECT {APPLICANT_COLUMNS} FROM job_applicants WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(applicant)
    }

    pub async fn find_view_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<ApplicantView>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let view = sqlx::query_as::<_, ApplicantView>(&format!("{VIEW_SELECT} WHERE a.id = $1"))
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(view)
    }

    /// Upsert de (candidate_id, job_id). Linhas "Withdrawn" não são
    /// atualizadas: o DO UPDATE condicional devolve None e o chamador
    /// pula a entrada.
    pub async fn upsert<'e, E>(
        &self,
        executor: E,
        candidate_id: Uuid,
        job_id: Uuid,
        status: InterviewStatus,
    ) -> Result<Option<JobApplicant>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let applicant = sqlx::query_as::<_, JobApplicant>(&format!(
            "INSERT INTO job_applicants (candidate_id, job_id, interview_status) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_applicant_candidate_job DO UPDATE \
                SET interview_status = EXCLUDED.interview_status, updated_at = now() \
                WHERE job_applicants.interview_status <> 'Withdrawn' \
             RETURNING {APPLICANT_COLUMNS}"
        ))
        .bind(candidate_id)
        .bind(job_id)
        .bind(status)
        .fetch_optional(executor)
        .await?;
        Ok(applicant)
    }

    /// Variante do upsert que não mexe em linha existente: usada pela
    /// auto-candidatura, onde re-aplicar não pode resetar o status.
    pub async fn insert_if_absent<'e, E>(
        &self,
        executor: E,
        candidate_id: Uuid,
        job_id: Uuid,
    ) -> Result<Option<JobApplicant>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let applicant = sqlx::query_as::<_, JobApplicant>(&format!(
            "INSERT INTO job_applicants (candidate_id, job_id) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_applicant_candidate_job DO NOTHING \
             RETURNING {APPLICANT_COLUMNS}"
        ))
        .bind(candidate_id)
        .bind(job_id)
        .fetch_optional(executor)
        .await?;
        Ok(applicant)
    }

    pub async fn find_by_candidate_and_job<'e, E>(
        &self,
        executor: E,
        candidate_id: Uuid,
        job_id: Uuid,
    ) -> Result<Option<JobApplicant>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let applicant = sqlx::query_as::<_, JobApplicant>(&format!(
            "SELECT {APPLICANT_COLUMNS} FROM job_applicants \
             WHERE candidate_id = $1 AND job_id = $2"
        ))
        .bind(candidate_id)
        .bind(job_id)
        .fetch_optional(executor)
        .await?;
        Ok(applicant)
    }

    /// Mutação de linha única (agendar entrevista / concluir / transição).
    /// "Withdrawn" fica imutável também aqui.
    pub async fn update_row<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        status: Option<InterviewStatus>,
        next_interview: Option<DateTime<Utc>>,
    ) -> Result<JobApplicant, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let applicant = sqlx::query_as::<_, JobApplicant>(&format!(
            "UPDATE job_applicants SET \
                interview_status = COALESCE($2, interview_status), \
                next_interview = COALESCE($3, next_interview), \
                updated_at = now() \
             WHERE id = $1 AND interview_status <> 'Withdrawn' \
             RETURNING {APPLICANT_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .bind(next_interview)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::ApplicantNotFound)?;
        Ok(applicant)
    }

    /// Remoção em lote: devolve candidatos ao "Available". Contratados e
    /// desistentes ficam fora do alvo por construção da query.
    pub async fn delete_bulk<'e, E>(&self, executor: E, ids: &[Uuid]) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            "DELETE FROM job_applicants \
             WHERE id = ANY($1) \
               AND interview_status NOT IN ('Withdrawn', 'Hired')",
        )
        .bind(ids)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    /// A candidatura "Hired" mais recente de um candidato, se houver.
    pub async fn find_hired_row<'e, E>(
        &self,
        executor: E,
        candidate_id: Uuid,
    ) -> Result<Option<JobApplicant>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let applicant = sqlx::query_as::<_, JobApplicant>(&format!(
            "SELECT {APPLICANT_COLUMNS} FROM job_applicants \
             WHERE candidate_id = $1 AND interview_status = 'Hired' \
             ORDER BY updated_at DESC \
             LIMIT 1"
        ))
        .bind(candidate_id)
        .fetch_optional(executor)
        .await?;
        Ok(applicant)
    }

    /// Handoff do registro: em qual vaga este candidato foi contratado?
    pub async fn find_hired_job(
        &self,
        candidate_id: Uuid,
    ) -> Result<Option<(JobApplicant, Job)>, AppError> {
        let Some(applicant) = self.find_hired_row(&self.pool, candidate_id).await? else {
            return Ok(None);
        };

        let job = sqlx::query_as::<_, Job>(
            "SELECT id, title, location, salary, open_positions, description, \
                    hiring_manager_id, created_at, updated_at \
             FROM jobs WHERE id = $1",
        )
        .bind(applicant.job_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Some((applicant, job)))
    }
}
