// src/services/recruitment_service.rs
//
// CRUD de candidatos e vagas. O salário chega como a string do input
// mascarado e passa pelo normalizador antes de virar Decimal.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::currency,
    common::error::AppError,
    db::{CandidateRepository, JobRepository},
    models::candidate::{Candidate, CandidatePayload, CandidateStatus},
    models::job::{Job, JobPayload},
};

#[derive(Clone)]
pub struct RecruitmentService {
    candidate_repo: CandidateRepository,
    job_repo: JobRepository,
    pool: PgPool,
}

impl RecruitmentService {
    pub fn new(candidate_repo: CandidateRepository, job_repo: JobRepository, pool: PgPool) -> Self {
        Self { candidate_repo, job_repo, pool }
    }

    // --- Candidatos ---

    pub async fn list_candidates(&self, not_hired: bool) -> Result<Vec<Candidate>, AppError> {
        self.candidate_repo.list(not_hired).await
    }

    pub async fn get_candidate(&self, id: Uuid) -> Result<Candidate, AppError> {
        self.candidate_repo
            .find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::CandidateNotFound)
    }

    pub async fn create_candidate(&self, payload: &CandidatePayload) -> Result<Candidate, AppError> {
        self.candidate_repo
            .create(&self.pool, payload, None, CandidateStatus::None)
            .await
    }

    pub async fn update_candidate(
        &self,
        id: Uuid,
        payload: &CandidatePayload,
    ) -> Result<Candidate, AppError> {
        self.candidate_repo.update(&self.pool, id, payload).await
    }

    pub async fn bulk_hire_candidates(&self, ids: &[Uuid]) -> Result<u64, AppError> {
        self.candidate_repo.mark_hired(&self.pool, ids).await
    }

    // --- Vagas ---

    pub async fn list_jobs(&self) -> Result<Vec<Job>, AppError> {
        self.job_repo.list().await
    }

    pub async fn get_job(&self, id: Uuid) -> Result<Job, AppError> {
        self.job_repo
            .find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::JobNotFound)
    }

    pub async fn create_job(&self, payload: &JobPayload) -> Result<Job, AppError> {
        let salary = Self::salary_of(payload)?;
        self.job_repo
            .create(
                &self.pool,
                &payload.title,
                payload.location.as_deref().unwrap_or_default(),
                salary.unwrap_or(Decimal::ZERO),
                payload.open_positions.unwrap_or(0),
                payload.description.as_deref().unwrap_or_default(),
                payload.hiring_manager_id,
            )
            .await
    }

    pub async fn update_job(&self, id: Uuid, payload: &JobPayload) -> Result<Job, AppError> {
        let salary = Self::salary_of(payload)?;
        self.job_repo
            .update(
                &self.pool,
                id,
                Some(&payload.title),
                payload.location.as_deref(),
                salary,
                payload.open_positions,
                payload.description.as_deref(),
                payload.hiring_manager_id,
            )
            .await
    }

    fn salary_of(payload: &JobPayload) -> Result<Option<Decimal>, AppError> {
        match payload.salary.as_deref() {
            None => Ok(None),
            Some(raw) => {
                let sanitized = currency::sanitize_salary(raw);
                currency::parse_salary(&sanitized)
                    .map(Some)
                    .ok_or_else(|| anyhow::anyhow!("Salário não numérico: {raw}").into())
            }
        }
    }
}
