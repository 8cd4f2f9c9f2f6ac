// src/db/job_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::job::Job};

#[derive(Clone)]
pub struct JobRepository {
    pool: PgPool,
}

const JOB_COLUMNS: &str = "id, title, location, salary, open_positions, description, \
     hiring_manager_id, created_at, updated_at";

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Job>, AppError> {
        let jobs = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Job>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let job = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(job)
    }

    // Usado pelo fluxo de contratação: tranca a linha da vaga para a
    // checagem de open_positions não correr contra outra contratação.
    pub async fn find_by_id_for_update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Job>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let job = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(job)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        title: &str,
        location: &str,
        salary: Decimal,
        open_positions: i32,
        description: &str,
        hiring_manager_id: Option<Uuid>,
    ) -> Result<Job, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let job = sqlx::query_as::<_, Job>(&format!(
            "INSERT INTO jobs (title, location, salary, open_positions, description, hiring_manager_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {JOB_COLUMNS}"
        ))
        .bind(title)
        .bind(location)
        .bind(salary)
        .bind(open_positions)
        .bind(description)
        .bind(hiring_manager_id)
        .fetch_one(executor)
        .await?;
        Ok(job)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        title: Option<&str>,
        location: Option<&str>,
        salary: Option<Decimal>,
        open_positions: Option<i32>,
        description: Option<&str>,
        hiring_manager_id: Option<Uuid>,
    ) -> Result<Job, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let job = sqlx::query_as::<_, Job>(&format!(
            "UPDATE jobs SET \
                title = COALESCE($2, title), \
                location = COALESCE($3, location), \
                salary = COALESCE($4, salary), \
                open_positions = COALESCE($5, open_positions), \
                description = COALESCE($6, description), \
                hiring_manager_id = COALESCE($7, hiring_manager_id), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {JOB_COLUMNS}"
        ))
        .bind(id)
        .bind(title)
        .bind(location)
        .bind(salary)
        .bind(open_positions)
        .bind(description)
        .bind(hiring_manager_id)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::JobNotFound)?;
        Ok(job)
    }

    // O CHECK (open_positions >= 0) do banco é a última linha de defesa;
    // o serviço já recusou a contratação antes de chegar aqui.
    pub async fn decrement_open_positions<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        count: i32,
    ) -> Result<Job, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let job = sqlx::query_as::<_, Job>(&format!(
            "UPDATE jobs SET open_positions = open_positions - $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {JOB_COLUMNS}"
        ))
        .bind(id)
        .bind(count)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::JobNotFound)?;
        Ok(job)
    }
}
