// src/db/checklist_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::checklist::{NewHireChecklist, NewHireView, UpdateChecklistPayload},
};

#[derive(Clone)]
pub struct ChecklistRepository {
    pool: PgPool,
}

const CHECKLIST_COLUMNS: &str = "id, employee_id, job_id, hire_date, start_date, status, \
     resume, identification, tax_information, training_date, created_at, updated_at";

const VIEW_SELECT: &str = "SELECT ch.id, ch.employee_id, ch.job_id, \
        e.name, e.email, e.job_title, e.reports_to, \
        ch.hire_date, ch.start_date, ch.status, \
        ch.resume, ch.identification, ch.tax_information, ch.training_date \
     FROM new_hire_checklists ch \
     JOIN employees e ON e.id = ch.employee_id";

impl ChecklistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// GET /checklist/new-hires. Os filtros opcionais implementam a
    /// visibilidade por papel: Employee vê o próprio registro, Manager
    /// vê os subordinados diretos, RH/Admin veem tudo.
    pub async fn list_views(
        &self,
        employee_id: Option<Uuid>,
        reports_to: Option<Uuid>,
    ) -> Result<Vec<NewHireView>, AppError> {
        let views = sqlx::query_as::<_, NewHireView>(&format!(
            "{VIEW_SELECT} \
             WHERE ($1::uuid IS NULL OR ch.employee_id = $1) \
               AND ($2::uuid IS NULL OR e.reports_to = $2) \
             ORDER BY ch.hire_date DESC"
        ))
        .bind(employee_id)
        .bind(reports_to)
        .fetch_all(&self.pool)
        .await?;
        Ok(views)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<NewHireChecklist>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let checklist = sqlx::query_as::<_, NewHireChecklist>(&format!(
            "SELECT {CHECKLIST_COLUMNS} FROM new_hire_checklists WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(checklist)
    }

    // Aberto quando um candidato contratado é registrado como funcionário.
    pub async fn create<'e, E>(
        &self,
        executor: E,
        employee_id: Uuid,
        job_id: Uuid,
    ) -> Result<NewHireChecklist, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let checklist = sqlx::query_as::<_, NewHireChecklist>(&format!(
            "INSERT INTO new_hire_checklists (employee_id, job_id) \
             VALUES ($1, $2) \
             RETURNING {CHECKLIST_COLUMNS}"
        ))
        .bind(employee_id)
        .bind(job_id)
        .fetch_one(executor)
        .await?;
        Ok(checklist)
    }

    /// Grava apenas os campos presentes no payload: cada tarefa salva só
    /// a própria coluna mapeada.
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        payload: &UpdateChecklistPayload,
    ) -> Result<NewHireChecklist, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let checklist = sqlx::query_as::<_, NewHireChecklist>(&format!(
            "UPDATE new_hire_checklists SET \
                status = COALESCE($2, status), \
                start_date = COALESCE($3, start_date), \
                resume = COALESCE($4, resume), \
                identification = COALESCE($5, identification), \
                tax_information = COALESCE($6, tax_information), \
                training_date = COALESCE($7, training_date), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {CHECKLIST_COLUMNS}"
        ))
        .bind(id)
        .bind(payload.status)
        .bind(payload.start_date)
        .bind(&payload.resume)
        .bind(&payload.identification)
        .bind(&payload.tax_information)
        .bind(payload.training_date)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::ChecklistNotFound)?;
        Ok(checklist)
    }
}
