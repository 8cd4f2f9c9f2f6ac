// src/services/employee_service.rs
//
// Administração de funcionários: perfil (com salário normalizado antes
// de persistir) e avaliações de desempenho. Avaliações são gravadas
// como conjunto: o PUT apaga as antigas e insere as novas na mesma
// transação.

use anyhow::anyhow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{
        currency::{parse_salary, sanitize_salary},
        error::AppError,
    },
    db::EmployeeRepository,
    models::auth::User,
    models::employee::{Employee, EmployeeRating, SaveRatingsPayload, UpdateEmployeePayload},
};

#[derive(Clone)]
pub struct EmployeeService {
    repo: EmployeeRepository,
    pool: PgPool,
}

impl EmployeeService {
    pub fn new(repo: EmployeeRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Employee, AppError> {
        self.repo
            .find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::EmployeeNotFound)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Employee>, AppError> {
        self.repo.find_by_user_id(&self.pool, user_id).await
    }

    /// Employee só edita o próprio perfil; Manager, RH e Administrator
    /// editam qualquer um.
    pub async fn update(
        &self,
        acting: &User,
        id: Uuid,
        payload: &UpdateEmployeePayload,
    ) -> Result<Employee, AppError> {
        if !acting.role.is_people_manager() {
            let own = self.repo.find_by_user_id(&self.pool, acting.id).await?;
            if own.map(|e| e.id) != Some(id) {
                return Err(AppError::Forbidden);
            }
        }

        let salary = match payload.salary.as_deref() {
            Some(raw) => {
                let cleaned = sanitize_salary(raw);
                Some(parse_salary(&cleaned).ok_or_else(|| {
                    AppError::InternalServerError(anyhow!("salário inválido: {raw:?}"))
                })?)
            }
            None => None,
        };

        self.repo
            .update(
                &self.pool,
                id,
                payload.name.as_deref(),
                payload.email.as_deref(),
                payload.job_title.as_deref(),
                payload.location.as_deref(),
                salary,
                payload.reports_to,
            )
            .await
    }

    // --- Avaliações ---

    pub async fn list_ratings(&self, employee_id: Uuid) -> Result<Vec<EmployeeRating>, AppError> {
        self.repo
            .find_by_id(&self.pool, employee_id)
            .await?
            .ok_or(AppError::EmployeeNotFound)?;
        self.repo.list_ratings(employee_id).await
    }

    pub async fn create_ratings(
        &self,
        acting: &User,
        employee_id: Uuid,
        payload: &SaveRatingsPayload,
    ) -> Result<Vec<EmployeeRating>, AppError> {
        self.save_ratings(acting, employee_id, payload, false).await
    }

    /// Substitui o conjunto de avaliações do funcionário.
    pub async fn replace_ratings(
        &self,
        acting: &User,
        employee_id: Uuid,
        payload: &SaveRatingsPayload,
    ) -> Result<Vec<EmployeeRating>, AppError> {
        self.save_ratings(acting, employee_id, payload, true).await
    }

    async fn save_ratings(
        &self,
        acting: &User,
        employee_id: Uuid,
        payload: &SaveRatingsPayload,
        replace: bool,
    ) -> Result<Vec<EmployeeRating>, AppError> {
        if !acting.role.is_people_manager() {
            return Err(AppError::Forbidden);
        }

        let mut tx = self.pool.begin().await?;

        self.repo
            .find_by_id(&mut *tx, employee_id)
            .await?
            .ok_or(AppError::EmployeeNotFound)?;

        if replace {
            self.repo.delete_ratings(&mut *tx, employee_id).await?;
        }

        let mut saved = Vec::with_capacity(payload.ratings.len());
        for rating in &payload.ratings {
            let row = self
                .repo
                .insert_rating(
                    &mut *tx,
                    employee_id,
                    &rating.category,
                    rating.score,
                    rating.comments.as_deref(),
                )
                .await?;
            saved.push(row);
        }

        tx.commit().await?;
        Ok(saved)
    }
}
