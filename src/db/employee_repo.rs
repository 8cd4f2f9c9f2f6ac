// src/db/employee_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::employee::{Employee, EmployeeRating},
};

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

const EMPLOYEE_COLUMNS: &str =
    "id, user_id, name, email, job_title, location, salary, reports_to, created_at, updated_at";

const RATING_COLUMNS: &str = "id, employee_id, category, score, comments, created_at";

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Employee>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(employee)
    }

    pub async fn find_by_user_id<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
    ) -> Result<Option<Employee>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(executor)
        .await?;
        Ok(employee)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        user_id: Option<Uuid>,
        name: &str,
        email: &str,
        job_title: &str,
        location: &str,
        salary: Decimal,
        reports_to: Option<Uuid>,
    ) -> Result<Employee, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "INSERT INTO employees (user_id, name, email, job_title, location, salary, reports_to) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {EMPLOYEE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(name)
        .bind(email)
        .bind(job_title)
        .bind(location)
        .bind(salary)
        .bind(reports_to)
        .fetch_one(executor)
        .await?;
        Ok(employee)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        name: Option<&str>,
        email: Option<&str>,
        job_title: Option<&str>,
        location: Option<&str>,
        salary: Option<Decimal>,
        reports_to: Option<Uuid>,
    ) -> Result<Employee, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "UPDATE employees SET \
                name = COALESCE($2, name), \
                email = COALESCE($3, email), \
                job_title = COALESCE($4, job_title), \
                location = COALESCE($5, location), \
                salary = COALESCE($6, salary), \
                reports_to = COALESCE($7, reports_to), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {EMPLOYEE_COLUMNS}"
        ))
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(job_title)
        .bind(location)
        .bind(salary)
        .bind(reports_to)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::EmployeeNotFound)?;
        Ok(employee)
    }

    // --- Avaliações ---

    pub async fn list_ratings(&self, employee_id: Uuid) -> Result<Vec<EmployeeRating>, AppError> {
        let ratings = sqlx::query_as::<_, EmployeeRating>(&format!(
            "SELECT {RATING_COLUMNS} FROM employee_ratings \
             WHERE employee_id = $1 ORDER BY created_at"
        ))
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(ratings)
    }

    pub async fn insert_rating<'e, E>(
        &self,
        executor: E,
        employee_id: Uuid,
        category: &str,
        score: i32,
        comments: Option<&str>,
    ) -> Result<EmployeeRating, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rating = sqlx::query_as::<_, EmployeeRating>(&format!(
            "INSERT INTO employee_ratings (employee_id, category, score, comments) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {RATING_COLUMNS}"
        ))
        .bind(employee_id)
        .bind(category)
        .bind(score)
        .bind(comments)
        .fetch_one(executor)
        .await?;
        Ok(rating)
    }

    pub async fn delete_ratings<'e, E>(&self, executor: E, employee_id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM employee_ratings WHERE employee_id = $1")
            .bind(employee_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
