// src/services/user_service.rs
//
// Criação e manutenção de contas. O caso interessante é o registro de
// um candidato contratado como funcionário: usuário + funcionário +
// vínculo do candidato + abertura do checklist saem em UMA transação:
// se qualquer passo falhar, nada fica pela metade.

use bcrypt::hash;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::currency,
    common::error::AppError,
    db::{
        ApplicantRepository, CandidateRepository, ChecklistRepository, EmployeeRepository,
        JobRepository, UserRepository,
    },
    models::auth::{CreateUserPayload, CreateUserResponse, UpdateUserPayload, User, UserRole},
};

#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
    employee_repo: EmployeeRepository,
    candidate_repo: CandidateRepository,
    applicant_repo: ApplicantRepository,
    checklist_repo: ChecklistRepository,
    job_repo: JobRepository,
    pool: PgPool,
}

impl UserService {
    pub fn new(
        user_repo: UserRepository,
        employee_repo: EmployeeRepository,
        candidate_repo: CandidateRepository,
        applicant_repo: ApplicantRepository,
        checklist_repo: ChecklistRepository,
        job_repo: JobRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            user_repo,
            employee_repo,
            candidate_repo,
            applicant_repo,
            checklist_repo,
            job_repo,
            pool,
        }
    }

    /// POST /users. `acting_role` é None no auto-registro público, que
    /// só pode criar contas Guest; papéis acima disso exigem admin/RH.
    pub async fn create_user(
        &self,
        payload: &CreateUserPayload,
        acting_role: Option<UserRole>,
    ) -> Result<CreateUserResponse, AppError> {
        let role = payload.role.unwrap_or(UserRole::Guest);
        if role != UserRole::Guest && !acting_role.is_some_and(|r| r.is_admin()) {
            return Err(AppError::Forbidden);
        }

        // Hashing fora da transação: não toca no banco.
        let password_clone = payload.password.clone();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let mut tx = self.pool.begin().await?;

        let user = self
            .user_repo
            .create_user(&mut *tx, &payload.email, &hashed_password, &payload.name, role)
            .await?;

        let employee = if role == UserRole::Employee {
            Some(self.create_employee_for(&mut tx, &user, payload).await?)
        } else {
            None
        };

        tx.commit().await?;

        if employee.is_some() {
            tracing::info!("👤 Funcionário registrado para o usuário {}", user.id);
        }

        Ok(CreateUserResponse { user, employee })
    }

    pub async fn get_user(&self, id: Uuid) -> Result<User, AppError> {
        self.user_repo.find_by_id(id).await?.ok_or(AppError::UserNotFound)
    }

    pub async fn update_user(
        &self,
        id: Uuid,
        payload: &UpdateUserPayload,
        acting_role: UserRole,
    ) -> Result<User, AppError> {
        // Trocar o próprio papel é privilégio de admin/RH.
        if payload.role.is_some() && !acting_role.is_admin() {
            return Err(AppError::Forbidden);
        }
        self.user_repo
            .update_user(
                &self.pool,
                id,
                payload.email.as_deref(),
                payload.name.as_deref(),
                payload.role,
            )
            .await
    }

    // O registro de funcionário herda da vaga o que o payload não
    // trouxer (título, local, salário), via handoff do candidato.
    async fn create_employee_for(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user: &User,
        payload: &CreateUserPayload,
    ) -> Result<crate::models::employee::Employee, AppError> {
        let hired_job = match payload.candidate_id {
            Some(candidate_id) => self
                .applicant_repo
                .find_hired_row(&mut **tx, candidate_id)
                .await?
                .map(|a| a.job_id),
            None => None,
        };

        let job = match hired_job {
            Some(job_id) => self.job_repo.find_by_id(&mut **tx, job_id).await?,
            None => None,
        };

        let salary = payload
            .salary
            .as_deref()
            .map(currency::sanitize_salary)
            .as_deref()
            .and_then(currency::parse_salary)
            .or(job.as_ref().map(|j| j.salary))
            .unwrap_or(Decimal::ZERO);

        let job_title = payload
            .job_title
            .clone()
            .or(job.as_ref().map(|j| j.title.clone()))
            .unwrap_or_default();
        let location = payload
            .location
            .clone()
            .or(job.as_ref().map(|j| j.location.clone()))
            .unwrap_or_default();
        let reports_to = payload.reports_to.or(job.as_ref().and_then(|j| j.hiring_manager_id));

        let employee = self
            .employee_repo
            .create(
                &mut **tx,
                Some(user.id),
                &user.name,
                &user.email,
                &job_title,
                &location,
                salary,
                reports_to,
            )
            .await?;

        // Handoff: candidato contratado vira Employee e o onboarding abre.
        // Só um candidato já "Hired" pode ser vinculado; o resto da
        // pipeline passa pelo bulk-hire.
        if let Some(candidate_id) = payload.candidate_id {
            let candidate = self
                .candidate_repo
                .find_by_id(&mut **tx, candidate_id)
                .await?
                .ok_or(AppError::CandidateNotFound)?;
            if !candidate.is_linkable() {
                return Err(AppError::InvalidStatusTransition);
            }
            self.candidate_repo.link_user(&mut **tx, candidate_id, user.id).await?;
            if let Some(job_id) = hired_job {
                self.checklist_repo.create(&mut **tx, employee.id, job_id).await?;
            }
        }

        Ok(employee)
    }
}
