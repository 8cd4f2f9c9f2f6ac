// src/services/onboarding_service.rs
//
// Checklist de onboarding. A regra central: o registro só vira
// "Complete" quando as quatro tarefas rastreadas têm valor. A checagem
// roda sobre a linha já atualizada, dentro da transação, então fechar o
// onboarding junto com a última tarefa no mesmo PUT também funciona.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ChecklistRepository, EmployeeRepository},
    models::auth::{User, UserRole},
    models::checklist::{NewHireChecklist, NewHireView, OnboardingStatus, UpdateChecklistPayload},
};

#[derive(Clone)]
pub struct OnboardingService {
    checklist_repo: ChecklistRepository,
    employee_repo: EmployeeRepository,
    pool: PgPool,
}

impl OnboardingService {
    pub fn new(
        checklist_repo: ChecklistRepository,
        employee_repo: EmployeeRepository,
        pool: PgPool,
    ) -> Self {
        Self { checklist_repo, employee_repo, pool }
    }

    /// GET /checklist/new-hires, com visibilidade por papel: Employee
    /// vê o próprio registro, Manager vê subordinados diretos, RH e
    /// Administrator veem tudo.
    pub async fn list_for(&self, user: &User) -> Result<Vec<NewHireView>, AppError> {
        match user.role {
            UserRole::Administrator | UserRole::Hr => {
                self.checklist_repo.list_views(None, None).await
            }
            UserRole::Manager => {
                let Some(employee) =
                    self.employee_repo.find_by_user_id(&self.pool, user.id).await?
                else {
                    return Ok(Vec::new());
                };
                self.checklist_repo.list_views(None, Some(employee.id)).await
            }
            UserRole::Employee => {
                let Some(employee) =
                    self.employee_repo.find_by_user_id(&self.pool, user.id).await?
                else {
                    return Ok(Vec::new());
                };
                self.checklist_repo.list_views(Some(employee.id), None).await
            }
            UserRole::Guest => Ok(Vec::new()),
        }
    }

    pub async fn get(&self, id: Uuid) -> Result<NewHireChecklist, AppError> {
        self.checklist_repo
            .find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::ChecklistNotFound)
    }

    /// PUT /checklist/{id}: salvar uma tarefa (só o campo dela), iniciar
    /// o onboarding (start_date + "In-Progress") ou completar. Completar
    /// com tarefa pendente devolve 400 e não grava nada.
    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateChecklistPayload,
    ) -> Result<NewHireChecklist, AppError> {
        let mut tx = self.pool.begin().await?;

        self.checklist_repo
            .find_by_id(&mut *tx, id)
            .await?
            .ok_or(AppError::ChecklistNotFound)?;

        let updated = self.checklist_repo.update(&mut *tx, id, payload).await?;

        if payload.status == Some(OnboardingStatus::Complete) && !updated.is_complete() {
            // A transação cai inteira: o status não muda e a tarefa
            // enviada junto (se houver) também não é gravada.
            return Err(AppError::ChecklistIncomplete(updated.missing_count()));
        }

        tx.commit().await?;
        Ok(updated)
    }
}
