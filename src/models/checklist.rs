// src/models/checklist.rs
//
// Onboarding de novos contratados: um registro por contratação com as
// quatro tarefas rastreadas em colunas próprias. As "tarefas" que a tela
// lista são uma projeção derivada dessas colunas.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "onboarding_status")]
pub enum OnboardingStatus {
    Added,
    #[sqlx(rename = "In-Progress")]
    #[serde(rename = "In-Progress")]
    InProgress,
    Complete,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewHireChecklist {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub job_id: Uuid,
    pub hire_date: DateTime<Utc>,
    pub start_date: Option<DateTime<Utc>>,
    pub status: OnboardingStatus,

    // Uma coluna por tarefa rastreada.
    pub resume: Option<String>,
    pub identification: Option<String>,
    pub tax_information: Option<String>,
    pub training_date: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// O tipo da tarefa decide o widget de edição no frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Document,
    Date,
    Number,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistTask {
    pub document: &'static str,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub uploaded: bool,
    pub value: Option<String>,
}

impl NewHireChecklist {
    /// Projeta as colunas rastreadas na lista de tarefas da tela.
    pub fn tasks(&self) -> Vec<ChecklistTask> {
        let task = |document, task_type, value: Option<String>| ChecklistTask {
            document,
            task_type,
            uploaded: value.as_deref().is_some_and(|v| !v.is_empty()),
            value,
        };
        vec![
            task("Upload Resume", TaskType::Document, self.resume.clone()),
            task("Upload Identification", TaskType::Document, self.identification.clone()),
            task("Upload Tax Information", TaskType::Document, self.tax_information.clone()),
            task(
                "Set Training Date",
                TaskType::Date,
                self.training_date.map(|d| d.to_string()),
            ),
        ]
    }

    /// Quantas tarefas ainda estão vazias (nulas ou em branco).
    pub fn missing_count(&self) -> usize {
        self.tasks().iter().filter(|t| !t.uploaded).count()
    }

    /// O "Complete Onboarding" só libera com tudo preenchido.
    pub fn is_complete(&self) -> bool {
        self.missing_count() == 0
    }
}

// Visão juntada com o funcionário, consumida pela tela de New Hires.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewHireView {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub job_id: Uuid,
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub reports_to: Option<Uuid>,
    pub hire_date: DateTime<Utc>,
    pub start_date: Option<DateTime<Utc>>,
    pub status: OnboardingStatus,
    pub resume: Option<String>,
    pub identification: Option<String>,
    pub tax_information: Option<String>,
    pub training_date: Option<NaiveDate>,
}

// PUT /checklist/{id}: cada tarefa grava só o próprio campo; status e
// start_date cobrem o "Start Onboarding" e o "Complete Onboarding".
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChecklistPayload {
    pub status: Option<OnboardingStatus>,
    pub start_date: Option<DateTime<Utc>>,
    pub resume: Option<String>,
    pub identification: Option<String>,
    pub tax_information: Option<String>,
    pub training_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checklist() -> NewHireChecklist {
        NewHireChecklist {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            job_id: Uuid::new_v4(),
            hire_date: Utc::now(),
            start_date: None,
            status: OnboardingStatus::Added,
            resume: None,
            identification: None,
            tax_information: None,
            training_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn fresh_checklist_has_four_pending_tasks() {
        let c = checklist();
        assert_eq!(c.tasks().len(), 4);
        assert_eq!(c.missing_count(), 4);
        assert!(!c.is_complete());
    }

    #[test]
    fn blank_value_still_counts_as_pending() {
        let mut c = checklist();
        c.resume = Some(String::new());
        assert_eq!(c.missing_count(), 4);
    }

    #[test]
    fn completion_flips_on_the_last_task() {
        let mut c = checklist();
        c.resume = Some("resume.pdf".into());
        c.identification = Some("id.pdf".into());
        c.tax_information = Some("w2.pdf".into());
        assert!(!c.is_complete());
        assert_eq!(c.missing_count(), 1);

        c.training_date = NaiveDate::from_ymd_opt(2026, 9, 14);
        assert!(c.is_complete());
        assert_eq!(c.missing_count(), 0);
    }

    #[test]
    fn training_date_projects_as_date_task() {
        let mut c = checklist();
        c.training_date = NaiveDate::from_ymd_opt(2026, 9, 14);
        let tasks = c.tasks();
        let training = tasks.iter().find(|t| t.document == "Set Training Date").unwrap();
        assert_eq!(training.task_type, TaskType::Date);
        assert!(training.uploaded);
        assert_eq!(training.value.as_deref(), Some("2026-09-14"));
    }
}
