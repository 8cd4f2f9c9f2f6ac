// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        ApplicantRepository, CandidateRepository, ChecklistRepository, EmployeeRepository,
        JobRepository, LetterRepository, UserRepository,
    },
    services::{
        auth::AuthService, employee_service::EmployeeService, letter_service::LetterService,
        onboarding_service::OnboardingService, pipeline_service::PipelineService,
        recruitment_service::RecruitmentService, user_service::UserService,
    },
};

// Remetente padrão das cartas geradas pela pipeline.
const DEFAULT_FROM_EMAIL: &str = "hr@company.com";

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub pipeline_service: PipelineService,
    pub recruitment_service: RecruitmentService,
    pub onboarding_service: OnboardingService,
    pub employee_service: EmployeeService,
    pub letter_service: LetterService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")?;
        let jwt_secret = env::var("JWT_SECRET")?;
        let from_email =
            env::var("HR_FROM_EMAIL").unwrap_or_else(|_| DEFAULT_FROM_EMAIL.to_string());

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let employee_repo = EmployeeRepository::new(db_pool.clone());
        let candidate_repo = CandidateRepository::new(db_pool.clone());
        let job_repo = JobRepository::new(db_pool.clone());
        let applicant_repo = ApplicantRepository::new(db_pool.clone());
        let checklist_repo = ChecklistRepository::new(db_pool.clone());
        let letter_repo = LetterRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            user_repo.clone(),
            employee_repo.clone(),
            jwt_secret,
            db_pool.clone(),
        );
        let letter_service = LetterService::new(letter_repo, from_email, db_pool.clone());
        let user_service = UserService::new(
            user_repo,
            employee_repo.clone(),
            candidate_repo.clone(),
            applicant_repo.clone(),
            checklist_repo.clone(),
            job_repo.clone(),
            db_pool.clone(),
        );
        let pipeline_service = PipelineService::new(
            applicant_repo,
            candidate_repo.clone(),
            job_repo.clone(),
            employee_repo.clone(),
            letter_service.clone(),
            db_pool.clone(),
        );
        let recruitment_service =
            RecruitmentService::new(candidate_repo, job_repo, db_pool.clone());
        let onboarding_service =
            OnboardingService::new(checklist_repo, employee_repo.clone(), db_pool.clone());
        let employee_service = EmployeeService::new(employee_repo, db_pool.clone());

        Ok(Self {
            db_pool,
            auth_service,
            user_service,
            pipeline_service,
            recruitment_service,
            onboarding_service,
            employee_service,
            letter_service,
        })
    }
}
