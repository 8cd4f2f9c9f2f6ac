// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,

        // --- Users ---
        handlers::users::create_user,
        handlers::users::get_me,
        handlers::users::update_me,
        handlers::users::get_user,
        handlers::users::update_user,

        // --- Candidates ---
        handlers::candidates::list_candidates,
        handlers::candidates::get_candidate,
        handlers::candidates::create_candidate,
        handlers::candidates::update_candidate,
        handlers::candidates::bulk_hire_candidates,

        // --- Jobs ---
        handlers::jobs::list_jobs,
        handlers::jobs::get_job,
        handlers::jobs::create_job,
        handlers::jobs::update_job,

        // --- Applicants ---
        handlers::applicants::list_applicants,
        handlers::applicants::get_applicant,
        handlers::applicants::board,
        handlers::applicants::bulk_upsert,
        handlers::applicants::bulk_delete,
        handlers::applicants::bulk_hire,
        handlers::applicants::update_applicant,
        handlers::applicants::apply,
        handlers::applicants::find_hired_job,

        // --- Employees ---
        handlers::employees::list_employees,
        handlers::employees::get_employee,
        handlers::employees::update_employee,
        handlers::employees::list_ratings,
        handlers::employees::create_ratings,
        handlers::employees::replace_ratings,

        // --- Onboarding ---
        handlers::checklist::list_new_hires,
        handlers::checklist::get_checklist,
        handlers::checklist::update_checklist,

        // --- Letters ---
        handlers::letters::list_letters,
        handlers::letters::get_letter,
        handlers::letters::create_letter,
        handlers::letters::update_letter,
        handlers::letters::delete_letter,
        handlers::letters::draft_letters,
    ),
    components(
        schemas(
            // --- Auth / Users ---
            models::auth::UserRole,
            models::auth::User,
            models::auth::CreateUserPayload,
            models::auth::UpdateUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,
            models::auth::UserProfile,
            models::auth::CreateUserResponse,

            // --- Candidates ---
            models::candidate::CandidateStatus,
            models::candidate::Candidate,
            models::candidate::CandidatePayload,
            models::candidate::BulkHireCandidatesPayload,

            // --- Jobs ---
            models::job::Job,
            models::job::JobPayload,

            // --- Applicants ---
            models::applicant::InterviewStatus,
            models::applicant::JobApplicant,
            models::applicant::ApplicantView,
            models::applicant::AvailableCandidate,
            models::applicant::PipelineBoard,
            models::applicant::HiredJobContext,
            models::applicant::BulkUpsertEntry,
            models::applicant::BulkDeletePayload,
            models::applicant::BulkHireEntry,
            models::applicant::UpdateApplicantPayload,
            models::applicant::ApplyPayload,

            // --- Employees ---
            models::employee::Employee,
            models::employee::UpdateEmployeePayload,
            models::employee::EmployeeRating,
            models::employee::RatingPayload,
            models::employee::SaveRatingsPayload,

            // --- Onboarding ---
            models::checklist::OnboardingStatus,
            models::checklist::TaskType,
            models::checklist::ChecklistTask,
            models::checklist::NewHireChecklist,
            models::checklist::NewHireView,
            models::checklist::UpdateChecklistPayload,

            // --- Letters ---
            models::letter::LetterType,
            models::letter::LetterStatus,
            models::letter::Letter,
            models::letter::LetterPayload,
            models::letter::UpdateLetterPayload,
            models::letter::DraftLettersPayload,
            models::letter::DraftRecipient,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação"),
        (name = "Users", description = "Contas e Perfis"),
        (name = "Candidates", description = "Banco de Candidatos"),
        (name = "Jobs", description = "Vagas Abertas"),
        (name = "Applicants", description = "Pipeline de Candidatura"),
        (name = "Employees", description = "Funcionários e Avaliações"),
        (name = "Onboarding", description = "Checklist de Novos Contratados"),
        (name = "Letters", description = "Cartas de RH")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
