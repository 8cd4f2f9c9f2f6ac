pub mod auth;
pub mod employee_service;
pub mod letter_service;
pub mod onboarding_service;
pub mod pipeline_service;
pub mod recruitment_service;
pub mod user_service;
