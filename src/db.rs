pub mod applicant_repo;
pub use applicant_repo::ApplicantRepository;
pub mod candidate_repo;
pub use candidate_repo::CandidateRepository;
pub mod checklist_repo;
pub use checklist_repo::ChecklistRepository;
pub mod employee_repo;
pub use employee_repo::EmployeeRepository;
pub mod job_repo;
pub use job_repo::JobRepository;
pub mod letter_repo;
pub use letter_repo::LetterRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
