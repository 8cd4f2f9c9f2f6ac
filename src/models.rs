pub mod applicant;
pub mod auth;
pub mod candidate;
pub mod checklist;
pub mod employee;
pub mod job;
pub mod letter;
