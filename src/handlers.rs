// src/handlers.rs

pub mod applicants;
pub mod auth;
pub mod candidates;
pub mod checklist;
pub mod employees;
pub mod jobs;
pub mod letters;
pub mod users;
