use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// As mensagens que vão para o cliente ficam em inglês (é o que o
// frontend exibe no toast); os logs internos ficam com o detalhe.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Papel sem permissão para esta operação")]
    Forbidden,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Funcionário não encontrado")]
    EmployeeNotFound,

    #[error("Candidato não encontrado")]
    CandidateNotFound,

    #[error("Vaga não encontrada")]
    JobNotFound,

    #[error("Candidatura não encontrada")]
    ApplicantNotFound,

    #[error("Checklist não encontrado")]
    ChecklistNotFound,

    #[error("Carta não encontrada")]
    LetterNotFound,

    // Violação da UNIQUE (candidate_id, job_id)
    #[error("Candidato já é aplicante desta vaga")]
    ApplicantAlreadyExists,

    // Invariante de contratação: selecionados > open_positions
    #[error("Vagas abertas insuficientes")]
    NotEnoughOpenPositions,

    // "Hired" só entra pelo fluxo de contratação, nunca por upsert.
    #[error("Transição de status inválida")]
    InvalidStatusTransition,

    // Gate do "Complete Onboarding": ainda há {0} tarefas pendentes
    #[error("Checklist incompleto: {0} tarefas pendentes")]
    ChecklistIncomplete(usize),

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailAlreadyExists => {
                (StatusCode::CONFLICT, "This e-mail is already in use.".to_string())
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid e-mail or password.".to_string())
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Authentication token is missing or invalid.".to_string(),
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Your role does not allow this operation.".to_string(),
            ),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "User not found.".to_string()),
            AppError::EmployeeNotFound => {
                (StatusCode::NOT_FOUND, "Employee not found.".to_string())
            }
            AppError::CandidateNotFound => {
                (StatusCode::NOT_FOUND, "Candidate not found.".to_string())
            }
            AppError::JobNotFound => (StatusCode::NOT_FOUND, "Job not found.".to_string()),
            AppError::ApplicantNotFound => {
                (StatusCode::NOT_FOUND, "Applicant not found.".to_string())
            }
            AppError::ChecklistNotFound => {
                (StatusCode::NOT_FOUND, "Checklist not found.".to_string())
            }
            AppError::LetterNotFound => (StatusCode::NOT_FOUND, "Letter not found.".to_string()),
            AppError::ApplicantAlreadyExists => (
                StatusCode::CONFLICT,
                "Candidate is already an applicant for this job.".to_string(),
            ),
            // Mesma mensagem que o frontend mostrava no toast.
            AppError::NotEnoughOpenPositions => (
                StatusCode::CONFLICT,
                "Cannot hire more applicants than available open positions.".to_string(),
            ),
            AppError::InvalidStatusTransition => (
                StatusCode::BAD_REQUEST,
                "Hiring must go through the bulk-hire operation.".to_string(),
            ),
            AppError::ChecklistIncomplete(missing) => (
                StatusCode::BAD_REQUEST,
                format!("Cannot complete onboarding: {missing} checklist tasks are still pending."),
            ),

            // Todos os outros erros (DatabaseError, InternalServerError...) viram 500.
            // O `tracing` loga a mensagem detalhada que o `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
