// src/models/applicant.rs
//
// A máquina de estados da pipeline de candidatura. Os rótulos do wire
// ("Job Offer", "Withdrawn"...) são os mesmos que o frontend sempre
// exibiu, mas aqui viram um enum fechado: transição inválida nem compila.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::candidate::Candidate;
use crate::models::letter::LetterType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "interview_status")]
pub enum InterviewStatus {
    Added,
    Interviewed,
    #[sqlx(rename = "Job Offer")]
    #[serde(rename = "Job Offer")]
    JobOffer,
    Hired,
    Rejected,
    Withdrawn,
}

impl InterviewStatus {
    /// "Withdrawn" fica fora de qualquer ação em lote.
    pub fn is_bulk_target(&self) -> bool {
        !matches!(self, InterviewStatus::Withdrawn)
    }

    /// Entra no bulk-hire: fora de "Withdrawn" e ainda não contratado.
    pub fn is_hire_eligible(&self) -> bool {
        self.is_bulk_target() && !matches!(self, InterviewStatus::Hired)
    }

    /// Tabela de efeitos colaterais por status de destino: a única
    /// diferença entre os caminhos de transição é qual carta rascunhar.
    pub fn letter_on_transition(&self) -> Option<LetterType> {
        match self {
            InterviewStatus::JobOffer => Some(LetterType::JobOffer),
            InterviewStatus::Rejected => Some(LetterType::Rejection),
            // A contratação rascunha "New Hire" dentro do fluxo de hire,
            // que também mexe em vaga/candidato; não entra nesta tabela.
            _ => None,
        }
    }
}

/// O plano de um bulk-hire: filtra os elegíveis e decide, antes de
/// qualquer escrita, se o lote cabe nas vagas abertas.
#[derive(Debug)]
pub struct HirePlan {
    pub eligible: Vec<JobApplicant>,
}

impl HirePlan {
    /// `None` quando os elegíveis excedem `open_positions`: o chamador
    /// recusa o lote inteiro, sem contratação parcial.
    pub fn build(rows: Vec<JobApplicant>, open_positions: i32) -> Option<Self> {
        let eligible: Vec<JobApplicant> = rows
            .into_iter()
            .filter(|a| a.interview_status.is_hire_eligible())
            .collect();

        if eligible.len() as i32 > open_positions {
            return None;
        }
        Some(Self { eligible })
    }
}

/// Efeito da contratação sobre o candidato.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HireEffect {
    /// Transferência interna: o funcionário existente é atualizado no
    /// lugar, sem carta.
    InternalTransfer,
    /// Candidato externo: vira "Hired" e recebe a carta de boas-vindas
    /// se tiver e-mail de contato.
    ExternalHire { draft_letter: bool },
}

impl HireEffect {
    pub fn for_candidate(candidate: &Candidate) -> Self {
        match candidate.user_id {
            Some(_) => HireEffect::InternalTransfer,
            None => HireEffect::ExternalHire {
                draft_letter: candidate.contact_email().is_some(),
            },
        }
    }

    pub fn drafts_letter(&self) -> bool {
        matches!(self, HireEffect::ExternalHire { draft_letter: true })
    }
}

/// Data-sentinela usada quando a entrevista é marcada como concluída.
pub fn interview_done_sentinel() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap()
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicant {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub interview_status: InterviewStatus,
    pub next_interview: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// A projeção "juntada" que as telas consomem: candidatura + nome/e-mail
// do candidato. Substitui o mergeApplicants implícito do frontend por um
// join com contrato explícito.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantView {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub interview_status: InterviewStatus,
    pub next_interview: Option<DateTime<Utc>>,
}

impl ApplicantView {
    pub fn from_parts(applicant: &JobApplicant, candidate: &Candidate) -> Self {
        Self {
            id: applicant.id,
            candidate_id: applicant.candidate_id,
            job_id: applicant.job_id,
            name: candidate.name.clone(),
            email: candidate.contact_email().map(str::to_owned),
            interview_status: applicant.interview_status,
            next_interview: applicant.next_interview,
        }
    }
}

// Candidato ainda sem candidatura para a vaga (coluna "Available").
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCandidate {
    pub candidate_id: Uuid,
    pub name: String,
    pub email: Option<String>,
}

// As três visões disjuntas da vaga: Available / Added / Hired.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PipelineBoard {
    pub available: Vec<AvailableCandidate>,
    pub added: Vec<ApplicantView>,
    pub hired: Vec<ApplicantView>,
}

impl PipelineBoard {
    /// Particiona candidatos e candidaturas de uma vaga. Invariante: um
    /// candidato aparece em exatamente um dos três vetores.
    pub fn build(candidates: &[Candidate], applicants: Vec<ApplicantView>) -> Self {
        let mut added = Vec::new();
        let mut hired = Vec::new();
        for view in applicants {
            if view.interview_status == InterviewStatus::Hired {
                hired.push(view);
            } else {
                added.push(view);
            }
        }

        let taken: std::collections::HashSet<Uuid> = added
            .iter()
            .chain(hired.iter())
            .map(|a| a.candidate_id)
            .collect();

        let available = candidates
            .iter()
            .filter(|c| !taken.contains(&c.id))
            .map(|c| AvailableCandidate {
                candidate_id: c.id,
                name: c.name.clone(),
                email: c.contact_email().map(str::to_owned),
            })
            .collect();

        Self { available, added, hired }
    }
}

// GET /applicants/find-hired-job/{candidate_id}: contexto que a tela de
// registro usa para pré-preencher os dados de funcionário.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HiredJobContext {
    pub applicant: JobApplicant,
    pub job: crate::models::job::Job,
}

// --- Payloads ---

// Entrada do POST /applicants/bulk-upsert. Sem status = adicionar com o
// default "Added"; com status = transição em lote.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpsertEntry {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub interview_status: Option<InterviewStatus>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeletePayload {
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkHireEntry {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicantPayload {
    pub interview_status: Option<InterviewStatus>,
    pub next_interview: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyPayload {
    pub job_id: Uuid,
}

// Filtro do GET /applicants (?jobId=...)
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantFilter {
    pub job_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::CandidateStatus;

    fn candidate(name: &str) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            user_id: None,
            name: name.to_string(),
            email: None,
            external_email: Some(format!("{name}@example.com")),
            phone: None,
            location: None,
            status: CandidateStatus::None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn applicant(status: InterviewStatus) -> JobApplicant {
        JobApplicant {
            id: Uuid::new_v4(),
            candidate_id: Uuid::new_v4(),
            job_id: Uuid::new_v4(),
            interview_status: status,
            next_interview: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn view(candidate_id: Uuid, status: InterviewStatus) -> ApplicantView {
        ApplicantView {
            id: Uuid::new_v4(),
            candidate_id,
            job_id: Uuid::new_v4(),
            name: "x".into(),
            email: None,
            interview_status: status,
            next_interview: None,
        }
    }

    #[test]
    fn letter_table_only_fires_on_offer_and_rejection() {
        assert_eq!(
            InterviewStatus::JobOffer.letter_on_transition(),
            Some(LetterType::JobOffer)
        );
        assert_eq!(
            InterviewStatus::Rejected.letter_on_transition(),
            Some(LetterType::Rejection)
        );
        for status in [
            InterviewStatus::Added,
            InterviewStatus::Interviewed,
            InterviewStatus::Hired,
            InterviewStatus::Withdrawn,
        ] {
            assert_eq!(status.letter_on_transition(), None, "{status:?}");
        }
    }

    #[test]
    fn withdrawn_is_never_a_bulk_target() {
        assert!(!InterviewStatus::Withdrawn.is_bulk_target());
        assert!(InterviewStatus::Added.is_bulk_target());
        assert!(InterviewStatus::JobOffer.is_bulk_target());
    }

    #[test]
    fn withdrawn_is_the_only_terminal_status() {
        // O caminho de linha única congela exatamente o que o lote pula.
        for status in [
            InterviewStatus::Added,
            InterviewStatus::Interviewed,
            InterviewStatus::JobOffer,
            InterviewStatus::Hired,
            InterviewStatus::Rejected,
        ] {
            assert!(status.is_bulk_target(), "{status:?}");
        }
        assert!(!InterviewStatus::Withdrawn.is_bulk_target());
    }

    #[test]
    fn board_buckets_are_disjoint_and_exhaustive() {
        let c1 = candidate("ana");
        let c2 = candidate("bia");
        let c3 = candidate("caio");
        let candidates = vec![c1.clone(), c2.clone(), c3.clone()];

        let applicants = vec![
            view(c1.id, InterviewStatus::Added),
            view(c2.id, InterviewStatus::Hired),
        ];

        let board = PipelineBoard::build(&candidates, applicants);

        assert_eq!(board.added.len(), 1);
        assert_eq!(board.hired.len(), 1);
        assert_eq!(board.available.len(), 1);
        assert_eq!(board.available[0].candidate_id, c3.id);
        assert_eq!(board.added[0].candidate_id, c1.id);
        assert_eq!(board.hired[0].candidate_id, c2.id);
    }

    #[test]
    fn interviewed_applicants_stay_in_added_bucket() {
        let c1 = candidate("dani");
        let applicants = vec![view(c1.id, InterviewStatus::Interviewed)];
        let board = PipelineBoard::build(&[c1], applicants);
        assert!(board.available.is_empty());
        assert_eq!(board.added.len(), 1);
    }

    #[test]
    fn hire_plan_excludes_withdrawn_and_already_hired() {
        let rows = vec![
            applicant(InterviewStatus::Added),
            applicant(InterviewStatus::Withdrawn),
            applicant(InterviewStatus::Hired),
            applicant(InterviewStatus::JobOffer),
        ];

        let plan = HirePlan::build(rows, 10).unwrap();
        assert_eq!(plan.eligible.len(), 2);
        assert!(plan
            .eligible
            .iter()
            .all(|a| a.interview_status.is_hire_eligible()));
    }

    #[test]
    fn hire_plan_refuses_batch_larger_than_open_positions() {
        // Três elegíveis para duas vagas: recusa o lote inteiro, sem
        // contratação parcial.
        let rows = vec![
            applicant(InterviewStatus::Added),
            applicant(InterviewStatus::Interviewed),
            applicant(InterviewStatus::JobOffer),
        ];

        assert!(HirePlan::build(rows, 2).is_none());
    }

    #[test]
    fn hire_plan_ignores_withdrawn_when_counting_against_open_positions() {
        // Withdrawn não conta contra as vagas: dois elegíveis + um
        // Withdrawn ainda cabem em duas vagas.
        let rows = vec![
            applicant(InterviewStatus::Added),
            applicant(InterviewStatus::JobOffer),
            applicant(InterviewStatus::Withdrawn),
        ];

        let plan = HirePlan::build(rows, 2).unwrap();
        assert_eq!(plan.eligible.len(), 2);
    }

    #[test]
    fn internal_transfer_never_drafts_a_letter() {
        let mut c = candidate("fabio");
        c.user_id = Some(Uuid::new_v4());

        let effect = HireEffect::for_candidate(&c);
        assert_eq!(effect, HireEffect::InternalTransfer);
        assert!(!effect.drafts_letter());
    }

    #[test]
    fn external_hire_drafts_letter_only_with_contact_email() {
        let with_email = candidate("gabi");
        assert!(HireEffect::for_candidate(&with_email).drafts_letter());

        let mut without_email = candidate("hugo");
        without_email.external_email = None;
        assert_eq!(
            HireEffect::for_candidate(&without_email),
            HireEffect::ExternalHire { draft_letter: false }
        );
    }

    #[test]
    fn sentinel_is_first_of_1900() {
        let s = interview_done_sentinel();
        assert_eq!(s.to_rfc3339(), "1900-01-01T00:00:00+00:00");
    }

    #[test]
    fn view_prefers_internal_email() {
        let mut c = candidate("eva");
        c.email = Some("interna@corp.com".into());
        let a = JobApplicant {
            id: Uuid::new_v4(),
            candidate_id: c.id,
            job_id: Uuid::new_v4(),
            interview_status: InterviewStatus::Added,
            next_interview: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let v = ApplicantView::from_parts(&a, &c);
        assert_eq!(v.email.as_deref(), Some("interna@corp.com"));
    }
}
