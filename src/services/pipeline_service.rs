// src/services/pipeline_service.rs
//
// A pipeline de candidatura: Available -> Added -> Interviewed ->
// "Job Offer" -> Hired (ou Rejected), com "Withdrawn" fora de qualquer
// ação em lote. Toda operação mutante roda em uma transação e o estado
// só é devolvido depois do commit; os efeitos colaterais (cartas,
// decremento de vagas, promoção de candidato) vivem na mesma transação.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ApplicantRepository, CandidateRepository, EmployeeRepository, JobRepository},
    models::applicant::{
        interview_done_sentinel, ApplicantView, ApplyPayload, BulkHireEntry, BulkUpsertEntry,
        HireEffect, HirePlan, HiredJobContext, InterviewStatus, JobApplicant, PipelineBoard,
        UpdateApplicantPayload,
    },
    models::auth::User,
    models::candidate::{Candidate, CandidatePayload, CandidateStatus},
    models::job::Job,
    services::letter_service::LetterService,
};

#[derive(Clone)]
pub struct PipelineService {
    applicant_repo: ApplicantRepository,
    candidate_repo: CandidateRepository,
    job_repo: JobRepository,
    employee_repo: EmployeeRepository,
    letter_service: LetterService,
    pool: PgPool,
}

impl PipelineService {
    pub fn new(
        applicant_repo: ApplicantRepository,
        candidate_repo: CandidateRepository,
        job_repo: JobRepository,
        employee_repo: EmployeeRepository,
        letter_service: LetterService,
        pool: PgPool,
    ) -> Self {
        Self {
            applicant_repo,
            candidate_repo,
            job_repo,
            employee_repo,
            letter_service,
            pool,
        }
    }

    pub async fn list(&self, job_id: Option<Uuid>) -> Result<Vec<ApplicantView>, AppError> {
        self.applicant_repo.list_views(job_id).await
    }

    pub async fn get(&self, id: Uuid) -> Result<ApplicantView, AppError> {
        self.applicant_repo
            .find_view_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::ApplicantNotFound)
    }

    /// As três visões disjuntas da vaga (Available / Added / Hired).
    pub async fn board(&self, job_id: Uuid) -> Result<PipelineBoard, AppError> {
        self.job_repo
            .find_by_id(&self.pool, job_id)
            .await?
            .ok_or(AppError::JobNotFound)?;

        let candidates = self.candidate_repo.list(true).await?;
        let applicants = self.applicant_repo.list_views(Some(job_id)).await?;
        Ok(PipelineBoard::build(&candidates, applicants))
    }

    /// POST /applicants/bulk-upsert. Sem status = adicionar (default
    /// "Added"); com status = transição em lote. Linhas "Withdrawn" são
    /// puladas. As cartas da tabela de efeitos saem na mesma transação.
    pub async fn bulk_upsert(
        &self,
        entries: &[BulkUpsertEntry],
    ) -> Result<Vec<ApplicantView>, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut jobs: HashMap<Uuid, Job> = HashMap::new();
        let mut views = Vec::with_capacity(entries.len());

        for entry in entries {
            let status = entry.interview_status.unwrap_or(InterviewStatus::Added);
            if status == InterviewStatus::Hired {
                return Err(AppError::InvalidStatusTransition);
            }

            let candidate = self
                .candidate_repo
                .find_by_id(&mut *tx, entry.candidate_id)
                .await?
                .ok_or(AppError::CandidateNotFound)?;

            // Upsert condicional: devolve None quando a linha existente
            // é "Withdrawn": a entrada é ignorada, não é erro.
            let Some(applicant) = self
                .applicant_repo
                .upsert(&mut *tx, entry.candidate_id, entry.job_id, status)
                .await?
            else {
                continue;
            };

            if let Some(letter_type) = status.letter_on_transition() {
                let job = self.job_cached(&mut tx, &mut jobs, entry.job_id).await?;
                let title = job.title.clone();
                self.draft_for(&mut tx, letter_type, &candidate, &title).await?;
            }

            views.push(ApplicantView::from_parts(&applicant, &candidate));
        }

        tx.commit().await?;
        Ok(views)
    }

    /// POST /applicants/bulk-delete: devolve os selecionados ao
    /// "Available". Contratados e desistentes ficam onde estão.
    pub async fn bulk_delete(&self, ids: &[Uuid]) -> Result<u64, AppError> {
        self.applicant_repo.delete_bulk(&self.pool, ids).await
    }

    /// POST /applicants/bulk-hire. Recusa tudo (sem nenhuma mutação)
    /// quando os selecionados excedem as vagas abertas; caso contrário,
    /// numa única transação: marca Hired, decrementa open_positions e
    /// aplica o efeito por candidato: funcionário existente é
    /// atualizado no lugar, candidato externo é marcado Hired e recebe
    /// a carta de "New Hire".
    pub async fn bulk_hire(&self, entries: &[BulkHireEntry]) -> Result<Vec<ApplicantView>, AppError> {
        let Some(first) = entries.first() else {
            return Ok(Vec::new());
        };
        let job_id = first.job_id;

        let mut tx = self.pool.begin().await?;

        // Tranca a vaga: a checagem de open_positions não pode correr
        // contra outra contratação simultânea.
        let job = self
            .job_repo
            .find_by_id_for_update(&mut *tx, job_id)
            .await?
            .ok_or(AppError::JobNotFound)?;

        // Só entram candidaturas existentes, da mesma vaga.
        let mut rows: Vec<JobApplicant> = Vec::new();
        for entry in entries.iter().filter(|e| e.job_id == job_id) {
            if let Some(applicant) = self
                .applicant_repo
                .find_by_candidate_and_job(&mut *tx, entry.candidate_id, job_id)
                .await?
            {
                rows.push(applicant);
            }
        }

        // A decisão inteira (elegíveis, lote vs. vagas) é tomada antes
        // de qualquer escrita; sem plano, a transação cai aqui inteira.
        let plan = HirePlan::build(rows, job.open_positions)
            .ok_or(AppError::NotEnoughOpenPositions)?;
        let count = plan.eligible.len() as i32;

        let mut views = Vec::with_capacity(plan.eligible.len());
        for applicant in &plan.eligible {
            let updated = self
                .applicant_repo
                .update_row(&mut *tx, applicant.id, Some(InterviewStatus::Hired), None)
                .await?;

            let candidate = self
                .candidate_repo
                .find_by_id(&mut *tx, applicant.candidate_id)
                .await?
                .ok_or(AppError::CandidateNotFound)?;

            match HireEffect::for_candidate(&candidate) {
                // Transferência interna: o funcionário já existe e é
                // atualizado no lugar; sem carta, sem bulk-hire de
                // candidato.
                HireEffect::InternalTransfer => {
                    let user_id = candidate.user_id.ok_or(AppError::CandidateNotFound)?;
                    let employee = self
                        .employee_repo
                        .find_by_user_id(&mut *tx, user_id)
                        .await?
                        .ok_or(AppError::EmployeeNotFound)?;
                    self.employee_repo
                        .update(
                            &mut *tx,
                            employee.id,
                            None,
                            None,
                            Some(&job.title),
                            Some(&job.location),
                            Some(job.salary),
                            job.hiring_manager_id,
                        )
                        .await?;
                }
                // Candidato externo: vira "Hired" e recebe a carta de
                // boas-vindas; o checklist abre quando ele se registrar.
                HireEffect::ExternalHire { draft_letter } => {
                    self.candidate_repo.mark_hired(&mut *tx, &[candidate.id]).await?;
                    if draft_letter {
                        if let Some(email) = candidate.contact_email() {
                            let email = email.to_owned();
                            self.letter_service
                                .draft_one(
                                    &mut *tx,
                                    crate::models::letter::LetterType::NewHire,
                                    &candidate.name,
                                    &email,
                                    &job.title,
                                )
                                .await?;
                        }
                    }
                }
            }

            views.push(ApplicantView::from_parts(&updated, &candidate));
        }

        if count > 0 {
            self.job_repo.decrement_open_positions(&mut *tx, job_id, count).await?;
        }

        tx.commit().await?;

        tracing::info!("✅ {} candidato(s) contratado(s) para a vaga {}", count, job_id);
        Ok(views)
    }

    /// PUT /applicants/{id}: agendar entrevista, concluir entrevista ou
    /// transição de status de linha única. Mesmo caminho de transição do
    /// lote, inclusive as cartas, e só responde depois do commit.
    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateApplicantPayload,
    ) -> Result<ApplicantView, AppError> {
        if payload.interview_status == Some(InterviewStatus::Hired) {
            return Err(AppError::InvalidStatusTransition);
        }

        let mut tx = self.pool.begin().await?;

        let current = self
            .applicant_repo
            .find_by_id(&mut *tx, id)
            .await?
            .ok_or(AppError::ApplicantNotFound)?;

        // "Withdrawn" é terminal: a linha existe, mas não muda mais.
        // Devolve o estado atual, como o caminho em lote que a pula.
        if !current.interview_status.is_bulk_target() {
            let candidate = self
                .candidate_repo
                .find_by_id(&mut *tx, current.candidate_id)
                .await?
                .ok_or(AppError::CandidateNotFound)?;
            return Ok(ApplicantView::from_parts(&current, &candidate));
        }

        // markInterviewAsDone: concluir a entrevista zera o agendamento
        // para a data-sentinela.
        let next_interview = match (payload.interview_status, payload.next_interview) {
            (Some(InterviewStatus::Interviewed), None) => Some(interview_done_sentinel()),
            (_, next) => next,
        };

        let updated = self
            .applicant_repo
            .update_row(&mut *tx, id, payload.interview_status, next_interview)
            .await?;

        // Efeito colateral só em transição real (não em re-gravação).
        if let Some(status) = payload.interview_status {
            if status != current.interview_status {
                if let Some(letter_type) = status.letter_on_transition() {
                    let candidate = self
                        .candidate_repo
                        .find_by_id(&mut *tx, updated.candidate_id)
                        .await?
                        .ok_or(AppError::CandidateNotFound)?;
                    let job = self
                        .job_repo
                        .find_by_id(&mut *tx, updated.job_id)
                        .await?
                        .ok_or(AppError::JobNotFound)?;
                    self.draft_for(&mut tx, letter_type, &candidate, &job.title).await?;
                }
            }
        }

        let candidate = self
            .candidate_repo
            .find_by_id(&mut *tx, updated.candidate_id)
            .await?
            .ok_or(AppError::CandidateNotFound)?;

        tx.commit().await?;
        Ok(ApplicantView::from_parts(&updated, &candidate))
    }

    /// POST /applicants/apply: auto-candidatura de funcionário. Cria o
    /// registro de candidato do usuário se ainda não houver.
    pub async fn apply(&self, user: &User, payload: &ApplyPayload) -> Result<ApplicantView, AppError> {
        let mut tx = self.pool.begin().await?;

        self.job_repo
            .find_by_id(&mut *tx, payload.job_id)
            .await?
            .ok_or(AppError::JobNotFound)?;

        let candidate = match self.candidate_repo.find_by_user_id(&mut *tx, user.id).await? {
            Some(candidate) => candidate,
            None => {
                let new_candidate = CandidatePayload {
                    name: user.name.clone(),
                    email: Some(user.email.clone()),
                    external_email: None,
                    phone: None,
                    location: None,
                };
                self.candidate_repo
                    .create(&mut *tx, &new_candidate, Some(user.id), CandidateStatus::Employee)
                    .await?
            }
        };

        // Re-aplicar não pode resetar uma candidatura em andamento.
        let applicant = self
            .applicant_repo
            .insert_if_absent(&mut *tx, candidate.id, payload.job_id)
            .await?
            .ok_or(AppError::ApplicantAlreadyExists)?;

        tx.commit().await?;
        Ok(ApplicantView::from_parts(&applicant, &candidate))
    }

    /// GET /applicants/find-hired-job/{candidate_id}.
    pub async fn find_hired_job(&self, candidate_id: Uuid) -> Result<HiredJobContext, AppError> {
        let (applicant, job) = self
            .applicant_repo
            .find_hired_job(candidate_id)
            .await?
            .ok_or(AppError::ApplicantNotFound)?;
        Ok(HiredJobContext { applicant, job })
    }

    async fn job_cached<'a>(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        cache: &'a mut HashMap<Uuid, Job>,
        job_id: Uuid,
    ) -> Result<&'a Job, AppError> {
        match cache.entry(job_id) {
            std::collections::hash_map::Entry::Occupied(entry) => Ok(entry.into_mut()),
            std::collections::hash_map::Entry::Vacant(entry) => {
                let job = self
                    .job_repo
                    .find_by_id(&mut **tx, job_id)
                    .await?
                    .ok_or(AppError::JobNotFound)?;
                Ok(entry.insert(job))
            }
        }
    }

    async fn draft_for(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        letter_type: crate::models::letter::LetterType,
        candidate: &Candidate,
        job_title: &str,
    ) -> Result<(), AppError> {
        // Candidato sem e-mail de contato não recebe correspondência.
        if let Some(email) = candidate.contact_email() {
            let email = email.to_owned();
            self.letter_service
                .draft_one(&mut **tx, letter_type, &candidate.name, &email, job_title)
                .await?;
        }
        Ok(())
    }
}
