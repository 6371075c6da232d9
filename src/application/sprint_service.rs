//! Sprint service - orchestrates the engine and its collaborators.
//!
//! The service owns the [`SprintEngine`] and drives every mutation
//! through it, persisting a snapshot after each durable change.
//! Persistence failure is non-fatal: the in-memory engine stays
//! authoritative and the error is logged. Collaborator failures
//! (recommendations, intake chat) are written into engine state as
//! human-readable messages rather than propagated.

use futures::StreamExt;
use std::sync::Arc;

use crate::config::RecommendationConfig;
use crate::domain::artifacts::{CommitmentMemo, MemoEdit, ProblemBrief};
use crate::domain::classification::DecisionType;
use crate::domain::diagnostic::AnswerValue;
use crate::domain::foundation::{DomainError, FrameworkId, SessionId, SprintStage, Timestamp};
use crate::domain::framework::{build_recommendation_query, Framework};
use crate::domain::sprint::SprintEngine;
use crate::ports::{
    FrameworkRecommender, IntakeChat, IntakePhase, RecommendationFilters, RecommendationRequest,
    SprintStore,
};

/// Application service for driving one decision sprint.
pub struct SprintService {
    engine: SprintEngine,
    store: Arc<dyn SprintStore>,
    recommender: Arc<dyn FrameworkRecommender>,
    defaults: RecommendationConfig,
}

impl SprintService {
    /// Creates a service with an empty engine. Call [`load_or_init`]
    /// before driving a sprint.
    ///
    /// [`load_or_init`]: SprintService::load_or_init
    pub fn new(
        store: Arc<dyn SprintStore>,
        recommender: Arc<dyn FrameworkRecommender>,
        defaults: RecommendationConfig,
    ) -> Self {
        Self {
            engine: SprintEngine::new(),
            store,
            recommender,
            defaults,
        }
    }

    /// Read-only view of the engine state.
    pub fn engine(&self) -> &SprintEngine {
        &self.engine
    }

    // ─────────────────────────────────────────────────────────────────────
    // Session lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Restores the persisted sprint if one exists, otherwise starts a
    /// fresh session. A snapshot that fails to load is logged and
    /// treated as absent.
    pub async fn load_or_init(&mut self) -> SessionId {
        match self.store.load().await {
            Ok(Some(snapshot)) => {
                tracing::info!(session_id = %snapshot.session_id, "restored sprint snapshot");
                self.engine = SprintEngine::restore(snapshot);
            }
            Ok(None) => {
                self.engine.initialize_session();
                self.flush().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to load sprint snapshot, starting fresh");
                self.engine.initialize_session();
                self.flush().await;
            }
        }
        self.engine
            .session()
            .map(|s| s.id)
            .unwrap_or_else(SessionId::new)
    }

    /// Marks the sprint finished and persists the terminal state.
    pub async fn complete_session(&mut self) -> Result<(), DomainError> {
        self.engine.complete_session()?;
        self.flush().await;
        Ok(())
    }

    /// Clears the engine and removes the persisted snapshot.
    pub async fn reset_session(&mut self) {
        self.engine.reset_session();
        if let Err(err) = self.store.clear().await {
            tracing::warn!(%err, "failed to clear persisted sprint snapshot");
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Stage navigation
    // ─────────────────────────────────────────────────────────────────────

    /// Ungated stage navigation.
    pub async fn set_current_stage(&mut self, stage: SprintStage) {
        self.engine.set_current_stage(stage);
        self.flush().await;
    }

    /// Gated forward movement; false means the gate denied.
    pub async fn advance_to(&mut self, target: SprintStage) -> bool {
        let moved = self.engine.advance_to(target);
        if moved {
            self.flush().await;
        }
        moved
    }

    pub async fn mark_stage_completed(&mut self, stage: SprintStage) {
        self.engine.mark_stage_completed(stage);
        self.flush().await;
    }

    pub async fn skip_stage(&mut self, stage: SprintStage) {
        self.engine.skip_stage(stage);
        self.flush().await;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Intake and diagnostics
    // ─────────────────────────────────────────────────────────────────────

    pub async fn set_problem_input(&mut self, text: impl Into<String>) {
        self.engine.set_problem_input(text);
        self.flush().await;
    }

    pub async fn add_diagnostic_response(
        &mut self,
        question_id: impl Into<String>,
        answer: AnswerValue,
    ) {
        self.engine.add_diagnostic_response(question_id, answer);
        self.flush().await;
    }

    /// Streams the intake chat response into the transcript. Stream
    /// completion without error marks the intake stage completed; a
    /// failure is recorded in engine state and the stage stays open.
    ///
    /// # Errors
    ///
    /// - `MissingPrerequisite` if the problem text is not set yet
    /// - `SessionNotInitialized` if no session exists
    pub async fn run_intake_chat(&mut self, chat: &dyn IntakeChat) -> Result<(), DomainError> {
        let session_id = self
            .engine
            .session()
            .map(|s| s.id)
            .ok_or_else(|| {
                DomainError::new(
                    crate::domain::foundation::ErrorCode::SessionNotInitialized,
                    "Cannot run intake chat without a session",
                )
            })?;
        let problem_text = self
            .engine
            .problem_input()
            .ok_or_else(|| DomainError::missing_prerequisite("problem input"))?
            .to_string();

        let mut stream = match chat
            .stream_intake(&problem_text, session_id, IntakePhase::ProblemIntake)
            .await
        {
            Ok(stream) => stream,
            Err(err) => {
                tracing::warn!(%err, "intake chat call failed");
                self.engine.set_intake_error(err.to_string());
                return Ok(());
            }
        };

        while let Some(part) = stream.next().await {
            match part {
                Ok(part) => self.engine.append_intake_message(&part.content),
                Err(err) => {
                    tracing::warn!(%err, "intake chat stream interrupted");
                    self.engine.set_intake_error(err.to_string());
                    return Ok(());
                }
            }
        }

        self.engine.mark_stage_completed(SprintStage::ProblemIntake);
        self.flush().await;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Classification
    // ─────────────────────────────────────────────────────────────────────

    pub async fn run_classification(&mut self) -> DecisionType {
        let decision_type = self.engine.run_classification();
        self.flush().await;
        decision_type
    }

    pub async fn set_decision_type(&mut self, decision_type: DecisionType) {
        self.engine.set_decision_type(decision_type);
        self.flush().await;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Artifacts
    // ─────────────────────────────────────────────────────────────────────

    /// Generates the problem brief if absent and persists.
    pub async fn generate_problem_brief(&mut self) -> Result<ProblemBrief, DomainError> {
        let brief = self.engine.generate_problem_brief()?.clone();
        self.flush().await;
        Ok(brief)
    }

    pub async fn set_problem_brief(&mut self, brief: ProblemBrief) {
        self.engine.set_problem_brief(brief);
        self.flush().await;
    }

    pub async fn confirm_problem_brief(&mut self) -> Result<(), DomainError> {
        self.engine.confirm_problem_brief()?;
        self.flush().await;
        Ok(())
    }

    /// Generates the commitment memo if absent, dated `now`, and
    /// persists.
    pub async fn generate_commitment_memo(
        &mut self,
        now: Timestamp,
    ) -> Result<CommitmentMemo, DomainError> {
        let memo = self.engine.generate_commitment_memo(now)?.clone();
        self.flush().await;
        Ok(memo)
    }

    pub async fn set_commitment_memo(&mut self, memo: CommitmentMemo) {
        self.engine.set_commitment_memo(memo);
        self.flush().await;
    }

    pub async fn edit_commitment_memo(&mut self, edit: MemoEdit) -> Result<(), DomainError> {
        self.engine.edit_commitment_memo(edit)?;
        self.flush().await;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Framework selection and recommendations
    // ─────────────────────────────────────────────────────────────────────

    pub async fn select_framework(&mut self, framework: Framework) -> bool {
        let changed = self.engine.select_framework(framework);
        if changed {
            self.flush().await;
        }
        changed
    }

    pub async fn deselect_framework(&mut self, id: &FrameworkId) -> bool {
        let changed = self.engine.deselect_framework(id);
        if changed {
            self.flush().await;
        }
        changed
    }

    /// Queries the recommender from the confirmed brief. Service failure
    /// is absorbed into engine state (`recommendation_error`); only a
    /// missing or unconfirmed brief is an error here. Results are
    /// transient and not persisted.
    ///
    /// # Errors
    ///
    /// - `MissingPrerequisite` if no confirmed brief exists
    pub async fn fetch_recommendations(&mut self) -> Result<(), DomainError> {
        let brief = self
            .engine
            .problem_brief()
            .filter(|b| b.confirmed)
            .ok_or_else(|| DomainError::missing_prerequisite("confirmed problem brief"))?;

        let query = build_recommendation_query(brief);
        let request = RecommendationRequest {
            query: query.query,
            filters: RecommendationFilters {
                content_type: Some(query.content_type),
                target_persona: self.defaults.target_persona.clone(),
                startup_phase: self.defaults.startup_phase.clone(),
                problem_category: if query.problem_category.is_empty() {
                    None
                } else {
                    Some(query.problem_category)
                },
                language: self.defaults.language.clone(),
                super_model: None,
            },
            limit: self.defaults.limit,
            threshold: self.defaults.threshold,
        };

        match self.recommender.recommend(&request).await {
            Ok(frameworks) => {
                tracing::debug!(count = frameworks.len(), "recommendations received");
                self.engine.set_recommendations(frameworks);
            }
            Err(err) => {
                tracing::warn!(%err, "recommendation call failed");
                self.engine.set_recommendation_error(err.to_string());
            }
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────

    /// Persists the current snapshot. Failure is logged, never raised:
    /// the in-memory engine stays authoritative.
    async fn flush(&self) {
        if let Some(snapshot) = self.engine.snapshot() {
            if let Err(err) = self.store.save(&snapshot).await {
                tracing::warn!(%err, "failed to persist sprint snapshot");
            }
        }
    }
}
