//! Sprint engine aggregate.
//!
//! # Navigation vs. advancement
//!
//! `set_current_stage` is deliberately ungated so the user can jump
//! backward (or into any already-reached stage) from a progress
//! indicator. Gating applies only to the advance path via
//! `can_advance_to`, and a denied gate is a boolean, never an error.
//! Artifacts are protected from regeneration after backward jumps by the
//! "generate only if absent" guards, not by navigation rules.

use std::collections::BTreeSet;

use crate::domain::artifacts::{
    generate_commitment_memo, generate_problem_brief, CommitmentMemo, MemoEdit, ProblemBrief,
};
use crate::domain::classification::{classify, DecisionFactors, DecisionType};
use crate::domain::diagnostic::{AnswerValue, DiagnosticResponses};
use crate::domain::foundation::{DomainError, FrameworkId, SessionId, SprintStage, Timestamp};
use crate::domain::framework::Framework;
use crate::domain::sprint::SprintSnapshot;

/// Session identity for one sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SprintSession {
    pub id: SessionId,
    pub created_at: Timestamp,
    pub completed: bool,
}

/// Single source of truth for one decision sprint.
///
/// # Invariants
///
/// - `current_stage` is always a member of the fixed stage sequence
///   (guaranteed by the type).
/// - `completed_stages` and `skipped_stages` only grow, except on reset.
/// - Generated artifacts are never silently overwritten; generation is a
///   no-op while the artifact exists.
/// - `selected_frameworks` holds no duplicate ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SprintEngine {
    session: Option<SprintSession>,
    current_stage: Option<SprintStage>,
    completed_stages: BTreeSet<SprintStage>,
    skipped_stages: BTreeSet<SprintStage>,
    problem_input: Option<String>,
    responses: DiagnosticResponses,
    decision_type: Option<DecisionType>,
    problem_brief: Option<ProblemBrief>,
    selected_frameworks: Vec<Framework>,
    commitment_memo: Option<CommitmentMemo>,
    /// Last recommendation results; transient, not persisted.
    recommendations: Vec<Framework>,
    /// Human-readable failure from the last recommendation call.
    recommendation_error: Option<String>,
    /// Accumulated intake chat transcript; transient, not persisted.
    intake_transcript: String,
    /// Human-readable failure from the last intake chat call.
    intake_error: Option<String>,
}

impl SprintEngine {
    /// Creates an engine with no session. Call `initialize_session` (or
    /// `restore`) before driving a sprint.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Session lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Creates the session if none exists and points at the first stage.
    /// Idempotent: with an existing session this is a no-op.
    pub fn initialize_session(&mut self) -> &SprintSession {
        if self.session.is_none() {
            self.session = Some(SprintSession {
                id: SessionId::new(),
                created_at: Timestamp::now(),
                completed: false,
            });
            self.current_stage = Some(SprintStage::first());
        }
        self.session.as_ref().expect("session was just initialized")
    }

    /// Marks the sprint finished. Semantically terminal; further stage
    /// transitions are not structurally blocked.
    ///
    /// # Errors
    ///
    /// - `SessionNotInitialized` if no session exists
    pub fn complete_session(&mut self) -> Result<(), DomainError> {
        match self.session.as_mut() {
            Some(session) => {
                session.completed = true;
                Ok(())
            }
            None => Err(DomainError::new(
                crate::domain::foundation::ErrorCode::SessionNotInitialized,
                "Cannot complete a sprint that was never started",
            )),
        }
    }

    /// Clears everything back to the initial empty state. The old session
    /// identifier is discarded and never reused.
    pub fn reset_session(&mut self) {
        *self = Self::default();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Stage navigation and gating
    // ─────────────────────────────────────────────────────────────────────

    /// Unconditionally moves the stage pointer. Free backward navigation
    /// is allowed by design; gating applies only to advancement.
    pub fn set_current_stage(&mut self, stage: SprintStage) {
        tracing::debug!(stage = %stage, "stage pointer set");
        self.current_stage = Some(stage);
    }

    /// Pure forward-progress gate. The target's predecessor must be
    /// completed (or explicitly skipped) and the target's own
    /// precondition must hold.
    pub fn can_advance_to(&self, target: SprintStage) -> bool {
        if let Some(predecessor) = target.previous() {
            if !self.is_done_or_skipped(predecessor) {
                return false;
            }
        }

        match target {
            SprintStage::ProblemIntake
            | SprintStage::DiagnosticInterview
            | SprintStage::DecisionClassification
            | SprintStage::CommitmentMemo => true,
            SprintStage::ProblemBrief => self.decision_type.is_some(),
            SprintStage::FrameworkSelection => {
                self.problem_brief.as_ref().is_some_and(|b| b.confirmed)
            }
            SprintStage::FrameworkApplication => !self.selected_frameworks.is_empty(),
        }
    }

    /// Moves forward through the gate. Returns false (and leaves the
    /// pointer alone) when the gate denies; callers disable the control.
    pub fn advance_to(&mut self, target: SprintStage) -> bool {
        if self.can_advance_to(target) {
            self.set_current_stage(target);
            true
        } else {
            false
        }
    }

    /// Adds a stage to the completed set. Pure set insertion, no
    /// validation; completion is always triggered explicitly by the
    /// caller after a mutation.
    pub fn mark_stage_completed(&mut self, stage: SprintStage) {
        self.completed_stages.insert(stage);
    }

    /// Records a stage as explicitly skipped. A skipped stage satisfies
    /// the predecessor rule without counting as completed.
    pub fn skip_stage(&mut self, stage: SprintStage) {
        self.skipped_stages.insert(stage);
    }

    fn is_done_or_skipped(&self, stage: SprintStage) -> bool {
        self.completed_stages.contains(&stage) || self.skipped_stages.contains(&stage)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Intake and diagnostics
    // ─────────────────────────────────────────────────────────────────────

    /// Stores the raw problem text from intake.
    pub fn set_problem_input(&mut self, text: impl Into<String>) {
        self.problem_input = Some(text.into());
    }

    /// Upserts one diagnostic answer.
    pub fn add_diagnostic_response(&mut self, question_id: impl Into<String>, answer: AnswerValue) {
        self.responses.insert(question_id, answer);
    }

    /// Appends a streamed intake chat part to the transcript, clearing
    /// any previous chat error.
    pub fn append_intake_message(&mut self, part: &str) {
        self.intake_transcript.push_str(part);
        self.intake_error = None;
    }

    /// Records an intake chat failure as a human-readable message.
    pub fn set_intake_error(&mut self, message: impl Into<String>) {
        self.intake_error = Some(message.into());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Classification
    // ─────────────────────────────────────────────────────────────────────

    /// Recomputes the decision type from the current diagnostic answers.
    /// Overwrites any user override; re-running diagnostics makes the
    /// computed value authoritative again.
    pub fn run_classification(&mut self) -> DecisionType {
        let factors = DecisionFactors::from_responses(&self.responses);
        let decision_type = classify(&factors);
        tracing::debug!(?factors, ?decision_type, "classified decision");
        self.decision_type = Some(decision_type);
        decision_type
    }

    /// User override of the computed type; authoritative until
    /// diagnostics are re-run.
    pub fn set_decision_type(&mut self, decision_type: DecisionType) {
        self.decision_type = Some(decision_type);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Artifacts
    // ─────────────────────────────────────────────────────────────────────

    /// Generates the problem brief if absent. A no-op while a brief
    /// exists, which is what protects user edits across navigation.
    ///
    /// # Errors
    ///
    /// - `MissingPrerequisite` if the problem text or decision type is
    ///   not set yet
    pub fn generate_problem_brief(&mut self) -> Result<&ProblemBrief, DomainError> {
        if self.problem_brief.is_none() {
            let problem_text = self
                .problem_input
                .as_deref()
                .ok_or_else(|| DomainError::missing_prerequisite("problem input"))?;
            let decision_type = self
                .decision_type
                .ok_or_else(|| DomainError::missing_prerequisite("decision type"))?;
            self.problem_brief = Some(generate_problem_brief(
                problem_text,
                &self.responses,
                decision_type,
            ));
        }
        Ok(self.problem_brief.as_ref().expect("brief just ensured"))
    }

    /// Wholesale replace of the brief (the user edit path).
    pub fn set_problem_brief(&mut self, brief: ProblemBrief) {
        self.problem_brief = Some(brief);
    }

    /// Marks the brief as confirmed.
    ///
    /// # Errors
    ///
    /// - `MissingPrerequisite` if no brief exists
    pub fn confirm_problem_brief(&mut self) -> Result<(), DomainError> {
        match self.problem_brief.as_mut() {
            Some(brief) => {
                brief.confirmed = true;
                Ok(())
            }
            None => Err(DomainError::missing_prerequisite("problem brief")),
        }
    }

    /// Generates the commitment memo if absent, from the brief and the
    /// selected frameworks as of `now`. A no-op while a memo exists.
    ///
    /// # Errors
    ///
    /// - `MissingPrerequisite` if no brief exists
    pub fn generate_commitment_memo(
        &mut self,
        now: Timestamp,
    ) -> Result<&CommitmentMemo, DomainError> {
        if self.commitment_memo.is_none() {
            let brief = self
                .problem_brief
                .as_ref()
                .ok_or_else(|| DomainError::missing_prerequisite("problem brief"))?;
            self.commitment_memo = Some(generate_commitment_memo(
                brief,
                &self.selected_frameworks,
                now,
            ));
        }
        Ok(self.commitment_memo.as_ref().expect("memo just ensured"))
    }

    /// Wholesale replace of the memo (the user edit path).
    pub fn set_commitment_memo(&mut self, memo: CommitmentMemo) {
        self.commitment_memo = Some(memo);
    }

    /// Applies a partial edit to the memo.
    ///
    /// # Errors
    ///
    /// - `MissingPrerequisite` if no memo exists
    pub fn edit_commitment_memo(&mut self, edit: MemoEdit) -> Result<(), DomainError> {
        match self.commitment_memo.as_mut() {
            Some(memo) => {
                memo.apply_edit(edit);
                Ok(())
            }
            None => Err(DomainError::missing_prerequisite("commitment memo")),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Framework selection
    // ─────────────────────────────────────────────────────────────────────

    /// Adds a framework to the selection. Set semantics keyed by id:
    /// selecting an already-selected id is a no-op. Returns whether the
    /// selection changed.
    pub fn select_framework(&mut self, framework: Framework) -> bool {
        if self
            .selected_frameworks
            .iter()
            .any(|f| f.id == framework.id)
        {
            return false;
        }
        self.selected_frameworks.push(framework);
        true
    }

    /// Removes a framework by id. Deselecting an absent id is a no-op.
    /// Returns whether the selection changed.
    pub fn deselect_framework(&mut self, id: &FrameworkId) -> bool {
        let before = self.selected_frameworks.len();
        self.selected_frameworks.retain(|f| &f.id != id);
        self.selected_frameworks.len() != before
    }

    /// Writes the latest recommendation results into state, clearing any
    /// previous error. Last write wins.
    pub fn set_recommendations(&mut self, frameworks: Vec<Framework>) {
        self.recommendations = frameworks;
        self.recommendation_error = None;
    }

    /// Records a recommendation failure as a human-readable message. No
    /// other field is touched or rolled back.
    pub fn set_recommendation_error(&mut self, message: impl Into<String>) {
        self.recommendation_error = Some(message.into());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn session(&self) -> Option<&SprintSession> {
        self.session.as_ref()
    }

    /// Current stage; `None` until a session is initialized or restored.
    pub fn current_stage(&self) -> Option<SprintStage> {
        self.current_stage
    }

    pub fn completed_stages(&self) -> &BTreeSet<SprintStage> {
        &self.completed_stages
    }

    pub fn skipped_stages(&self) -> &BTreeSet<SprintStage> {
        &self.skipped_stages
    }

    pub fn problem_input(&self) -> Option<&str> {
        self.problem_input.as_deref()
    }

    pub fn responses(&self) -> &DiagnosticResponses {
        &self.responses
    }

    pub fn decision_type(&self) -> Option<DecisionType> {
        self.decision_type
    }

    pub fn problem_brief(&self) -> Option<&ProblemBrief> {
        self.problem_brief.as_ref()
    }

    pub fn selected_frameworks(&self) -> &[Framework] {
        &self.selected_frameworks
    }

    pub fn commitment_memo(&self) -> Option<&CommitmentMemo> {
        self.commitment_memo.as_ref()
    }

    pub fn recommendations(&self) -> &[Framework] {
        &self.recommendations
    }

    pub fn recommendation_error(&self) -> Option<&str> {
        self.recommendation_error.as_deref()
    }

    pub fn intake_transcript(&self) -> &str {
        &self.intake_transcript
    }

    pub fn intake_error(&self) -> Option<&str> {
        self.intake_error.as_deref()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────

    /// Serializable view of the full durable state. `None` before a
    /// session exists (nothing worth persisting yet). Transient
    /// collaborator state (recommendations, transcript) is excluded.
    pub fn snapshot(&self) -> Option<SprintSnapshot> {
        let session = self.session.as_ref()?;
        Some(SprintSnapshot {
            session_id: session.id,
            created_at: session.created_at,
            completed: session.completed,
            current_stage: self.current_stage.unwrap_or_else(SprintStage::first),
            completed_stages: self.completed_stages.iter().copied().collect(),
            skipped_stages: self.skipped_stages.iter().copied().collect(),
            problem_input: self.problem_input.clone(),
            responses: self.responses.clone(),
            decision_type: self.decision_type,
            problem_brief: self.problem_brief.clone(),
            selected_frameworks: self.selected_frameworks.clone(),
            commitment_memo: self.commitment_memo.clone(),
        })
    }

    /// Rehydrates an engine from a persisted snapshot.
    pub fn restore(snapshot: SprintSnapshot) -> Self {
        Self {
            session: Some(SprintSession {
                id: snapshot.session_id,
                created_at: snapshot.created_at,
                completed: snapshot.completed,
            }),
            current_stage: Some(snapshot.current_stage),
            completed_stages: snapshot.completed_stages.into_iter().collect(),
            skipped_stages: snapshot.skipped_stages.into_iter().collect(),
            problem_input: snapshot.problem_input,
            responses: snapshot.responses,
            decision_type: snapshot.decision_type,
            problem_brief: snapshot.problem_brief,
            selected_frameworks: snapshot.selected_frameworks,
            commitment_memo: snapshot.commitment_memo,
            recommendations: Vec::new(),
            recommendation_error: None,
            intake_transcript: String::new(),
            intake_error: None,
        }
    }
}
