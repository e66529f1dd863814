//! Session aggregate.
//!
//! One session per user, exclusively owned by the [`SessionStore`]. The
//! aggregate holds the accumulated records, the per-phase cursors and the
//! optional edit target; all state changes go through validated transitions.
//!
//! # Invariants
//!
//! - Cursors are monotonically non-decreasing within a phase.
//! - `teeth` only grows through [`Session::commit_draft`].
//! - The edit target is set only in `Editing` and cleared on its way back
//!   to `Confirming`, so either the sequential cursor or the edit target
//!   drives dispatch, never both.
//!
//! [`SessionStore`]: super::SessionStore

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;
use crate::domain::record::Record;
use crate::domain::schema::Phase;
use crate::domain::session::{EditTarget, SessionError, SessionState};

/// Patient field pre-filled from the session's doctor name.
const DOCTOR_FIELD_KEY: &str = "dokterPemeriksa";

/// A user's in-progress record collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    state: SessionState,
    doctor_name: Option<String>,
    patient: Record,
    teeth: Vec<Record>,
    tooth_draft: Record,
    examination: Record,
    patient_cursor: usize,
    teeth_cursor: usize,
    examination_cursor: usize,
    edit_target: Option<EditTarget>,
}

impl Session {
    /// Creates a session for a first-time user, waiting for the doctor's name.
    pub fn new() -> Self {
        Self {
            state: SessionState::AwaitingDoctorName,
            doctor_name: None,
            patient: Record::new(),
            teeth: Vec::new(),
            tooth_draft: Record::new(),
            examination: Record::new(),
            patient_cursor: 0,
            teeth_cursor: 0,
            examination_cursor: 0,
            edit_target: None,
        }
    }

    /// Creates a session that starts collecting immediately.
    ///
    /// A carried-over doctor name pre-fills the examining-doctor patient
    /// field, which the traversal engine then passes over without prompting.
    pub fn for_new_record(doctor_name: Option<String>) -> Self {
        let mut session = Self::new();
        session.state = SessionState::CollectingPatient;
        if let Some(name) = doctor_name {
            session.patient.set(DOCTOR_FIELD_KEY, name.clone());
            session.doctor_name = Some(name);
        }
        session
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn doctor_name(&self) -> Option<&str> {
        self.doctor_name.as_deref()
    }

    pub fn patient(&self) -> &Record {
        &self.patient
    }

    /// Committed tooth records, in commit order.
    pub fn teeth(&self) -> &[Record] {
        &self.teeth
    }

    pub fn tooth_draft(&self) -> &Record {
        &self.tooth_draft
    }

    pub fn examination(&self) -> &Record {
        &self.examination
    }

    pub fn edit_target(&self) -> Option<&EditTarget> {
        self.edit_target.as_ref()
    }

    /// Cursor position for a phase's field list.
    pub fn cursor(&self, phase: Phase) -> usize {
        match phase {
            Phase::Patient => self.patient_cursor,
            Phase::Teeth => self.teeth_cursor,
            Phase::Examination => self.examination_cursor,
        }
    }

    /// The record the phase's cursor writes into (the draft, for teeth).
    pub fn record(&self, phase: Phase) -> &Record {
        match phase {
            Phase::Patient => &self.patient,
            Phase::Teeth => &self.tooth_draft,
            Phase::Examination => &self.examination,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Sequential collection
    // ─────────────────────────────────────────────────────────────────────

    /// Stores a value into the phase's active record without moving the
    /// cursor; traversal decides when to advance.
    pub fn write_value(&mut self, phase: Phase, key: &str, value: impl Into<String>) {
        match phase {
            Phase::Patient => self.patient.set(key, value),
            Phase::Teeth => self.tooth_draft.set(key, value),
            Phase::Examination => self.examination.set(key, value),
        }
    }

    pub fn advance_cursor(&mut self, phase: Phase) {
        match phase {
            Phase::Patient => self.patient_cursor += 1,
            Phase::Teeth => self.teeth_cursor += 1,
            Phase::Examination => self.examination_cursor += 1,
        }
    }

    /// Records the doctor's name from the onboarding prompt.
    pub fn record_doctor_name(&mut self, name: &str) -> Result<(), SessionError> {
        self.state = self.state.transition_to(SessionState::Idle)?;
        self.doctor_name = Some(name.to_string());
        self.patient.set(DOCTOR_FIELD_KEY, name);
        Ok(())
    }

    /// Patient list exhausted; move to the teeth phase.
    pub fn begin_teeth(&mut self) -> Result<(), SessionError> {
        self.state = self.state.transition_to(SessionState::CollectingTeeth)?;
        self.teeth_cursor = 0;
        Ok(())
    }

    /// Appends the draft to the committed teeth list if it holds anything.
    ///
    /// An empty draft commits nothing; the loop still terminates cleanly.
    pub fn commit_draft(&mut self) -> bool {
        if self.tooth_draft.is_empty() {
            return false;
        }
        self.teeth.push(std::mem::take(&mut self.tooth_draft));
        true
    }

    /// "Add another tooth" answered yes: commit and restart the teeth pass.
    pub fn restart_tooth_loop(&mut self) {
        self.commit_draft();
        self.teeth_cursor = 0;
    }

    /// "Add another tooth" answered no: commit and move to examination.
    pub fn begin_examination(&mut self) -> Result<(), SessionError> {
        self.commit_draft();
        self.state = self
            .state
            .transition_to(SessionState::CollectingExamination)?;
        self.examination_cursor = 0;
        Ok(())
    }

    /// Examination list exhausted; the summary takes over.
    pub fn begin_confirming(&mut self) -> Result<(), SessionError> {
        self.state = self.state.transition_to(SessionState::Confirming)?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Edit mode
    // ─────────────────────────────────────────────────────────────────────

    /// Enters edit mode at the menu step, before a target is chosen.
    ///
    /// Idempotent: re-entering from `Editing` just drops any chosen target,
    /// putting the session back at the menu step. The change keyboard stays
    /// on screen after the first tap, so repeats do arrive.
    pub fn enter_editing(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Editing {
            self.state = self.state.transition_to(SessionState::Editing)?;
        }
        self.edit_target = None;
        Ok(())
    }

    /// Enters edit mode targeting a single collected field.
    pub fn begin_edit(&mut self, target: EditTarget) -> Result<(), SessionError> {
        self.state = self.state.transition_to(SessionState::Editing)?;
        self.edit_target = Some(target);
        Ok(())
    }

    /// Sets or narrows the edit target. Picking a tooth from the menu and
    /// then one of its fields re-targets without leaving `Editing`.
    pub fn set_edit_target(&mut self, target: EditTarget) -> Result<(), SessionError> {
        if self.state != SessionState::Editing {
            return self.begin_edit(target);
        }
        self.edit_target = Some(target);
        Ok(())
    }

    /// Writes the replacement value into the addressed slot, consumes the
    /// target and returns to confirmation.
    ///
    /// A tooth index that no longer exists is dropped silently; editing one
    /// field never touches any other slot, and the conditional-field skip
    /// rule is not re-evaluated here. Without a target this is a no-op: the
    /// user is still looking at the edit menu.
    pub fn apply_edit(&mut self, value: &str) -> Result<(), SessionError> {
        let Some(target) = self.edit_target.take() else {
            return Ok(());
        };
        match &target {
            EditTarget::Patient { key } => self.patient.set(key.clone(), value),
            EditTarget::Tooth { index, key } => {
                if let Some(tooth) = self.teeth.get_mut(*index) {
                    tooth.set(key.clone(), value);
                }
            }
            EditTarget::Examination { key } => self.examination.set(key.clone(), value),
        }
        self.state = self.state.transition_to(SessionState::Confirming)?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Terminal transitions
    // ─────────────────────────────────────────────────────────────────────

    /// Marks the record committed. The caller deletes the session next.
    pub fn mark_committed(&mut self) -> Result<(), SessionError> {
        self.state = self.state.transition_to(SessionState::Committed)?;
        Ok(())
    }

    /// Marks the session cancelled. Accepted from any live state.
    pub fn mark_cancelled(&mut self) -> Result<(), SessionError> {
        self.state = self.state.transition_to(SessionState::Cancelled)?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
