//! Session state machine.
//!
//! Tracks where a user stands in the collection workflow. The collecting
//! states are strictly ordered; `Editing` always returns to `Confirming`,
//! never forward; `Committed` and `Cancelled` are terminal and the session
//! is deleted in the same dispatch step that reaches them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;
use crate::domain::schema::Phase;

/// Lifecycle state of a collection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// First interaction; waiting for the examining doctor's name.
    #[default]
    AwaitingDoctorName,

    /// Doctor known; waiting for a new-record command.
    Idle,

    /// Walking the patient field list.
    CollectingPatient,

    /// Walking the teeth field list (repeats per tooth).
    CollectingTeeth,

    /// Walking the examination field list.
    CollectingExamination,

    /// Full summary shown; waiting for commit / cancel / change.
    Confirming,

    /// A single edit target is being re-entered.
    Editing,

    /// Record handed to the persistence collaborator.
    Committed,

    /// Session abandoned; nothing persisted.
    Cancelled,
}

impl SessionState {
    /// Returns the active collection phase, if any.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::CollectingPatient => Some(Phase::Patient),
            Self::CollectingTeeth => Some(Phase::Teeth),
            Self::CollectingExamination => Some(Phase::Examination),
            _ => None,
        }
    }

    /// Returns true while the sequential cursor drives dispatch.
    pub fn is_collecting(&self) -> bool {
        self.phase().is_some()
    }

    /// Returns true if a record is mid-collection, which blocks starting a
    /// new one without an explicit cancel.
    pub fn blocks_new_record(&self) -> bool {
        matches!(
            self,
            Self::CollectingPatient
                | Self::CollectingTeeth
                | Self::CollectingExamination
                | Self::Confirming
                | Self::Editing
        )
    }
}

impl StateMachine for SessionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionState::*;
        // Cancellation is unconditionally accepted from any live state.
        if *target == Cancelled && !self.is_terminal() {
            return true;
        }
        matches!(
            (self, target),
            (AwaitingDoctorName, Idle)
                | (Idle, CollectingPatient)
                | (CollectingPatient, CollectingTeeth)
                | (CollectingTeeth, CollectingExamination)
                | (CollectingExamination, Confirming)
                | (Confirming, Editing)
                | (Editing, Confirming)
                | (Confirming, Committed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionState::*;
        match self {
            AwaitingDoctorName => vec![Idle, Cancelled],
            Idle => vec![CollectingPatient, Cancelled],
            CollectingPatient => vec![CollectingTeeth, Cancelled],
            CollectingTeeth => vec![CollectingExamination, Cancelled],
            CollectingExamination => vec![Confirming, Cancelled],
            Confirming => vec![Editing, Committed, Cancelled],
            Editing => vec![Confirming, Cancelled],
            Committed => vec![],
            Cancelled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SessionState; 9] = [
        SessionState::AwaitingDoctorName,
        SessionState::Idle,
        SessionState::CollectingPatient,
        SessionState::CollectingTeeth,
        SessionState::CollectingExamination,
        SessionState::Confirming,
        SessionState::Editing,
        SessionState::Committed,
        SessionState::Cancelled,
    ];

    #[test]
    fn default_state_awaits_doctor_name() {
        assert_eq!(SessionState::default(), SessionState::AwaitingDoctorName);
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&SessionState::CollectingTeeth).unwrap();
        assert_eq!(json, "\"collecting_teeth\"");
    }

    #[test]
    fn collecting_states_map_to_their_phase() {
        assert_eq!(
            SessionState::CollectingPatient.phase(),
            Some(Phase::Patient)
        );
        assert_eq!(SessionState::CollectingTeeth.phase(), Some(Phase::Teeth));
        assert_eq!(
            SessionState::CollectingExamination.phase(),
            Some(Phase::Examination)
        );
        assert_eq!(SessionState::Confirming.phase(), None);
    }

    #[test]
    fn every_live_state_can_cancel() {
        for state in ALL.iter().filter(|s| !s.is_terminal()) {
            assert!(
                state.can_transition_to(&SessionState::Cancelled),
                "{:?} should allow cancel",
                state
            );
        }
    }

    #[test]
    fn terminal_states_allow_nothing() {
        assert!(SessionState::Committed.is_terminal());
        assert!(SessionState::Cancelled.is_terminal());
        assert!(!SessionState::Committed.can_transition_to(&SessionState::Cancelled));
    }

    #[test]
    fn editing_returns_to_confirming_never_forward() {
        let editing = SessionState::Editing;
        assert!(editing.can_transition_to(&SessionState::Confirming));
        assert!(!editing.can_transition_to(&SessionState::Committed));
        assert!(!editing.can_transition_to(&SessionState::CollectingExamination));
    }

    #[test]
    fn phases_cannot_be_skipped() {
        let patient = SessionState::CollectingPatient;
        assert!(!patient.can_transition_to(&SessionState::CollectingExamination));
        assert!(!patient.can_transition_to(&SessionState::Confirming));
    }

    #[test]
    fn confirming_blocks_new_record_but_idle_does_not() {
        assert!(SessionState::Confirming.blocks_new_record());
        assert!(SessionState::Editing.blocks_new_record());
        assert!(!SessionState::Idle.blocks_new_record());
        assert!(!SessionState::AwaitingDoctorName.blocks_new_record());
    }

    #[test]
    fn valid_transitions_matches_can_transition_to() {
        for state in ALL {
            for target in state.valid_transitions() {
                assert!(
                    state.can_transition_to(&target),
                    "{:?} -> {:?}",
                    state,
                    target
                );
            }
        }
    }
}
