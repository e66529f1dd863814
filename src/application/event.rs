//! Inbound event vocabulary.
//!
//! The transport adapter decodes raw commands and callback payloads into
//! these closed unions before the core sees them; the dispatcher never
//! inspects raw strings.

use serde::{Deserialize, Serialize};

/// A slash-command issued by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Begin or resume a session.
    Start,
    /// Start collecting a new patient record.
    NewPatient,
    /// Abandon the current session.
    Cancel,
    /// Browse the caries-location reference images (read-only, no session).
    CariesGallery,
}

/// A decoded selection event from an inline keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "token", rename_all = "snake_case")]
pub enum SelectionToken {
    /// Summary answered "yes": persist the record.
    ConfirmCommit,
    /// Summary answered "no": discard everything.
    ConfirmCancel,
    /// Summary answered "change": open the edit menu.
    ConfirmChange,
    /// Resume prompt: continue the existing session.
    ResumeContinue,
    /// Resume prompt: replace the session, carrying the doctor name over.
    ResumeStartNew,
    /// Add-another-tooth question.
    AddTooth { more: bool },
    /// A choice picked for the field currently being collected (or edited).
    FieldChoice { field: String, choice: String },
    /// Edit menu: a patient field.
    EditPatient { key: String },
    /// Edit menu: a committed tooth record (leads to a field menu).
    EditTooth { index: usize },
    /// Tooth field menu: one field of a committed tooth.
    EditToothField { index: usize, key: String },
    /// Edit menu: an examination field.
    EditExamination { key: String },
    /// Gallery: show one caries-location reference image.
    CariesImage { key: String },
}
