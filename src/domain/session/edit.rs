//! Edit targets.
//!
//! An edit target points at exactly one previously-collected field. It is
//! set when the user picks an entry from the change menu and consumed when
//! the replacement value arrives, returning the session to confirmation.

use serde::{Deserialize, Serialize};

use crate::domain::schema::Phase;

/// Address of a single field selected for re-entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditTarget {
    /// A patient-record field.
    Patient { key: String },
    /// A field of an already-committed tooth record.
    Tooth { index: usize, key: String },
    /// An examination-record field.
    Examination { key: String },
}

impl EditTarget {
    /// The phase whose schema defines the addressed field.
    pub fn phase(&self) -> Phase {
        match self {
            EditTarget::Patient { .. } => Phase::Patient,
            EditTarget::Tooth { .. } => Phase::Teeth,
            EditTarget::Examination { .. } => Phase::Examination,
        }
    }

    /// The addressed field key.
    pub fn key(&self) -> &str {
        match self {
            EditTarget::Patient { key }
            | EditTarget::Tooth { key, .. }
            | EditTarget::Examination { key } => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_know_their_phase() {
        let t = EditTarget::Tooth {
            index: 2,
            key: "diagnosa".into(),
        };
        assert_eq!(t.phase(), Phase::Teeth);
        assert_eq!(t.key(), "diagnosa");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let t = EditTarget::Patient {
            key: "usia".into(),
        };
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"kind":"patient","key":"usia"}"#);
    }
}
