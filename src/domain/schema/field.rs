//! Field and choice definitions.
//!
//! The schema owns the order fields are asked in, how each field is answered
//! (free text, single choice, yes/no) and any conditional skipping. Nothing
//! outside this module may hard-code field order.

use crate::domain::record::Record;

/// A selectable option within a single-choice field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Stable key carried in selection tokens.
    pub key: &'static str,
    /// Label shown on the button and stored in the record.
    pub label: &'static str,
}

impl Choice {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// A named, ordered set of choices shared by one or more fields.
#[derive(Debug)]
pub struct ChoiceSet {
    /// Identifier used in selection tokens and logs.
    pub id: &'static str,
    /// Prompt shown above the choice keyboard.
    pub prompt: &'static str,
    pub items: &'static [Choice],
}

impl ChoiceSet {
    /// Looks a choice up by its token key.
    ///
    /// Returns `None` for keys from stale keyboards; callers treat that as
    /// a no-op per the unresolved-choice rule.
    pub fn resolve(&self, key: &str) -> Option<&'static Choice> {
        self.items.iter().find(|c| c.key == key)
    }

    /// Looks a choice up by its stored label.
    pub fn by_label(&self, label: &str) -> Option<&'static Choice> {
        self.items.iter().find(|c| c.label == label)
    }
}

/// How a field's value is captured.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Plain text reply.
    Text,
    /// One selection from a fixed catalog.
    SingleChoice(&'static ChoiceSet),
    /// Ya / Tidak selection rendered from a fixed two-item set.
    BooleanChoice,
}

/// Predicate deciding whether a field should be skipped for the current draft.
pub type SkipPredicate = fn(&Record) -> bool;

/// One schema-defined field within a collection phase.
#[derive(Debug, Clone, Copy)]
pub struct FieldDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// When the predicate holds for the in-progress draft, the field is not
    /// prompted and the `-` sentinel is written instead.
    pub skip_if: Option<SkipPredicate>,
}

impl FieldDefinition {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            skip_if: None,
        }
    }

    pub const fn single_choice(
        key: &'static str,
        label: &'static str,
        choices: &'static ChoiceSet,
    ) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::SingleChoice(choices),
            skip_if: None,
        }
    }

    pub const fn boolean(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::BooleanChoice,
            skip_if: None,
        }
    }

    pub const fn with_skip(mut self, predicate: SkipPredicate) -> Self {
        self.skip_if = Some(predicate);
        self
    }

    /// Evaluates the skip predicate against the current draft.
    pub fn should_skip(&self, draft: &Record) -> bool {
        self.skip_if.map(|p| p(draft)).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static COLORS: ChoiceSet = ChoiceSet {
        id: "colors",
        prompt: "Pilih warna:",
        items: &[Choice::new("r", "Merah"), Choice::new("b", "Biru")],
    };

    #[test]
    fn resolve_finds_choice_by_key() {
        let choice = COLORS.resolve("r").unwrap();
        assert_eq!(choice.label, "Merah");
    }

    #[test]
    fn resolve_returns_none_for_unknown_key() {
        assert!(COLORS.resolve("x").is_none());
    }

    #[test]
    fn by_label_finds_choice() {
        assert_eq!(COLORS.by_label("Biru").unwrap().key, "b");
    }

    #[test]
    fn field_without_predicate_never_skips() {
        let field = FieldDefinition::text("nama", "Nama");
        assert!(!field.should_skip(&Record::new()));
    }

    #[test]
    fn field_with_predicate_skips_when_it_holds() {
        fn always(_: &Record) -> bool {
            true
        }
        let field = FieldDefinition::text("x", "X").with_skip(always);
        assert!(field.should_skip(&Record::new()));
    }
}
