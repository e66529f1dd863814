//! Field schema - the static definition of what gets collected.
//!
//! Three ordered phase field lists plus the choice catalogs they reference.
//! The traversal engine consults the schema for prompt order, input kind and
//! conditional skipping; it never hard-codes any of them.

pub mod catalog;
mod field;
mod phases;

pub use field::{Choice, ChoiceSet, FieldDefinition, FieldKind, SkipPredicate};
pub use phases::{field_by_key, fields, Phase, EXAMINATION_FIELDS, PATIENT_FIELDS, TEETH_FIELDS};
