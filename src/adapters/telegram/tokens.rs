//! Callback-data codec.
//!
//! Telegram callback data is a short opaque string chosen by us. Every
//! payload round-trips through [`SelectionToken`]; an unrecognized string
//! decodes to `None` and the event is dropped before reaching the core.
//!
//! Field keys are camelCase and never contain `_`, so `field_<key>_<choice>`
//! splits unambiguously at the first `_` after the prefix even though choice
//! keys (`normal_bite`) do contain underscores.

use crate::application::SelectionToken;

/// Renders a token as callback data.
pub fn encode_token(token: &SelectionToken) -> String {
    match token {
        SelectionToken::ConfirmCommit => "confirm_yes".to_string(),
        SelectionToken::ConfirmCancel => "confirm_no".to_string(),
        SelectionToken::ConfirmChange => "confirm_change".to_string(),
        SelectionToken::ResumeContinue => "resume_continue".to_string(),
        SelectionToken::ResumeStartNew => "resume_start_new".to_string(),
        SelectionToken::AddTooth { more: true } => "add_teeth_yes".to_string(),
        SelectionToken::AddTooth { more: false } => "add_teeth_no".to_string(),
        SelectionToken::FieldChoice { field, choice } => format!("field_{field}_{choice}"),
        SelectionToken::EditPatient { key } => format!("edit_patient_{key}"),
        SelectionToken::EditTooth { index } => format!("edit_tooth_{index}"),
        SelectionToken::EditToothField { index, key } => {
            format!("edit_toothfield_{index}_{key}")
        }
        SelectionToken::EditExamination { key } => format!("edit_exam_{key}"),
        SelectionToken::CariesImage { key } => format!("karies_{key}"),
    }
}

/// Parses callback data back into a token.
pub fn decode_token(data: &str) -> Option<SelectionToken> {
    match data {
        "confirm_yes" => return Some(SelectionToken::ConfirmCommit),
        "confirm_no" => return Some(SelectionToken::ConfirmCancel),
        "confirm_change" => return Some(SelectionToken::ConfirmChange),
        "resume_continue" => return Some(SelectionToken::ResumeContinue),
        "resume_start_new" => return Some(SelectionToken::ResumeStartNew),
        "add_teeth_yes" => return Some(SelectionToken::AddTooth { more: true }),
        "add_teeth_no" => return Some(SelectionToken::AddTooth { more: false }),
        _ => {}
    }
    if let Some(rest) = data.strip_prefix("field_") {
        let (field, choice) = rest.split_once('_')?;
        return Some(SelectionToken::FieldChoice {
            field: field.to_string(),
            choice: choice.to_string(),
        });
    }
    if let Some(rest) = data.strip_prefix("edit_patient_") {
        return Some(SelectionToken::EditPatient {
            key: rest.to_string(),
        });
    }
    // "edit_toothfield_" must be tried before "edit_tooth_".
    if let Some(rest) = data.strip_prefix("edit_toothfield_") {
        let (index, key) = rest.split_once('_')?;
        return Some(SelectionToken::EditToothField {
            index: index.parse().ok()?,
            key: key.to_string(),
        });
    }
    if let Some(rest) = data.strip_prefix("edit_tooth_") {
        return Some(SelectionToken::EditTooth {
            index: rest.parse().ok()?,
        });
    }
    if let Some(rest) = data.strip_prefix("edit_exam_") {
        return Some(SelectionToken::EditExamination {
            key: rest.to_string(),
        });
    }
    if let Some(rest) = data.strip_prefix("karies_") {
        return Some(SelectionToken::CariesImage {
            key: rest.to_string(),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fixed_payloads_decode() {
        assert_eq!(decode_token("confirm_yes"), Some(SelectionToken::ConfirmCommit));
        assert_eq!(
            decode_token("add_teeth_no"),
            Some(SelectionToken::AddTooth { more: false })
        );
    }

    #[test]
    fn field_choice_splits_at_the_first_underscore_only() {
        assert_eq!(
            decode_token("field_oklusi_normal_bite"),
            Some(SelectionToken::FieldChoice {
                field: "oklusi".into(),
                choice: "normal_bite".into(),
            })
        );
    }

    #[test]
    fn tooth_field_payload_carries_index_and_key() {
        assert_eq!(
            decode_token("edit_toothfield_2_diagnosa"),
            Some(SelectionToken::EditToothField {
                index: 2,
                key: "diagnosa".into(),
            })
        );
        // The shorter prefix must not swallow it.
        assert_eq!(
            decode_token("edit_tooth_2"),
            Some(SelectionToken::EditTooth { index: 2 })
        );
    }

    #[test]
    fn garbage_decodes_to_none() {
        assert_eq!(decode_token(""), None);
        assert_eq!(decode_token("confirm_maybe"), None);
        assert_eq!(decode_token("edit_tooth_abc"), None);
        assert_eq!(decode_token("field_oklusi"), None);
    }

    fn token_strategy() -> impl Strategy<Value = SelectionToken> {
        let key = "[a-zA-Z][a-zA-Z0-9]{0,15}";
        let choice = "[a-z][a-z_]{0,15}";
        prop_oneof![
            Just(SelectionToken::ConfirmCommit).boxed(),
            Just(SelectionToken::ConfirmCancel).boxed(),
            Just(SelectionToken::ConfirmChange).boxed(),
            Just(SelectionToken::ResumeContinue).boxed(),
            Just(SelectionToken::ResumeStartNew).boxed(),
            any::<bool>()
                .prop_map(|more| SelectionToken::AddTooth { more })
                .boxed(),
            (key, choice)
                .prop_map(|(field, choice)| SelectionToken::FieldChoice { field, choice })
                .boxed(),
            key.prop_map(|key| SelectionToken::EditPatient { key }).boxed(),
            (0usize..32)
                .prop_map(|index| SelectionToken::EditTooth { index })
                .boxed(),
            (0usize..32, key)
                .prop_map(|(index, key)| SelectionToken::EditToothField { index, key })
                .boxed(),
            key.prop_map(|key| SelectionToken::EditExamination { key }).boxed(),
            key.prop_map(|key| SelectionToken::CariesImage { key }).boxed(),
        ]
    }

    proptest! {
        // Field keys never contain underscores, which the codec relies on.
        #[test]
        fn every_token_round_trips(token in token_strategy()) {
            prop_assert_eq!(decode_token(&encode_token(&token)), Some(token));
        }
    }
}
