//! Field traversal engine.
//!
//! Walks the active phase's field list from the session cursor and decides
//! what to present next. Implemented as an explicit loop so a long field
//! list never grows the stack. Skip predicates are evaluated here and only
//! here, immediately before each prompt.

use tracing::debug;

use crate::application::messages;
use crate::application::reply::{MenuOption, Reply};
use crate::application::{collector, summary};
use crate::application::event::SelectionToken;
use crate::domain::record::NOT_APPLICABLE;
use crate::domain::schema::{self, catalog, FieldDefinition, FieldKind, Phase};
use crate::domain::session::{Session, SessionError};

/// Advances the session to the next thing worth presenting.
///
/// Per iteration: if the phase's field list is exhausted, transition
/// (patient -> teeth, examination -> confirmation; teeth exhaustion asks the
/// add-another question instead). If the cursor field's skip predicate holds,
/// write the sentinel and move on silently. A slot that already holds a value
/// (the carried-over doctor name) is passed over the same way. Otherwise
/// emit the field's prompt and stop.
pub fn advance(session: &mut Session) -> Result<Vec<Reply>, SessionError> {
    loop {
        let Some(phase) = session.state().phase() else {
            // Traversal is only invoked while a collecting phase is active;
            // reaching confirmation hands over to the summary builder.
            return Ok(summary::confirmation(session));
        };

        let fields = schema::fields(phase);
        let cursor = session.cursor(phase);

        let Some(field) = fields.get(cursor) else {
            match phase {
                Phase::Patient => {
                    session.begin_teeth()?;
                    continue;
                }
                Phase::Teeth => return Ok(vec![collector::ask_add_another()]),
                Phase::Examination => {
                    session.begin_confirming()?;
                    return Ok(summary::confirmation(session));
                }
            }
        };

        if field.should_skip(session.record(phase)) {
            debug!(field = field.key, "skip predicate holds, writing sentinel");
            session.write_value(phase, field.key, NOT_APPLICABLE);
            session.advance_cursor(phase);
            continue;
        }

        if session.record(phase).contains(field.key) {
            // Pre-filled (doctor name carry-over); nothing to ask.
            session.advance_cursor(phase);
            continue;
        }

        return Ok(vec![prompt_for(field, false)]);
    }
}

/// Builds the prompt a field's kind calls for.
///
/// `editing` switches text prompts to the "enter the new value" wording;
/// choice menus are identical in both modes.
pub fn prompt_for(field: &FieldDefinition, editing: bool) -> Reply {
    match field.kind {
        FieldKind::Text => {
            if editing {
                Reply::prompt(messages::edit_field_prompt(field.label))
            } else {
                Reply::prompt(messages::field_prompt(field.label))
            }
        }
        FieldKind::SingleChoice(set) => Reply::menu(
            set.prompt,
            set.items
                .iter()
                .map(|choice| {
                    MenuOption::new(
                        choice.label,
                        SelectionToken::FieldChoice {
                            field: field.key.to_string(),
                            choice: choice.key.to_string(),
                        },
                    )
                })
                .collect(),
        ),
        // Boolean fields use the field label as the question and the fixed
        // Ya/Tidak set; the token carries the field key so one payload
        // recovers both field and value.
        FieldKind::BooleanChoice => Reply::menu(
            field.label,
            catalog::YES_NO
                .items
                .iter()
                .map(|choice| {
                    MenuOption::new(
                        choice.label,
                        SelectionToken::FieldChoice {
                            field: field.key.to_string(),
                            choice: choice.key.to_string(),
                        },
                    )
                })
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::SessionState;

    fn collecting_session() -> Session {
        Session::for_new_record(None)
    }

    fn fill_text(session: &mut Session, phase: Phase, key: &str, value: &str) {
        session.write_value(phase, key, value);
        session.advance_cursor(phase);
    }

    #[test]
    fn first_advance_prompts_for_patient_name() {
        let mut session = collecting_session();
        let replies = advance(&mut session).unwrap();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].text(), "Masukkan Nama Pasien:");
    }

    #[test]
    fn advance_visits_patient_fields_in_schema_order() {
        let mut session = collecting_session();
        let mut prompted = Vec::new();
        // Feed text answers; choice fields get their label written directly.
        loop {
            let replies = advance(&mut session).unwrap();
            let reply = &replies[0];
            if reply.text() == messages::ASK_ADD_MORE_TEETH
                || session.state() != SessionState::CollectingPatient
            {
                break;
            }
            prompted.push(reply.text().to_string());
            let field = &schema::PATIENT_FIELDS[session.cursor(Phase::Patient)];
            fill_text(&mut session, Phase::Patient, field.key, "x");
        }
        let expected: Vec<String> = schema::PATIENT_FIELDS
            .iter()
            .map(|f| match f.kind {
                FieldKind::SingleChoice(set) => set.prompt.to_string(),
                _ => messages::field_prompt(f.label),
            })
            .collect();
        assert_eq!(prompted, expected);
    }

    #[test]
    fn carried_over_doctor_field_is_not_prompted() {
        let mut session = Session::for_new_record(Some("drg. Sari".into()));
        // Fill everything up to the doctor field.
        for field in &schema::PATIENT_FIELDS[..schema::PATIENT_FIELDS.len() - 1] {
            fill_text(&mut session, Phase::Patient, field.key, "x");
        }
        let replies = advance(&mut session).unwrap();
        // Doctor field passed over; patient phase complete, teeth phase begins.
        assert_eq!(session.state(), SessionState::CollectingTeeth);
        assert_eq!(replies[0].text(), messages::field_prompt("Gigi yang Dikeluhkan"));
        assert_eq!(session.patient().get("dokterPemeriksa"), Some("drg. Sari"));
    }

    #[test]
    fn healthy_tooth_skips_caries_location_with_sentinel() {
        let mut session = collecting_session();
        for field in schema::PATIENT_FIELDS {
            fill_text(&mut session, Phase::Patient, field.key, "x");
        }
        session.begin_teeth().unwrap();
        fill_text(&mut session, Phase::Teeth, "gigiDikeluhkan", "46");
        fill_text(&mut session, Phase::Teeth, "kondisiGigi", "Gigi Sehat");

        let replies = advance(&mut session).unwrap();
        assert_eq!(session.tooth_draft().get("letakKaries"), Some(NOT_APPLICABLE));
        // Straight to diagnosa, never prompting the skipped field.
        assert_eq!(replies[0].text(), messages::field_prompt("Diagnosa"));
    }

    #[test]
    fn caries_tooth_is_asked_for_location() {
        let mut session = collecting_session();
        for field in schema::PATIENT_FIELDS {
            fill_text(&mut session, Phase::Patient, field.key, "x");
        }
        session.begin_teeth().unwrap();
        fill_text(&mut session, Phase::Teeth, "gigiDikeluhkan", "46");
        fill_text(&mut session, Phase::Teeth, "kondisiGigi", "Karies");

        let replies = advance(&mut session).unwrap();
        assert_eq!(replies[0].text(), "Pilih Letak Karies:");
        assert!(session.tooth_draft().get("letakKaries").is_none());
    }

    #[test]
    fn teeth_exhaustion_asks_to_add_another() {
        let mut session = collecting_session();
        for field in schema::PATIENT_FIELDS {
            fill_text(&mut session, Phase::Patient, field.key, "x");
        }
        session.begin_teeth().unwrap();
        for field in schema::TEETH_FIELDS {
            fill_text(&mut session, Phase::Teeth, field.key, "x");
        }
        let replies = advance(&mut session).unwrap();
        assert_eq!(replies[0].text(), messages::ASK_ADD_MORE_TEETH);
        // Still in the teeth phase until the question is answered.
        assert_eq!(session.state(), SessionState::CollectingTeeth);
    }

    #[test]
    fn examination_exhaustion_reaches_confirmation() {
        let mut session = collecting_session();
        for field in schema::PATIENT_FIELDS {
            fill_text(&mut session, Phase::Patient, field.key, "x");
        }
        session.begin_teeth().unwrap();
        session.write_value(Phase::Teeth, "gigiDikeluhkan", "46");
        session.begin_examination().unwrap();
        for field in schema::EXAMINATION_FIELDS {
            fill_text(&mut session, Phase::Examination, field.key, "x");
        }
        let replies = advance(&mut session).unwrap();
        assert_eq!(session.state(), SessionState::Confirming);
        assert!(replies[0].text().contains("Ringkasan"));
    }

    #[test]
    fn boolean_prompt_tokens_carry_the_field_key() {
        let field = schema::field_by_key(Phase::Examination, "faseGeligi").unwrap();
        let Reply::Menu { options, .. } = prompt_for(field, false) else {
            panic!("expected menu");
        };
        assert_eq!(options.len(), 2);
        for option in &options {
            match &option.token {
                SelectionToken::FieldChoice { field, .. } => assert_eq!(field, "faseGeligi"),
                other => panic!("unexpected token {:?}", other),
            }
        }
    }
}
