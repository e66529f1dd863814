//! Summary and confirmation building.
//!
//! Renders the accumulated record in fixed schema order and produces the
//! commit / cancel / change menu, plus the edit-target menus behind
//! "change".

use crate::application::event::SelectionToken;
use crate::application::messages;
use crate::application::reply::{MenuOption, Reply};
use crate::domain::record::NOT_APPLICABLE;
use crate::domain::schema::{EXAMINATION_FIELDS, PATIENT_FIELDS, TEETH_FIELDS};
use crate::domain::session::Session;

/// Renders the full summary text.
///
/// Order is fixed: patient fields, each committed tooth, examination fields.
/// Unset values show the `-` placeholder; a conditional tooth field already
/// holding the skip sentinel is omitted rather than re-announced as unset.
pub fn render(session: &Session) -> String {
    let mut text = String::from(messages::SUMMARY_HEADER);

    text.push_str("*Data Pasien:*\n");
    for field in PATIENT_FIELDS {
        text.push_str(&format!(
            "• {}: {}\n",
            field.label,
            session.patient().get_or_placeholder(field.key)
        ));
    }

    text.push_str("\n*Data Gigi:*\n");
    for (index, tooth) in session.teeth().iter().enumerate() {
        text.push_str(&format!("\n_Gigi {}:_\n", index + 1));
        for field in TEETH_FIELDS {
            let skipped =
                field.skip_if.is_some() && tooth.get(field.key) == Some(NOT_APPLICABLE);
            if skipped {
                continue;
            }
            text.push_str(&format!(
                "• {}: {}\n",
                field.label,
                tooth.get_or_placeholder(field.key)
            ));
        }
    }

    text.push_str("\n*Data Pemeriksaan:*\n");
    for field in EXAMINATION_FIELDS {
        text.push_str(&format!(
            "• {}: {}\n",
            field.label,
            session.examination().get_or_placeholder(field.key)
        ));
    }

    text.push_str(messages::SUMMARY_QUESTION);
    text
}

/// The summary plus its commit / cancel / change menu.
pub fn confirmation(session: &Session) -> Vec<Reply> {
    vec![Reply::menu(
        render(session),
        vec![
            MenuOption::new("Yes", SelectionToken::ConfirmCommit),
            MenuOption::new("No", SelectionToken::ConfirmCancel),
            MenuOption::new("Change", SelectionToken::ConfirmChange),
        ],
    )]
}

/// The edit menu: every patient field, committed tooth and examination
/// field as an individually selectable target.
pub fn edit_menu(session: &Session) -> Reply {
    let mut options = Vec::new();
    for field in PATIENT_FIELDS {
        options.push(MenuOption::new(
            format!("📋 {}", field.label),
            SelectionToken::EditPatient {
                key: field.key.to_string(),
            },
        ));
    }
    for (index, tooth) in session.teeth().iter().enumerate() {
        options.push(MenuOption::new(
            format!(
                "🦷 Gigi {}: {}",
                index + 1,
                tooth.get_or_placeholder("gigiDikeluhkan")
            ),
            SelectionToken::EditTooth { index },
        ));
    }
    for field in EXAMINATION_FIELDS {
        options.push(MenuOption::new(
            format!("🔬 {}", field.label),
            SelectionToken::EditExamination {
                key: field.key.to_string(),
            },
        ));
    }
    Reply::menu(messages::SELECT_FIELD_TO_EDIT, options)
}

/// The second-step menu for a tooth picked from the edit menu.
pub fn tooth_field_menu(index: usize) -> Reply {
    Reply::menu(
        messages::SELECT_TOOTH_FIELD_TO_EDIT,
        TEETH_FIELDS
            .iter()
            .map(|field| {
                MenuOption::new(
                    field.label,
                    SelectionToken::EditToothField {
                        index,
                        key: field.key.to_string(),
                    },
                )
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::Phase;

    fn confirming_session() -> Session {
        let mut session = Session::for_new_record(Some("drg. Sari".into()));
        session.write_value(Phase::Patient, "namaPasien", "Budi");
        session.begin_teeth().unwrap();
        session.write_value(Phase::Teeth, "gigiDikeluhkan", "46");
        session.write_value(Phase::Teeth, "kondisiGigi", "Gigi Sehat");
        session.write_value(Phase::Teeth, "letakKaries", NOT_APPLICABLE);
        session.write_value(Phase::Teeth, "diagnosa", "sehat");
        session.begin_examination().unwrap();
        session.write_value(Phase::Examination, "oklusi", "Normal Bite");
        session.begin_confirming().unwrap();
        session
    }

    #[test]
    fn summary_lists_sections_in_fixed_order() {
        let session = confirming_session();
        let text = render(&session);
        let pasien = text.find("*Data Pasien:*").unwrap();
        let gigi = text.find("*Data Gigi:*").unwrap();
        let pemeriksaan = text.find("*Data Pemeriksaan:*").unwrap();
        assert!(pasien < gigi && gigi < pemeriksaan);
        assert!(text.contains("• Nama Pasien: Budi"));
        assert!(text.contains("• Dokter Pemeriksa: drg. Sari"));
    }

    #[test]
    fn unset_fields_render_placeholder() {
        let session = confirming_session();
        let text = render(&session);
        assert!(text.contains("• Alamat: -"));
    }

    #[test]
    fn skipped_conditional_field_is_omitted_not_shown_unset() {
        let session = confirming_session();
        let text = render(&session);
        assert!(!text.contains("Letak Karies"));
        // A genuinely unset teeth field still shows the placeholder.
        assert!(text.contains("• Tindakan: -"));
    }

    #[test]
    fn confirmation_menu_offers_three_outcomes() {
        let session = confirming_session();
        let replies = confirmation(&session);
        let Reply::Menu { options, .. } = &replies[0] else {
            panic!("expected menu");
        };
        let tokens: Vec<_> = options.iter().map(|o| o.token.clone()).collect();
        assert_eq!(
            tokens,
            vec![
                SelectionToken::ConfirmCommit,
                SelectionToken::ConfirmCancel,
                SelectionToken::ConfirmChange,
            ]
        );
    }

    #[test]
    fn edit_menu_enumerates_every_target() {
        let session = confirming_session();
        let Reply::Menu { options, .. } = edit_menu(&session) else {
            panic!("expected menu");
        };
        assert_eq!(
            options.len(),
            PATIENT_FIELDS.len() + session.teeth().len() + EXAMINATION_FIELDS.len()
        );
        assert!(options
            .iter()
            .any(|o| o.token == SelectionToken::EditTooth { index: 0 }));
    }

    #[test]
    fn tooth_field_menu_targets_the_picked_tooth() {
        let Reply::Menu { options, .. } = tooth_field_menu(1) else {
            panic!("expected menu");
        };
        assert_eq!(options.len(), TEETH_FIELDS.len());
        for option in &options {
            match &option.token {
                SelectionToken::EditToothField { index, .. } => assert_eq!(*index, 1),
                other => panic!("unexpected token {:?}", other),
            }
        }
    }
}
