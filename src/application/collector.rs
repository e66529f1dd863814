//! Repeating tooth-record collection.
//!
//! When the teeth field list runs out, the session is asked whether another
//! tooth should be recorded. Either answer commits a non-empty draft; the
//! answers differ only in whether traversal restarts or the examination
//! phase begins.

use crate::application::event::SelectionToken;
use crate::application::messages;
use crate::application::reply::{MenuOption, Reply};
use crate::application::traversal;
use crate::domain::session::{Session, SessionError};

/// The "add another tooth?" question.
pub fn ask_add_another() -> Reply {
    Reply::menu(
        messages::ASK_ADD_MORE_TEETH,
        vec![
            MenuOption::new("Ya", SelectionToken::AddTooth { more: true }),
            MenuOption::new("Tidak", SelectionToken::AddTooth { more: false }),
        ],
    )
}

/// Applies the answer to the add-another question.
///
/// An empty draft commits nothing either way; the loop terminates cleanly.
pub fn handle_add_another(session: &mut Session, more: bool) -> Result<Vec<Reply>, SessionError> {
    if more {
        session.restart_tooth_loop();
    } else {
        session.begin_examination()?;
    }
    traversal::advance(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::{self, Phase};
    use crate::domain::session::SessionState;

    fn teeth_session() -> Session {
        let mut session = Session::for_new_record(None);
        for field in schema::PATIENT_FIELDS {
            session.write_value(Phase::Patient, field.key, "x");
            session.advance_cursor(Phase::Patient);
        }
        session.begin_teeth().unwrap();
        session
    }

    fn fill_tooth(session: &mut Session) {
        for field in schema::TEETH_FIELDS {
            session.write_value(Phase::Teeth, field.key, "x");
            session.advance_cursor(Phase::Teeth);
        }
    }

    #[test]
    fn yes_commits_and_restarts_from_first_teeth_field() {
        let mut session = teeth_session();
        fill_tooth(&mut session);
        let replies = handle_add_another(&mut session, true).unwrap();
        assert_eq!(session.teeth().len(), 1);
        assert!(session.tooth_draft().is_empty());
        assert_eq!(session.cursor(Phase::Teeth), 0);
        assert_eq!(
            replies[0].text(),
            messages::field_prompt("Gigi yang Dikeluhkan")
        );
    }

    #[test]
    fn no_commits_and_moves_to_examination() {
        let mut session = teeth_session();
        fill_tooth(&mut session);
        let replies = handle_add_another(&mut session, false).unwrap();
        assert_eq!(session.teeth().len(), 1);
        assert_eq!(session.state(), SessionState::CollectingExamination);
        assert_eq!(session.cursor(Phase::Examination), 0);
        assert_eq!(replies[0].text(), "Pilih Oklusi:");
    }

    proptest::proptest! {
        #[test]
        fn after_k_yes_and_one_no_list_holds_k_plus_one(k in 0usize..8) {
            let mut session = teeth_session();
            for _ in 0..k {
                fill_tooth(&mut session);
                handle_add_another(&mut session, true).unwrap();
            }
            fill_tooth(&mut session);
            handle_add_another(&mut session, false).unwrap();
            proptest::prop_assert_eq!(session.teeth().len(), k + 1);
            proptest::prop_assert_eq!(session.state(), SessionState::CollectingExamination);
        }
    }

    #[test]
    fn empty_draft_before_the_final_no_commits_nothing_extra() {
        let mut session = teeth_session();
        fill_tooth(&mut session);
        handle_add_another(&mut session, true).unwrap();
        // Answer no immediately, with nothing in the fresh draft.
        handle_add_another(&mut session, false).unwrap();
        assert_eq!(session.teeth().len(), 1);
        assert_eq!(session.state(), SessionState::CollectingExamination);
    }
}
