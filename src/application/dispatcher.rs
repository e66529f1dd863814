//! Input dispatcher.
//!
//! Routes commands, free text and decoded selection tokens into the right
//! session slot, then hands control to the traversal engine. Edit mode
//! bypasses the sequential cursor entirely: the value goes to the recorded
//! edit target and the session returns to confirmation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::event::{Command, SelectionToken};
use crate::application::messages;
use crate::application::reply::{MenuOption, Reply};
use crate::application::{collector, summary, traversal};
use crate::domain::foundation::UserId;
use crate::domain::schema::{self, catalog, FieldKind, Phase};
use crate::domain::session::{EditTarget, Session, SessionError, SessionState, SessionStore};
use crate::ports::RecordSink;

/// Stateless dispatch over a caller-owned [`SessionStore`].
///
/// One inbound event is fully processed before the next is accepted; all
/// session mutation happens synchronously, the only awaits are the sink
/// calls at commit time.
pub struct Dispatcher {
    sink: Arc<dyn RecordSink>,
}

impl Dispatcher {
    pub fn new(sink: Arc<dyn RecordSink>) -> Self {
        Self { sink }
    }

    /// Handles a slash-command.
    pub async fn handle_command(
        &self,
        store: &mut SessionStore,
        user: UserId,
        command: Command,
    ) -> Result<Vec<Reply>, SessionError> {
        debug!(%user, ?command, "command received");
        match command {
            Command::Start => Ok(self.handle_start(store, user)),
            Command::NewPatient => self.handle_new_patient(store, user),
            Command::Cancel => {
                let mut session = store.delete(user).ok_or(SessionError::NoActiveSession)?;
                session.mark_cancelled()?;
                info!(%user, "session cancelled");
                Ok(vec![Reply::prompt(messages::CANCELLED)])
            }
            Command::CariesGallery => Ok(vec![caries_gallery_menu()]),
        }
    }

    /// Handles a free-text message.
    ///
    /// Text arriving while no session exists, or while the session expects
    /// a selection, is ignored.
    pub async fn handle_text(
        &self,
        store: &mut SessionStore,
        user: UserId,
        text: &str,
    ) -> Result<Vec<Reply>, SessionError> {
        let Some(session) = store.get_mut(user) else {
            return Ok(Vec::new());
        };

        match session.state() {
            SessionState::AwaitingDoctorName => {
                session.record_doctor_name(text)?;
                Ok(vec![Reply::prompt(messages::welcome(text))])
            }
            SessionState::Editing => {
                if session.edit_target().is_none() {
                    return Ok(Vec::new());
                }
                session.apply_edit(text)?;
                Ok(summary::confirmation(session))
            }
            state if state.is_collecting() => {
                let Some(phase) = state.phase() else {
                    return Ok(Vec::new());
                };
                let Some(field) = schema::fields(phase).get(session.cursor(phase)) else {
                    // Teeth list exhausted; the add-another keyboard is live.
                    return Ok(Vec::new());
                };
                if !matches!(field.kind, FieldKind::Text) {
                    return Ok(Vec::new());
                }
                session.write_value(phase, field.key, text);
                session.advance_cursor(phase);
                traversal::advance(session)
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Handles a decoded selection token.
    pub async fn handle_selection(
        &self,
        store: &mut SessionStore,
        user: UserId,
        token: SelectionToken,
    ) -> Result<Vec<Reply>, SessionError> {
        debug!(%user, ?token, "selection received");
        match token {
            SelectionToken::CariesImage { key } => Ok(vec![caries_image_reply(&key)]),
            SelectionToken::ResumeContinue => self.handle_resume_continue(store, user),
            SelectionToken::ResumeStartNew => {
                let doctor = store
                    .get(user)
                    .and_then(|s| s.doctor_name().map(str::to_string));
                let session = store.create(user, Session::for_new_record(doctor));
                traversal::advance(session)
            }
            SelectionToken::ConfirmCommit => self.handle_commit(store, user).await,
            SelectionToken::ConfirmCancel => {
                let mut session = store.delete(user).ok_or(SessionError::NoActiveSession)?;
                session.mark_cancelled()?;
                info!(%user, "record discarded at confirmation");
                Ok(vec![Reply::prompt(messages::CANCELLED)])
            }
            SelectionToken::ConfirmChange => {
                let session = store.get_mut(user).ok_or(SessionError::NoActiveSession)?;
                session.enter_editing()?;
                Ok(vec![summary::edit_menu(session)])
            }
            SelectionToken::AddTooth { more } => {
                let Some(session) = store.get_mut(user) else {
                    return Ok(Vec::new());
                };
                if session.state() != SessionState::CollectingTeeth {
                    debug!(%user, "stale add-tooth answer ignored");
                    return Ok(Vec::new());
                }
                collector::handle_add_another(session, more)
            }
            SelectionToken::EditPatient { key } => {
                self.select_edit_target(store, user, Phase::Patient, None, key)
            }
            SelectionToken::EditTooth { index } => {
                let Some(session) = store.get_mut(user) else {
                    return Ok(Vec::new());
                };
                if !in_edit_flow(session.state()) || index >= session.teeth().len() {
                    return Ok(Vec::new());
                }
                Ok(vec![summary::tooth_field_menu(index)])
            }
            SelectionToken::EditToothField { index, key } => {
                self.select_edit_target(store, user, Phase::Teeth, Some(index), key)
            }
            SelectionToken::EditExamination { key } => {
                self.select_edit_target(store, user, Phase::Examination, None, key)
            }
            SelectionToken::FieldChoice { field, choice } => {
                self.handle_field_choice(store, user, &field, &choice)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Command details
    // ─────────────────────────────────────────────────────────────────────

    fn handle_start(&self, store: &mut SessionStore, user: UserId) -> Vec<Reply> {
        if store.exists(user) {
            return vec![Reply::menu(
                messages::CONTINUE_SESSION,
                vec![
                    MenuOption::new("Lanjutkan", SelectionToken::ResumeContinue),
                    MenuOption::new("Mulai Baru", SelectionToken::ResumeStartNew),
                ],
            )];
        }
        store.create(user, Session::new());
        info!(%user, "session created, awaiting doctor name");
        vec![Reply::prompt(messages::ASK_DOCTOR_NAME)]
    }

    fn handle_new_patient(
        &self,
        store: &mut SessionStore,
        user: UserId,
    ) -> Result<Vec<Reply>, SessionError> {
        if let Some(existing) = store.get(user) {
            if existing.state().blocks_new_record() {
                return Err(SessionError::DuplicateSessionRequest);
            }
        }
        let doctor = store
            .get(user)
            .and_then(|s| s.doctor_name().map(str::to_string));
        let session = store.create(user, Session::for_new_record(doctor));
        info!(%user, "new record started");
        traversal::advance(session)
    }

    fn handle_resume_continue(
        &self,
        store: &mut SessionStore,
        user: UserId,
    ) -> Result<Vec<Reply>, SessionError> {
        let session = store.get_mut(user).ok_or(SessionError::NoActiveSession)?;
        match session.state() {
            SessionState::AwaitingDoctorName => {
                Ok(vec![Reply::prompt(messages::ASK_DOCTOR_NAME)])
            }
            SessionState::Idle => {
                let name = session.doctor_name().unwrap_or_default().to_string();
                Ok(vec![Reply::prompt(messages::welcome(&name))])
            }
            state if state.is_collecting() => traversal::advance(session),
            _ => Ok(summary::confirmation(session)),
        }
    }

    async fn handle_commit(
        &self,
        store: &mut SessionStore,
        user: UserId,
    ) -> Result<Vec<Reply>, SessionError> {
        let session = store.get_mut(user).ok_or(SessionError::NoActiveSession)?;
        if session.state() != SessionState::Confirming {
            debug!(%user, state = ?session.state(), "stale commit ignored");
            return Ok(Vec::new());
        }
        match self
            .sink
            .append_record(session.patient(), session.teeth(), session.examination())
            .await
        {
            Ok(receipt) => {
                info!(%user, record_id = %receipt.record_id, rows = receipt.rows_inserted, "record persisted");
                session.mark_committed()?;
                store.delete(user);
                Ok(vec![Reply::prompt(messages::SUCCESS)])
            }
            Err(error) => {
                // Session kept in Confirming so commit can be retried.
                warn!(%user, %error, "append failed, session preserved");
                Err(SessionError::PersistenceFailure {
                    reason: error.to_string(),
                })
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Edit flow
    // ─────────────────────────────────────────────────────────────────────

    fn select_edit_target(
        &self,
        store: &mut SessionStore,
        user: UserId,
        phase: Phase,
        tooth_index: Option<usize>,
        key: String,
    ) -> Result<Vec<Reply>, SessionError> {
        let Some(session) = store.get_mut(user) else {
            return Ok(Vec::new());
        };
        if !in_edit_flow(session.state()) {
            debug!(%user, "edit selection outside edit flow ignored");
            return Ok(Vec::new());
        }
        let Some(field) = schema::field_by_key(phase, &key) else {
            debug!(%user, %key, "unknown edit target ignored");
            return Ok(Vec::new());
        };
        if let Some(index) = tooth_index {
            if index >= session.teeth().len() {
                return Ok(Vec::new());
            }
        }
        let target = match (phase, tooth_index) {
            (Phase::Patient, _) => EditTarget::Patient { key },
            (Phase::Teeth, Some(index)) => EditTarget::Tooth { index, key },
            (Phase::Teeth, None) => {
                // A tooth edit must address a concrete tooth.
                debug!(%user, "tooth edit without an index ignored");
                return Ok(Vec::new());
            }
            (Phase::Examination, _) => EditTarget::Examination { key },
        };
        session.set_edit_target(target)?;
        Ok(vec![traversal::prompt_for(field, true)])
    }

    fn handle_field_choice(
        &self,
        store: &mut SessionStore,
        user: UserId,
        field_key: &str,
        choice_key: &str,
    ) -> Result<Vec<Reply>, SessionError> {
        let Some(session) = store.get_mut(user) else {
            return Ok(Vec::new());
        };

        // Edit mode: the value goes to the recorded target, not the cursor.
        if session.state() == SessionState::Editing {
            let Some(target) = session.edit_target() else {
                return Ok(Vec::new());
            };
            if target.key() != field_key {
                debug!(%user, field_key, "choice for non-target field ignored");
                return Ok(Vec::new());
            }
            let phase = target.phase();
            let Some(label) = resolve_choice_label(phase, field_key, choice_key) else {
                debug!(%user, field_key, choice_key, "unresolved edit choice ignored");
                return Ok(Vec::new());
            };
            session.apply_edit(&label)?;
            return Ok(summary::confirmation(session));
        }

        // Sequential mode: the token must address the cursor field.
        let Some(phase) = session.state().phase() else {
            return Ok(Vec::new());
        };
        let Some(field) = schema::fields(phase).get(session.cursor(phase)) else {
            return Ok(Vec::new());
        };
        if field.key != field_key {
            debug!(%user, expected = field.key, got = field_key, "stale keyboard ignored");
            return Ok(Vec::new());
        }
        let Some(label) = resolve_choice_label(phase, field_key, choice_key) else {
            debug!(%user, field_key, choice_key, "unresolved choice ignored");
            return Ok(Vec::new());
        };
        session.write_value(phase, field.key, label);
        session.advance_cursor(phase);
        traversal::advance(session)
    }
}

/// States in which edit-menu selections are live.
fn in_edit_flow(state: SessionState) -> bool {
    matches!(state, SessionState::Editing | SessionState::Confirming)
}

/// Resolves a choice key against the field's choice set, returning the
/// stored label. `None` means a stale or unknown key (silently dropped).
fn resolve_choice_label(phase: Phase, field_key: &str, choice_key: &str) -> Option<String> {
    let field = schema::field_by_key(phase, field_key)?;
    let set = match field.kind {
        FieldKind::SingleChoice(set) => set,
        FieldKind::BooleanChoice => &catalog::YES_NO,
        FieldKind::Text => return None,
    };
    set.resolve(choice_key).map(|c| c.label.to_string())
}

fn caries_gallery_menu() -> Reply {
    Reply::menu(
        messages::SELECT_CARIES_GALLERY,
        catalog::CARIES_CARDS
            .iter()
            .map(|card| {
                MenuOption::new(
                    card.label,
                    SelectionToken::CariesImage {
                        key: card.key.to_string(),
                    },
                )
            })
            .collect(),
    )
}

fn caries_image_reply(key: &str) -> Reply {
    match catalog::caries_card(key) {
        Some(card) => Reply::image(card.file, messages::caries_caption(card.label)),
        None => Reply::prompt(messages::CARIES_NOT_FOUND),
    }
}
