// src/app/create_session.rs

use chrono::Local;
use tracing::info;

use super::{App, Overlay, PromptKind};
use crate::i18n::Msg;
use crate::modules::session::{CreateOutcome, SessionDatabase};

impl App {
    /// Closes the open prompt and runs the action it was opened for.
    pub fn confirm_prompt(&mut self) {
        let Some(Overlay::Prompt(prompt)) = self.overlay.take() else {
            return;
        };

        match prompt.kind {
            PromptKind::NewSession => self.create_session(&prompt.value),
            PromptKind::NewDatabase => self.create_database(&prompt.value),
            PromptKind::OpenDatabase => self.open_database(&prompt.value),
        }
    }

    /// Create-session flow: bound the name, reject duplicates, insert and list on top.
    pub fn create_session(&mut self, raw_name: &str) {
        let now = Local::now();
        let max_len = self.config.session.max_name_length;

        match self.database.create_session(raw_name, max_len, &now) {
            Ok(CreateOutcome::Created(session)) => {
                info!("Session {} '{}' added to list", session.id, session.name);
                self.status = self.catalog.format(Msg::SessionCreated, &session.name);
                self.sessions.prepend(session);
                self.sessions.set_all_selected(false);
                self.chat.set_all_selected(false);
            }
            Ok(CreateOutcome::Duplicate(name)) => {
                let body = self.catalog.format(Msg::SessionExists, &name);
                self.show_notice(Msg::Attention, body);
            }
            Ok(CreateOutcome::Empty) => {
                let body = self.catalog.text(Msg::EmptyName).to_string();
                self.show_notice(Msg::Attention, body);
            }
            Err(e) => self.report_store_error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::test_app;
    use crate::app::{Overlay, PromptKind};
    use crate::modules::session::SessionDatabase;

    fn confirm(app: &mut crate::app::App, kind: PromptKind, value: &str) {
        app.open_prompt(kind);
        if let Some(Overlay::Prompt(prompt)) = app.overlay.as_mut() {
            prompt.value = value.to_string();
        }
        app.confirm_prompt();
    }

    #[test]
    fn test_new_session_is_stored_and_listed_on_top() {
        let mut app = test_app();

        confirm(&mut app, PromptKind::NewSession, "Erste");
        confirm(&mut app, PromptKind::NewSession, "Zweite");

        assert!(app.overlay.is_none());
        assert_eq!(app.sessions.rows()[0].session.name, "Zweite");
        assert_eq!(app.sessions.rows()[1].session.name, "Erste");
        assert!(app.database.session_exists("Erste").unwrap());
        assert_eq!(app.status, "Session created: Zweite");
    }

    #[test]
    fn test_trailing_space_then_duplicate_shows_notice() {
        let mut app = test_app();

        confirm(&mut app, PromptKind::NewSession, "Test ");
        assert_eq!(app.sessions.rows()[0].session.name, "Test");

        confirm(&mut app, PromptKind::NewSession, "Test");
        match &app.overlay {
            Some(Overlay::Notice(notice)) => {
                assert_eq!(notice.title, " Attention ");
                assert_eq!(notice.body, "Session: Test\nalready exists.");
            }
            other => panic!("expected notice, got {:?}", other),
        }
        assert_eq!(app.sessions.len(), 1);
        assert_eq!(app.database.count_sessions_named("Test").unwrap(), 1);
    }

    #[test]
    fn test_creation_resets_select_all_headers() {
        let mut app = test_app();
        app.chat.add_item("x", crate::modules::chat::ChatMode::You, &chrono::Local::now());
        app.sessions.set_all_selected(true);
        app.chat.set_all_selected(true);

        app.create_session("Neu");

        assert!(!app.sessions.all_selected);
        assert!(!app.chat.all_selected);
        assert!(app.chat.items().iter().all(|i| !i.selected));
    }

    #[test]
    fn test_long_name_is_truncated() {
        let mut app = test_app();
        app.create_session("abcdefghijklmnopqrst-zu-lang");

        assert_eq!(app.sessions.rows()[0].session.name, "abcdefghijklmnopqrst");
    }

    #[test]
    fn test_blank_name_shows_notice_without_insert() {
        let mut app = test_app();
        app.create_session("   ");

        assert!(matches!(&app.overlay, Some(Overlay::Notice(_))));
        assert!(app.sessions.is_empty());
        assert!(app.database.list_sessions().unwrap().is_empty());
    }
}
