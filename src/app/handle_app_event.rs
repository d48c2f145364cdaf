// src/app/handle_app_event.rs

use tracing::debug;

use super::{App, PromptKind};
use crate::event::AppEvent;
use crate::i18n::Msg;

impl App {
    /// Runs a queued menu, toolbar or input action.
    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        debug!("App event: {:?}", app_event);

        match app_event {
            AppEvent::NewSession => self.open_prompt(PromptKind::NewSession),
            AppEvent::NewDatabase => self.open_prompt(PromptKind::NewDatabase),
            AppEvent::OpenDatabase => self.open_prompt(PromptKind::OpenDatabase),
            AppEvent::Save | AppEvent::SaveAs => self.save(),
            AppEvent::About => {
                let body = self.catalog.text(Msg::AboutBody).to_string();
                self.show_notice(Msg::AboutTitle, body);
            }
            AppEvent::SubmitMessage => self.submit_message(),
            AppEvent::Quit => self.quit(),
        }
    }

    /// Inserts commit on their own, so saving only reports where the data lives.
    pub fn save(&mut self) {
        let location = self
            .database
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ":memory:".to_string());
        self.status = self.catalog.format(Msg::AllSaved, &location);
    }
}
