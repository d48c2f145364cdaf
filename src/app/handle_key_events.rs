// src/app/handle_key_events.rs

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus, Overlay};
use crate::event::AppEvent;
use crate::i18n::Msg;

/// Step for the `m`/`M` max-token keys.
const MAX_TOKENS_STEP: i64 = 10;

impl App {
    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) {
        match self.overlay {
            Some(Overlay::Notice(_)) => return self.handle_notice_key(key_event),
            Some(Overlay::Prompt(_)) => return self.handle_prompt_key(key_event),
            None => {}
        }

        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char(ch) = key_event.code {
                match ch.to_ascii_lowercase() {
                    'q' | 'c' => self.events.send(AppEvent::Quit),
                    'n' => self.events.send(AppEvent::NewSession),
                    'd' => self.events.send(AppEvent::NewDatabase),
                    'o' => self.events.send(AppEvent::OpenDatabase),
                    's' => self.events.send(AppEvent::Save),
                    'a' => self.events.send(AppEvent::SaveAs),
                    'l' => self.clear_input(),
                    'j' if self.focus == Focus::Input => self.input.push('\n'),
                    _ => {}
                }
                return;
            }
        }

        match key_event.code {
            KeyCode::F(1) => self.events.send(AppEvent::About),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            _ => match self.focus {
                Focus::Sessions => self.handle_sessions_key(key_event),
                Focus::Chat => self.handle_chat_key(key_event),
                Focus::Input => self.handle_input_key(key_event),
            },
        }
    }

    fn handle_notice_key(&mut self, key_event: KeyEvent) {
        if matches!(key_event.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.overlay = None;
        }
    }

    fn handle_prompt_key(&mut self, key_event: KeyEvent) {
        let Some(Overlay::Prompt(prompt)) = self.overlay.as_mut() else {
            return;
        };

        match key_event.code {
            KeyCode::Esc => self.overlay = None,
            KeyCode::Enter => self.confirm_prompt(),
            KeyCode::Backspace => {
                prompt.value.pop();
            }
            KeyCode::Char(ch) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                prompt.value.push(ch);
            }
            _ => {}
        }
    }

    fn handle_sessions_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.sessions.prev(),
            KeyCode::Down | KeyCode::Char('j') => self.sessions.next(),
            KeyCode::Char(' ') => self.sessions.toggle_current(),
            KeyCode::Char('a') => {
                let all = !self.sessions.all_selected;
                self.sessions.set_all_selected(all);
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if self.sessions.remove_current().is_some() {
                    self.status = self.catalog.format(Msg::RemovedEntries, "1");
                }
            }
            KeyCode::Char('x') => {
                let removed = self.sessions.remove_selected();
                self.status = self.catalog.format(Msg::RemovedEntries, &removed.to_string());
            }
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.chat.prev(),
            KeyCode::Down | KeyCode::Char('j') => self.chat.next(),
            KeyCode::Char(' ') => self.chat.toggle(self.chat.cursor),
            KeyCode::Char('a') => {
                let all = !self.chat.all_selected;
                self.chat.set_all_selected(all);
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if self.chat.remove(self.chat.cursor).is_some() {
                    self.status = self.catalog.format(Msg::RemovedEntries, "1");
                }
            }
            KeyCode::Char('x') => {
                let removed = self.chat.remove_selected();
                self.status = self.catalog.format(Msg::RemovedEntries, &removed.to_string());
            }
            KeyCode::Char('t') => self.sampling.adjust_temperature(-0.1),
            KeyCode::Char('T') => self.sampling.adjust_temperature(0.1),
            KeyCode::Char('p') => self.sampling.adjust_top_p(-0.1),
            KeyCode::Char('P') => self.sampling.adjust_top_p(0.1),
            KeyCode::Char('m') => self.sampling.adjust_max_tokens(-MAX_TOKENS_STEP),
            KeyCode::Char('M') => self.sampling.adjust_max_tokens(MAX_TOKENS_STEP),
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Enter => self.events.send(AppEvent::SubmitMessage),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(ch) => self.input.push(ch),
            _ => {}
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.status = self.catalog.text(Msg::InputCleared).to_string();
    }
}
