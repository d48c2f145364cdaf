// src/app/submit_message.rs

use chrono::Local;
use tracing::debug;

use super::App;
use crate::modules::chat::ChatMode;

impl App {
    /// Moves the input buffer into the chat list as a "You" line.
    pub fn submit_message(&mut self) {
        let text = std::mem::take(&mut self.input);
        if self.chat.add_item(&text, ChatMode::You, &Local::now()) {
            debug!("Chat item added ({} chars)", text.chars().count());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::test_app;
    use crate::modules::chat::ChatMode;

    #[test]
    fn test_submit_appends_you_item_and_clears_input() {
        let mut app = test_app();
        app.input = "Wie geht's?".to_string();

        app.submit_message();

        assert!(app.input.is_empty());
        let item = &app.chat.items()[0];
        assert_eq!(item.mode, ChatMode::You);
        assert_eq!(item.body, "Wie geht's?");
    }

    #[test]
    fn test_blank_submit_only_clears_input() {
        let mut app = test_app();
        app.input = " \n ".to_string();

        app.submit_message();

        assert!(app.input.is_empty());
        assert!(app.chat.is_empty());
    }
}
