use chrono::{DateTime, Local};

use super::{ChatItem, ChatMode};

#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    items: Vec<ChatItem>,
    pub cursor: usize,
    pub all_selected: bool,
}

impl ChatLog {
    pub fn items(&self) -> &[ChatItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `text` under a fresh date/time header. Blank text is dropped.
    pub fn add_item(&mut self, text: &str, mode: ChatMode, now: &DateTime<Local>) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.items.push(ChatItem::new(mode, text.to_string(), now));
        self.cursor = self.items.len() - 1;
        true
    }

    pub fn next(&mut self) {
        if self.cursor < self.items.len().saturating_sub(1) {
            self.cursor += 1;
        }
    }

    pub fn prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.selected = !item.selected;
        }
    }

    pub fn set_all_selected(&mut self, selected: bool) {
        self.all_selected = selected;
        for item in &mut self.items {
            item.selected = selected;
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<ChatItem> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.clamp_cursor();
        Some(item)
    }

    pub fn remove_selected(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.selected);
        self.all_selected = false;
        self.clamp_cursor();
        before - self.items.len()
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.items.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 2, 29, 23, 59, 1).unwrap()
    }

    #[test]
    fn test_blank_text_is_ignored() {
        let mut log = ChatLog::default();

        assert!(!log.add_item("", ChatMode::You, &now()));
        assert!(!log.add_item("  \n\t", ChatMode::You, &now()));
        assert!(log.is_empty());
    }

    #[test]
    fn test_item_gets_timestamp_header() {
        let mut log = ChatLog::default();
        assert!(log.add_item("Zeile 1\nZeile 2", ChatMode::You, &now()));

        let item = &log.items()[0];
        assert_eq!(item.date, "2024-02-29");
        assert_eq!(item.time, "23:59:01");
        assert_eq!(item.body, "Zeile 1\nZeile 2");
        assert!(!item.selected);
    }

    #[test]
    fn test_select_all_sets_every_item() {
        let mut log = ChatLog::default();
        for text in ["a", "b", "c"] {
            log.add_item(text, ChatMode::You, &now());
        }
        log.toggle(1);

        log.set_all_selected(true);
        assert!(log.items().iter().all(|i| i.selected));

        log.set_all_selected(false);
        assert!(log.items().iter().all(|i| !i.selected));
    }

    #[test]
    fn test_remove_selected_removes_only_marked() {
        let mut log = ChatLog::default();
        for text in ["a", "b", "c", "d"] {
            log.add_item(text, ChatMode::You, &now());
        }
        log.toggle(0);
        log.toggle(2);

        assert_eq!(log.remove_selected(), 2);
        let bodies: Vec<&str> = log.items().iter().map(|i| i.body.as_str()).collect();
        assert_eq!(bodies, vec!["b", "d"]);
        assert_eq!(log.cursor, 1);
    }

    #[test]
    fn test_mode_label() {
        assert_eq!(ChatMode::You.label("Du"), "Du");
        assert_eq!(ChatMode::Assistant("Tutor".into()).label("Du"), "Tutor");
    }
}
