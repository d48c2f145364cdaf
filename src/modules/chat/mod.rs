// src/modules/chat/mod.rs

mod chat_log;

pub use chat_log::ChatLog;

use chrono::{DateTime, Local};

use crate::util::clock;

/// Who a chat line belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatMode {
    /// The local user, labelled "Du" in the German catalog.
    You,
    Assistant(String),
}

impl ChatMode {
    pub fn label<'a>(&'a self, you_label: &'a str) -> &'a str {
        match self {
            ChatMode::You => you_label,
            ChatMode::Assistant(name) => name,
        }
    }
}

/// One entry of the right-hand chat list. Lives in memory only.
#[derive(Debug, Clone)]
pub struct ChatItem {
    pub mode: ChatMode,
    pub date: String,
    pub time: String,
    pub body: String,
    pub selected: bool,
}

impl ChatItem {
    pub fn new(mode: ChatMode, body: String, now: &DateTime<Local>) -> Self {
        Self {
            mode,
            date: clock::display_date(now),
            time: clock::display_time(now),
            body,
            selected: false,
        }
    }
}
