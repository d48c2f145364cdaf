// src/modules/session/mod.rs

pub mod database;
mod session_list;
mod session_name;

pub use database::{CreateOutcome, SessionDatabase};
pub use session_list::{SessionList, SessionRow};
pub use session_name::bounded_name;

/// Default bound for names entered in the "new session" prompt.
pub const MAX_SESSION_NAME_LENGTH: usize = 20;
/// Default bound for names entered in the "new session database" prompt.
pub const MAX_DATABASE_NAME_LENGTH: usize = 32;

/// One row of the `session` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub name: String,
}

impl Session {
    pub fn header(&self) -> String {
        format!("{}  {}", self.date, self.time)
    }
}
