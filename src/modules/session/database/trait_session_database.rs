use chrono::{DateTime, Local};

use crate::util::database::Database;

use super::{CreateOutcome, Session};

/// Trait to add session-table operations to Database
pub trait SessionDatabase {
    fn init_session_schema(&self) -> rusqlite::Result<()>;

    fn session_exists(&self, name: &str) -> rusqlite::Result<bool>;
    fn insert_session(&self, date: &str, time: &str, name: &str) -> rusqlite::Result<i64>;

    /// Bounds `raw_name`, checks for an existing row and inserts only when absent.
    fn create_session(
        &self,
        raw_name: &str,
        max_len: usize,
        now: &DateTime<Local>,
    ) -> rusqlite::Result<CreateOutcome>;

    fn list_sessions(&self) -> rusqlite::Result<Vec<Session>>;
    fn count_sessions_named(&self, name: &str) -> rusqlite::Result<i64>;
}

impl SessionDatabase for Database {
    fn init_session_schema(&self) -> rusqlite::Result<()> {
        self.session_init_schema()
    }

    fn session_exists(&self, name: &str) -> rusqlite::Result<bool> {
        self.session_exists_by_name(name)
    }

    fn insert_session(&self, date: &str, time: &str, name: &str) -> rusqlite::Result<i64> {
        self.session_insert(date, time, name)
    }

    fn create_session(
        &self,
        raw_name: &str,
        max_len: usize,
        now: &DateTime<Local>,
    ) -> rusqlite::Result<CreateOutcome> {
        self.session_create_if_absent(raw_name, max_len, now)
    }

    fn list_sessions(&self) -> rusqlite::Result<Vec<Session>> {
        self.session_list()
    }

    fn count_sessions_named(&self, name: &str) -> rusqlite::Result<i64> {
        self.session_count_named(name)
    }
}
