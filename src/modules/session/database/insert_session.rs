use rusqlite::params;

use crate::util::database::Database;

impl Database {
    pub(super) fn session_insert(&self, date: &str, time: &str, name: &str) -> rusqlite::Result<i64> {
        let conn = self.connection();
        conn.execute(
            "INSERT INTO session (datum, zeit, name) VALUES (?1, ?2, ?3)",
            params![date, time, name],
        )?;

        Ok(conn.last_insert_rowid())
    }
}
