use rusqlite::params;

use crate::util::database::Database;

impl Database {
    pub(super) fn session_count_named(&self, name: &str) -> rusqlite::Result<i64> {
        let conn = self.connection();
        conn.query_row(
            "SELECT COUNT(*) FROM session WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
    }
}
