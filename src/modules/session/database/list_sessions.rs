use crate::modules::session::Session;
use crate::util::database::Database;

use super::parse_session_row;

impl Database {
    pub(super) fn session_list(&self) -> rusqlite::Result<Vec<Session>> {
        let conn = self.connection();
        let mut stmt = conn.prepare(
            "SELECT id, datum, zeit, name
             FROM session
             ORDER BY id DESC"
        )?;

        let sessions = stmt.query_map([], parse_session_row)?;
        sessions.collect()
    }
}
