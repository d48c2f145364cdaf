use crate::util::database::Database;

impl Database {
    pub(super) fn session_init_schema(&self) -> rusqlite::Result<()> {
        let conn = self.connection();

        conn.execute(
            "CREATE TABLE IF NOT EXISTS session (
                id    INTEGER PRIMARY KEY,
                datum TEXT,
                zeit  TEXT,
                name  TEXT
            )",
            [],
        )?;

        Ok(())
    }
}
