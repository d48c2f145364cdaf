use crate::util::database::Database;

impl Database {
    pub(super) fn session_exists_by_name(&self, name: &str) -> rusqlite::Result<bool> {
        Ok(self.session_count_named(name)? > 0)
    }
}
