use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::modules::session::{bounded_name, Session};
use crate::util::{clock, database::Database};

use super::CreateOutcome;

impl Database {
    pub(super) fn session_create_if_absent(
        &self,
        raw_name: &str,
        max_len: usize,
        now: &DateTime<Local>,
    ) -> rusqlite::Result<CreateOutcome> {
        let name = bounded_name(raw_name, max_len);
        if name.is_empty() {
            return Ok(CreateOutcome::Empty);
        }

        if self.session_exists_by_name(&name)? {
            debug!("Session '{}' already exists, nothing written", name);
            return Ok(CreateOutcome::Duplicate(name));
        }

        let date = clock::display_date(now);
        let time = clock::display_time(now);
        let id = self.session_insert(&date, &time, &name)?;
        info!("Created session '{}' (id {})", name, id);

        Ok(CreateOutcome::Created(Session { id, date, time, name }))
    }
}
