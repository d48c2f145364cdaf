// src/modules/session/database/mod.rs
// Database operations for the session table

mod count_sessions_named;
mod create_session;
mod init_schema;
mod insert_session;
mod list_sessions;
mod session_exists;
mod trait_session_database;

pub use trait_session_database::SessionDatabase;

use super::Session;

/// Result of the create-if-absent flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(Session),
    /// A row with this (already bounded) name exists; nothing was written.
    Duplicate(String),
    /// The name was empty after bounding.
    Empty,
}

fn parse_session_row(row: &rusqlite::Row) -> rusqlite::Result<Session> {
    Ok(Session {
        id: row.get(0)?,
        date: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        time: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        name: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::database::Database;
    use chrono::{Local, TimeZone};

    fn now() -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 17, 10, 15, 30).unwrap()
    }

    #[test]
    fn test_insert_then_exists() {
        let db = Database::open_in_memory().unwrap();

        assert!(!db.session_exists("Mathe").unwrap());
        db.insert_session("2024-05-17", "10:15:30", "Mathe").unwrap();
        assert!(db.session_exists("Mathe").unwrap());
    }

    #[test]
    fn test_duplicate_is_rejected_before_write() {
        let db = Database::open_in_memory().unwrap();

        let first = db.create_session("Test", 20, &now()).unwrap();
        assert!(matches!(first, CreateOutcome::Created(_)));

        let second = db.create_session("Test", 20, &now()).unwrap();
        assert_eq!(second, CreateOutcome::Duplicate("Test".to_string()));
        assert_eq!(db.count_sessions_named("Test").unwrap(), 1);
    }

    #[test]
    fn test_trailing_space_scenario() {
        let db = Database::open_in_memory().unwrap();

        match db.create_session("Test ", 20, &now()).unwrap() {
            CreateOutcome::Created(session) => {
                assert_eq!(session.name, "Test");
                assert_eq!(session.date, "2024-05-17");
                assert_eq!(session.time, "10:15:30");
            }
            other => panic!("expected a new session, got {:?}", other),
        }

        assert_eq!(
            db.create_session("Test", 20, &now()).unwrap(),
            CreateOutcome::Duplicate("Test".to_string())
        );
    }

    #[test]
    fn test_long_name_is_truncated_before_comparison() {
        let db = Database::open_in_memory().unwrap();
        let long = "Ein sehr langer Sessionname";

        let created = db.create_session(long, 20, &now()).unwrap();
        let CreateOutcome::Created(session) = created else {
            panic!("expected a new session");
        };
        assert_eq!(session.name, "Ein sehr langer Sess");

        // A different raw string that bounds to the same name is a duplicate.
        let again = db.create_session("Ein sehr langer Sessionzeug", 20, &now()).unwrap();
        assert_eq!(again, CreateOutcome::Duplicate("Ein sehr langer Sess".to_string()));
    }

    #[test]
    fn test_blank_name_writes_nothing() {
        let db = Database::open_in_memory().unwrap();

        assert_eq!(db.create_session("   ", 20, &now()).unwrap(), CreateOutcome::Empty);
        assert!(db.list_sessions().unwrap().is_empty());
    }

    #[test]
    fn test_quotes_in_names_are_safe() {
        let db = Database::open_in_memory().unwrap();

        db.create_session("it's", 20, &now()).unwrap();
        assert!(db.session_exists("it's").unwrap());
        assert!(!db.session_exists("' OR '1'='1").unwrap());
    }

    #[test]
    fn test_schema_creation_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        db.init_session_schema().unwrap();
        db.init_session_schema().unwrap();

        let conn = db.connection();
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'session'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);

        let mut stmt = conn.prepare("PRAGMA table_info(session)").unwrap();
        let columns: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        assert_eq!(columns, vec!["id", "datum", "zeit", "name"]);
    }

    #[test]
    fn test_list_sessions_newest_first() {
        let db = Database::open_in_memory().unwrap();
        db.create_session("erste", 20, &now()).unwrap();
        db.create_session("zweite", 20, &now()).unwrap();

        let names: Vec<String> = db
            .list_sessions()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["zweite", "erste"]);
    }
}
