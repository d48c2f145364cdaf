// src/util/database.rs
// Core database struct with connection management only

use chrono::{DateTime, Local};
use rusqlite::{Connection, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::util::clock;

#[derive(Clone)]
pub struct Database {
    pub(crate) conn: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

// Manual Debug implementation since Mutex<Connection> doesn't implement Debug
impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("conn", &"Arc<Mutex<Connection>>")
            .field("path", &self.path)
            .finish()
    }
}

impl Database {
    /// Opens (or creates) the store file and makes sure the session table exists.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn, Some(path.to_path_buf()))
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn, None)
    }

    fn from_connection(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        let db = Database {
            conn: Arc::new(Mutex::new(conn)),
            path,
        };

        use crate::modules::session::database::SessionDatabase;
        db.init_session_schema()?;

        Ok(db)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub(crate) fn connection(&self) -> MutexGuard<'_, Connection> {
        // A panic while holding the lock leaves the connection itself usable.
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The per-run store: `<data_dir>/chat_<YYYY_MM_DD>__<HH_MM>.db`.
    pub fn run_path(data_dir: &Path, now: &DateTime<Local>) -> PathBuf {
        data_dir.join(format!("chat_{}.db", clock::file_stamp(now)))
    }

    /// A named session store: `<data_dir>/<name>_<YYYY_MM_DD>__<HH_MM>.db`.
    pub fn named_path(data_dir: &Path, name: &str, now: &DateTime<Local>) -> PathBuf {
        let mut file_name = format!("{}_{}", name, clock::file_stamp(now));
        let has_extension = Path::new(&file_name)
            .extension()
            .is_some_and(|ext| ext == "db");
        if !has_extension {
            file_name.push_str(".db");
        }
        data_dir.join(file_name)
    }
}
