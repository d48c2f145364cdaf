// src/app/switch_database.rs

use chrono::Local;
use std::path::PathBuf;
use tracing::{info, warn};

use super::App;
use crate::i18n::Msg;
use crate::modules::session::{bounded_name, SessionDatabase, SessionList};
use crate::util::database::Database;

impl App {
    /// Toolbar "new session database": a fresh stamped store in the data directory.
    pub fn create_database(&mut self, raw_name: &str) {
        self.status = self.catalog.text(Msg::PreparingDatabase).to_string();

        let name = bounded_name(raw_name, self.config.session.max_database_name_length);
        if name.is_empty() {
            let body = self.catalog.text(Msg::EmptyName).to_string();
            return self.show_notice(Msg::Attention, body);
        }

        let path = Database::named_path(&self.config.paths.data_dir, &name, &Local::now());
        if path.exists() {
            warn!("Database {} already exists", path.display());
            let body = self.catalog.text(Msg::DatabaseExists).to_string();
            return self.show_notice(Msg::Attention, body);
        }

        self.switch_to(path);
    }

    /// Opens an existing store by file name relative to the data directory.
    pub fn open_database(&mut self, file_name: &str) {
        self.status = self.catalog.text(Msg::OpeningDatabase).to_string();

        let file_name = file_name.trim();
        if file_name.is_empty() {
            let body = self.catalog.text(Msg::EmptyName).to_string();
            return self.show_notice(Msg::Attention, body);
        }

        let mut path = self.config.paths.data_dir.join(file_name);
        if path.extension().is_none() {
            path.set_extension("db");
        }

        if !path.is_file() {
            let body = self
                .catalog
                .format(Msg::DatabaseNotFound, &path.display().to_string());
            return self.show_notice(Msg::Attention, body);
        }

        self.switch_to(path);
    }

    fn switch_to(&mut self, path: PathBuf) {
        let opened = Database::open(&path)
            .and_then(|database| database.list_sessions().map(|sessions| (database, sessions)));

        match opened {
            Ok((database, sessions)) => {
                info!("Switched store to {}", path.display());
                self.database = database;
                self.sessions = SessionList::from_sessions(sessions);
                self.status = self
                    .catalog
                    .format(Msg::DatabaseOpened, &path.display().to_string());
            }
            Err(e) => self.report_store_error(e),
        }
    }
}
