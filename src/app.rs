mod create_session;
mod handle_app_event;
mod handle_key_events;
mod submit_message;
mod switch_database;

use color_eyre::Result;
use ratatui::{
    crossterm::event::{Event as CrosstermEvent, KeyEventKind},
    DefaultTerminal,
};
use tracing::{error, info};

use crate::config::AppConfig;
use crate::event::{Event, EventHandler};
use crate::i18n::{Catalog, Msg};
use crate::modules::chat::ChatLog;
use crate::modules::completion::SamplingParams;
use crate::modules::session::{SessionDatabase, SessionList};
use crate::util::database::Database;

/// Which panel receives plain key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sessions,
    Chat,
    Input,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Sessions => Focus::Chat,
            Focus::Chat => Focus::Input,
            Focus::Input => Focus::Sessions,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Sessions => Focus::Input,
            Focus::Chat => Focus::Sessions,
            Focus::Input => Focus::Chat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    NewSession,
    NewDatabase,
    OpenDatabase,
}

impl PromptKind {
    pub fn title(&self) -> Msg {
        match self {
            PromptKind::NewSession => Msg::NewSessionTitle,
            PromptKind::NewDatabase => Msg::NewDatabaseTitle,
            PromptKind::OpenDatabase => Msg::OpenDatabaseTitle,
        }
    }

    pub fn label(&self) -> Msg {
        match self {
            PromptKind::NewSession => Msg::NewSessionLabel,
            PromptKind::NewDatabase => Msg::NewDatabaseLabel,
            PromptKind::OpenDatabase => Msg::OpenDatabaseLabel,
        }
    }
}

/// Modal single-line text prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub value: String,
}

/// Modal message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Prompt(Prompt),
    Notice(Notice),
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub config: AppConfig,
    pub catalog: Catalog,
    /// Active session store
    pub database: Database,
    /// Left panel
    pub sessions: SessionList,
    /// Right panel
    pub chat: ChatLog,
    /// Chat input buffer
    pub input: String,
    pub sampling: SamplingParams,
    pub focus: Focus,
    pub overlay: Option<Overlay>,
    /// Status line text
    pub status: String,
    pub events: EventHandler,
}

impl App {
    /// Constructs a new instance of [`App`] on an already opened store.
    pub fn new(config: AppConfig, database: Database, events: EventHandler) -> Result<Self> {
        let catalog = Catalog::new(config.language());
        let sessions = SessionList::from_sessions(database.list_sessions()?);
        let sampling = config.completion.sampling();

        Ok(Self {
            running: true,
            config,
            catalog,
            database,
            sessions,
            chat: ChatLog::default(),
            input: String::new(),
            sampling,
            focus: Focus::Input,
            overlay: None,
            status: catalog.text(Msg::Welcome).to_string(),
            events,
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        info!(
            "UI started on {}",
            self.database
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        );

        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Crossterm(CrosstermEvent::Key(key_event))
                    if key_event.kind == KeyEventKind::Press =>
                {
                    self.handle_key_events(key_event);
                    needs_redraw = true;
                }
                Event::Crossterm(CrosstermEvent::Resize(_, _)) => needs_redraw = true,
                Event::Crossterm(_) => {}
                Event::App(app_event) => {
                    self.handle_app_event(app_event);
                    needs_redraw = true;
                }
            }
        }

        info!("UI stopped");
        Ok(())
    }

    /// Handles every app event already queued, without waiting for new ones.
    pub fn drain_app_events(&mut self) {
        while let Some(event) = self.events.try_next() {
            if let Event::App(app_event) = event {
                self.handle_app_event(app_event);
            }
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn show_notice(&mut self, title: Msg, body: String) {
        self.overlay = Some(Overlay::Notice(Notice {
            title: self.catalog.text(title).to_string(),
            body,
        }));
    }

    pub fn open_prompt(&mut self, kind: PromptKind) {
        self.overlay = Some(Overlay::Prompt(Prompt {
            kind,
            value: String::new(),
        }));
    }

    fn report_store_error(&mut self, err: rusqlite::Error) {
        error!("Store operation failed: {}", err);
        self.show_notice(Msg::Attention, err.to_string());
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_app() -> App {
        let database = Database::open_in_memory().expect("in-memory store");
        App::new(AppConfig::default(), database, EventHandler::detached()).expect("app")
    }

    #[test]
    fn test_new_app_starts_in_input_with_welcome() {
        let app = test_app();

        assert!(app.running);
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.status, "Welcome");
        assert!(app.sessions.is_empty());
        assert_eq!(app.sampling, SamplingParams::default());
    }

    #[test]
    fn test_focus_cycles_through_all_panels() {
        let mut focus = Focus::Sessions;
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Sessions);
        assert_eq!(Focus::Sessions.prev(), Focus::Input);
    }

    #[test]
    fn test_sampling_row_starts_from_config_and_stays_local() {
        let mut config = AppConfig::default();
        config.completion.temperature = 1.2;
        config.completion.max_tokens = 250;
        let database = Database::open_in_memory().unwrap();
        let mut app = App::new(config, database, EventHandler::detached()).unwrap();

        assert!((app.sampling.temperature - 1.2).abs() < 1e-6);
        assert_eq!(app.sampling.max_tokens, 250);

        app.sampling.adjust_max_tokens(10);
        assert_eq!(app.sampling.max_tokens, 260);
        assert_eq!(app.config.completion.sampling().max_tokens, 250);
    }

    #[test]
    fn test_existing_sessions_are_loaded() {
        let database = Database::open_in_memory().unwrap();
        database.insert_session("2024-01-01", "08:00:00", "alt").unwrap();

        let app = App::new(AppConfig::default(), database, EventHandler::detached()).unwrap();
        assert_eq!(app.sessions.len(), 1);
        assert_eq!(app.sessions.rows()[0].session.name, "alt");
    }
}
