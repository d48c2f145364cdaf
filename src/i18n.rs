// src/i18n.rs
// Built-in English/German message catalog selected by the configured language code

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "de" => Some(Language::De),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    AppTitle,
    MenuBar,
    Toolbar,
    Welcome,
    SelectAll,
    SessionsTitle,
    ChatTitle,
    InputTitle,
    SamplingTitle,
    Temperature,
    TopP,
    MaxTokens,
    You,
    EmptySessions,
    EmptyChat,
    Attention,
    SessionExists,
    EmptyName,
    DatabaseExists,
    DatabaseNotFound,
    NewSessionTitle,
    NewSessionLabel,
    NewDatabaseTitle,
    NewDatabaseLabel,
    OpenDatabaseTitle,
    OpenDatabaseLabel,
    PreparingDatabase,
    OpeningDatabase,
    SessionCreated,
    DatabaseOpened,
    AllSaved,
    RemovedEntries,
    InputCleared,
    AboutTitle,
    AboutBody,
    HelpSessions,
    HelpChat,
    HelpInput,
    HelpPrompt,
    HelpNotice,
    CreatingDirectory,
    LocalizationUnsupported,
    UnknownLanguage,
    FailureFileNotFound,
    FailureIo,
    FailureDatabase,
    FailureConfiguration,
    FailureValue,
    FailureNetwork,
    FailureParse,
    FailureRuntime,
    FailureGeneric,
    ProgramFinished,
}

/// Looks up fixed UI strings for one language.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog {
    language: Language,
}

impl Catalog {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn text(&self, msg: Msg) -> &'static str {
        match self.language {
            Language::En => english(msg),
            Language::De => german(msg),
        }
    }

    /// `text(msg)` with every `{}` replaced by `arg`.
    pub fn format(&self, msg: Msg, arg: &str) -> String {
        self.text(msg).replace("{}", arg)
    }
}

fn english(msg: Msg) -> &'static str {
    match msg {
        Msg::AppTitle => "ChatGPT Toying Application",
        Msg::MenuBar => " File: ^N New  ^O Open  ^S Save  ^A Save as  ^Q Exit │ Help: F1 About ",
        Msg::Toolbar => " ^D New session database  ^O Open database  ^S Save database ",
        Msg::Welcome => "Welcome",
        Msg::SelectAll => "Select all",
        Msg::SessionsTitle => " Chat history / Archive ",
        Msg::ChatTitle => " Chat ",
        Msg::InputTitle => " Message [Enter] Send ",
        Msg::SamplingTitle => " Fine tuning ",
        Msg::Temperature => "Temperature",
        Msg::TopP => "Top-P",
        Msg::MaxTokens => "Max-Token",
        Msg::You => "You",
        Msg::EmptySessions => "No sessions yet.\n\nPress Ctrl-N to create one.",
        Msg::EmptyChat => "No messages yet.",
        Msg::Attention => " Attention ",
        Msg::SessionExists => "Session: {}\nalready exists.",
        Msg::EmptyName => "The name must not be empty.",
        Msg::DatabaseExists => "Database already exists.",
        Msg::DatabaseNotFound => "Database not found: {}",
        Msg::NewSessionTitle => " New session ",
        Msg::NewSessionLabel => "Enter the title of the session:",
        Msg::NewDatabaseTitle => " New session database ",
        Msg::NewDatabaseLabel => "Enter the name of the database:",
        Msg::OpenDatabaseTitle => " Open database ",
        Msg::OpenDatabaseLabel => "File name in the data directory:",
        Msg::PreparingDatabase => "preparing new database...",
        Msg::OpeningDatabase => "opening existing database...",
        Msg::SessionCreated => "Session created: {}",
        Msg::DatabaseOpened => "Database opened: {}",
        Msg::AllSaved => "All changes are stored in {}",
        Msg::RemovedEntries => "Removed {} entries",
        Msg::InputCleared => "Text deleted",
        Msg::AboutTitle => " About this application ",
        Msg::AboutBody => "ChatGPT Tool 1.0\n\nSession store and chat front-end.",
        Msg::HelpSessions => "[↑↓] Move  [Space] Check  [a] Select all  [Del] Remove  [x] Remove checked  [Tab] Next panel",
        Msg::HelpChat => "[↑↓] Move  [Space] Check  [a] Select all  [Del] Remove  [x] Remove checked  [t/T p/P m/M] Tune  [Tab] Next",
        Msg::HelpInput => "[Enter] Send  [Ctrl-J] New line  [Ctrl-L] Delete text  [Tab] Next panel  [Ctrl-Q] Exit",
        Msg::HelpPrompt => "[Enter] OK  [Esc] Cancel",
        Msg::HelpNotice => "[Enter] OK",
        Msg::CreatingDirectory => "creating:",
        Msg::LocalizationUnsupported => "localization is not supported.",
        Msg::UnknownLanguage => "unknown language '{}', using English.",
        Msg::FailureFileNotFound => "Error: file not found.",
        Msg::FailureIo => "Error: input/output failure.",
        Msg::FailureDatabase => "Error: database failure.",
        Msg::FailureConfiguration => "Error: invalid configuration.",
        Msg::FailureValue => "Error: invalid value.",
        Msg::FailureNetwork => "Error: completion service unreachable.",
        Msg::FailureParse => "Error: unreadable data.",
        Msg::FailureRuntime => "Error: runtime failure.",
        Msg::FailureGeneric => "General error.",
        Msg::ProgramFinished => "Program finished.",
    }
}

fn german(msg: Msg) -> &'static str {
    match msg {
        Msg::AppTitle => "ChatGPT Toying Application",
        Msg::MenuBar => " Datei: ^N Neu  ^O Öffnen  ^S Speichern  ^A Speichern unter  ^Q Beenden │ Hilfe: F1 Über ",
        Msg::Toolbar => " ^D Neue Session Datenbank  ^O Datenbank öffnen  ^S Datenbank speichern ",
        Msg::Welcome => "Willkommen",
        Msg::SelectAll => "Alles auswählen",
        Msg::SessionsTitle => " Chat-Verlauf / Archive ",
        Msg::ChatTitle => " Chat ",
        Msg::InputTitle => " Nachricht [Enter] Senden ",
        Msg::SamplingTitle => " Feinabstimmung ",
        Msg::Temperature => "Temperatur",
        Msg::TopP => "Top-P",
        Msg::MaxTokens => "Max-Token",
        Msg::You => "Du",
        Msg::EmptySessions => "Noch keine Sessions.\n\nMit Strg-N eine neue anlegen.",
        Msg::EmptyChat => "Noch keine Nachrichten.",
        Msg::Attention => " Achtung ",
        Msg::SessionExists => "Session: {}\nbereits vorhanden.",
        Msg::EmptyName => "Der Name darf nicht leer sein.",
        Msg::DatabaseExists => "Datenbank bereits vorhanden.",
        Msg::DatabaseNotFound => "Datenbank nicht gefunden: {}",
        Msg::NewSessionTitle => " Neue Session ",
        Msg::NewSessionLabel => "Geben Sie den Titel der Session ein:",
        Msg::NewDatabaseTitle => " Neue Session Datenbank ",
        Msg::NewDatabaseLabel => "Geben Sie den Namen der Datenbank ein:",
        Msg::OpenDatabaseTitle => " Bestehende Datenbank öffnen ",
        Msg::OpenDatabaseLabel => "Dateiname im Datenverzeichnis:",
        Msg::PreparingDatabase => "bereite neue Datenbank vor...",
        Msg::OpeningDatabase => "öffne bestehende Datenbank...",
        Msg::SessionCreated => "Session angelegt: {}",
        Msg::DatabaseOpened => "Datenbank geöffnet: {}",
        Msg::AllSaved => "Alle Änderungen sind gespeichert in {}",
        Msg::RemovedEntries => "{} Einträge entfernt",
        Msg::InputCleared => "Text gelöscht",
        Msg::AboutTitle => " Über diese Anwendung ",
        Msg::AboutBody => "ChatGPT Tool 1.0\n\nSession-Datenbank und Chat-Oberfläche.",
        Msg::HelpSessions => "[↑↓] Bewegen  [Leertaste] Markieren  [a] Alles  [Entf] Entfernen  [x] Markierte entfernen  [Tab] Weiter",
        Msg::HelpChat => "[↑↓] Bewegen  [Leertaste] Markieren  [a] Alles  [Entf] Entfernen  [x] Markierte entfernen  [t/T p/P m/M] Werte  [Tab] Weiter",
        Msg::HelpInput => "[Enter] Senden  [Strg-J] Neue Zeile  [Strg-L] Text löschen  [Tab] Weiter  [Strg-Q] Beenden",
        Msg::HelpPrompt => "[Enter] OK  [Esc] Abbrechen",
        Msg::HelpNotice => "[Enter] OK",
        Msg::CreatingDirectory => "erstelle:",
        Msg::LocalizationUnsupported => "localization wird nicht unterstützt.",
        Msg::UnknownLanguage => "unbekannte Sprache '{}', verwende Englisch.",
        Msg::FailureFileNotFound => "Fehler: Datei nicht gefunden.",
        Msg::FailureIo => "Fehler: Ein-/Ausgabe fehlgeschlagen.",
        Msg::FailureDatabase => "Fehler: Datenbankfehler.",
        Msg::FailureConfiguration => "Fehler: ungültige Konfiguration.",
        Msg::FailureValue => "Fehler: ungültiger Wert.",
        Msg::FailureNetwork => "Fehler: Completion-Dienst nicht erreichbar.",
        Msg::FailureParse => "Fehler: unlesbare Daten.",
        Msg::FailureRuntime => "Fehler: Laufzeitfehler.",
        Msg::FailureGeneric => "Allgemeiner Fehler.",
        Msg::ProgramFinished => "Programm erfolgreich beendet.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_are_case_insensitive() {
        assert_eq!(Language::from_code("DE"), Some(Language::De));
        assert_eq!(Language::from_code(" en "), Some(Language::En));
        assert_eq!(Language::from_code("xx"), None);
    }

    #[test]
    fn test_duplicate_notice_names_the_session() {
        let catalog = Catalog::new(Language::De);
        assert_eq!(
            catalog.format(Msg::SessionExists, "Test"),
            "Session: Test\nbereits vorhanden."
        );
    }

    #[test]
    fn test_you_label_per_language() {
        assert_eq!(Catalog::new(Language::De).text(Msg::You), "Du");
        assert_eq!(Catalog::default().text(Msg::You), "You");
    }

    #[test]
    fn test_program_finished_line() {
        assert_eq!(
            Catalog::new(Language::De).text(Msg::ProgramFinished),
            "Programm erfolgreich beendet."
        );
    }
}
