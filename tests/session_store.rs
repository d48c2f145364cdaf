use chatdesk::config::AppConfig;
use chatdesk::i18n::Catalog;
use chatdesk::modules::session::{CreateOutcome, SessionDatabase};
use chatdesk::util::database::Database;
use chrono::{Local, TimeZone};
use rusqlite::Connection;
use tempfile::TempDir;

#[test]
fn test_sessions_survive_reopening_the_store() {
    let temp_dir = TempDir::new().unwrap();
    let now = Local.with_ymd_and_hms(2023, 11, 30, 9, 5, 0).unwrap();
    let path = Database::run_path(temp_dir.path(), &now);

    {
        let database = Database::open(&path).unwrap();
        let outcome = database.create_session("Test ", 20, &now).unwrap();
        assert!(matches!(outcome, CreateOutcome::Created(ref s) if s.name == "Test"));
    }

    assert!(path.ends_with("chat_2023_11_30__09_05.db"));

    let reopened = Database::open(&path).unwrap();
    assert!(reopened.session_exists("Test").unwrap());

    let outcome = reopened.create_session("Test", 20, &now).unwrap();
    assert_eq!(outcome, CreateOutcome::Duplicate("Test".to_string()));
    assert_eq!(reopened.count_sessions_named("Test").unwrap(), 1);

    let sessions = reopened.list_sessions().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].date, "2023-11-30");
    assert_eq!(sessions[0].time, "09:05:00");
}

#[test]
fn test_file_written_by_plain_sqlite_is_readable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fremd.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE session (id INTEGER PRIMARY KEY, datum TEXT, zeit TEXT, name TEXT);
         INSERT INTO session (datum, zeit, name) VALUES ('2022-01-02', '03:04:05', 'von Hand');",
    )
    .unwrap();
    drop(conn);

    let database = Database::open(&path).unwrap();
    assert!(database.session_exists("von Hand").unwrap());
    assert!(!database.session_exists("von hand").unwrap());
}

#[test]
fn test_config_file_and_data_directory() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    let config_path = temp_dir.path().join("config.yaml");
    std::fs::write(
        &config_path,
        format!(
            "common:\n  language: de\npaths:\n  data_dir: {}\nsession:\n  max_name_length: 5\n",
            data_dir.display()
        ),
    )
    .unwrap();

    let config = AppConfig::load(&config_path).unwrap();
    config
        .prepare_directories(&Catalog::new(config.language()))
        .unwrap();
    assert!(data_dir.is_dir());

    let database = Database::open(&Database::run_path(&data_dir, &Local::now())).unwrap();
    let outcome = database
        .create_session("Montagmorgen", config.session.max_name_length, &Local::now())
        .unwrap();
    assert!(matches!(outcome, CreateOutcome::Created(ref s) if s.name == "Monta"));
}

#[test]
fn test_missing_config_file_means_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = AppConfig::load(&temp_dir.path().join("nope.yaml")).unwrap();

    assert_eq!(config.session.max_name_length, 20);
    assert_eq!(config.completion.base_url, "https://api.openai.com/v1");
}
