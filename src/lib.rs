pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod i18n;
pub mod modules;
pub mod ui;
pub mod util;

pub use app::App;
pub use config::AppConfig;
pub use error::{ChatDeskError, FailureCategory};
