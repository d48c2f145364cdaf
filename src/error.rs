use std::error::Error as StdError;
use thiserror::Error;

use crate::i18n::Msg;
use crate::modules::completion::CompletionError;

#[derive(Error, Debug)]
pub enum ChatDeskError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

pub type Result<T> = std::result::Result<T, ChatDeskError>;

/// One plain line `outer: inner: ...` for log files; no colors, no backtrace.
pub fn describe_chain<'a, I>(chain: I) -> String
where
    I: IntoIterator<Item = &'a (dyn StdError + 'static)>,
{
    chain
        .into_iter()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

/// Coarse start-up failure buckets, each with its own translated diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    FileNotFound,
    Io,
    Database,
    Configuration,
    Value,
    Network,
    Parse,
    Runtime,
    Generic,
}

impl FailureCategory {
    /// Walks an error chain and returns the bucket of the first recognised error.
    pub fn classify<'a, I>(chain: I) -> Self
    where
        I: IntoIterator<Item = &'a (dyn StdError + 'static)>,
    {
        for cause in chain {
            if let Some(e) = cause.downcast_ref::<ChatDeskError>() {
                return Self::of(e);
            }
            if let Some(e) = cause.downcast_ref::<std::io::Error>() {
                return Self::of_io(e);
            }
            if cause.is::<rusqlite::Error>() {
                return FailureCategory::Database;
            }
            if cause.is::<serde_yaml::Error>() {
                return FailureCategory::Configuration;
            }
            if cause.is::<serde_json::Error>() {
                return FailureCategory::Parse;
            }
            if cause.is::<reqwest::Error>() {
                return FailureCategory::Network;
            }
            if let Some(e) = cause.downcast_ref::<CompletionError>() {
                return Self::of_completion(e);
            }
        }
        FailureCategory::Generic
    }

    pub fn of(error: &ChatDeskError) -> Self {
        match error {
            ChatDeskError::IoError(e) => Self::of_io(e),
            ChatDeskError::Database(_) => FailureCategory::Database,
            ChatDeskError::JsonError(_) => FailureCategory::Parse,
            ChatDeskError::Yaml(_) | ChatDeskError::Config(_) => FailureCategory::Configuration,
            ChatDeskError::Completion(e) => Self::of_completion(e),
            ChatDeskError::RuntimeError(_) => FailureCategory::Runtime,
        }
    }

    fn of_io(error: &std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => FailureCategory::FileNotFound,
            std::io::ErrorKind::InvalidData | std::io::ErrorKind::InvalidInput => FailureCategory::Value,
            _ => FailureCategory::Io,
        }
    }

    fn of_completion(error: &CompletionError) -> Self {
        match error {
            CompletionError::MissingApiKey(_) => FailureCategory::Configuration,
            CompletionError::Http(_) | CompletionError::Status { .. } => FailureCategory::Network,
            CompletionError::NoChoices => FailureCategory::Value,
        }
    }

    pub fn message(&self) -> Msg {
        match self {
            FailureCategory::FileNotFound => Msg::FailureFileNotFound,
            FailureCategory::Io => Msg::FailureIo,
            FailureCategory::Database => Msg::FailureDatabase,
            FailureCategory::Configuration => Msg::FailureConfiguration,
            FailureCategory::Value => Msg::FailureValue,
            FailureCategory::Network => Msg::FailureNetwork,
            FailureCategory::Parse => Msg::FailureParse,
            FailureCategory::Runtime => Msg::FailureRuntime,
            FailureCategory::Generic => Msg::FailureGeneric,
        }
    }
}
