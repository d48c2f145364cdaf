// src/config.rs
// YAML configuration with defaults for every key

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{ChatDeskError, Result};
use crate::i18n::{Catalog, Language, Msg};
use crate::modules::completion::SamplingParams;
use crate::modules::session::{MAX_DATABASE_NAME_LENGTH, MAX_SESSION_NAME_LENGTH};

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub common: CommonConfig,
    pub paths: PathsConfig,
    pub session: SessionConfig,
    pub completion: CompletionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonConfig {
    /// Two-letter language code, e.g. `de` or `en`.
    pub language: String,
    /// Name shown for assistant lines.
    pub assistant_name: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            assistant_name: "assistant".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
    pub locale_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            locale_dir: PathBuf::from("./locales"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub max_name_length: usize,
    pub max_database_name_length: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_name_length: MAX_SESSION_NAME_LENGTH,
            max_database_name_length: MAX_DATABASE_NAME_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    pub base_url: String,
    pub model: String,
    /// Environment variable holding the bearer key.
    pub api_key_env: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        let params = SamplingParams::default();
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: params.temperature,
            top_p: params.top_p,
            max_tokens: params.max_tokens,
        }
    }
}

impl CompletionConfig {
    pub fn sampling(&self) -> SamplingParams {
        SamplingParams {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            top_p: self.top_p,
        }
    }
}

impl AppConfig {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AppConfig = serde_yaml::from_str(content)?;
        if config.session.max_name_length == 0 || config.session.max_database_name_length == 0 {
            return Err(ChatDeskError::Config(
                "name lengths must be greater than zero".to_string(),
            ));
        }

        Ok(config)
    }

    /// Unknown codes fall back to English.
    pub fn language(&self) -> Language {
        Language::from_code(&self.common.language).unwrap_or_default()
    }

    /// Creates the data directory when missing. Runs before logging is set up,
    /// since the log file lives in that directory.
    pub fn prepare_directories(&self, catalog: &Catalog) -> Result<bool> {
        if self.paths.data_dir.is_dir() {
            return Ok(false);
        }

        println!("{} {}", catalog.text(Msg::CreatingDirectory), self.paths.data_dir.display());
        std::fs::create_dir_all(&self.paths.data_dir)?;
        Ok(true)
    }

    /// Console and log notices about the environment; call once logging is up.
    pub fn report_environment(&self, catalog: &Catalog, created_data_dir: bool) {
        if created_data_dir {
            info!("Created data directory {}", self.paths.data_dir.display());
        }

        if Language::from_code(&self.common.language).is_none() {
            println!("{}", catalog.format(Msg::UnknownLanguage, &self.common.language));
            warn!("Unknown language '{}', using English", self.common.language);
        }

        if !self.paths.locale_dir.is_dir() {
            println!("{}", catalog.text(Msg::LocalizationUnsupported));
            info!("Locale directory {} missing", self.paths.locale_dir.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_yaml("").unwrap();

        assert_eq!(config.common.language, "en");
        assert_eq!(config.session.max_name_length, 20);
        assert_eq!(config.session.max_database_name_length, 32);
        assert_eq!(config.completion.model, "gpt-3.5-turbo");
        assert_eq!(config.completion.max_tokens, 100);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let yaml = r#"
common:
  language: de
completion:
  max_tokens: 250
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.language(), Language::De);
        assert_eq!(config.common.assistant_name, "assistant");
        assert_eq!(config.completion.max_tokens, 250);
        assert_eq!(config.completion.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.paths.data_dir, PathBuf::from("./data"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let config = AppConfig::from_yaml("common:\n  language: fr\n").unwrap();
        assert_eq!(config.language(), Language::En);
    }

    #[test]
    fn test_zero_name_length_is_rejected() {
        let result = AppConfig::from_yaml("session:\n  max_name_length: 0\n");
        assert!(matches!(result, Err(ChatDeskError::Config(_))));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let result = AppConfig::from_yaml("common: [unterminated");
        assert!(matches!(result, Err(ChatDeskError::Yaml(_))));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load(Path::new("/definitely/not/here/config.yaml")).unwrap();
        assert_eq!(config.paths.locale_dir, PathBuf::from("./locales"));
    }

    #[test]
    fn test_unknown_language_is_warned_in_log() {
        use std::sync::Mutex;

        let dir = tempfile::TempDir::new().unwrap();
        let log_file = dir.path().join("test.log");
        let subscriber = tracing_subscriber::fmt()
            .with_writer(Mutex::new(std::fs::File::create(&log_file).unwrap()))
            .with_ansi(false)
            .finish();

        let mut config = AppConfig::from_yaml("common:\n  language: fr\n").unwrap();
        config.paths.locale_dir = dir.path().to_path_buf();
        tracing::subscriber::with_default(subscriber, || {
            config.report_environment(&Catalog::new(config.language()), false);
        });

        let log = std::fs::read_to_string(&log_file).unwrap();
        assert!(log.contains("WARN"));
        assert!(log.contains("Unknown language 'fr', using English"));
    }

    #[test]
    fn test_prepare_directories_creates_data_dir_once() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.paths.data_dir = dir.path().join("data");

        assert!(config.prepare_directories(&Catalog::default()).unwrap());
        assert!(config.paths.data_dir.is_dir());
        assert!(!config.prepare_directories(&Catalog::default()).unwrap());
    }
}
