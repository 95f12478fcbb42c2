use crate::config::constants::{
    API_KEY_ENV_VAR, ENDPOINT_ENV_VAR, PLACEHOLDER_API_KEY, PLACEHOLDER_ENDPOINT, SETTINGS_FILE,
};
use crate::domain::entities::language::Language;
use crate::domain::errors::settings_error::SettingsError;
use serde::Deserialize;
use std::path::Path;
use std::{env, fs};
use tracing::Level;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub azure: AzureSettings,

    /// Language of the interface, `en` or `fr`.
    pub ui_language: String,

    /// Maximum `tracing` level written to stderr.
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AzureSettings {
    pub endpoint: String,
    pub api_key: String,

    /// Language of the submitted documents.
    pub language: String,

    /// No timeout when absent: a stalled request stalls the listing.
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            azure: AzureSettings::default(),
            ui_language: "en".to_string(),
            log_level: "INFO".to_string(),
        }
    }
}

impl Default for AzureSettings {
    fn default() -> Self {
        Self {
            endpoint: PLACEHOLDER_ENDPOINT.to_string(),
            api_key: PLACEHOLDER_API_KEY.to_string(),
            language: "en".to_string(),
            timeout_secs: None,
        }
    }
}

impl Settings {
    /// Reads `settings.json` from the working directory when present, then
    /// applies the `AZURE_LANGUAGE_*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(Path::new(SETTINGS_FILE), |key| env::var(key).ok())
    }

    pub fn load_from(
        path: &Path,
        env_var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let mut settings = if path.exists() {
            Self::read(path)?
        } else {
            Self::default()
        };

        if let Some(endpoint) = env_var(ENDPOINT_ENV_VAR) {
            settings.azure.endpoint = endpoint;
        }
        if let Some(api_key) = env_var(API_KEY_ENV_VAR) {
            settings.azure.api_key = api_key;
        }
        Ok(settings)
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let settings = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&settings)?)
    }

    pub fn log_level(&self) -> Result<Level, SettingsError> {
        self.log_level
            .parse()
            .map_err(|_| SettingsError::LogLevel(self.log_level.clone()))
    }

    pub fn ui_language(&self) -> Language {
        Language::from_code(&self.ui_language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_settings(temp_dir: &TempDir, body: &str) -> PathBuf {
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_file_falls_back_to_placeholders() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = Settings::load_from(&path, no_env).unwrap();

        assert_eq!(settings.azure.endpoint, PLACEHOLDER_ENDPOINT);
        assert_eq!(settings.azure.api_key, PLACEHOLDER_API_KEY);
        assert_eq!(settings.azure.timeout_secs, None);
        assert_eq!(settings.log_level().unwrap(), Level::INFO);
        assert_eq!(settings.ui_language(), Language::English);
    }

    #[test]
    fn file_values_are_used_and_partial_sections_keep_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_settings(
            &temp_dir,
            r#"{
                "azure": {"endpoint": "https://lang.example.com", "timeout_secs": 20},
                "ui_language": "fr"
            }"#,
        );

        let settings = Settings::load_from(&path, no_env).unwrap();

        assert_eq!(settings.azure.endpoint, "https://lang.example.com");
        assert_eq!(settings.azure.api_key, PLACEHOLDER_API_KEY);
        assert_eq!(settings.azure.language, "en");
        assert_eq!(settings.azure.timeout_secs, Some(20));
        assert_eq!(settings.ui_language(), Language::French);
    }

    #[test]
    fn environment_overrides_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_settings(
            &temp_dir,
            r#"{"azure": {"endpoint": "https://from-file", "api_key": "file-key"}}"#,
        );
        let env_var = |key: &str| (key == API_KEY_ENV_VAR).then(|| "env-key".to_string());

        let settings = Settings::load_from(&path, env_var).unwrap();

        assert_eq!(settings.azure.endpoint, "https://from-file");
        assert_eq!(settings.azure.api_key, "env-key");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_settings(&temp_dir, "{ not json");

        let error = Settings::load_from(&path, no_env).unwrap_err();
        assert!(matches!(error, SettingsError::Parse(_)));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let settings = Settings {
            log_level: "chatty".to_string(),
            ..Settings::default()
        };
        assert!(matches!(settings.log_level(), Err(SettingsError::LogLevel(_))));
    }
}
