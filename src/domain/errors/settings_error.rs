use std::io;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Cannot read settings file: {0}")]
    Read(#[from] io::Error),
    #[error("Invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid log level: {0}")]
    LogLevel(String),
}
