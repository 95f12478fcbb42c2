pub const SETTINGS_FILE: &str = "settings.json";
pub const ENDPOINT_ENV_VAR: &str = "AZURE_LANGUAGE_ENDPOINT";
pub const API_KEY_ENV_VAR: &str = "AZURE_LANGUAGE_KEY";

pub const PLACEHOLDER_ENDPOINT: &str = "https://<your-azure-endpoint>";
pub const PLACEHOLDER_API_KEY: &str = "<your-azure-key>";

pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const UNKNOWN_MIME_TYPE: &str = "Unknown";

#[cfg(target_os = "windows")]
pub const FALLBACK_DRIVE_ROOT: &str = "C:\\";
#[cfg(not(target_os = "windows"))]
pub const FALLBACK_DRIVE_ROOT: &str = "/";
