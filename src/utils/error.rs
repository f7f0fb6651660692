use thiserror::Error;

#[derive(Error, Debug)]
pub enum MuseumError {
    #[error("Manifest unavailable at {path}: {reason}")]
    ManifestUnavailable { path: String, reason: String },

    #[error("Asset missing: {uri}")]
    AssetMissing { uri: String },

    #[error("No photos resolved for theme {theme_id}")]
    NoPhotosResolved { theme_id: String },

    #[error("Unsupported layout: {0}")]
    UnsupportedLayout(String),

    #[error("Unsupported display style: {0}")]
    UnsupportedDisplayStyle(String),

    #[error("Theme not found at index {index} ({available} themes configured)")]
    ThemeNotFound { index: usize, available: usize },

    #[error("A theme is already loading")]
    LoadInProgress,

    #[error("Timed out after {millis}ms waiting for {uri}")]
    ProbeTimeout { uri: String, millis: u128 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl MuseumError {
    /// Short message meant for the terminal rather than the log.
    pub fn user_friendly_message(&self) -> String {
        match self {
            MuseumError::UnsupportedLayout(name) => {
                format!("Layout '{}' is not supported", name)
            }
            MuseumError::UnsupportedDisplayStyle(name) => {
                format!("Display style '{}' is not supported", name)
            }
            MuseumError::ThemeNotFound { index, available } => {
                format!("There is no theme #{} (only {} configured)", index, available)
            }
            MuseumError::LoadInProgress => "Another theme is still loading".to_string(),
            MuseumError::ConfigError { .. }
            | MuseumError::ConfigValidationError { .. }
            | MuseumError::InvalidConfigValueError { .. }
            | MuseumError::MissingConfigError { .. } => {
                format!("The museum configuration is invalid: {}", self)
            }
            MuseumError::Io(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MuseumError::UnsupportedLayout(_) => "Use one of: wall, circle, grid",
            MuseumError::UnsupportedDisplayStyle(_) => {
                "Use one of: wall_mounted, floating, pedestal, hanging, scattered, circular"
            }
            MuseumError::ThemeNotFound { .. } => "Pick a theme id listed in the configuration",
            MuseumError::LoadInProgress => "Wait for the current theme to finish loading",
            MuseumError::ManifestUnavailable { .. } => {
                "Add a photos.json manifest to the theme folder"
            }
            MuseumError::AssetMissing { .. } | MuseumError::ProbeTimeout { .. } => {
                "Check that the photo files exist and are reachable"
            }
            MuseumError::Http(_) => "Check the network connection and the base URL",
            MuseumError::ConfigError { .. }
            | MuseumError::ConfigValidationError { .. }
            | MuseumError::InvalidConfigValueError { .. }
            | MuseumError::MissingConfigError { .. } => {
                "Fix the configuration file and run again"
            }
            _ => "Run again with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, MuseumError>;
