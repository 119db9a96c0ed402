use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Remote provider configuration: the identity service and the document
/// store live behind the same server and key.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RemoteConfig {
    /// Server base URL (e.g., "https://sync.example.com")
    pub server_url: Option<String>,
    /// API key for the identity service
    pub api_key: Option<String>,
}

impl RemoteConfig {
    /// Returns true if the remote provider is usable. When it isn't, the
    /// app runs in offline/guest mode against local storage only.
    pub fn is_configured(&self) -> bool {
        let placeholder = |s: &String| s.is_empty() || s.contains("dummy");
        matches!((&self.server_url, &self.api_key), (Some(url), Some(key))
            if !placeholder(url) && !placeholder(key))
    }
}

/// AI coach configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    /// Text-generation endpoint base URL
    pub api_url: String,
    /// API key; absent means the coach answers with a fixed notice
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            api_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: None,
            model: "gemini-3-flash-preview".to_string(),
        }
    }
}

impl CoachConfig {
    pub fn is_configured(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Namespace for local blob keys and remote document paths
    pub app_id: ConfigValue<String>,
    /// Directory holding user data, session, and custom library files
    pub data_dir: ConfigValue<PathBuf>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
    /// Remote provider configuration
    pub remote: ConfigValue<RemoteConfig>,
    /// AI coach configuration
    pub coach: ConfigValue<CoachConfig>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    app_id: Option<String>,
    data_dir: Option<PathBuf>,
    remote: Option<RemoteConfig>,
    coach: Option<CoachConfig>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut app_id = ConfigValue::new("daybrief".to_string(), ConfigSource::Default);
        let mut data_dir = ConfigValue::new(Self::default_data_dir(), ConfigSource::Default);
        let mut config_file = None;
        let mut remote = ConfigValue::new(RemoteConfig::default(), ConfigSource::Default);
        let mut coach = ConfigValue::new(CoachConfig::default(), ConfigSource::Default);

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(id) = file_config.app_id {
                app_id = ConfigValue::new(id, ConfigSource::File);
            }
            if let Some(dir) = file_config.data_dir {
                // Resolve relative paths against config file's directory
                let resolved = if dir.is_relative() {
                    path.parent().map(|p| p.join(&dir)).unwrap_or(dir)
                } else {
                    dir
                };
                data_dir = ConfigValue::new(resolved, ConfigSource::File);
            }
            if let Some(remote_config) = file_config.remote {
                remote = ConfigValue::new(remote_config, ConfigSource::File);
            }
            if let Some(coach_config) = file_config.coach {
                coach = ConfigValue::new(coach_config, ConfigSource::File);
            }
        }

        // Apply environment variable overrides
        if let Ok(dir) = std::env::var("DAYBRIEF_DATA_DIR") {
            data_dir = ConfigValue::new(PathBuf::from(dir), ConfigSource::Environment);
        }
        if let Ok(url) = std::env::var("DAYBRIEF_SERVER_URL") {
            remote.value.server_url = Some(url);
            remote.source = ConfigSource::Environment;
        }
        if let Ok(key) = std::env::var("DAYBRIEF_API_KEY") {
            remote.value.api_key = Some(key);
            remote.source = ConfigSource::Environment;
        }
        if let Ok(key) = std::env::var("DAYBRIEF_COACH_API_KEY") {
            coach.value.api_key = Some(key);
            coach.source = ConfigSource::Environment;
        }
        if let Ok(model) = std::env::var("DAYBRIEF_COACH_MODEL") {
            coach.value.model = model;
            coach.source = ConfigSource::Environment;
        }

        Ok(Self {
            app_id,
            data_dir,
            config_file,
            remote,
            coach,
        })
    }

    /// Default config file path: ~/.config/daybrief/config.yaml
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("daybrief")
            .join("config.yaml")
    }

    /// Default data directory: ~/.local/share/daybrief
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("daybrief")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
