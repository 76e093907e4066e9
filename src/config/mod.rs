use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 7860))
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FileConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            log_level: default_log_level(),
            verbose: default_verbose(),
            upstream: UpstreamConfig::default(),
        }
    }
}

fn default_overpass_url() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}

fn default_nominatim_url() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}

fn default_openweather_url() -> String {
    "https://api.openweathermap.org/data/2.5/weather".to_string()
}

fn default_translate_url() -> String {
    "https://api.mymemory.translated.net/get".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("poi-finder/{}", env!("CARGO_PKG_VERSION"))
}

fn default_country() -> String {
    "Vietnam".to_string()
}

/// Endpoints and credentials for the third-party services
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UpstreamConfig {
    #[serde(default = "default_overpass_url")]
    pub overpass_url: String,
    #[serde(default = "default_nominatim_url")]
    pub nominatim_url: String,
    #[serde(default = "default_openweather_url")]
    pub openweather_url: String,
    #[serde(default = "default_translate_url")]
    pub translate_url: String,
    #[serde(default)]
    pub openweather_api_key: Option<String>,
    /// Ceiling for every outbound call, connect through body
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Appended to every geocoding query
    #[serde(default = "default_country")]
    pub country: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            overpass_url: default_overpass_url(),
            nominatim_url: default_nominatim_url(),
            openweather_url: default_openweather_url(),
            translate_url: default_translate_url(),
            openweather_api_key: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            country: default_country(),
        }
    }
}

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind: Option<SocketAddr>,
    pub openweather_api_key: Option<String>,
    pub verbose: bool,
}

impl FileConfig {
    /// Search the default locations and return the first config that parses.
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested config file. Missing or invalid files are errors.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Apply command-line values on top of the file values.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(bind) = overrides.bind {
            self.bind = bind;
        }
        if let Some(key) = overrides.openweather_api_key.filter(|k| !k.is_empty()) {
            self.upstream.openweather_api_key = Some(key);
        }
        self.verbose = self.verbose || overrides.verbose;
        self
    }

    /// Filter directive used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &str {
        if self.verbose { "debug" } else { &self.log_level }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("poi-finder.toml"));
    paths.push(PathBuf::from(".poi-finder.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("poi-finder").join("config.toml"));
        paths.push(config_dir.join("poi-finder.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".poi-finder.toml"));
        paths.push(home.join(".config").join("poi-finder").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.bind.port(), 7860);
        assert_eq!(config.upstream.timeout_secs, 30);
        assert_eq!(config.upstream.country, "Vietnam");
        assert!(config.upstream.openweather_api_key.is_none());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
log_level = "warn"

[upstream]
overpass_url = "http://localhost:12345/api/interpreter"
openweather_api_key = "from-file"
"#
        )
        .unwrap();

        let config = FileConfig::from_path(file.path()).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(
            config.upstream.overpass_url,
            "http://localhost:12345/api/interpreter"
        );
        assert_eq!(
            config.upstream.nominatim_url,
            "https://nominatim.openstreetmap.org/search"
        );
        assert_eq!(config.upstream.openweather_api_key.as_deref(), Some("from-file"));
        assert_eq!(config.bind, default_bind());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind = [not valid").unwrap();
        assert!(FileConfig::from_path(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileConfig::from_path(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut config = FileConfig::default();
        config.upstream.openweather_api_key = Some("from-file".to_string());

        let config = config.with_overrides(Overrides {
            bind: Some("127.0.0.1:9000".parse().unwrap()),
            openweather_api_key: Some("from-cli".to_string()),
            verbose: true,
        });

        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.upstream.openweather_api_key.as_deref(), Some("from-cli"));
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_empty_overrides_keep_file_values() {
        let mut config = FileConfig::default();
        config.upstream.openweather_api_key = Some("from-file".to_string());

        let config = config.with_overrides(Overrides {
            openweather_api_key: Some(String::new()),
            ..Overrides::default()
        });

        assert_eq!(config.bind, default_bind());
        assert_eq!(config.upstream.openweather_api_key.as_deref(), Some("from-file"));
        assert!(!config.verbose);
    }
}
