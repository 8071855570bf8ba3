use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub gesture: GestureConfig,
    pub ui: UiConfig,
    pub catalog: CatalogConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureConfig {
    /// Minimum absolute horizontal displacement, in pixels.
    pub distance_threshold: f64,
    /// Minimum average horizontal speed, in pixels per millisecond.
    pub velocity_threshold: f64,
    /// Scale applied to terminal columns before they reach the navigator.
    pub pixels_per_column: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 50.0,
            velocity_threshold: 0.3,
            pixels_per_column: 10.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
    pub input_poll_timeout_ms: u64,
    pub start_page: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            input_poll_timeout_ms: 50,
            start_page: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub path: Option<PathBuf>,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::invalid_argument(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        let defaults = GestureConfig::default();
        if !self.gesture.distance_threshold.is_finite() || self.gesture.distance_threshold < 0.0 {
            self.gesture.distance_threshold = defaults.distance_threshold;
        }
        if !self.gesture.velocity_threshold.is_finite() || self.gesture.velocity_threshold < 0.0 {
            self.gesture.velocity_threshold = defaults.velocity_threshold;
        }
        if !self.gesture.pixels_per_column.is_finite() || self.gesture.pixels_per_column <= 0.0 {
            self.gesture.pixels_per_column = defaults.pixels_per_column;
        }
        self.ui.input_poll_timeout_ms = self.ui.input_poll_timeout_ms.max(1);
        self.ui.theme = self.ui.theme.trim().to_ascii_lowercase();
        if !matches!(self.ui.theme.as_str(), "light" | "dark") {
            warn!(theme = %self.ui.theme, "unknown ui.theme; using dark");
            self.ui.theme = UiConfig::default().theme;
        }
        if self.ui.start_page.trim().is_empty() {
            self.ui.start_page = UiConfig::default().start_page;
        }
        if self.log.level.trim().is_empty() {
            self.log.level = LogConfig::default().level;
        }
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("FOLIO_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("folio").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("folio")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("folio").join("config.toml"));
    }
    None
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::Config;

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("folio_config_{suffix}_{}_{}", process::id(), nanos));
        path
    }

    #[test]
    fn load_from_path_returns_defaults_for_missing_file() {
        let missing = unique_temp_path("missing.toml");
        let config = Config::load_from_path(&missing).expect("missing config should fallback");
        assert_eq!(config, Config::default());
        assert_eq!(config.gesture.distance_threshold, 50.0);
        assert_eq!(config.gesture.velocity_threshold, 0.3);
    }

    #[test]
    fn load_from_path_applies_partial_overrides_and_sanitizes() {
        let path = unique_temp_path("custom.toml");
        fs::write(
            &path,
            r#"
            [gesture]
            distance_threshold = -5.0
            velocity_threshold = 0.8
            pixels_per_column = 0.0

            [ui]
            theme = " Light "
            input_poll_timeout_ms = 0
            start_page = "  "

            [catalog]
            path = "/srv/projects.toml"
            "#,
        )
        .expect("config file should be written");

        let config = Config::load_from_path(&path).expect("config should parse");
        assert_eq!(config.gesture.distance_threshold, 50.0);
        assert_eq!(config.gesture.velocity_threshold, 0.8);
        assert_eq!(config.gesture.pixels_per_column, 10.0);
        assert_eq!(config.ui.theme, "light");
        assert_eq!(config.ui.input_poll_timeout_ms, 1);
        assert_eq!(config.ui.start_page, "/");
        assert_eq!(
            config.catalog.path,
            Some(PathBuf::from("/srv/projects.toml"))
        );
        assert_eq!(config.log.level, "info");

        fs::remove_file(&path).expect("config file should be removed");
    }

    #[test]
    fn load_from_path_replaces_unknown_theme_with_dark() {
        let path = unique_temp_path("theme.toml");
        fs::write(&path, "[ui]\ntheme = \"solarized\"\n").expect("config file should be written");

        let config = Config::load_from_path(&path).expect("config should parse");
        assert_eq!(config.ui.theme, "dark");

        fs::remove_file(&path).expect("config file should be removed");
    }

    #[test]
    fn load_from_path_rejects_malformed_toml() {
        let path = unique_temp_path("broken.toml");
        fs::write(&path, "[gesture\ndistance_threshold = 1").expect("config file should be written");

        assert!(Config::load_from_path(&path).is_err());

        fs::remove_file(&path).expect("config file should be removed");
    }
}
