//! Configuration file loading with precedence handling.

use crate::state::{DiscoveryPolicy, FilterMode, PageSize, ViewPolicies};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "FOLIO_CONFIG";
/// Environment variable overriding the content document path.
pub const ENV_CONTENT: &str = "FOLIO_CONTENT";
/// Environment variable overriding the blog page size.
pub const ENV_BLOG_PAGE_SIZE: &str = "FOLIO_BLOG_PAGE_SIZE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting from the environment has an unusable value.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Setting name (environment variable).
        key: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Content document to open when none is given on the command line.
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Posts per blog page; 0 shows all posts on one page.
    #[serde(default)]
    pub blog_page_size: Option<usize>,

    /// Projects per gallery page; 0 shows all projects on one page.
    #[serde(default)]
    pub project_page_size: Option<usize>,

    /// Query shape of the blog index.
    #[serde(default)]
    pub blog_filter: Option<FilterMode>,

    /// Query shape of the project gallery.
    #[serde(default)]
    pub project_filter: Option<FilterMode>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Show the help overlay on startup.
    #[serde(default)]
    pub show_help: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Content document, if any source named one.
    pub content_path: Option<PathBuf>,
    /// Posts per blog page (0 = unbounded).
    pub blog_page_size: usize,
    /// Projects per gallery page (0 = unbounded).
    pub project_page_size: usize,
    /// Blog query shape.
    pub blog_filter: FilterMode,
    /// Project gallery query shape.
    pub project_filter: FilterMode,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Show help overlay on startup.
    pub show_help: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            blog_page_size: PageSize::BLOG_DEFAULT,
            project_page_size: 0,
            blog_filter: FilterMode::Text,
            project_filter: FilterMode::Facets,
            log_file_path: default_log_path(),
            show_help: false,
        }
    }
}

impl ResolvedConfig {
    /// Discovery policies of the blog and project views.
    pub fn policies(&self) -> ViewPolicies {
        ViewPolicies {
            blog: DiscoveryPolicy {
                mode: self.blog_filter,
                page_size: PageSize::from_count(self.blog_page_size),
            },
            projects: DiscoveryPolicy {
                mode: self.project_filter,
                page_size: PageSize::from_count(self.project_page_size),
            },
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/folio/folio.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("folio").join("folio.log"),
        None => PathBuf::from("folio.log"),
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/folio/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FOLIO_CONFIG` environment variable
/// 3. Default path `~/.config/folio/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{ENV_CONFIG} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        content_path: config.content_path.or(defaults.content_path),
        blog_page_size: config.blog_page_size.unwrap_or(defaults.blog_page_size),
        project_page_size: config
            .project_page_size
            .unwrap_or(defaults.project_page_size),
        blog_filter: config.blog_filter.unwrap_or(defaults.blog_filter),
        project_filter: config.project_filter.unwrap_or(defaults.project_filter),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        show_help: config.show_help.unwrap_or(defaults.show_help),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `FOLIO_CONTENT` and `FOLIO_BLOG_PAGE_SIZE`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if `FOLIO_BLOG_PAGE_SIZE` is not a
/// non-negative integer.
pub fn apply_env_overrides(config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from any key lookup. `apply_env_overrides` reads the
/// process environment.
pub fn apply_overrides_from<F>(
    mut config: ResolvedConfig,
    lookup: F,
) -> Result<ResolvedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(content) = lookup(ENV_CONTENT).filter(|v| !v.is_empty()) {
        config.content_path = Some(PathBuf::from(content));
    }

    if let Some(raw) = lookup(ENV_BLOG_PAGE_SIZE) {
        config.blog_page_size =
            raw.trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: ENV_BLOG_PAGE_SIZE.to_string(),
                    reason: format!("'{raw}': {e}"),
                })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    content_override: Option<PathBuf>,
    page_size_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(content) = content_override {
        config.content_path = Some(content);
    }

    if let Some(page_size) = page_size_override {
        config.blog_page_size = page_size;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
