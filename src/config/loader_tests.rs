//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::collections::HashMap;
use std::env;
use std::fs;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ===== Paths =====

#[test]
fn default_config_path_contains_folio_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("folio") && path_str.ends_with("config.toml"),
        "Path should contain 'folio' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_folio_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("folio.log"),
        "Default log path should end with 'folio.log', got: {:?}",
        path
    );
}

// ===== load_config_file =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("folio_test_config.toml");

    let toml_content = r#"
content_path = "/srv/portfolio/content.json"
blog_page_size = 5
project_page_size = 0
blog_filter = "combined"
project_filter = "facets"
show_help = true
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    let config = result
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");
    assert_eq!(
        config.content_path,
        Some(PathBuf::from("/srv/portfolio/content.json"))
    );
    assert_eq!(config.blog_page_size, Some(5));
    assert_eq!(config.project_page_size, Some(0));
    assert_eq!(config.blog_filter, Some(FilterMode::Combined));
    assert_eq!(config.project_filter, Some(FilterMode::Facets));
    assert_eq!(config.show_help, Some(true));
    assert_eq!(config.log_file_path, None);
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("folio_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write config");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => assert_eq!(path, config_path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"monokai\"");
    assert!(result.is_err(), "Unknown fields should be rejected");
}

#[test]
fn config_file_rejects_unknown_filter_mode() {
    let result: Result<ConfigFile, _> = toml::from_str("blog_filter = \"fuzzy\"");
    assert!(result.is_err(), "Only text, facets and combined are valid");
}

// ===== merge_config =====

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.content_path, None);
    assert_eq!(config.blog_page_size, 3);
    assert_eq!(config.project_page_size, 0);
    assert_eq!(config.blog_filter, FilterMode::Text);
    assert_eq!(config.project_filter, FilterMode::Facets);
    assert!(!config.show_help);
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let file = ConfigFile {
        blog_page_size: Some(6),
        project_filter: Some(FilterMode::Combined),
        log_file_path: Some(PathBuf::from("/custom/path/to/app.log")),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));

    assert_eq!(resolved.blog_page_size, 6);
    assert_eq!(resolved.project_filter, FilterMode::Combined);
    assert_eq!(resolved.log_file_path, PathBuf::from("/custom/path/to/app.log"));
    assert_eq!(resolved.blog_filter, FilterMode::Text);
    assert_eq!(resolved.project_page_size, 0);
}

#[test]
fn policies_follow_resolved_values() {
    let config = ResolvedConfig {
        blog_page_size: 0,
        project_page_size: 4,
        ..ResolvedConfig::default()
    };

    let policies = config.policies();

    assert_eq!(policies.blog.page_size, PageSize::Unbounded);
    assert_eq!(policies.blog.mode, FilterMode::Text);
    assert_eq!(policies.projects.page_size.get(), Some(4));
    assert_eq!(policies.projects.mode, FilterMode::Facets);
}

#[test]
fn default_policies_match_portfolio_defaults() {
    assert_eq!(ResolvedConfig::default().policies(), ViewPolicies::default());
}

// ===== Env overrides =====

#[test]
fn overrides_apply_content_and_page_size() {
    let result = apply_overrides_from(
        ResolvedConfig::default(),
        lookup(&[(ENV_CONTENT, "/tmp/content.json"), (ENV_BLOG_PAGE_SIZE, " 10 ")]),
    )
    .unwrap();

    assert_eq!(result.content_path, Some(PathBuf::from("/tmp/content.json")));
    assert_eq!(result.blog_page_size, 10);
}

#[test]
fn overrides_ignore_empty_content() {
    let result =
        apply_overrides_from(ResolvedConfig::default(), lookup(&[(ENV_CONTENT, "")])).unwrap();
    assert_eq!(result.content_path, None);
}

#[test]
fn overrides_reject_non_numeric_page_size() {
    let err = apply_overrides_from(
        ResolvedConfig::default(),
        lookup(&[(ENV_BLOG_PAGE_SIZE, "three")]),
    )
    .unwrap_err();

    match err {
        ConfigError::InvalidValue { key, reason } => {
            assert_eq!(key, ENV_BLOG_PAGE_SIZE);
            assert!(reason.contains("three"));
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn overrides_no_change_when_nothing_set() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_overrides_from(base.clone(), lookup(&[])), Ok(base));
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(folio_env)]
fn apply_env_overrides_reads_process_environment() {
    let _content = EnvGuard::new(ENV_CONTENT);
    let _page_size = EnvGuard::new(ENV_BLOG_PAGE_SIZE);
    env::set_var(ENV_CONTENT, "/from/env.json");

    let result = apply_env_overrides(ResolvedConfig::default()).unwrap();

    assert_eq!(result.content_path, Some(PathBuf::from("/from/env.json")));
    assert_eq!(result.blog_page_size, 3);
}

// ===== load_config_with_precedence =====

#[test]
#[serial(folio_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);

    let temp_dir = env::temp_dir();
    let explicit_path = temp_dir.join("folio_explicit.toml");
    fs::write(&explicit_path, "blog_page_size = 4").expect("Failed to write explicit config");

    let env_path = temp_dir.join("folio_env.toml");
    fs::write(&env_path, "blog_page_size = 9").expect("Failed to write env config");
    env::set_var(ENV_CONFIG, &env_path);

    let result = load_config_with_precedence(Some(explicit_path.clone()));
    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();

    let config = result.unwrap().unwrap();
    assert_eq!(
        config.blog_page_size,
        Some(4),
        "Should use explicit path, not FOLIO_CONFIG env var"
    );
}

#[test]
#[serial(folio_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);

    let env_path = env::temp_dir().join("folio_env_only.toml");
    fs::write(&env_path, "project_page_size = 2").expect("Failed to write env config");
    env::set_var(ENV_CONFIG, &env_path);

    let result = load_config_with_precedence(None);
    fs::remove_file(env_path).ok();

    let config = result.unwrap().unwrap();
    assert_eq!(config.project_page_size, Some(2));
}

#[test]
#[serial(folio_config)]
fn load_config_with_precedence_rejects_empty_env_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);
    env::set_var(ENV_CONFIG, "");

    let result = load_config_with_precedence(None);

    assert!(matches!(result, Err(ConfigError::InvalidPath(_))));
}

// ===== CLI overrides and full chain =====

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}

#[test]
fn precedence_chain_full_defaults_to_cli() {
    let file = ConfigFile {
        content_path: Some(PathBuf::from("/from/file.json")),
        blog_page_size: Some(5),
        ..ConfigFile::default()
    };

    let merged = merge_config(Some(file));
    assert_eq!(merged.blog_page_size, 5);

    let with_env = apply_overrides_from(
        merged,
        lookup(&[(ENV_CONTENT, "/from/env.json"), (ENV_BLOG_PAGE_SIZE, "7")]),
    )
    .unwrap();
    assert_eq!(with_env.content_path, Some(PathBuf::from("/from/env.json")));
    assert_eq!(with_env.blog_page_size, 7);

    let resolved = apply_cli_overrides(with_env, Some(PathBuf::from("/from/cli.json")), Some(2));
    assert_eq!(resolved.content_path, Some(PathBuf::from("/from/cli.json")));
    assert_eq!(resolved.blog_page_size, 2);
}
