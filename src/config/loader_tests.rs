//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_ends_with_rollcall_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("rollcall") && path_str.ends_with("config.toml"),
            "Path should contain 'rollcall' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_rollcall_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("rollcall.log"),
        "Default log path should end with 'rollcall.log', got: {:?}",
        path
    );
}

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
    let config_path = env::temp_dir().join("rollcall_test_config.toml");

    let toml_content = r#"
log_file_path = "/tmp/rollcall-test.log"
colors = false
mouse = false
initial_search = "ames"
"#;
    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/rollcall-test.log"))
    );
    assert_eq!(config.colors, Some(false));
    assert_eq!(config.mouse, Some(false));
    assert_eq!(config.initial_search, Some("ames".to_string()));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_accepts_empty_file() {
    let config_path = env::temp_dir().join("rollcall_test_empty.toml");
    fs::write(&config_path, "").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert_eq!(result, Ok(Some(ConfigFile::default())));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("rollcall_test_invalid.toml");
    fs::write(&config_path, "colors = [unclosed").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should be a ParseError, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let config_path = env::temp_dir().join("rollcall_test_unknown.toml");
    fs::write(&config_path, "theme = \"monokai\"\n").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

#[test]
#[serial(env)]
fn explicit_path_wins_over_env_var() {
    let explicit = env::temp_dir().join("rollcall_test_explicit.toml");
    let from_env = env::temp_dir().join("rollcall_test_from_env.toml");
    fs::write(&explicit, "colors = false\n").unwrap();
    fs::write(&from_env, "colors = true\n").unwrap();

    env::set_var(CONFIG_ENV_VAR, &from_env);
    let config = load_config_with_precedence(Some(explicit.clone()))
        .unwrap()
        .unwrap();
    env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(config.colors, Some(false));

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(env)]
fn env_var_path_is_used_without_explicit_path() {
    let from_env = env::temp_dir().join("rollcall_test_env_only.toml");
    fs::write(&from_env, "mouse = false\n").unwrap();

    env::set_var(CONFIG_ENV_VAR, &from_env);
    let config = load_config_with_precedence(None).unwrap().unwrap();
    env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(config.mouse, Some(false));

    fs::remove_file(from_env).ok();
}

#[test]
fn merge_config_without_file_returns_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_takes_values_from_file() {
    let file = ConfigFile {
        log_file_path: Some(PathBuf::from("/custom/app.log")),
        colors: Some(false),
        mouse: None,
        initial_search: Some("zane".to_string()),
    };

    let resolved = merge_config(Some(file));
    assert_eq!(resolved.log_file_path, PathBuf::from("/custom/app.log"));
    assert!(!resolved.colors);
    assert!(resolved.mouse, "Unset field should keep the default");
    assert_eq!(resolved.initial_search, Some("zane".to_string()));
}

#[test]
#[serial(env)]
fn env_overrides_log_path_and_colors() {
    env::set_var(LOG_ENV_VAR, "/env/rollcall.log");
    env::set_var("NO_COLOR", "1");
    let resolved = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(LOG_ENV_VAR);
    env::remove_var("NO_COLOR");

    assert_eq!(resolved.log_file_path, PathBuf::from("/env/rollcall.log"));
    assert!(!resolved.colors);
}

#[test]
#[serial(env)]
fn env_overrides_leave_config_alone_when_unset() {
    env::remove_var(LOG_ENV_VAR);
    env::remove_var("NO_COLOR");
    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
fn cli_overrides_win() {
    let base = merge_config(Some(ConfigFile {
        initial_search: Some("from-file".to_string()),
        ..ConfigFile::default()
    }));

    let resolved = apply_cli_overrides(
        base,
        CliOverrides {
            search: Some("from-cli".to_string()),
            colors: Some(false),
            mouse: Some(false),
        },
    );

    assert_eq!(resolved.initial_search, Some("from-cli".to_string()));
    assert!(!resolved.colors);
    assert!(!resolved.mouse);
}

#[test]
fn absent_cli_flags_keep_lower_layers() {
    let base = merge_config(Some(ConfigFile {
        initial_search: Some("from-file".to_string()),
        colors: Some(false),
        ..ConfigFile::default()
    }));

    let resolved = apply_cli_overrides(base.clone(), CliOverrides::default());
    assert_eq!(resolved, base);
}
