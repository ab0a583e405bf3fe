//! Tests for the catalogue configuration system.

use std::sync::Mutex;

use comverter_core::config::catalogue_config::CONFIG_ENV_VAR;
use comverter_core::config::CatalogueConfig;
use comverter_core::errors::{ConfigError, PatternError};
use comverter_core::registry::FamilyRegistry;
use comverter_core::types::FamilyName;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper: create a temporary directory.
fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

const LUA_CONFIG: &str = r#"
[registry]
priority = ["Lua", "Hash"]
disabled = ["Python"]

[[families]]
name = "Lua"
boundaries = [
    { name = "LuaBlockHeader", pattern = '--\[\[' },
    { name = "LuaBlockFooter", pattern = '\]\]' },
]
"#;

#[test]
fn test_empty_config_yields_defaults() {
    let config = CatalogueConfig::from_toml("").unwrap();
    assert!(config.registry.effective_include_defaults());
    assert!(config.families.is_empty());

    let registry = FamilyRegistry::from_config(&config).unwrap();
    assert_eq!(registry.len(), 6);
    assert_eq!(registry.priority()[0], FamilyName::JAVADOC);
}

#[test]
fn test_custom_family_disabled_and_priority() {
    let config = CatalogueConfig::from_toml(LUA_CONFIG).unwrap();
    let registry = FamilyRegistry::from_config(&config).unwrap();

    assert!(registry.family(&FamilyName::PYTHON).is_none());
    assert_eq!(registry.priority()[0], "Lua");
    assert_eq!(registry.priority()[1], FamilyName::HASH);
    assert_eq!(registry.get_matching_family("--[[").unwrap().name(), "Lua");
    assert_eq!(registry.get_matching_family("#").unwrap().name(), &FamilyName::HASH);
}

#[test]
fn test_custom_family_replaces_default() {
    let config = CatalogueConfig::from_toml(
        r#"
[[families]]
name = "Hash"
boundaries = [{ name = "HashBang", pattern = '#!' }]
"#,
    )
    .unwrap();
    let registry = FamilyRegistry::from_config(&config).unwrap();

    assert_eq!(registry.len(), 6);
    assert!(registry.matches_family("#!", "Hash"));
    assert!(!registry.matches_family("##", "Hash"));
    assert_eq!(registry.priority()[5], FamilyName::HASH);
}

#[test]
fn test_exclude_defaults() {
    let config = CatalogueConfig::from_toml(
        r#"
[registry]
include_defaults = false

[[families]]
name = "Sql"
boundaries = [{ name = "DashDash", pattern = '-{2,}' }]
"#,
    )
    .unwrap();
    let registry = FamilyRegistry::from_config(&config).unwrap();

    assert_eq!(registry.len(), 1);
    assert!(registry.get_matching_family("/**").is_none());
    assert!(registry.matches_family("---", "Sql"));
}

#[test]
fn test_invalid_toml_syntax() {
    let result = CatalogueConfig::from_toml("this is not valid toml {{{{");
    match result.unwrap_err() {
        ConfigError::ParseError { .. } => {} // expected
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_invalid_pattern_fails_registry_build() {
    let config = CatalogueConfig::from_toml(
        r#"
[[families]]
name = "Broken"
boundaries = [{ name = "Unclosed", pattern = '(/\*' }]
"#,
    )
    .unwrap();

    match FamilyRegistry::from_config(&config).unwrap_err() {
        ConfigError::Pattern(PatternError::InvalidPattern { boundary, .. }) => {
            assert_eq!(boundary, "Unclosed");
        }
        other => panic!("Expected Pattern error, got: {:?}", other),
    }
}

#[test]
fn test_validation_rejects_duplicates_and_empty_names() {
    let duplicate = r#"
[[families]]
name = "Lua"

[[families]]
name = "Lua"
"#;
    assert!(matches!(
        CatalogueConfig::from_toml(duplicate),
        Err(ConfigError::ValidationFailed { .. })
    ));

    let empty = r#"
[[families]]
name = "  "
"#;
    match CatalogueConfig::from_toml(empty).unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "families[0].name"),
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }

    let empty_boundary = r#"
[[families]]
name = "Lua"
boundaries = [{ name = "", pattern = '--' }]
"#;
    match CatalogueConfig::from_toml(empty_boundary).unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "families[0].boundaries[0].name")
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_load_from_file() {
    let dir = tempdir();
    let path = dir.path().join("comverter.toml");
    std::fs::write(&path, LUA_CONFIG).unwrap();

    let config = CatalogueConfig::load(&path).unwrap();
    assert_eq!(config.families.len(), 1);
    assert_eq!(config.registry.disabled, vec!["Python".to_string()]);
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir();
    let result = CatalogueConfig::load(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
}

#[test]
fn test_from_env() {
    let _lock = ENV_MUTEX.lock().unwrap();

    std::env::remove_var(CONFIG_ENV_VAR);
    let config = CatalogueConfig::from_env().unwrap();
    assert!(config.families.is_empty());

    let dir = tempdir();
    let path = dir.path().join("comverter.toml");
    std::fs::write(&path, LUA_CONFIG).unwrap();
    std::env::set_var(CONFIG_ENV_VAR, &path);
    let config = CatalogueConfig::from_env().unwrap();
    assert_eq!(config.families[0].name, "Lua");

    std::env::remove_var(CONFIG_ENV_VAR);
}

#[test]
fn test_toml_round_trip() {
    let config = CatalogueConfig::from_toml(LUA_CONFIG).unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = CatalogueConfig::from_toml(&rendered).unwrap();

    assert_eq!(reparsed.families, config.families);
    assert_eq!(reparsed.registry.priority, config.registry.priority);
}

#[test]
fn test_configured_pattern_cannot_escape_anchors() {
    let config = CatalogueConfig::from_toml(
        r#"
[registry]
include_defaults = false

[[families]]
name = "Lua"
boundaries = [{ name = "LuaBlockHeader", pattern = '--\[\[)|(?:x' }]
"#,
    )
    .unwrap();

    match FamilyRegistry::from_config(&config).unwrap_err() {
        ConfigError::Pattern(PatternError::InvalidPattern { boundary, .. }) => {
            assert_eq!(boundary, "LuaBlockHeader");
        }
        other => panic!("Expected Pattern error, got: {:?}", other),
    }
}

#[test]
fn test_load_unreadable_path_is_not_file_not_found() {
    let dir = tempdir();
    // A directory exists but cannot be read as a file.
    match CatalogueConfig::load(dir.path()).unwrap_err() {
        ConfigError::ReadFailed { path, message } => {
            assert_eq!(path, dir.path().display().to_string());
            assert!(!message.is_empty());
        }
        other => panic!("Expected ReadFailed, got: {:?}", other),
    }
}
