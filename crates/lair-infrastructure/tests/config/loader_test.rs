//! Figment loader tests
//!
//! Each test runs inside a `figment::Jail`, which isolates the working
//! directory and environment variables.

use figment::Jail;
use lair_domain::Error;
use lair_infrastructure::config::{AppConfig, ConfigLoader};
use serde_json::{Value, json};

/// Keep user-level config files (`~/.lair`, the XDG config dir) out of the jail
fn isolate_home(jail: &mut Jail) {
    let dir = jail.directory().display().to_string();
    jail.set_env("HOME", &dir);
    jail.set_env("XDG_CONFIG_HOME", &dir);
}

#[test]
fn test_defaults_without_file_or_env() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.repository.provider, "memory");
        Ok(())
    });
}

#[test]
fn test_default_file_in_working_directory() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file(
            "lair.toml",
            r#"
            [logging]
            level = "debug"

            [injector.values]
            lairName = "Erebor"
            hoardSize = 3
            "#,
        )?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.injector.values.get("lairName"), Some(&json!("Erebor")));
        assert_eq!(config.injector.values.get("hoardSize"), Some(&json!(3)));
        Ok(())
    });
}

#[test]
fn test_explicit_path_and_env_override() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file(
            "custom.toml",
            r#"
            [logging]
            level = "warn"
            json_format = false
            "#,
        )?;
        jail.set_env("LAIR__LOGGING__JSON_FORMAT", "true");
        jail.set_env("LAIR__LOGGING__LEVEL", "error");

        let config = ConfigLoader::new()
            .with_config_path("custom.toml")
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(config.logging.level, "error");
        assert!(config.logging.json_format);
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.set_env("DRAGONS__REPOSITORY__PROVIDER", "postgres");

        let config = ConfigLoader::new()
            .with_env_prefix("DRAGONS")
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(config.repository.provider, "postgres");
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        let loader = ConfigLoader::new().with_config_path("does-not-exist.toml");
        let config = loader.load().map_err(|e| e.to_string())?;
        assert_eq!(config, AppConfig::default());
        assert!(loader.config_path().is_some());
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_is_rejected() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.set_env("LAIR__LOGGING__LEVEL", "loud");
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_empty_repository_provider_is_rejected() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file("lair.toml", "[repository]\nprovider = \"\"\n")?;
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_save_then_load() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        let path = jail.directory().join("saved.toml");

        let mut config = AppConfig::default();
        config.logging.level = "trace".to_string();
        config
            .injector
            .values
            .insert("motto".to_string(), json!("hoard everything"));

        let loader = ConfigLoader::new();
        loader
            .save_to_file(&config, &path)
            .map_err(|e| e.to_string())?;

        let loaded = ConfigLoader::new()
            .with_config_path(&path)
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(loaded.logging.level, "trace");
        assert_eq!(
            loaded.injector.values.get("motto"),
            Some(&json!("hoard everything"))
        );
        Ok(())
    });
}

#[test]
fn test_env_injector_value_keeps_name_case() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.set_env("LAIR__INJECTOR__VALUES__lairName", "Erebor");
        jail.set_env("LAIR__INJECTOR__VALUES__hoardSize", "3");

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.injector.values.get("lairName"), Some(&json!("Erebor")));
        assert_eq!(config.injector.values.get("hoardSize"), Some(&json!(3)));
        assert!(!config.injector.values.contains_key("lairname"));
        Ok(())
    });
}

#[test]
fn test_env_overrides_file_injector_value() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file("lair.toml", "[injector.values]\nlairName = \"Erebor\"\n")?;
        jail.set_env("LAIR__INJECTOR__VALUES__lairName", "Lonely Mountain");
        jail.set_env("LAIR__LOGGING__LEVEL", "debug");

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.injector.values.len(), 1);
        assert_eq!(
            config.injector.values.get("lairName"),
            Some(&json!("Lonely Mountain"))
        );
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_save_skips_null_values() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        let path = jail.directory().join("saved.toml");

        let mut config = AppConfig::default();
        config.injector.values.insert("nothing".to_string(), Value::Null);
        config
            .injector
            .values
            .insert("hoard".to_string(), json!({"gold": 3, "lost": null}));

        ConfigLoader::new()
            .save_to_file(&config, &path)
            .map_err(|e| e.to_string())?;

        let loaded = ConfigLoader::new()
            .with_config_path(&path)
            .load()
            .map_err(|e| e.to_string())?;
        assert!(!loaded.injector.values.contains_key("nothing"));
        assert_eq!(loaded.injector.values.get("hoard"), Some(&json!({"gold": 3})));
        Ok(())
    });
}

#[test]
fn test_empty_value_name_is_configuration_error() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file("lair.toml", "[injector.values]\n\"\" = 1\n")?;

        match ConfigLoader::new().load() {
            Err(Error::Configuration { message, .. }) => {
                assert!(message.contains("Injector value names"));
            }
            other => panic!("Expected Configuration error, got {other:?}"),
        }
        Ok(())
    });
}
