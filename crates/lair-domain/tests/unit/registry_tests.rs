//! Unit tests for the repository backend registry
//!
//! No backend crate is linked here, so the registry is empty.

use lair_domain::ports::{DragonRepositoryConfig, list_dragon_repositories, resolve_dragon_repository};

#[test]
fn test_unknown_backend_reports_name() {
    let result = resolve_dragon_repository(&DragonRepositoryConfig::new("postgres"));
    let err = result.err().expect("unknown backend should fail");
    assert!(err.contains("postgres"));
}

#[test]
fn test_registry_is_empty_without_backends() {
    assert!(list_dragon_repositories().is_empty());
}

#[test]
fn test_config_builder() {
    let config = DragonRepositoryConfig::new("memory").with_extra("capacity", "10");
    assert_eq!(config.provider, "memory");
    assert_eq!(config.extra.get("capacity").map(String::as_str), Some("10"));
    assert_eq!(DragonRepositoryConfig::default_backend().provider, "memory");
}
