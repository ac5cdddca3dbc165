//! Tests for the in-memory dragon repository

use lair_domain::{DragonRepository, DragonType, NewDragon};
use lair_providers::MemoryDragonRepository;

fn smaug() -> NewDragon {
    NewDragon::new("Smaug", DragonType::Fire, 120)
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let repo = MemoryDragonRepository::new();

    let first = repo.create_dragon(smaug()).await.unwrap();
    let second = repo
        .create_dragon(NewDragon::new("Vermithrax", DragonType::Fire, 400))
        .await
        .unwrap();

    assert_eq!(first.id, "1");
    assert_eq!(second.id, "2");
    assert_eq!(repo.len(), 2);
}

#[tokio::test]
async fn test_find_dragon_by_id() {
    let repo = MemoryDragonRepository::new();
    let created = repo.create_dragon(smaug()).await.unwrap();

    let found = repo.find_dragon_by_id("1").await.unwrap();
    assert_eq!(found, Some(created));

    let missing = repo.find_dragon_by_id("42").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_all_orders_by_numeric_id() {
    let repo = MemoryDragonRepository::new();
    for i in 0..11 {
        repo.create_dragon(NewDragon::new(format!("d{i}"), DragonType::Air, i))
            .await
            .unwrap();
    }

    let ids: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();

    let expected: Vec<String> = (1..=11).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_delete_dragon() {
    let repo = MemoryDragonRepository::new();
    repo.create_dragon(smaug()).await.unwrap();

    assert!(repo.delete_dragon("1").await.unwrap());
    assert!(!repo.delete_dragon("1").await.unwrap());
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_delete_all_resets_sequence() {
    let repo = MemoryDragonRepository::new();
    repo.create_dragon(smaug()).await.unwrap();
    repo.create_dragon(smaug()).await.unwrap();

    repo.delete_all().await.unwrap();
    assert!(repo.is_empty());

    let again = repo.create_dragon(smaug()).await.unwrap();
    assert_eq!(again.id, "1");
}

#[test]
fn test_provider_name() {
    assert_eq!(MemoryDragonRepository::default().provider_name(), "memory");
}
