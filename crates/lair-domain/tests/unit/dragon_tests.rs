//! Unit tests for the dragon entity

use lair_domain::{Dragon, DragonType, Error, NewDragon};

#[test]
fn test_dragon_type_parses_case_insensitively() {
    assert_eq!("fire".parse::<DragonType>().unwrap(), DragonType::Fire);
    assert_eq!(" Water ".parse::<DragonType>().unwrap(), DragonType::Water);
    assert_eq!("EARTH".parse::<DragonType>().unwrap(), DragonType::Earth);
}

#[test]
fn test_dragon_type_rejects_unknown_value() {
    let err = "plasma".parse::<DragonType>().unwrap_err();
    match err {
        Error::InvalidArgument { message } => assert!(message.contains("plasma")),
        other => panic!("Expected InvalidArgument error, got {other:?}"),
    }
}

#[test]
fn test_dragon_type_display_matches_as_str() {
    for kind in DragonType::ALL {
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn test_dragon_serializes_type_field() {
    let dragon = Dragon::from_new("1", NewDragon::new("Smaug", DragonType::Fire, 120));
    let json = serde_json::to_value(&dragon).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"id": "1", "name": "Smaug", "type": "fire", "age": 120})
    );
}

#[test]
fn test_dragon_from_new_keeps_fields() {
    let dragon = Dragon::from_new("7", NewDragon::new("Glaurung", DragonType::Earth, 300));

    assert_eq!(dragon.id, "7");
    assert_eq!(dragon.name, "Glaurung");
    assert_eq!(dragon.dragon_type, DragonType::Earth);
    assert_eq!(dragon.age, 300);
}
