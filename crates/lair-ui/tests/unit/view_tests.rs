//! Rendering tests for the dragon component

use lair_domain::{Dragon, DragonType, NewDragon};
use lair_ui::DragonComponent;

fn smaug() -> Dragon {
    Dragon::from_new("1", NewDragon::new("Smaug", DragonType::Fire, 120))
}

#[test]
fn test_renders_empty_form_without_dragon() {
    let component = DragonComponent::new().unwrap();
    let html = component.create_ui(None).unwrap();

    assert!(html.contains(r#"<form id="dragon-form""#));
    assert!(html.contains(r#"<input type="text" id="name" name="name" value="""#));
    assert!(html.contains(r#"name="age" value="""#));
    assert!(!html.contains("dragon-detail"));
}

#[test]
fn test_form_lists_every_dragon_type() {
    let component = DragonComponent::new().unwrap();
    let html = component.create_ui(None).unwrap();

    for kind in DragonType::ALL {
        let option = format!(r#"<option value="{}">{}</option>"#, kind.as_str(), kind.label());
        assert!(html.contains(&option), "missing option for {kind}");
    }
}

#[test]
fn test_renders_given_dragon_detail_once() {
    let component = DragonComponent::new().unwrap();
    let html = component.create_ui(Some(&smaug())).unwrap();

    assert_eq!(html.matches(r#"class="dragon-detail""#).count(), 1);
    assert!(html.contains("<h2>Smaug</h2>"));
    assert!(html.contains(r#"data-type="fire">Fire</dd>"#));
    assert!(html.contains(r#"<dd class="dragon-age">120</dd>"#));
}

#[test]
fn test_detail_escapes_html() {
    let component = DragonComponent::new().unwrap();
    let dragon = Dragon::from_new("2", NewDragon::new("<b>Smaug</b>", DragonType::Fire, 1));

    let html = component.view().render_detail(&dragon).unwrap();
    assert!(html.contains("&lt;b&gt;Smaug&lt;/b&gt;"));
    assert!(!html.contains("<b>"));
}
