//! Dragon view rendering
//!
//! Templates are embedded at compile time and rendered with handlebars.
//! Output is HTML text; values are escaped by handlebars.

use handlebars::Handlebars;
use lair_domain::entities::{Dragon, DragonType};
use lair_domain::error::Result;
use lair_infrastructure::error_ext::ErrorContext;
use serde_json::{Value, json};

// Embed templates at compile time
const DRAGON_TEMPLATE: &str = include_str!("templates/dragon.hbs");
const DRAGON_DETAIL_TEMPLATE: &str = include_str!("templates/dragon_detail.hbs");

const DRAGON: &str = "dragon";
const DRAGON_DETAIL: &str = "dragon_detail";

/// Compiled dragon templates
pub struct DragonView {
    handlebars: Handlebars<'static>,
}

impl DragonView {
    /// Compile the embedded templates
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars
            .register_template_string(DRAGON, DRAGON_TEMPLATE)
            .context("Failed to compile dragon template")?;
        handlebars
            .register_template_string(DRAGON_DETAIL, DRAGON_DETAIL_TEMPLATE)
            .context("Failed to compile dragon detail template")?;
        Ok(Self { handlebars })
    }

    /// Render the creation form, plus the detail view when `dragon` is given
    pub fn render(&self, dragon: Option<&Dragon>) -> Result<String> {
        let data = json!({
            "types": type_options(),
            "dragon": dragon.map_or(Value::Null, detail_data),
        });
        self.handlebars
            .render(DRAGON, &data)
            .context("Failed to render dragon view")
    }

    /// Render only the detail view of a dragon
    pub fn render_detail(&self, dragon: &Dragon) -> Result<String> {
        self.handlebars
            .render(DRAGON_DETAIL, &detail_data(dragon))
            .context("Failed to render dragon detail")
    }
}

fn type_options() -> Vec<Value> {
    DragonType::ALL
        .iter()
        .map(|kind| json!({ "value": kind.as_str(), "label": kind.label() }))
        .collect()
}

fn detail_data(dragon: &Dragon) -> Value {
    json!({
        "id": dragon.id,
        "name": dragon.name,
        "type": dragon.dragon_type.as_str(),
        "type_label": dragon.dragon_type.label(),
        "age": dragon.age,
    })
}
