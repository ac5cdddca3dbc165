//! Dragon component
//!
//! Entry point pairing the view with its listeners.
//!
//! ```ignore
//! let component = DragonComponent::new()?;
//! let html = component.create_ui(None)?;
//!
//! let listeners = component.create_listeners(&injector);
//! let dragon = listeners.on_submit(&DragonFormData::new("Smaug", "fire", "120")).await?;
//! println!("{}", component.create_ui(Some(&dragon))?);
//! ```

use crate::listeners::DragonFormListener;
use crate::view::DragonView;
use lair_domain::entities::Dragon;
use lair_domain::error::Result;
use lair_infrastructure::di::Injector;

/// Headless dragon create/view component
pub struct DragonComponent {
    view: DragonView,
}

impl DragonComponent {
    /// Create the component with compiled templates
    pub fn new() -> Result<Self> {
        Ok(Self {
            view: DragonView::new()?,
        })
    }

    /// Render the component; a dragon adds its detail view
    pub fn create_ui(&self, dragon: Option<&Dragon>) -> Result<String> {
        self.view.render(dragon)
    }

    /// Listeners resolving their dependencies from `injector`
    pub fn create_listeners<'a>(&'a self, injector: &'a Injector) -> DragonFormListener<'a> {
        DragonFormListener::new(injector, &self.view)
    }

    /// The underlying view
    pub fn view(&self) -> &DragonView {
        &self.view
    }
}
