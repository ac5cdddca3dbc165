//! Dragon form listeners
//!
//! The repository is looked up in the injector on every event, so a
//! listener created before the injector is populated still works once it is.

use crate::form::DragonFormData;
use crate::view::DragonView;
use lair_domain::constants::DRAGON_REPOSITORY;
use lair_domain::entities::Dragon;
use lair_domain::error::{Error, Result};
use lair_domain::repositories::DragonRepository;
use lair_infrastructure::di::Injector;
use std::sync::Arc;
use tracing::{debug, info};

/// Event handlers bound to an injector
pub struct DragonFormListener<'a> {
    injector: &'a Injector,
    view: &'a DragonView,
}

impl<'a> DragonFormListener<'a> {
    /// Bind listeners to an injector and view
    pub fn new(injector: &'a Injector, view: &'a DragonView) -> Self {
        Self { injector, view }
    }

    /// Handle a form submit: persist a new dragon
    ///
    /// # Errors
    /// * `ProviderNotFound` - no repository registered under `dragonRepository`
    /// * `InvalidArgument` - the form values do not describe a dragon
    pub async fn on_submit(&self, form: &DragonFormData) -> Result<Dragon> {
        let repository = self.repository()?;
        let draft = form.parse()?;

        let dragon = repository.create_dragon(draft).await?;
        info!(id = %dragon.id, name = %dragon.name, "Dragon created");
        Ok(dragon)
    }

    /// Render the detail view of a stored dragon
    pub async fn on_show(&self, id: &str) -> Result<String> {
        let repository = self.repository()?;
        let dragon = repository
            .find_dragon_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("dragon {id}")))?;

        debug!(id, "Rendering dragon detail");
        self.view.render_detail(&dragon)
    }

    fn repository(&self) -> Result<Arc<dyn DragonRepository>> {
        self.injector.inject(DRAGON_REPOSITORY)
    }
}
