//! Dragon Repository Interface

use crate::entities::{Dragon, NewDragon};
use crate::error::Result;
use async_trait::async_trait;

/// Repository: Dragon persistence
///
/// Implementations assign ids on creation. Ids are decimal strings handed
/// out in increasing order starting at `"1"`; [`delete_all`] restarts the
/// sequence.
///
/// # Example
///
/// ```ignore
/// use lair_domain::{DragonRepository, DragonType, NewDragon};
///
/// let smaug = repo.create_dragon(NewDragon::new("Smaug", DragonType::Fire, 120)).await?;
/// assert_eq!(repo.find_dragon_by_id(&smaug.id).await?, Some(smaug));
/// repo.delete_all().await?;
/// ```
///
/// [`delete_all`]: DragonRepository::delete_all
#[async_trait]
pub trait DragonRepository: Send + Sync {
    /// Store a new dragon and return it with its assigned id
    async fn create_dragon(&self, dragon: NewDragon) -> Result<Dragon>;

    /// Look up a dragon by id
    async fn find_dragon_by_id(&self, id: &str) -> Result<Option<Dragon>>;

    /// All stored dragons ordered by id
    async fn find_all(&self) -> Result<Vec<Dragon>>;

    /// Remove one dragon; returns whether anything was removed
    async fn delete_dragon(&self, id: &str) -> Result<bool>;

    /// Remove every dragon and reset the id sequence
    async fn delete_all(&self) -> Result<()>;

    /// Backend name for diagnostics
    fn provider_name(&self) -> &str;
}
