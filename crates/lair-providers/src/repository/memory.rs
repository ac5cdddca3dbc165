//! In-memory dragon repository
//!
//! Stores dragons in a concurrent hash map. Data is not persisted and is lost
//! when the repository is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use lair_domain::constants::FIRST_DRAGON_ID;
use lair_domain::entities::{Dragon, NewDragon};
use lair_domain::error::Result;
use lair_domain::ports::{DRAGON_REPOSITORIES, DragonRepositoryConfig, DragonRepositoryEntry};
use lair_domain::repositories::DragonRepository;
use tracing::debug;

/// In-memory dragon repository
pub struct MemoryDragonRepository {
    dragons: DashMap<String, Dragon>,
    next_id: AtomicU64,
}

impl MemoryDragonRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            dragons: DashMap::new(),
            next_id: AtomicU64::new(FIRST_DRAGON_ID),
        }
    }

    /// Number of stored dragons
    pub fn len(&self) -> usize {
        self.dragons.len()
    }

    /// Whether the repository holds no dragons
    pub fn is_empty(&self) -> bool {
        self.dragons.is_empty()
    }
}

impl Default for MemoryDragonRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DragonRepository for MemoryDragonRepository {
    async fn create_dragon(&self, dragon: NewDragon) -> Result<Dragon> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        let dragon = Dragon::from_new(id.clone(), dragon);
        self.dragons.insert(id, dragon.clone());
        debug!(id = %dragon.id, name = %dragon.name, "Dragon stored");
        Ok(dragon)
    }

    async fn find_dragon_by_id(&self, id: &str) -> Result<Option<Dragon>> {
        Ok(self.dragons.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Dragon>> {
        let mut dragons: Vec<Dragon> = self
            .dragons
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        dragons.sort_by_key(|d| (d.id.parse::<u64>().unwrap_or(u64::MAX), d.id.clone()));
        Ok(dragons)
    }

    async fn delete_dragon(&self, id: &str) -> Result<bool> {
        Ok(self.dragons.remove(id).is_some())
    }

    async fn delete_all(&self) -> Result<()> {
        self.dragons.clear();
        self.next_id.store(FIRST_DRAGON_ID, Ordering::SeqCst);
        debug!("All dragons deleted");
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

/// Factory function for creating in-memory repository instances.
fn memory_dragon_repository_factory(
    _config: &DragonRepositoryConfig,
) -> std::result::Result<Arc<dyn DragonRepository>, String> {
    Ok(Arc::new(MemoryDragonRepository::new()))
}

#[linkme::distributed_slice(DRAGON_REPOSITORIES)]
static MEMORY_REPOSITORY: DragonRepositoryEntry = DragonRepositoryEntry {
    name: "memory",
    description: "In-memory dragon repository (fast, non-persistent)",
    factory: memory_dragon_repository_factory,
};
