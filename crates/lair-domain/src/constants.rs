//! Domain layer constants
//!
//! Contains constants shared by every layer that touches dragons.
//! Infrastructure-specific constants remain in `lair_infrastructure::constants`.

// ============================================================================
// INJECTOR KEYS
// ============================================================================

/// Injector key under which the dragon repository is registered
pub const DRAGON_REPOSITORY: &str = "dragonRepository";

// ============================================================================
// REPOSITORY CONSTANTS
// ============================================================================

/// Repository backend used when configuration does not name one
pub const DEFAULT_DRAGON_REPOSITORY_PROVIDER: &str = "memory";

/// First id handed out by a freshly created or cleared repository
pub const FIRST_DRAGON_ID: u64 = 1;
