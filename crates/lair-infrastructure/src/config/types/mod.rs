//! Configuration types module

pub mod app;
pub mod injector;
pub mod logging;
pub mod repository;

// Re-export main types
pub use app::AppConfig;
pub use injector::InjectorConfig;
pub use logging::LoggingConfig;
pub use repository::RepositoryConfig;
