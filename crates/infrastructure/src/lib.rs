pub mod account_registry;
pub mod in_memory_directory;
pub mod observability;

pub use account_registry::ConfigAccountRegistry;
pub use in_memory_directory::InMemoryDirectory;
pub use observability::*;
