pub mod accounts;
pub mod api_observability;
pub mod app_config;
pub mod dispatcher;
pub mod sandbox;

// Re-export main types for easier imports
pub use accounts::AccountConfig;
pub use api_observability::{ApiConfig, LogFormat, ObservabilityConfig};
pub use app_config::AppConfig;
pub use dispatcher::DispatcherConfig;
pub use sandbox::SandboxConfig;
