//! Observability module
//!
//! - Metrics collection and Prometheus rendering
//! - Structured logging of dispatch events

pub mod metrics_collector;
pub mod structured_logger;
pub mod telemetry_setup;

// Re-export main types for convenience
pub use metrics_collector::MetricsCollector;
pub use structured_logger::StructuredLogger;
pub use telemetry_setup::init_metrics;
