pub mod dispatch;
pub mod health;
pub mod metrics;
pub mod workers;
