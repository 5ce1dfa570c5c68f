pub mod analytics;
pub mod config;
pub mod error;

pub use analytics::CustomerAnalytics;
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
