//! Configuration types module

pub mod app;
pub mod http;
pub mod logging;
pub mod validation;

// Re-export main types
pub use app::AppConfig;
pub use http::HttpConfig;
pub use logging::LoggingConfig;
pub use validation::ValidationConfig;
