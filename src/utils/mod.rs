// Tue Feb 10 2026 - Alex

pub mod logging;

pub use logging::{init_from_env, init_logger, LoggingUtils};
