// Lineup Core - Queue allocation & mutation engine
// NO terminal, NO file access - only pure logic and ports

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
