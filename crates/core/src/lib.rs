// Dataset I/O Core - Domain Types, Ports & I/O Plugins
// NO infrastructure dependencies (Hexagonal Architecture)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{IoError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
