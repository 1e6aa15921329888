pub mod config;
pub mod error;
pub mod format;
pub mod types;

pub use config::Config;
pub use error::NpccError;
pub use format::*;
pub use types::*;
