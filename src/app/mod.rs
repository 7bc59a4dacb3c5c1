//! Application-level settings

mod config;

pub use config::{Config, ConfigError};
