/// The `config` module provides site configuration and project layout
pub mod config;

/// The `error` module provides error handling
pub mod error;
