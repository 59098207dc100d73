/// Database connection and schema bootstrap
pub mod database;

/// Server settings from config.toml and environment variables
pub mod settings;
