//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// HMAC secret used to sign bearer tokens.
    pub secret: String,
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
    #[serde(default = "default_db_pool_size")]
    pub db_pool_size: u32,
    /// Upper bound on waiting for a pooled connection.
    #[serde(default = "default_db_timeout_secs")]
    pub db_connection_timeout_secs: u64,
    /// Upper bound on waiting for a locked database.
    #[serde(default = "default_db_timeout_secs")]
    pub db_busy_timeout_secs: u64,
}

fn default_token_ttl_hours() -> i64 {
    24
}

fn default_db_pool_size() -> u32 {
    10
}

fn default_db_timeout_secs() -> u64 {
    30
}
