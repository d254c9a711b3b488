// src/config.rs

use dotenvy::dotenv;
use sqlx::mysql::{MySqlConnectOptions, MySqlSslMode};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    /// Path to a CA certificate for the database connection. TLS is only
    /// enabled when this is set.
    pub db_ssl_ca: Option<String>,
    pub db_pool_size: u32,
    pub db_acquire_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let db_host = env::var("DB_HOST").expect("DB_HOST must be set");

        let db_port = env::var("DB_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3306);

        let db_user = env::var("DB_USER").expect("DB_USER must be set");

        let db_password = env::var("DB_PASSWORD").expect("DB_PASSWORD must be set");

        let db_name = env::var("DB_NAME").expect("DB_NAME must be set");

        let db_ssl_ca = env::var("DB_SSL_CA").ok().filter(|v| !v.is_empty());

        let db_pool_size = env::var("DB_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3001);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            db_host,
            db_port,
            db_user,
            db_password,
            db_name,
            db_ssl_ca,
            db_pool_size,
            db_acquire_timeout_secs,
            port,
            rust_log,
        }
    }

    /// Connection options for the MySQL pool, with TLS verification when a CA
    /// certificate is configured.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let mut options = MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name);

        if let Some(ca) = &self.db_ssl_ca {
            options = options.ssl_mode(MySqlSslMode::VerifyCa).ssl_ca(ca);
        }

        options
    }
}
