use std::str::FromStr;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on draining the pool after the listener stops (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// SQLite connection URL (default: `sqlite://flickfinder.db`).
    pub database_url: String,
    /// Pool size (default: `20`).
    pub database_max_connections: u32,
    /// Apply embedded migrations at startup (default: `true`).
    pub run_migrations: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`    | `30`                       |
    /// | `DATABASE_URL`             | `sqlite://flickfinder.db`  |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                       |
    /// | `RUN_MIGRATIONS`           | `true`                     |
    ///
    /// Panics on a value that does not parse.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://flickfinder.db".into());

        Self {
            host,
            port: env_or("PORT", 3000),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: env_or("SHUTDOWN_TIMEOUT_SECS", 30),
            database_url,
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 20),
            run_migrations: env_or("RUN_MIGRATIONS", true),
        }
    }
}

/// Read and parse `name`, falling back to `default` when unset.
fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            panic!("{name} must be a valid {}: {e}", std::any::type_name::<T>())
        }),
        Err(_) => default,
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
