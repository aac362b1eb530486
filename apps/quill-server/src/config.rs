//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use chrono::TimeDelta;
use quill_infra::{Argon2Config, JwtConfig};

#[cfg(feature = "db")]
use quill_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "db")]
    pub database: Option<DatabaseConfig>,
    pub run_migrations: bool,
    pub session: SessionConfig,
    pub password_hashing: Argon2Config,
}

/// Session cookie and token settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub jwt: JwtConfig,
    pub ttl: TimeDelta,
    pub cookie_secure: bool,
}

fn parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn flag(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0" | "no"))
        .unwrap_or(default)
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        #[cfg(feature = "db")]
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parsed("DB_MAX_CONNECTIONS", 10),
            min_connections: parsed("DB_MIN_CONNECTIONS", 1),
        });

        let jwt_defaults = JwtConfig::default();
        let hashing_defaults = Argon2Config::default();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parsed("PORT", 8080),
            #[cfg(feature = "db")]
            database,
            run_migrations: flag("RUN_MIGRATIONS", true),
            session: SessionConfig {
                jwt: JwtConfig {
                    secret: env::var("SESSION_SECRET").unwrap_or(jwt_defaults.secret),
                    issuer: env::var("SESSION_ISSUER").unwrap_or(jwt_defaults.issuer),
                },
                ttl: TimeDelta::hours(parsed("SESSION_TTL_HOURS", 24)),
                cookie_secure: flag("COOKIE_SECURE", false),
            },
            password_hashing: Argon2Config {
                memory_kib: parsed("PASSWORD_HASH_MEMORY_KIB", hashing_defaults.memory_kib),
                iterations: parsed("PASSWORD_HASH_ITERATIONS", hashing_defaults.iterations),
                parallelism: parsed("PASSWORD_HASH_PARALLELISM", hashing_defaults.parallelism),
            },
        }
    }
}
