//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! storage, password hashing, session tokens, sanitization and logging sinks.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory stores only
//! - `db` - PostgreSQL/SQLite storage via SeaORM
//! - `auth` - JWT session tokens + Argon2 password hashing

pub mod memory;
pub mod messages;
pub mod sanitize;
pub mod session;

#[cfg(feature = "db")]
pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use memory::{InMemoryPostRepository, InMemoryUserRepository};
pub use messages::LogMessageSink;
pub use sanitize::AmmoniaSanitizer;
pub use session::InMemorySessionStore;

#[cfg(feature = "auth")]
pub use auth::{Argon2Config, Argon2PasswordService, JwtConfig, JwtTokenService};

#[cfg(feature = "db")]
pub use database::{DatabaseConfig, SeaOrmPostRepository, SeaOrmUserRepository};
