//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{HtmlSanitizer, PostRepository, UserRepository};
use quill_core::services::{AuthManager, InboxService, PostService};
use quill_infra::{
    AmmoniaSanitizer, Argon2Config, Argon2PasswordService, InMemoryPostRepository,
    InMemorySessionStore, InMemoryUserRepository, JwtTokenService, LogMessageSink,
};

use crate::config::{AppConfig, SessionConfig};

#[cfg(feature = "db")]
use anyhow::Context;
#[cfg(feature = "db")]
use migration::{Migrator, MigratorTrait};
#[cfg(feature = "db")]
use quill_infra::{SeaOrmPostRepository, SeaOrmUserRepository};

type Repositories = (Arc<dyn UserRepository>, Arc<dyn PostRepository>);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthManager>,
    pub posts: Arc<PostService>,
    pub inbox: Arc<InboxService>,
    pub cookie_secure: bool,
}

impl AppState {
    /// Build the application state with the configured store.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let repositories = Self::repositories(config).await?;
        let state = Self::assemble(repositories, &config.session, config.password_hashing)?;

        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// State backed entirely by in-memory stores.
    pub fn in_memory(session: &SessionConfig, hashing: Argon2Config) -> anyhow::Result<Self> {
        Self::assemble(in_memory_repositories(), session, hashing)
    }

    fn assemble(
        (users, posts): Repositories,
        session: &SessionConfig,
        hashing: Argon2Config,
    ) -> anyhow::Result<Self> {
        let sanitizer: Arc<dyn HtmlSanitizer> = Arc::new(AmmoniaSanitizer::new());

        let auth = AuthManager::new(
            users,
            Arc::new(Argon2PasswordService::new(hashing)?),
            Arc::new(JwtTokenService::new(session.jwt.clone())),
            Arc::new(InMemorySessionStore::new()),
            session.ttl,
        );

        Ok(Self {
            auth: Arc::new(auth),
            posts: Arc::new(PostService::new(posts.clone(), sanitizer.clone())),
            inbox: Arc::new(InboxService::new(
                Arc::new(LogMessageSink),
                posts,
                sanitizer,
            )),
            cookie_secure: session.cookie_secure,
        })
    }

    #[cfg(feature = "db")]
    async fn repositories(config: &AppConfig) -> anyhow::Result<Repositories> {
        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(in_memory_repositories());
        };

        let conn = quill_infra::database::connect(db_config)
            .await
            .context("failed to connect to database")?;

        if config.run_migrations {
            Migrator::up(&conn, None)
                .await
                .context("failed to run migrations")?;
            tracing::info!("Migrations applied");
        }

        let conn = Arc::new(conn);
        Ok((
            Arc::new(SeaOrmUserRepository::new(conn.clone())),
            Arc::new(SeaOrmPostRepository::new(conn)),
        ))
    }

    #[cfg(not(feature = "db"))]
    async fn repositories(_config: &AppConfig) -> anyhow::Result<Repositories> {
        tracing::info!("Running without db feature - using in-memory repositories");
        Ok(in_memory_repositories())
    }
}

fn in_memory_repositories() -> Repositories {
    (
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryPostRepository::new()),
    )
}
