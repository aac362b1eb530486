//! Relational storage via SeaORM (PostgreSQL or SQLite).

mod connections;
pub mod entity;
mod errors;
mod seaorm_base;
mod seaorm_repo;

pub use connections::{DatabaseConfig, connect};
pub use seaorm_base::SeaOrmBaseRepository;
pub use seaorm_repo::{SeaOrmPostRepository, SeaOrmUserRepository};
