//! # Quill Core
//!
//! The domain layer of the Quill blog.
//! Pure business logic (accounts, sessions, the admin gate, post lifecycle)
//! written against ports, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
