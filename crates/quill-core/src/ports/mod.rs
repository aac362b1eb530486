//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod messages;
mod repository;
mod sanitizer;

pub use auth::{AuthError, PasswordService, SessionClaims, SessionStore, TokenService};
pub use messages::MessageSink;
pub use repository::{BaseRepository, PostRepository, UserRepository};
pub use sanitizer::HtmlSanitizer;
