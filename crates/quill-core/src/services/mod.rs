//! Application services - the operations exposed to the web layer.

mod auth;
mod gate;
mod inbox;
mod posts;

pub use auth::{AuthManager, Authenticated, RegisterUser};
pub use gate::require_admin;
pub use inbox::InboxService;
pub use posts::PostService;
