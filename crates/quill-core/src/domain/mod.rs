//! Domain entities - the core business objects.

mod identity;
mod message;
mod post;
mod session;
mod user;

pub use identity::CurrentUser;
pub use message::{Comment, ContactMessage};
pub use post::{NewPost, Post, PostDraft, PostId};
pub use session::Session;
pub use user::{ADMIN_USER_ID, NewUser, User, UserId, mask_email};
