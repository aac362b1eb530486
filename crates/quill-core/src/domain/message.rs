use serde::{Deserialize, Serialize};

use super::{PostId, UserId};

/// A contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A reader comment on a post. `body` is sanitized HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub post_id: PostId,
    pub author_id: UserId,
    pub body: String,
}
