use serde::{Deserialize, Serialize};

pub type UserId = i32;

/// The bootstrap identity. The first account ever registered receives this id
/// and is the only one allowed to publish, edit or delete posts.
pub const ADMIN_USER_ID: UserId = 1;

/// User entity - a registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.id == ADMIN_USER_ID
    }
}

/// Insert payload for a user; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

/// Mask an email for logging: `jane@example.com` becomes `j***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{first}***"),
                _ => "***".to_string(),
            };
            format!("{masked_local}{domain}")
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane@example.com"), "j***@example.com");
        assert_eq!(mask_email("j@example.com"), "***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }

    fn user(id: UserId) -> User {
        User {
            id,
            email: format!("user{id}@example.com"),
            name: "User".to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[test]
    fn test_only_bootstrap_id_is_admin() {
        assert!(user(1).is_admin());
        assert!(!user(2).is_admin());
        assert!(!user(0).is_admin());
    }
}
