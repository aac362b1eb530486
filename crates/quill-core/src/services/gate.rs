//! Authorization gate for post mutations.

use crate::domain::{CurrentUser, User};
use crate::error::DomainError;

/// Allow only the admin through.
///
/// Call this first in every privileged operation, before any lookup or
/// write. Anonymous visitors and signed-in non-admins are both rejected
/// with `DomainError::Forbidden`.
pub fn require_admin(current: &CurrentUser) -> Result<&User, DomainError> {
    match current.user() {
        Some(user) if user.is_admin() => Ok(user),
        Some(user) => {
            tracing::warn!(user_id = user.id, "Admin gate rejected signed-in user");
            Err(DomainError::Forbidden)
        }
        None => {
            tracing::warn!("Admin gate rejected anonymous visitor");
            Err(DomainError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ADMIN_USER_ID;

    fn signed_in(id: i32) -> CurrentUser {
        CurrentUser::Authenticated(User {
            id,
            email: format!("u{id}@example.com"),
            name: format!("User {id}"),
            password_hash: "hash".to_string(),
        })
    }

    #[test]
    fn test_admin_passes() {
        let current = signed_in(ADMIN_USER_ID);
        let user = require_admin(&current).unwrap();
        assert_eq!(user.id, ADMIN_USER_ID);
    }

    #[test]
    fn test_non_admin_forbidden() {
        let current = signed_in(2);
        let result = require_admin(&current);
        assert!(matches!(result, Err(DomainError::Forbidden)));
    }

    #[test]
    fn test_anonymous_forbidden() {
        let result = require_admin(&CurrentUser::Anonymous);
        assert!(matches!(result, Err(DomainError::Forbidden)));
    }
}
