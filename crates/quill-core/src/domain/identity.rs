use super::User;

/// The acting identity of a request.
///
/// Resolved once per request from the session token and passed explicitly to
/// every handler and view. Anonymous is a normal state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CurrentUser {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl CurrentUser {
    pub fn user(&self) -> Option<&User> {
        match self {
            CurrentUser::Anonymous => None,
            CurrentUser::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(User::is_admin)
    }
}
