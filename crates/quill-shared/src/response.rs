//! What an error page shows.

/// Status line and explanation rendered on an error page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    pub status: u16,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl ErrorPage {
    fn new(status: u16, title: &'static str, detail: Option<String>) -> Self {
        Self {
            status,
            title,
            detail,
        }
    }

    /// A submission the blog refused, with the reason shown to the visitor.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::new(400, "Bad Request", Some(reason.into()))
    }

    pub fn login_required() -> Self {
        Self::new(401, "Login Required", Some("Please log in to continue.".to_string()))
    }

    pub fn forbidden() -> Self {
        Self::new(
            403,
            "Forbidden",
            Some("Only the blog's admin can do that.".to_string()),
        )
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::new(404, "Not Found", Some(what.into()))
    }

    /// Internal details stay in the logs.
    pub fn internal() -> Self {
        Self::new(500, "Internal Server Error", None)
    }
}
