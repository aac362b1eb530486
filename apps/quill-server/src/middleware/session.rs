//! Session cookie handling and the per-request identity extractor.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;

use quill_core::domain::CurrentUser;

use crate::state::AppState;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "quill_session";

/// The acting identity of the request, resolved from the session cookie.
///
/// Extraction never fails for visitors: a missing or stale cookie simply
/// yields `CurrentUser::Anonymous`. The resolved identity is also stored in
/// the request extensions for error pages.
/// ```ignore
/// async fn page(visitor: Visitor) -> impl Responder {
///     if visitor.current.is_admin() { /* ... */ }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Visitor {
    pub current: CurrentUser,
    token: Option<String>,
}

impl Visitor {
    /// Raw session token presented by the browser, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl FromRequest for Visitor {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = req.cookie(SESSION_COOKIE).map(|c| c.value().to_string());
        let req = req.clone();

        Box::pin(async move {
            let Some(state) = state else {
                tracing::error!("AppState not found in app data");
                return Err(actix_web::error::ErrorInternalServerError(
                    "Server configuration error",
                ));
            };

            let current = state.auth.current_user(token.as_deref()).await;
            req.extensions_mut().insert(current.clone());
            Ok(Visitor { current, token })
        })
    }
}

/// Cookie handing a fresh session token to the browser.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .finish()
}

/// Cookie that clears the session token.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_flags() {
        let cookie = session_cookie("tok".to_string(), true);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn test_removal_cookie_is_empty() {
        let cookie = removal_cookie();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.path(), Some("/"));
    }
}
