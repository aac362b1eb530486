//! Registration, login and logout.

use actix_web::{HttpResponse, http::StatusCode, web};

use quill_core::ports::AuthError;
use quill_core::services::{Authenticated, RegisterUser};
use quill_shared::dto::{LoginForm, RegisterForm};

use super::see_other;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::session::{Visitor, removal_cookie, session_cookie};
use crate::state::AppState;
use crate::views::{self, View};

fn signed_in(state: &AppState, session: Authenticated) -> HttpResponse {
    let mut response = see_other("/");
    if let Err(e) = response.add_cookie(&session_cookie(session.token, state.cookie_secure)) {
        tracing::error!(error = %e, "Failed to set session cookie");
    }
    response
}

fn register_page(status: StatusCode, form: &RegisterForm, errors: &[String], visitor: &Visitor) -> HttpResponse {
    views::page(status, &View::Register { form, errors }, &visitor.current)
}

fn login_page(status: StatusCode, form: &LoginForm, errors: &[String], visitor: &Visitor) -> HttpResponse {
    views::page(status, &View::Login { form, errors }, &visitor.current)
}

/// GET /register
pub async fn register_form(visitor: Visitor) -> HttpResponse {
    register_page(StatusCode::OK, &RegisterForm::default(), &[], &visitor)
}

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    visitor: Visitor,
    form: web::Form<RegisterForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(register_page(StatusCode::UNPROCESSABLE_ENTITY, &form, &errors, &visitor));
    }

    let result = state
        .auth
        .register(RegisterUser {
            email: form.email.clone(),
            name: form.name.clone(),
            password: form.password.clone(),
        })
        .await;

    match result {
        Ok(session) => Ok(signed_in(&state, session)),
        Err(AuthError::EmailExists) => {
            let errors = ["You've already signed up with that email, log in instead!".to_string()];
            Ok(register_page(StatusCode::CONFLICT, &form, &errors, &visitor))
        }
        Err(e) => Err(AppError::Internal(e.to_string())),
    }
}

/// GET /login
pub async fn login_form(visitor: Visitor) -> HttpResponse {
    login_page(StatusCode::OK, &LoginForm::default(), &[], &visitor)
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    visitor: Visitor,
    form: web::Form<LoginForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(login_page(StatusCode::UNPROCESSABLE_ENTITY, &form, &errors, &visitor));
    }

    // The two failure messages differ on purpose; this does reveal which
    // emails have accounts.
    let message = match state.auth.login(&form.email, &form.password).await {
        Ok(session) => return Ok(signed_in(&state, session)),
        Err(AuthError::NoSuchEmail) => "That email does not exist, please try again.",
        Err(AuthError::WrongPassword) => "Password incorrect, please try again.",
        Err(e) => return Err(AppError::Internal(e.to_string())),
    };

    Ok(login_page(
        StatusCode::UNAUTHORIZED,
        &form,
        &[message.to_string()],
        &visitor,
    ))
}

/// GET /logout
pub async fn logout(state: web::Data<AppState>, visitor: Visitor) -> HttpResponse {
    state.auth.logout(visitor.token()).await;

    let mut response = see_other("/");
    if let Err(e) = response.add_cookie(&removal_cookie()) {
        tracing::error!(error = %e, "Failed to clear session cookie");
    }
    response
}
