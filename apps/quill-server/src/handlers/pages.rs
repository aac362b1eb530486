//! Public pages: the post listing, about and contact.

use actix_web::{HttpResponse, http::StatusCode, web};

use quill_core::domain::ContactMessage;
use quill_shared::dto::ContactForm;

use crate::middleware::error::AppResult;
use crate::middleware::session::Visitor;
use crate::state::AppState;
use crate::views::{self, View};

/// GET /
pub async fn home(state: web::Data<AppState>, visitor: Visitor) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;

    Ok(views::page(
        StatusCode::OK,
        &View::Index { posts: &posts },
        &visitor.current,
    ))
}

/// GET /about
pub async fn about(visitor: Visitor) -> HttpResponse {
    views::page(StatusCode::OK, &View::About, &visitor.current)
}

/// GET /contact
pub async fn contact_form(visitor: Visitor) -> HttpResponse {
    views::page(
        StatusCode::OK,
        &View::Contact {
            form: &ContactForm::default(),
            errors: &[],
            received: false,
        },
        &visitor.current,
    )
}

/// POST /contact
pub async fn contact_submit(
    state: web::Data<AppState>,
    visitor: Visitor,
    form: web::Form<ContactForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(views::page(
            StatusCode::UNPROCESSABLE_ENTITY,
            &View::Contact {
                form: &form,
                errors: &errors,
                received: false,
            },
            &visitor.current,
        ));
    }

    state
        .inbox
        .contact(ContactMessage {
            name: form.name,
            email: form.email,
            phone: form.phone,
            message: form.message,
        })
        .await?;

    Ok(views::page(
        StatusCode::OK,
        &View::Contact {
            form: &ContactForm::default(),
            errors: &[],
            received: true,
        },
        &visitor.current,
    ))
}
