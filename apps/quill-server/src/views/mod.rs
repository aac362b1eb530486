//! Server-rendered HTML.
//!
//! A [`View`] names a page and carries its data; [`render`] turns it into a
//! full document for the acting identity. Templates are `maud` markup, so
//! interpolated values are escaped; only `Post::body`, stored sanitized, is
//! emitted as is.

mod layout;
mod pages;

use actix_web::{HttpResponse, http::StatusCode, http::header::ContentType};

use quill_core::domain::{CurrentUser, Post, PostId};
use quill_shared::ErrorPage;
use quill_shared::dto::{CommentForm, ContactForm, LoginForm, PostForm, RegisterForm};

/// A page and the data it needs.
#[derive(Debug)]
pub enum View<'a> {
    Index {
        posts: &'a [Post],
    },
    Post {
        post: &'a Post,
        comment: &'a CommentForm,
        errors: &'a [String],
        comment_received: bool,
    },
    About,
    Contact {
        form: &'a ContactForm,
        errors: &'a [String],
        received: bool,
    },
    Register {
        form: &'a RegisterForm,
        errors: &'a [String],
    },
    Login {
        form: &'a LoginForm,
        errors: &'a [String],
    },
    MakePost {
        form: &'a PostForm,
        errors: &'a [String],
        editing: Option<PostId>,
    },
    Error {
        problem: &'a ErrorPage,
    },
}

impl View<'_> {
    /// Template name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            View::Index { .. } => "index",
            View::Post { .. } => "post",
            View::About => "about",
            View::Contact { .. } => "contact",
            View::Register { .. } => "register",
            View::Login { .. } => "login",
            View::MakePost { .. } => "make-post",
            View::Error { .. } => "error",
        }
    }
}

/// Render `view` as a complete HTML document.
pub fn render(view: &View<'_>, current: &CurrentUser) -> String {
    let (title, content) = match view {
        View::Index { posts } => ("Quill".to_string(), pages::index(posts, current)),
        View::Post {
            post,
            comment,
            errors,
            comment_received,
        } => (
            post.title.clone(),
            pages::post(post, comment, errors, *comment_received, current),
        ),
        View::About => ("About".to_string(), pages::about()),
        View::Contact {
            form,
            errors,
            received,
        } => ("Contact".to_string(), pages::contact(form, errors, *received)),
        View::Register { form, errors } => ("Register".to_string(), pages::register(form, errors)),
        View::Login { form, errors } => ("Log In".to_string(), pages::login(form, errors)),
        View::MakePost {
            form,
            errors,
            editing,
        } => {
            let title = if editing.is_some() { "Edit Post" } else { "New Post" };
            (title.to_string(), pages::make_post(form, errors, *editing))
        }
        View::Error { problem } => (problem.title.to_string(), pages::error(problem)),
    };

    layout::document(&title, current, content).into_string()
}

/// Render `view` into an HTML response with `status`.
pub fn page(status: StatusCode, view: &View<'_>, current: &CurrentUser) -> HttpResponse {
    tracing::debug!(view = view.name(), status = status.as_u16(), "Rendering view");

    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(render(view, current))
}
